use crate::data::{DailyLog, Goal};
use crate::errors::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const GOALS_FILE: &str = "goals.json";
pub const LOGS_FILE: &str = "logs.json";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

pub async fn load_goals(dir: &Path) -> Vec<Goal> {
    load_collection(&dir.join(GOALS_FILE)).await
}

pub async fn load_logs(dir: &Path) -> Vec<DailyLog> {
    load_collection(&dir.join(LOGS_FILE)).await
}

pub async fn save_goals(dir: &Path, goals: &[Goal]) -> Result<(), AppError> {
    save_collection(&dir.join(GOALS_FILE), goals).await
}

pub async fn save_logs(dir: &Path, logs: &[DailyLog]) -> Result<(), AppError> {
    save_collection(&dir.join(LOGS_FILE), logs).await
}

/// Absent or unreadable files yield an empty collection, never an error.
async fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            Vec::new()
        }
    }
}

async fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(items).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
