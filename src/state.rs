use crate::data::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    /// Latest motivational insight; refreshed best-effort, last write wins.
    pub insight: Arc<Mutex<Option<String>>>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
            insight: Arc::new(Mutex::new(None)),
            http: reqwest::Client::new(),
        }
    }
}
