use goalstride::data::{AppData, default_goals};
use goalstride::state::AppState;
use goalstride::{router, storage};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = storage::resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let mut goals = storage::load_goals(&data_dir).await;
    if goals.is_empty() {
        goals = default_goals();
        storage::save_goals(&data_dir, &goals)
            .await
            .map_err(|err| err.message)?;
        info!("seeded {} default goals", goals.len());
    }
    let logs = storage::load_logs(&data_dir).await;
    let state = AppState::new(data_dir, AppData::from_parts(goals, logs));

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
