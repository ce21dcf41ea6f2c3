pub mod app;
pub mod data;
pub mod errors;
pub mod handlers;
pub mod insight;
pub mod models;
pub mod stats;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_goals, load_logs, resolve_data_dir};
