pub mod app;
pub mod app_state;
pub mod config;
pub mod db;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod modules;
pub mod reports;
pub mod session;
pub mod telemetry;

pub use app::create_router;
pub use app_state::AppState;
