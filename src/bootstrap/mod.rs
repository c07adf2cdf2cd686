pub mod app;
pub mod config;
pub mod tracing;
pub mod wiring;

pub use app::{AppMode, ClipKeepApp};
pub use config::{load_config, resolve_config};
pub use self::tracing::init_tracing_subscriber;
