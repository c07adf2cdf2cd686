//! ClipKeep application orchestration layer
//!
//! Use cases over the core ports, and the single core runtime loop that
//! serializes watcher captures and presentation requests.

pub mod app_paths;
pub mod deps;
pub mod runtime;
pub mod usecase_factory;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use runtime::{CoreError, CoreHandle, CoreNotification, CoreRequest, CoreRuntime};
pub use usecase_factory::AppUseCases;
