mod core_runtime;
mod handle;
mod messages;

pub use core_runtime::{CoreRuntime, DEFAULT_REQUEST_BUFFER};
pub use handle::CoreHandle;
pub use messages::{CoreError, CoreNotification, CoreRequest, Reply};
