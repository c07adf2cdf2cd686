mod runtime;
mod watcher;

pub use runtime::PollingClipboardRuntime;
pub use watcher::ClipboardWatcher;
