mod common;
mod system;

pub use common::CommonClipboardImpl;
pub use system::SystemClipboard;
