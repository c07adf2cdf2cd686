mod clear_history;
mod delete_clipboard_entry;
mod history_capacity;
mod list_clipboard_entries;

pub use clear_history::ClearHistoryUseCase;
pub use delete_clipboard_entry::DeleteClipboardEntry;
pub use history_capacity::HistoryCapacityUseCase;
pub use list_clipboard_entries::{GetClipboardEntry, ListClipboardEntries, SearchClipboardEntries};
