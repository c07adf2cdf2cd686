pub mod history;
pub mod time;

pub use history::{
    FileHistoryStore, HistoryDocument, HistoryFileRepository, HistoryLock, HISTORY_FILE_NAME,
};
pub use time::SystemClock;
