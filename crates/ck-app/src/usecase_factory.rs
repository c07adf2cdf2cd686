//! Use case accessor
//!
//! Builds use cases from [`AppDeps`] on demand. Each accessor is cheap: it
//! only clones the `Arc`s the use case needs.

use crate::deps::AppDeps;
use crate::usecases::*;

pub struct AppUseCases {
    deps: AppDeps,
}

impl AppUseCases {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn capture_clipboard(&self) -> CaptureClipboardUseCase {
        CaptureClipboardUseCase::new(self.deps.store.clone())
    }

    pub fn copy_to_clipboard(&self) -> CopyToClipboardUseCase {
        CopyToClipboardUseCase::new(self.deps.clipboard.clone(), self.deps.paste.clone())
    }

    pub fn touch_entry(&self) -> TouchClipboardEntryUseCase {
        TouchClipboardEntryUseCase::new(self.deps.store.clone())
    }

    pub fn list_entries(&self) -> ListClipboardEntries {
        ListClipboardEntries::new(self.deps.store.clone())
    }

    pub fn search_entries(&self) -> SearchClipboardEntries {
        SearchClipboardEntries::new(self.deps.store.clone())
    }

    pub fn get_entry(&self) -> GetClipboardEntry {
        GetClipboardEntry::new(self.deps.store.clone())
    }

    pub fn delete_entry(&self) -> DeleteClipboardEntry {
        DeleteClipboardEntry::new(self.deps.store.clone())
    }

    pub fn clear_history(&self) -> ClearHistoryUseCase {
        ClearHistoryUseCase::new(self.deps.store.clone())
    }

    pub fn history_capacity(&self) -> HistoryCapacityUseCase {
        HistoryCapacityUseCase::new(self.deps.store.clone())
    }
}
