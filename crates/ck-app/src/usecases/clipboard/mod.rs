mod capture_clipboard;
mod copy_to_clipboard;
mod touch_clipboard_entry;

pub use capture_clipboard::CaptureClipboardUseCase;
pub use copy_to_clipboard::CopyToClipboardUseCase;
pub use touch_clipboard_entry::TouchClipboardEntryUseCase;
