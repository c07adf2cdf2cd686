/// Default maximum length (in characters) of a text preview.
pub const DEFAULT_PREVIEW_MAX_CHARS: usize = 100;

/// Appended to a preview that was cut at the maximum length.
pub const TRUNCATION_MARKER: &str = "...";

/// Build the display preview of a text snapshot.
///
/// Whitespace runs (spaces, tabs, newlines) collapse to a single space,
/// surrounding whitespace is trimmed, and the result is cut to `max_chars`
/// characters with [`TRUNCATION_MARKER`] appended when anything was dropped.
///
/// 生成文本预览：折叠空白、去除首尾空白，超长时截断并追加省略标记。
pub fn text_preview(text: &str, max_chars: usize) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

    match cleaned.char_indices().nth(max_chars) {
        None => cleaned,
        Some((cut, _)) => {
            let mut preview = cleaned[..cut].to_string();
            preview.push_str(TRUNCATION_MARKER);
            preview
        }
    }
}
