use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::image::PNG_DATA_URL_PREFIX;
use super::preview::text_preview;
use crate::ids::SnapshotId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot content must not be empty")]
    EmptyContent,

    #[error("image content is not a PNG data URL")]
    NotPngDataUrl,

    #[error("invalid image encoding: {0}")]
    InvalidImageEncoding(String),

    #[error("unknown snapshot kind: {0}")]
    UnknownKind(String),
}

/// What a snapshot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    Text,
    Image,
}

impl SnapshotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKind::Text => "text",
            SnapshotKind::Image => "image",
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SnapshotKind {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SnapshotKind::Text),
            "image" => Ok(SnapshotKind::Image),
            other => Err(SnapshotError::UnknownKind(other.to_string())),
        }
    }
}

/// One captured clipboard state.
///
/// 一次剪贴板捕获的快照。
///
/// `content` is the literal text for [`SnapshotKind::Text`] and a
/// `data:image/png;base64,` URL for [`SnapshotKind::Image`], so an entry can be
/// redisplayed and re-copied without reading the system clipboard again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: SnapshotId,
    pub kind: SnapshotKind,
    pub content: String,

    /// unix epoch millis
    pub captured_at: i64,

    /// Normalized display text, only for text snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    /// unix epoch millis of the last re-copy by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<i64>,
}

impl Snapshot {
    /// Create a text snapshot with a fresh id and its preview.
    pub fn text(
        content: impl Into<String>,
        captured_at: i64,
        preview_max_chars: usize,
    ) -> Result<Self, SnapshotError> {
        let content = content.into();
        if content.is_empty() {
            return Err(SnapshotError::EmptyContent);
        }

        Ok(Self {
            id: SnapshotId::new(),
            kind: SnapshotKind::Text,
            preview: Some(text_preview(&content, preview_max_chars)),
            content,
            captured_at,
            last_used_at: None,
        })
    }

    /// Create an image snapshot from an already encoded PNG data URL.
    pub fn image(data_url: impl Into<String>, captured_at: i64) -> Result<Self, SnapshotError> {
        let content = data_url.into();
        if content.is_empty() {
            return Err(SnapshotError::EmptyContent);
        }
        if !content.starts_with(PNG_DATA_URL_PREFIX) {
            return Err(SnapshotError::NotPngDataUrl);
        }

        Ok(Self {
            id: SnapshotId::new(),
            kind: SnapshotKind::Image,
            content,
            captured_at,
            preview: None,
            last_used_at: None,
        })
    }

    /// Replace the generated id, mainly for restoring or testing.
    pub fn with_id(mut self, id: SnapshotId) -> Self {
        self.id = id;
        self
    }

    /// Dedup identity: same kind and byte-for-byte equal content.
    pub fn same_content(&self, other: &Snapshot) -> bool {
        self.kind == other.kind && self.content == other.content
    }

    /// Case-insensitive substring match against text content.
    ///
    /// `lowered_query` must already be lowercase. Image snapshots never match.
    pub fn matches_lowered(&self, lowered_query: &str) -> bool {
        match self.kind {
            SnapshotKind::Text => self.content.to_lowercase().contains(lowered_query),
            SnapshotKind::Image => false,
        }
    }

    /// Whether the snapshot honours the content invariant.
    pub fn is_valid(&self) -> bool {
        !self.content.is_empty()
    }
}
