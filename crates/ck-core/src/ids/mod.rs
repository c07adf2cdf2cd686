mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Opaque identifier of a captured clipboard snapshot.
///
/// 剪贴板快照的唯一标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(String);

impl_id!(SnapshotId);
