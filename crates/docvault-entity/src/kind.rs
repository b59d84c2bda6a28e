//! Entry type discriminator for transport records.

use serde::{Deserialize, Serialize};

/// Discriminates folders from documents in serialized records.
///
/// Rendered as the `type` field of every transport record so that clients
/// can tell tree entries apart without inspecting their key sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    Document,
}
