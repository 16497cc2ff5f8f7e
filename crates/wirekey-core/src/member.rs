//! Type-member records and stored-member selection

use serde::{Deserialize, Serialize};

/// A single member of a serializable type declaration
///
/// Only stored members participate in serialization; computed members are
/// carried through the declaration but skipped by [`stored_names`]. Names are
/// expected to be non-empty ASCII identifiers as produced by a host-language
/// declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Declared member name, in its original spelling
    pub name: String,
    /// Whether the member is backed by storage (as opposed to computed)
    pub stored: bool,
}

impl Member {
    /// Construct a stored member
    pub fn stored(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stored: true,
        }
    }

    /// Construct a computed member, excluded from key mapping
    pub fn computed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stored: false,
        }
    }
}

/// Select the names of stored members, preserving declaration order
///
/// Computed members are filtered out. The result is empty when the
/// declaration has no stored members at all.
pub fn stored_names(members: &[Member]) -> Vec<String> {
    members
        .iter()
        .filter(|member| member.stored)
        .map(|member| member.name.clone())
        .collect()
}
