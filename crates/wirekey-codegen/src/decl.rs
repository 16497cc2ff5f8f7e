//! Type declaration input for generation.

use serde::{Deserialize, Serialize};
use wirekey_core::{Member, stored_names};

/// A host-language type declaration to generate keys for.
///
/// Carries the declared type name and its members in declaration order.
/// Construction is programmatic or via serde, mirroring how build tooling
/// hands declarations to the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declared type name, used for diagnostics.
    pub name: String,
    /// All members of the type, stored and computed alike.
    pub members: Vec<Member>,
}

impl TypeDecl {
    /// Create a declaration from a name and its members.
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Names of the stored members, in declaration order.
    pub fn stored_names(&self) -> Vec<String> {
        stored_names(&self.members)
    }
}
