//! Key-mapping synthesis
//!
//! A [`KeyMapping`] pairs each stored-member name with the wire key produced
//! by a [`NamingStyle`]. Entries keep declaration order, and identity entries
//! (where the wire key equals the name) are retained so downstream renderers
//! can decide how to emit them.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::style::NamingStyle;

/// One member-to-wire-key association
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    /// Original member name
    pub name: String,
    /// Wire key the member serializes under
    pub wire_key: String,
}

impl KeyEntry {
    /// Whether the wire key differs from the member name
    ///
    /// Identity entries need no explicit override in rendered output.
    pub fn is_remapped(&self) -> bool {
        self.name != self.wire_key
    }
}

/// An ordered member-name to wire-key mapping for one type declaration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMapping {
    style: NamingStyle,
    entries: Vec<KeyEntry>,
}

impl KeyMapping {
    /// Synthesize a mapping by applying `style` to each name in order
    ///
    /// Wire-key collisions do not abort synthesis; they are logged at warn
    /// level here and surfaced as hard errors by [`check_collisions`]
    /// (`KeyMapping::check_collisions`) when a caller needs to reject the
    /// mapping.
    pub fn synthesize(names: &[String], style: NamingStyle) -> Self {
        let entries = names
            .iter()
            .map(|name| KeyEntry {
                name: name.clone(),
                wire_key: style.apply(name),
            })
            .collect();

        let mapping = Self { style, entries };
        if let Err(e) = mapping.check_collisions() {
            tracing::warn!("synthesized mapping contains a collision: {}", e);
        }
        mapping
    }

    /// Style the mapping was synthesized with
    pub fn style(&self) -> NamingStyle {
        self.style
    }

    /// All entries in declaration order, identity entries included
    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    /// Entries whose wire key differs from the member name
    pub fn remapped(&self) -> impl Iterator<Item = &KeyEntry> {
        self.entries.iter().filter(|entry| entry.is_remapped())
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reject mappings where two distinct members share a wire key
    ///
    /// Returns the first collision in declaration order. Styles that discard
    /// case (for example `lowercase`) can fold `Status` and `status` onto the
    /// same key, which would silently drop a member on the wire.
    pub fn check_collisions(&self) -> Result<(), GenerateError> {
        for (i, entry) in self.entries.iter().enumerate() {
            for earlier in &self.entries[..i] {
                if earlier.wire_key == entry.wire_key && earlier.name != entry.name {
                    return Err(GenerateError::KeyCollision {
                        wire_key: entry.wire_key.clone(),
                        first: earlier.name.clone(),
                        second: entry.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
