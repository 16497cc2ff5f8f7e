//! # wirekey
//!
//! Serialization key-mapping generation with configurable naming styles.
//!
//! wirekey takes a type declaration and produces the member-to-wire-key
//! mapping its serialized form should use, providing:
//! - Six naming styles, from identity through `snake_case` to HTTP header casing
//! - Stored-member selection that skips computed members
//! - Collision detection before any construct is emitted
//! - Rendering of the mapping as a Swift `CodingKeys` enum
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wirekey = "0.3"
//! ```
//!
//! ## Generating a Key Mapping
//!
//! ```rust
//! use wirekey::prelude::*;
//!
//! let decl = TypeDecl::new(
//!     "User",
//!     vec![
//!         Member::stored("firstName"),
//!         Member::stored("lastName"),
//!         Member::stored("age"),
//!     ],
//! );
//! let config = GeneratorConfig::with_style(NamingStyle::SnakeCase);
//!
//! let construct = generate_coding_keys(&decl, &config)?.unwrap();
//! assert!(construct.starts_with("enum CodingKeys: String, CodingKey {"));
//! assert!(construct.contains("case firstName = \"first_name\""));
//! assert!(construct.contains("case age"));
//! # Ok::<(), wirekey::GenerateError>(())
//! ```
//!
//! Styles can also come from configuration at runtime; unrecognized values
//! degrade to the original spelling with a warning:
//!
//! ```rust
//! use wirekey::{GeneratorConfig, NamingStyle};
//!
//! let config = GeneratorConfig::from_json(br#"{"style": "httpHeaderCase"}"#)?;
//! assert_eq!(config.style, NamingStyle::HttpHeaderCase);
//! # Ok::<(), wirekey::GenerateError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`wirekey_core`] - Naming styles, member selection, and mapping synthesis
//! - [`wirekey_codegen`] - Declaration input and construct rendering

// Re-export core types
pub use wirekey_core::{
    GenerateError, GenerateResult, GeneratorConfig, KeyEntry, KeyMapping, Member, NamingStyle,
    stored_names,
};

// Re-export generation entry points
pub use wirekey_codegen::{TypeDecl, generate_coding_keys, render_coding_keys};

// Re-export common dependencies that generator callers need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use wirekey::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Input types: `TypeDecl`, `Member`
/// - Mapping types: `KeyMapping`, `KeyEntry`, `NamingStyle`
/// - Generation: `generate_coding_keys`, `render_coding_keys`, `GeneratorConfig`
/// - Errors: `GenerateError`, `GenerateResult`
/// - Serde derives: `Serialize`, `Deserialize`
pub mod prelude {
    pub use crate::{
        GenerateError, GenerateResult, GeneratorConfig, KeyEntry, KeyMapping, Member, NamingStyle,
        TypeDecl, generate_coding_keys, render_coding_keys, stored_names,
    };

    // Serde derives (commonly needed for declaration types)
    pub use serde::{Deserialize, Serialize};
}
