//! Serialization key construct generation.
//!
//! This crate turns a type declaration into the source-level construct that
//! binds each stored member to its wire key, using the naming styles and
//! mapping synthesis from [`wirekey_core`].
//!
//! # Architecture
//!
//! Generation is a three-stage pipeline:
//!
//! ```text
//! TypeDecl
//!     ↓
//!  [Member Selector]      stored members only
//!     ↓
//!  [Mapping Synthesizer]  NamingStyle applied per name (wirekey-core)
//!     ↓
//!  [Renderer]             → CodingKeys enum source text
//! ```
//!
//! Each stage is usable on its own: callers that only need the
//! member-to-key association can stop at [`wirekey_core::KeyMapping`], and
//! callers with a ready mapping can invoke [`render_coding_keys`] directly.
//!
//! # Usage
//!
//! ```rust
//! use wirekey_codegen::{TypeDecl, generate_coding_keys};
//! use wirekey_core::{GeneratorConfig, Member, NamingStyle};
//!
//! let decl = TypeDecl::new(
//!     "User",
//!     vec![Member::stored("firstName"), Member::stored("age")],
//! );
//! let config = GeneratorConfig::with_style(NamingStyle::SnakeCase);
//!
//! let construct = generate_coding_keys(&decl, &config).unwrap().unwrap();
//! assert!(construct.contains("case firstName = \"first_name\""));
//! assert!(construct.contains("case age"));
//! ```
//!
//! Types with no stored members produce no construct at all ([`None`]), and
//! a style that folds two member names onto one wire key fails generation
//! with [`wirekey_core::GenerateError::KeyCollision`].

pub mod decl;
pub mod generate;
pub mod swift;

pub use decl::TypeDecl;
pub use generate::generate_coding_keys;
pub use swift::render_coding_keys;
