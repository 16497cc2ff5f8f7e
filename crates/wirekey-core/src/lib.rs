//! wirekey-core - Naming styles, member selection, and key-mapping synthesis
//!
//! This crate provides the foundational types for generating wire-key mappings:
//! - [`NamingStyle`] for the supported naming conventions
//! - [`Member`] records and [`stored_names`] eligibility selection
//! - [`KeyMapping`] synthesis with collision checking
//! - [`GenerateError`] for error handling
//! - [`GeneratorConfig`] for per-request configuration

mod config;
mod error;
mod mapping;
mod member;
mod style;
mod transform;

pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use mapping::{KeyEntry, KeyMapping};
pub use member::{Member, stored_names};
pub use style::NamingStyle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GenerateError, GenerateResult, GeneratorConfig, KeyEntry, KeyMapping, Member, NamingStyle,
        stored_names,
    };
}
