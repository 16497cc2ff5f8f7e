//! Generation driver tying selection, synthesis, and rendering together.

use wirekey_core::{GenerateResult, GeneratorConfig, KeyMapping};

use crate::decl::TypeDecl;
use crate::swift::render_coding_keys;

/// Generate the `CodingKeys` construct for one type declaration.
///
/// Selects the stored members, synthesizes the key mapping with the
/// configured style, and renders the construct. Returns `Ok(None)` when the
/// declaration has no stored members.
///
/// # Errors
///
/// Returns [`GenerateError::KeyCollision`](wirekey_core::GenerateError) when
/// two stored members map to the same wire key; a construct with duplicate
/// raw values would not compile in the host language.
pub fn generate_coding_keys(
    decl: &TypeDecl,
    config: &GeneratorConfig,
) -> GenerateResult<Option<String>> {
    let names = decl.stored_names();
    let mapping = KeyMapping::synthesize(&names, config.style);

    if let Err(e) = mapping.check_collisions() {
        tracing::error!("cannot generate coding keys for `{}`: {}", decl.name, e);
        return Err(e);
    }

    match render_coding_keys(&mapping) {
        Some(code) => Ok(Some(code)),
        None => {
            tracing::debug!("`{}` has no stored members, skipping CodingKeys", decl.name);
            Ok(None)
        }
    }
}
