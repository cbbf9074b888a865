//! Input limits for organism records

/// Maximum length for organism names (19 chars)
pub const MAX_ORGANISM_NAME_LEN: usize = 19;

/// Cap an organism name at [`MAX_ORGANISM_NAME_LEN`] characters.
///
/// Cuts on a character boundary, so multi-byte names stay valid UTF-8.
/// Returns the name unchanged when it already fits.
pub fn cap_organism_name(name: impl Into<String>) -> String {
    let mut name = name.into();
    if let Some((cut, _)) = name.char_indices().nth(MAX_ORGANISM_NAME_LEN) {
        tracing::warn!(
            "Organism name '{}' exceeds {} chars, truncating",
            name,
            MAX_ORGANISM_NAME_LEN
        );
        name.truncate(cut);
    }
    name
}
