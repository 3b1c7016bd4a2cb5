//! Idempotent registration of bundled font bytes.
//!
//! A tracing quiz typically ships one special-purpose font (a single-line
//! "stroke" font) rather than relying on whatever the host system has.
//! Registration here is explicit and idempotent: calling
//! [`ensure_registered`] twice for the same family is a no-op, because
//! idempotence is derived from the database state itself, not from a
//! registered-once flag. Bad font bytes are rejected with a clear error
//! before they ever reach the database.

use crate::font::{FontError, FontSystem};

/// Ensure a font family backed by `bytes` is present in `fonts`.
///
/// Returns `Ok(true)` when the data was loaded, `Ok(false)` when the family
/// was already present (nothing to do). The bytes are validated before
/// loading, and the family name is checked afterwards, so a successful
/// return always means the family is resolvable.
///
/// Errors:
/// - [`FontError::RegisterFailed`] when the bytes don't parse, contain no
///   faces, or don't carry the expected family name.
pub fn ensure_registered(
    fonts: &mut FontSystem,
    family: &str,
    bytes: &[u8],
) -> Result<bool, FontError> {
    if fonts.has_family(family) {
        return Ok(false);
    }

    let face_count = ttf_parser::fonts_in_collection(bytes).unwrap_or(1);
    if face_count == 0 {
        return Err(FontError::RegisterFailed {
            family: family.to_string(),
            reason: "font data contains no faces".to_string(),
        });
    }

    // Validate before loading: fontdb silently skips unparseable data.
    ttf_parser::Face::parse(bytes, 0).map_err(|e| FontError::RegisterFailed {
        family: family.to_string(),
        reason: format!("font data failed to parse: {e}"),
    })?;

    fonts.db_mut().load_font_data(bytes.to_vec());

    if !fonts.has_family(family) {
        return Err(FontError::RegisterFailed {
            family: family.to_string(),
            reason: "loaded font data does not provide this family".to_string(),
        });
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::empty();
        let err = ensure_registered(&mut fonts, "Nope", b"not a font").unwrap_err();
        assert!(matches!(err, FontError::RegisterFailed { .. }));
        assert_eq!(fonts.face_count(), 0);
    }

    #[test]
    fn empty_bytes_are_rejected() {
        let mut fonts = FontSystem::empty();
        assert!(ensure_registered(&mut fonts, "Nope", &[]).is_err());
    }
}
