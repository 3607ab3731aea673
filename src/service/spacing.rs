//! Spacing check against the canonical `<cc> <area> <local>` grouping.

/// Check that the caller's raw input is `[+][<calling code>[ ]]<area>[ ]<local>`.
///
/// Spaces are accepted only at the two group boundaries, and the calling code may be
/// left out entirely. The input is compared as typed, before any cleaning.
pub fn is_spacing_valid(
    input: &str,
    calling_code: &str,
    area_code: &str,
    local_number: &str,
) -> bool {
    let canonical_len = calling_code.len() + area_code.len() + local_number.len() + 2;

    let rest = input.strip_prefix('+').unwrap_or(input);
    if rest.starts_with(' ') || rest.len() > canonical_len {
        return false;
    }

    let rest = rest.strip_prefix(calling_code).unwrap_or(rest);
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let Some(rest) = rest.strip_prefix(area_code) else {
        return false;
    };
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let Some(rest) = rest.strip_prefix(local_number) else {
        return false;
    };
    rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::is_spacing_valid;

    fn us(input: &str) -> bool {
        is_spacing_valid(input, "1", "657", "3310806")
    }

    #[test]
    fn accepts_boundary_spacing_with_or_without_calling_code() {
        assert!(us("6573310806"));
        assert!(us("+6573310806"));
        assert!(us("16573310806"));
        assert!(us("1 657 3310806"));
        assert!(us("+1 657 3310806"));
        assert!(us("1 6573310806"));
        assert!(us("1657 3310806"));
        assert!(us("657 3310806"));
    }

    #[test]
    fn rejects_split_inside_a_group() {
        assert!(!us("657 331 0806"));
        assert!(!us("1 65 73310806"));
        assert!(!us("16 573310806"));
    }

    #[test]
    fn rejects_overlong_or_badly_led_input() {
        assert!(!us("6 5 7 3 3 1 0 8 0 6"));
        assert!(!us(" 6573310806"));
        assert!(!us("+ 1 657 3310806"));
        assert!(!us("1  657 3310806"));
    }

    #[test]
    fn rejects_trailing_or_foreign_characters() {
        assert!(!us("16573310806 "));
        assert!(!us("165733108069"));
        assert!(!us("1-657-331-0806"));
    }
}
