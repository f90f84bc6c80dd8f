use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every text comparison: trimmed, NFD-decomposed,
/// combining marks removed, lowercased. `"  José "` and `"jose"` agree.
pub fn normalize(s: &str) -> String {
    let stripped: String = s.trim().nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_accents_case_and_padding() {
        assert_eq!(normalize("  José "), "jose");
        assert_eq!(normalize("ÅNGSTRÖM"), "angstrom");
        assert_eq!(normalize("Zoë-Ann"), "zoe-ann");
    }

    #[test]
    fn empty_and_blank_become_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n"), "");
    }

    #[test]
    fn precomposed_and_decomposed_agree() {
        assert_eq!(normalize("caf\u{e9}"), normalize("cafe\u{301}"));
    }
}
