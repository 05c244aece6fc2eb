use regex::Regex;

/// Build the matcher recognising revved versions of `basename`.
///
/// A revved file carries a hexadecimal token followed by a dot in front of the original name,
/// e.g. `9f8a.style.css` for `style.css`. The basename is escaped so names containing regex
/// metacharacters (`app.min(1).js`) are matched literally.
pub fn revved_name_pattern(basename: &str) -> Regex {
    Regex::new(&format!(r"[0-9a-fA-F]+\.{}$", regex::escape(basename)))
        .expect("escaped revved name regex is always valid")
}

#[cfg(test)]
mod tests {
    use super::revved_name_pattern;

    #[test]
    fn matches_hex_prefixed_names() {
        let pattern = revved_name_pattern("style.css");
        assert!(pattern.is_match("9f8a.style.css"));
        assert!(pattern.is_match("ABCDEF0123.style.css"));
        assert!(!pattern.is_match("style.css"));
        assert!(!pattern.is_match("zz.style.css"));
        assert!(!pattern.is_match("9f8a.style.css.map"));
    }

    #[test]
    fn escapes_metacharacters_in_basename() {
        let pattern = revved_name_pattern("app.min(1).js");
        assert!(pattern.is_match("12ab.app.min(1).js"));
        assert!(!pattern.is_match("12ab.appxmin(1)xjs"));
    }
}
