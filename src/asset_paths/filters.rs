/// Marker identifying references that point outside the build output.
const EXTERNAL_SCHEME_MARKER: &str = "://";

/// Determine whether a reference points at an external resource (`http://`, `//cdn`-style
/// URLs with an explicit scheme, and so on).
pub fn is_external_reference(value: &str) -> bool {
    value.contains(EXTERNAL_SCHEME_MARKER)
}

/// References that must be handed back untouched without consulting any strategy.
pub fn is_passthrough_reference(value: &str) -> bool {
    value.is_empty() || is_external_reference(value)
}

/// Split the leading run of separators off a reference.
///
/// Returns `(prefix, rest)`; `prefix` is empty for relative references. The run is kept
/// verbatim so that `//images/pic.png` comes back with both slashes.
pub fn split_absolute_prefix(value: &str) -> (&str, &str) {
    let rest = value.trim_start_matches('/');
    value.split_at(value.len() - rest.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_scheme_urls() {
        assert!(is_external_reference("https://example.com/pic.png"));
        assert!(is_external_reference("HTTP://example.com"));
        assert!(is_external_reference("file:///tmp/pic.png"));
    }

    #[test]
    fn keeps_relative_and_protocol_relative_paths() {
        assert!(!is_external_reference("images/pic.png"));
        assert!(!is_external_reference("//cdn/pic.png"));
    }

    #[test]
    fn empty_reference_is_passed_through() {
        assert!(is_passthrough_reference(""));
        assert!(!is_passthrough_reference("pic.png"));
    }

    #[test]
    fn splits_repeated_leading_separators() {
        assert_eq!(split_absolute_prefix("//images/pic.png"), ("//", "images/pic.png"));
        assert_eq!(split_absolute_prefix("/pic.png"), ("/", "pic.png"));
        assert_eq!(split_absolute_prefix("pic.png"), ("", "pic.png"));
    }
}
