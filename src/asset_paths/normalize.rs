/// Normalise a forward-slash path.
///
/// Repeated separators collapse, `.` segments disappear and `..` consumes the preceding
/// segment. Leading `..` segments of a relative path are kept, while `..` directly under the
/// root is dropped. A leading and a trailing separator survive normalisation. Backslashes
/// coming from Windows inputs are treated as separators and emitted as `/`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let path = path.replace('\\', "/");
    let is_absolute = path.starts_with('/');
    let has_trailing_separator = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !is_absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if normalized.is_empty() {
        return match (is_absolute, has_trailing_separator) {
            (true, _) => "/".to_string(),
            (false, true) => "./".to_string(),
            (false, false) => ".".to_string(),
        };
    }

    if has_trailing_separator {
        normalized.push('/');
    }

    if is_absolute {
        format!("/{normalized}")
    } else {
        normalized
    }
}

/// Join path segments with `/` and normalise the result.
///
/// Empty segments are skipped; when nothing is left the current directory (`.`) is returned.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = segments
        .into_iter()
        .filter(|segment| !segment.as_ref().is_empty())
        .map(|segment| segment.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        return ".".to_string();
    }

    normalize(&joined)
}

/// Directory component of a path, `.` when the path has no separator.
pub fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind('/') {
        None => ".",
        Some(0) => "/",
        Some(index) => &trimmed[..index],
    }
}

/// Final segment of a path, ignoring trailing separators.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_parent_segments_against_search_directory() {
        assert_eq!(normalize("dist/../../css/style.css"), "../css/style.css");
        assert_eq!(normalize("build/css/../../images/pic.png"), "images/pic.png");
        assert_eq!(normalize("./dist//images/./pic.png"), "dist/images/pic.png");
    }

    #[test]
    fn keeps_root_and_trailing_separators() {
        assert_eq!(normalize("/../images/"), "/images/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("./"), "./");
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("images/.."), ".");
    }

    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        assert_eq!(normalize("dist\\images\\pic.png"), "dist/images/pic.png");
    }

    #[test]
    fn join_skips_empty_segments() {
        assert_eq!(join(["dist", "", "images/pic.png"]), "dist/images/pic.png");
        assert_eq!(join(["dist", ".", "*.style.css"]), "dist/*.style.css");
        assert_eq!(join(["", ""]), ".");
    }

    #[test]
    fn dirname_mirrors_reference_layout() {
        assert_eq!(dirname("images/pic.png"), "images");
        assert_eq!(dirname("../../css/style.css"), "../../css");
        assert_eq!(dirname("style.css"), ".");
        assert_eq!(dirname("/style.css"), "/");
        assert_eq!(dirname("images/"), ".");
        assert_eq!(dirname("a//b.png"), "a/");
    }

    #[test]
    fn basename_ignores_trailing_separators() {
        assert_eq!(basename("images/pic.png"), "pic.png");
        assert_eq!(basename("pic.png"), "pic.png");
        assert_eq!(basename("images/"), "images");
        assert_eq!(basename("/"), "");
    }
}
