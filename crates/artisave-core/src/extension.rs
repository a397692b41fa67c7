//! Content type to file extension mapping.
//!
//! Both tables are exact-match lookups; anything unrecognised resolves to
//! [`DEFAULT_EXTENSION`].

/// Extension used when no table entry matches.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Content type whose extension is decided by the language tag.
pub const CODE_TYPE: &str = "application/vnd.ant.code";

const TYPE_EXTENSIONS: &[(&str, &str)] = &[
    ("text/markdown", "md"),
    ("text/html", "html"),
    ("image/svg+xml", "svg"),
    ("application/vnd.ant.mermaid", "mmd"),
    ("application/vnd.ant.react", "jsx"),
];

const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("python", "py"),
    ("javascript", "js"),
    ("typescript", "ts"),
    ("java", "java"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("csharp", "cs"),
    ("go", "go"),
    ("ruby", "rb"),
    ("rust", "rs"),
    ("php", "php"),
    ("swift", "swift"),
    ("kotlin", "kt"),
    ("scala", "scala"),
    ("shell", "sh"),
    ("bash", "sh"),
    ("powershell", "ps1"),
    ("sql", "sql"),
    ("html", "html"),
    ("css", "css"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("xml", "xml"),
];

/// Resolve the bare extension (no leading dot) for a content type.
///
/// Never fails; unknown types and unknown or missing languages yield `txt`.
///
/// # Example
///
/// ```
/// use artisave_core::extension::resolve_extension;
///
/// assert_eq!(resolve_extension("text/markdown", None), "md");
/// assert_eq!(resolve_extension("application/vnd.ant.code", Some("Rust")), "rs");
/// assert_eq!(resolve_extension("application/pdf", None), "txt");
/// ```
pub fn resolve_extension(kind: &str, language: Option<&str>) -> &'static str {
    if kind == CODE_TYPE {
        return language
            .map(language_extension)
            .unwrap_or(DEFAULT_EXTENSION);
    }

    TYPE_EXTENSIONS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, ext)| *ext)
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Resolve the extension for a language tag, case-insensitively.
pub fn language_extension(language: &str) -> &'static str {
    let language = language.to_ascii_lowercase();
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, ext)| *ext)
        .unwrap_or(DEFAULT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_table() {
        assert_eq!(resolve_extension("text/markdown", None), "md");
        assert_eq!(resolve_extension("text/html", None), "html");
        assert_eq!(resolve_extension("image/svg+xml", None), "svg");
        assert_eq!(resolve_extension("application/vnd.ant.mermaid", None), "mmd");
        assert_eq!(resolve_extension("application/vnd.ant.react", None), "jsx");
    }

    #[test]
    fn test_language_table() {
        let expected = [
            ("python", "py"),
            ("javascript", "js"),
            ("typescript", "ts"),
            ("java", "java"),
            ("c", "c"),
            ("cpp", "cpp"),
            ("csharp", "cs"),
            ("go", "go"),
            ("ruby", "rb"),
            ("rust", "rs"),
            ("php", "php"),
            ("swift", "swift"),
            ("kotlin", "kt"),
            ("scala", "scala"),
            ("shell", "sh"),
            ("bash", "sh"),
            ("powershell", "ps1"),
            ("sql", "sql"),
            ("html", "html"),
            ("css", "css"),
            ("json", "json"),
            ("yaml", "yaml"),
            ("xml", "xml"),
        ];
        for (language, ext) in expected {
            assert_eq!(
                resolve_extension(CODE_TYPE, Some(language)),
                ext,
                "language {language}"
            );
        }
    }

    #[test]
    fn test_language_case_insensitive() {
        assert_eq!(resolve_extension(CODE_TYPE, Some("JavaScript")), "js");
        assert_eq!(resolve_extension(CODE_TYPE, Some("PYTHON")), "py");
    }

    #[test]
    fn test_code_without_language() {
        assert_eq!(resolve_extension(CODE_TYPE, None), "txt");
        assert_eq!(resolve_extension(CODE_TYPE, Some("brainfuck")), "txt");
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(resolve_extension("text/plain", None), "txt");
        assert_eq!(resolve_extension("", None), "txt");
        assert_eq!(resolve_extension("application/json", Some("json")), "txt");
    }

    #[test]
    fn test_type_match_is_exact() {
        assert_eq!(resolve_extension("Text/Markdown", None), "txt");
        assert_eq!(resolve_extension("text/markdown ", None), "txt");
    }

    #[test]
    fn test_language_ignored_for_non_code() {
        assert_eq!(resolve_extension("text/markdown", Some("python")), "md");
    }
}
