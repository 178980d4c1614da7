//! Path classification by file-name extension.
//!
//! Deterministic, pure, case-sensitive substring match with first match
//! wins. Empty names and names matching neither substring land under
//! `other/`.

/// Prefix for names containing `"html"`.
pub const HTML_PREFIX: &str = "html/";
/// Prefix for names containing `"xml"`.
pub const XML_PREFIX: &str = "xml/";
/// Prefix for empty names and everything else.
pub const OTHER_PREFIX: &str = "other/";

/// Map a file name to its storage path prefix.
///
/// `"html"` is checked before `"xml"`, so a name like `"page.xhtml"`
/// classifies as `html/`.
pub fn classify(file_name: &str) -> &'static str {
    if file_name.is_empty() {
        return OTHER_PREFIX;
    }
    if file_name.contains("html") {
        return HTML_PREFIX;
    }
    if file_name.contains("xml") {
        return XML_PREFIX;
    }
    OTHER_PREFIX
}

/// Full destination key: classified prefix + file name.
///
/// No sanitization is applied; callers must not assume path safety.
pub fn object_key(file_name: &str) -> String {
    format!("{}{}", classify(file_name), file_name)
}
