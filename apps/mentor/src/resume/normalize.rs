use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s.\-]").unwrap());
static DOT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

/// Canonicalizes one resume line: collapse whitespace, strip everything but
/// word characters, whitespace, `.` and `-`, trim, lowercase.
///
/// Idempotent: `normalize_line(&normalize_line(x)) == normalize_line(x)`.
pub fn normalize_line(line: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(line, " ");
    let stripped = DISALLOWED_RE.replace_all(&collapsed, "");
    // Removing a character between two spaces leaves a double space behind.
    let recollapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    recollapsed.trim().to_lowercase()
}

/// Like [`normalize_line`], but also squashes runs of dots (leader dots,
/// ellipses) into a single one. Used on text going into the retrieval index.
pub fn clean_text(text: &str) -> String {
    let normalized = normalize_line(text);
    DOT_RUN_RE.replace_all(&normalized, ".").into_owned()
}
