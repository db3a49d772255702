//! Contains the snippet normalization done ahead of any pattern detection:
//! comments go away, whitespace runs collapse to single spaces.

use once_cell::sync::Lazy;
use regex::Regex;


static BLOCK_COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/")
    .expect("BUG: hardcoded block-comments pattern failed to compile"));
static LINE_COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^\n]*")
    .expect("BUG: hardcoded line-comments pattern failed to compile"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+")
    .expect("BUG: hardcoded whitespace pattern failed to compile"));


/// Strips `/* */` & `//` comments, collapses whitespace runs to single spaces and trims --
/// every detector downstream operates on this normalized form
pub fn normalize(code: &str) -> String {
    let stripped = BLOCK_COMMENTS.replace_all(code, "");
    let stripped = LINE_COMMENTS.replace_all(&stripped, "");
    WHITESPACE_RUNS.replace_all(&stripped, " ")
        .trim()
        .to_string()
}
