use super::escape_html;
use crate::types::page::ContentBlock;
use regex::{Captures, RegexBuilder};
use tracing::warn;

/// Output of [`apply_content_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub html: String,
    /// Selectors of textual blocks that matched no element.
    pub unmatched: Vec<String>,
}

/// Apply a page's content blocks to its HTML.
///
/// Each textual block replaces the text of the first element carrying its
/// class. A leading `.` on the selector is ignored. Non-textual kinds are
/// skipped.
pub fn apply_content_blocks(html: &str, blocks: &[ContentBlock]) -> Patched {
    let mut out = html.to_string();
    let mut unmatched = Vec::new();

    for block in blocks.iter().filter(|b| b.kind.is_textual()) {
        let class = block.selector.trim().trim_start_matches('.');
        if class.is_empty() {
            continue;
        }
        let pattern = format!(
            r#"(<([a-zA-Z][a-zA-Z0-9]*)[^>]*\sclass="(?:[^"]*\s)?{}(?:\s[^"]*)?"[^>]*>)[^<]*(</[a-zA-Z][a-zA-Z0-9]*>)"#,
            regex::escape(class)
        );
        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                warn!(selector = %block.selector, error = %e, "skipping content block");
                continue;
            }
        };
        if !re.is_match(&out) {
            unmatched.push(block.selector.clone());
            continue;
        }
        let text = escape_html(&block.content);
        out = re
            .replacen(&out, 1, |caps: &Captures<'_>| {
                format!("{}{text}{}", &caps[1], &caps[3])
            })
            .into_owned();
    }

    Patched { html: out, unmatched }
}
