//! Content injection into the static site templates.
//!
//! Known literal fragments are located with fixed regular expressions and
//! replaced with CMS text. This is string substitution against known markup,
//! not HTML parsing: if the template copy drifts from a pattern, that field
//! is reported in [`Rendered::unmatched`] and the template text is kept.

pub mod about;
pub mod blocks;
pub mod homepage;

use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

pub use about::render_about;
pub use blocks::{Patched, apply_content_blocks};
pub use homepage::render_homepage;

/// Output of a template pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    /// Fields that had content but whose template fragment was not found.
    pub unmatched: Vec<&'static str>,
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

static BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("static regex"));

/// Like [`escape_html`] but keeps `<br>` line breaks used in headings.
pub fn escape_with_breaks(text: &str) -> String {
    BREAK_TAG
        .split(text)
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br />")
}

/// A text field worth injecting: set and not empty.
pub(crate) fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Accumulates substitutions over one template.
pub(crate) struct Patcher {
    html: String,
    unmatched: Vec<&'static str>,
}

impl Patcher {
    pub(crate) fn new(template: &str) -> Self {
        Self {
            html: template.to_string(),
            unmatched: Vec::new(),
        }
    }

    /// Replace the first match with `replacement`, inserted literally.
    pub(crate) fn once(&mut self, field: &'static str, re: &Regex, replacement: &str) {
        if self.check(field, re) {
            self.html = re.replacen(&self.html, 1, NoExpand(replacement)).into_owned();
        }
    }

    /// Replace every match with `replacement`, inserted literally.
    pub(crate) fn all(&mut self, field: &'static str, re: &Regex, replacement: &str) {
        if self.check(field, re) {
            self.html = re.replace_all(&self.html, NoExpand(replacement)).into_owned();
        }
    }

    /// Replace the first match with the output of `f`.
    pub(crate) fn with(
        &mut self,
        field: &'static str,
        re: &Regex,
        f: impl FnMut(&Captures<'_>) -> String,
    ) {
        if self.check(field, re) {
            self.html = re.replacen(&self.html, 1, f).into_owned();
        }
    }

    fn check(&mut self, field: &'static str, re: &Regex) -> bool {
        let found = re.is_match(&self.html);
        if !found {
            self.unmatched.push(field);
        }
        found
    }

    pub(crate) fn finish(self) -> Rendered {
        Rendered {
            html: self.html,
            unmatched: self.unmatched,
        }
    }
}

macro_rules! fragment {
    ($name:ident, $pattern:expr) => {
        static $name: std::sync::LazyLock<regex::Regex> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).expect("static regex"));
    };
}
pub(crate) use fragment;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn breaks_survive_but_other_tags_do_not() {
        assert_eq!(
            escape_with_breaks("We found the<br/>best <b>talent</b>"),
            "We found the<br />best &lt;b&gt;talent&lt;/b&gt;"
        );
    }

    #[test]
    fn dollar_signs_are_inserted_literally() {
        let re = Regex::new(r"<h3>(x)</h3>").unwrap();
        let mut p = Patcher::new("<h3>x</h3>");
        p.once("title", &re, "<h3>$1 $400k+</h3>");
        assert_eq!(p.finish().html, "<h3>$1 $400k+</h3>");
    }

    #[test]
    fn missing_fragment_is_reported() {
        let re = Regex::new("nowhere").unwrap();
        let mut p = Patcher::new("<p>hi</p>");
        p.once("hero.description", &re, "x");
        let out = p.finish();
        assert_eq!(out.html, "<p>hi</p>");
        assert_eq!(out.unmatched, vec!["hero.description"]);
    }
}
