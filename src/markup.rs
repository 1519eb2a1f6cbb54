// ABOUTME: Markup stripping for the deck-outline application
// ABOUTME: Best-effort removal of HTML containers, inline wrappers and reveal annotations

use log::debug;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Inline tags whose wrapper is dropped while the inner text is kept.
const INLINE_WRAPPERS: &[&str] = &["strong", "b", "em", "i", "u", "mark"];

fn annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // No (?s): a comment only counts as an annotation when it fits on one line
    RE.get_or_init(|| Regex::new(r"[ \t]*<!--.*?-->").expect("Invalid annotation regex"))
}

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").expect("Invalid image regex"))
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid line break regex"))
}

fn inline_wrapper_res() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        INLINE_WRAPPERS
            .iter()
            .map(|tag| {
                Regex::new(&format!(r"(?i)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>"))
                    .expect("Invalid inline wrapper regex")
            })
            .collect()
    })
}

fn bold_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("Invalid bold marker regex"))
}

/// Compiled matchers for the block container tags removed from prose.
#[derive(Debug, Clone)]
pub struct ContainerPatterns {
    patterns: Vec<(String, Regex)>,
}

impl ContainerPatterns {
    /// Compile one open/close matcher per tag.
    pub fn new(tags: &[String]) -> Self {
        let patterns = tags
            .iter()
            .filter_map(|tag| match container_re(tag) {
                Ok(re) => Some((tag.clone(), re)),
                Err(e) => {
                    debug!("Skipping container tag {}: {}", tag, e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Remove every balanced container span for each tag in turn.
    pub fn strip(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for (tag, re) in &self.patterns {
            cleaned = strip_spans(&cleaned, re, tag);
        }
        cleaned
    }
}

fn container_re(tag: &str) -> std::result::Result<Regex, regex::Error> {
    let tag = regex::escape(tag);
    Regex::new(&format!(r"(?i)<(/)?{tag}(?:\s[^>]*)?\s*>"))
}

/// Clean a prose segment of a slide (anything outside fenced code).
///
/// Runs, in order: container removal, image removal, inline wrapper
/// unwrapping, `<br>` to newline, annotation removal. Every step is a no-op
/// when its pattern does not match, so malformed markup passes through.
pub fn clean_prose(text: &str, containers: &ContainerPatterns) -> String {
    let cleaned = containers.strip(text);
    let cleaned = image_re().replace_all(&cleaned, "");
    let cleaned = unwrap_inline(&cleaned);
    let cleaned = line_break_re().replace_all(&cleaned, "\n");
    strip_annotations(&cleaned)
}

/// Remove every outermost balanced `<tag ...> ... </tag>` span, contents included.
///
/// Nested containers of the same tag are consumed together with their
/// parent. A stray closing tag is left alone, and an opening tag that never
/// closes leaves the rest of the text untouched from that point.
pub fn strip_containers(text: &str, tag: &str) -> String {
    match container_re(tag) {
        Ok(re) => strip_spans(text, &re, tag),
        Err(e) => {
            debug!("Skipping container tag {}: {}", tag, e);
            text.to_string()
        }
    }
}

fn strip_spans(text: &str, re: &Regex, tag: &str) -> String {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let closing = caps.get(1).is_some();
        if closing {
            match depth {
                0 => {}
                1 => {
                    spans.push((start, m.end()));
                    depth = 0;
                }
                _ => depth -= 1,
            }
        } else {
            if depth == 0 {
                start = m.start();
            }
            depth += 1;
        }
    }

    if depth > 0 {
        debug!("Unclosed <{}> container left in place", tag);
    }

    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (s, e) in spans {
        out.push_str(&text[last..s]);
        last = e;
    }
    out.push_str(&text[last..]);
    out
}

/// Drop inline emphasis wrapper tags, keeping their inner text.
pub fn unwrap_inline(text: &str) -> String {
    let mut out = text.to_string();
    for re in inline_wrapper_res() {
        out = re.replace_all(&out, "$1").into_owned();
    }
    out
}

/// Remove single-line HTML comments such as
/// `<!-- .element: class="fragment" data-fragment-index="1" -->`.
pub fn strip_annotations(text: &str) -> String {
    annotation_re().replace_all(text, "").into_owned()
}

/// Remove doubled emphasis markers (`**bold**`, `__bold__`), keeping the text.
pub fn strip_bold_markers(text: &str) -> String {
    bold_marker_re()
        .replace_all(text, |caps: &Captures| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
