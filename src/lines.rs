// ABOUTME: Per-line classification for the deck-outline application
// ABOUTME: Walks one slide body and sorts lines into headings, bullets, code and body text

use crate::markup::strip_bold_markers;
use crate::slide::SlideDraft;
use regex::Regex;
use std::sync::OnceLock;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*```[^`]*$").expect("Invalid fence regex"))
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[*-]|\d+\.)\s+").expect("Invalid bullet regex"))
}

/// A line made only of a code fence, optionally followed by an info string.
pub fn is_fence(line: &str) -> bool {
    fence_re().is_match(line)
}

/// What a single non-blank, non-code line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: usize, text: &'a str },
    Bullet(String),
    Body(&'a str),
}

/// Parse an ATX heading: one or more `#` followed by whitespace.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(|c: char| c == ' ' || c == '\t') {
        return None;
    }
    Some((level, rest.trim()))
}

/// True when the line starts with a list marker (`* `, `- `, `1. `).
pub fn is_list_item(line: &str) -> bool {
    bullet_re().is_match(line)
}

fn strip_list_prefixes(mut text: &str) -> &str {
    while let Some(m) = bullet_re().find(text) {
        text = text[m.end()..].trim_start();
    }
    text
}

/// Strip list prefixes (repeatedly, so `- * item` loses both) and bold markers.
fn bullet_text(line: &str) -> Option<String> {
    if !is_list_item(line) {
        return None;
    }
    let unbolded = strip_bold_markers(strip_list_prefixes(line));
    // Bold stripping can expose another marker: `- **- x**`
    Some(strip_list_prefixes(unbolded.trim()).trim_end().to_string())
}

/// Classify one trimmed, non-blank line outside of a code block.
pub fn line_kind(line: &str) -> LineKind<'_> {
    if let Some((level, text)) = heading(line) {
        return LineKind::Heading { level, text };
    }
    if let Some(text) = bullet_text(line) {
        return LineKind::Bullet(text);
    }
    LineKind::Body(line)
}

/// Classify every line of a cleaned slide body into a [`SlideDraft`].
///
/// Speaker notes are attached by the caller; this pass only sees body text.
pub fn classify_lines(body: &str) -> SlideDraft {
    let mut draft = SlideDraft::default();
    let mut in_code = false;
    // Index into draft.named_sections of the section receiving bullets
    let mut current_section: Option<usize> = None;

    for raw in body.lines() {
        if is_fence(raw) {
            in_code = !in_code;
            continue;
        }

        if raw.trim().is_empty() {
            continue;
        }

        if in_code {
            draft.code_lines.push(raw.to_string());
            continue;
        }

        let line = raw.trim();
        match line_kind(line) {
            LineKind::Heading { level: 1 | 2, text } => {
                current_section = None;
                if draft.title.is_empty() {
                    draft.title = text.to_string();
                } else {
                    draft.subtitle = Some(text.to_string());
                }
            }
            LineKind::Heading { level: 3, text } => {
                let name = text.trim_end_matches(':').trim();
                current_section = if name.is_empty() {
                    None
                } else {
                    Some(draft.open_section(name))
                };
            }
            LineKind::Heading { .. } => {
                current_section = None;
                draft.body_lines.push(line.to_string());
            }
            LineKind::Bullet(text) => {
                if text.is_empty() {
                    continue;
                }
                match current_section {
                    Some(idx) => draft.named_sections[idx].items.push(text),
                    None => draft.bullets.push(text),
                }
            }
            LineKind::Body(text) => draft.body_lines.push(text.to_string()),
        }
    }

    draft
}
