// ABOUTME: Slide splitting for the deck-outline application
// ABOUTME: Cuts a markdown deck at `---` lines and separates speaker notes from body text

use crate::deck::ParserConfig;
use crate::lines::is_fence;
use crate::markup::{self, ContainerPatterns};
use log::debug;
use serde::Serialize;

/// The slide delimiter line
pub const DELIMITER: &str = "---";

/// One slide's cleaned body text and its speaker notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSlide {
    pub body: String,
    pub notes: Option<String>,
}

/// Split a document into raw chunks at delimiter lines.
///
/// A line is a delimiter when it is exactly `---` once surrounding
/// whitespace is ignored and it is not inside a fenced code block. A fence
/// only opens a block when a closing fence follows it somewhere later in the
/// document; an unclosed fence is left to the chunk it appears in. Chunks
/// with no non-whitespace content are dropped.
pub fn split_chunks(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_code = false;

    for (idx, &line) in lines.iter().enumerate() {
        if is_fence(line) {
            if in_code {
                in_code = false;
            } else if lines[idx + 1..].iter().any(|l| is_fence(l)) {
                in_code = true;
            } else {
                debug!("Unclosed code fence on line {}", idx + 1);
            }
        } else if !in_code && line.trim() == DELIMITER {
            push_chunk(&mut chunks, &current);
            current.clear();
            continue;
        }
        current.push(line);
    }
    push_chunk(&mut chunks, &current);

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, lines: &[&str]) {
    if lines.iter().any(|l| !l.trim().is_empty()) {
        chunks.push(lines.join("\n"));
    }
}

/// Separates notes from body and cleans body markup, reusing the container
/// patterns compiled for its configuration across chunks.
#[derive(Debug, Clone)]
pub struct Splitter<'a> {
    notes_marker: &'a str,
    containers: ContainerPatterns,
}

impl<'a> Splitter<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self {
            notes_marker: config.notes_marker.as_str(),
            containers: ContainerPatterns::new(&config.container_tags),
        }
    }

    /// Separate notes from body and clean the body's markup.
    pub fn split_chunk(&self, chunk: &str) -> RawSlide {
        let mut body_lines: Vec<&str> = Vec::new();
        let mut notes_lines: Vec<&str> = Vec::new();
        let mut in_code = false;
        let mut in_notes = false;

        for line in chunk.lines() {
            if in_notes {
                notes_lines.push(line);
                continue;
            }
            if is_fence(line) {
                in_code = !in_code;
            } else if !in_code {
                if let Some(rest) = line.trim_start().strip_prefix(self.notes_marker) {
                    in_notes = true;
                    notes_lines.push(rest);
                    continue;
                }
            }
            body_lines.push(line);
        }

        let notes = if in_notes {
            let joined = markup::strip_annotations(&notes_lines.join("\n"));
            let trimmed = joined.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        } else {
            None
        };

        RawSlide {
            body: self.clean_body(&body_lines),
            notes,
        }
    }

    /// Clean prose runs between code fences; fence and code lines pass through verbatim.
    fn clean_body(&self, lines: &[&str]) -> String {
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut prose: Vec<&str> = Vec::new();
        let mut in_code = false;

        for &line in lines {
            if is_fence(line) {
                if !in_code {
                    self.flush_prose(&mut out, &mut prose);
                }
                in_code = !in_code;
                out.push(line.to_string());
            } else if in_code {
                out.push(line.to_string());
            } else {
                prose.push(line);
            }
        }
        self.flush_prose(&mut out, &mut prose);

        out.join("\n")
    }

    fn flush_prose(&self, out: &mut Vec<String>, prose: &mut Vec<&str>) {
        if prose.is_empty() {
            return;
        }
        out.push(markup::clean_prose(&prose.join("\n"), &self.containers));
        prose.clear();
    }
}

/// Separate notes from body and clean the body's markup.
pub fn split_chunk(chunk: &str, config: &ParserConfig) -> RawSlide {
    Splitter::new(config).split_chunk(chunk)
}

/// Split a whole document into cleaned slides, in document order.
pub fn split_slides(text: &str, config: &ParserConfig) -> Vec<RawSlide> {
    let splitter = Splitter::new(config);
    let slides: Vec<RawSlide> = split_chunks(text)
        .iter()
        .map(|chunk| splitter.split_chunk(chunk))
        .collect();
    debug!("Split document into {} raw slides", slides.len());
    slides
}
