// ABOUTME: Deck assembly for the deck-outline application
// ABOUTME: Runs front matter, splitting, line classification and layout selection end to end

use crate::errors::{DeckError, Result};
use crate::layout::{choose_layout, LayoutConfig};
use crate::lines::classify_lines;
use crate::slide::SlideRecord;
use crate::splitter::{split_chunks, Splitter, DELIMITER};
use crate::utils::validate_file_exists;
use log::{debug, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Configuration for parsing a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Line prefix that starts the speaker notes of a slide
    pub notes_marker: String,
    /// Block containers removed together with their contents
    pub container_tags: Vec<String>,
    /// Recognize YAML, pandoc `%` and leading comment front matter
    pub front_matter: bool,
    pub layout: LayoutConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            notes_marker: "Note:".to_string(),
            container_tags: vec!["div".to_string()],
            front_matter: true,
            layout: LayoutConfig::default(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes_marker(mut self, marker: impl Into<String>) -> Self {
        self.notes_marker = marker.into();
        self
    }

    pub fn with_container_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.container_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_front_matter(mut self, enabled: bool) -> Self {
        self.front_matter = enabled;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Reject settings that would make the parser silently misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.notes_marker.trim().is_empty() {
            return Err(DeckError::ConfigError(
                "Notes marker must not be empty".to_string(),
            ));
        }
        if self.layout.section_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(DeckError::ConfigError(
                "Section keywords must not be empty".to_string(),
            ));
        }
        if self.container_tags.iter().any(|t| t.trim().is_empty()) {
            return Err(DeckError::ConfigError(
                "Container tags must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Deck-level metadata taken from front matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A parsed deck: metadata plus slides in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub metadata: DeckMetadata,
    pub slides: Vec<SlideRecord>,
}

/// A chunk made of exactly one HTML comment, such as HedgeDoc's settings block.
fn is_comment_chunk(chunk: &str) -> bool {
    let trimmed = chunk.trim();
    trimmed.starts_with("<!--") && trimmed.find("-->").map(|i| i + 3) == Some(trimmed.len())
}

/// Recognized keys of a YAML front matter block; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default, deserialize_with = "scalar_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    author: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    date: Option<String>,
}

impl From<FrontMatter> for DeckMetadata {
    fn from(fm: FrontMatter) -> Self {
        Self {
            title: fm.title,
            author: fm.author,
            date: fm.date,
        }
    }
}

/// Accept any YAML scalar (`date: 2024-05-01`, `title: 42`) as text.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };
    Ok(text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()))
}

/// A markdown heading line, which YAML would silently read as a comment.
fn is_markdown_heading(line: &str) -> bool {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    hashes > 0 && line[hashes..].starts_with(|c: char| c == ' ' || c == '\t')
}

/// Parse the lines between the opening and closing delimiters.
///
/// Only a non-empty YAML mapping counts as front matter. Sequences, plain
/// text, markdown headings and invalid YAML are slide content.
fn parse_yaml_block(block: &[&str]) -> Option<DeckMetadata> {
    if block.iter().any(|l| is_markdown_heading(l)) {
        return None;
    }

    let yaml = block.join("\n");
    match serde_yaml::from_str::<Value>(&yaml) {
        Ok(Value::Mapping(map)) if !map.is_empty() => {
            match serde_yaml::from_value::<FrontMatter>(Value::Mapping(map)) {
                Ok(fm) => Some(fm.into()),
                Err(e) => {
                    warn!("Failed to read front matter fields: {}", e);
                    Some(DeckMetadata::default())
                }
            }
        }
        Ok(_) => None,
        Err(e) => {
            debug!("Leading block is not YAML front matter: {}", e);
            None
        }
    }
}

/// Split off front matter, returning the metadata and the remaining text.
///
/// Two forms are recognized at the very start of the document: a YAML block
/// fenced by `---` lines, and up to three pandoc-style `% Title`, `% Author`,
/// `% Date` lines. Anything else leaves the document untouched.
pub fn parse_front_matter(content: &str) -> (DeckMetadata, String) {
    let lines: Vec<&str> = content.lines().collect();
    let mut metadata = DeckMetadata::default();

    if lines.first().map(|l| l.trim()) == Some(DELIMITER) {
        if let Some(close) = lines.iter().skip(1).position(|l| l.trim() == DELIMITER) {
            let block = &lines[1..close + 1];
            if let Some(metadata) = parse_yaml_block(block) {
                debug!("Found YAML front matter with {} lines", block.len());
                return (metadata, lines[close + 2..].join("\n"));
            }
        }
        return (metadata, content.to_string());
    }

    let pandoc: Vec<String> = lines
        .iter()
        .take(3)
        .map_while(|l| l.strip_prefix("% ").map(|v| v.trim().to_string()))
        .collect();
    if pandoc.is_empty() {
        return (metadata, content.to_string());
    }

    let mut fields = pandoc.iter().cloned().map(|v| (!v.is_empty()).then_some(v));
    metadata.title = fields.next().flatten();
    metadata.author = fields.next().flatten();
    metadata.date = fields.next().flatten();

    // Skip optional blank lines after the header
    let mut start_idx = pandoc.len();
    while start_idx < lines.len() && lines[start_idx].trim().is_empty() {
        start_idx += 1;
    }

    (metadata, lines[start_idx..].join("\n"))
}

/// Parse a markdown deck into slide records.
///
/// Never fails: unrecognized markup passes through into body text and an
/// empty document yields an empty deck.
pub fn parse_deck(content: &str, config: &ParserConfig) -> Deck {
    let (metadata, body) = if config.front_matter {
        parse_front_matter(content)
    } else {
        (DeckMetadata::default(), content.to_string())
    };

    let mut chunks = split_chunks(&body);
    if config.front_matter && chunks.first().is_some_and(|c| is_comment_chunk(c)) {
        debug!("Dropping leading comment chunk");
        chunks.remove(0);
    }

    let splitter = Splitter::new(config);
    let mut slides: Vec<SlideRecord> = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let raw = splitter.split_chunk(chunk);
        let mut draft = classify_lines(&raw.body);
        if draft.is_empty() {
            debug!("Dropping slide without heading or content");
            continue;
        }
        draft.speaker_notes = raw.notes;

        let layout = choose_layout(&draft, slides.is_empty(), &config.layout);
        slides.push(draft.finalize(layout));
    }

    Deck { metadata, slides }
}

/// Read a markdown file and parse it into a deck.
pub fn parse_file(markdown_path: &Path, config: &ParserConfig) -> Result<Deck> {
    info!("Parsing slides from markdown: {:?}", markdown_path);

    validate_file_exists(markdown_path)?;

    let content = fs::read_to_string(markdown_path).map_err(DeckError::FileReadError)?;
    let deck = parse_deck(&content, config);

    info!("Parsed {} slides from {:?}", deck.slides.len(), markdown_path);
    Ok(deck)
}
