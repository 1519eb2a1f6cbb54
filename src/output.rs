// ABOUTME: Output module for the deck-outline application
// ABOUTME: Serializes parsed decks as JSON or a readable outline and writes them to disk

use crate::deck::Deck;
use crate::errors::{DeckError, Result};
use crate::slide::SlideRecord;
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Output format for a parsed deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Outline,
}

impl OutputFormat {
    /// File extension used when writing one file per input
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Outline => "txt",
        }
    }
}

/// Render a deck in the requested format.
pub fn render(deck: &Deck, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(deck, pretty),
        OutputFormat::Outline => Ok(to_outline(deck)),
    }
}

/// Serialize a deck as JSON for an external renderer.
pub fn to_json(deck: &Deck, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(deck)?
    } else {
        serde_json::to_string(deck)?
    };
    Ok(json)
}

/// Serialize several decks as one JSON array, in input order.
pub fn to_json_array(decks: &[Deck], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(decks)?
    } else {
        serde_json::to_string(decks)?
    };
    Ok(json)
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

fn write_slide(out: &mut String, number: usize, slide: &SlideRecord) {
    let title = if slide.title().is_empty() {
        "(untitled)"
    } else {
        slide.title()
    };
    let _ = writeln!(out, "Slide {}: {} [{}]", number, title, slide.layout());

    if let Some(subtitle) = slide.subtitle() {
        let _ = writeln!(out, "  Subtitle: {}", subtitle);
    }

    if let Some((left, right)) = slide.columns() {
        let _ = writeln!(
            out,
            "  Columns: {} ({}) | {} ({})",
            left.heading.as_deref().unwrap_or("left"),
            left.items.len(),
            right.heading.as_deref().unwrap_or("right"),
            right.items.len()
        );
    } else if !slide.named_sections().is_empty() {
        let names: Vec<&str> = slide.named_sections().iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(out, "  Sections: {}", names.join(", "));
    }

    if !slide.bullets().is_empty() {
        let _ = writeln!(out, "  Bullets: {}", slide.bullets().len());
    }
    if !slide.code_lines().is_empty() {
        let _ = writeln!(out, "  Code lines: {}", slide.code_lines().len());
    }
    if let Some(first) = slide.body_lines().first() {
        let _ = writeln!(
            out,
            "  Body lines: {} (first: {})",
            slide.body_lines().len(),
            preview(first, 60)
        );
    }
    if let Some(notes) = slide.speaker_notes() {
        let _ = writeln!(out, "  Speaker notes: {} chars", notes.chars().count());
    }
}

/// Human-readable summary of a deck, one block per slide.
pub fn to_outline(deck: &Deck) -> String {
    let mut out = String::new();

    if let Some(title) = &deck.metadata.title {
        let _ = writeln!(out, "Deck: {}", title);
    }
    if let Some(author) = &deck.metadata.author {
        let _ = writeln!(out, "Author: {}", author);
    }
    let _ = writeln!(out, "Parsed {} slides", deck.slides.len());

    for (i, slide) in deck.slides.iter().enumerate() {
        out.push('\n');
        write_slide(&mut out, i + 1, slide);
    }

    out
}

/// Write rendered output to a file, creating parent directories as needed.
pub fn write_output(content: &str, output_path: &Path) -> Result<()> {
    info!("Writing output to file: {:?}", output_path);

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(DeckError::FileReadError)?;
        }
    }

    fs::write(output_path, content).map_err(DeckError::FileReadError)?;

    Ok(())
}
