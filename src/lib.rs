// ABOUTME: Library module for the deck-outline program.
// ABOUTME: Parses reveal-style markdown decks into structured slide records.

// Reexport modules
pub mod config;
pub mod deck;
pub mod errors;
pub mod layout;
pub mod lines;
pub mod markup;
pub mod output;
pub mod slide;
pub mod splitter;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use deck::{parse_deck, parse_file, parse_front_matter, Deck, DeckMetadata, ParserConfig};
pub use errors::{DeckError, Result};
pub use layout::{choose_layout, LayoutConfig};
pub use lines::classify_lines;
pub use output::{render, to_json, to_json_array, to_outline, write_output, OutputFormat};
pub use slide::{Column, LayoutKind, NamedSection, SlideDraft, SlideRecord};
pub use splitter::{split_chunks, split_slides, RawSlide};
