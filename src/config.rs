// ABOUTME: Configuration module for the deck-outline application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::deck::ParserConfig;
use crate::layout::LayoutConfig;
use log::warn;
use std::env;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub bullet_threshold: usize,
    pub section_keywords: Vec<String>,
    pub notes_marker: String,
    pub front_matter: bool,
}

impl Default for Config {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        let parser = ParserConfig::default();
        Self {
            bullet_threshold: layout.bullet_threshold,
            section_keywords: layout.section_keywords,
            notes_marker: parser.notes_marker,
            front_matter: parser.front_matter,
        }
    }
}

/// Split a comma separated list, dropping empty entries
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bullet_threshold = match env::var("DECK_BULLET_THRESHOLD") {
            Ok(s) => s.trim().parse::<usize>().unwrap_or_else(|_| {
                warn!(
                    "Ignoring invalid DECK_BULLET_THRESHOLD {:?}, using {}",
                    s, defaults.bullet_threshold
                );
                defaults.bullet_threshold
            }),
            Err(_) => defaults.bullet_threshold,
        };
        let section_keywords = env::var("DECK_SECTION_KEYWORDS")
            .ok()
            .map(|s| parse_list(&s))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.section_keywords);
        let notes_marker = env::var("DECK_NOTES_MARKER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.notes_marker);
        let front_matter = env::var("DECK_FRONT_MATTER")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(defaults.front_matter);

        Self {
            bullet_threshold,
            section_keywords,
            notes_marker,
            front_matter,
        }
    }

    /// Get a parser configuration with defaults from this config
    pub fn get_parser_config(
        &self,
        bullet_threshold: Option<usize>,
        section_keywords: Option<Vec<String>>,
        notes_marker: Option<String>,
        front_matter: Option<bool>,
    ) -> ParserConfig {
        let layout = LayoutConfig::new()
            .with_bullet_threshold(bullet_threshold.unwrap_or(self.bullet_threshold))
            .with_section_keywords(
                section_keywords.unwrap_or_else(|| self.section_keywords.clone()),
            );

        ParserConfig::new()
            .with_notes_marker(notes_marker.unwrap_or_else(|| self.notes_marker.clone()))
            .with_front_matter(front_matter.unwrap_or(self.front_matter))
            .with_layout(layout)
    }
}
