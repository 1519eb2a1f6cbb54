// ABOUTME: Layout selection for the deck-outline application
// ABOUTME: Picks one structural layout per slide from simple content heuristics

use crate::slide::{LayoutKind, SlideDraft};
use log::debug;

/// Configuration for layout selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Title prefixes that mark a section divider when followed by a colon
    pub section_keywords: Vec<String>,
    /// Bullet count above which a slide is spread over two columns
    pub bullet_threshold: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            section_keywords: vec!["Teil".to_string(), "Part".to_string(), "Section".to_string()],
            bullet_threshold: 7,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bullet_threshold(mut self, threshold: usize) -> Self {
        self.bullet_threshold = threshold;
        self
    }

    /// Whether a title reads as a divider, e.g. `Teil 2: Patterns` or `Part: Intro`.
    ///
    /// The keyword must be a whole word at the start of the title (case
    /// insensitive) and a colon must follow somewhere after it.
    pub fn is_section_title(&self, title: &str) -> bool {
        let title = title.trim_start().to_lowercase();
        self.section_keywords.iter().any(|keyword| {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return false;
            }
            match title.strip_prefix(keyword.as_str()) {
                Some(rest) => {
                    !rest.starts_with(|c: char| c.is_alphanumeric()) && rest.contains(':')
                }
                None => false,
            }
        })
    }
}

/// Choose the layout for a classified slide.
///
/// Rules are checked top to bottom and the first match wins:
/// code, two named sections, first titled slide, section divider title,
/// bullet overflow (two columns), bullets, plain. Two named sections always
/// render as two columns, so that rule runs ahead of the title-page rule.
pub fn choose_layout(draft: &SlideDraft, is_first: bool, config: &LayoutConfig) -> LayoutKind {
    let total_bullets = draft.total_bullets();

    let layout = if !draft.code_lines.is_empty() {
        LayoutKind::Code
    } else if draft.named_sections.len() == 2 {
        LayoutKind::TwoColumn
    } else if is_first && !draft.title.is_empty() {
        LayoutKind::Title
    } else if config.is_section_title(&draft.title) {
        LayoutKind::Section
    } else if total_bullets > config.bullet_threshold {
        LayoutKind::TwoColumn
    } else if total_bullets > 0 {
        LayoutKind::ContentBullets
    } else {
        LayoutKind::ContentPlain
    };

    debug!(
        "Layout {} for slide {:?} ({} bullets, {} sections)",
        layout,
        draft.title,
        total_bullets,
        draft.named_sections.len()
    );

    layout
}
