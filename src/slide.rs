// ABOUTME: Slide data model for the deck-outline application
// ABOUTME: Defines slide drafts, finalized slide records, layouts and columns

use serde::Serialize;
use std::fmt;

/// Structural template category chosen for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Title,
    Section,
    ContentBullets,
    ContentPlain,
    TwoColumn,
    Code,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Title => "title",
            LayoutKind::Section => "section",
            LayoutKind::ContentBullets => "content_bullets",
            LayoutKind::ContentPlain => "content_plain",
            LayoutKind::TwoColumn => "two_column",
            LayoutKind::Code => "code",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bullets grouped under a level-3 heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSection {
    pub name: String,
    pub items: Vec<String>,
}

/// One column of a two-column slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Section name when the column comes from a named section
    pub heading: Option<String>,
    pub items: Vec<String>,
}

/// Slide content collected by the line pass, before a layout is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDraft {
    pub title: String,
    pub subtitle: Option<String>,
    pub body_lines: Vec<String>,
    pub bullets: Vec<String>,
    pub named_sections: Vec<NamedSection>,
    pub code_lines: Vec<String>,
    pub speaker_notes: Option<String>,
}

impl SlideDraft {
    /// Open (or re-open) the section with the given name and return its index.
    pub(crate) fn open_section(&mut self, name: &str) -> usize {
        if let Some(idx) = self.named_sections.iter().position(|s| s.name == name) {
            return idx;
        }
        self.named_sections.push(NamedSection {
            name: name.to_string(),
            items: Vec::new(),
        });
        self.named_sections.len() - 1
    }

    /// Bullets across the top-level list and every named section.
    pub fn total_bullets(&self) -> usize {
        self.bullets.len()
            + self
                .named_sections
                .iter()
                .map(|s| s.items.len())
                .sum::<usize>()
    }

    /// True when the slide has neither a heading nor any content lines.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.subtitle.is_none()
            && self.body_lines.is_empty()
            && self.bullets.is_empty()
            && self.named_sections.is_empty()
            && self.code_lines.is_empty()
    }

    /// Attach the chosen layout, producing the immutable record.
    pub fn finalize(self, layout: LayoutKind) -> SlideRecord {
        SlideRecord {
            title: self.title,
            subtitle: self.subtitle,
            body_lines: self.body_lines,
            bullets: self.bullets,
            named_sections: self.named_sections,
            code_lines: self.code_lines,
            speaker_notes: self.speaker_notes,
            layout,
        }
    }
}

/// A fully parsed slide.
///
/// Fields are read-only once constructed; a record can only be built from a
/// [`SlideDraft`] through [`SlideDraft::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideRecord {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    body_lines: Vec<String>,
    bullets: Vec<String>,
    named_sections: Vec<NamedSection>,
    code_lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speaker_notes: Option<String>,
    layout: LayoutKind,
}

impl SlideRecord {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    pub fn named_sections(&self) -> &[NamedSection] {
        &self.named_sections
    }

    /// Items of the named section called `name`, if present.
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.named_sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.items.as_slice())
    }

    pub fn code_lines(&self) -> &[String] {
        &self.code_lines
    }

    pub fn speaker_notes(&self) -> Option<&str> {
        self.speaker_notes.as_deref()
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn total_bullets(&self) -> usize {
        self.bullets.len()
            + self
                .named_sections
                .iter()
                .map(|s| s.items.len())
                .sum::<usize>()
    }

    /// Left and right columns for a two-column slide.
    ///
    /// Exactly two named sections fill one column each. Any other two-column
    /// slide got its layout from bullet density, so the combined bullet stream
    /// (top-level bullets, then section items in order) is split at the
    /// midpoint with the left column taking the larger half.
    pub fn columns(&self) -> Option<(Column, Column)> {
        if self.layout != LayoutKind::TwoColumn {
            return None;
        }

        if let [left, right] = self.named_sections.as_slice() {
            return Some((
                Column {
                    heading: Some(left.name.clone()),
                    items: left.items.clone(),
                },
                Column {
                    heading: Some(right.name.clone()),
                    items: right.items.clone(),
                },
            ));
        }

        let mut all: Vec<String> = self.bullets.clone();
        for section in &self.named_sections {
            all.extend(section.items.iter().cloned());
        }
        let right = all.split_off((all.len() + 1) / 2);
        Some((
            Column {
                heading: None,
                items: all,
            },
            Column {
                heading: None,
                items: right,
            },
        ))
    }
}
