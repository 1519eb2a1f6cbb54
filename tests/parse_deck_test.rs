use deck_outline::{parse_deck, parse_file, LayoutKind, ParserConfig};
use std::fs;
use tempfile::TempDir;

const WORKSHOP_DECK: &str = r#"---
title: Software-Architektur Workshop
type: slide
slideOptions:
  transition: slide
---

# Software-Architektur

## Design Patterns in der Praxis

Note: Begrüßung und kurze Vorstellungsrunde.

---

## Agenda

### Themenblöcke:
* **Tag 1:** Erzeugungsmuster
* **Tag 2:** Strukturmuster
* **Tag 3:** Verhaltensmuster

### Lernziele:
- Muster erkennen <!-- .element: class="fragment" data-fragment-index="1" -->
- Muster anwenden <!-- .element: class="fragment" data-fragment-index="2" -->
- Anti-Patterns vermeiden <!-- .element: class="fragment" data-fragment-index="3" -->

Note:
Agenda kurz durchgehen.
Fragen sammeln.

---

# Teil 1: Erzeugungsmuster

---

## Builder Pattern

<div class="columns">
<div>left</div>
<div>right</div>
</div>

```java
public class Contract {
    private final String id;
}
```

Note: Code live erklären.

---

## Warum Muster?

Muster sind <strong>bewährte</strong> Lösungen.<br>Sie schaffen ein gemeinsames Vokabular.
<img src="images/patterns.png">
"#;

#[test]
fn test_spec_scenario_three_slides() {
    let doc = "# Title\nSubtitle text\n---\n## Second\n* a\n* b\nNote: remember X\n---\n```\ncode here\n```";
    let deck = parse_deck(doc, &ParserConfig::default());

    assert_eq!(deck.slides.len(), 3);

    let first = &deck.slides[0];
    assert_eq!(first.title(), "Title");
    assert_eq!(first.body_lines(), &["Subtitle text".to_string()][..]);
    assert_eq!(first.layout(), LayoutKind::Title);

    let second = &deck.slides[1];
    assert_eq!(second.title(), "Second");
    assert_eq!(second.bullets(), &["a".to_string(), "b".to_string()][..]);
    assert_eq!(second.speaker_notes(), Some("remember X"));
    assert_eq!(second.layout(), LayoutKind::ContentBullets);

    let third = &deck.slides[2];
    assert_eq!(third.code_lines(), &["code here".to_string()][..]);
    assert_eq!(third.layout(), LayoutKind::Code);
}

#[test]
fn test_nine_bullets_split_five_four() {
    let mut doc = String::from("# Deck\n---\n## Many points\n");
    for i in 1..=9 {
        doc.push_str(&format!("* point {}\n", i));
    }
    let deck = parse_deck(&doc, &ParserConfig::default());
    let slide = &deck.slides[1];

    assert_eq!(slide.layout(), LayoutKind::TwoColumn);
    let (left, right) = slide.columns().expect("two columns");
    assert_eq!(left.items.len(), 5);
    assert_eq!(right.items.len(), 4);
    assert_eq!(left.items.last().map(String::as_str), Some("point 5"));
    assert_eq!(right.items.first().map(String::as_str), Some("point 6"));
}

#[test]
fn test_two_named_sections_scenario() {
    let doc = "### Themenblöcke\n* A\n* B\n* C\n### Lernziele\n* D\n* E\n* F";
    let deck = parse_deck(doc, &ParserConfig::default());
    let slide = &deck.slides[0];

    assert_eq!(slide.named_sections().len(), 2);
    assert_eq!(slide.named_sections()[0].name, "Themenblöcke");
    assert_eq!(slide.named_sections()[0].items, vec!["A", "B", "C"]);
    assert_eq!(slide.named_sections()[1].name, "Lernziele");
    assert_eq!(slide.named_sections()[1].items, vec!["D", "E", "F"]);
    assert!(slide.bullets().is_empty());
    assert_eq!(slide.layout(), LayoutKind::TwoColumn);
}

#[test]
fn test_empty_documents() {
    let config = ParserConfig::default();
    assert!(parse_deck("", &config).slides.is_empty());
    assert!(parse_deck("---\n\n---\n   \n---", &config).slides.is_empty());
    // Notes alone carry no slide
    assert!(parse_deck("Note: only notes", &config).slides.is_empty());
}

#[test]
fn test_malformed_markup_passes_through() {
    let doc = "## Broken\n<div class=\"open\">\nStill here\n<strong>unclosed";
    let deck = parse_deck(doc, &ParserConfig::default());
    let slide = &deck.slides[0];
    assert_eq!(
        slide.body_lines(),
        &[
            "<div class=\"open\">".to_string(),
            "Still here".to_string(),
            "<strong>unclosed".to_string()
        ][..]
    );
    assert_eq!(slide.layout(), LayoutKind::Title);
}

#[test]
fn test_workshop_deck() {
    // Set up a logger to see layout decisions
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();

    let deck = parse_deck(WORKSHOP_DECK, &ParserConfig::default());

    assert_eq!(
        deck.metadata.title.as_deref(),
        Some("Software-Architektur Workshop")
    );
    assert_eq!(deck.slides.len(), 5);

    let title = &deck.slides[0];
    assert_eq!(title.title(), "Software-Architektur");
    assert_eq!(title.subtitle(), Some("Design Patterns in der Praxis"));
    assert_eq!(title.layout(), LayoutKind::Title);
    assert_eq!(
        title.speaker_notes(),
        Some("Begrüßung und kurze Vorstellungsrunde.")
    );

    let agenda = &deck.slides[1];
    assert_eq!(agenda.layout(), LayoutKind::TwoColumn);
    assert_eq!(
        agenda.section("Themenblöcke").expect("left column")[0],
        "Tag 1: Erzeugungsmuster"
    );
    assert_eq!(
        agenda.section("Lernziele").expect("right column"),
        &[
            "Muster erkennen".to_string(),
            "Muster anwenden".to_string(),
            "Anti-Patterns vermeiden".to_string()
        ][..]
    );
    assert_eq!(
        agenda.speaker_notes(),
        Some("Agenda kurz durchgehen.\nFragen sammeln.")
    );

    let divider = &deck.slides[2];
    assert_eq!(divider.title(), "Teil 1: Erzeugungsmuster");
    assert_eq!(divider.layout(), LayoutKind::Section);

    let code = &deck.slides[3];
    assert_eq!(code.layout(), LayoutKind::Code);
    assert_eq!(
        code.code_lines(),
        &[
            "public class Contract {".to_string(),
            "    private final String id;".to_string(),
            "}".to_string()
        ][..]
    );
    assert!(code.body_lines().is_empty());
    assert_eq!(code.speaker_notes(), Some("Code live erklären."));

    let prose = &deck.slides[4];
    assert_eq!(prose.layout(), LayoutKind::ContentPlain);
    assert_eq!(
        prose.body_lines(),
        &[
            "Muster sind bewährte Lösungen.".to_string(),
            "Sie schaffen ein gemeinsames Vokabular.".to_string()
        ][..]
    );

    for slide in &deck.slides {
        let notes = slide.speaker_notes().unwrap_or_default();
        assert!(!notes.contains("<!--"));
        assert!(slide.bullets().iter().all(|b| !b.contains("<!--")));
        for section in slide.named_sections() {
            assert!(section.items.iter().all(|b| !b.contains("<!--")));
        }
    }
}

#[test]
fn test_parse_file_matches_parse_deck() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("deck.md");
    fs::write(&path, WORKSHOP_DECK).expect("Failed to write markdown file");

    let config = ParserConfig::default();
    let from_file = parse_file(&path, &config).expect("parse should succeed");
    assert_eq!(from_file, parse_deck(WORKSHOP_DECK, &config));
}

#[test]
fn test_custom_section_keywords() {
    let layout = deck_outline::LayoutConfig::new().with_section_keywords(["Modul"]);
    let config = ParserConfig::new().with_layout(layout);
    let deck = parse_deck("# Start\n---\n# Modul 3: Testing\n---\n# Teil 2: Patterns", &config);

    assert_eq!(deck.slides[1].layout(), LayoutKind::Section);
    assert_eq!(deck.slides[2].layout(), LayoutKind::ContentPlain);
}
