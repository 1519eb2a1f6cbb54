use deck_outline::lines::is_list_item;
use deck_outline::{parse_deck, split_chunks, LayoutKind, ParserConfig};
use proptest::prelude::*;
use proptest::sample::select;

const DECK_LINES: &[&str] = &[
    "# Title",
    "## Heading",
    "### Group:",
    "### Other",
    "* item",
    "- dash item",
    "1. numbered",
    "* **bold** item",
    "- - nested",
    "plain text",
    "   indented text",
    "",
    "   ",
    "---",
    "Note: remember this",
    "```",
    "```rust",
    "    let x = 1;",
    "<div class=\"box\">",
    "</div>",
    "text <!-- .element: class=\"fragment\" -->",
    "* point <!-- .element: class=\"fragment\" data-fragment-index=\"1\" -->",
    "<strong>strong</strong> words",
    "# Teil 1: Basics",
];

fn deck_doc() -> impl Strategy<Value = String> {
    prop::collection::vec(select(DECK_LINES), 0..40).prop_map(|lines| lines.join("\n"))
}

/// Documents without code fences, so every `---` line is a delimiter.
fn fenceless_doc() -> impl Strategy<Value = String> {
    let lines: Vec<&str> = DECK_LINES
        .iter()
        .copied()
        .filter(|l| !l.starts_with("```"))
        .collect();
    prop::collection::vec(select(lines), 0..40).prop_map(|lines| lines.join("\n"))
}

fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn chunk_boundaries_round_trip(doc in fenceless_doc()) {
        let chunks = split_chunks(&doc);
        let expected: String = doc
            .lines()
            .filter(|l| l.trim() != "---")
            .map(non_whitespace)
            .collect();
        prop_assert_eq!(non_whitespace(&chunks.concat()), expected);
        prop_assert!(chunks.iter().all(|c| !c.trim().is_empty()));
    }

    #[test]
    fn parsing_is_idempotent(doc in deck_doc()) {
        let config = ParserConfig::default();
        prop_assert_eq!(parse_deck(&doc, &config), parse_deck(&doc, &config));
    }

    #[test]
    fn bullets_carry_no_list_prefix(doc in deck_doc()) {
        let deck = parse_deck(&doc, &ParserConfig::default());
        for slide in &deck.slides {
            let section_items = slide.named_sections().iter().flat_map(|s| s.items.iter());
            for bullet in slide.bullets().iter().chain(section_items) {
                prop_assert!(!bullet.is_empty());
                prop_assert!(!is_list_item(bullet), "bullet kept its prefix: {:?}", bullet);
            }
        }
    }

    #[test]
    fn code_lines_are_document_lines(doc in deck_doc()) {
        let deck = parse_deck(&doc, &ParserConfig::default());
        for slide in &deck.slides {
            for code in slide.code_lines() {
                prop_assert!(doc.lines().any(|l| l == code.as_str()), "code line changed: {:?}", code);
                prop_assert!(!code.trim().is_empty());
            }
        }
    }

    #[test]
    fn code_layout_iff_code_lines(doc in deck_doc()) {
        let deck = parse_deck(&doc, &ParserConfig::default());
        for slide in &deck.slides {
            prop_assert_eq!(slide.layout() == LayoutKind::Code, !slide.code_lines().is_empty());
        }
    }

    #[test]
    fn two_named_sections_are_two_columns(doc in deck_doc()) {
        let deck = parse_deck(&doc, &ParserConfig::default());
        for slide in &deck.slides {
            if slide.named_sections().len() == 2 && slide.code_lines().is_empty() {
                prop_assert_eq!(slide.layout(), LayoutKind::TwoColumn);
                let (left, right) = slide.columns().expect("two columns");
                prop_assert_eq!(left.heading.as_deref(), Some(slide.named_sections()[0].name.as_str()));
                prop_assert_eq!(right.heading.as_deref(), Some(slide.named_sections()[1].name.as_str()));
            }
        }
    }

    #[test]
    fn annotations_never_reach_prose_fields(doc in deck_doc()) {
        let deck = parse_deck(&doc, &ParserConfig::default());
        for slide in &deck.slides {
            let mut fields: Vec<&str> = vec![slide.title()];
            fields.extend(slide.subtitle());
            fields.extend(slide.speaker_notes());
            fields.extend(slide.body_lines().iter().map(String::as_str));
            fields.extend(slide.bullets().iter().map(String::as_str));
            for section in slide.named_sections() {
                fields.extend(section.items.iter().map(String::as_str));
            }
            for field in fields {
                prop_assert!(!field.contains(".element:"), "annotation leaked: {:?}", field);
            }
        }
    }

    #[test]
    fn no_blank_entries(doc in deck_doc()) {
        let deck = parse_deck(&doc, &ParserConfig::default());
        for slide in &deck.slides {
            prop_assert!(slide.body_lines().iter().all(|l| !l.trim().is_empty()));
            prop_assert!(slide.bullets().iter().all(|l| !l.trim().is_empty()));
        }
    }
}
