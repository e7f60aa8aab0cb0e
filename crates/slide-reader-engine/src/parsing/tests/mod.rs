//! Integration tests for the parsing module.
//!
//! Every test also runs the output through the invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{BulletPoint, ParentBullet, Slide, SlideKind};
use crate::parsing::{process_content, snapshot};

fn slides(content: &str) -> Vec<Slide> {
    let slides = process_content("Doc", content);
    snapshot::invariants(&slides);
    slides
}

fn bullet(slide: &Slide) -> &BulletPoint {
    slide
        .bullet()
        .unwrap_or_else(|| panic!("expected bullet, got {slide:?}"))
}

fn sentences(slides: &[Slide]) -> Vec<&str> {
    slides.iter().map(|s| s.sentence.as_str()).collect()
}

// End-to-end

#[test]
fn demo_document() {
    let content = "# Intro\n\nHello world. This is a test.\n\n- one\n- two";
    let slides = process_content("Demo", content);
    snapshot::invariants(&slides);

    assert_eq!(slides.len(), 5);
    assert_eq!(
        slides[0],
        Slide {
            id: 0,
            title: "Demo".into(),
            subtitle: None,
            sentence: "Intro".into(),
            kind: SlideKind::SubtitleIntro,
        }
    );
    assert_eq!(
        slides[1],
        Slide {
            id: 1,
            title: "Demo".into(),
            subtitle: Some("Intro".into()),
            sentence: "Hello world.".into(),
            kind: SlideKind::Prose,
        }
    );
    assert_eq!(slides[2].sentence, "This is a test.");
    assert!(slides[2].is_prose());

    assert_eq!(slides[3].sentence, "one");
    assert!(bullet(&slides[3]).history.is_empty());
    assert_eq!(slides[4].sentence, "two");
    assert_eq!(bullet(&slides[4]).history, vec!["one"]);

    assert!(slides.iter().all(|s| s.title == "Demo"));
    assert!(
        slides[1..]
            .iter()
            .all(|s| s.subtitle.as_deref() == Some("Intro"))
    );
}

#[test]
fn demo_document_outline() {
    let content = "# Intro\n\nHello world. This is a test.\n\n- one\n- two";
    insta::assert_yaml_snapshot!(snapshot::outline(&slides(content)), @r"
    - subtitle_intro Intro
    - prose Hello world.
    - prose This is a test.
    - bullet one
    - bullet two
    ");
}

// Empty and degenerate input

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t\n")]
#[case("---\n***")]
fn nothing_to_present(#[case] content: &str) {
    assert!(slides(content).is_empty());
}

#[test]
fn idempotent() {
    let content = "# A\n\nText. More [link](http://x.io/a.b).\n\n- x\n  - y\n\n| h |\n|---|\n| v |\n\nB Section\n\n```\ncode\n```";
    assert_eq!(slides(content), slides(content));
}

// Ids and subtitles

#[test]
fn ids_continue_across_sections() {
    let slides = slides("# One\nFirst.\n# Two\nSecond.\n# Three\nThird.");
    let ids: Vec<usize> = slides.iter().map(|s| s.id).collect();
    assert_eq!(ids, (0..6).collect::<Vec<_>>());
}

#[test]
fn slides_carry_their_section_subtitle() {
    let slides = slides("Before.\n# One\nIn one.\n## Two\n- in two");
    let pairs: Vec<(&str, Option<&str>)> = slides
        .iter()
        .map(|s| (s.sentence.as_str(), s.subtitle.as_deref()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Before.", None),
            ("One", None),
            ("In one.", Some("One")),
            ("Two", None),
            ("in two", Some("Two")),
        ]
    );
}

// Lists

#[test]
fn list_history_accumulates() {
    let slides = slides("- a\n- b\n- c");
    let histories: Vec<Vec<String>> = slides.iter().map(|s| bullet(s).history.clone()).collect();
    assert_eq!(
        histories,
        vec![vec![], vec!["a".to_string()], vec!["a".to_string(), "b".to_string()]]
    );
}

#[test]
fn dedent_starts_fresh_history_at_outer_level() {
    let slides = slides("- a\n  - b\n- c");
    let c = bullet(&slides[2]);
    assert_eq!(c.indent_level, 0);
    assert_eq!(c.history, vec!["a"]);

    let b = bullet(&slides[1]);
    assert_eq!(b.indent_level, 1);
    assert!(b.history.is_empty());
}

#[test]
fn nested_items_know_their_parent() {
    let slides = slides("1. First\n  - detail one\n  - detail two\n2. Second\n  - detail three");
    assert_eq!(
        bullet(&slides[2]).parent,
        Some(ParentBullet {
            text: "First".into(),
            numbered: true,
            number: Some(1),
        })
    );
    assert_eq!(bullet(&slides[2]).history, vec!["detail one"]);

    let last = bullet(&slides[4]);
    assert_eq!(last.parent.as_ref().map(|p| p.number), Some(Some(2)));
    assert!(last.history.is_empty());

    assert!(bullet(&slides[0]).parent.is_none());
    assert!(bullet(&slides[3]).numbered);
    assert_eq!(bullet(&slides[3]).number, Some(2));
}

#[test]
fn empty_line_terminates_list() {
    let slides = slides("- a\n- b\n\n- c\n  - d");
    assert!(bullet(&slides[2]).history.is_empty());
    assert_eq!(
        bullet(&slides[3]).parent.as_ref().map(|p| p.text.as_str()),
        Some("c")
    );
}

#[test]
fn prose_interrupts_list_history() {
    let slides = slides("- a\n- b\nSome prose.\n- c");
    assert_eq!(sentences(&slides), vec!["a", "b", "Some prose.", "c"]);
    assert!(bullet(&slides[3]).history.is_empty());
}

#[test]
fn label_lines_are_top_level_bullets() {
    let slides = slides("Speed: very fast\nSafety: guaranteed");
    assert_eq!(sentences(&slides), vec!["Speed: very fast", "Safety: guaranteed"]);
    let second = bullet(&slides[1]);
    assert_eq!(second.indent_level, 0);
    assert!(!second.numbered);
    assert_eq!(second.history, vec!["Speed: very fast"]);
}

// Code fences

#[test]
fn code_fence_is_opaque() {
    let content = "Intro line.\n\n```python\n# comment\n- not a bullet\n\n| not | table |\n```\nAfter.";
    let slides = slides(content);
    assert_eq!(sentences(&slides)[0], "Intro line.");
    assert_eq!(
        slides[1].kind,
        SlideKind::Code {
            language: "python".into()
        }
    );
    assert_eq!(
        slides[1].sentence,
        "# comment\n- not a bullet\n\n| not | table |"
    );
    assert_eq!(slides[2].sentence, "After.");
    assert_eq!(slides.len(), 3);
}

#[test]
fn code_keeps_indentation() {
    let slides = slides("```\nfn main() {\n    println!(\"hi\");\n}\n```");
    assert_eq!(slides[0].sentence, "fn main() {\n    println!(\"hi\");\n}");
    assert_eq!(
        slides[0].kind,
        SlideKind::Code {
            language: "text".into()
        }
    );
}

#[test]
fn prose_directly_above_fence_follows_the_code() {
    let slides = slides("Look at this:\n```\nx = 1\n```");
    assert_eq!(sentences(&slides), vec!["x = 1", "Look at this:"]);
    assert_eq!(slides[0].kind.name(), "code");
}

#[test]
fn paragraph_stays_open_across_fence() {
    let slides = slides("Before fence.\n```\nx\n```\nAfter.");
    assert_eq!(
        snapshot::outline(&slides),
        vec!["code x", "prose Before fence.", "prose After."]
    );
}

#[test]
fn prose_runs_on_across_fence() {
    let slides = slides("This sentence\n```\nx\n```\ncontinues here.");
    assert_eq!(sentences(&slides), vec!["x", "This sentence continues here."]);
}

// Unterminated fences are flushed as a best-effort code slide rather than
// dropped; any paragraph left open above them follows it.
#[test]
fn unterminated_fence_is_flushed_at_end() {
    let slides = slides("Text.\n```rust\nlet x = 1;\n\nlet y = 2;");
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].sentence, "let x = 1;\n\nlet y = 2;");
    assert_eq!(slides[0].kind.name(), "code");
    assert_eq!(slides[1].sentence, "Text.");
}

// Tables

#[test]
fn table_is_parsed() {
    let slides = slides("| Name | Role |\n|------|------|\n| Ann | Dev |\n| Bo | Ops |\n\nDone.");
    assert_eq!(slides[0].sentence, "Table: Name, Role");
    match &slides[0].kind {
        SlideKind::Table { headers, rows } => {
            assert_eq!(headers.len(), 2);
            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|r| r.len() == 2));
            assert_eq!(rows[1], vec!["Bo", "Ops"]);
        }
        other => panic!("expected table, got {other:?}"),
    }
    assert_eq!(slides[1].sentence, "Done.");
}

#[test]
fn table_at_end_of_document_is_kept() {
    let slides = slides("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].kind.name(), "table");
}

#[test]
fn single_row_table_is_dropped() {
    let slides = slides("| lonely | row |\nAfter.");
    assert_eq!(sentences(&slides), vec!["After."]);
}

// Other blocks

#[test]
fn block_kinds_in_order() {
    let content = [
        "Opening sentence.",
        "![Diagram](img/d.png)",
        "> Quoted wisdom",
        "- [ ] open task",
        "- [x] closed task",
        "[^1]: The footnote.",
        "$$a^2 + b^2 = c^2$$",
        "---",
        "Closing sentence[^1].",
    ]
    .join("\n");
    let slides = slides(&content);

    assert_eq!(
        slides.iter().map(|s| s.kind.clone()).collect::<Vec<_>>(),
        vec![
            SlideKind::Prose,
            SlideKind::Image {
                url: "img/d.png".into(),
                alt: "Diagram".into(),
            },
            SlideKind::Blockquote,
            SlideKind::Checkbox { checked: false },
            SlideKind::Checkbox { checked: true },
            SlideKind::FootnoteDef {
                footnote_id: "1".into(),
                text: "The footnote.".into(),
            },
            SlideKind::MathBlock {
                content: "a^2 + b^2 = c^2".into(),
            },
            SlideKind::Prose,
        ]
    );
    assert_eq!(
        sentences(&slides),
        vec![
            "Opening sentence.",
            "Diagram",
            "Quoted wisdom",
            "open task",
            "closed task",
            "The footnote.",
            "a^2 + b^2 = c^2",
            "Closing sentence[^1].",
        ]
    );
}

#[test]
fn image_without_alt_is_captioned() {
    let slides = slides("![](photo.jpg)");
    assert_eq!(slides[0].sentence, "Image");
}

#[test]
fn multi_line_paragraph_joins_before_splitting() {
    let slides = slides("This sentence spans\ntwo lines. And this\none too.");
    assert_eq!(
        sentences(&slides),
        vec!["This sentence spans two lines.", "And this one too."]
    );
}

#[test]
fn urls_survive_segmentation() {
    let slides = slides("Visit https://a.b/c.d.e for info. Thanks.");
    assert_eq!(
        sentences(&slides),
        vec!["Visit https://a.b/c.d.e for info.", "Thanks."]
    );
}

#[test]
fn implicit_headings_become_subtitles() {
    let slides = slides("Why Segment Text?\n\nShort slides are easier to read.");
    assert_eq!(slides[0].kind, SlideKind::SubtitleIntro);
    assert_eq!(slides[0].sentence, "Why Segment Text?");
    assert_eq!(slides[1].subtitle.as_deref(), Some("Why Segment Text?"));
}
