//! End-to-end tests for the stripping pipeline.

use super::helpers::{load_fixture, ARTICLE_STRIPPED};
use wikistrip::{StripperConfig, WikiStripper};

fn stripper(config: StripperConfig) -> WikiStripper {
    WikiStripper::new(config).expect("Should build stripper")
}

// ============================================================================
// Full Article Tests
// ============================================================================

#[test]
fn strips_article_with_default_config() {
    let output = stripper(StripperConfig::default()).strip_bytes(&load_fixture("article.wiki"));
    assert_eq!(output, ARTICLE_STRIPPED);
}

#[test]
fn preserves_list_items_when_asked() {
    let stripper = stripper(StripperConfig::default().with_preserve_lists(true));
    let output = stripper.strip_bytes(&load_fixture("article.wiki"));

    assert!(output.contains("\nMemory safety without garbage collection\n"));
    assert!(output.contains("\nZero-cost abstractions\n"));
    assert!(!output.contains('*'));
}

#[test]
fn ascii_range_drops_newlines_too() {
    let stripper = stripper(StripperConfig::default().with_valid_unicodes([(0x20, 0x7e)]));
    let output = stripper.strip_bytes(&load_fixture("article.wiki"));

    assert!(!output.contains('\n'));
    assert!(output.starts_with("Rust is a programming language"));
    assert!(output.contains("concurrency.Rust began"));
}

#[test]
fn article_output_has_no_markup_left() {
    let output = stripper(StripperConfig::default()).strip_bytes(&load_fixture("article.wiki"));
    for markup in ["[[", "]]", "{{", "}}", "''", "<ref", "<!--", "==", "&amp;"] {
        assert!(!output.contains(markup), "found {:?} in output", markup);
    }
}

#[test]
fn article_snapshot() {
    let output = stripper(StripperConfig::default().with_preserve_lists(true))
        .strip_bytes(&load_fixture("article.wiki"));
    let output = format!("=== article.wiki, preserve_lists ===\n{}", output);
    insta::assert_snapshot!("article_preserve_lists", output);
}

// ============================================================================
// Behaviour Tests
// ============================================================================

#[test]
fn extraction_examples() {
    let stripper = stripper(StripperConfig::default());
    assert_eq!(stripper.strip("'''bold'''"), "bold");
    assert_eq!(stripper.strip("[[Article|Shown Text]]"), "Shown Text");
}

#[test]
fn deletion_examples() {
    let stripper = stripper(StripperConfig::default());
    assert_eq!(stripper.strip("{{template|arg}}"), "");
    assert_eq!(stripper.strip("# REDIRECT [[Target]]"), "");
}

#[test]
fn list_toggle_examples() {
    assert_eq!(stripper(StripperConfig::default()).strip("* item one"), "");
    assert_eq!(
        stripper(StripperConfig::default().with_preserve_lists(true)).strip("* item one"),
        " item one"
    );
}

#[test]
fn deep_nesting_converges() {
    let stripper = stripper(StripperConfig::default());
    for depth in 1..=40 {
        let input = format!("keep {}x{} this", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(stripper.strip(&input), "keep this", "depth {}", depth);
    }
}

#[test]
fn mixed_nesting_converges() {
    let stripper = stripper(StripperConfig::default());
    assert_eq!(
        stripper.strip("a {{outer|[[x|y]]|(note {{inner}})}} b"),
        "a b"
    );
    assert_eq!(stripper.strip("''[[Link|'''deep''']]''"), "deep");
}

#[test]
fn iteration_cap_bounds_work() {
    let capped = stripper(StripperConfig::default().with_max_iterations(2));
    assert_eq!(capped.strip("x ((((a)))) y"), "x (()) y");
}

#[test]
fn nested_tags_are_peeled() {
    let stripper = stripper(StripperConfig::default());
    assert_eq!(
        stripper.strip("a<div><span><b>x</b></span><br/></div>b"),
        "ab"
    );
}

#[test]
fn markup_after_a_megabyte_of_prose_is_rewritten() {
    let stripper = stripper(StripperConfig::default());
    let mut input = "plain words here. ".repeat(70_000);
    input.push_str("[[Rust]] '''bold'''");

    let output = stripper.strip(&input);

    assert!(output.len() > 1_000_000);
    assert!(
        output.ends_with("here. Rust bold"),
        "tail: {:?}",
        &output[output.len() - 30..]
    );
}

#[test]
fn malformed_markup_survives() {
    let stripper = stripper(StripperConfig::default());
    assert_eq!(stripper.strip("open [[link and {{template"), "open [[link and {{template");
}

#[test]
fn invalid_ranges_carve_out_of_valid() {
    let stripper = stripper(
        StripperConfig::default()
            .with_valid_unicodes([(0x20, 0x7e), (0xAC00, 0xD7A3)])
            .with_invalid_unicodes([(0x30, 0x39)]),
    );
    assert_eq!(stripper.strip("'''한국어''' 2024 ok\u{e9}"), "한국어 ok");
}

#[test]
fn equal_inputs_give_equal_outputs() {
    let input = String::from_utf8(load_fixture("article.wiki")).unwrap();
    let first = stripper(StripperConfig::default());
    let second = stripper(StripperConfig::default());
    assert_eq!(first.strip(&input), second.strip(&input));
    assert_eq!(first.strip(&input), first.strip(&input));
}

#[test]
fn shared_stripper_across_threads() {
    let stripper = stripper(StripperConfig::default());
    let article = load_fixture("article.wiki");

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| stripper.strip_bytes(&article)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.iter().all(|output| output == ARTICLE_STRIPPED));
}
