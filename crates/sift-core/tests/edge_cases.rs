//! Property and edge-case tests for sift-core
//!
//! Exercises the invariants the reduction guarantees: path resets,
//! collapse behavior, payload exclusivity, and the depth guard.

use serde_json::Value;
use sift_core::{filter_classes, reduce_document, reduce_page, unique_classes, MAX_DEPTH};

fn reduce_to_json(html: &str) -> Value {
    let mut doc = sift_html::parse(html);
    let page = reduce_page(&mut doc);
    serde_json::to_value(&page.data).unwrap()
}

// ============================================================================
// CLASSIFIER PROPERTIES
// ============================================================================

#[test]
fn test_classifier_idempotence() {
    for input in [
        "headline btn mt-4 sidebar",
        "red-500 article-body lg:flex",
        "",
        "single",
    ] {
        let once = filter_classes(input);
        let twice = filter_classes(&once.join(" "));
        assert_eq!(once, twice, "classifying twice diverged for {input:?}");
    }
}

#[test]
fn test_uniqueness_monotonicity() {
    let one = sift_html::parse(r#"<div class="landmark"><p>x</p></div>"#);
    let unique = unique_classes(one.tree(), one.tree().root());
    assert!(unique.contains("landmark"));

    let two = sift_html::parse(
        r#"<div class="landmark"><p>x</p></div><span class="landmark">y</span>"#,
    );
    let unique = unique_classes(two.tree(), two.tree().root());
    assert!(!unique.contains("landmark"));
}

// ============================================================================
// SELECTOR PATHS
// ============================================================================

#[test]
fn test_path_reset_invariant_for_ids() {
    // However deep the element with an id sits, its path has length 1
    let html = "<div><div><div><div><p id=\"deep\">text</p></div></div></div></div>";
    let json = reduce_to_json(html);
    assert_eq!(json[0]["selector"], "p#deep");
}

#[test]
fn test_unique_class_resets_path() {
    let html = r#"<div><div><span class="signature">sig</span></div></div>"#;
    let json = reduce_to_json(html);
    assert_eq!(json[0]["selector"], "span.signature");
}

// ============================================================================
// COLLAPSE AND BRANCH PRESERVATION
// ============================================================================

#[test]
fn test_collapse_law_for_any_depth() {
    for n in [0usize, 1, 2, 6, 20] {
        let html = format!(
            "{}<p>Leaf</p>{}",
            "<div>".repeat(n),
            "</div>".repeat(n)
        );
        let json = reduce_to_json(&html);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 1, "chain of {n} wrappers should collapse");
        assert_eq!(arr[0]["text"], "Leaf");
        let expected = format!("{}p", "div ".repeat(n));
        assert_eq!(arr[0]["selector"], expected.trim());
    }
}

#[test]
fn test_branch_preservation_order() {
    let html = "<div><p>1</p><p>2</p><p>3</p><p>4</p></div>";
    let json = reduce_to_json(html);
    let children = json[0]["div"].as_array().unwrap();
    let texts: Vec<_> = children.iter().map(|c| c["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["1", "2", "3", "4"]);
}

// ============================================================================
// CONTENT-NODE INVARIANT
// ============================================================================

fn assert_single_payload(node: &Value) {
    if let Some(obj) = node.as_object() {
        if obj.contains_key("type") {
            let payloads = ["text", "image", "video"]
                .iter()
                .filter(|k| obj.contains_key(**k))
                .count();
            assert_eq!(payloads, 1, "content node must carry exactly one payload: {node}");
            return;
        }
        // Container: one key mapping to a non-empty array
        assert_eq!(obj.len(), 1, "container must be single-key: {node}");
        let children = obj.values().next().unwrap().as_array().unwrap();
        assert!(!children.is_empty(), "container must not be empty: {node}");
        for child in children {
            assert_single_payload(child);
        }
    }
}

#[test]
fn test_every_content_node_has_one_payload() {
    let html = r#"
        <article>
            <header><h1>Title</h1><p>Deck</p></header>
            <img src="https://x/a.png">
            <section><p>One</p><p>Two</p></section>
            <video src="https://x/v.mp4"></video>
        </article>
    "#;
    let json = reduce_to_json(html);
    for node in json.as_array().unwrap() {
        assert_single_payload(node);
    }
}

// ============================================================================
// DEPTH GUARD AND DEGENERATE INPUT
// ============================================================================

#[test]
fn test_pathological_depth_truncated() {
    let n = MAX_DEPTH + 40;
    let html = format!("{}<p>bottom</p>{}", "<div>".repeat(n), "</div>".repeat(n));
    let mut doc = sift_html::parse(&html);
    let page = reduce_page(&mut doc);
    assert!(page.data.is_empty());
}

#[test]
fn test_empty_body() {
    assert_eq!(reduce_to_json(""), serde_json::json!([]));
    assert_eq!(reduce_to_json("   \n "), serde_json::json!([]));
}

#[test]
fn test_decorative_elements_vanish() {
    // Divs with neither text nor children are pruned, as are empty spans
    let html = "<div></div><span></span><p>kept</p>";
    let json = reduce_to_json(html);
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["text"], "kept");
}

#[test]
fn test_aria_hidden_pruned_through_pipeline() {
    let html = r#"<div aria-hidden="true"><p>screenreader-skipped</p></div><p>seen</p>"#;
    let json = reduce_to_json(html);
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["text"], "seen");
}

#[test]
fn test_reduction_does_not_mutate_input() {
    let html = "<div><p>stable</p></div>";
    let mut doc = sift_html::parse(html);
    sift_core::strip_document(&mut doc);

    let before = doc.tree().len();
    let first = reduce_document(&doc);
    let second = reduce_document(&doc);

    assert_eq!(doc.tree().len(), before);
    assert_eq!(first, second);
}
