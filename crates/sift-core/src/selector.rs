//! Selector Path Builder
//!
//! Derives a stable ancestry-based identifier for each node. Paths grow
//! with depth through anonymous markup and reset at identity boundaries:
//! an element with an id, or with a class that is globally unique in the
//! document. The result is CSS-like but synthetic - it never comes from a
//! stylesheet.

use std::collections::HashSet;

/// Render one `tag[#id][.class...]` segment
///
/// Classes join into a single dotted group, not one segment per class.
pub fn build_segment(tag: &str, id: Option<&str>, classes: &[String]) -> String {
    let mut segment = String::from(tag);
    if let Some(id) = id {
        if !id.trim().is_empty() {
            segment.push('#');
            segment.push_str(id.trim());
        }
    }
    if !classes.is_empty() {
        segment.push('.');
        segment.push_str(&classes.join("."));
    }
    segment
}

/// Compute a node's selector path from its ancestor path
///
/// Reset rules, in order: a non-empty id discards the ancestor path; a
/// surviving class found in the unique set (first match in source order
/// wins) discards it too, and the segment narrows to that class alone.
/// Otherwise the ancestor path is inherited and grows by one segment.
pub fn extend_path(
    parent: &[String],
    tag: &str,
    id: Option<&str>,
    classes: &[String],
    unique: &HashSet<String>,
) -> Vec<String> {
    if let Some(id) = id.map(str::trim).filter(|s| !s.is_empty()) {
        return vec![build_segment(tag, Some(id), classes)];
    }
    if let Some(unique_class) = classes.iter().find(|c| unique.contains(c.as_str())) {
        return vec![build_segment(tag, None, std::slice::from_ref(unique_class))];
    }
    let mut path = parent.to_vec();
    path.push(build_segment(tag, None, classes));
    path
}

/// Render a path as the space-joined selector string
pub fn render_path(path: &[String]) -> String {
    path.join(" ")
}

/// Compute the selector key a container node is emitted under
///
/// Same segment shape, but the class group is substituted by the first
/// unique class when one matches; the id is always kept.
pub fn container_key(
    tag: &str,
    id: Option<&str>,
    classes: &[String],
    unique: &HashSet<String>,
) -> String {
    if let Some(unique_class) = classes.iter().find(|c| unique.contains(c.as_str())) {
        build_segment(tag, id, std::slice::from_ref(unique_class))
    } else {
        build_segment(tag, id, classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_segment_rendering() {
        assert_eq!(build_segment("div", None, &[]), "div");
        assert_eq!(build_segment("div", Some("main"), &[]), "div#main");
        assert_eq!(
            build_segment("div", Some("main"), &classes(&["story", "lead"])),
            "div#main.story.lead"
        );
        assert_eq!(build_segment("p", Some("  "), &[]), "p");
    }

    #[test]
    fn test_inherit_grows_path() {
        let unique = HashSet::new();
        let parent = vec!["div".to_string(), "section".to_string()];
        let path = extend_path(&parent, "p", None, &[], &unique);
        assert_eq!(render_path(&path), "div section p");
    }

    #[test]
    fn test_id_resets_path() {
        let unique = HashSet::new();
        let parent = vec!["div".to_string(); 7];
        let path = extend_path(&parent, "section", Some("news"), &classes(&["wrap"]), &unique);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0], "section#news.wrap");
    }

    #[test]
    fn test_unique_class_resets_and_narrows() {
        let unique: HashSet<String> = ["masthead".to_string()].into();
        let parent = vec!["div".to_string()];
        let path = extend_path(
            &parent,
            "header",
            None,
            &classes(&["wrap", "masthead", "tall"]),
            &unique,
        );
        assert_eq!(path, vec!["header.masthead".to_string()]);
    }

    #[test]
    fn test_container_key_substitution() {
        let unique: HashSet<String> = ["gallery".to_string()].into();
        let key = container_key("div", None, &classes(&["wrap", "gallery"]), &unique);
        assert_eq!(key, "div.gallery");
        let key = container_key("div", Some("shop"), &classes(&["wrap", "promo"]), &unique);
        assert_eq!(key, "div#shop.wrap.promo");
    }
}
