//! Parsers for the two dependency manifest formats.
//!
//! The optional manifest groups specifiers under `#/name` section headers; the
//! mandatory manifest is a flat list. Specifier syntax is never interpreted
//! here: malformed lines pass through verbatim and surface at install time.

use std::collections::{BTreeMap, BTreeSet};

/// Two-character marker that opens a named extras group.
pub const GROUP_MARKER: &str = "#/";

/// Name of the synthesized union group.
pub const ALL_GROUP: &str = "all";

/// Parse the optional dependency manifest into named groups.
///
/// A `#/name` line opens a group; following specifier lines belong to it.
/// Blank lines and plain `#` comments are skipped. Lines before the first
/// header are dropped: every optional dependency must live under a group.
pub fn parse_extras(content: &str) -> BTreeMap<String, Vec<String>> {
    let mut extras: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        if let Some(name) = line.strip_prefix(GROUP_MARKER) {
            // A repeated header resets the group: last declaration wins.
            extras.insert(name.to_string(), Vec::new());
            current = Some(name.to_string());
        } else if line.is_empty() || line.starts_with('#') {
            continue;
        } else if let Some(group) = current.as_deref() {
            if let Some(deps) = extras.get_mut(group) {
                deps.push(line.to_string());
            }
        }
    }

    extras
}

/// Deduplicated union of every group's members, sorted for reproducible
/// output. Every member appears in at least one named group by construction.
pub fn synthesize_all(extras: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    let unique: BTreeSet<&str> = extras.values().flatten().map(String::as_str).collect();
    unique.into_iter().map(str::to_string).collect()
}

/// Parse the mandatory manifest: keep every line that is not a comment.
///
/// Unlike the optional parser, blank lines are retained as empty entries.
/// Historical behavior of the original manifests, kept bit-for-bit.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headerless_manifest_yields_empty_mapping() {
        let content = "requests\nnumpy\n";
        assert!(parse_extras(content).is_empty());
    }

    #[test]
    fn lines_before_first_header_are_dropped() {
        let content = "stray-dep\n#/gpu\ntorch\n";
        let extras = parse_extras(content);
        assert_eq!(extras.len(), 1);
        assert_eq!(extras["gpu"], vec!["torch"]);
    }

    #[test]
    fn groups_accumulate_in_file_order() {
        let content = "#/api\nfastapi\nuvicorn\n#/gpu\ntorch\n";
        let extras = parse_extras(content);
        assert_eq!(extras["api"], vec!["fastapi", "uvicorn"]);
        assert_eq!(extras["gpu"], vec!["torch"]);
    }

    #[test]
    fn blank_and_comment_lines_never_join_a_group() {
        let content = "#/api\nfastapi\n\n# pinned for CVE-2023-xxxx\nuvicorn\n";
        let extras = parse_extras(content);
        assert_eq!(extras["api"], vec!["fastapi", "uvicorn"]);
    }

    #[test]
    fn repeated_header_resets_the_group() {
        let content = "#/api\nfastapi\n#/api\nuvicorn\n";
        let extras = parse_extras(content);
        assert_eq!(extras["api"], vec!["uvicorn"]);
    }

    #[test]
    fn all_is_the_set_union_of_groups() {
        let content = "#/a\nx\ny\n#/b\ny\nz\n";
        let extras = parse_extras(content);
        let all = synthesize_all(&extras);
        assert_eq!(all, vec!["x", "y", "z"]);
    }

    #[test]
    fn empty_mapping_synthesizes_empty_all() {
        let extras = parse_extras("");
        assert!(synthesize_all(&extras).is_empty());
    }

    #[test]
    fn requirements_drop_comments_but_keep_blanks() {
        let content = "a\n\n# c\nb";
        assert_eq!(parse_requirements(content), vec!["a", "", "b"]);
    }

    #[test]
    fn parsing_is_idempotent() {
        let content = "#/api\nfastapi\n#/gpu\ntorch\nfastapi\n";
        assert_eq!(parse_extras(content), parse_extras(content));
        assert_eq!(parse_requirements(content), parse_requirements(content));
    }
}
