//! Structural properties of the text extractor

use claritycare_core::ContentNode;
use claritycare_scanner::{extract_strings, SafetyScanner};
use indexmap::IndexMap;
use proptest::prelude::*;

/// Arbitrary content trees paired with their expected leaves in
/// construction order.
fn tree_with_leaves() -> impl Strategy<Value = (ContentNode, Vec<String>)> {
    let leaf = prop_oneof![
        "[a-z .!?]{0,20}".prop_map(|s| (ContentNode::Text(s.clone()), vec![s])),
        any::<i64>().prop_map(|n| (ContentNode::Number(n.into()), vec![])),
        any::<bool>().prop_map(|b| (ContentNode::Bool(b), vec![])),
        Just((ContentNode::Null, vec![])),
    ];

    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|children| {
                let mut items = Vec::new();
                let mut leaves = Vec::new();
                for (node, mut texts) in children {
                    items.push(node);
                    leaves.append(&mut texts);
                }
                (ContentNode::List(items), leaves)
            }),
            prop::collection::vec(inner, 0..5).prop_map(|children| {
                let mut fields = IndexMap::new();
                let mut leaves = Vec::new();
                for (i, (node, mut texts)) in children.into_iter().enumerate() {
                    fields.insert(format!("field{}", i), node);
                    leaves.append(&mut texts);
                }
                (ContentNode::Object(fields), leaves)
            }),
        ]
    })
}

proptest! {
    /// Every scalar-text leaf comes back exactly once, in depth-first order.
    #[test]
    fn extraction_returns_every_leaf_in_order((tree, expected) in tree_with_leaves()) {
        let extracted: Vec<String> =
            extract_strings(&tree).into_iter().map(str::to_string).collect();
        prop_assert_eq!(extracted, expected);
    }

    /// Two extractions of the same tree agree.
    #[test]
    fn extraction_is_stable((tree, _) in tree_with_leaves()) {
        prop_assert_eq!(extract_strings(&tree), extract_strings(&tree));
    }

    /// Scanning is a pure function: same tree, same warnings.
    #[test]
    fn scanning_is_idempotent((tree, _) in tree_with_leaves()) {
        let scanner = SafetyScanner::new().unwrap();
        prop_assert_eq!(scanner.scan_node(&tree), scanner.scan_node(&tree));
    }

    /// A scan never panics, whatever the tree shape.
    #[test]
    fn scanning_any_tree_is_total((tree, _) in tree_with_leaves()) {
        let scanner = SafetyScanner::new().unwrap();
        let _ = scanner.scan_node(&tree);
    }
}
