//! Recursive text extraction over topic content

use claritycare_core::ContentNode;

/// Collect every scalar-text leaf of a content tree, depth-first.
///
/// Lists are visited in element order and objects in document order, so the
/// result is deterministic for a given record. The fold is indiscriminate on
/// purpose: it does not know field names, so no nested field can hide text
/// from a downstream audit. Numbers, booleans, and nulls contribute nothing.
pub fn extract_strings(node: &ContentNode) -> Vec<&str> {
    let mut out = Vec::new();
    collect(node, &mut out);
    out
}

fn collect<'a>(node: &'a ContentNode, out: &mut Vec<&'a str>) {
    match node {
        ContentNode::Text(s) => out.push(s),
        ContentNode::List(items) => {
            for item in items {
                collect(item, out);
            }
        }
        ContentNode::Object(fields) => {
            for value in fields.values() {
                collect(value, out);
            }
        }
        ContentNode::Number(_) | ContentNode::Bool(_) | ContentNode::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: &str) -> ContentNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(extract_strings(&node(r#""hello""#)), ["hello"]);
    }

    #[test]
    fn test_non_text_scalars_yield_nothing() {
        assert!(extract_strings(&node("42")).is_empty());
        assert!(extract_strings(&node("true")).is_empty());
        assert!(extract_strings(&node("null")).is_empty());
    }

    #[test]
    fn test_list_keeps_element_order() {
        let tree = node(r#"["a", ["b", "c"], "d"]"#);
        assert_eq!(extract_strings(&tree), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_object_keeps_document_order() {
        let tree = node(r#"{"second": "b", "first": "a", "third": "c"}"#);
        // document order, not key order
        assert_eq!(extract_strings(&tree), ["b", "a", "c"]);
    }

    #[test]
    fn test_mixed_nesting_depth_first() {
        let tree = node(
            r#"{
                "title": "top",
                "sections": [
                    {"body": ["one", "two"], "reviewed": true},
                    "three"
                ],
                "extra": {"nested": {"deep": "four"}, "count": 4}
            }"#,
        );
        assert_eq!(extract_strings(&tree), ["top", "one", "two", "three", "four"]);
    }

    #[test]
    fn test_keys_are_not_extracted() {
        let tree = node(r#"{"dosage": 3}"#);
        assert!(extract_strings(&tree).is_empty());
    }
}
