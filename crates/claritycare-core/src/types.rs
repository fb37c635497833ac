//! Core content types for ClarityCare

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A recursively nested piece of a topic's data.
///
/// Topic records are authored as JSON, so a node is either scalar text, an
/// ordered list of nodes, or a mapping from field name to node. Numbers,
/// booleans, and nulls occur in metadata fields and carry no scannable text.
///
/// Mappings keep document order: traversals over a node are deterministic
/// and reproduce the order fields were authored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// Scalar text
    Text(String),

    /// Ordered sequence of nodes
    List(Vec<ContentNode>),

    /// Mapping from field name to node, in document order
    Object(IndexMap<String, ContentNode>),

    /// Numeric metadata
    Number(serde_json::Number),

    /// Boolean metadata
    Bool(bool),

    /// Explicit null
    Null,
}

impl ContentNode {
    /// Return the scalar text if this node is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return the elements if this node is a list
    pub fn as_list(&self) -> Option<&[ContentNode]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Return the field mapping if this node is an object
    pub fn as_object(&self) -> Option<&IndexMap<String, ContentNode>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a field by name on an object node
    pub fn get(&self, field: &str) -> Option<&ContentNode> {
        self.as_object().and_then(|fields| fields.get(field))
    }
}

impl From<&str> for ContentNode {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One educational content record browsed by end users.
///
/// A topic is a [`ContentNode`] object at the root. The accessors below read
/// the fields the presentation layer shows; a missing or wrong-shaped field
/// simply reads as absent. The raw tree stays reachable through [`Self::root`]
/// so auditing passes can cover every field, known or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic {
    root: ContentNode,
}

impl Topic {
    /// Wrap a content tree as a topic record
    pub fn new(root: ContentNode) -> Self {
        Self { root }
    }

    /// The full content tree for this topic
    pub fn root(&self) -> &ContentNode {
        &self.root
    }

    fn field(&self, name: &str) -> Option<&ContentNode> {
        self.root.get(name)
    }

    /// A named field as scalar text, if present and text-shaped
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(ContentNode::as_text)
    }

    /// The text items of a named list field; non-text items are skipped
    pub fn list_field(&self, name: &str) -> Vec<&str> {
        self.field(name)
            .and_then(ContentNode::as_list)
            .map(|items| items.iter().filter_map(ContentNode::as_text).collect())
            .unwrap_or_default()
    }

    /// Topic title shown on cards and used for lookup
    pub fn title(&self) -> &str {
        self.text_field("title").unwrap_or("Untitled")
    }

    /// Browse category, empty when unset
    pub fn category(&self) -> &str {
        self.text_field("category").unwrap_or("")
    }

    /// The ~60-second summary
    pub fn one_minute_summary(&self) -> &str {
        self.text_field("oneMinuteSummary").unwrap_or("")
    }

    /// The plain-language summary
    pub fn eli5_summary(&self) -> &str {
        self.text_field("eli5Summary").unwrap_or("")
    }

    /// "What's happening in your body" bullet list
    pub fn whats_happening(&self) -> Vec<&str> {
        self.list_field("whatsHappening")
    }

    /// "People often notice" bullet list
    pub fn people_often_notice(&self) -> Vec<&str> {
        self.list_field("peopleOftenNotice")
    }

    /// General self-care education bullet list
    pub fn general_self_care(&self) -> Vec<&str> {
        self.list_field("generalSelfCare")
    }

    /// Clinician-visit question prompts
    pub fn questions_for_clinician(&self) -> Vec<&str> {
        self.list_field("questionsForClinician")
    }

    /// The analogy block, if the topic has one
    pub fn analogy(&self) -> Option<Analogy<'_>> {
        let node = self.field("analogy")?;
        node.as_object()?;
        Some(Analogy {
            title: node.get("title").and_then(ContentNode::as_text).unwrap_or(""),
            story: node.get("story").and_then(ContentNode::as_text).unwrap_or(""),
        })
    }

    /// The extra-detail caption for a named section, if authored
    pub fn extra_detail(&self, section: &str) -> Option<&str> {
        self.field("extraDetail")?
            .get(section)
            .and_then(ContentNode::as_text)
    }

    /// Attached visuals, in authored order
    pub fn visuals(&self) -> Vec<Visual<'_>> {
        self.field("visuals")
            .and_then(ContentNode::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        item.as_object()?;
                        Some(Visual {
                            src: item.get("src").and_then(ContentNode::as_text).unwrap_or(""),
                            alt: item.get("alt").and_then(ContentNode::as_text),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attached video references, in authored order
    pub fn videos(&self) -> Vec<VideoRef<'_>> {
        self.field("videos")
            .and_then(ContentNode::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        item.as_object()?;
                        Some(VideoRef {
                            embed_url: item
                                .get("embedUrl")
                                .and_then(ContentNode::as_text)
                                .unwrap_or(""),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// External resource links, in authored order
    pub fn resources(&self) -> Vec<ResourceLink<'_>> {
        self.field("resources")
            .and_then(ContentNode::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        item.as_object()?;
                        Some(ResourceLink {
                            label: item
                                .get("label")
                                .and_then(ContentNode::as_text)
                                .unwrap_or("Resource"),
                            url: item.get("url").and_then(ContentNode::as_text).unwrap_or(""),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Date the topic content was last reviewed
    pub fn last_reviewed(&self) -> Option<&str> {
        self.text_field("lastReviewed")
    }
}

/// An analogy block: a titled short story
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analogy<'a> {
    pub title: &'a str,
    pub story: &'a str,
}

/// A visual attachment referenced by logical path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual<'a> {
    /// Logical path, e.g. `/images/bp-diagram.svg`
    pub src: &'a str,
    /// Alt text for the visual
    pub alt: Option<&'a str>,
}

/// An embedded video reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoRef<'a> {
    pub embed_url: &'a str,
}

/// An external resource link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink<'a> {
    pub label: &'a str,
    pub url: &'a str,
}
