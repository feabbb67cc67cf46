use serde_json::Value;

/// A single list entry, which can contain any block or inline content
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub children: Vec<Node>,
}

/// A bulleted list
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub items: Vec<ListItem>,
}

/// Elements of a parsed note document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document {
        children: Vec<Node>,
    },
    Text(String),
    Paragraph {
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        children: Vec<Node>,
    },
    List(List),
    ListItem(ListItem),
    HardBreak,
    Link {
        url: String,
        children: Vec<Node>,
    },
    Image {
        url: String,
    },
    Blockquote {
        children: Vec<Node>,
    },
    /// A node kind this crate doesn't model, kept as the original JSON
    Unknown(Value),
}
