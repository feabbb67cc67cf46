use serde_json::Value;

use crate::dump::dump_json;
use crate::error::ParseError;
use crate::node::{List, ListItem, Node};

/// Parse a whole note: the envelope carrying `version`, `schema_version` and `doc`.
pub fn parse_document(root: &Value) -> Result<Node, ParseError> {
    // Versions are required but not interpreted
    require(root, "version")?;
    require(root, "schema_version")?;
    let doc = require(root, "doc")?;
    parse_node(doc)
}

/// Parse one node object, dispatching on its `type`.
pub fn parse_node(obj: &Value) -> Result<Node, ParseError> {
    let kind = require(obj, "type")?
        .as_str()
        .ok_or_else(|| ParseError::invalid("type", "a string"))?;

    let node = match kind {
        "doc" => Node::Document {
            children: parse_children(obj)?,
        },
        "text" => {
            let text = require(obj, "text")?
                .as_str()
                .ok_or_else(|| ParseError::invalid("text", "a string"))?;
            let base = Node::Text(text.to_string());
            match obj.get("marks") {
                Some(marks) => fold_marks(marks, base)?,
                None => base,
            }
        }
        "heading" => Node::Heading {
            level: heading_level(obj)?,
            children: parse_children(obj)?,
        },
        "paragraph" => Node::Paragraph {
            children: parse_children(obj)?,
        },
        "bullet_list" => {
            let items = array_field(obj, "content")?
                .iter()
                .map(parse_list_entry)
                .collect::<Result<Vec<_>, ParseError>>()?;
            Node::List(List { items })
        }
        "hard_break" => Node::HardBreak,
        "list_item" => Node::ListItem(ListItem {
            children: parse_children(obj)?,
        }),
        "image" => parse_image(obj),
        "blockquote" => Node::Blockquote {
            children: parse_children(obj)?,
        },
        _ => unknown(obj),
    };

    Ok(node)
}

/// Parse the `content` array of a node; a node without one has no children.
pub fn parse_children(obj: &Value) -> Result<Vec<Node>, ParseError> {
    array_field(obj, "content")?.iter().map(parse_node).collect()
}

/// Wrap `base` in one link per `link` mark, in order, so the last link mark
/// ends up outermost. Other mark types are skipped.
pub fn fold_marks(marks: &Value, base: Node) -> Result<Node, ParseError> {
    let marks = marks
        .as_array()
        .ok_or_else(|| ParseError::invalid("marks", "an array"))?;

    let mut node = base;
    for mark in marks {
        let kind = require(mark, "type")?
            .as_str()
            .ok_or_else(|| ParseError::invalid("marks.type", "a string"))?;
        if kind != "link" {
            continue;
        }
        let url = mark
            .get("attrs")
            .and_then(|attrs| attrs.get("href"))
            .ok_or_else(|| ParseError::missing("attrs.href"))?
            .as_str()
            .ok_or_else(|| ParseError::invalid("attrs.href", "a string"))?;
        node = Node::Link {
            url: url.to_string(),
            children: vec![node],
        };
    }
    Ok(node)
}

/// A `list_item` entry owns its content; any other entry is kept whole as
/// the item's only child.
fn parse_list_entry(entry: &Value) -> Result<ListItem, ParseError> {
    let children = match entry.get("type").and_then(Value::as_str) {
        Some("list_item") => parse_children(entry)?,
        _ => vec![parse_node(entry)?],
    };
    Ok(ListItem { children })
}

fn parse_image(obj: &Value) -> Node {
    match obj
        .get("attrs")
        .and_then(|attrs| attrs.get("boxSharedLink"))
        .and_then(Value::as_str)
    {
        Some(url) => Node::Image {
            url: url.to_string(),
        },
        None => unknown(obj),
    }
}

fn heading_level(obj: &Value) -> Result<u8, ParseError> {
    let level = obj
        .get("attrs")
        .and_then(|attrs| attrs.get("level"))
        .ok_or_else(|| ParseError::missing("attrs.level"))?;
    level
        .as_u64()
        .and_then(|level| u8::try_from(level).ok())
        .ok_or_else(|| ParseError::invalid("attrs.level", "a small non-negative integer"))
}

fn unknown(obj: &Value) -> Node {
    log::warn!("unsupported node: {}", dump_json(obj));
    Node::Unknown(obj.clone())
}

fn require<'a>(obj: &'a Value, field: &str) -> Result<&'a Value, ParseError> {
    obj.get(field).ok_or_else(|| ParseError::missing(field))
}

fn array_field<'a>(obj: &'a Value, field: &str) -> Result<&'a [Value], ParseError> {
    match obj.get(field) {
        None => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ParseError::invalid(field, "an array")),
    }
}
