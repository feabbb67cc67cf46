mod config;
mod convert;
mod dump;
mod error;
mod node;
mod parser;
mod xhtml;

pub use config::{Config, LogConfig, OutputConfig};
pub use convert::{Conversion, FsStore, NoteStore, convert_note, convert_notes, output_path};
pub use error::{ConvertError, Error, ParseError};
pub use node::{List, ListItem, Node};
pub use parser::{fold_marks, parse_children, parse_document, parse_node};
pub use xhtml::{render, to_xhtml};

/// Parse note JSON text into a node tree.
pub fn parse(json: &str) -> Result<Node, Error> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(parse_document(&value)?)
}

/// Convert note JSON text to XHTML markup.
pub fn note_to_xhtml(json: &str) -> Result<String, Error> {
    let document = parse(json)?;
    Ok(to_xhtml(&document))
}
