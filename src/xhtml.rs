use crate::dump::dump_json;
use crate::node::{ListItem, Node};

/// Render a node tree to XHTML-like markup
pub fn to_xhtml(node: &Node) -> String {
    let mut out = String::new();
    render(node, &mut out);
    out
}

/// Append the markup for `node` and its descendants to `out`.
///
/// Text and URLs are written as-is; nothing is escaped.
pub fn render(node: &Node, out: &mut String) {
    match node {
        Node::Document { children } => {
            render_all(children, out);
        }
        Node::Text(text) => {
            out.push_str(text);
        }
        Node::Paragraph { children } => {
            out.push_str("<p>\n");
            render_all(children, out);
            // Closed with `<p/>`, not `</p>`
            out.push_str("<p/>\n");
        }
        Node::Heading { level, children } => {
            out.push_str(&format!("<h{level}>"));
            render_all(children, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        Node::List(list) => {
            out.push_str("<ul>");
            for item in &list.items {
                render_list_item(item, out);
            }
            out.push_str("</ul>");
        }
        Node::ListItem(item) => {
            render_list_item(item, out);
        }
        Node::HardBreak => {
            out.push_str("<br/>");
        }
        Node::Link { url, children } => {
            out.push_str(&format!("<a href=\"{url}\">"));
            render_all(children, out);
            out.push_str("</a>");
        }
        Node::Image { url } => {
            out.push_str(&format!("<img src=\"{url}\"/>"));
        }
        Node::Blockquote { children } => {
            out.push_str("<blockquote>");
            render_all(children, out);
            out.push_str("</blockquote>");
        }
        Node::Unknown(raw) => {
            out.push_str("<pre>\n");
            out.push_str(&dump_json(raw));
            out.push_str("\n</pre>\n");
        }
    }
}

fn render_all(nodes: &[Node], out: &mut String) {
    for node in nodes {
        render(node, out);
    }
}

fn render_list_item(item: &ListItem, out: &mut String) {
    out.push_str("<li>");
    for (i, child) in item.children.iter().enumerate() {
        match child {
            // <li><p>text<p/></li> collapses to <li>text</li>
            Node::Paragraph { children } if i == 0 => render_all(children, out),
            _ => render(child, out),
        }
    }
    out.push_str("</li>");
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::node::List;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    fn paragraph(children: Vec<Node>) -> Node {
        Node::Paragraph { children }
    }

    #[test]
    fn document_of_text_is_plain_concatenation() {
        let doc = Node::Document {
            children: vec![text("one "), text("<two>"), text(" & three")],
        };
        assert_eq!(to_xhtml(&doc), "one <two> & three");
    }

    #[test]
    fn paragraph_markers() {
        assert_eq!(
            to_xhtml(&paragraph(vec![text("hello")])),
            "<p>\nhello<p/>\n"
        );
    }

    #[test]
    fn heading() {
        let node = Node::Heading {
            level: 2,
            children: vec![text("Title")],
        };
        assert_eq!(to_xhtml(&node), "<h2>Title</h2>\n");
    }

    #[test]
    fn list_item_collapses_leading_paragraph() {
        let item = Node::ListItem(ListItem {
            children: vec![paragraph(vec![text("x")])],
        });
        assert_eq!(to_xhtml(&item), "<li>x</li>");
    }

    #[test]
    fn list_item_keeps_later_paragraphs() {
        let item = Node::ListItem(ListItem {
            children: vec![paragraph(vec![text("a")]), paragraph(vec![text("b")])],
        });
        assert_eq!(to_xhtml(&item), "<li>a<p>\nb<p/>\n</li>");
    }

    #[test]
    fn list_item_keeps_leading_blockquote() {
        let item = Node::ListItem(ListItem {
            children: vec![Node::Blockquote {
                children: vec![text("q")],
            }],
        });
        assert_eq!(to_xhtml(&item), "<li><blockquote>q</blockquote></li>");
    }

    #[test]
    fn bullet_list() {
        let list = Node::List(List {
            items: vec![
                ListItem {
                    children: vec![paragraph(vec![text("one")])],
                },
                ListItem {
                    children: vec![
                        paragraph(vec![text("two")]),
                        Node::List(List {
                            items: vec![ListItem {
                                children: vec![paragraph(vec![text("nested")])],
                            }],
                        }),
                    ],
                },
            ],
        });
        assert_eq!(
            to_xhtml(&list),
            "<ul><li>one</li><li>two<ul><li>nested</li></ul></li></ul>"
        );
    }

    #[test]
    fn link() {
        let node = Node::Link {
            url: "http://e.com".to_string(),
            children: vec![text("text")],
        };
        assert_eq!(to_xhtml(&node), "<a href=\"http://e.com\">text</a>");
    }

    #[test]
    fn image() {
        let node = Node::Image {
            url: "http://e.com/i.png".to_string(),
        };
        assert_eq!(to_xhtml(&node), "<img src=\"http://e.com/i.png\"/>");
    }

    #[test]
    fn hard_break() {
        let node = paragraph(vec![text("a"), Node::HardBreak, text("b")]);
        assert_eq!(to_xhtml(&node), "<p>\na<br/>b<p/>\n");
    }

    #[test]
    fn unknown_is_dumped_in_pre() {
        let raw = json!({ "type": "table", "attrs": { "rows": 2 } });
        let out = to_xhtml(&Node::Unknown(raw));
        assert_eq!(out, "<pre>\n{\"type\": \"table\", \"attrs\": {\"rows\": 2}}\n</pre>\n");
    }

    #[test]
    fn render_appends_to_existing_output() {
        let mut out = String::from("prefix:");
        render(&text("tail"), &mut out);
        assert_eq!(out, "prefix:tail");
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = Node::Document {
            children: vec![
                Node::Heading {
                    level: 1,
                    children: vec![text("T")],
                },
                Node::Unknown(json!({ "type": "x", "b": 1, "a": 2 })),
                Node::List(List {
                    items: vec![ListItem {
                        children: vec![paragraph(vec![text("i")])],
                    }],
                }),
            ],
        };
        assert_eq!(to_xhtml(&doc), to_xhtml(&doc));
    }
}
