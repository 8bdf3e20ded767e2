use crate::ast::*;
use quick_xml::escape::escape;

/// Serializer converts a node tree to its XML text.
///
/// Compact output is the canonical form. Indented output only adds
/// whitespace between elements, which the parser ignores, so both forms
/// parse back to the same tree.
pub struct Serializer {
    indent_level: usize,
    indent_string: Option<String>,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_string: None,
        }
    }

    pub fn pretty() -> Self {
        Self::with_indent("  ")
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_level: 0,
            indent_string: Some(indent.to_string()),
        }
    }

    pub fn serialize(&mut self, node: &Node) -> String {
        let mut output = String::new();
        self.serialize_node(node, &mut output);
        if self.indent_string.is_some() {
            output.push('\n');
        }
        output
    }

    fn serialize_node(&mut self, node: &Node, output: &mut String) {
        let tag = node.kind.tag_name();

        output.push('<');
        output.push_str(tag);
        if let Some(attributes) = &node.attributes {
            for (name, value) in attributes {
                output.push(' ');
                output.push_str(name);
                output.push_str("=\"");
                output.push_str(&escape(value.as_str()));
                output.push('"');
            }
        }
        output.push('>');

        if node.children.is_empty() {
            if let Some(content) = &node.content {
                output.push_str(&escape(content.as_str()));
            }
        } else {
            self.indent_level += 1;
            for child in &node.children {
                self.write_newline_indent(output);
                self.serialize_node(child, output);
            }
            self.indent_level -= 1;
            self.write_newline_indent(output);
        }

        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }

    fn write_newline_indent(&self, output: &mut String) {
        if let Some(indent) = &self.indent_string {
            output.push('\n');
            for _ in 0..self.indent_level {
                output.push_str(indent);
            }
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a tree to compact XML
pub fn serialize(node: &Node) -> String {
    Serializer::new().serialize(node)
}

/// Serialize a tree to indented XML
pub fn serialize_pretty(node: &Node) -> String {
    Serializer::pretty().serialize(node)
}
