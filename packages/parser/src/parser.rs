use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Element being built while its end tag is pending
struct Frame {
    node: Node,
    text: String,
    /// Offset of the start tag
    pos: usize,
}

/// Parser for the legislation XML format
pub struct Parser<'src> {
    reader: Reader<&'src [u8]>,
    stack: Vec<Frame>,
    root: Option<Node>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.check_end_names(true);
        Self {
            reader,
            stack: Vec::new(),
            root: None,
        }
    }

    /// Parse a complete document into its root node
    pub fn parse_document(mut self) -> ParseResult<Node> {
        loop {
            let pos = self.reader.buffer_position();
            let event = self
                .reader
                .read_event()
                .map_err(|e| ParseError::malformed(self.reader.buffer_position(), e.to_string()))?;

            match event {
                Event::Start(start) => {
                    let node = Self::open_element(&start, pos)?;
                    self.stack.push(Frame {
                        node,
                        text: String::new(),
                        pos,
                    });
                }
                Event::Empty(start) => {
                    let node = Self::open_element(&start, pos)?;
                    let node = Self::close_element(node, String::new());
                    self.attach(node, pos)?;
                }
                Event::End(_) => {
                    let frame = self
                        .stack
                        .pop()
                        .ok_or_else(|| ParseError::malformed(pos, "closing tag without an open element"))?;
                    let node = Self::close_element(frame.node, frame.text);
                    self.attach(node, pos)?;
                }
                Event::Text(text) => {
                    let value = text
                        .unescape()
                        .map_err(|e| ParseError::malformed(pos, e.to_string()))?;
                    self.push_text(&value, pos)?;
                }
                Event::CData(data) => {
                    let bytes = data.into_inner();
                    let value = std::str::from_utf8(&bytes)
                        .map_err(|e| ParseError::malformed(pos, e.to_string()))?;
                    self.push_text(value, pos)?;
                }
                Event::Eof => break,
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }

        // report the innermost element left open
        if let Some(frame) = self.stack.last() {
            return Err(ParseError::unexpected_eof(frame.pos, frame.node.kind.tag_name()));
        }

        self.root.ok_or(ParseError::NoRootElement)
    }

    fn open_element(start: &BytesStart, pos: usize) -> ParseResult<Node> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| ParseError::malformed(pos, e.to_string()))?
            .to_string();
        let kind: Kind = name
            .parse()
            .map_err(|_| ParseError::unknown_element(pos, name.as_str()))?;

        let mut node = Node::new(kind);
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| ParseError::malformed(pos, e.to_string()))?;
            let key = std::str::from_utf8(attribute.key.as_ref())
                .map_err(|e| ParseError::malformed(pos, e.to_string()))?
                .to_string();
            let value = attribute
                .unescape_value()
                .map_err(|e| ParseError::malformed(pos, e.to_string()))?
                .into_owned();
            node.set_attr(key, value);
        }

        Ok(node)
    }

    /// Leaves take all of their text; containers fall back to direct text
    /// only when they have no element children.
    fn close_element(mut node: Node, text: String) -> Node {
        if node.kind.is_leaf() {
            node.content = Some(text);
        } else if node.children.is_empty() && !text.trim().is_empty() {
            node.content = Some(text);
        }
        node
    }

    fn attach(&mut self, node: Node, pos: usize) -> ParseResult<()> {
        match self.stack.last_mut() {
            Some(parent) if parent.node.kind.is_leaf() => Err(ParseError::invalid_structure(
                pos,
                format!(
                    "<{}> cannot contain element <{}>",
                    parent.node.kind.tag_name(),
                    node.kind.tag_name()
                ),
            )),
            Some(parent) => {
                parent.node.children.push(node);
                Ok(())
            }
            None if self.root.is_some() => Err(ParseError::invalid_structure(
                pos,
                format!("second root element <{}>", node.kind.tag_name()),
            )),
            None => {
                self.root = Some(node);
                Ok(())
            }
        }
    }

    fn push_text(&mut self, text: &str, pos: usize) -> ParseResult<()> {
        match self.stack.last_mut() {
            Some(frame) => {
                frame.text.push_str(text);
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(ParseError::invalid_structure(
                pos,
                "text outside the root element",
            )),
        }
    }
}

/// Parse XML text into a node tree
pub fn parse(source: &str) -> ParseResult<Node> {
    Parser::new(source).parse_document()
}
