use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Element name outside the closed set of node kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element kind: {0}")]
pub struct UnknownKind(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed XML at {pos}: {message}")]
    Malformed { pos: usize, message: String },

    #[error("Unknown element <{name}> at {pos}")]
    UnknownElement { pos: usize, name: String },

    #[error("Unexpected end of input at {pos}: <{open}> is not closed")]
    UnexpectedEof { pos: usize, open: String },

    #[error("No root element found")]
    NoRootElement,

    #[error("Invalid structure at {pos}: {message}")]
    InvalidStructure { pos: usize, message: String },
}

impl ParseError {
    pub fn malformed(pos: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            pos,
            message: message.into(),
        }
    }

    pub fn unknown_element(pos: usize, name: impl Into<String>) -> Self {
        Self::UnknownElement {
            pos,
            name: name.into(),
        }
    }

    pub fn unexpected_eof(pos: usize, open: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            pos,
            open: open.into(),
        }
    }

    pub fn invalid_structure(pos: usize, message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            pos,
            message: message.into(),
        }
    }

    /// Byte offset the error points at, if any
    pub fn pos(&self) -> Option<usize> {
        match self {
            ParseError::Malformed { pos, .. }
            | ParseError::UnknownElement { pos, .. }
            | ParseError::UnexpectedEof { pos, .. }
            | ParseError::InvalidStructure { pos, .. } => Some(*pos),
            ParseError::NoRootElement => None,
        }
    }

    fn label_message(&self) -> String {
        match self {
            ParseError::Malformed { message, .. } => message.clone(),
            ParseError::UnknownElement { name, .. } => format!("<{}> is not a known kind", name),
            ParseError::UnexpectedEof { open, .. } => format!("<{}> opened here", open),
            ParseError::NoRootElement => "expected a root element".to_string(),
            ParseError::InvalidStructure { message, .. } => message.clone(),
        }
    }
}

/// Source-annotated error reports
#[cfg(feature = "pretty-errors")]
pub mod pretty {
    use super::ParseError;
    use ariadne::{Color, Label, Report, ReportKind, Source};

    /// Ariadne spans count chars; parser positions are byte offsets
    pub(crate) fn char_offset(source: &str, pos: usize) -> usize {
        let mut pos = pos.min(source.len());
        while !source.is_char_boundary(pos) {
            pos -= 1;
        }
        source[..pos].chars().count()
    }

    pub fn format_error(error: &ParseError, filename: &str, source: &str) -> String {
        let chars = source.chars().count();
        let start = char_offset(source, error.pos().unwrap_or(source.len())).min(chars.saturating_sub(1));
        let end = (start + 1).min(chars).max(start);

        let report = Report::build(ReportKind::Error, filename, start)
            .with_message(error.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_color(Color::Red)
                    .with_message(error.label_message()),
            )
            .finish();

        let mut output = Vec::new();
        if report
            .write((filename, Source::from(source)), &mut output)
            .is_err()
        {
            return error.to_string();
        }

        String::from_utf8(output).unwrap_or_else(|_| error.to_string())
    }
}
