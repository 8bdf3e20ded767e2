//! # Statute Parser
//!
//! Node model and textual (XML) form of a legislative document tree.
//!
//! ```text
//! <act id="DLM_NEW">            Node { kind: Act, attributes, children }
//!   <body>                        └─ Node { kind: Body, .. }
//!     <part>...</part>                └─ Node { kind: Part, .. }
//!   </body>
//! </act>
//! ```
//!
//! `serialize` and `parse` round-trip losslessly for any tree built from
//! known kinds: attribute order, child order and the five reserved XML
//! characters all survive.

pub mod ast;
pub mod error;
pub mod id_generator;
pub mod parser;
pub mod serializer;

#[cfg(test)]
mod tests_serializer;

pub use ast::{Attributes, Kind, Node, Path};
pub use error::{ParseError, ParseResult, UnknownKind};
pub use id_generator::IDGenerator;
pub use parser::{parse, Parser};
pub use serializer::{serialize, serialize_pretty, Serializer};
