//! # Hierarchy Table
//!
//! Which kinds may appear as direct children of which. Both insertion-point
//! inference and move validation read this table; nothing else encodes
//! structural rules.

use statute_parser::Kind;

/// Kinds that may appear as direct children of `parent`
pub fn allowed_children(parent: Kind) -> &'static [Kind] {
    use Kind::*;

    match parent {
        Act => &[Cover, Body],
        Cover => &[Title, MetadataAct, MetadataBill],
        MetadataAct | MetadataBill => &[MetadataRow],
        MetadataRow => &[MetadataKey, MetadataValue],
        Body => &[Part],
        Part => &[Label, Heading, Subpart, CrossHeading, Section],
        Subpart => &[Label, Heading, CrossHeading, Section],
        CrossHeading => &[Heading],
        Section => &[Label, Heading, Subsection],
        Subsection => &[Label, Text, Para, DefPara],
        DefPara => &[DefTerm, Text, Para],
        Para => &[Label, Text, Subpara],
        Subpara => &[Label, Text, Subsubpara],
        Subsubpara => &[Label, Text],
        Title | DefTerm | Label | Heading | Text | MetadataKey | MetadataValue => &[],
    }
}

/// Whether `parent` may directly contain `child`
pub fn accepts(parent: Kind, child: Kind) -> bool {
    allowed_children(parent).contains(&child)
}

/// High-level structural kinds that may interleave freely as siblings
pub fn is_interleavable(kind: Kind) -> bool {
    matches!(kind, Kind::Section | Kind::CrossHeading | Kind::Subpart)
}

/// Whether a node of `source` kind may be dropped beside a node of `target` kind
pub fn move_compatible(source: Kind, target: Kind) -> bool {
    source == target || (is_interleavable(source) && is_interleavable(target))
}
