//! Term specifiers for keyword-group entries.

use serde::{Deserialize, Serialize};

/// Separator between alternatives in a raw alternation entry,
/// e.g. `"Extended Reality || Mixed Reality"`.
pub const ALTERNATION_SEPARATOR: &str = "||";

/// A single entry of a keyword group.
///
/// The entry grammar is deliberately small: a plain literal, an
/// OR-alternation of two or more literals, or an explicit skip marker
/// (the empty string) meaning "this group contributes nothing to some
/// combinations". Skip identity is carried on the variant itself rather
/// than embedded in the term text, so terms never need marker rewriting
/// to stay unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A literal term, rendered quoted.
    Plain(String),
    /// Two or more literals, rendered as a parenthesized OR-group.
    Alternation(Vec<String>),
    /// The empty-string sentinel. Occupies a graph node so traversal
    /// proceeds, but contributes nothing to the rendered split.
    Skip,
}

impl Term {
    /// Parse a raw keyword-group entry into a term specifier.
    ///
    /// An empty string is a skip marker; a string containing `||` is an
    /// alternation whose alternatives are trimmed of surrounding
    /// whitespace; anything else is a plain literal. An alternation has
    /// two or more literals, so empty alternatives are dropped and a
    /// degenerate entry like `"Flexible ||"` collapses to a plain term
    /// (or to a skip marker when nothing is left).
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            Term::Skip
        } else if raw.contains(ALTERNATION_SEPARATOR) {
            let mut alternatives: Vec<String> = raw
                .split(ALTERNATION_SEPARATOR)
                .map(|alt| alt.trim().to_string())
                .filter(|alt| !alt.is_empty())
                .collect();
            match alternatives.len() {
                0 => Term::Skip,
                1 => Term::Plain(alternatives.remove(0)),
                _ => Term::Alternation(alternatives),
            }
        } else {
            Term::Plain(raw.to_string())
        }
    }

    /// Check if this term is a skip marker.
    pub fn is_skip(&self) -> bool {
        matches!(self, Term::Skip)
    }
}

impl From<&str> for Term {
    fn from(raw: &str) -> Self {
        Term::parse(raw)
    }
}
