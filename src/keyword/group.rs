//! Keyword groups and ordered sets of groups.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keyword::term::Term;

/// An ordered sequence of terms, one level of the keyword graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    terms: Vec<Term>,
}

impl KeywordGroup {
    /// Create a group from already-parsed terms.
    pub fn new(terms: Vec<Term>) -> Self {
        KeywordGroup { terms }
    }

    /// Parse a group from raw entry strings.
    pub fn parse<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = entries
            .into_iter()
            .map(|entry| Term::parse(entry.as_ref()))
            .collect();
        KeywordGroup { terms }
    }

    /// Get the terms of this group, in input order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Get the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the group has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if the group contains at least one non-skip term.
    ///
    /// A group made only of skip markers is a dead branch: every
    /// combination through it would lose the whole level.
    pub fn has_real_term(&self) -> bool {
        self.terms.iter().any(|term| !term.is_skip())
    }
}

/// The ordered sequence of keyword groups supplied at configuration time.
///
/// This is the sole required input to split generation. Groups are
/// immutable once handed to the [`Splitter`](crate::split::Splitter);
/// the graph, combinations, and splits are pure functions of this set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    groups: Vec<KeywordGroup>,
}

impl KeywordSet {
    /// Create a new empty keyword set.
    pub fn new() -> Self {
        KeywordSet { groups: Vec::new() }
    }

    /// Append one keyword group.
    pub fn add_group(&mut self, group: KeywordGroup) {
        self.groups.push(group);
    }

    /// Append several keyword groups, in order.
    pub fn add_groups<I: IntoIterator<Item = KeywordGroup>>(&mut self, groups: I) {
        for group in groups {
            self.add_group(group);
        }
    }

    /// Parse a keyword set from raw entry strings, one list per group.
    pub fn parse<I, G, S>(raw_groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = KeywordSet::new();
        set.add_groups(raw_groups.into_iter().map(KeywordGroup::parse));
        set
    }

    /// Load a keyword set from a JSON file holding an array of arrays of
    /// raw entry strings.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let raw_groups: Vec<Vec<String>> = serde_json::from_reader(BufReader::new(file))?;
        Ok(KeywordSet::parse(raw_groups))
    }

    /// Get the groups, in input order.
    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the set has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
