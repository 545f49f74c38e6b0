//! Split generation orchestration.

use log::info;

use crate::error::Result;
use crate::keyword::{KeywordGroup, KeywordSet};
use crate::split::combine::generate_combinations;
use crate::split::graph::KeywordGraph;
use crate::split::render::render_splits;

/// Generates split search strings from an ordered keyword set.
///
/// The three stages (graph build, combination traversal, rendering) are
/// pure functions of the keyword set, so repeated generation yields
/// identical ordered output.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    keywords: KeywordSet,
}

impl Splitter {
    /// Create a splitter over an existing keyword set.
    pub fn new(keywords: KeywordSet) -> Self {
        Splitter { keywords }
    }

    /// Append one keyword group before generation.
    pub fn add_group(&mut self, group: KeywordGroup) {
        self.keywords.add_group(group);
    }

    /// Append several keyword groups before generation.
    pub fn add_groups<I: IntoIterator<Item = KeywordGroup>>(&mut self, groups: I) {
        self.keywords.add_groups(groups);
    }

    /// The configured keyword set.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Generate all split search strings.
    ///
    /// Builds the keyword graph, traverses every combination, and
    /// renders each one as a boolean query string. Fails with a
    /// configuration error on a malformed keyword set.
    pub fn generate(&self) -> Result<Vec<String>> {
        info!("generating keyword adjacency graph");
        let graph = KeywordGraph::build(&self.keywords)?;

        info!("generating keyword combinations");
        let combinations = generate_combinations(&graph);

        info!("rendering splits");
        let splits = render_splits(&combinations);

        info!("generated {} splits", splits.len());
        Ok(splits)
    }
}
