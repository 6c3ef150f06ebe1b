//! Huffman coding with a replayable record of how the tree was built.
//!
//! Reference: <https://www.smu.edu/-/media/Site/guildhallOLD/Documents/Huffman_Exercise.pdf>
//!
//! The pipeline runs in four pure stages, each usable on its own:
//!
//! 1. [`analyze`] counts the symbols of the text.
//! 2. [`build`] merges the two least frequent nodes until one root remains,
//!    recording a [`ConstructionStep`] after seeding, after every merge, and
//!    for the finished tree.
//! 3. [`generate_codes`] walks the tree for the code of every symbol.
//! 4. [`compute_statistics`] compares the coded size against one byte per
//!    symbol.
//!
//! An empty text flows through every stage as "no data": an empty table, no
//! root, no steps, and no statistics.

pub mod code;
pub mod error;
pub mod frequency;
pub mod history;
pub mod stats;
pub mod tree;

pub use {
    code::{bit_string, generate_codes, CodeTable},
    error::{Error, Result},
    frequency::{analyze, display_symbol, FrequencyTable},
    history::{ConstructionStep, StepCursor, StepHistory, StepKind},
    stats::{compute_statistics, Statistics},
    tree::{build, Build, BuildState, HuffmanTree, HuffmanTreeBuilder, Node, NodeId},
};

/// Everything derived from one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub frequencies: FrequencyTable,
    pub build: Build,
    pub codes: CodeTable,
    pub statistics: Option<Statistics>,
}

/// Run all four stages over `text`.
pub fn process(text: &str) -> Report {
    let frequencies = analyze(text);
    log::trace!("Symbol frequency: {:?}", frequencies);
    let build = build(&frequencies);
    let codes = generate_codes(&build.tree);
    let statistics = compute_statistics(text, &frequencies, &codes);
    Report {
        frequencies,
        build,
        codes,
        statistics,
    }
}
