//! The Huffman coding tree and the greedy merge that builds it.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Ids are
//! handed out in creation order, and every node enters the priority queue the
//! moment it is created, so the id doubles as the insertion order that breaks
//! ties between equal frequencies.

use {
    crate::{
        error::{Error, Result},
        frequency::{display_symbol, FrequencyTable},
        history::{ConstructionStep, StepHistory, StepKind},
    },
    bitvec::{prelude::*, slice::Iter as BitSliceIter},
    std::{cmp::Reverse, collections::BinaryHeap, fmt, ops::Index},
};

/// Stable handle of a node in a [`HuffmanTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn frequency(&self) -> usize {
        match *self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Short label: the symbol for a leaf, `internal` otherwise.
    pub fn label(&self) -> String {
        match *self {
            Node::Leaf { symbol, .. } => display_symbol(symbol),
            Node::Internal { .. } => "internal".to_string(),
        }
    }
}

/// Arena of every node created during a build.
///
/// The root is absent exactly when the text was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Index<NodeId> for HuffmanTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl HuffmanTree {
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    pub fn label(&self, id: NodeId) -> String {
        self[id].label()
    }

    /// Walk from the root bit by bit, emitting a symbol at every leaf.
    ///
    /// A lone leaf root has the one-bit code `0`; each `0` decodes to that
    /// symbol and a `1` is an invalid code.
    pub fn decode<T: BitStore>(&self, bits: &BitSlice<Local, T>) -> Result<String> {
        let root = match self.root {
            Some(root) => root,
            None if bits.is_empty() => return Ok(String::new()),
            None => return Err(Error::EmptyTree),
        };

        let mut bits = bits.iter();
        let mut out = String::new();
        let mut decoded = 0;
        while !bits.as_bitslice().is_empty() {
            out.push(self.pull_symbol(root, &mut bits, decoded)?);
            decoded += 1;
        }
        Ok(out)
    }

    fn pull_symbol<T: BitStore>(
        &self,
        root: NodeId,
        bits: &mut BitSliceIter<Local, T>,
        decoded: usize,
    ) -> Result<char> {
        if let Node::Leaf { symbol, .. } = self[root] {
            return match bits.next() {
                Some(false) => Ok(symbol),
                _ => Err(Error::InvalidCode { decoded }),
            };
        }

        let mut at = root;
        loop {
            match self[at] {
                Node::Leaf { symbol, .. } => return Ok(symbol),
                Node::Internal { left, right, .. } => {
                    at = match bits.next() {
                        Some(false) => left,
                        Some(true) => right,
                        None => return Err(Error::TruncatedCode { decoded }),
                    }
                }
            }
        }
    }

    /// Indented rendering of the tree, one node per line, each edge marked
    /// with its bit.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.render_into(root, 0, None, &mut out);
        }
        out
    }

    fn render_into(&self, id: NodeId, depth: usize, bit: Option<char>, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        if let Some(bit) = bit {
            out.push(bit);
            out.push_str(": ");
        }
        out.push_str(&format!("{} ({})\n", self.label(id), self[id].frequency()));
        if let Node::Internal { left, right, .. } = self[id] {
            self.render_into(left, depth + 1, Some('0'), out);
            self.render_into(right, depth + 1, Some('1'), out);
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Leaves are queued, nothing merged yet.
    Seeded,
    Merging,
    /// A single root remains (or there was nothing to build).
    Done,
}

/// Result of a complete build: the finished tree and its replayable history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    pub tree: HuffmanTree,
    pub steps: StepHistory,
}

impl Build {
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }
}

/// Greedy Huffman merge, one transition at a time.
///
/// The queue is a min-heap keyed on `(frequency, id)`, so of two nodes with
/// equal frequency the one queued first comes out first.
#[derive(Debug)]
pub struct HuffmanTreeBuilder {
    nodes: Vec<Node>,
    queue: BinaryHeap<Reverse<(usize, NodeId)>>,
    steps: Vec<ConstructionStep>,
    state: BuildState,
}

impl HuffmanTreeBuilder {
    /// Create one leaf per symbol, in table order, and record the initial step.
    pub fn new(frequencies: &FrequencyTable) -> Self {
        let mut this = HuffmanTreeBuilder {
            nodes: Vec::with_capacity(frequencies.len() * 2),
            queue: BinaryHeap::with_capacity(frequencies.len()),
            steps: Vec::with_capacity(frequencies.len() + 1),
            state: BuildState::Seeded,
        };

        if frequencies.is_empty() {
            this.state = BuildState::Done;
            return this;
        }

        for (symbol, frequency) in frequencies.iter() {
            this.push(Node::Leaf { symbol, frequency });
        }
        this.record("Initial nodes sorted by frequency".to_string(), StepKind::Seed);
        this
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn steps(&self) -> &[ConstructionStep] {
        &self.steps
    }

    /// Perform the next transition: a merge while two or more nodes are
    /// queued, otherwise the final step. Returns the step it recorded, or
    /// `None` once the build is done.
    pub fn step(&mut self) -> Option<&ConstructionStep> {
        if self.state == BuildState::Done {
            return None;
        }
        let first = self.pop_min()?;
        match self.pop_min() {
            Some(second) => self.merge(first, second),
            None => self.finalize(first),
        }
        self.steps.last()
    }

    /// Run the remaining transitions and hand over the tree and history.
    pub fn finish(mut self) -> Build {
        while self.step().is_some() {}
        let root = match self.steps.last().map(|step| step.kind) {
            Some(StepKind::Final { root }) => Some(root),
            _ => None,
        };
        let tree = HuffmanTree {
            nodes: self.nodes,
            root,
        };
        log::trace!("Huffman tree: {:?}", tree);
        Build {
            tree,
            steps: StepHistory::from(self.steps),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.queue.push(Reverse((node.frequency(), id)));
        self.nodes.push(node);
        id
    }

    fn pop_min(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|Reverse((_, id))| id)
    }

    fn merge(&mut self, left: NodeId, right: NodeId) {
        let (left_frequency, right_frequency) = (
            self.nodes[left.0].frequency(),
            self.nodes[right.0].frequency(),
        );
        let frequency = left_frequency + right_frequency;
        let parent = self.push(Node::Internal {
            frequency,
            left,
            right,
        });
        let description = format!(
            "Combining '{}' ({}) and '{}' ({}) to form internal node of frequency {}",
            self.nodes[left.0].label(),
            left_frequency,
            self.nodes[right.0].label(),
            right_frequency,
            frequency,
        );
        self.state = BuildState::Merging;
        self.record(
            description,
            StepKind::Merge {
                left,
                right,
                parent,
            },
        );
    }

    fn finalize(&mut self, root: NodeId) {
        self.state = BuildState::Done;
        self.record("Final Huffman tree".to_string(), StepKind::Final { root });
    }

    fn record(&mut self, description: String, kind: StepKind) {
        // Finalizing has just drained the queue, so its snapshot is empty.
        let mut queue: Vec<(usize, NodeId)> =
            self.queue.iter().map(|&Reverse(entry)| entry).collect();
        queue.sort_unstable();
        let step = ConstructionStep {
            description,
            queue: queue.into_iter().map(|(_, id)| id).collect(),
            kind,
        };
        log::debug!("Step {}: {}", self.steps.len(), step.description);
        self.steps.push(step);
    }
}

/// Build the Huffman tree for `frequencies`, recording every step.
pub fn build(frequencies: &FrequencyTable) -> Build {
    HuffmanTreeBuilder::new(frequencies).finish()
}
