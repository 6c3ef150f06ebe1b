//! Recorded states of a tree build, for replaying it one step at a time.

use {
    crate::tree::{HuffmanTree, NodeId},
    std::{fmt, ops::Index},
};

/// What a step did, and so which nodes it highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Leaves queued, nothing highlighted.
    Seed,
    Merge {
        left: NodeId,
        right: NodeId,
        parent: NodeId,
    },
    Final {
        root: NodeId,
    },
}

/// One snapshot of the build. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionStep {
    pub description: String,
    /// Queued nodes by ascending frequency, equal frequencies in queue order.
    pub queue: Vec<NodeId>,
    pub kind: StepKind,
}

impl ConstructionStep {
    /// The nodes the step operated on: the merged pair and their new parent,
    /// or the root of the final tree.
    pub fn special_nodes(&self) -> Vec<NodeId> {
        match self.kind {
            StepKind::Seed => Vec::new(),
            StepKind::Merge {
                left,
                right,
                parent,
            } => vec![left, right, parent],
            StepKind::Final { root } => vec![root],
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self.kind, StepKind::Merge { .. })
    }

    /// Render against the tree the step's ids point into.
    pub fn display<'a>(&'a self, tree: &'a HuffmanTree) -> StepDisplay<'a> {
        StepDisplay { step: self, tree }
    }
}

pub struct StepDisplay<'a> {
    step: &'a ConstructionStep,
    tree: &'a HuffmanTree,
}

impl fmt::Display for StepDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.step.description)?;
        let special = self.step.special_nodes();
        let queue = self.step.queue.iter().chain(
            special
                .iter()
                .filter(|&id| !self.step.queue.contains(id)),
        );
        for &id in queue {
            let marker = if special.contains(&id) { '*' } else { ' ' };
            writeln!(
                f,
                "{} {:>8} ({})",
                marker,
                self.tree.label(id),
                self.tree[id].frequency()
            )?;
        }
        Ok(())
    }
}

/// Ordered steps of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepHistory {
    steps: Vec<ConstructionStep>,
}

impl From<Vec<ConstructionStep>> for StepHistory {
    fn from(steps: Vec<ConstructionStep>) -> Self {
        StepHistory { steps }
    }
}

impl Index<usize> for StepHistory {
    type Output = ConstructionStep;

    fn index(&self, index: usize) -> &ConstructionStep {
        &self.steps[index]
    }
}

impl StepHistory {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConstructionStep> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConstructionStep> {
        self.steps.iter()
    }

    pub fn merge_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_merge()).count()
    }

    /// A cursor at the first step.
    pub fn cursor(&self) -> StepCursor {
        StepCursor::new(self.len())
    }
}

impl<'a> IntoIterator for &'a StepHistory {
    type Item = &'a ConstructionStep;
    type IntoIter = std::slice::Iter<'a, ConstructionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Position of a viewer within a [`StepHistory`].
///
/// Moving past either end leaves the cursor where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    pub fn new(len: usize) -> Self {
        StepCursor { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one step. Returns whether the cursor moved.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns whether the cursor moved.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    pub fn current<'a>(&self, history: &'a StepHistory) -> Option<&'a ConstructionStep> {
        history.get(self.index)
    }

    /// `Step i/n`, counting from one; `Step 0/0` for an empty history.
    pub fn position(&self) -> String {
        if self.len == 0 {
            "Step 0/0".to_string()
        } else {
            format!("Step {}/{}", self.index + 1, self.len)
        }
    }
}
