use {
    crate::{
        error::{Error, Result},
        frequency::{display_symbol, FrequencyTable},
        tree::{HuffmanTree, Node, NodeId},
    },
    bitvec::prelude::*,
    std::{collections::BTreeMap, fmt},
};

/// Prefix code read off a Huffman tree: `0` for every left edge on the path
/// from the root, `1` for every right edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, BitBox>,
}

impl CodeTable {
    pub fn of(tree: &HuffmanTree) -> Self {
        let mut this = CodeTable::default();
        match tree.root() {
            None => {}
            // A lone leaf has an empty path; give it the one-bit code `0`
            // so every symbol still costs a bit.
            Some(root) if tree[root].is_leaf() => {
                let mut path = BitVec::new();
                path.push(false);
                this.apply(tree, root, &mut path);
            }
            Some(root) => this.apply(tree, root, &mut BitVec::new()),
        }
        log::trace!("Huffman codes: {:?}", this);
        this
    }

    fn apply(&mut self, tree: &HuffmanTree, at: NodeId, path: &mut BitVec) {
        match tree[at] {
            Node::Leaf { symbol, .. } => {
                let previous = self.codes.insert(symbol, path.clone().into_boxed_bitslice());
                debug_assert!(previous.is_none(), "symbol {:?} reached twice", symbol);
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                self.apply(tree, left, path);
                path.pop();
                path.push(true);
                self.apply(tree, right, path);
                path.pop();
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<&BitSlice> {
        self.codes.get(&symbol).map(|code| &**code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSlice)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, &**code))
    }

    /// Concatenate the code of every symbol of `text`.
    pub fn encode(&self, text: &str) -> Result<BitVec> {
        let mut bits = BitVec::new();
        for symbol in text.chars() {
            let code = self.get(symbol).ok_or(Error::UnknownSymbol(symbol))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }

    /// Symbol, frequency and code of every symbol, ordered by symbol.
    pub fn display<'a>(&'a self, frequencies: &'a FrequencyTable) -> CodeTableDisplay<'a> {
        CodeTableDisplay {
            codes: self,
            frequencies,
        }
    }
}

/// Shorthand for [`CodeTable::of`].
pub fn generate_codes(tree: &HuffmanTree) -> CodeTable {
    CodeTable::of(tree)
}

/// `0`/`1` text form of a code.
pub fn bit_string(bits: &BitSlice) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

pub struct CodeTableDisplay<'a> {
    codes: &'a CodeTable,
    frequencies: &'a FrequencyTable,
}

impl fmt::Display for CodeTableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol   | Frequency | Code")?;
        writeln!(f, "{}", "-".repeat(32))?;
        for (symbol, code) in self.codes.iter() {
            writeln!(
                f,
                "{:8} | {:9} | {}",
                display_symbol(symbol),
                self.frequencies.get(symbol).unwrap_or(0),
                bit_string(code)
            )?;
        }
        Ok(())
    }
}
