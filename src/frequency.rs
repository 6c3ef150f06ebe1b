use std::{collections::HashMap, fmt};

/// Occurrence count of every distinct symbol of a text.
///
/// Entries are kept in order of first occurrence, which is the order the
/// tree builder seeds its leaves in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, usize)>,
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn of(text: &str) -> Self {
        let mut this = FrequencyTable::default();
        for symbol in text.chars() {
            match this.index.get(&symbol) {
                Some(&slot) => this.entries[slot].1 += 1,
                None => {
                    this.index.insert(symbol, this.entries.len());
                    this.entries.push((symbol, 1));
                }
            }
        }
        this
    }

    pub fn get(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the text in symbols.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, frequency)| frequency).sum()
    }

    /// Entries in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries ordered by symbol, for display.
    pub fn sorted(&self) -> Vec<(char, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_unstable_by_key(|&(symbol, _)| symbol);
        sorted
    }
}

/// Shorthand for [`FrequencyTable::of`].
pub fn analyze(text: &str) -> FrequencyTable {
    FrequencyTable::of(text)
}

/// Printable form of a symbol: newlines and tabs are escaped.
pub fn display_symbol(symbol: char) -> String {
    match symbol {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        _ => symbol.to_string(),
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol   | Frequency")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for (symbol, frequency) in self.sorted() {
            writeln!(f, "{:8} | {:9}", display_symbol(symbol), frequency)?;
        }
        Ok(())
    }
}
