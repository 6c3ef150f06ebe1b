use {
    crate::{code::CodeTable, frequency::FrequencyTable},
    std::fmt,
};

/// Sizes of a text before and after Huffman coding.
///
/// The baseline spends one byte per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub symbols: u64,
    pub original_bits: u64,
    pub compressed_bits: u64,
}

impl Statistics {
    /// Space saved, as a percentage of the original size.
    pub fn compression_ratio_percent(&self) -> f64 {
        (1.0 - self.compressed_bits as f64 / self.original_bits as f64) * 100.0
    }

    /// Mean code length in bits per symbol.
    pub fn average_code_length(&self) -> f64 {
        self.compressed_bits as f64 / self.symbols as f64
    }
}

/// Compute the statistics for `text`, or `None` when it is empty and no
/// ratio is defined.
///
/// Also `None` when a symbol of `frequencies` has no code in `codes`, as the
/// compressed size is then unknown.
pub fn compute_statistics(
    text: &str,
    frequencies: &FrequencyTable,
    codes: &CodeTable,
) -> Option<Statistics> {
    let symbols = text.chars().count() as u64;
    if symbols == 0 {
        return None;
    }

    let mut compressed_bits = 0;
    for (symbol, frequency) in frequencies.iter() {
        match codes.get(symbol) {
            Some(code) => compressed_bits += code.len() as u64 * frequency as u64,
            None => {
                log::warn!("No code for symbol {:?}; no statistics", symbol);
                return None;
            }
        }
    }

    Some(Statistics {
        symbols,
        original_bits: symbols * 8,
        compressed_bits,
    })
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size:       {} bits", self.original_bits)?;
        writeln!(f, "Compressed size:     {} bits", self.compressed_bits)?;
        writeln!(f, "Compression ratio:   {:.2}%", self.compression_ratio_percent())?;
        writeln!(f, "Average code length: {:.2} bits/symbol", self.average_code_length())
    }
}
