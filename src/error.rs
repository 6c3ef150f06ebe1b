//! Errors for the operations around the core pipeline.
//!
//! Frequency analysis, tree construction, code generation and statistics
//! never fail. Only encoding and decoding with a finished code, and the
//! command-line front end, have something to report.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The text contains a symbol the code table has no code for.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// The bit sequence ended in the middle of a code.
    #[error("bit sequence ended inside a code after {decoded} symbols")]
    TruncatedCode { decoded: usize },

    /// The bits spell a path that is not a code of the tree.
    #[error("invalid code after {decoded} symbols")]
    InvalidCode { decoded: usize },

    /// Decoding non-empty bits against the tree of an empty text.
    #[error("cannot decode with an empty tree")]
    EmptyTree,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
