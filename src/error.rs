//! Error types for huffpack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("empty input")]
    EmptyInput,

    #[error("degenerate alphabet: a single distinct symbol cannot drive the merge loop")]
    DegenerateAlphabet,

    #[error("symbol table is not valid UTF-8 at byte {offset}")]
    InvalidSymbolData { offset: usize },

    #[error("truncated header: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("payload ended mid-codeword after {decoded} of {expected} symbols")]
    FramingAmbiguity { decoded: u64, expected: u64 },

    #[error("malformed topology: {0}")]
    MalformedTopology(String),

    #[error("symbol {0:?} has no codeword")]
    UnknownSymbol(char),

    #[error("alphabet too large: {len} distinct symbols, limit is {limit}")]
    AlphabetTooLarge { len: usize, limit: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
