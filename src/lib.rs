//! huffpack: single-shot Huffman compression for in-memory text.
//!
//! Builds a prefix-free code from symbol frequencies and packs the tree
//! shape next to the encoded payload in a self-describing byte container:
//!
//! - frequency analysis over the input symbols
//! - greedy pairwise-merge tree construction with a deterministic tie-break
//! - pre-order topology serialization ('0' internal, '1' leaf)
//! - MSB-first packed codeword bitstream with explicit symbol-count framing
//!
//! The container carries everything a decoder needs; no frequency table or
//! out-of-band state survives an encode. One pass, whole payload in memory.

pub mod bitstream;
pub mod config;
pub mod error;
pub mod freq;
pub mod topology;
pub mod tree;

use tracing::debug;

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::topology::Header;
use crate::tree::Tree;

/// Encoded output container pieces, header and payload kept separate so the
/// outer I/O layer can write or transport them as it likes.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub header: Vec<u8>,
    pub payload: Vec<u8>,
    pub metadata: EncodeMetadata,
}

impl Encoded {
    /// The single byte stream a file on disk would hold.
    pub fn into_container(self) -> Vec<u8> {
        let mut container = self.header;
        container.extend_from_slice(&self.payload);
        container
    }
}

/// What an encode run measured about itself.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EncodeMetadata {
    pub symbol_count: u64,
    pub distinct_symbols: usize,
    pub payload_bits: u64,
    pub entropy_bits: f64,
    pub ratio: f64,
}

/// A parsed container header: the rebuilt decode tree plus payload framing.
#[derive(Debug, Clone)]
pub struct DecodedHeader {
    pub tree: Tree,
    pub symbol_count: u64,
    pub header_len: usize,
}

/// The codec engine
pub struct Codec {
    config: CodecConfig,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl Codec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Encode `text` into header bytes and payload bytes.
    pub fn encode(&self, text: &str) -> Result<Encoded, CodecError> {
        let weights = freq::symbol_weights(text)?;
        if weights.len() > self.config.max_alphabet_len {
            return Err(CodecError::AlphabetTooLarge {
                len: weights.len(),
                limit: self.config.max_alphabet_len,
            });
        }

        let tree = Tree::from_weights(&weights)?;
        let codewords = tree.codewords();
        let (topology_bits, symbols) = topology::topology(&tree);

        let symbol_count = text.chars().count() as u64;
        let header = Header {
            topology: topology_bits,
            symbols,
            symbol_count,
        }
        .to_bytes()?;
        let (payload, payload_bits) = bitstream::encode(text, &codewords)?;

        let ratio = (header.len() + payload.len()) as f64 / text.len() as f64;
        let metadata = EncodeMetadata {
            symbol_count,
            distinct_symbols: weights.len(),
            payload_bits,
            entropy_bits: self.payload_entropy(&weights, symbol_count),
            ratio,
        };
        debug!(
            distinct = metadata.distinct_symbols,
            symbols = symbol_count,
            payload_bits,
            ratio,
            "encoded payload"
        );

        Ok(Encoded {
            header,
            payload,
            metadata,
        })
    }

    /// Rebuild the decode tree from the front of a container.
    pub fn decode_header(&self, bytes: &[u8]) -> Result<DecodedHeader, CodecError> {
        let (header, consumed) = Header::parse(bytes, self.config.lenient_symbols)?;
        let mut tree = topology::parse_topology(&header.topology)?;
        topology::bind_symbols(&mut tree, &header.symbols)?;
        debug!(
            leaves = tree.leaf_count(),
            symbols = header.symbol_count,
            header_bytes = consumed,
            "rebuilt decode tree"
        );
        Ok(DecodedHeader {
            tree,
            symbol_count: header.symbol_count,
            header_len: consumed,
        })
    }

    /// Decode payload bytes against a rebuilt tree.
    pub fn decode_payload(
        &self,
        header: &DecodedHeader,
        payload: &[u8],
    ) -> Result<String, CodecError> {
        bitstream::decode(payload, &header.tree, header.symbol_count)
    }

    /// Decode a full container produced by [`Codec::encode`].
    pub fn decode(&self, container: &[u8]) -> Result<String, CodecError> {
        let header = self.decode_header(container)?;
        self.decode_payload(&header, &container[header.header_len..])
    }

    /// Shannon entropy of the frequency table in bits per symbol
    fn payload_entropy(&self, weights: &[(char, u64)], total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        let mut entropy = 0.0;
        for &(_, weight) in weights {
            if weight > 0 {
                let p = weight as f64 / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}
