//! Packed codeword bitstream encoding and decoding.

use std::collections::HashMap;
use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::CodecError;
use crate::tree::{Node, Tree};

/// Concatenate the codeword of every symbol of `text`, in input order, and
/// pack the bits MSB-first, zero-padding the final byte on the right.
///
/// Returns the packed bytes and the unpadded bit length. A symbol absent
/// from the table is an error, never skipped.
pub fn encode(
    text: &str,
    codewords: &HashMap<char, Vec<bool>>,
) -> Result<(Vec<u8>, u64), CodecError> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    let mut bit_len = 0u64;

    for ch in text.chars() {
        let code = codewords
            .get(&ch)
            .ok_or(CodecError::UnknownSymbol(ch))?;
        for &bit in code {
            writer.write_bit(bit)?;
        }
        bit_len += code.len() as u64;
    }

    writer.byte_align()?;
    Ok((writer.into_writer(), bit_len))
}

/// Decode a packed payload by walking `tree` bit-by-bit, MSB-first: 0 moves
/// to the first child, 1 to the second; landing on a leaf emits its symbol
/// and resets the walk to the root.
///
/// Exactly `symbol_count` symbols are produced; the pad bits in the final
/// byte are never interpreted. Running out of bits earlier means the
/// payload was cut mid-codeword.
pub fn decode(payload: &[u8], tree: &Tree, symbol_count: u64) -> Result<String, CodecError> {
    // Every symbol costs at least one bit, so a count beyond the payload's
    // bit length can never be satisfied; don't let it size the allocation.
    let capacity = symbol_count.min(payload.len() as u64 * 8) as usize;
    let mut out = String::with_capacity(capacity);
    let mut reader = BitReader::endian(Cursor::new(payload), BigEndian);

    // Degenerate single-leaf tree: there is no edge to walk, but each
    // symbol still occupies one bit on the wire.
    if let Node::Leaf { symbol, .. } = tree.node(tree.root()) {
        let symbol = *symbol;
        for decoded in 0..symbol_count {
            reader.read_bit().map_err(|_| CodecError::FramingAmbiguity {
                decoded,
                expected: symbol_count,
            })?;
            out.push(symbol);
        }
        return Ok(out);
    }

    let mut decoded = 0u64;
    while decoded < symbol_count {
        let mut cursor = tree.root();
        let symbol = loop {
            let bit = reader.read_bit().map_err(|_| CodecError::FramingAmbiguity {
                decoded,
                expected: symbol_count,
            })?;
            cursor = tree.child(cursor, bit);
            if let Node::Leaf { symbol, .. } = tree.node(cursor) {
                break *symbol;
            }
        };
        out.push(symbol);
        decoded += 1;
    }

    Ok(out)
}
