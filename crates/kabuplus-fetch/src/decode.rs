//! Shift-JIS decoding.

use encoding_rs::{DecoderResult, SHIFT_JIS};
use thiserror::Error;

/// Errors that can occur during decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input contains a byte sequence that is not valid Shift-JIS.
    #[error("Malformed Shift-JIS sequence at byte {offset}")]
    Malformed {
        /// Offset of the first byte of the bad sequence.
        offset: usize,
    },

    /// Input is too large to decode into memory.
    #[error("Input too large: {0} bytes")]
    TooLarge(usize),

    /// Decoder ran out of output space before consuming the input.
    #[error("Decoder output full after {read} of {len} bytes")]
    OutputFull {
        /// Bytes consumed before the decoder stopped.
        read: usize,
        /// Total input length.
        len: usize,
    },
}

/// Decodes a Shift-JIS byte buffer into UTF-8.
///
/// Decoding is strict: malformed input is an error rather than being
/// replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] on the first invalid sequence.
pub fn decode_shift_jis(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .ok_or(DecodeError::TooLarge(bytes.len()))?;

    let mut decoded = String::with_capacity(capacity);
    let (result, read) = decoder.decode_to_string_without_replacement(bytes, &mut decoded, true);

    match result {
        DecoderResult::InputEmpty => Ok(decoded),
        DecoderResult::Malformed(bad, pending) => Err(DecodeError::Malformed {
            offset: read.saturating_sub(usize::from(bad) + usize::from(pending)),
        }),
        DecoderResult::OutputFull => Err(DecodeError::OutputFull {
            read,
            len: bytes.len(),
        }),
    }
}
