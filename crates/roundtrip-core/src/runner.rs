// crates/roundtrip-core/src/runner.rs
//
// One compress + decompress round trip over a deterministic input. All three
// buffers are owned by `run` and freed when it returns, on every path.

use tracing::debug;

use crate::buffer::AlignedBuffer;
use crate::codec::{Codec, CodecSession, CompressParams, MAX_OVERHEAD};
use crate::config::TestConfiguration;
use crate::error::{CodecError, HarnessError, Result};
use crate::fill::{fill_seq, fingerprint, first_difference};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
}

impl Outcome {
    pub fn is_match(self) -> bool {
        self == Outcome::Match
    }
}

pub struct RoundTripRunner<'s, C: Codec> {
    session: &'s CodecSession<C>,
}

impl<'s, C: Codec> RoundTripRunner<'s, C> {
    pub fn new(session: &'s CodecSession<C>) -> Self {
        Self { session }
    }

    pub fn run(&self, config: &TestConfiguration) -> Result<Outcome> {
        let buffer_size = config.buffer_size()?;
        let capacity = buffer_size
            .checked_add(MAX_OVERHEAD)
            .ok_or(HarnessError::BufferSizeOverflow {
                type_size: config.type_size,
                element_count: config.element_count,
            })?;
        let align = config.buffer_alignment;

        let mut original = AlignedBuffer::allocate(align, buffer_size)?;
        let mut intermediate = AlignedBuffer::allocate(align, capacity)?;
        let mut result = AlignedBuffer::allocate(align, buffer_size)?;

        fill_seq(original.as_mut_slice());
        debug!(
            buffer_size,
            crc32 = fingerprint(original.as_slice()),
            "input generated"
        );

        let params = CompressParams {
            level: config.compression_level,
            shuffle: config.shuffle_enabled,
            type_size: config.type_size as usize,
        };
        let csize = self
            .session
            .compress(&params, original.as_slice(), intermediate.as_mut_slice())?;
        if csize == 0 || csize > capacity {
            return Err(CodecError::Compress(format!(
                "reported {csize} bytes for a {capacity}-byte destination"
            ))
            .into());
        }
        debug!(buffer_size, compressed = csize, "compressed");

        let dsize = self
            .session
            .decompress(&intermediate.as_slice()[..csize], result.as_mut_slice())?;
        if dsize != buffer_size {
            return Err(CodecError::SizeMismatch {
                expected: buffer_size,
                actual: dsize,
            }
            .into());
        }

        let outcome = match first_difference(original.as_slice(), result.as_slice()) {
            None => Outcome::Match,
            Some(offset) => {
                debug!(offset, buffer_size, "round trip differs from original");
                Outcome::Mismatch
            }
        };
        debug!(?outcome, "round trip finished");
        Ok(outcome)
    }
}
