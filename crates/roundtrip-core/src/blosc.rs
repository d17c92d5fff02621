// crates/roundtrip-core/src/blosc.rs
//
// Blosc backend. blosc-rs drives the context-based C entry points, so there is
// no process-global runtime: the thread count lives here and is handed to
// every compress/decompress call.

use std::mem::MaybeUninit;

use blosc_rs::{Decoder, Encoder, Level, Shuffle};

use crate::codec::{Codec, CompressParams};
use crate::error::CodecError;

/// Blosc takes its thread count as a 16-bit signed value.
pub const MAX_THREADS: u32 = i16::MAX as u32;

#[derive(Debug)]
pub struct BloscCodec {
    threads: u32,
    live: bool,
}

impl BloscCodec {
    pub fn new() -> Self {
        Self {
            threads: 1,
            live: false,
        }
    }

    pub fn threads(&self) -> u32 {
        self.threads
    }
}

impl Default for BloscCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for BloscCodec {
    fn init(&mut self) -> Result<(), CodecError> {
        if self.live {
            return Err(CodecError::Init("blosc runtime already initialised".into()));
        }
        self.live = true;
        Ok(())
    }

    fn set_thread_count(&mut self, threads: u32) -> Result<(), CodecError> {
        if threads == 0 {
            return Err(CodecError::Init("thread count must be non-zero".into()));
        }
        self.threads = threads.min(MAX_THREADS);
        Ok(())
    }

    fn compress(
        &self,
        params: &CompressParams,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        let level = Level::new(params.level as u32)
            .ok_or_else(|| CodecError::Compress(format!("bad level {}", params.level)))?;
        let shuffle = if params.shuffle {
            Shuffle::Byte
        } else {
            Shuffle::None
        };

        let mut enc = Encoder::new(level);
        enc.shuffle(shuffle)
            .typesize(params.type_size)
            .numinternalthreads(self.threads);

        enc.compress_into(src, as_uninit(dst))
            .map_err(|e| CodecError::Compress(e.to_string()))
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        let dec = Decoder::new(src).map_err(|e| CodecError::Decompress(e.to_string()))?;
        dec.decompress_into(as_uninit(dst), self.threads)
            .map_err(|e| CodecError::Decompress(e.to_string()))
    }

    fn destroy(&mut self) {
        self.live = false;
    }
}

fn as_uninit(dst: &mut [u8]) -> &mut [MaybeUninit<u8>] {
    // SAFETY: MaybeUninit<u8> has the layout of u8, and blosc only ever writes
    // initialised bytes into the destination.
    unsafe { &mut *(dst as *mut [u8] as *mut [MaybeUninit<u8>]) }
}
