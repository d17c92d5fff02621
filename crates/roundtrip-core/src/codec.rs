// crates/roundtrip-core/src/codec.rs
//
// Boundary to the compression engine. The harness only ever talks to a codec
// through a CodecSession, which owns the runtime from open to close.

use tracing::{debug, error};

use crate::error::CodecError;

/// Largest number of bytes a compressed buffer may exceed its source by.
pub const MAX_OVERHEAD: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressParams {
    pub level: u8,
    pub shuffle: bool,
    pub type_size: usize,
}

/// Public entry points of a block compression engine.
///
/// `compress` and `decompress` return the number of bytes written into `dst`;
/// `dst.len()` is the destination capacity.
pub trait Codec {
    fn init(&mut self) -> Result<(), CodecError>;

    /// Advisory worker count for the engine's own internal parallelism.
    fn set_thread_count(&mut self, threads: u32) -> Result<(), CodecError>;

    fn compress(
        &self,
        params: &CompressParams,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, CodecError>;

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError>;

    fn destroy(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Initialized,
    Configured { threads: u32 },
    Destroyed,
}

pub struct CodecSession<C: Codec> {
    codec: C,
    state: SessionState,
}

impl<C: Codec> CodecSession<C> {
    pub fn open(mut codec: C) -> Result<Self, CodecError> {
        codec.init()?;
        debug!("codec runtime initialised");
        Ok(Self {
            codec,
            state: SessionState::Initialized,
        })
    }

    pub fn set_thread_count(&mut self, threads: u32) -> Result<(), CodecError> {
        self.codec.set_thread_count(threads)?;
        self.state = SessionState::Configured { threads };
        debug!(threads, "codec thread count set");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn compress(
        &self,
        params: &CompressParams,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        self.codec.compress(params, src, dst).inspect_err(|e| {
            error!(error = %e, src_len = src.len(), "compress failed");
        })
    }

    pub fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        self.codec.decompress(src, dst).inspect_err(|e| {
            error!(error = %e, src_len = src.len(), "decompress failed");
        })
    }

    /// Tear the runtime down. Dropping an open session does the same.
    pub fn close(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.state != SessionState::Destroyed {
            self.codec.destroy();
            self.state = SessionState::Destroyed;
            debug!("codec runtime destroyed");
        }
    }
}

impl<C: Codec> Drop for CodecSession<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
