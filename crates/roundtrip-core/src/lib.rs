pub mod error;
pub mod config;

pub mod blosc;
pub mod buffer;
pub mod codec;
pub mod fill;
pub mod report;
pub mod runner;

pub use crate::blosc::BloscCodec;
pub use crate::codec::{Codec, CodecSession, CompressParams, MAX_OVERHEAD};
pub use crate::config::{parse_args, TestConfiguration};
pub use crate::error::{CodecError, HarnessError};
pub use crate::report::Report;
pub use crate::runner::{Outcome, RoundTripRunner};

/// Open a session on `codec`, configure it from `config`, run one round trip
/// and close the session whatever the result.
pub fn run_with<C: Codec>(codec: C, config: &TestConfiguration) -> error::Result<Outcome> {
    let mut session = CodecSession::open(codec)?;
    let outcome = session
        .set_thread_count(config.thread_count)
        .map_err(HarnessError::from)
        .and_then(|()| RoundTripRunner::new(&session).run(config));
    session.close();
    outcome
}
