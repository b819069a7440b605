pub mod algorithms;
pub mod clock;
pub mod config;
pub mod report;
pub mod result;
pub mod rng;
pub mod runner;

use thiserror::Error;

pub use clock::{Clock, MonotonicClock};
pub use config::BenchConfig;
pub use report::Report;
pub use result::{Algorithm, ArtifactSizes, BenchResult};
pub use rng::SecureRandom;
pub use runner::{run, run_suite, BenchmarkRunner};

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Primitive unavailable: {0}")]
    Unavailable(String),
    #[error("Key generation error: {0}")]
    KeyGenerationError(String),
    #[error("Encryption error: {0}")]
    EncryptionError(String),
    #[error("Decryption error: {0}")]
    DecryptionError(String),
    #[error("Signing error: {0}")]
    SigningError(String),
    #[error("Encoding error: {0}")]
    EncodingError(String),
    #[error("Self-check failed: {0}")]
    SelfCheck(String),
    #[error("Resource error: {0}")]
    ResourceError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),
    #[error("{algorithm}: {source}")]
    Benchmark {
        algorithm: Algorithm,
        source: Box<CryptoError>,
    },
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// What the inverse phase of a primitive hands back to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Plaintext recovered by a decryption.
    Recovered(Vec<u8>),
    /// Verdict of a signature verification.
    Verdict(bool),
}

impl Outcome {
    /// Fails unless the outcome proves the round trip over `message` worked.
    pub fn check(&self, message: &[u8]) -> Result<()> {
        match self {
            Outcome::Recovered(recovered) if recovered.as_slice() == message => Ok(()),
            Outcome::Recovered(recovered) => Err(CryptoError::SelfCheck(format!(
                "recovered {} bytes do not match the {}-byte original",
                recovered.len(),
                message.len()
            ))),
            Outcome::Verdict(true) => Ok(()),
            Outcome::Verdict(false) => Err(CryptoError::SelfCheck(
                "signature verification returned false".to_string(),
            )),
        }
    }
}

// Common trait for every benchmarked primitive. The runner times each
// phase separately, so anything a phase allocates or constructs is part
// of that phase's cost.
pub trait Primitive {
    type Key;
    type Output;

    fn algorithm(&self) -> Algorithm;

    /// Primary security parameter reported in the `keySizeBits` column.
    fn key_size_bits(&self) -> u32;

    fn setup(&mut self, rng: &mut SecureRandom) -> Result<Self::Key>;

    /// Encrypt or sign `message`.
    fn forward(
        &mut self,
        key: &Self::Key,
        message: &[u8],
        rng: &mut SecureRandom,
    ) -> Result<Self::Output>;

    /// Decrypt or verify the output of [`Primitive::forward`].
    fn inverse(&mut self, key: &Self::Key, output: &Self::Output, message: &[u8])
        -> Result<Outcome>;

    fn sizes(&self, key: &Self::Key, output: &Self::Output) -> Result<ArtifactSizes>;
}
