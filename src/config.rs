use log::warn;

use crate::algorithms::rsa_wrapper::PKCS1_V15_OVERHEAD;
use crate::algorithms::AesKeySize;
use crate::{CryptoError, Result, SecureRandom};

pub const DEFAULT_ITERATIONS: usize = 5;
pub const DEFAULT_AES_KEY_BITS: u32 = 256;
pub const DEFAULT_RSA_MODULUS_BITS: usize = 2048;
pub const DEFAULT_MESSAGE_LEN: usize = 100;

const MIN_RSA_MODULUS_BITS: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub iterations: usize,
    pub aes_key_bits: u32,
    pub rsa_modulus_bits: usize,
    pub message_len: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            aes_key_bits: DEFAULT_AES_KEY_BITS,
            rsa_modulus_bits: DEFAULT_RSA_MODULUS_BITS,
            message_len: DEFAULT_MESSAGE_LEN,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(CryptoError::ConfigError(
                "iteration count must be at least 1".to_string(),
            ));
        }
        if self.message_len == 0 {
            return Err(CryptoError::ConfigError(
                "message length must be at least 1 byte".to_string(),
            ));
        }
        AesKeySize::from_bits(self.aes_key_bits)?;
        if self.rsa_modulus_bits < MIN_RSA_MODULUS_BITS {
            return Err(CryptoError::ConfigError(format!(
                "RSA modulus of {} bits is below the {}-bit minimum",
                self.rsa_modulus_bits, MIN_RSA_MODULUS_BITS
            )));
        }
        let rsa_limit = self.rsa_modulus_bits / 8 - PKCS1_V15_OVERHEAD;
        if self.message_len > rsa_limit {
            return Err(CryptoError::ConfigError(format!(
                "{}-byte message does not fit RSA-{} with PKCS#1 v1.5 (max {} bytes)",
                self.message_len, self.rsa_modulus_bits, rsa_limit
            )));
        }
        if self.iterations < DEFAULT_ITERATIONS {
            warn!(
                "Only {} iterations requested; means will be noisy",
                self.iterations
            );
        }
        Ok(())
    }

    pub fn rng(&self) -> SecureRandom {
        match self.seed {
            Some(seed) => SecureRandom::from_seed(seed),
            None => SecureRandom::from_entropy(),
        }
    }
}
