use pqcrypto_sphincsplus::sphincsshake128fsimple::{
    detached_sign, keypair, verify_detached_signature, DetachedSignature, PublicKey, SecretKey,
};
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

use crate::{Algorithm, ArtifactSizes, Outcome, Primitive, Result, SecureRandom};

/// Classical security level of SHAKE-128f, reported in the key size column.
pub const SECURITY_LEVEL_BITS: u32 = 128;

pub struct SphincsKeyPair {
    pub public_key: PublicKey,
    pub secret_key: SecretKey,
}

/// SPHINCS+ with the SHAKE-128f "simple" parameter set. Sign is the
/// forward phase, verify the inverse.
#[derive(Default)]
pub struct SphincsWrapper;

impl SphincsWrapper {
    pub fn new() -> Self {
        Self
    }
}

impl Primitive for SphincsWrapper {
    type Key = SphincsKeyPair;
    type Output = DetachedSignature;

    fn algorithm(&self) -> Algorithm {
        Algorithm::SphincsPlus
    }

    fn key_size_bits(&self) -> u32 {
        SECURITY_LEVEL_BITS
    }

    // The library seeds key generation from its own system randomness.
    fn setup(&mut self, _rng: &mut SecureRandom) -> Result<SphincsKeyPair> {
        let (public_key, secret_key) = keypair();
        Ok(SphincsKeyPair {
            public_key,
            secret_key,
        })
    }

    fn forward(&mut self, key: &SphincsKeyPair, message: &[u8], _rng: &mut SecureRandom) -> Result<DetachedSignature> {
        Ok(detached_sign(message, &key.secret_key))
    }

    fn inverse(&mut self, key: &SphincsKeyPair, output: &DetachedSignature, message: &[u8]) -> Result<Outcome> {
        let verified = verify_detached_signature(output, message, &key.public_key).is_ok();
        Ok(Outcome::Verdict(verified))
    }

    fn sizes(&self, key: &SphincsKeyPair, output: &DetachedSignature) -> Result<ArtifactSizes> {
        Ok(ArtifactSizes {
            public_key_bytes: key.public_key.as_bytes().len(),
            private_key_bytes: key.secret_key.as_bytes().len(),
            signature_bytes: output.as_bytes().len(),
            symmetric_key_bytes: 0,
        })
    }
}
