use rsa::{
    pkcs8::{EncodePrivateKey, EncodePublicKey},
    Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey,
};
use crate::{Algorithm, ArtifactSizes, CryptoError, Outcome, Primitive, Result, SecureRandom};

/// Bytes of PKCS#1 v1.5 encryption padding overhead.
pub const PKCS1_V15_OVERHEAD: usize = 11;

pub struct RsaKeyPair {
    pub private_key: RsaPrivateKey,
    pub public_key: RsaPublicKey,
}

pub struct RSAWrapper {
    modulus_bits: usize,
}

impl RSAWrapper {
    pub fn new(modulus_bits: usize) -> Self {
        Self { modulus_bits }
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Longest plaintext PKCS#1 v1.5 can carry under this modulus.
    pub fn max_message_len(&self) -> usize {
        (self.modulus_bits / 8).saturating_sub(PKCS1_V15_OVERHEAD)
    }
}

impl Primitive for RSAWrapper {
    type Key = RsaKeyPair;
    type Output = Vec<u8>;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Rsa
    }

    fn key_size_bits(&self) -> u32 {
        self.modulus_bits as u32
    }

    // Includes the prime search.
    fn setup(&mut self, rng: &mut SecureRandom) -> Result<RsaKeyPair> {
        let private_key = RsaPrivateKey::new(rng, self.modulus_bits)
            .map_err(|e| CryptoError::KeyGenerationError(e.to_string()))?;
        let public_key = RsaPublicKey::from(&private_key);

        Ok(RsaKeyPair {
            private_key,
            public_key,
        })
    }

    fn forward(&mut self, key: &RsaKeyPair, message: &[u8], rng: &mut SecureRandom) -> Result<Vec<u8>> {
        if message.len() > self.max_message_len() {
            return Err(CryptoError::Unavailable(format!(
                "{}-byte message exceeds the {}-byte PKCS#1 v1.5 limit of RSA-{}",
                message.len(),
                self.max_message_len(),
                self.modulus_bits
            )));
        }

        key.public_key
            .encrypt(rng, Pkcs1v15Encrypt, message)
            .map_err(|e| CryptoError::EncryptionError(e.to_string()))
    }

    fn inverse(&mut self, key: &RsaKeyPair, output: &Vec<u8>, _message: &[u8]) -> Result<Outcome> {
        key.private_key
            .decrypt(Pkcs1v15Encrypt, output)
            .map(Outcome::Recovered)
            .map_err(|e| CryptoError::DecryptionError(e.to_string()))
    }

    // SubjectPublicKeyInfo and PKCS#8 DER, the usual on-wire forms.
    fn sizes(&self, key: &RsaKeyPair, _output: &Vec<u8>) -> Result<ArtifactSizes> {
        let public_der = key
            .public_key
            .to_public_key_der()
            .map_err(|e| CryptoError::EncodingError(e.to_string()))?;
        let private_der = key
            .private_key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::EncodingError(e.to_string()))?;

        Ok(ArtifactSizes {
            public_key_bytes: public_der.as_bytes().len(),
            private_key_bytes: private_der.as_bytes().len(),
            ..ArtifactSizes::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_2048() {
        let mut rng = SecureRandom::from_entropy();
        let mut rsa = RSAWrapper::new(2048);
        let message = rng.random_bytes(100).unwrap();

        let keys = rsa.setup(&mut rng).unwrap();
        let ciphertext = rsa.forward(&keys, &message, &mut rng).unwrap();
        assert_eq!(ciphertext.len(), 256);

        let outcome = rsa.inverse(&keys, &ciphertext, &message).unwrap();
        assert_eq!(outcome, Outcome::Recovered(message));

        let sizes = rsa.sizes(&keys, &ciphertext).unwrap();
        assert_eq!(sizes.public_key_bytes, 294);
        assert!(sizes.private_key_bytes > 1100);
        assert_eq!(sizes.symmetric_key_bytes, 0);
        assert_eq!(sizes.signature_bytes, 0);
    }

    #[test]
    fn test_message_limit() {
        assert_eq!(RSAWrapper::new(2048).max_message_len(), 245);
        assert_eq!(RSAWrapper::new(1024).max_message_len(), 117);
    }

    #[test]
    fn test_oversized_message_rejected() {
        let mut rng = SecureRandom::from_entropy();
        let mut rsa = RSAWrapper::new(1024);
        let keys = rsa.setup(&mut rng).unwrap();
        let message = vec![0u8; 118];
        assert!(matches!(
            rsa.forward(&keys, &message, &mut rng),
            Err(CryptoError::Unavailable(_))
        ));
    }

    #[test]
    fn test_corrupted_ciphertext_fails() {
        let mut rng = SecureRandom::from_entropy();
        let mut rsa = RSAWrapper::new(1024);
        let keys = rsa.setup(&mut rng).unwrap();
        let mut ciphertext = rsa.forward(&keys, b"hello", &mut rng).unwrap();
        ciphertext[0] ^= 0xff;
        match rsa.inverse(&keys, &ciphertext, b"hello") {
            Ok(outcome) => assert!(outcome.check(b"hello").is_err()),
            Err(e) => assert!(matches!(e, CryptoError::DecryptionError(_))),
        }
    }
}
