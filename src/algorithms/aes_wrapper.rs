use aes::{Aes128, Aes192, Aes256};
use cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use log::debug;

use crate::{Algorithm, ArtifactSizes, CryptoError, Outcome, Primitive, Result, SecureRandom};

pub const BLOCK_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesKeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl AesKeySize {
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(AesKeySize::Aes128),
            192 => Ok(AesKeySize::Aes192),
            256 => Ok(AesKeySize::Aes256),
            other => Err(CryptoError::Unavailable(format!(
                "AES key size {} bits (expected 128, 192 or 256)",
                other
            ))),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            AesKeySize::Aes128 => 128,
            AesKeySize::Aes192 => 192,
            AesKeySize::Aes256 => 256,
        }
    }

    pub fn key_bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

/// CBC ciphertext together with the IV it was produced under.
pub struct AesCiphertext {
    pub iv: [u8; BLOCK_SIZE],
    pub bytes: Vec<u8>,
}

/// AES in CBC mode with PKCS#7 padding. A fresh key per setup, a fresh IV
/// and a fresh cipher instance per encryption.
pub struct AESWrapper {
    key_size: AesKeySize,
}

impl AESWrapper {
    pub fn new(key_size: AesKeySize) -> Self {
        Self { key_size }
    }

    pub fn key_size(&self) -> AesKeySize {
        self.key_size
    }

    pub fn encrypt_with_iv(&self, key: &[u8], iv: &[u8; BLOCK_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        let invalid = |e: cipher::InvalidLength| CryptoError::EncryptionError(e.to_string());

        let ciphertext = match self.key_size {
            AesKeySize::Aes128 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<Pkcs7>(data),
            AesKeySize::Aes192 => cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<Pkcs7>(data),
            AesKeySize::Aes256 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(invalid)?
                .encrypt_padded_vec_mut::<Pkcs7>(data),
        };
        Ok(ciphertext)
    }

    pub fn decrypt_with_iv(&self, key: &[u8], iv: &[u8; BLOCK_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        let invalid = |e: cipher::InvalidLength| CryptoError::DecryptionError(e.to_string());
        let unpad = |e: cipher::block_padding::UnpadError| CryptoError::DecryptionError(e.to_string());

        match self.key_size {
            AesKeySize::Aes128 => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<Pkcs7>(data)
                .map_err(unpad),
            AesKeySize::Aes192 => cbc::Decryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<Pkcs7>(data)
                .map_err(unpad),
            AesKeySize::Aes256 => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(invalid)?
                .decrypt_padded_vec_mut::<Pkcs7>(data)
                .map_err(unpad),
        }
    }
}

impl Primitive for AESWrapper {
    type Key = Vec<u8>;
    type Output = AesCiphertext;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Aes
    }

    fn key_size_bits(&self) -> u32 {
        self.key_size.bits()
    }

    fn setup(&mut self, rng: &mut SecureRandom) -> Result<Vec<u8>> {
        rng.random_bytes(self.key_size.key_bytes())
            .map_err(|e| CryptoError::KeyGenerationError(e.to_string()))
    }

    // IV generation and cipher construction are billed to encryption.
    fn forward(&mut self, key: &Vec<u8>, message: &[u8], rng: &mut SecureRandom) -> Result<AesCiphertext> {
        let mut iv = [0u8; BLOCK_SIZE];
        rng.fill(&mut iv)?;
        let bytes = self.encrypt_with_iv(key, &iv, message)?;
        Ok(AesCiphertext { iv, bytes })
    }

    fn inverse(&mut self, key: &Vec<u8>, output: &AesCiphertext, _message: &[u8]) -> Result<Outcome> {
        let recovered = self.decrypt_with_iv(key, &output.iv, &output.bytes)?;
        Ok(Outcome::Recovered(recovered))
    }

    fn sizes(&self, key: &Vec<u8>, output: &AesCiphertext) -> Result<ArtifactSizes> {
        debug!("AES-{} ciphertext: {} bytes", self.key_size.bits(), output.bytes.len());
        Ok(ArtifactSizes {
            symmetric_key_bytes: key.len(),
            ..ArtifactSizes::default()
        })
    }
}
