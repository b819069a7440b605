use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Aes,
    Rsa,
    SphincsPlus,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Aes => "AES",
            Algorithm::Rsa => "RSA",
            Algorithm::SphincsPlus => "SPHINCS+",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encoded lengths of the artifacts a primitive produced, in bytes.
/// Fields that do not apply to a primitive stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactSizes {
    pub public_key_bytes: usize,
    pub private_key_bytes: usize,
    pub symmetric_key_bytes: usize,
    pub signature_bytes: usize,
}

/// One row of the report. Times are arithmetic means in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    pub algorithm: Algorithm,
    pub key_gen_time_ms: f64,
    pub encrypt_time_ms: f64,
    pub decrypt_time_ms: f64,
    pub key_size_bits: u32,
    pub public_key_size_bytes: usize,
    pub private_key_size_bytes: usize,
    pub symmetric_key_size_bytes: usize,
    pub signature_size_bytes: usize,
}

impl BenchResult {
    pub fn new(algorithm: Algorithm, key_size_bits: u32) -> Self {
        Self {
            algorithm,
            key_gen_time_ms: 0.0,
            encrypt_time_ms: 0.0,
            decrypt_time_ms: 0.0,
            key_size_bits,
            public_key_size_bytes: 0,
            private_key_size_bytes: 0,
            symmetric_key_size_bytes: 0,
            signature_size_bytes: 0,
        }
    }

    pub fn set_sizes(&mut self, sizes: ArtifactSizes) {
        self.public_key_size_bytes = sizes.public_key_bytes;
        self.private_key_size_bytes = sizes.private_key_bytes;
        self.symmetric_key_size_bytes = sizes.symmetric_key_bytes;
        self.signature_size_bytes = sizes.signature_bytes;
    }
}
