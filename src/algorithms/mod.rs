pub mod aes_wrapper;
pub mod rsa_wrapper;
pub mod sphincs_wrapper;

pub use aes_wrapper::{AESWrapper, AesKeySize};
pub use rsa_wrapper::RSAWrapper;
pub use sphincs_wrapper::SphincsWrapper;
