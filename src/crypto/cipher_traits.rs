use crate::crypto::errors::DesError;

pub trait CipherAlgorithm {
    fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>, DesError>;
    fn decrypt(&self, message: &[u8]) -> Result<Vec<u8>, DesError>;
    fn block_size(&self) -> usize;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), DesError>;
}
