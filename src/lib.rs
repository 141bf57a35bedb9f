pub mod crypto;

pub use crypto::challenge::*;
pub use crypto::cipher_traits::*;
pub use crypto::des::*;
pub use crypto::errors::*;
pub use crypto::trace::*;
