pub mod challenge;
pub mod cipher_traits;
pub mod des;
pub mod errors;
pub mod f_function;
pub mod key_schedule;
pub mod permutation;
pub mod sboxes;
pub mod trace;
pub mod utils;
