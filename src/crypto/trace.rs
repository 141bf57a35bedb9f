/// Observer for the intermediate states of a traced block encryption.
///
/// The cipher core never prints or logs on its own; implementors decide
/// what to do with each event.
pub trait RoundTrace {
    /// The plaintext block and its state after the initial permutation.
    fn initial_permutation(&self, plaintext: u64, permuted: u64);

    /// State after round `round` (1 through 16): the new halves, the
    /// subkey consumed, and the round function output.
    fn round(&self, round: usize, left: u32, right: u32, subkey: u64, f_output: u32);

    /// The swapped preoutput block and the final ciphertext.
    fn final_permutation(&self, preoutput: u64, ciphertext: u64);
}

/// Forwards every event to `log::trace!` under the `des_cipher::rounds` target.
pub struct LogTrace;

impl RoundTrace for LogTrace {
    fn initial_permutation(&self, plaintext: u64, permuted: u64) {
        log::trace!(target: "des_cipher::rounds", "IP({:016X}) = {:016X}", plaintext, permuted);
    }

    fn round(&self, round: usize, left: u32, right: u32, subkey: u64, f_output: u32) {
        log::trace!(
            target: "des_cipher::rounds",
            "round {:2}: L={:08X} R={:08X} K={:012X} f={:08X}",
            round,
            left,
            right,
            subkey,
            f_output
        );
    }

    fn final_permutation(&self, preoutput: u64, ciphertext: u64) {
        log::trace!(target: "des_cipher::rounds", "FP({:016X}) = {:016X}", preoutput, ciphertext);
    }
}
