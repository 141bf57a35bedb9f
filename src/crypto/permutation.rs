//! Bit permutations over `u64` registers.
//!
//! Every permutation, expansion and compression step of the cipher is a
//! table of 1-based source positions counted from the most significant
//! end, the numbering used by the published DES tables. Output bits are
//! produced most significant first, one per table entry, so a table is
//! free to drop, duplicate or reorder source bits.

/// A validated permutation table bound to a fixed source width.
pub struct PermutationTable {
    source_width: u32,
    entries: &'static [u8],
}

impl PermutationTable {
    /// Build a table, checking every entry at construction time.
    ///
    /// Panics if an entry is zero, exceeds `source_width`, or if the
    /// table is wider than a `u64`. The built-in tables below are
    /// `static`, so a malformed one fails `const` evaluation and the
    /// crate does not compile.
    pub const fn new(source_width: u32, entries: &'static [u8]) -> Self {
        assert!(source_width <= 64, "source width exceeds 64 bits");
        assert!(entries.len() <= 64, "table output exceeds 64 bits");

        let mut i = 0;
        while i < entries.len() {
            let entry = entries[i];
            assert!(entry >= 1, "table entries are 1-based");
            assert!(entry as u32 <= source_width, "table entry outside the source");
            i += 1;
        }

        PermutationTable { source_width, entries }
    }

    /// Width of the input in bits.
    pub const fn source_width(&self) -> u32 {
        self.source_width
    }

    /// Width of the output in bits, one per table entry.
    pub const fn output_width(&self) -> u32 {
        self.entries.len() as u32
    }

    /// The raw 1-based source positions.
    pub const fn entries(&self) -> &'static [u8] {
        self.entries
    }

    /// Apply the permutation to the low `source_width` bits of `src`.
    ///
    /// Bits above the source width are never read. The result occupies
    /// the low `output_width` bits.
    pub fn permute(&self, src: u64) -> u64 {
        let mut dst = 0u64;
        for &entry in self.entries {
            dst = (dst << 1) | ((src >> (self.source_width - entry as u32)) & 1);
        }
        dst
    }
}

/// Initial permutation of the 64-bit plaintext block.
pub static IP: PermutationTable = PermutationTable::new(
    64,
    &[
        58, 50, 42, 34, 26, 18, 10, 2,
        60, 52, 44, 36, 28, 20, 12, 4,
        62, 54, 46, 38, 30, 22, 14, 6,
        64, 56, 48, 40, 32, 24, 16, 8,
        57, 49, 41, 33, 25, 17, 9, 1,
        59, 51, 43, 35, 27, 19, 11, 3,
        61, 53, 45, 37, 29, 21, 13, 5,
        63, 55, 47, 39, 31, 23, 15, 7,
    ],
);

/// Final permutation, the inverse of [`IP`].
pub static FP: PermutationTable = PermutationTable::new(
    64,
    &[
        40, 8, 48, 16, 56, 24, 64, 32,
        39, 7, 47, 15, 55, 23, 63, 31,
        38, 6, 46, 14, 54, 22, 62, 30,
        37, 5, 45, 13, 53, 21, 61, 29,
        36, 4, 44, 12, 52, 20, 60, 28,
        35, 3, 43, 11, 51, 19, 59, 27,
        34, 2, 42, 10, 50, 18, 58, 26,
        33, 1, 41, 9, 49, 17, 57, 25,
    ],
);

/// Expansion of the 32-bit half-block to 48 bits; edge bits repeat.
pub static E: PermutationTable = PermutationTable::new(
    32,
    &[
        32, 1, 2, 3, 4, 5,
        4, 5, 6, 7, 8, 9,
        8, 9, 10, 11, 12, 13,
        12, 13, 14, 15, 16, 17,
        16, 17, 18, 19, 20, 21,
        20, 21, 22, 23, 24, 25,
        24, 25, 26, 27, 28, 29,
        28, 29, 30, 31, 32, 1,
    ],
);

/// Permutation of the 32-bit S-box output inside the round function.
pub static P: PermutationTable = PermutationTable::new(
    32,
    &[
        16, 7, 20, 21,
        29, 12, 28, 17,
        1, 15, 23, 26,
        5, 18, 31, 10,
        2, 8, 24, 14,
        32, 27, 3, 9,
        19, 13, 30, 6,
        22, 11, 4, 25,
    ],
);

/// Permuted choice 1: drops the eight parity bits, leaving 56 key bits.
pub static PC1: PermutationTable = PermutationTable::new(
    64,
    &[
        57, 49, 41, 33, 25, 17, 9,
        1, 58, 50, 42, 34, 26, 18,
        10, 2, 59, 51, 43, 35, 27,
        19, 11, 3, 60, 52, 44, 36,
        63, 55, 47, 39, 31, 23, 15,
        7, 62, 54, 46, 38, 30, 22,
        14, 6, 61, 53, 45, 37, 29,
        21, 13, 5, 28, 20, 12, 4,
    ],
);

/// Permuted choice 2: compresses the rotated 56-bit halves to a 48-bit subkey.
pub static PC2: PermutationTable = PermutationTable::new(
    56,
    &[
        14, 17, 11, 24, 1, 5,
        3, 28, 15, 6, 21, 10,
        23, 19, 12, 4, 26, 8,
        16, 7, 27, 20, 13, 2,
        41, 52, 31, 37, 47, 55,
        30, 40, 51, 45, 33, 48,
        44, 49, 39, 56, 34, 53,
        46, 42, 50, 36, 29, 32,
    ],
);
