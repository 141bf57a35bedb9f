use des_cipher::crypto::sboxes::{S_BOXES, substitute};

#[test]
fn test_all_outputs_fit_in_four_bits() {
    for box_index in 0..8 {
        for six_bits in 0..64u8 {
            assert!(substitute(box_index, six_bits) < 16);
        }
    }
}

#[test]
fn test_each_row_is_a_permutation_of_nibbles() {
    for (box_index, sbox) in S_BOXES.iter().enumerate() {
        for row in 0..4 {
            let mut seen = [false; 16];
            for column in 0..16 {
                seen[sbox[row * 16 + column] as usize] = true;
            }
            assert!(
                seen.iter().all(|&hit| hit),
                "box {} row {} is not a permutation",
                box_index + 1,
                row
            );
        }
    }
}

#[test]
fn test_outer_bits_select_the_row() {
    // column 0 of all four rows of S1
    assert_eq!(substitute(0, 0b000000), 14);
    assert_eq!(substitute(0, 0b000001), 0);
    assert_eq!(substitute(0, 0b100000), 4);
    assert_eq!(substitute(0, 0b100001), 15);
}

#[test]
fn test_middle_bits_select_the_column() {
    // S1 row 0, columns 1 and 12
    assert_eq!(substitute(0, 0b000010), 4);
    assert_eq!(substitute(0, 0b011000), 5);
}

#[test]
fn test_last_box_corner() {
    // S8 row 3, column 15
    assert_eq!(substitute(7, 0b111111), 11);
}
