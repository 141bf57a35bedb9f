/// Parse a hex string into bytes.
///
/// Spaces are ignored, upper and lower case both work, an odd number of
/// digits is zero-padded on the right, and anything that is not a hex
/// digit reads as zero.
pub fn parse_hex(text: &str) -> Vec<u8> {
    let mut nibbles: Vec<u8> = text
        .bytes()
        .filter(|&b| b != b' ')
        .map(nibble)
        .collect();

    if nibbles.len() % 2 == 1 {
        nibbles.push(0);
    }

    nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect()
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
