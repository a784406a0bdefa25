use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;

pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const ZERO_SYMBOL: char = BASE58_ALPHABET[0] as char;

/// Marks bytes that are not part of the alphabet in [`BASE58_DECODE_MAP`].
pub const INVALID_SYMBOL: u8 = 0xFF;

/// Reverse lookup: ASCII byte -> digit value, `INVALID_SYMBOL` elsewhere.
pub const BASE58_DECODE_MAP: [u8; 128] = build_decode_map();

const DIGITS_PER_LIMB: usize = 5; // log_58(2^32) ≈ 5.462
const NEXT_LIMB_DIVISOR: u64 = 58_u64.pow(DIGITS_PER_LIMB as u32); // 58^5 = 656,356,768
const DIVISORS: [u64; DIGITS_PER_LIMB] = {
    let mut divs = [0u64; DIGITS_PER_LIMB];
    let mut val = 1u64;
    let mut i = 0;
    while i < DIGITS_PER_LIMB {
        divs[i] = val;
        val *= 58;
        i += 1;
    }
    divs
};

const fn build_decode_map() -> [u8; 128] {
    let mut map = [INVALID_SYMBOL; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        map[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Upper bound on the number of symbols produced for `input_len` bytes (log(256)/log(58) ≈ 1.366).
pub const fn encoded_len_hint(input_len: usize) -> usize {
    input_len * 138 / 100 + 1
}

/// Looks up the digit value of a single character.
#[inline]
fn digit_value(index: usize, character: char) -> Result<u8, Error> {
    let code = character as u32;
    if code < 128 {
        let value = BASE58_DECODE_MAP[code as usize];
        if value != INVALID_SYMBOL {
            return Ok(value);
        }
    }
    Err(Error::InvalidCharacter { character, index })
}

/// Encodes `input` as a Base58 string.
///
/// The input is read as a big-endian integer and converted into limbs of
/// five base-58 digits each. Every leading zero byte becomes one `1`.
pub fn encode(input: &[u8]) -> String {
    // Count leading zeros in advance
    let num_leading_zeros = input.iter().take_while(|&&byte| byte == 0).count();

    let mut limbs: Vec<u32> = Vec::with_capacity(encoded_len_hint(input.len()) / DIGITS_PER_LIMB + 1);

    // Multiply by 256 and add the next byte
    for &byte in &input[num_leading_zeros..] {
        let mut remaining_carry = byte as u64;

        for limb in limbs.iter_mut() {
            remaining_carry += (*limb as u64) << 8;
            *limb = (remaining_carry % NEXT_LIMB_DIVISOR) as u32;
            remaining_carry /= NEXT_LIMB_DIVISOR;
        }

        while remaining_carry > 0 {
            limbs.push((remaining_carry % NEXT_LIMB_DIVISOR) as u32);
            remaining_carry /= NEXT_LIMB_DIVISOR;
        }
    }

    // Least significant digit first
    let mut digits = vec![0u8; limbs.len() * DIGITS_PER_LIMB];
    for (idx, &limb) in limbs.iter().enumerate() {
        let limb_value = limb as u64;
        let output_offset = idx * DIGITS_PER_LIMB;
        for i in 0..DIGITS_PER_LIMB {
            digits[output_offset + i] = ((limb_value / DIVISORS[i]) % 58) as u8;
        }
    }

    // The top limb may be only partially filled
    while digits.last() == Some(&0) {
        digits.pop();
    }

    let mut output = String::with_capacity(num_leading_zeros + digits.len());
    for _ in 0..num_leading_zeros {
        output.push(ZERO_SYMBOL);
    }
    for &digit in digits.iter().rev() {
        output.push(BASE58_ALPHABET[digit as usize] as char);
    }

    output
}

/// Decodes a Base58 string back into bytes.
///
/// Stops at the first character outside the alphabet and reports it along
/// with its byte offset in `input`.
pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    let num_leading_zeros = input.bytes().take_while(|&byte| byte == BASE58_ALPHABET[0]).count();

    // Little-endian base 2^32 limbs
    let mut limbs: Vec<u32> = Vec::with_capacity(input.len() / DIGITS_PER_LIMB + 1);

    let mut chunk_value = 0u64;
    let mut chunk_multiplier = 1u64;
    for (index, character) in input.char_indices().skip(num_leading_zeros) {
        let value = digit_value(index, character)?;
        chunk_value = chunk_value * 58 + value as u64;
        chunk_multiplier *= 58;

        if chunk_multiplier == NEXT_LIMB_DIVISOR {
            multiply_add(&mut limbs, chunk_multiplier, chunk_value);
            chunk_value = 0;
            chunk_multiplier = 1;
        }
    }
    if chunk_multiplier > 1 {
        multiply_add(&mut limbs, chunk_multiplier, chunk_value);
    }

    let mut output = Vec::with_capacity(num_leading_zeros + limbs.len() * 4);
    output.resize(num_leading_zeros, 0);

    output.extend(
        limbs
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .skip_while(|&byte| byte == 0),
    );

    Ok(output)
}

/// Checks that every character of `input` belongs to the alphabet.
pub fn validate(input: &str) -> Result<(), Error> {
    for (index, character) in input.char_indices() {
        digit_value(index, character)?;
    }
    Ok(())
}

/// `limbs = limbs * multiplier + addend`, growing `limbs` as needed.
fn multiply_add(limbs: &mut Vec<u32>, multiplier: u64, addend: u64) {
    let mut carry = addend;
    for limb in limbs.iter_mut() {
        carry += (*limb as u64) * multiplier;
        *limb = carry as u32;
        carry >>= 32;
    }
    while carry > 0 {
        limbs.push(carry as u32);
        carry >>= 32;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::{RngCore, SeedableRng};
    use rand_xoshiro::Xoroshiro128StarStar;

    #[test]
    fn should_encode_32_correctly() {
        let public_key_bytes = hex::decode("0af764c1b6133a3a0abd7ef9c853791b687ce1e235f9dc8466d886da314dbea7").unwrap();
        let encoded = encode(&public_key_bytes);
        let expected = hex::decode("6a6f7365413875757746426a58707558423879453233437845756d596758336a486251677753627166504c").unwrap();
        assert_eq!(encoded.as_bytes(), &expected[..]);
    }

    #[test]
    fn should_encode_25_correctly() {
        let public_key_bytes = hex::decode("0AF764C1B6133A3A0ABD7EF9C853791B687CE1E235F9DC8466").unwrap();
        let encoded = encode(&public_key_bytes);
        let expected = hex::decode("355177385441616239385172516D796D637A7A78776B5A7A61634D444C344D654548").unwrap();
        assert_eq!(encoded.as_bytes(), &expected[..]);
    }

    #[test]
    fn should_encode_known_vectors() {
        let cases: [(&str, &str); 8] = [
            ("", ""),
            ("616263", "ZiCa"),
            ("00616263", "1ZiCa"),
            ("0000616263", "11ZiCa"),
            ("00bd8813e79baa5fa1874ca8b70877d1b044e220ecd34a60eca3ba15fc36b378e7", "1DkrQMni2h8KYpvY8t7dECshL66gwnxiR5uD2Udxps6og"),
            ("001dd2aa371711d1faea1c96d395f08eb94de1f388993e8be3f4609dc327ab513a", "131R8ufDhcsu6SRztR9D3m8GUzkWFUPfT78aQ6jgtgzob"),
            ("02798e9e137aec7c2d59d9655b4ffa640f301f628bf7c365083bb255f6aa5f89ef", "je9CrJD444xMSGDA2yr1XMvugoHuTc6pfYEaPYrKLuYa"),
            ("02e5d64f886664c58378d41fe3b8c29dd7975da59245a4a6bf92c3a47339a9a0a9", "rvpeCy7GhsGHq8n6TnB1LjQh4xn1FMHJVXnsdZAniKZA"),
        ];
        for (input, expected) in cases {
            let bytes = hex::decode(input).unwrap();
            assert_eq!(encode(&bytes), expected);
            assert_eq!(decode(expected).unwrap(), bytes);
        }
    }

    #[test]
    fn should_encode_small_values() {
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(encode(&[0x01]), "2");
        assert_eq!(encode(&[57]), "z");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[0xff]), "5Q");
        assert_eq!(encode(&[0x00, 0x00, 0x01]), "112");
        assert_eq!(encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
    }

    #[test]
    fn should_emit_one_zero_symbol_per_leading_zero_byte() {
        for zeros in 0..8 {
            let mut bytes = vec![0u8; zeros];
            assert_eq!(encode(&bytes), "1".repeat(zeros));
            assert_eq!(decode(&"1".repeat(zeros)).unwrap(), bytes);

            bytes.push(0x80);
            let encoded = encode(&bytes);
            let leading = encoded.chars().take_while(|&c| c == ZERO_SYMBOL).count();
            assert_eq!(leading, zeros);
        }
    }

    #[test]
    fn should_decode_empty_string() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn should_treat_inner_zero_symbols_as_digits() {
        // "2" is digit 1, so "21" is 1 * 58 + 0
        assert_eq!(decode("2").unwrap(), vec![1]);
        assert_eq!(decode("21").unwrap(), vec![58]);
        // "211" is 1 * 58^2 = 3364
        assert_eq!(decode("1211").unwrap(), vec![0x00, 0x0d, 0x24]);
        assert_eq!(encode(&decode("1211").unwrap()), "1211");
    }

    #[test]
    fn should_reject_ambiguous_characters() {
        for (text, character, index) in [("0", '0', 0), ("abcO", 'O', 3), ("1I", 'I', 1), ("2l2", 'l', 1)] {
            assert_eq!(decode(text), Err(Error::InvalidCharacter { character, index }));
            assert_eq!(validate(text), Err(Error::InvalidCharacter { character, index }));
        }
    }

    #[test]
    fn should_report_first_invalid_character() {
        assert_eq!(decode("11 0"), Err(Error::InvalidCharacter { character: ' ', index: 2 }));
        assert_eq!(decode("2\u{e9}+"), Err(Error::InvalidCharacter { character: '\u{e9}', index: 1 }));
    }

    #[test]
    fn should_build_consistent_tables() {
        let mut valid = 0;
        for byte in 0..128u8 {
            let value = BASE58_DECODE_MAP[byte as usize];
            if value != INVALID_SYMBOL {
                assert_eq!(BASE58_ALPHABET[value as usize], byte);
                valid += 1;
            }
        }
        assert_eq!(valid, 58);
        for ambiguous in [b'0', b'O', b'I', b'l'] {
            assert_eq!(BASE58_DECODE_MAP[ambiguous as usize], INVALID_SYMBOL);
        }
    }

    #[test]
    fn should_round_trip_random_buffers() {
        let mut rng = Xoroshiro128StarStar::seed_from_u64(0x5eed_b58);
        for len in 0..96 {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            // exercise leading zeros on some lengths
            let zeros = (rng.next_u32() % 4) as usize;
            for byte in bytes.iter_mut().take(zeros) {
                *byte = 0;
            }

            let encoded = encode(&bytes);
            assert!(encoded.len() <= encoded_len_hint(bytes.len()));
            assert_eq!(validate(&encoded), Ok(()));

            let decoded = decode(&encoded).unwrap();
            assert_eq!(decoded, bytes);
            assert_eq!(encode(&decoded), encoded);
        }
    }

    #[test]
    fn should_round_trip_large_input() {
        let mut rng = Xoroshiro128StarStar::seed_from_u64(42);
        let mut bytes = vec![0u8; 1024];
        rng.fill_bytes(&mut bytes);
        bytes[0] = 0;
        let encoded = encode(&bytes);
        assert!(encoded.starts_with('1'));
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }
}
