use solana_program::program_error::ProgramError;

/// Standard base64 alphabet, indexed 0-63.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: u8 = b'=';

/// Encodes arbitrary bytes as base64 text.
///
/// Input is consumed in 3-byte groups, each mapped to 4 alphabet symbols.
/// A trailing 1-byte group emits two symbols and `==`; a trailing 2-byte
/// group emits three symbols and `=`. Empty input encodes to the empty
/// string. Encoding is total: there is no error case.
pub fn encode(input: &[u8]) -> String {
    let mut out = Vec::with_capacity(input.len().div_ceil(3) * 4);

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let group = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        out.push(ALPHABET[(group >> 18) as usize & 0x3f]);
        out.push(ALPHABET[(group >> 12) as usize & 0x3f]);
        out.push(ALPHABET[(group >> 6) as usize & 0x3f]);
        out.push(ALPHABET[group as usize & 0x3f]);
    }

    match chunks.remainder() {
        [a] => {
            let group = u32::from(*a) << 16;
            out.push(ALPHABET[(group >> 18) as usize & 0x3f]);
            out.push(ALPHABET[(group >> 12) as usize & 0x3f]);
            out.push(PAD);
            out.push(PAD);
        }
        [a, b] => {
            let group = (u32::from(*a) << 16) | (u32::from(*b) << 8);
            out.push(ALPHABET[(group >> 18) as usize & 0x3f]);
            out.push(ALPHABET[(group >> 12) as usize & 0x3f]);
            out.push(ALPHABET[(group >> 6) as usize & 0x3f]);
            out.push(PAD);
        }
        _ => {}
    }

    // Only alphabet and pad bytes were pushed, all ASCII.
    String::from_utf8(out).unwrap_or_default()
}

/// Decodes base64 text produced by [`encode`].
///
/// Rejects symbols outside the alphabet, misplaced padding and input whose
/// length is not a multiple of 4.
pub fn decode(input: &str) -> Result<Vec<u8>, ProgramError> {
    let bytes = input.as_bytes();

    if bytes.len() % 4 != 0 {
        return Err(ProgramError::InvalidInstructionData);
    }

    let mut out = Vec::with_capacity(bytes.len() / 4 * 3);

    for (index, quad) in bytes.chunks_exact(4).enumerate() {
        let is_last = (index + 1) * 4 == bytes.len();

        let pads = match quad {
            [_, _, a, b] if *a == PAD && *b == PAD => 2,
            [_, _, _, a] if *a == PAD => 1,
            _ => 0,
        };

        if pads > 0 && !is_last {
            return Err(ProgramError::InvalidInstructionData);
        }

        let mut group: u32 = 0;
        for &symbol in &quad[..4 - pads] {
            let value = ALPHABET
                .iter()
                .position(|&c| c == symbol)
                .ok_or(ProgramError::InvalidInstructionData)?;
            group = (group << 6) | value as u32;
        }
        group <<= 6 * pads as u32;

        out.push((group >> 16) as u8);
        if pads < 2 {
            out.push((group >> 8) as u8);
        }
        if pads == 0 {
            out.push(group as u8);
        }
    }

    Ok(out)
}
