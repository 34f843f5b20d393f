// src/common/crc.rs

use super::error::EssError;
use crc::{Algorithm, Crc};

/// CRC-8 algorithm used by Sensirion sensors (SHTC3, SGP30) on every data word.
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789")
pub const SENSIRION_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SENSIRION_CRC);

/// Number of bytes in one checksummed word: two data bytes plus the CRC.
pub const WORD_WITH_CRC_LEN: usize = 3;

/// Calculates the Sensirion CRC-8 over `data`.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Verifies one `[msb, lsb, crc]` word and returns its big-endian value.
///
/// # Returns
///
/// * `Ok(value)` if the CRC matches.
/// * `Err(EssError::CrcMismatch)` otherwise.
pub fn verify_word<E>(word: &[u8; WORD_WITH_CRC_LEN]) -> Result<u16, EssError<E>>
where
    E: core::fmt::Debug,
{
    let [msb, lsb, received] = *word;
    let calculated = calculate_crc8(&[msb, lsb]);
    if calculated == received {
        Ok(u16::from_be_bytes([msb, lsb]))
    } else {
        Err(EssError::CrcMismatch { expected: received, calculated })
    }
}

/// Verifies a six-byte sensor frame made of two checksummed words.
///
/// Words are checked in order; the first mismatch is returned.
pub fn verify_frame<E>(frame: &[u8; 2 * WORD_WITH_CRC_LEN]) -> Result<(u16, u16), EssError<E>>
where
    E: core::fmt::Debug,
{
    let first = verify_word::<E>(&[frame[0], frame[1], frame[2]])?;
    let second = verify_word::<E>(&[frame[3], frame[4], frame[5]])?;
    Ok((first, second))
}
