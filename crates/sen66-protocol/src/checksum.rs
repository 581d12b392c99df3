//! CRC-8 over 2-byte data words.
//!
//! Every word the SEN66 returns is followed by a CRC-8 with polynomial 0x31,
//! initial value 0xFF, MSB-first processing and no final XOR (the algorithm
//! the `crc` catalog lists as CRC-8/NRSC-5).

use crc::{Crc, CRC_8_NRSC_5};

const SENSIRION_CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// Compute the checksum of one data word.
pub fn compute(word: [u8; 2]) -> u8 {
    SENSIRION_CRC8.checksum(&word)
}

/// Check a received checksum byte against a data word.
pub fn verify(word: [u8; 2], received: u8) -> bool {
    compute(word) == received
}
