use anchor_lang::prelude::*;

use crate::constants::WORD_SIZE;

/**
 * One word of a period's claimed bitmap
 *
 * Each account stores 256 claim bits for one period: bit `index % 256` of
 * word `index / 256`. Accounts are created lazily on the first claim touching
 * the word, so an absent account reads as 256 unclaimed indices and any u64
 * index is addressable without a bound check.
 *
 * Derivation: ["claim_word", period_root_key, word_le_bytes]
 *
 * Invariant: a bit, once set, is never cleared.
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimWord {
    /// 256 claim bits, little-endian within each byte
    pub bits: [u8; 32],
}

impl ClaimWord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimWord>();

    /// Split a claim index into its (word, bit-in-word) coordinates
    pub const fn word_position(index: u64) -> (u64, u8) {
        (index / WORD_SIZE, (index % WORD_SIZE) as u8)
    }

    /// Word index for PDA derivation
    pub const fn word_index(index: u64) -> u64 {
        index / WORD_SIZE
    }

    /// Whether the claim bit at `bit` (0..=255) is set
    pub fn is_claimed(&self, bit: u8) -> bool {
        let byte_index = (bit / 8) as usize;
        let mask = 1u8 << (bit % 8);
        self.bits[byte_index] & mask != 0
    }

    /// Set the claim bit at `bit` (0..=255)
    /// - Idempotent; callers check is_claimed first to report AlreadyClaimed
    pub fn mark_claimed(&mut self, bit: u8) {
        let byte_index = (bit / 8) as usize;
        let mask = 1u8 << (bit % 8);
        self.bits[byte_index] |= mask;
    }
}
