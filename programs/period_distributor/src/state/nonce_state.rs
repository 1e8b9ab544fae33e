use anchor_lang::prelude::*;

/**
 * Nonce state account
 *
 * Tracks the distributor counter for each owner so that one owner can run
 * several distributors for the same mint without choosing nonces by hand.
 *
 * Derivation: ["owner_nonce", owner]
 *
 * Lifecycle:
 * 1. Created on first distributor creation (using init_if_needed)
 * 2. Incremented with each new distributor
 * 3. Persistent across campaigns
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Increments with each distributor creation
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();
}
