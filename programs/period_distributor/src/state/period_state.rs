use anchor_lang::prelude::*;

/**
 * Period root registry entry
 *
 * One account per seeded period, holding the merkle root that commits to the
 * period's full (index, account, amount) entitlement set and the allocation
 * funded for it.
 *
 * Derivation: ["period", distributor_key, period_le_bytes]
 *
 * Invariant: once merkle_root is non-zero it is never changed or cleared.
 * seed_period enforces this with a zero-root precondition; no other
 * instruction writes this account.
 */
#[account]
#[derive(Default, Debug)]
pub struct PeriodRoot {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Distribution period identifier this root belongs to
    pub period: u64,

    /// Merkle root committing to the period's entitlement set
    /// - [0; 32] only transiently, between account creation and the seeding
    ///   write in the same instruction
    pub merkle_root: [u8; 32],

    /// Tokens pulled into the vault when this period was seeded
    /// - Caller-supplied; not validated against the tree's entitlement sum
    pub total_allocation: u64,
}

impl PeriodRoot {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<PeriodRoot>();
}
