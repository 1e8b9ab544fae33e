use anchor_lang::prelude::*;

/**
 * Main distributor state account
 *
 * One distributor instance owns the period root registry and the claim bitmap
 * (both stored in child PDAs) together with the token vault custodying the
 * funds for every seeded period.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor
 * 2. Owner seeds periods against it (vault balance grows)
 * 3. Updated during claims (total_claimed increments)
 * 4. Never closed; the root registry is append-only and permanent
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple distributors for the same token/owner pair
    pub nonce: u32,

    /// Creator of the distributor
    /// - Part of the PDA seeds; never changes, even across ownership handovers
    pub creator: Pubkey,

    /// Owner of the distributor
    /// - The single administrator: seeds periods and proposes ownership handover
    /// - Starts equal to creator; transferable through the two-step handover
    pub owner: Pubkey,

    /// Pending owner of a two-step handover
    /// - Pubkey::default() when no handover is in flight
    pub pending_owner: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that custodies the funding of every seeded period
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Total amount of tokens pulled into the vault across all seedings
    pub total_funded: u64,

    /// Total amount of tokens claimed by all users across all periods
    /// - Incremented with each successful claim
    pub total_claimed: u64,
}

impl Distributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();
}
