use anchor_lang::prelude::*;

declare_id!("Cvs3uMKZqrSe42Y77o3ke2fF22db31oKgkZDxaQsf475");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Period Distributor Program
 *
 * A Solana program for recurring merkle tree-based token distributions.
 * For every distribution period the owner publishes a merkle root committing
 * to a set of (index, account, amount) entitlements; recipients later prove
 * membership and withdraw their entitlement exactly once per period.
 *
 * Key Features:
 * - Merkle tree-based claim verification (sorted-pair hashing, no direction bits)
 * - Append-only period root registry: a published root can never be changed
 * - Sparse 256-bit claim bitmap words, one lazily-created PDA per word
 * - Single and batched claims (batch pays one recipient with one transfer)
 * - Read-only range queries over claim status and roots for off-chain indexers
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner (automatic nonce management)
 * - Distributor PDA: Owner, token mint and running totals
 * - Token Vault PDA: Holds the custodied tokens for all periods
 * - Period Root PDAs: One per period, root plus funded allocation
 * - Claim Word PDAs: One 256-bit word of the claimed bitmap per (period, word)
 *
 * Workflow:
 * 1. Owner creates a distributor
 * 2. Owner seeds each period with a merkle root and its funding
 * 3. Users claim tokens with valid merkle proofs, singly or batched
 * 4. Indexers read claim status and roots through the query instructions
 */
#[program]
pub mod period_distributor {
    use super::*;

    /**
     * Creates a new period distributor
     *
     * Initializes the distributor and its token vault with automatic nonce
     * management. No tokens are deposited here; each period is funded when
     * its root is seeded.
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     *
     * Access Control: The signer becomes the owner
     */
    pub fn create_distributor(ctx: Context<CreateDistributor>) -> Result<()> {
        handle_create_distributor(ctx)
    }

    /**
     * Seeds a distribution period
     *
     * Publishes the merkle root for `period` and pulls `total_allocation`
     * tokens from the owner's funding account into the vault. A period's root
     * can be set exactly once; the root and its funding commit atomically or
     * not at all.
     *
     * @param ctx - Account context containing distributor, period root, vault, and owner accounts
     * @param period - Distribution period identifier
     * @param merkle_root - 32-byte root committing to the period's entitlement set
     * @param total_allocation - Amount of tokens pulled into the vault for this period
     *
     * Access Control: Owner only
     * Note: total_allocation is not validated against the tree's entitlement sum;
     * the owner is trusted to fund each period correctly
     */
    pub fn seed_period(
        ctx: Context<SeedPeriod>,
        period: u64,
        merkle_root: [u8; 32],
        total_allocation: u64,
    ) -> Result<()> {
        handle_seed_period(ctx, period, merkle_root, total_allocation)
    }

    /**
     * Claims one entitlement with merkle proof verification
     *
     * @param ctx - Account context containing distributor, period root, claim word, and token accounts
     * @param index - Leaf index within the period's merkle tree
     * @param account - Recipient the entitlement was issued to
     * @param period - Distribution period identifier
     * @param amount - Entitlement amount encoded in the leaf
     * @param proof - Array of 32-byte sibling hashes forming the merkle proof
     *
     * Access Control: Any payer with a valid merkle proof; tokens always go to
     * a token account owned by `account`
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        account: Pubkey,
        period: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, index, account, period, amount, proof)
    }

    /**
     * Claims several entitlements for one recipient in a single transaction
     *
     * Entries are processed in caller order; any entry failing (already
     * claimed, invalid proof) aborts the whole batch. One vault transfer of
     * the accumulated total is issued after all entries pass.
     *
     * @param ctx - Account context; remaining accounts carry each entry's
     * PeriodRoot PDA followed by its ClaimWord PDA, in entry order
     * @param account - Recipient paid the accumulated total
     * @param claims - Entries of (index, period, amount, proof)
     */
    pub fn claim_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimBatch<'info>>,
        account: Pubkey,
        claims: Vec<ClaimInput>,
    ) -> Result<()> {
        handle_claim_batch(ctx, account, claims)
    }

    /**
     * Reads claim status for positionally paired (index, period) tuples
     *
     * Result `i` answers "is indices[i] claimed in period period_begin + i".
     * Requires one ClaimWord account per position as remaining accounts;
     * uninitialized words read as unclaimed.
     *
     * Access Control: None (pure read, result returned via return data)
     */
    pub fn claim_status<'info>(
        ctx: Context<'_, '_, 'info, 'info, Query<'info>>,
        indices: Vec<u64>,
        period_begin: u64,
        period_end: u64,
    ) -> Result<Vec<bool>> {
        handle_claim_status(ctx, indices, period_begin, period_end)
    }

    /**
     * Reads the stored merkle roots for an inclusive period range
     *
     * Unseeded periods read as the zero hash. Requires one PeriodRoot account
     * per period as remaining accounts.
     *
     * Access Control: None (pure read, result returned via return data)
     */
    pub fn merkle_roots<'info>(
        ctx: Context<'_, '_, 'info, 'info, Query<'info>>,
        period_begin: u64,
        period_end: u64,
    ) -> Result<Vec<[u8; 32]>> {
        handle_merkle_roots(ctx, period_begin, period_end)
    }

    /**
     * Starts a two-step ownership handover
     *
     * @param new_owner - Account that may accept ownership
     *
     * Access Control: Owner only
     */
    pub fn propose_owner(ctx: Context<ProposeOwner>, new_owner: Pubkey) -> Result<()> {
        handle_propose_owner(ctx, new_owner)
    }

    /**
     * Completes a two-step ownership handover
     *
     * Access Control: Pending owner only
     */
    pub fn accept_owner(ctx: Context<AcceptOwner>) -> Result<()> {
        handle_accept_owner(ctx)
    }
}
