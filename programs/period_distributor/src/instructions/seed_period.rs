use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for seeding a distribution period
 *
 * Publishes the merkle root for one period and funds its payouts in the same
 * instruction. The PeriodRoot account is created on first use; seeding a
 * period whose root is already set fails, so a published root can never be
 * changed or cleared.
 *
 * Access Control: Only the owner can seed a period
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(period: u64)]
pub struct SeedPeriod<'info> {
    /// The distributor account this period belongs to
    #[account(
        mut,
        constraint = owner.key() == distributor.owner @ PeriodDistributorError::OnlyOwner
    )]
    pub distributor: Account<'info, Distributor>,

    /// Registry entry for this period
    /// - Derived from: ["period", distributor_key, period_le_bytes]
    /// - init_if_needed plus the zero-root precondition in the handler gives
    ///   the one-time-write invariant an explicit RootAlreadySet error
    #[account(
        init_if_needed,
        payer = owner,
        space = PeriodRoot::LEN,
        seeds = [
            PERIOD_SEED.as_bytes(),
            distributor.key().as_ref(),
            period.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub period_root: Account<'info, PeriodRoot>,

    /// Token vault receiving this period's funding
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account funding this period
    /// - The pull side of the seeding transfer; the owner signs, which is the
    ///   prior authorization the ledger requires
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub funding_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PeriodDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the distributor
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Seeds one distribution period: stores the root, then pulls the funding
 *
 * @param ctx - The account context containing all required accounts
 * @param period - Distribution period identifier
 * @param merkle_root - 32-byte root committing to the period's entitlement set
 * @param total_allocation - Tokens pulled from the funding account into the vault
 *
 * The root write and the funding transfer share one transaction, so either
 * both commit or neither does. total_allocation is caller-supplied and not
 * checked against the tree's entitlement sum; under-funding surfaces later as
 * TransferFailed on a legitimate claim, and the owner corrects it with a
 * direct token transfer into the vault.
 */
pub fn handle_seed_period(
    ctx: Context<SeedPeriod>,
    period: u64,
    merkle_root: [u8; 32],
    total_allocation: u64,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let period_root = &mut ctx.accounts.period_root;

    // A zero root would be indistinguishable from "unset" in the registry
    require!(
        merkle_root != [0; 32],
        PeriodDistributorError::InvalidMerkleRoot
    );

    // One-time-write invariant: the stored root must currently be unset
    require!(
        period_root.merkle_root == [0; 32],
        PeriodDistributorError::RootAlreadySet
    );

    period_root.bump = ctx.bumps.period_root;
    period_root.period = period;
    period_root.merkle_root = merkle_root;
    period_root.total_allocation = total_allocation;

    distributor.total_funded = distributor
        .total_funded
        .checked_add(total_allocation)
        .ok_or(PeriodDistributorError::ArithmeticOverflow)?;

    // Pull the period's funding from the owner into the vault
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.funding_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_allocation,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for owner-signed transfer
    )
    .map_err(|_| PeriodDistributorError::TransferFailed)?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(PeriodSeeded {
        distributor: distributor.key(),
        period,
        merkle_root,
        total_allocation,
    });

    Ok(())
}
