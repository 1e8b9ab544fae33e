use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new period distributor
 *
 * This instruction initializes a new distributor with automatic nonce
 * management:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a distributor PDA with auto-incremented nonce number
 * - Creates the token vault PDA that will custody all period funding
 *
 * No tokens are deposited here; funding happens per period in seed_period.
 *
 * Access Control: The signer becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Token vault account (PDA) custodying the funds of every seeded period
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the distributor
    /// - The single administrator: seeds periods, proposes ownership handover
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new period distributor with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_create_distributor(ctx: Context<CreateDistributor>) -> Result<()> {
    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    // Calculate nonce number with overflow protection
    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(PeriodDistributorError::ArithmeticOverflow)?;

    // Update nonce state with current nonce
    owner_nonce.nonce = current_nonce;

    // Initialize distributor state with auto-assigned nonce
    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.creator = ctx.accounts.owner.key();
    distributor.owner = ctx.accounts.owner.key();
    distributor.pending_owner = Pubkey::default();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    // Note: total_funded and total_claimed use default values (0)

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
    });

    Ok(())
}
