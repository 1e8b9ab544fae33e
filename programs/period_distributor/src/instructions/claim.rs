use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{hash_leaf, transfer_token, verify};

/**
 * Account context for claiming one entitlement
 *
 * Verifies the merkle proof for (index, account, amount) against the period's
 * stored root, marks the index claimed in the period's bitmap, and transfers
 * the entitlement from the vault.
 *
 * Access Control: Any payer with a valid merkle proof; the tokens always go
 * to a token account owned by the `account` encoded in the leaf, so claiming
 * on someone else's behalf only pays them.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64, account: Pubkey, period: u64)]
pub struct Claim<'info> {
    /// The distributor account containing distribution parameters
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Registry entry holding the period's committed root
    /// - Must already be seeded; the PDA does not exist otherwise
    /// - Derived from: ["period", distributor_key, period_le_bytes]
    #[account(
        seeds = [
            PERIOD_SEED.as_bytes(),
            distributor.key().as_ref(),
            period.to_le_bytes().as_ref()
        ],
        bump = period_root.bump
    )]
    pub period_root: Account<'info, PeriodRoot>,

    /// Bitmap word covering this claim index
    /// - Created lazily on the first claim touching the word
    /// - Derived from: ["claim_word", period_root_key, word_le_bytes]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimWord::LEN,
        seeds = [
            CLAIM_WORD_SEED.as_bytes(),
            period_root.key().as_ref(),
            ClaimWord::word_index(index).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub claim_word: Account<'info, ClaimWord>,

    /// Token vault holding the custodied tokens
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account
    /// - Must be owned by the `account` the entitlement was issued to
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
        constraint = recipient_token_account.owner == account @ PeriodDistributorError::RecipientMismatch
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the distributor's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PeriodDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Transaction fee and rent payer
    /// - Need not be the recipient
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes one claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param index - Leaf index within the period's merkle tree
 * @param account - Recipient the entitlement was issued to
 * @param period - Distribution period identifier
 * @param amount - Entitlement amount encoded in the leaf
 * @param proof - Array of 32-byte hashes forming the merkle proof path
 *
 * Processing order:
 * 1. Reject if the index's bit is already set (AlreadyClaimed)
 * 2. Recompute the leaf hash from (index, account, amount)
 * 3. Verify the proof against the period's root (InvalidProof)
 * 4. Set the bit and bump total_claimed BEFORE the transfer, so a nested
 *    call re-entering through the transfer is rejected at step 1
 * 5. Transfer the amount from the vault (TransferFailed on refusal, rolling
 *    back everything above with the transaction)
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u64,
    account: Pubkey,
    period: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let period_root = &ctx.accounts.period_root;
    let claim_word = &mut ctx.accounts.claim_word;

    // ===== VALIDATION PHASE =====

    let (_, bit) = ClaimWord::word_position(index);
    require!(
        !claim_word.is_claimed(bit),
        PeriodDistributorError::AlreadyClaimed
    );

    // ===== MERKLE PROOF VERIFICATION =====

    // Recompute the leaf for this entitlement; it is never stored
    let leaf = hash_leaf(index, &account, amount);

    require!(
        verify(&proof, period_root.merkle_root, leaf),
        PeriodDistributorError::InvalidProof
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Mark claimed before the external transfer (CEI pattern)
    claim_word.mark_claimed(bit);

    let new_total_claimed = distributor
        .total_claimed
        .checked_add(amount)
        .ok_or(PeriodDistributorError::ArithmeticOverflow)?;
    distributor.total_claimed = new_total_claimed;

    // Prepare PDA signing seeds for the vault transfer
    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let creator_key = distributor.creator;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    // A refused transfer (including an exhausted vault) aborts the whole
    // transaction, so the bit set above never persists without the payout
    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )
    .map_err(|_| PeriodDistributorError::TransferFailed)?;

    // Emit event for off-chain indexing, exactly once per committed claim
    emit_cpi!(TokensClaimed {
        distributor: distributor_key,
        period,
        index,
        account,
        amount,
        total_claimed: new_total_claimed,
    });

    Ok(())
}
