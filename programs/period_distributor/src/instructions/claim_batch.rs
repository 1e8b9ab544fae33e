use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    program::{invoke, invoke_signed},
    system_instruction,
};
use anchor_lang::Discriminator;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{hash_leaf, transfer_token, verify};

/// One batch entry: a single (period, index) entitlement and its proof
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimInput {
    /// Leaf index within the period's merkle tree
    pub index: u64,
    /// Distribution period identifier
    pub period: u64,
    /// Entitlement amount encoded in the leaf
    pub amount: u64,
    /// Sibling hashes forming the merkle proof
    pub proof: Vec<[u8; 32]>,
}

/**
 * Account context for claiming several entitlements in one transaction
 *
 * The fixed accounts cover the distributor, vault and the single recipient;
 * each entry's PeriodRoot and ClaimWord PDAs arrive as remaining accounts
 * (two per entry, in entry order) and are re-derived and checked against the
 * expected addresses before use.
 *
 * All entries pay one recipient, so the vault transfer is deferred and issued
 * once for the accumulated total. Any entry failure aborts the whole batch;
 * the transaction boundary rolls back every bit already set.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ClaimBatch<'info> {
    /// The distributor account containing distribution parameters
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Token vault holding the custodied tokens
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account, paid the accumulated total
    /// - Must be owned by the `account` all entries were issued to
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
        constraint = recipient_token_account.owner == account @ PeriodDistributorError::RecipientMismatch
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ PeriodDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Transaction fee and rent payer
    /// - Funds lazily created claim word accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a batch of claims for one recipient
 *
 * @param ctx - The account context; remaining accounts carry (PeriodRoot,
 * ClaimWord) pairs, one pair per entry, in entry order
 * @param account - Recipient the entitlements were issued to
 * @param claims - Entries processed in caller-supplied order
 *
 * Each entry runs the same check-verify-mark core as the single claim and
 * emits its own TokensClaimed event; the vault transfer happens once at the
 * end for the accumulated total. Duplicate (period, index) entries fail
 * naturally: the first marks the bit, the second hits AlreadyClaimed.
 */
pub fn handle_claim_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, ClaimBatch<'info>>,
    account: Pubkey,
    claims: Vec<ClaimInput>,
) -> Result<()> {
    require!(!claims.is_empty(), PeriodDistributorError::EmptyBatch);
    require!(
        ctx.remaining_accounts.len() == claims.len() * 2,
        PeriodDistributorError::AccountCountMismatch
    );

    let distributor_key = ctx.accounts.distributor.key();
    let base_total_claimed = ctx.accounts.distributor.total_claimed;

    let mut batch_total: u64 = 0;

    for (i, entry) in claims.iter().enumerate() {
        let period_root_info = &ctx.remaining_accounts[2 * i];
        let claim_word_info = &ctx.remaining_accounts[2 * i + 1];

        // The period root must be the PDA for this entry's period
        let (expected_period_root, _) = Pubkey::find_program_address(
            &[
                PERIOD_SEED.as_bytes(),
                distributor_key.as_ref(),
                &entry.period.to_le_bytes(),
            ],
            &crate::ID,
        );
        require_keys_eq!(
            period_root_info.key(),
            expected_period_root,
            PeriodDistributorError::InvalidPeriodAccount
        );
        let period_root: Account<PeriodRoot> = Account::try_from(period_root_info)?;

        // The claim word must be the PDA for this entry's word
        let (word_index, bit) = ClaimWord::word_position(entry.index);
        let word_index_bytes = word_index.to_le_bytes();
        let (expected_claim_word, word_bump) = Pubkey::find_program_address(
            &[
                CLAIM_WORD_SEED.as_bytes(),
                expected_period_root.as_ref(),
                &word_index_bytes,
            ],
            &crate::ID,
        );
        require_keys_eq!(
            claim_word_info.key(),
            expected_claim_word,
            PeriodDistributorError::InvalidClaimWordAccount
        );

        // Lazily create the word on first touch, as the single claim's
        // init_if_needed does
        if claim_word_info.data_is_empty() {
            create_claim_word(
                &ctx.accounts.payer.to_account_info(),
                claim_word_info,
                &ctx.accounts.system_program.to_account_info(),
                &[
                    CLAIM_WORD_SEED.as_bytes(),
                    expected_period_root.as_ref(),
                    &word_index_bytes,
                    &[word_bump],
                ],
            )?;
        }

        let mut word = read_claim_word(claim_word_info)?;

        require!(
            !word.is_claimed(bit),
            PeriodDistributorError::AlreadyClaimed
        );

        let leaf = hash_leaf(entry.index, &account, entry.amount);
        require!(
            verify(&entry.proof, period_root.merkle_root, leaf),
            PeriodDistributorError::InvalidProof
        );

        // Persist the bit immediately so a duplicate entry later in this
        // batch sees it set
        word.mark_claimed(bit);
        write_claim_word(claim_word_info, &word)?;

        batch_total = batch_total
            .checked_add(entry.amount)
            .ok_or(PeriodDistributorError::ArithmeticOverflow)?;
        let running_total = base_total_claimed
            .checked_add(batch_total)
            .ok_or(PeriodDistributorError::ArithmeticOverflow)?;

        emit_cpi!(TokensClaimed {
            distributor: distributor_key,
            period: entry.period,
            index: entry.index,
            account,
            amount: entry.amount,
            total_claimed: running_total,
        });
    }

    let distributor = &mut ctx.accounts.distributor;
    distributor.total_claimed = base_total_claimed
        .checked_add(batch_total)
        .ok_or(PeriodDistributorError::ArithmeticOverflow)?;

    // Copy seed components out before re-borrowing the accounts for the CPI
    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let creator_key = distributor.creator;
    let distributor_bump = distributor.bump;

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    // One deferred transfer for the whole batch; a refusal rolls back every
    // bit set above with the transaction
    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        batch_total,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )
    .map_err(|_| PeriodDistributorError::TransferFailed)?;

    Ok(())
}

/// Create a zeroed ClaimWord PDA, funded by the payer
///
/// The system program rejects create_account whenever the target address
/// already holds lamports, and claim word addresses are predictable, so a
/// pre-funded address must not wedge the batch path. Mirror Anchor's init
/// fallback: top the balance up to rent exemption, then allocate and assign.
fn create_claim_word<'info>(
    payer: &AccountInfo<'info>,
    claim_word: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(ClaimWord::LEN);

    if claim_word.lamports() == 0 {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                claim_word.key,
                required_lamports,
                ClaimWord::LEN as u64,
                &crate::ID,
            ),
            &[payer.clone(), claim_word.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
    } else {
        let top_up = rent_shortfall(required_lamports, claim_word.lamports());
        if top_up > 0 {
            invoke(
                &system_instruction::transfer(payer.key, claim_word.key, top_up),
                &[payer.clone(), claim_word.clone(), system_program.clone()],
            )?;
        }
        invoke_signed(
            &system_instruction::allocate(claim_word.key, ClaimWord::LEN as u64),
            &[claim_word.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
        invoke_signed(
            &system_instruction::assign(claim_word.key, &crate::ID),
            &[claim_word.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
    }

    let mut data = claim_word.try_borrow_mut_data()?;
    data[..ClaimWord::DISCRIMINATOR.len()].copy_from_slice(ClaimWord::DISCRIMINATOR);

    Ok(())
}

/// Lamports the payer must add before allocate can leave the account rent exempt
pub(crate) fn rent_shortfall(required_lamports: u64, balance: u64) -> u64 {
    required_lamports.saturating_sub(balance)
}

/// Deserialize a ClaimWord from raw account data, checking the discriminator
pub(crate) fn read_claim_word(claim_word: &AccountInfo) -> Result<ClaimWord> {
    let data = claim_word.try_borrow_data()?;
    require!(
        data.len() >= ClaimWord::LEN
            && &data[..ClaimWord::DISCRIMINATOR.len()] == ClaimWord::DISCRIMINATOR,
        PeriodDistributorError::InvalidClaimWordAccount
    );
    let mut bits = [0u8; 32];
    bits.copy_from_slice(&data[8..40]);
    Ok(ClaimWord { bits })
}

/// Write a ClaimWord's bits back into its account data
pub(crate) fn write_claim_word(claim_word: &AccountInfo, word: &ClaimWord) -> Result<()> {
    let mut data = claim_word.try_borrow_mut_data()?;
    data[8..40].copy_from_slice(&word.bits);
    Ok(())
}
