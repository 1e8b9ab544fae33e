use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;

/**
 * Account context shared by the read-only query instructions
 *
 * Queries never mutate state and require no authorization; they exist so
 * off-chain observers (indexers, UIs) can read claim status and roots in
 * ranges instead of polling per index. Results travel back through Anchor
 * return data.
 *
 * The per-period / per-word accounts arrive as remaining accounts; addresses
 * are re-derived and checked, and uninitialized accounts read as "unset".
 */
#[derive(Accounts)]
pub struct Query<'info> {
    /// The distributor whose registry and bitmap are being read
    pub distributor: Account<'info, Distributor>,
}

/**
 * Reads claim status for positionally paired (index, period) tuples
 *
 * @param ctx - Remaining accounts: the ClaimWord account for position i's
 * (period_begin + i, indices[i] / 256), one per position
 * @param indices - One claim index per period in the range
 * @param period_begin - First period of the inclusive range
 * @param period_end - Last period of the inclusive range
 *
 * Result i answers "is indices[i] claimed in period period_begin + i". This
 * pairs one index with one period by positional offset; it is not a
 * cross-product query. indices.len() must equal the range length
 * (LengthMismatch otherwise).
 */
pub fn handle_claim_status<'info>(
    ctx: Context<'_, '_, 'info, 'info, Query<'info>>,
    indices: Vec<u64>,
    period_begin: u64,
    period_end: u64,
) -> Result<Vec<bool>> {
    let count = range_len(period_begin, period_end)?;
    require!(
        indices.len() as u64 == count,
        PeriodDistributorError::LengthMismatch
    );
    require!(
        ctx.remaining_accounts.len() as u64 == count,
        PeriodDistributorError::AccountCountMismatch
    );

    let distributor_key = ctx.accounts.distributor.key();
    let mut statuses = Vec::with_capacity(indices.len());

    for (i, index) in indices.iter().enumerate() {
        let period = period_begin + i as u64;
        let (word_index, bit) = ClaimWord::word_position(*index);

        // Derive the expected word address; the period root account itself is
        // not needed, only its address as a seed
        let (period_root_key, _) = Pubkey::find_program_address(
            &[
                PERIOD_SEED.as_bytes(),
                distributor_key.as_ref(),
                &period.to_le_bytes(),
            ],
            &crate::ID,
        );
        let (expected_claim_word, _) = Pubkey::find_program_address(
            &[
                CLAIM_WORD_SEED.as_bytes(),
                period_root_key.as_ref(),
                &word_index.to_le_bytes(),
            ],
            &crate::ID,
        );

        let info = &ctx.remaining_accounts[i];
        require_keys_eq!(
            info.key(),
            expected_claim_word,
            PeriodDistributorError::InvalidClaimWordAccount
        );

        // A word never touched is implicitly all-zero: unclaimed
        let claimed = if info.data_is_empty() {
            false
        } else {
            let word: Account<ClaimWord> = Account::try_from(info)?;
            word.is_claimed(bit)
        };
        statuses.push(claimed);
    }

    Ok(statuses)
}

/**
 * Reads the stored merkle roots for an inclusive period range
 *
 * @param ctx - Remaining accounts: the PeriodRoot account for each period in
 * the range, in order
 * @param period_begin - First period of the inclusive range
 * @param period_end - Last period of the inclusive range
 *
 * Unseeded periods read as the zero hash, preserving the registry's
 * "unset root = zero value" convention.
 */
pub fn handle_merkle_roots<'info>(
    ctx: Context<'_, '_, 'info, 'info, Query<'info>>,
    period_begin: u64,
    period_end: u64,
) -> Result<Vec<[u8; 32]>> {
    let count = range_len(period_begin, period_end)?;
    require!(
        ctx.remaining_accounts.len() as u64 == count,
        PeriodDistributorError::AccountCountMismatch
    );

    let distributor_key = ctx.accounts.distributor.key();
    let mut roots = Vec::with_capacity(count as usize);

    for i in 0..count {
        let period = period_begin + i;
        let (expected_period_root, _) = Pubkey::find_program_address(
            &[
                PERIOD_SEED.as_bytes(),
                distributor_key.as_ref(),
                &period.to_le_bytes(),
            ],
            &crate::ID,
        );

        let info = &ctx.remaining_accounts[i as usize];
        require_keys_eq!(
            info.key(),
            expected_period_root,
            PeriodDistributorError::InvalidPeriodAccount
        );

        let root = if info.data_is_empty() {
            [0u8; 32]
        } else {
            let period_root: Account<PeriodRoot> = Account::try_from(info)?;
            period_root.merkle_root
        };
        roots.push(root);
    }

    Ok(roots)
}

/// Length of the inclusive period range, rejecting inverted bounds
pub(crate) fn range_len(period_begin: u64, period_end: u64) -> Result<u64> {
    let span = period_end
        .checked_sub(period_begin)
        .ok_or(PeriodDistributorError::InvalidPeriodRange)?;
    span.checked_add(1)
        .ok_or(PeriodDistributorError::ArithmeticOverflow.into())
}
