use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the period
 * distributor program. These constants control bitmap geometry and PDA
 * derivation.
 */

#[constant]
/// ===== BITMAP CONSTANTS =====

/// Number of claim indices covered by one bitmap word
/// - Each ClaimWord PDA stores one 256-bit word ([u8; 32])
/// - Index N lives at bit N % 256 of word N / 256
/// - Keeps storage amortized: one account covers 256 entitlements
pub const WORD_SIZE: u64 = 256;

/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Creates unique nonce tracking accounts for each owner
/// - Enables automatic nonce assignment for distributors
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
/// - Creates unique distributor accounts for each (token, owner, nonce) combination
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - Creates a unique vault for each distributor, controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for period root PDA derivation
/// - Used in: ["period", distributor_key, period_le_bytes]
/// - One account per seeded period; existence plus a non-zero root means the
///   period's commitment is final
pub const PERIOD_SEED: &str = "period";

/// Seed for claim word PDA derivation
/// - Used in: ["claim_word", period_root_key, word_le_bytes]
/// - One 256-bit bitmap word per account, created lazily on first claim
pub const CLAIM_WORD_SEED: &str = "claim_word";
