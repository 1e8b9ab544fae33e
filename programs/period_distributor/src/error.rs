use anchor_lang::prelude::*;

#[error_code]
pub enum PeriodDistributorError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Only the pending owner can accept ownership")]
    OnlyPendingOwner,
    #[msg("Invalid owner account")]
    InvalidOwner,

    // Root registry errors
    #[msg("Merkle root already set for this period")]
    RootAlreadySet,
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,

    // Claim errors
    #[msg("Index already claimed for this period")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("External token transfer failed")]
    TransferFailed,

    // Batch errors
    #[msg("Batch contains no entries")]
    EmptyBatch,
    #[msg("Remaining account count does not match batch entries")]
    AccountCountMismatch,
    #[msg("Period root account does not match the derived address")]
    InvalidPeriodAccount,
    #[msg("Claim word account does not match the derived address")]
    InvalidClaimWordAccount,

    // Query errors
    #[msg("Index array length does not match the period range")]
    LengthMismatch,
    #[msg("Period range end precedes begin")]
    InvalidPeriodRange,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Recipient token account is not owned by the claim account")]
    RecipientMismatch,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
