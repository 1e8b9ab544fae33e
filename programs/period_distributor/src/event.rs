use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
}

/// Event emitted when a period is seeded with a root and its funding
#[event]
pub struct PeriodSeeded {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Distribution period identifier
    pub period: u64,
    /// The merkle root committed for this period
    pub merkle_root: [u8; 32],
    /// Tokens pulled into the vault for this period
    pub total_allocation: u64,
}

/// Event emitted once per committed claim, never for failed attempts
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Distribution period identifier
    pub period: u64,
    /// Leaf index within the period's merkle tree
    pub index: u64,
    /// Recipient of the claimed tokens
    pub account: Pubkey,
    /// Amount of tokens claimed for this index
    pub amount: u64,
    /// Total amount claimed from the distributor by all users
    pub total_claimed: u64,
}

/// Event emitted when an ownership handover is proposed
#[event]
pub struct OwnershipTransferStarted {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Current owner
    pub owner: Pubkey,
    /// Proposed new owner
    pub pending_owner: Pubkey,
}

/// Event emitted when an ownership handover completes
#[event]
pub struct OwnershipTransferred {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner before the handover
    pub previous_owner: Pubkey,
    /// Owner after the handover
    pub new_owner: Pubkey,
}
