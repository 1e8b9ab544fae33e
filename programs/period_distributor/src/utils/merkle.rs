use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/**
 * Merkle proof verification with commutative pair ordering
 *
 * Folds the leaf through the proof: at each level the pair is hashed in
 * ascending byte order, so the proof carries no left/right direction bits.
 * The off-chain tree builder must apply the identical sort-then-hash rule
 * (see test::test_merkle::SimpleMerkleTree for the reference construction).
 *
 * An empty proof verifies only a single-leaf tree (root == leaf).
 *
 * Pure and deterministic: identical inputs always yield identical output, so
 * the same routine serves on-chain verification and off-chain tooling.
 */
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed_hash = leaf;
    for proof_element in proof {
        if computed_hash <= *proof_element {
            computed_hash = hashv(&[&computed_hash, proof_element]).to_bytes();
        } else {
            computed_hash = hashv(&[proof_element, &computed_hash]).to_bytes();
        }
    }
    computed_hash == root
}

/// Leaf hash for one entitlement: sha256(index_le || account || amount_le)
///
/// Recomputed on every claim attempt and never persisted. Off-chain tree
/// builders must use this exact field encoding.
pub fn hash_leaf(index: u64, account: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        &index.to_le_bytes(),
        &account.to_bytes(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}
