use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::hash_leaf;

#[derive(Debug, Clone)]
struct TreeNode {
    index: u64,
    account: Pubkey,
    amount: u64,
}

/// Reference tree builder for the commutative-pair scheme
///
/// Mirrors what an off-chain builder must do: hash each (index, account,
/// amount) leaf with hash_leaf, then hash each pair in ascending byte order,
/// duplicating the last node of an odd level.
struct SimpleMerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl SimpleMerkleTree {
    fn new(tree_nodes: Vec<TreeNode>) -> Self {
        let leaf_count = tree_nodes.len();
        let mut nodes = Vec::new();

        // Generate leaf hashes
        for node in tree_nodes {
            nodes.push(hash_leaf(node.index, &node.account, node.amount));
        }

        let mut tree = SimpleMerkleTree { nodes, leaf_count };

        // Build the tree
        tree.build_tree();
        tree
    }

    fn hash_intermediate(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        // Same ordering rule as the verify function: ascending pair order
        if left <= right {
            hashv(&[left, right]).to_bytes()
        } else {
            hashv(&[right, left]).to_bytes()
        }
    }

    fn build_tree(&mut self) {
        let mut level_len = self.next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let prev_level_idx = 2 * i;
                let left_sibling = self.nodes[prev_level_start + prev_level_idx];
                let right_sibling = if prev_level_idx + 1 < prev_level_len {
                    self.nodes[prev_level_start + prev_level_idx + 1]
                } else {
                    // Duplicate last entry if odd
                    self.nodes[prev_level_start + prev_level_idx]
                };

                let hash = Self::hash_intermediate(&left_sibling, &right_sibling);
                self.nodes.push(hash);
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = self.next_level_len(level_len);
        }
    }

    fn next_level_len(&self, level_len: usize) -> usize {
        if level_len == 1 {
            0
        } else {
            (level_len + 1) / 2
        }
    }

    fn get_root(&self) -> Option<&[u8; 32]> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(&self.nodes[self.nodes.len() - 1])
        }
    }

    /// Generate merkle proof for a leaf at given index
    fn get_proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.leaf_count {
            return Err("Index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 0 {
                if current_index + 1 < level_len {
                    current_index + 1
                } else {
                    // Odd level: the node was paired with its own duplicate
                    current_index
                }
            } else {
                current_index - 1
            };

            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = self.next_level_len(level_len);
        }

        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::verify;

    fn account(tag: u8) -> Pubkey {
        Pubkey::new_from_array([tag; 32])
    }

    fn get_test_data() -> Vec<TreeNode> {
        // Five leaves so the odd-level duplication path is exercised
        vec![
            TreeNode { index: 0, account: account(0x11), amount: 1000 },
            TreeNode { index: 1, account: account(0x22), amount: 2000 },
            TreeNode { index: 2, account: account(0x33), amount: 3000 },
            TreeNode { index: 3, account: account(0x44), amount: 4000 },
            TreeNode { index: 4, account: account(0x55), amount: 5000 },
        ]
    }

    #[test]
    fn test_all_proofs_verify() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = *merkle_tree.get_root().unwrap();

        for (i, node) in tree_nodes.iter().enumerate() {
            let leaf = hash_leaf(node.index, &node.account, node.amount);
            let proof = merkle_tree.get_proof(i).expect("Failed to get proof");

            assert!(
                verify(&proof, root, leaf),
                "Proof verification failed for leaf {}",
                i
            );
        }
    }

    #[test]
    fn test_wrong_leaf_rejected() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = *merkle_tree.get_root().unwrap();
        let proof = merkle_tree.get_proof(0).expect("Failed to get proof");

        // Leaf for an entitlement that was never in the tree
        let wrong_leaf = hash_leaf(99, &account(0x99), 9999);
        assert!(!verify(&proof, root, wrong_leaf));

        // Same (index, account) but inflated amount
        let inflated = hash_leaf(tree_nodes[0].index, &tree_nodes[0].account, u64::MAX);
        assert!(!verify(&proof, root, inflated));
    }

    #[test]
    fn test_single_bit_flip_rejected() {
        // Flipping any single bit of the proof, the root, or the leaf must
        // make verification fail
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = *merkle_tree.get_root().unwrap();
        let leaf = hash_leaf(tree_nodes[0].index, &tree_nodes[0].account, tree_nodes[0].amount);
        let proof = merkle_tree.get_proof(0).expect("Failed to get proof");

        assert!(verify(&proof, root, leaf));

        for element in 0..proof.len() {
            for byte in 0..32 {
                for bit in 0..8 {
                    let mut tampered = proof.clone();
                    tampered[element][byte] ^= 1 << bit;
                    assert!(
                        !verify(&tampered, root, leaf),
                        "bit {} of byte {} in proof element {} did not invalidate",
                        bit,
                        byte,
                        element
                    );
                }
            }
        }

        for byte in 0..32 {
            for bit in 0..8 {
                let mut bad_root = root;
                bad_root[byte] ^= 1 << bit;
                assert!(!verify(&proof, bad_root, leaf));

                let mut bad_leaf = leaf;
                bad_leaf[byte] ^= 1 << bit;
                assert!(!verify(&proof, root, bad_leaf));
            }
        }
    }

    #[test]
    fn test_single_leaf_tree() {
        // A single-leaf tree's root is the leaf itself and its proof is empty
        let single = vec![TreeNode { index: 0, account: account(0x11), amount: 1000 }];
        let tree = SimpleMerkleTree::new(single.clone());
        let root = *tree.get_root().unwrap();
        let proof = tree.get_proof(0).expect("Failed to get proof");

        assert_eq!(proof.len(), 0, "Single node should have empty proof");

        let leaf = hash_leaf(single[0].index, &single[0].account, single[0].amount);
        assert_eq!(root, leaf);
        assert!(verify(&proof, root, leaf));

        // An empty proof against any other leaf or a multi-leaf root fails
        let other = hash_leaf(1, &account(0x22), 2000);
        assert!(!verify(&[], root, other));

        let multi = SimpleMerkleTree::new(get_test_data());
        assert!(!verify(&[], *multi.get_root().unwrap(), leaf));
    }

    #[test]
    fn test_pair_order_independence() {
        // The verifier sorts each pair before hashing, so swapping children
        // at an internal node does not change the root
        let a = hash_leaf(0, &account(0x11), 1000);
        let b = hash_leaf(1, &account(0x22), 2000);

        assert_eq!(
            SimpleMerkleTree::hash_intermediate(&a, &b),
            SimpleMerkleTree::hash_intermediate(&b, &a)
        );

        // Two-leaf tree built in either leaf order yields the same root, and
        // each leaf's proof (the sibling) verifies against it
        let forward = SimpleMerkleTree::new(vec![
            TreeNode { index: 0, account: account(0x11), amount: 1000 },
            TreeNode { index: 1, account: account(0x22), amount: 2000 },
        ]);
        let swapped = SimpleMerkleTree::new(vec![
            TreeNode { index: 1, account: account(0x22), amount: 2000 },
            TreeNode { index: 0, account: account(0x11), amount: 1000 },
        ]);
        let root = *forward.get_root().unwrap();
        assert_eq!(root, *swapped.get_root().unwrap());

        assert!(verify(&[b], root, a));
        assert!(verify(&[a], root, b));
    }

    #[test]
    fn test_out_of_bounds_proof() {
        let merkle_tree = SimpleMerkleTree::new(get_test_data());
        assert!(merkle_tree.get_proof(10).is_err());
    }

    #[test]
    fn test_leaf_encoding() {
        // Deterministic, and sensitive to every field of the tuple
        let leaf = hash_leaf(7, &account(0x11), 1000);
        assert_eq!(leaf, hash_leaf(7, &account(0x11), 1000));

        assert_ne!(leaf, hash_leaf(8, &account(0x11), 1000));
        assert_ne!(leaf, hash_leaf(7, &account(0x12), 1000));
        assert_ne!(leaf, hash_leaf(7, &account(0x11), 1001));
    }
}
