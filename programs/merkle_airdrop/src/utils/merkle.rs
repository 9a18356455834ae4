use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::error::AirdropError;

/// Leaf hash for one entitlement: sha256(claimant || amount_le).
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &amount.to_le_bytes()]).to_bytes()
}

/// Parent hash of two siblings.
///
/// The pair is hashed in ascending byte order, so proofs carry no direction bits.
/// Tree construction and proof folding both go through this function.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` up from `leaf` and returns the resulting root.
pub fn compute_root(proof: &[[u8; 32]], leaf: [u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |current, sibling| hash_pair(&current, sibling))
}

/// Returns true if `proof` folds `leaf` into `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    compute_root(proof, leaf) == root
}

/**
 * Off-chain commitment builder
 *
 * Builds the tree the program verifies against. Nodes are stored level by level,
 * leaves first, root last. An odd node at the end of a level is paired with itself.
 */
#[derive(Debug, Clone)]
pub struct MerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl MerkleTree {
    pub fn new(entries: &[(Pubkey, u64)]) -> Result<Self> {
        require!(!entries.is_empty(), AirdropError::EmptyTree);

        let leaves = entries
            .iter()
            .map(|(claimant, amount)| hash_leaf(claimant, *amount))
            .collect();

        Ok(Self::from_leaves(leaves))
    }

    fn from_leaves(leaves: Vec<[u8; 32]>) -> Self {
        let leaf_count = leaves.len();
        let mut tree = MerkleTree {
            nodes: leaves,
            leaf_count,
        };

        let mut level_start = 0;
        let mut level_len = leaf_count;
        while level_len > 1 {
            for i in (0..level_len).step_by(2) {
                let left = &tree.nodes[level_start + i];
                // Duplicate last entry if odd
                let right = if i + 1 < level_len {
                    &tree.nodes[level_start + i + 1]
                } else {
                    left
                };
                let parent = hash_pair(left, right);
                tree.nodes.push(parent);
            }
            level_start += level_len;
            level_len = next_level_len(level_len);
        }

        tree
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn root(&self) -> [u8; 32] {
        // from_leaves is only reachable with at least one leaf
        self.nodes[self.nodes.len() - 1]
    }

    /// Sibling path for the leaf at `index`, leaf level first.
    pub fn proof(&self, index: usize) -> Result<Vec<[u8; 32]>> {
        require!(index < self.leaf_count, AirdropError::ProofIndexOutOfRange);

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 1 {
                current_index - 1
            } else if current_index + 1 < level_len {
                current_index + 1
            } else {
                current_index
            };
            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = next_level_len(level_len);
        }

        Ok(proof)
    }
}

fn next_level_len(level_len: usize) -> usize {
    if level_len <= 1 {
        0
    } else {
        (level_len + 1) / 2
    }
}
