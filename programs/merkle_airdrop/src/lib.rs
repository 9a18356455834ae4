use anchor_lang::prelude::*;

declare_id!("4pFFtqBqTMZ68KUQVKLDbvBmH8ZNZUz5t5wxmFvpEx11");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod verifier;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Airdrop Program
 *
 * Distributes tokens to a fixed list of (claimant, amount) entitlements committed
 * as a single merkle root. Each claimant redeems exactly once by presenting a proof.
 *
 * Key Features:
 * - Sorted-pair sha256 merkle proofs, no direction bits
 * - One-time claim ledger (one ClaimStatus PDA per claimant)
 * - Ledger written before the vault transfer
 * - Optional token-holding eligibility gate
 * - Support for both SPL Token and Token 2022
 *
 * Workflow:
 * 1. Authority builds the tree off-chain and initializes the airdrop with its root
 * 2. Anyone funds the vault
 * 3. Claimants claim with their amount and proof
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates the airdrop and its vault, committing to `merkle_root`
     *
     * Access Control: Any signer; the signer becomes the airdrop authority
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        merkle_root: [u8; 32],
        eligibility_mint: Option<Pubkey>,
    ) -> Result<()> {
        handle_initialize(ctx, merkle_root, eligibility_mint)
    }

    /// Deposits `amount` tokens into the airdrop vault
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        handle_fund(ctx, amount)
    }

    /**
     * Claims the signer's entitlement
     *
     * @param amount - Amount committed for the signer in the merkle tree
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any user with a valid merkle proof, once
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /// Returns the committed merkle root
    pub fn merkle_root(ctx: Context<ReadAirdrop>) -> Result<[u8; 32]> {
        handle_merkle_root(ctx)
    }

    /// Returns the mint of the distributed token
    pub fn token_mint(ctx: Context<ReadAirdrop>) -> Result<Pubkey> {
        handle_token_mint(ctx)
    }
}
