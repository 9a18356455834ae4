use anchor_lang::prelude::*;

use crate::error::AirdropError;

/**
 * Airdrop state account
 *
 * Holds the committed merkle root of a single, fixed entitlement list and the
 * token plumbing needed to pay claims out of the vault.
 *
 * Derivation: ["airdrop", token_mint, authority]
 *
 * Lifecycle:
 * 1. Created during initialize; root, mint, vault and gate are written once
 * 2. total_claimed / num_claimed grow with every successful claim
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Creator of the airdrop
    pub authority: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault", airdrop_key]
    /// - Controlled by the airdrop PDA
    pub token_vault: Pubkey,

    /// Merkle root over all (claimant, amount) leaves
    /// - Immutable after initialize
    pub merkle_root: [u8; 32],

    /// Mint a claimant must hold at claim time
    /// - Pubkey::default() when no gate is configured
    pub eligibility_mint: Pubkey,

    /// Total amount of tokens claimed by all users
    pub total_claimed: u64,

    /// Number of claimants that have claimed
    pub num_claimed: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Rejects configurations no claim could ever satisfy.
    /// - An all-zero root would make every proof fail
    /// - Some(Pubkey::default()) would be indistinguishable from "no gate"
    pub fn validate_config(merkle_root: &[u8; 32], eligibility_mint: Option<Pubkey>) -> Result<()> {
        require!(*merkle_root != [0; 32], AirdropError::InvalidMerkleRoot);

        if let Some(mint) = eligibility_mint {
            require!(
                mint != Pubkey::default(),
                AirdropError::InvalidEligibilityMint
            );
        }

        Ok(())
    }

    pub fn eligibility_mint(&self) -> Option<Pubkey> {
        (self.eligibility_mint != Pubkey::default()).then_some(self.eligibility_mint)
    }
}
