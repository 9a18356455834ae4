use anchor_lang::prelude::*;

use crate::verifier::ClaimLedger;

/**
 * Individual claim status account
 *
 * One entry of the claim ledger. The flag flips to true on the first successful
 * claim and never flips back.
 *
 * Derivation: ["claim", airdrop_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed)
 * 2. Marked claimed by the same instruction, before the vault transfer
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether the claimant has redeemed their entitlement
    pub claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}

// The PDA seeds bind this account to exactly one claimant, so the key argument
// is already implied by the account address.
impl ClaimLedger for ClaimStatus {
    fn is_claimed(&self, _claimant: &Pubkey) -> bool {
        self.claimed
    }

    fn mark_claimed(&mut self, _claimant: &Pubkey) {
        self.claimed = true;
    }

    fn rollback_claim(&mut self, _claimant: &Pubkey) {
        self.claimed = false;
    }
}
