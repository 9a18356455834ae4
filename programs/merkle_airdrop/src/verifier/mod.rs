//! Claim verification and one-time-claim bookkeeping.
//!
//! Nothing in here touches accounts directly. The instruction handlers plug the
//! on-chain ledger entry, vault and eligibility account in through the traits below,
//! which also lets the whole flow run on the host in tests.

pub mod eligibility;

pub use eligibility::*;

use anchor_lang::prelude::*;

use crate::constants::MAX_PROOF_LEN;
use crate::error::AirdropError;
use crate::utils::hash_leaf;

/// One-time-claim ledger keyed by claimant.
pub trait ClaimLedger {
    fn is_claimed(&self, claimant: &Pubkey) -> bool;

    fn mark_claimed(&mut self, claimant: &Pubkey);

    /// Undo a mark made earlier in the same failed claim.
    fn rollback_claim(&mut self, claimant: &Pubkey);
}

/// Moves the entitlement out of the distributor's balance.
pub trait AssetTransfer {
    /// Fails with `InsufficientFunds` when the balance cannot cover `amount`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Outcome of a successful claim, emitted as the `Claimed` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub claimant: Pubkey,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimVerifier {
    merkle_root: [u8; 32],
}

impl ClaimVerifier {
    pub fn new(merkle_root: [u8; 32]) -> Self {
        Self { merkle_root }
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.merkle_root
    }

    /// Checks that (claimant, amount) is a leaf of the committed tree.
    ///
    /// A wrong amount and a forged proof are indistinguishable here: both just fail
    /// to reach the root.
    pub fn verify(&self, claimant: &Pubkey, amount: u64, proof: &[[u8; 32]]) -> Result<()> {
        require!(
            proof.len() <= MAX_PROOF_LEN as usize,
            AirdropError::InvalidProof
        );

        let leaf = hash_leaf(claimant, amount);
        require!(
            crate::utils::verify(proof, self.merkle_root, leaf),
            AirdropError::InvalidProof
        );

        Ok(())
    }

    /**
     * Redeems the entitlement of `claimant`
     *
     * Order of operations:
     * 1. Eligibility gate
     * 2. Merkle proof against the stored root
     * 3. Ledger must not already hold the claimant
     * 4. Ledger marked (effects)
     * 5. Asset transfer (interactions)
     *
     * The ledger is marked before the transfer so a reentrant claim issued from
     * within the transfer sees AlreadyClaimed. If the transfer fails the mark is
     * undone and the transfer's error is returned.
     */
    pub fn claim<L, T, P>(
        &self,
        ledger: &mut L,
        asset: &mut T,
        policy: &P,
        claimant: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<ClaimReceipt>
    where
        L: ClaimLedger + ?Sized,
        T: AssetTransfer + ?Sized,
        P: EligibilityPolicy + ?Sized,
    {
        // ===== VALIDATION PHASE =====
        policy.check(claimant)?;
        self.verify(claimant, amount, proof)?;
        require!(!ledger.is_claimed(claimant), AirdropError::AlreadyClaimed);

        // ===== EFFECTS PHASE =====
        ledger.mark_claimed(claimant);

        // ===== INTERACTIONS PHASE =====
        if let Err(err) = asset.transfer(claimant, amount) {
            msg!("transfer to {} failed, claim mark rolled back", claimant);
            ledger.rollback_claim(claimant);
            return Err(err);
        }

        Ok(ClaimReceipt {
            claimant: *claimant,
            amount,
        })
    }
}
