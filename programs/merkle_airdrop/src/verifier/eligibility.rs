use anchor_lang::prelude::*;

use crate::error::AirdropError;

/// Pre-claim predicate evaluated before the merkle proof is checked.
pub trait EligibilityPolicy {
    fn check(&self, claimant: &Pubkey) -> Result<()>;
}

/// Eligibility gates supported by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityGate {
    /// Every committed claimant may claim.
    Open,
    /// The claimant must hold at least one unit of `mint`, e.g. a collectible.
    HoldsToken { mint: Pubkey, holding: u64 },
}

/// Balance of a token account as seen at claim time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHolding {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl EligibilityGate {
    /// Builds the gate for one claim.
    ///
    /// A missing holding, or one for another mint or owner, counts as holding nothing.
    pub fn from_holding(
        eligibility_mint: Option<Pubkey>,
        holding: Option<TokenHolding>,
        claimant: &Pubkey,
    ) -> Self {
        match eligibility_mint {
            None => EligibilityGate::Open,
            Some(mint) => {
                let holding = holding
                    .filter(|held| held.mint == mint && held.owner == *claimant)
                    .map(|held| held.amount)
                    .unwrap_or(0);
                EligibilityGate::HoldsToken { mint, holding }
            }
        }
    }
}

impl EligibilityPolicy for EligibilityGate {
    fn check(&self, claimant: &Pubkey) -> Result<()> {
        match self {
            EligibilityGate::Open => Ok(()),
            EligibilityGate::HoldsToken { mint, holding } => {
                if *holding == 0 {
                    msg!("{} holds no {}", claimant, mint);
                    return err!(AirdropError::NotEligible);
                }
                Ok(())
            }
        }
    }
}
