#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::error::AirdropError;
    use crate::test::error_code;
    use crate::verifier::{EligibilityGate, EligibilityPolicy, TokenHolding};

    fn holding(mint: Pubkey, owner: Pubkey, amount: u64) -> Option<TokenHolding> {
        Some(TokenHolding { mint, owner, amount })
    }

    fn assert_not_eligible(gate: EligibilityGate, claimant: &Pubkey) {
        let err = gate.check(claimant).unwrap_err();
        assert_eq!(error_code(&err), u32::from(AirdropError::NotEligible));
    }

    #[test]
    fn test_no_gate_is_open() {
        let claimant = Pubkey::new_unique();
        let gate = EligibilityGate::from_holding(None, None, &claimant);

        assert_eq!(gate, EligibilityGate::Open);
        gate.check(&claimant).unwrap();
    }

    #[test]
    fn test_missing_account_holds_nothing() {
        let (mint, claimant) = (Pubkey::new_unique(), Pubkey::new_unique());
        let gate = EligibilityGate::from_holding(Some(mint), None, &claimant);

        assert_eq!(gate, EligibilityGate::HoldsToken { mint, holding: 0 });
        assert_not_eligible(gate, &claimant);
    }

    #[test]
    fn test_foreign_mint_holds_nothing() {
        let (mint, claimant) = (Pubkey::new_unique(), Pubkey::new_unique());
        let gate = EligibilityGate::from_holding(
            Some(mint),
            holding(Pubkey::new_unique(), claimant, 5),
            &claimant,
        );

        assert_eq!(gate, EligibilityGate::HoldsToken { mint, holding: 0 });
        assert_not_eligible(gate, &claimant);
    }

    #[test]
    fn test_foreign_owner_holds_nothing() {
        let (mint, claimant) = (Pubkey::new_unique(), Pubkey::new_unique());
        // Funded account belonging to someone else
        let gate = EligibilityGate::from_holding(
            Some(mint),
            holding(mint, Pubkey::new_unique(), 5),
            &claimant,
        );

        assert_eq!(gate, EligibilityGate::HoldsToken { mint, holding: 0 });
        assert_not_eligible(gate, &claimant);
    }

    #[test]
    fn test_empty_account_not_eligible() {
        let (mint, claimant) = (Pubkey::new_unique(), Pubkey::new_unique());
        let gate = EligibilityGate::from_holding(Some(mint), holding(mint, claimant, 0), &claimant);

        assert_not_eligible(gate, &claimant);
    }

    #[test]
    fn test_holder_is_eligible() {
        let (mint, claimant) = (Pubkey::new_unique(), Pubkey::new_unique());
        let gate = EligibilityGate::from_holding(Some(mint), holding(mint, claimant, 1), &claimant);

        assert_eq!(gate, EligibilityGate::HoldsToken { mint, holding: 1 });
        gate.check(&claimant).unwrap();
    }
}
