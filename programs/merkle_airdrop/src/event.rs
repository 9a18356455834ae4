use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is initialized
#[event]
pub struct AirdropInitialized {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Authority that created the airdrop
    pub authority: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// The committed merkle root
    pub merkle_root: [u8; 32],
    /// Mint a claimant must hold to be eligible, if any
    pub eligibility_mint: Option<Pubkey>,
}

/// Event emitted when tokens are deposited into the vault
#[event]
pub struct AirdropFunded {
    pub airdrop: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    /// Vault balance after the deposit
    pub vault_balance: u64,
}

/// Event emitted when an entitlement is claimed
#[event]
pub struct Claimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount transferred to the claimant
    pub amount: u64,
    /// Total amount claimed from the airdrop by all users
    pub total_claimed: u64,
}
