use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Claim verification errors
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Claimant has already claimed")]
    AlreadyClaimed,
    #[msg("Claimant does not satisfy the eligibility gate")]
    NotEligible,

    // Funding errors
    #[msg("Insufficient vault balance for this claim")]
    InsufficientFunds,
    #[msg("Invalid amount")]
    InvalidAmount,

    // Configuration errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid eligibility mint")]
    InvalidEligibilityMint,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,

    // Tree construction errors
    #[msg("Cannot build a merkle tree without entries")]
    EmptyTree,
    #[msg("Proof index out of range")]
    ProofIndexOutOfRange,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
