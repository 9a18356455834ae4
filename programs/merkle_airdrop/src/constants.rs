use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and verification limits shared by every instruction.
 */

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", token_mint, authority]
/// - One airdrop per (token, authority) pair
#[constant]
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault is owned by the airdrop PDA, which signs every payout
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", airdrop_key, claimant_key]
/// - One ledger entry per (airdrop, claimant) pair
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// Upper bound on the number of siblings in a submitted proof.
/// A tree of depth 32 already covers 2^32 entries.
#[constant]
pub const MAX_PROOF_LEN: u8 = 32;
