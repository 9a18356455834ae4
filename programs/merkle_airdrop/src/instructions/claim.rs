use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::VaultTransfer;
use crate::verifier::{ClaimVerifier, EligibilityGate, TokenHolding};

/**
 * Account context for claiming tokens
 *
 * The signing claimant is the identity the leaf is rebuilt for, so nobody can
 * claim on someone else's behalf.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop being claimed from
    /// - Updated with total_claimed / num_claimed
    #[account(
        mut,
        has_one = token_vault,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Ledger entry for this claimant
    /// - Derived from: ["claim", airdrop_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Claimant's holding of the eligibility mint
    /// - Only read when the airdrop has an eligibility gate
    pub gate_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim with merkle proof verification
 *
 * @param amount - entitlement committed for the claimant in the merkle tree
 * @param proof - sibling hashes from leaf level up to the root
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let airdrop_key = ctx.accounts.airdrop.key();

    let verifier = ClaimVerifier::new(ctx.accounts.airdrop.merkle_root);
    let holding = ctx.accounts.gate_token_account.as_ref().map(|account| TokenHolding {
        mint: account.mint,
        owner: account.owner,
        amount: account.amount,
    });
    let gate = EligibilityGate::from_holding(
        ctx.accounts.airdrop.eligibility_mint(),
        holding,
        &claimant,
    );

    // Prepare PDA signing seeds for the vault transfer
    let token_mint_key = ctx.accounts.airdrop.token_mint;
    let authority_key = ctx.accounts.airdrop.authority;
    let airdrop_bump = ctx.accounts.airdrop.bump;
    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        authority_key.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    let mut vault = VaultTransfer {
        authority: ctx.accounts.airdrop.to_account_info(),
        vault: &ctx.accounts.token_vault,
        destination: ctx.accounts.claimant_token_account.to_account_info(),
        mint: &ctx.accounts.token_mint,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let receipt = verifier.claim(
        &mut *ctx.accounts.claim_status,
        &mut vault,
        &gate,
        &claimant,
        amount,
        &proof,
    )?;

    let airdrop = &mut ctx.accounts.airdrop;
    let total_claimed = airdrop
        .total_claimed
        .checked_add(receipt.amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    airdrop.total_claimed = total_claimed;
    airdrop.num_claimed = airdrop
        .num_claimed
        .checked_add(1)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    emit_cpi!(Claimed {
        airdrop: airdrop_key,
        claimant: receipt.claimant,
        amount: receipt.amount,
        total_claimed,
    });

    Ok(())
}
