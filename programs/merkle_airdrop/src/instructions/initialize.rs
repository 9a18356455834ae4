use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for initializing an airdrop
 *
 * - Creates the airdrop PDA holding the committed merkle root
 * - Creates a token vault PDA owned by the airdrop PDA
 *
 * The vault starts empty; see `fund`.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The airdrop account (PDA)
    /// - Derived from: ["airdrop", token_mint, authority]
    #[account(
        init,
        payer = authority,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            authority.key().as_ref(),
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = authority,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator of the airdrop, pays for both accounts
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Commits the airdrop to a merkle root
 *
 * @param merkle_root - root over hash(claimant || amount_le) leaves, sorted-pair nodes
 * @param eligibility_mint - optional mint every claimant must hold when claiming
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    merkle_root: [u8; 32],
    eligibility_mint: Option<Pubkey>,
) -> Result<()> {
    Airdrop::validate_config(&merkle_root, eligibility_mint)?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.bump = ctx.bumps.airdrop;
    airdrop.authority = ctx.accounts.authority.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.merkle_root = merkle_root;
    airdrop.eligibility_mint = eligibility_mint.unwrap_or_default();
    // Note: total_claimed and num_claimed start at 0

    msg!(
        "airdrop {} initialized for mint {}",
        airdrop.key(),
        airdrop.token_mint
    );

    emit_cpi!(AirdropInitialized {
        airdrop: airdrop.key(),
        authority: airdrop.authority,
        token_mint: airdrop.token_mint,
        token_vault: airdrop.token_vault,
        merkle_root,
        eligibility_mint,
    });

    Ok(())
}
