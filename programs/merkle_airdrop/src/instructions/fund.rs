use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for funding an airdrop
 *
 * Anyone may top up the vault. Claims that exceed the vault balance fail with
 * InsufficientFunds and can be retried after funding.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(
        has_one = token_vault,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub airdrop: Account<'info, Airdrop>,

    #[account(mut)]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Funder's token account the deposit is taken from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    pub funder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropError::InvalidAmount);

    transfer_token(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for funder-signed transfer
    )?;

    ctx.accounts.token_vault.reload()?;

    emit_cpi!(AirdropFunded {
        airdrop: ctx.accounts.airdrop.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.token_vault.amount,
    });

    Ok(())
}
