use anchor_lang::prelude::*;

use crate::state::*;

/// Read-only view over an airdrop
#[derive(Accounts)]
pub struct ReadAirdrop<'info> {
    pub airdrop: Account<'info, Airdrop>,
}

pub fn handle_merkle_root(ctx: Context<ReadAirdrop>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.airdrop.merkle_root)
}

pub fn handle_token_mint(ctx: Context<ReadAirdrop>) -> Result<Pubkey> {
    Ok(ctx.accounts.airdrop.token_mint)
}
