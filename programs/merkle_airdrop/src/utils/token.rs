use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TokenAccount, TransferChecked};

use crate::error::AirdropError;
use crate::verifier::AssetTransfer;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Pays claims out of the airdrop vault, signing as the airdrop PDA.
pub struct VaultTransfer<'a, 'info> {
    pub authority: AccountInfo<'info>,
    pub vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub destination: AccountInfo<'info>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl AssetTransfer for VaultTransfer<'_, '_> {
    fn transfer(&mut self, _to: &Pubkey, amount: u64) -> Result<()> {
        // Destination is pinned to the claimant's token account by the Claim context
        require!(
            self.vault.amount >= amount,
            AirdropError::InsufficientFunds
        );

        transfer_token(
            self.authority.clone(),
            self.vault.to_account_info(),
            self.destination.clone(),
            self.mint.to_account_info(),
            self.token_program.clone(),
            amount,
            self.mint.decimals,
            Some(self.signer_seeds),
        )
    }
}
