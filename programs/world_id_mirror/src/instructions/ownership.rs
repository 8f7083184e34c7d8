use anchor_lang::prelude::*;
use common::Ownable;

use crate::instructions::UpdateMirror;

/// Nominate a new owner. `is_local` is false for an owner living on the home
/// chain, which will accept (and later act) through its messenger alias.
pub fn transfer_ownership_handler(
    ctx: Context<UpdateMirror>,
    new_owner: Pubkey,
    is_local: bool,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let started = ctx
        .accounts
        .mirror
        .transfer_ownership(&authority, new_owner, is_local)?;

    msg!(
        "Mirror ownership transfer to {} (local: {}) started",
        started.pending_owner,
        started.is_local
    );
    emit!(started);

    Ok(())
}

pub fn accept_ownership_handler(ctx: Context<UpdateMirror>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let transferred = ctx.accounts.mirror.accept_ownership(&authority)?;

    msg!("Mirror ownership transferred to {}", transferred.new_owner);
    emit!(transferred);

    Ok(())
}

pub fn renounce_ownership_handler(ctx: Context<UpdateMirror>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.mirror.renounce_ownership(&authority)?;

    Ok(())
}
