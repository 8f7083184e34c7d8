use anchor_lang::prelude::*;
use common::Ownable;

use crate::instructions::UpdateStateBridge;

pub fn transfer_ownership_handler(
    ctx: Context<UpdateStateBridge>,
    new_owner: Pubkey,
    is_local: bool,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let started = ctx
        .accounts
        .state_bridge
        .transfer_ownership(&authority, new_owner, is_local)?;

    msg!("State bridge ownership transfer to {} started", started.pending_owner);
    emit!(started);

    Ok(())
}

pub fn accept_ownership_handler(ctx: Context<UpdateStateBridge>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let transferred = ctx.accounts.state_bridge.accept_ownership(&authority)?;

    msg!("State bridge ownership transferred to {}", transferred.new_owner);
    emit!(transferred);

    Ok(())
}

pub fn renounce_ownership_handler(ctx: Context<UpdateStateBridge>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.state_bridge.renounce_ownership(&authority)?;

    Ok(())
}
