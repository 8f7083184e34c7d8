use anchor_lang::prelude::*;
use common::Ownable;

use crate::instructions::UpdateMirror;

/// Set how long a non-latest root stays valid after it was received.
/// Applies immediately to every root already in the history.
pub fn set_root_history_expiry_handler(ctx: Context<UpdateMirror>, expiry: u64) -> Result<()> {
    let mirror = &mut ctx.accounts.mirror;
    mirror.only_owner(&ctx.accounts.authority.key())?;

    mirror.root_history_expiry = expiry;

    emit!(RootHistoryExpirySet { expiry });
    msg!("Root history expiry set to {}s", expiry);

    Ok(())
}

#[event]
pub struct RootHistoryExpirySet {
    pub expiry: u64,
}
