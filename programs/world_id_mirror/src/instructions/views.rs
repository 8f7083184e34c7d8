use anchor_lang::prelude::*;

use crate::{
    constants::{MIRROR_SEED, ROOT_SEED},
    internal::load_root_entry,
    state::Mirror,
};

#[derive(Accounts)]
pub struct ReadMirror<'info> {
    #[account(seeds = [MIRROR_SEED], bump)]
    pub mirror: Account<'info, Mirror>,
}

/// Accounts for root validity queries.
#[derive(Accounts)]
#[instruction(root: [u8; 32])]
pub struct CheckRoot<'info> {
    #[account(seeds = [MIRROR_SEED], bump)]
    pub mirror: Account<'info, Mirror>,

    /// CHECK: Entry PDA for `root`. Left uncreated when the root was never received,
    /// so its contents are only trusted once `load_root_entry` sees the mirror owns it.
    #[account(seeds = [ROOT_SEED, root.as_ref()], bump)]
    pub root_entry: UncheckedAccount<'info>,
}

pub fn latest_root_handler(ctx: Context<ReadMirror>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.mirror.latest_root)
}

pub fn root_history_expiry_handler(ctx: Context<ReadMirror>) -> Result<u64> {
    Ok(ctx.accounts.mirror.root_history_expiry)
}

pub fn is_valid_root_handler(ctx: Context<CheckRoot>, root: [u8; 32]) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let entry = load_root_entry(&ctx.accounts.root_entry, ctx.program_id)?;
    ctx.accounts.mirror.is_valid_root(&root, entry.as_ref(), now)
}

pub fn require_valid_root_handler(ctx: Context<CheckRoot>, root: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let entry = load_root_entry(&ctx.accounts.root_entry, ctx.program_id)?;
    ctx.accounts.mirror.require_valid_root(&root, entry.as_ref(), now)
}
