use anchor_lang::prelude::*;
use common::{fmt_root, Ownable};

use crate::{
    constants::{MIRROR_SEED, RENT_VAULT_SEED, ROOT_SEED},
    internal::{create_root_entry, load_root_entry},
    state::Mirror,
};

#[derive(Accounts)]
#[instruction(root: [u8; 32])]
pub struct ReceiveRoot<'info> {
    /// The owner's signer on this chain: the owner itself, or the messenger's alias
    /// PDA when the owner lives on the home chain. Only signs; it pays for nothing.
    pub authority: Signer<'info>,

    #[account(mut, seeds = [MIRROR_SEED], bump)]
    pub mirror: Account<'info, Mirror>,

    /// CHECK: System-owned vault paying rent for the new root entry. Anyone may fund it.
    #[account(mut, seeds = [RENT_VAULT_SEED], bump)]
    pub rent_vault: AccountInfo<'info>,

    /// CHECK: Entry PDA for `root`. Created by the handler; already populated if the
    /// root was received before.
    #[account(mut, seeds = [ROOT_SEED, root.as_ref()], bump)]
    pub root_entry: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn receive_root_handler(ctx: Context<ReceiveRoot>, root: [u8; 32]) -> Result<()> {
    let rent_vault_bump = ctx.bumps.rent_vault;
    let root_entry_bump = ctx.bumps.root_entry;
    let program_id = ctx.program_id;
    let accounts = ctx.accounts;

    accounts.mirror.only_owner(&accounts.authority.key())?;

    let now = Clock::get()?.unix_timestamp;
    let mut entry = load_root_entry(&accounts.root_entry, program_id)?.unwrap_or_default();
    accounts.mirror.record_root(&mut entry, root, now)?;

    create_root_entry(
        &accounts.system_program,
        &accounts.rent_vault,
        rent_vault_bump,
        &accounts.root_entry,
        root_entry_bump,
        &entry,
    )?;

    emit!(RootPropagated {
        root,
        timestamp: now,
    });
    msg!("Received root {}", fmt_root(&root));

    Ok(())
}

/// Event for indexers tracking the mirrored root history
#[event]
pub struct RootPropagated {
    pub root: [u8; 32],
    pub timestamp: i64,
}
