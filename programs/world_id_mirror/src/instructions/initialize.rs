use anchor_lang::prelude::*;
use common::{Ownership, OwnershipError, NO_ROOT};

use crate::{
    constants::{DEFAULT_ROOT_HISTORY_EXPIRY, MIRROR_SEED},
    state::Mirror,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account that pays for the transaction and mirror account creation.
    /// Must be mutable to deduct lamports for account rent.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The mirror state account being initialized.
    /// - Uses PDA with MIRROR_SEED for deterministic address
    /// - Payer funds the account creation
    #[account(
        init,
        payer = payer,
        seeds = [MIRROR_SEED],
        bump,
        space = 8 + Mirror::INIT_SPACE
    )]
    pub mirror: Account<'info, Mirror>,

    /// The identity initializing the mirror. A local owner must sign here to prove
    /// it holds the owner key. A home-chain owner cannot sign on this chain, so any
    /// signer is accepted and the recorded owner must be checked after deployment.
    /// The payer and authority may be distinct signers.
    pub authority: Signer<'info>,

    /// System program required for creating new accounts.
    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    owner: Pubkey,
    owner_is_local: bool,
    messenger: Pubkey,
    root_history_expiry: Option<u64>,
) -> Result<()> {
    require_keys_neq!(owner, Pubkey::default(), OwnershipError::ZeroOwner);
    if owner_is_local {
        require_keys_eq!(
            ctx.accounts.authority.key(),
            owner,
            OwnershipError::Unauthorized
        );
    }

    let root_history_expiry = root_history_expiry.unwrap_or(DEFAULT_ROOT_HISTORY_EXPIRY);

    *ctx.accounts.mirror = Mirror {
        ownership: Ownership::new(owner, owner_is_local),
        messenger,
        latest_root: NO_ROOT,
        root_history_expiry,
        root_count: 0,
    };

    msg!(
        "Mirror initialized: owner {} (local: {}), root history expiry {}s",
        owner,
        owner_is_local,
        root_history_expiry
    );

    Ok(())
}
