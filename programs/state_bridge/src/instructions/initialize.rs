use anchor_lang::prelude::*;
use common::{Ownership, OwnershipError};

use crate::{
    constants::STATE_BRIDGE_SEED,
    state::{FeeConfig, StateBridge},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account that pays for the transaction and state bridge account creation.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The state bridge account being initialized.
    /// - Uses PDA with STATE_BRIDGE_SEED for deterministic address
    /// - Payer funds the account creation
    #[account(
        init,
        payer = payer,
        seeds = [STATE_BRIDGE_SEED],
        bump,
        space = 8 + StateBridge::INIT_SPACE
    )]
    pub state_bridge: Account<'info, StateBridge>,

    /// The owner being installed. Must sign to prove it holds the owner key.
    /// The payer and owner may be distinct signers.
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Addresses the state bridge is wired to at deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct Wiring {
    pub identity_manager: Pubkey,
    pub identity_manager_program: Pubkey,
    pub world_id_mirror: Pubkey,
    pub messenger: Pubkey,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    owner: Pubkey,
    wiring: Wiring,
    fee_config: FeeConfig,
) -> Result<()> {
    require_keys_neq!(owner, Pubkey::default(), OwnershipError::ZeroOwner);
    require_keys_eq!(
        ctx.accounts.authority.key(),
        owner,
        OwnershipError::Unauthorized
    );

    *ctx.accounts.state_bridge = StateBridge {
        ownership: Ownership::new(owner, true),
        identity_manager: wiring.identity_manager,
        identity_manager_program: wiring.identity_manager_program,
        world_id_mirror: wiring.world_id_mirror,
        messenger: wiring.messenger,
        fee_config,
        nonce: 0,
    };

    msg!(
        "State bridge initialized: owner {}, mirror {} via messenger {}",
        owner,
        wiring.world_id_mirror,
        wiring.messenger
    );

    Ok(())
}
