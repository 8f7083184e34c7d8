use anchor_lang::prelude::*;
use common::{fmt_root, read_latest_root, NO_ROOT};

use crate::{
    constants::{
        ESCROW_VAULT, MAX_PAYLOAD_LEN, OUTGOING_MESSAGE_SEED, RECEIVE_ROOT_GAS_LIMIT,
        STATE_BRIDGE_SEED,
    },
    internal::{receive_root_envelope, submit, RelayError},
    state::{OutgoingMessage, StateBridge},
};

#[derive(Accounts)]
pub struct PropagateRoot<'info> {
    /// Anyone may propagate; the payer funds the escrow and the ticket account
    /// and receives the transport's refunds.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, seeds = [STATE_BRIDGE_SEED], bump)]
    pub state_bridge: Account<'info, StateBridge>,

    /// CHECK: Ownership and layout are checked when reading the root.
    #[account(
        address = state_bridge.identity_manager @ RelayError::IncorrectIdentityManager
    )]
    pub identity_manager: AccountInfo<'info>,

    /// CHECK: This is the hardcoded escrow vault account.
    #[account(mut, address = ESCROW_VAULT @ RelayError::IncorrectEscrowVault)]
    pub escrow_vault: AccountInfo<'info>,

    #[account(
        init,
        seeds = [OUTGOING_MESSAGE_SEED, state_bridge.nonce.to_le_bytes().as_ref()],
        bump,
        payer = payer,
        space = 8 + OutgoingMessage::space(MAX_PAYLOAD_LEN),
    )]
    pub outgoing_message: Account<'info, OutgoingMessage>,

    pub system_program: Program<'info, System>,
}

pub fn propagate_root_handler(ctx: Context<PropagateRoot>, fee_budget: u64) -> Result<u64> {
    let accounts = ctx.accounts;

    let root = read_latest_root(
        &accounts.identity_manager,
        &accounts.state_bridge.identity_manager_program,
    )?;
    require!(root != NO_ROOT, RelayError::NoRootToPropagate);

    accounts
        .state_bridge
        .fee_config
        .check_fee_budget(RECEIVE_ROOT_GAS_LIMIT, fee_budget)?;

    let envelope = receive_root_envelope(
        &accounts.state_bridge,
        &accounts.state_bridge.key(),
        root,
        accounts.payer.key(),
    )?;

    let ticket = submit(
        &accounts.system_program,
        &accounts.payer,
        &accounts.escrow_vault,
        &mut accounts.state_bridge,
        &mut accounts.outgoing_message,
        envelope,
        fee_budget,
    )?;

    msg!("Propagating root {} (ticket {})", fmt_root(&root), ticket);

    Ok(ticket)
}
