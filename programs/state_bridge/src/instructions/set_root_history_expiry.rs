use anchor_lang::prelude::*;
use common::Ownable;

use crate::{
    constants::{
        ESCROW_VAULT, MAX_PAYLOAD_LEN, OUTGOING_MESSAGE_SEED, SET_ROOT_HISTORY_EXPIRY_GAS_LIMIT,
        STATE_BRIDGE_SEED,
    },
    internal::{set_root_history_expiry_envelope, submit, RelayError},
    state::{OutgoingMessage, StateBridge},
};

#[derive(Accounts)]
pub struct SetRootHistoryExpiry<'info> {
    /// The owner. Funds the escrow and the ticket account.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut, seeds = [STATE_BRIDGE_SEED], bump)]
    pub state_bridge: Account<'info, StateBridge>,

    /// CHECK: This is the hardcoded escrow vault account.
    #[account(mut, address = ESCROW_VAULT @ RelayError::IncorrectEscrowVault)]
    pub escrow_vault: AccountInfo<'info>,

    #[account(
        init,
        seeds = [OUTGOING_MESSAGE_SEED, state_bridge.nonce.to_le_bytes().as_ref()],
        bump,
        payer = authority,
        space = 8 + OutgoingMessage::space(MAX_PAYLOAD_LEN),
    )]
    pub outgoing_message: Account<'info, OutgoingMessage>,

    pub system_program: Program<'info, System>,
}

/// Relay a new root history expiry to the mirror.
pub fn set_root_history_expiry_handler(
    ctx: Context<SetRootHistoryExpiry>,
    expiry: u64,
    fee_budget: u64,
) -> Result<u64> {
    let accounts = ctx.accounts;
    accounts
        .state_bridge
        .only_owner(&accounts.authority.key())?;

    accounts
        .state_bridge
        .fee_config
        .check_fee_budget(SET_ROOT_HISTORY_EXPIRY_GAS_LIMIT, fee_budget)?;

    let envelope = set_root_history_expiry_envelope(
        &accounts.state_bridge,
        &accounts.state_bridge.key(),
        expiry,
        accounts.authority.key(),
    )?;

    let ticket = submit(
        &accounts.system_program,
        &accounts.authority,
        &accounts.escrow_vault,
        &mut accounts.state_bridge,
        &mut accounts.outgoing_message,
        envelope,
        fee_budget,
    )?;

    msg!("Relaying root history expiry {}s (ticket {})", expiry, ticket);

    Ok(ticket)
}
