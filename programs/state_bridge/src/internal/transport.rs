use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::state::{MessageEnvelope, OutgoingMessage, StateBridge};

/// Hands `envelope` to the transport: escrows `escrow` lamports from `payer`
/// into the escrow vault and records the ticket for the off-chain relayer.
///
/// Returns the ticket id (the message nonce). Whether and when the message is
/// executed on the target chain is outside this program's control.
pub fn submit<'info>(
    system_program: &Program<'info, System>,
    payer: &Signer<'info>,
    escrow_vault: &AccountInfo<'info>,
    state_bridge: &mut Account<'info, StateBridge>,
    outgoing_message: &mut Account<'info, OutgoingMessage>,
    envelope: MessageEnvelope,
    escrow: u64,
) -> Result<u64> {
    envelope.check_escrow(escrow)?;

    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: payer.to_account_info(),
            to: escrow_vault.clone(),
        },
    );
    system_program::transfer(cpi_ctx, escrow)?;

    let nonce = state_bridge.nonce;
    let sender = state_bridge.key();

    emit!(MessageSubmitted {
        nonce,
        sender,
        escrow,
        envelope: envelope.clone(),
    });
    msg!(
        "Submitted message {} to {} with escrow {}",
        nonce,
        envelope.target_program,
        escrow
    );

    **outgoing_message = OutgoingMessage {
        nonce,
        sender,
        escrow,
        envelope,
    };
    state_bridge.nonce += 1;

    Ok(nonce)
}

/// Event consumed by the off-chain relayer
#[event]
pub struct MessageSubmitted {
    pub nonce: u64,
    pub sender: Pubkey,
    pub escrow: u64,
    pub envelope: MessageEnvelope,
}
