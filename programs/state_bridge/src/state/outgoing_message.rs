use anchor_lang::prelude::*;

use crate::internal::{required_fee, RelayError};

/// Everything the transport needs to deliver one instruction to the target chain.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct MessageEnvelope {
    /// Program invoked on arrival.
    pub target_program: Pubkey,
    /// Borsh-encoded [`common::Ix`].
    pub payload: Vec<u8>,
    pub l2_gas_limit: u64,
    pub max_submission_cost: u64,
    pub gas_price_bid: u64,
    /// Receives unspent submission cost and gas.
    pub excess_fee_refund_address: Pubkey,
    /// Receives the escrow if the message is cancelled by the transport.
    pub call_value_refund_address: Pubkey,
}

impl MessageEnvelope {
    pub fn space(payload_len: usize) -> usize {
        32 + // target_program
        (4 + payload_len) + // payload
        8 + // l2_gas_limit
        8 + // max_submission_cost
        8 + // gas_price_bid
        32 + // excess_fee_refund_address
        32 // call_value_refund_address
    }

    /// Minimum escrow the transport accepts for this envelope.
    pub fn required_escrow(&self) -> Result<u64> {
        required_fee(self.max_submission_cost, self.gas_price_bid, self.l2_gas_limit)
    }

    pub fn check_escrow(&self, escrow: u64) -> Result<()> {
        let required = self.required_escrow()?;
        require_gte!(escrow, required, RelayError::InsufficientEscrow);
        Ok(())
    }

    pub fn check_payload_len(&self, max_payload_len: usize) -> Result<()> {
        require!(
            self.payload.len() <= max_payload_len,
            RelayError::PayloadEncodingFailed
        );
        Ok(())
    }
}

/// Ticket for a submitted message, at PDA `[OUTGOING_MESSAGE_SEED, nonce]`.
/// Read by the off-chain relayer; never modified after submission.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub nonce: u64,
    /// Home-chain identity the message speaks for (the state bridge PDA).
    pub sender: Pubkey,
    /// Lamports escrowed with the transport for this message.
    pub escrow: u64,
    pub envelope: MessageEnvelope,
}

impl OutgoingMessage {
    pub fn space(payload_len: usize) -> usize {
        8 + 32 + 8 + MessageEnvelope::space(payload_len)
    }
}
