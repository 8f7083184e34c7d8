use anchor_lang::{prelude::*, solana_program::system_program, InstructionData};
use common::{Ix, IxAccount, PubkeyOrPda, Root, BRIDGE_AUTHORITY_SEED};
use world_id_mirror::constants::{MIRROR_SEED, RENT_VAULT_SEED, ROOT_SEED};

use crate::{
    constants::{MAX_PAYLOAD_LEN, RECEIVE_ROOT_GAS_LIMIT, SET_ROOT_HISTORY_EXPIRY_GAS_LIMIT},
    state::{MessageEnvelope, StateBridge},
};

/// Envelope invoking `world_id_mirror::receive_root(root)`.
///
/// `sender` is the state bridge PDA; on arrival the messenger signs with its
/// alias as a readonly signer. Rent for the new root entry comes from the
/// mirror's rent vault, so the alias needs no lamports.
pub fn receive_root_envelope(
    bridge: &StateBridge,
    sender: &Pubkey,
    root: Root,
    refund_address: Pubkey,
) -> Result<MessageEnvelope> {
    let ix = Ix {
        program_id: bridge.world_id_mirror,
        accounts: vec![
            sender_alias(bridge, sender),
            mirror_account(bridge),
            IxAccount::writable(PubkeyOrPda::PDA {
                seeds: vec![RENT_VAULT_SEED.to_vec()],
                program_id: bridge.world_id_mirror,
            }),
            IxAccount::writable(PubkeyOrPda::PDA {
                seeds: vec![ROOT_SEED.to_vec(), root.to_vec()],
                program_id: bridge.world_id_mirror,
            }),
            IxAccount::readonly(PubkeyOrPda::Pubkey(system_program::ID)),
        ],
        data: world_id_mirror::instruction::ReceiveRoot { root }.data(),
    };

    build_envelope(bridge, ix, RECEIVE_ROOT_GAS_LIMIT, refund_address)
}

/// Envelope invoking `world_id_mirror::set_root_history_expiry(expiry)`.
pub fn set_root_history_expiry_envelope(
    bridge: &StateBridge,
    sender: &Pubkey,
    expiry: u64,
    refund_address: Pubkey,
) -> Result<MessageEnvelope> {
    let ix = Ix {
        program_id: bridge.world_id_mirror,
        accounts: vec![sender_alias(bridge, sender), mirror_account(bridge)],
        data: world_id_mirror::instruction::SetRootHistoryExpiry { expiry }.data(),
    };

    build_envelope(bridge, ix, SET_ROOT_HISTORY_EXPIRY_GAS_LIMIT, refund_address)
}

fn sender_alias(bridge: &StateBridge, sender: &Pubkey) -> IxAccount {
    IxAccount::readonly(PubkeyOrPda::PDA {
        seeds: vec![BRIDGE_AUTHORITY_SEED.to_vec(), sender.to_bytes().to_vec()],
        program_id: bridge.messenger,
    })
    .signer()
}

fn mirror_account(bridge: &StateBridge) -> IxAccount {
    IxAccount::writable(PubkeyOrPda::PDA {
        seeds: vec![MIRROR_SEED.to_vec()],
        program_id: bridge.world_id_mirror,
    })
}

fn build_envelope(
    bridge: &StateBridge,
    ix: Ix,
    l2_gas_limit: u64,
    refund_address: Pubkey,
) -> Result<MessageEnvelope> {
    let envelope = MessageEnvelope {
        target_program: bridge.world_id_mirror,
        payload: ix.encode()?,
        l2_gas_limit,
        max_submission_cost: bridge.fee_config.max_submission_cost,
        gas_price_bid: bridge.fee_config.gas_price_bid,
        excess_fee_refund_address: refund_address,
        call_value_refund_address: refund_address,
    };
    envelope.check_payload_len(MAX_PAYLOAD_LEN)?;

    Ok(envelope)
}
