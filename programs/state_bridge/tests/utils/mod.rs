use anchor_lang::{
    prelude::*, solana_program::native_token::LAMPORTS_PER_SOL, AccountDeserialize,
    InstructionData,
};
use litesvm::{types::TransactionResult, LiteSVM};
use solana_account::Account;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_signer::Signer;
use solana_transaction::Transaction;

use state_bridge::{
    constants::{ESCROW_VAULT, OUTGOING_MESSAGE_SEED, STATE_BRIDGE_SEED},
    instructions::Wiring,
    state::{FeeConfig, OutgoingMessage, StateBridge},
    ID as STATE_BRIDGE_PROGRAM_ID,
};

pub const IDENTITY_MANAGER_PROGRAM_ID: Pubkey =
    pubkey!("AvB1nbACUe2nyFtFvnM65vteVQt3Ujv8qZeLxDGy56DY");
pub const MESSENGER_PROGRAM_ID: Pubkey = pubkey!("EQY9BPDwT9fgHPbZ8rWmroomucuUskD6oSrTMVJ2PZZ6");

pub const FEES: FeeConfig = FeeConfig {
    max_submission_cost: 1_000_000,
    gas_price_bid: 10,
};

pub struct TestBridge {
    pub svm: LiteSVM,
    pub payer: Keypair,
    pub identity_manager: Pubkey,
}

pub fn state_bridge_pda() -> Pubkey {
    Pubkey::find_program_address(&[STATE_BRIDGE_SEED], &STATE_BRIDGE_PROGRAM_ID).0
}

pub fn outgoing_message_pda(nonce: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[OUTGOING_MESSAGE_SEED, nonce.to_le_bytes().as_ref()],
        &STATE_BRIDGE_PROGRAM_ID,
    )
    .0
}

pub fn assert_anchor_error(result: TransactionResult, code: &str) {
    match result {
        Ok(_) => panic!("Transaction should fail with {code}"),
        Err(e) => {
            let found = e
                .meta
                .logs
                .iter()
                .any(|log| log.contains(&format!("Error Code: {code}")));
            assert!(found, "Expected {code}, got logs: {:#?}", e.meta.logs);
        }
    }
}

/// Writes an identity manager state account (discriminator then root) owned by `owner`.
pub fn mock_identity_manager(svm: &mut LiteSVM, account: Pubkey, owner: Pubkey, root: [u8; 32]) {
    let mut data = vec![7u8; 8];
    data.extend_from_slice(&root);
    data.extend_from_slice(&[0u8; 32]);

    svm.set_account(
        account,
        Account {
            lamports: LAMPORTS_PER_SOL,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        },
    )
    .unwrap();
}

/// Deploys the state bridge without initializing it. Returns the intended owner keypair alongside.
pub fn deploy_bridge(root: [u8; 32]) -> (TestBridge, Keypair) {
    let mut svm = LiteSVM::new();
    svm.add_program_from_file(STATE_BRIDGE_PROGRAM_ID, "../../target/deploy/state_bridge.so")
        .unwrap();

    let payer = Keypair::new();
    svm.airdrop(&payer.pubkey(), LAMPORTS_PER_SOL * 10).unwrap();

    let owner = Keypair::new();
    svm.airdrop(&owner.pubkey(), LAMPORTS_PER_SOL * 10).unwrap();

    // The vault must be rent exempt before it can receive small escrows.
    svm.airdrop(&ESCROW_VAULT, LAMPORTS_PER_SOL).unwrap();

    let identity_manager = Pubkey::new_unique();
    mock_identity_manager(&mut svm, identity_manager, IDENTITY_MANAGER_PROGRAM_ID, root);

    let bridge = TestBridge {
        svm,
        payer,
        identity_manager,
    };

    (bridge, owner)
}

/// Deploys and initializes the state bridge and returns the owner keypair alongside.
pub fn setup_bridge(root: [u8; 32]) -> (TestBridge, Keypair) {
    let (mut bridge, owner) = deploy_bridge(root);
    bridge
        .initialize(&owner, owner.pubkey())
        .expect("Failed to initialize state bridge");

    (bridge, owner)
}

impl TestBridge {
    pub fn send(&mut self, ix: Instruction, signer: Option<&Keypair>) -> TransactionResult {
        // Identical instructions must not collide on signature.
        self.svm.expire_blockhash();
        let blockhash = self.svm.latest_blockhash();

        let payer = &self.payer;
        let mut signers = vec![payer];
        if let Some(signer) = signer {
            if signer.pubkey() != payer.pubkey() {
                signers.push(signer);
            }
        }

        let tx = Transaction::new(
            &signers,
            Message::new(&[ix], Some(&payer.pubkey())),
            blockhash,
        );
        self.svm.send_transaction(tx)
    }

    pub fn initialize(&mut self, authority: &Keypair, owner: Pubkey) -> TransactionResult {
        let ix = Instruction {
            program_id: STATE_BRIDGE_PROGRAM_ID,
            accounts: state_bridge::accounts::Initialize {
                payer: self.payer.pubkey(),
                state_bridge: state_bridge_pda(),
                authority: authority.pubkey(),
                system_program: solana_sdk_ids::system_program::ID,
            }
            .to_account_metas(None),
            data: state_bridge::instruction::Initialize {
                owner,
                wiring: Wiring {
                    identity_manager: self.identity_manager,
                    identity_manager_program: IDENTITY_MANAGER_PROGRAM_ID,
                    world_id_mirror: world_id_mirror::ID,
                    messenger: MESSENGER_PROGRAM_ID,
                },
                fee_config: FEES,
            }
            .data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn propagate_root_ix(
        &self,
        identity_manager: Pubkey,
        escrow_vault: Pubkey,
        fee_budget: u64,
    ) -> Instruction {
        let nonce = self.state().nonce;

        Instruction {
            program_id: STATE_BRIDGE_PROGRAM_ID,
            accounts: state_bridge::accounts::PropagateRoot {
                payer: self.payer.pubkey(),
                state_bridge: state_bridge_pda(),
                identity_manager,
                escrow_vault,
                outgoing_message: outgoing_message_pda(nonce),
                system_program: solana_sdk_ids::system_program::ID,
            }
            .to_account_metas(None),
            data: state_bridge::instruction::PropagateRoot { fee_budget }.data(),
        }
    }

    pub fn propagate_root(&mut self, fee_budget: u64) -> TransactionResult {
        let ix = self.propagate_root_ix(self.identity_manager, ESCROW_VAULT, fee_budget);
        self.send(ix, None)
    }

    pub fn set_root_history_expiry(
        &mut self,
        authority: &Keypair,
        expiry: u64,
        fee_budget: u64,
    ) -> TransactionResult {
        let nonce = self.state().nonce;

        let ix = Instruction {
            program_id: STATE_BRIDGE_PROGRAM_ID,
            accounts: state_bridge::accounts::SetRootHistoryExpiry {
                authority: authority.pubkey(),
                state_bridge: state_bridge_pda(),
                escrow_vault: ESCROW_VAULT,
                outgoing_message: outgoing_message_pda(nonce),
                system_program: solana_sdk_ids::system_program::ID,
            }
            .to_account_metas(None),
            data: state_bridge::instruction::SetRootHistoryExpiry { expiry, fee_budget }.data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn estimate_required_fee(&mut self, l2_gas_limit: u64) -> u64 {
        let ix = Instruction {
            program_id: STATE_BRIDGE_PROGRAM_ID,
            accounts: state_bridge::accounts::ReadStateBridge {
                state_bridge: state_bridge_pda(),
            }
            .to_account_metas(None),
            data: state_bridge::instruction::EstimateRequiredFee { l2_gas_limit }.data(),
        };
        let meta = self.send(ix, None).expect("estimate_required_fee should not fail");
        u64::try_from_slice(&meta.return_data.data).unwrap()
    }

    pub fn set_fee_config(
        &mut self,
        authority: &Keypair,
        fee_config: FeeConfig,
    ) -> TransactionResult {
        let ix = self.update_ix(
            authority,
            state_bridge::instruction::SetFeeConfig { fee_config }.data(),
        );
        self.send(ix, Some(authority))
    }

    pub fn transfer_ownership(
        &mut self,
        authority: &Keypair,
        new_owner: Pubkey,
        is_local: bool,
    ) -> TransactionResult {
        let ix = self.update_ix(
            authority,
            state_bridge::instruction::TransferOwnership {
                new_owner,
                is_local,
            }
            .data(),
        );
        self.send(ix, Some(authority))
    }

    pub fn accept_ownership(&mut self, authority: &Keypair) -> TransactionResult {
        let ix = self.update_ix(
            authority,
            state_bridge::instruction::AcceptOwnership {}.data(),
        );
        self.send(ix, Some(authority))
    }

    pub fn renounce_ownership(&mut self, authority: &Keypair) -> TransactionResult {
        let ix = self.update_ix(
            authority,
            state_bridge::instruction::RenounceOwnership {}.data(),
        );
        self.send(ix, Some(authority))
    }

    pub fn state(&self) -> StateBridge {
        let account = self.svm.get_account(&state_bridge_pda()).unwrap();
        StateBridge::try_deserialize(&mut &account.data[..]).unwrap()
    }

    pub fn outgoing_message(&self, nonce: u64) -> Option<OutgoingMessage> {
        self.svm
            .get_account(&outgoing_message_pda(nonce))
            .map(|account| OutgoingMessage::try_deserialize(&mut &account.data[..]).unwrap())
    }

    pub fn lamports(&self, account: &Pubkey) -> u64 {
        self.svm
            .get_account(account)
            .map(|account| account.lamports)
            .unwrap_or_default()
    }

    fn update_ix(&self, authority: &Keypair, data: Vec<u8>) -> Instruction {
        Instruction {
            program_id: STATE_BRIDGE_PROGRAM_ID,
            accounts: state_bridge::accounts::UpdateStateBridge {
                authority: authority.pubkey(),
                state_bridge: state_bridge_pda(),
            }
            .to_account_metas(None),
            data,
        }
    }
}
