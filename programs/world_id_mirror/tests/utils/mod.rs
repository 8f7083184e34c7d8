use anchor_lang::{
    prelude::*, solana_program::native_token::LAMPORTS_PER_SOL, AccountDeserialize,
    InstructionData,
};
use litesvm::{types::TransactionResult, LiteSVM};
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_signer::Signer;
use solana_transaction::Transaction;

use world_id_mirror::{
    constants::{MIRROR_SEED, RENT_VAULT_SEED, ROOT_SEED},
    state::{Mirror, RootEntry},
    ID as MIRROR_PROGRAM_ID,
};

pub const T0: i64 = 1747440000; // May 16th, 2025

pub struct TestMirror {
    pub svm: LiteSVM,
    pub payer: Keypair,
    pub messenger: Pubkey,
}

pub fn mirror_pda() -> Pubkey {
    Pubkey::find_program_address(&[MIRROR_SEED], &MIRROR_PROGRAM_ID).0
}

pub fn rent_vault_pda() -> Pubkey {
    Pubkey::find_program_address(&[RENT_VAULT_SEED], &MIRROR_PROGRAM_ID).0
}

pub fn root_entry_pda(root: &[u8; 32]) -> Pubkey {
    Pubkey::find_program_address(&[ROOT_SEED, root.as_ref()], &MIRROR_PROGRAM_ID).0
}

pub fn mock_clock(svm: &mut LiteSVM, timestamp: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp = timestamp;
    svm.set_sysvar::<Clock>(&clock);
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

/// Deploys the mirror and funds its rent vault with `rent_vault_lamports`,
/// without initializing it. Returns the intended owner keypair alongside.
pub fn deploy_mirror(rent_vault_lamports: u64) -> (TestMirror, Keypair) {
    let mut svm = LiteSVM::new();
    svm.add_program_from_file(MIRROR_PROGRAM_ID, "../../target/deploy/world_id_mirror.so")
        .unwrap();

    let payer = Keypair::new();
    svm.airdrop(&payer.pubkey(), LAMPORTS_PER_SOL * 10).unwrap();

    let owner = Keypair::new();
    svm.airdrop(&owner.pubkey(), LAMPORTS_PER_SOL).unwrap();

    svm.airdrop(&rent_vault_pda(), rent_vault_lamports).unwrap();

    mock_clock(&mut svm, T0);

    let mirror = TestMirror {
        svm,
        payer,
        messenger: Pubkey::new_unique(),
    };

    (mirror, owner)
}

/// Deploys the mirror, initializes it and returns the owner keypair alongside.
/// For a cross-domain mirror the returned keypair is the raw home-chain
/// identity, which must not be able to act on the mirror directly.
pub fn setup_mirror(
    owner_is_local: bool,
    root_history_expiry: Option<u64>,
) -> (TestMirror, Keypair) {
    let (mut mirror, owner) = deploy_mirror(LAMPORTS_PER_SOL);
    mirror
        .initialize(&owner, owner.pubkey(), owner_is_local, root_history_expiry)
        .expect("Failed to initialize mirror");

    (mirror, owner)
}

impl TestMirror {
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

    pub fn initialize(
        &mut self,
        authority: &Keypair,
        owner: Pubkey,
        owner_is_local: bool,
        root_history_expiry: Option<u64>,
    ) -> TransactionResult {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: world_id_mirror::accounts::Initialize {
                payer: self.payer.pubkey(),
                mirror: mirror_pda(),
                authority: authority.pubkey(),
                system_program: solana_sdk_ids::system_program::ID,
            }
            .to_account_metas(None),
            data: world_id_mirror::instruction::Initialize {
                owner,
                owner_is_local,
                messenger: self.messenger,
                root_history_expiry,
            }
            .data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn warp_to(&mut self, timestamp: i64) {
        mock_clock(&mut self.svm, timestamp);
    }

    pub fn receive_root(&mut self, authority: &Keypair, root: [u8; 32]) -> TransactionResult {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: world_id_mirror::accounts::ReceiveRoot {
                authority: authority.pubkey(),
                mirror: mirror_pda(),
                rent_vault: rent_vault_pda(),
                root_entry: root_entry_pda(&root),
                system_program: solana_sdk_ids::system_program::ID,
            }
            .to_account_metas(None),
            data: world_id_mirror::instruction::ReceiveRoot { root }.data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn set_root_history_expiry(
        &mut self,
        authority: &Keypair,
        expiry: u64,
    ) -> TransactionResult {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: self.update_accounts(authority),
            data: world_id_mirror::instruction::SetRootHistoryExpiry { expiry }.data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn transfer_ownership(
        &mut self,
        authority: &Keypair,
        new_owner: Pubkey,
        is_local: bool,
    ) -> TransactionResult {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: self.update_accounts(authority),
            data: world_id_mirror::instruction::TransferOwnership {
                new_owner,
                is_local,
            }
            .data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn accept_ownership(&mut self, authority: &Keypair) -> TransactionResult {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: self.update_accounts(authority),
            data: world_id_mirror::instruction::AcceptOwnership {}.data(),
        };
        self.send(ix, Some(authority))
    }

    pub fn renounce_ownership(&mut self, authority: &Keypair) -> TransactionResult {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: self.update_accounts(authority),
            data: world_id_mirror::instruction::RenounceOwnership {}.data(),
        };
        self.send(ix, Some(authority))
    }

    fn check_root_ix(&self, root: [u8; 32], data: Vec<u8>) -> Instruction {
        Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: world_id_mirror::accounts::CheckRoot {
                mirror: mirror_pda(),
                root_entry: root_entry_pda(&root),
            }
            .to_account_metas(None),
            data,
        }
    }

    pub fn is_valid_root(&mut self, root: [u8; 32]) -> bool {
        let ix = self.check_root_ix(
            root,
            world_id_mirror::instruction::IsValidRoot { root }.data(),
        );
        let meta = self.send(ix, None).expect("is_valid_root should not fail");
        bool::try_from_slice(&meta.return_data.data).unwrap()
    }

    pub fn require_valid_root(&mut self, root: [u8; 32]) -> TransactionResult {
        let ix = self.check_root_ix(
            root,
            world_id_mirror::instruction::RequireValidRoot { root }.data(),
        );
        self.send(ix, None)
    }

    pub fn latest_root_view(&mut self) -> [u8; 32] {
        let ix = Instruction {
            program_id: MIRROR_PROGRAM_ID,
            accounts: world_id_mirror::accounts::ReadMirror {
                mirror: mirror_pda(),
            }
            .to_account_metas(None),
            data: world_id_mirror::instruction::LatestRoot {}.data(),
        };
        let meta = self.send(ix, None).expect("latest_root should not fail");
        <[u8; 32]>::try_from_slice(&meta.return_data.data).unwrap()
    }

    pub fn mirror(&self) -> Mirror {
        let account = self.svm.get_account(&mirror_pda()).unwrap();
        Mirror::try_deserialize(&mut &account.data[..]).unwrap()
    }

    pub fn lamports(&self, account: &Pubkey) -> u64 {
        self.svm
            .get_account(account)
            .map(|account| account.lamports)
            .unwrap_or_default()
    }

    pub fn root_entry(&self, root: &[u8; 32]) -> Option<RootEntry> {
        self.svm
            .get_account(&root_entry_pda(root))
            .map(|account| RootEntry::try_deserialize(&mut &account.data[..]).unwrap())
    }

    fn update_accounts(&self, authority: &Keypair) -> Vec<AccountMeta> {
        world_id_mirror::accounts::UpdateMirror {
            authority: authority.pubkey(),
            mirror: mirror_pda(),
        }
        .to_account_metas(None)
    }
}
