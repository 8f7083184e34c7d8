use anchor_lang::{prelude::*, solana_program::instruction::Instruction};

/// Instruction carried across chains and executed by the messenger on arrival.
/// Functionally equivalent to a Solana Instruction, except that accounts may be
/// given as PDA seeds so the sender does not need to derive them up front.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct Ix {
    /// Program that will process this instruction.
    pub program_id: Pubkey,
    /// Accounts required for this instruction.
    pub accounts: Vec<IxAccount>,
    /// Instruction data.
    pub data: Vec<u8>,
}

/// Account used in an instruction.
/// Identical to Solana's AccountMeta but implements AnchorSerialize and AnchorDeserialize.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct IxAccount {
    /// Public key of the account.
    pub pubkey_or_pda: PubkeyOrPda,
    /// Whether the account is writable.
    pub is_writable: bool,
    /// Whether the account is a signer.
    pub is_signer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum PubkeyOrPda {
    Pubkey(Pubkey),
    PDA {
        seeds: Vec<Vec<u8>>,
        program_id: Pubkey,
    },
}

impl PubkeyOrPda {
    pub fn resolve(&self) -> Pubkey {
        match self {
            PubkeyOrPda::Pubkey(pubkey) => *pubkey,
            PubkeyOrPda::PDA { seeds, program_id } => {
                let seeds: Vec<&[u8]> = seeds.iter().map(|v| v.as_slice()).collect();
                Pubkey::find_program_address(seeds.as_slice(), program_id).0
            }
        }
    }
}

impl IxAccount {
    pub fn readonly(pubkey_or_pda: PubkeyOrPda) -> Self {
        Self {
            pubkey_or_pda,
            is_writable: false,
            is_signer: false,
        }
    }

    pub fn writable(pubkey_or_pda: PubkeyOrPda) -> Self {
        Self {
            pubkey_or_pda,
            is_writable: true,
            is_signer: false,
        }
    }

    pub fn signer(mut self) -> Self {
        self.is_signer = true;
        self
    }
}

impl Ix {
    /// Borsh encoding used as the cross-chain payload.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        self.serialize(&mut payload)
            .map_err(|_| error!(IxError::EncodingFailed))?;
        Ok(payload)
    }

    pub fn decode(payload: &[u8]) -> Result<Self> {
        Self::try_from_slice(payload).map_err(|_| error!(IxError::DecodingFailed))
    }
}

/// Converts a Ix to a Solana Instruction.
impl From<Ix> for Instruction {
    fn from(ix: Ix) -> Instruction {
        Instruction {
            program_id: ix.program_id,
            accounts: ix.accounts.into_iter().map(Into::into).collect(),
            data: ix.data,
        }
    }
}

/// Converts a IxAccount to a Solana AccountMeta.
impl From<IxAccount> for AccountMeta {
    fn from(account: IxAccount) -> AccountMeta {
        AccountMeta {
            pubkey: account.pubkey_or_pda.resolve(),
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        }
    }
}

#[error_code]
pub enum IxError {
    #[msg("Failed to encode instruction payload")]
    EncodingFailed = 10500,
    #[msg("Failed to decode instruction payload")]
    DecodingFailed,
}
