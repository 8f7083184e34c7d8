use anchor_lang::prelude::*;
use common::{Root, NO_ROOT};

use crate::state::{Mirror, RootEntry};

/// Where a root stands in the history at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// The newest root. Valid regardless of age.
    Latest,
    /// A historical root still inside the expiry window.
    Live,
    /// A historical root older than the expiry window.
    Expired,
    /// Never received.
    Unknown,
}

impl RootStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, RootStatus::Latest | RootStatus::Live)
    }
}

/// Seconds elapsed since `inserted_at`, zero if the clock reads earlier.
fn age(inserted_at: i64, now: i64) -> u64 {
    now.saturating_sub(inserted_at).max(0) as u64
}

pub fn is_expired(inserted_at: i64, expiry: u64, now: i64) -> bool {
    age(inserted_at, now) > expiry
}

impl Mirror {
    /// Records `root` into its (possibly freshly created) entry and makes it the
    /// latest root.
    ///
    /// `entry` is the account at `[ROOT_SEED, root]`; a non-empty entry means the
    /// root was received before, whether or not it has expired since.
    pub fn record_root(&mut self, entry: &mut RootEntry, root: Root, now: i64) -> Result<()> {
        require!(root != NO_ROOT, RootHistoryError::InvalidRoot);
        require!(entry.root == NO_ROOT, RootHistoryError::DuplicateRoot);

        *entry = RootEntry {
            root,
            inserted_at: now,
        };
        self.latest_root = root;
        self.root_count += 1;

        Ok(())
    }

    pub fn root_status(
        &self,
        root: &Root,
        entry: Option<&RootEntry>,
        now: i64,
    ) -> Result<RootStatus> {
        if *root == NO_ROOT {
            return Ok(RootStatus::Unknown);
        }

        if *root == self.latest_root {
            return Ok(RootStatus::Latest);
        }

        let Some(entry) = entry else {
            return Ok(RootStatus::Unknown);
        };
        require!(entry.root == *root, RootHistoryError::MismatchedRootEntry);

        if is_expired(entry.inserted_at, self.root_history_expiry, now) {
            Ok(RootStatus::Expired)
        } else {
            Ok(RootStatus::Live)
        }
    }

    pub fn is_valid_root(&self, root: &Root, entry: Option<&RootEntry>, now: i64) -> Result<bool> {
        Ok(self.root_status(root, entry, now)?.is_valid())
    }

    pub fn require_valid_root(
        &self,
        root: &Root,
        entry: Option<&RootEntry>,
        now: i64,
    ) -> Result<()> {
        match self.root_status(root, entry, now)? {
            RootStatus::Latest | RootStatus::Live => Ok(()),
            RootStatus::Expired => err!(RootHistoryError::ExpiredRoot),
            RootStatus::Unknown => err!(RootHistoryError::NonExistentRoot),
        }
    }
}

/// Loads the entry stored at a root's PDA.
///
/// An address the mirror never wrote to is reported as `None`, including one
/// that only holds lamports sent there by someone else.
pub fn load_root_entry(info: &AccountInfo, program_id: &Pubkey) -> Result<Option<RootEntry>> {
    if info.data_is_empty() || info.owner != program_id {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let entry = RootEntry::try_deserialize(&mut &data[..])?;
    Ok(Some(entry))
}

#[error_code]
pub enum RootHistoryError {
    #[msg("Root was already received")]
    DuplicateRoot = 8000,
    #[msg("Root cannot be the empty root")]
    InvalidRoot,
    #[msg("Root is older than the root history expiry")]
    ExpiredRoot,
    #[msg("Root was never received")]
    NonExistentRoot,
    #[msg("Root entry does not belong to the queried root")]
    MismatchedRootEntry,
}
