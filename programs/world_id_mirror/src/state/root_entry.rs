use anchor_lang::prelude::*;

/// One root ever received by the mirror, at PDA `[ROOT_SEED, root]`.
///
/// Entries are written once and never closed: an existing entry is what makes
/// re-inserting the same root fail, even long after it expired.
#[account]
#[derive(Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RootEntry {
    pub root: [u8; 32],

    /// Unix timestamp of the slot in which the root was received.
    pub inserted_at: i64,
}
