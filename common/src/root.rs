/// A Merkle root produced by the identity manager, stored as a big-endian field element.
pub type Root = [u8; 32];

/// Sentinel for "no root has been received yet".
pub const NO_ROOT: Root = [0; 32];

/// Renders a root the way block explorers and the identity manager print it.
pub fn fmt_root(root: &Root) -> String {
    format!("0x{}", hex::encode(root))
}
