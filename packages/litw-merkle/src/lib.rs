use cosmwasm_std::HexBinary;
use sha2::{Digest, Sha256};

mod tree;

pub use crate::tree::MerkleTree;

pub type Hash = [u8; 32];

/// Allowlist leaf for an address: sha256 of its lower-cased form
pub fn leaf(address: &str) -> Hash {
    Sha256::digest(address.to_lowercase().as_bytes()).into()
}

/// Hashes two nodes in ascending byte order, so the position of a node
/// in its pair never affects the parent.
pub fn hash_pair(a: &[u8], b: &[u8]) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

/// Recomputes the root from `leaf` and its sibling path and compares it
/// against `root`. Malformed proofs simply fail to match.
pub fn verify(root: &[u8], proof: &[HexBinary], leaf: &Hash) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |acc, sibling| hash_pair(&acc, sibling.as_slice()));
    computed.as_slice() == root
}

/// A root of all zero bytes is treated the same as no root at all
pub fn is_unset(root: &[u8]) -> bool {
    root.iter().all(|b| *b == 0)
}
