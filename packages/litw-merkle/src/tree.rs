use cosmwasm_std::HexBinary;

use crate::{hash_pair, leaf, Hash};

/// Sorted-pair merkle tree over pre-hashed leaves.
///
/// Leaves keep their insertion order. When a layer has an odd number of
/// nodes the last one is carried up unchanged instead of being paired
/// with itself, which is what the off-chain allowlist tooling produces.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Hash>) -> Self {
        let mut layers = vec![leaves];

        while let Some(layer) = layers.last().filter(|layer| layer.len() > 1) {
            let next = layer
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => hash_pair(&pair[0], right),
                    None => pair[0],
                })
                .collect();
            layers.push(next);
        }

        MerkleTree { layers }
    }

    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(addresses.into_iter().map(|a| leaf(a.as_ref())).collect())
    }

    /// `None` for a tree without leaves
    pub fn root(&self) -> Option<Hash> {
        self.layers.last().and_then(|layer| layer.first().copied())
    }

    pub fn hex_root(&self) -> Option<HexBinary> {
        self.root().map(|root| HexBinary::from(root.to_vec()))
    }

    /// Sibling path from `leaf` to the root, or `None` if the leaf is not in the tree
    pub fn proof(&self, leaf: &Hash) -> Option<Vec<HexBinary>> {
        let mut index = self.layers.first()?.iter().position(|l| l == leaf)?;
        let mut proof = vec![];

        for layer in &self.layers[..self.layers.len() - 1] {
            if let Some(sibling) = layer.get(index ^ 1) {
                proof.push(HexBinary::from(sibling.to_vec()));
            }
            index /= 2;
        }

        Some(proof)
    }

    pub fn address_proof(&self, address: &str) -> Option<Vec<HexBinary>> {
        self.proof(&leaf(address))
    }
}
