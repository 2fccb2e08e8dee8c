use serde::{Deserialize, Serialize};

/// A block identifier accepted by the state-query and block-retrieval
/// methods: a concrete block number, or one of the symbolic tags resolved by
/// the node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// A block number, sent as a quantity
    Number(#[serde(with = "crate::serde::u64")] u64),
    /// A symbolic tag
    Tag(BlockTag),
}

/// A symbolic block tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum BlockTag {
    /// the genesis block
    #[serde(rename = "earliest")]
    Earliest,
    /// the most recent block
    #[serde(rename = "latest")]
    Latest,
    /// the block currently being assembled
    #[serde(rename = "pending")]
    Pending,
}

impl BlockSpec {
    /// Constructs an instance for the earliest block.
    #[must_use]
    pub fn earliest() -> Self {
        Self::Tag(BlockTag::Earliest)
    }

    /// Constructs an instance for the latest block.
    #[must_use]
    pub fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    /// Constructs an instance for the pending block.
    #[must_use]
    pub fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }
}

impl From<u64> for BlockSpec {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}
