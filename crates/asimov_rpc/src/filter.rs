use serde::{Deserialize, Serialize};

use crate::block_spec::BlockSpec;

/// A set of matchers for registering a server-side filter or querying logs
/// directly.
///
/// Fields that are `None` are omitted from the wire so the node applies its
/// own defaults. Filters registered from these options are identified by an
/// opaque id returned by the node; the library keeps no filter state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilterOptions {
    /// beginning of the block range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockSpec>,
    /// end of the block range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockSpec>,
    /// a single block, by hash; mutually exclusive with the range on the
    /// node side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    /// contract address or addresses to match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<OneOrMore<String>>,
    /// topic matchers, position by position; `None` matches any topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Option<OneOrMore<String>>>>,
}

/// Either a single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
    /// one value
    One(T),
    /// many values
    Many(Vec<T>),
}
