use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// The sync state of the node, as returned by `flow_syncing`.
///
/// On the wire this is the literal `false` when the node is not syncing, and
/// a progress object otherwise. Decoding inspects the raw payload's shape
/// before attempting the structured decode; this is the only data-dependent
/// shape decision in the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    /// the node is catching up with its peers
    Syncing(SyncProgress),
    /// the node is in sync
    NotSyncing,
}

impl SyncStatus {
    /// Whether the node is syncing.
    pub fn is_syncing(&self) -> bool {
        matches!(self, SyncStatus::Syncing(_))
    }
}

/// Progress of a sync in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    /// the block the sync started at
    #[serde(with = "crate::serde::u64")]
    pub starting_block: u64,
    /// the block the node is currently importing
    #[serde(with = "crate::serde::u64")]
    pub current_block: u64,
    /// the highest block known from peers
    #[serde(with = "crate::serde::u64")]
    pub highest_block: u64,
}

impl<'de> Deserialize<'de> for SyncStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Bool(false) => Ok(SyncStatus::NotSyncing),
            serde_json::Value::Bool(true) => Err(D::Error::custom(
                "the syncing flag can only be `false`; progress is an object",
            )),
            raw => serde_json::from_value(raw)
                .map(SyncStatus::Syncing)
                .map_err(D::Error::custom),
        }
    }
}

impl Serialize for SyncStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SyncStatus::Syncing(progress) => progress.serialize(serializer),
            SyncStatus::NotSyncing => serializer.serialize_bool(false),
        }
    }
}
