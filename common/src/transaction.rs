use serde::{Deserialize, Serialize};

/// A wallet's view of a single transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxRecord {
    pub tx_id: String,
    /// Unix timestamp in seconds, as assigned by the network.
    pub timestamp: u64,
    #[serde(default)]
    pub voided: bool,
}

impl TxRecord {
    pub fn new(tx_id: impl Into<String>, timestamp: u64) -> Self {
        Self {
            tx_id: tx_id.into(),
            timestamp,
            voided: false,
        }
    }
}
