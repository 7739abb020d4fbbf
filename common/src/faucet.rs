use serde::{Deserialize, Serialize};

/// Request body for `POST /fund`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRequest {
    pub address: String,
    /// Amount in the smallest currency unit.
    pub amount: u64,
}

/// Response body of `POST /fund`, as sent by the faucet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundResponse {
    pub tx_id: String,
    pub amount: u64,
    pub utxo_source: String,
}

/// Result of a faucet transfer.
///
/// `hash` is the same value as `tx_id`; older callers read the transaction id
/// under that name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundResult {
    pub tx_id: String,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    pub utxo_source: String,
    pub hash: String,
}

impl From<FundResponse> for FundResult {
    fn from(resp: FundResponse) -> Self {
        Self {
            hash: resp.tx_id.clone(),
            tx_id: resp.tx_id,
            amount: resp.amount,
            utxo_source: resp.utxo_source,
        }
    }
}

/// Pre-provisioned test wallet served by `GET /simpleWallet`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleWalletData {
    /// Space separated seed words.
    pub words: String,
    pub addresses: Vec<String>,
}
