use std::sync::Arc;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::transaction::TxRecord;

/// Errors from wallet queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletError {
    /// The wallet does not know the transaction yet. Transient while waiting.
    TxNotFound(String),
    QueryFailed(String),
    BackendUnavailable(String),
}

impl WalletError {
    pub fn is_tx_not_found(&self) -> bool {
        matches!(self, Self::TxNotFound(_))
    }
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TxNotFound(tx_id) => write!(f, "transaction {tx_id} not found"),
            Self::QueryFailed(msg) => write!(f, "wallet query failed: {msg}"),
            Self::BackendUnavailable(msg) => write!(f, "backend unavailable: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

/// A wallet whose state is mirrored into local storage by a background sync.
///
/// `get_tx` is a lookup in that local storage; it returns `Ok(None)` until the
/// sync has seen the transaction.
pub trait LocalWallet: Send + Sync {
    fn get_tx<'a>(&'a self, tx_id: &'a str) -> BoxFuture<'a, Result<Option<TxRecord>, WalletError>>;
}

/// A wallet whose state lives in a remote indexing service.
///
/// `get_tx_by_id` fails with [`WalletError::TxNotFound`] while the service has
/// not indexed the transaction. `Ok(None)` means the service answered with an
/// empty result.
pub trait RemoteWallet: Send + Sync {
    fn get_tx_by_id<'a>(
        &'a self,
        tx_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<TxRecord>, WalletError>>;
}

/// Destination wallet for a funding call.
///
/// The two backends expose different queries, so callers match on the variant
/// instead of going through a common trait.
#[derive(Clone)]
pub enum WalletHandle {
    Local(Arc<dyn LocalWallet>),
    Remote(Arc<dyn RemoteWallet>),
}

impl WalletHandle {
    pub fn local(wallet: impl LocalWallet + 'static) -> Self {
        Self::Local(Arc::new(wallet))
    }

    pub fn remote(wallet: impl RemoteWallet + 'static) -> Self {
        Self::Remote(Arc::new(wallet))
    }

    /// Human-readable backend name ("local", "remote").
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "remote",
        }
    }
}

impl std::fmt::Debug for WalletHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WalletHandle::{}", self.backend_name())
    }
}
