//! HTTP clients for the verifier's external collaborators.
//!
//! Two services feed the verification core: a ledger RPC endpoint that
//! serves transaction records (with their log messages) and a backend
//! that maps a round id to the three transaction signatures involved.
//! Both are plain request/response clients; callers own retry and
//! cancellation policy.

pub mod backend;
pub mod fairness;
pub mod rpc;

pub use backend::BackendClient;
pub use fairness::{fetch_round, FairnessData};
pub use rpc::LedgerRpcClient;

use thiserror::Error;

/// Error type for client operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed: {0}")]
    Failed(reqwest::StatusCode),
    #[error("failed: {status}: {body}")]
    FailedWithBody {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("rpc error: {0}")]
    Rpc(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
