//! End-to-end fairness pipeline: backend metadata, ledger records,
//! verification.

use crate::{backend::BackendClient, rpc::LedgerRpcClient, Error, Result};
use crashproof_types::{LedgerRecord, RoundMetadata};
use crashproof_verifier::{verify_round, CrashInputs, VerificationReport};
use futures::try_join;
use tracing::debug;

/// Everything a caller needs to present a fairness verdict for a round.
#[derive(Clone, Debug)]
pub struct FairnessData {
    pub metadata: RoundMetadata,
    pub commit: Option<LedgerRecord>,
    pub randomness: Option<LedgerRecord>,
    pub reveal: Option<LedgerRecord>,
    pub report: VerificationReport,
}

/// A record that has not landed yet maps to `None`; the Waiting verdict
/// covers it. Other transport failures propagate.
async fn get_optional(ledger: &LedgerRpcClient, signature: &str) -> Result<Option<LedgerRecord>> {
    match ledger.get_transaction(signature).await {
        Ok(record) => Ok(Some(record)),
        Err(Error::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Fetch and verify one round.
///
/// The metadata lookup drives three concurrent ledger lookups; the
/// decoded results feed the pure verification core. Both clients are
/// supplied by the caller.
pub async fn fetch_round(
    backend: &BackendClient,
    ledger: &LedgerRpcClient,
    round_id: &str,
    edge_bps: Option<i64>,
) -> Result<FairnessData> {
    let metadata = backend.fetch_round(round_id).await?;
    let (commit, randomness, reveal) = try_join!(
        get_optional(ledger, &metadata.commit_signature),
        get_optional(ledger, &metadata.randomness_signature),
        get_optional(ledger, &metadata.secret_signature),
    )?;

    let mut inputs = CrashInputs::from_records(commit.as_ref(), randomness.as_ref(), reveal.as_ref());
    inputs.edge_bps = edge_bps;
    let report = verify_round(&inputs);
    debug!(round_id, verdict = ?report.verdict, "round verification complete");

    Ok(FairnessData {
        metadata,
        commit,
        randomness,
        reveal,
        report,
    })
}
