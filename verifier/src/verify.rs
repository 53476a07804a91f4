//! Verification orchestrator: from ledger records to a verdict.

use crate::crash_point::{compute_crash_point, CrashComputation, DEFAULT_EDGE_BPS};
use crashproof_types::events::{GameStarted, RoundFinalized, RoundPrepared};
use crashproof_types::LedgerRecord;
use tracing::debug;

/// Inputs assembled from the three on-chain records of a round.
///
/// Presence flags track the records themselves; the `Option` fields
/// track what could actually be decoded from their logs. The two are
/// distinct verdicts: a missing record means "waiting", a present
/// record with undecodable logs means "not parsed".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrashInputs {
    pub commit_present: bool,
    pub randomness_present: bool,
    pub reveal_present: bool,
    pub commit_hash: Option<[u8; 32]>,
    pub public_random_value: Option<[u8; 32]>,
    pub local_secret: Option<[u8; 32]>,
    pub crash_point_bps: Option<u64>,
    pub round_id: Option<u64>,
    /// House edge override; `None` uses [`DEFAULT_EDGE_BPS`].
    pub edge_bps: Option<i64>,
}

impl CrashInputs {
    /// Decode whatever the three records' logs yield.
    ///
    /// The public random value prefers the `GameStarted` blockhash and
    /// falls back to the `RoundFinalized` one. The three events are not
    /// cross-checked against each other here (blockhash equality,
    /// shared round id); only the commitment and the crash value are
    /// verified against recomputation downstream.
    pub fn from_records(
        commit: Option<&LedgerRecord>,
        randomness: Option<&LedgerRecord>,
        reveal: Option<&LedgerRecord>,
    ) -> Self {
        let prepared = commit.and_then(|record| RoundPrepared::from_logs(&record.logs));
        let started = randomness.and_then(|record| GameStarted::from_logs(&record.logs));
        let finalized = reveal.and_then(|record| RoundFinalized::from_logs(&record.logs));

        Self {
            commit_present: commit.is_some(),
            randomness_present: randomness.is_some(),
            reveal_present: reveal.is_some(),
            commit_hash: prepared.as_ref().map(|event| event.commit_hash),
            public_random_value: started
                .as_ref()
                .map(|event| event.blockhash)
                .or_else(|| finalized.as_ref().map(|event| event.blockhash)),
            local_secret: finalized.as_ref().map(|event| event.local_secret),
            crash_point_bps: finalized.as_ref().map(|event| event.crash_point_bps),
            round_id: finalized
                .as_ref()
                .map(|event| event.round_id)
                .or_else(|| started.as_ref().map(|event| event.round_id))
                .or_else(|| prepared.as_ref().map(|event| event.round_id)),
            edge_bps: None,
        }
    }
}

/// Which on-chain value disagreed with recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchKind {
    CommitHash,
    CrashPoint,
}

/// Terminal outcome of a verification request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// One or more ledger records have not landed yet.
    Waiting,
    /// Records present but the secret or public random value could not
    /// be decoded from their logs.
    Unparsed,
    /// Recomputation succeeded and disagrees with an on-chain value.
    /// This is the "fraud detected" outcome, not a failure.
    Mismatch(MismatchKind),
    /// Every check with an on-chain counterpart passed.
    Verified,
    /// The calculator rejected its inputs; carries the error text.
    Rejected(String),
}

/// The orchestrator's result: verdict plus the recomputed outcome.
///
/// The recomputed multiplier is surfaced even on mismatch so an auditor
/// can see the discrepancy.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationReport {
    pub verdict: Verdict,
    pub crash_point: Option<f64>,
    pub computation: Option<CrashComputation>,
}

impl VerificationReport {
    pub fn verified(&self) -> bool {
        matches!(self.verdict, Verdict::Verified)
    }

    pub fn message(&self) -> &str {
        match &self.verdict {
            Verdict::Waiting => "Waiting for on-chain data.",
            Verdict::Unparsed => "Crash inputs not parsed yet.",
            Verdict::Mismatch(MismatchKind::CommitHash) => "Commit hash mismatch.",
            Verdict::Mismatch(MismatchKind::CrashPoint) => "Crash point mismatch.",
            Verdict::Verified => "Crash point computed.",
            Verdict::Rejected(message) => message,
        }
    }

    fn bare(verdict: Verdict) -> Self {
        Self {
            verdict,
            crash_point: None,
            computation: None,
        }
    }
}

/// Recompute the round outcome and cross-check it against the chain.
///
/// A check with no on-chain value to compare against passes vacuously.
/// When both available checks fail, the commit-hash mismatch wins: a
/// broken commitment invalidates the reveal before the crash value is
/// even worth discussing. Calculator errors are caught and surfaced in
/// the verdict, never propagated.
pub fn verify_round(inputs: &CrashInputs) -> VerificationReport {
    if !inputs.commit_present || !inputs.randomness_present || !inputs.reveal_present {
        return VerificationReport::bare(Verdict::Waiting);
    }

    let (Some(public_random_value), Some(local_secret)) =
        (inputs.public_random_value, inputs.local_secret)
    else {
        return VerificationReport::bare(Verdict::Unparsed);
    };

    let edge_bps = inputs.edge_bps.unwrap_or(DEFAULT_EDGE_BPS);
    let computation = match compute_crash_point(&public_random_value, &local_secret, edge_bps) {
        Ok(computation) => computation,
        Err(err) => return VerificationReport::bare(Verdict::Rejected(err.to_string())),
    };

    let mut mismatch = None;
    if let Some(commit_hash) = inputs.commit_hash {
        if commit_hash != computation.commit_hash {
            mismatch = Some(MismatchKind::CommitHash);
        }
    }
    if mismatch.is_none() {
        if let Some(crash_point_bps) = inputs.crash_point_bps {
            if crash_point_bps != computation.crash_value_bps {
                mismatch = Some(MismatchKind::CrashPoint);
            }
        }
    }

    debug!(
        round_id = ?inputs.round_id,
        x = computation.x,
        crash_value_bps = computation.crash_value_bps,
        ?mismatch,
        "crash point recomputed"
    );

    let verdict = match mismatch {
        Some(kind) => Verdict::Mismatch(kind),
        None => Verdict::Verified,
    };
    VerificationReport {
        verdict,
        crash_point: Some(computation.multiplier()),
        computation: Some(computation),
    }
}
