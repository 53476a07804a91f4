//! Crash-round verification for provably fair outcomes.
//!
//! This crate recomputes a round's crash point from its revealed secret
//! and public random value, then cross-checks the result against what
//! the chain recorded.
//!
//! ## Commit-Reveal Flow
//!
//! 1. **Commit** - Before betting opens, the operator publishes
//!    `commit_hash = SHA256(local_secret)` (the `RoundPrepared` event)
//! 2. **Fix randomness** - A blockhash outside the operator's control is
//!    recorded (the `GameStarted` event)
//! 3. **Reveal** - After the round, the operator discloses the secret and
//!    the crash value (the `RoundFinalized` event)
//! 4. **Verify** - Anyone recomputes both hashes and the crash value and
//!    compares them with the on-chain records
//!
//! Neither party can steer the outcome once both inputs are fixed: the
//! secret is pinned by its hash before the blockhash exists, and the
//! blockhash is pinned by the chain before the secret is revealed.

pub mod crash_point;
pub mod verify;

pub use crash_point::{
    compute_crash_point, crash_value_bps_from_x, CrashComputation, CrashPointError, BASIS_POINTS,
    DEFAULT_EDGE_BPS, INPUT_LEN,
};
pub use verify::{verify_round, CrashInputs, MismatchKind, Verdict, VerificationReport};
