//! Data contracts shared with the external collaborators.

use serde::{Deserialize, Serialize};

/// One retrieved unit of chain history.
///
/// Owned by the caller once retrieved; the verification core consumes
/// only `logs` (and `block_time`/`err` for display).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub signature: String,
    pub slot: Option<u64>,
    pub block_time: Option<i64>,
    /// Free-form error indicator as reported by the ledger, if any.
    pub err: Option<serde_json::Value>,
    pub logs: Vec<String>,
}

impl LedgerRecord {
    /// A record carrying only logs, for assembling fixtures.
    pub fn from_logs(signature: impl Into<String>, logs: Vec<String>) -> Self {
        Self {
            signature: signature.into(),
            slot: None,
            block_time: None,
            err: None,
            logs,
        }
    }
}

/// Round metadata returned by the backend service: the three transaction
/// signatures that drive the ledger lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundMetadata {
    pub round_id: String,
    pub commit_signature: String,
    pub randomness_signature: String,
    pub secret_signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_metadata_camel_case_wire_names() {
        let json = r#"{
            "roundId": "17",
            "commitSignature": "sigA",
            "randomnessSignature": "sigB",
            "secretSignature": "sigC",
            "network": "devnet"
        }"#;
        let metadata: RoundMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.round_id, "17");
        assert_eq!(metadata.commit_signature, "sigA");
        assert_eq!(metadata.randomness_signature, "sigB");
        assert_eq!(metadata.secret_signature, "sigC");
        assert_eq!(metadata.network.as_deref(), Some("devnet"));
    }

    #[test]
    fn test_round_metadata_network_optional() {
        let json = r#"{
            "roundId": "17",
            "commitSignature": "a",
            "randomnessSignature": "b",
            "secretSignature": "c"
        }"#;
        let metadata: RoundMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.network, None);
    }

    #[test]
    fn test_ledger_record_round_trips_through_json() {
        let record = LedgerRecord {
            signature: "sig".to_string(),
            slot: Some(1234),
            block_time: Some(1_700_000_000),
            err: Some(serde_json::json!({"InstructionError": [0, "Custom"]})),
            logs: vec!["Program log: hello".to_string()],
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: LedgerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
