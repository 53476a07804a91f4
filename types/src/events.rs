//! Binary event codec for crash-round log payloads.
//!
//! Relevant events are emitted by the on-chain program as log lines of
//! the form `"Program data: <base64>"`. The decoded payload is an 8-byte
//! discriminator followed by the event's fields in a fixed layout:
//! integers little-endian, byte arrays raw, optional fields prefixed by
//! a single presence byte (1 = present).
//!
//! The schema registry below is the single source of truth for that
//! layout. Decoding walks a cursor over the payload; encoding is the
//! exact inverse and exists so tests can build log fixtures that are
//! byte-identical to what the program emits.

use crate::bytes::{base64_decode, base64_encode};
use crate::{CodecError, Result};

/// Literal marker preceding an embedded payload in a log line.
///
/// This is the ledger runtime's wire format, trailing space included.
pub const PAYLOAD_MARKER: &str = "Program data: ";

/// Length of the schema discriminator prefixed to every record.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Scalar wire types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scalar {
    U8,
    U64,
}

/// Closed set of field layouts understood by the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Scalar(Scalar),
    /// Fixed-length array of the inner scalar. Only `U8` occurs on the
    /// wire (32-byte hashes and public-key-shaped values).
    FixedArray(Scalar, usize),
    /// One presence byte, then the inner value if the byte is 1.
    Optional(&'static FieldType),
}

/// A named, typed field within an event schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
}

/// An event schema: name, discriminator, and ordered field layout.
#[derive(Clone, Copy, Debug)]
pub struct EventSchema {
    pub name: &'static str,
    pub discriminator: [u8; DISCRIMINATOR_LEN],
    pub fields: &'static [FieldDef],
}

const fn field(name: &'static str, ty: FieldType) -> FieldDef {
    FieldDef { name, ty }
}

/// Registry of every event the verifier understands.
///
/// Read-only for the life of the process; safe for unsynchronized
/// concurrent reads. Discriminators are opaque tags assigned by the
/// on-chain program, matched byte-for-byte.
pub static SCHEMAS: [EventSchema; 3] = [
    EventSchema {
        name: RoundPrepared::NAME,
        discriminator: [165, 49, 14, 167, 228, 13, 143, 147],
        fields: &[
            field("version", FieldType::Scalar(Scalar::U8)),
            field("round_id", FieldType::Scalar(Scalar::U64)),
            field("commit_hash", FieldType::FixedArray(Scalar::U8, 32)),
            field("round_profit_cap", FieldType::Scalar(Scalar::U64)),
            field("max_profit_per_bet", FieldType::Scalar(Scalar::U64)),
        ],
    },
    EventSchema {
        name: GameStarted::NAME,
        discriminator: [49, 42, 221, 91, 164, 50, 168, 214],
        fields: &[
            field("version", FieldType::Scalar(Scalar::U8)),
            field("round_id", FieldType::Scalar(Scalar::U64)),
            field("blockhash", FieldType::FixedArray(Scalar::U8, 32)),
        ],
    },
    EventSchema {
        name: RoundFinalized::NAME,
        discriminator: [228, 227, 238, 99, 245, 160, 232, 143],
        fields: &[
            field("version", FieldType::Scalar(Scalar::U8)),
            field("round_id", FieldType::Scalar(Scalar::U64)),
            field("local_secret", FieldType::FixedArray(Scalar::U8, 32)),
            field("crash_point_bps", FieldType::Scalar(Scalar::U64)),
            field("blockhash", FieldType::FixedArray(Scalar::U8, 32)),
        ],
    },
];

/// Look up a schema by name.
pub fn schema(name: &str) -> Option<&'static EventSchema> {
    SCHEMAS.iter().find(|schema| schema.name == name)
}

/// A decoded field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U64(u64),
    Bytes(Vec<u8>),
    /// An optional field whose presence byte was not 1.
    Absent,
}

impl FieldValue {
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Self::U8(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A decoded event: schema name plus fields in declared order.
///
/// Transient by design; callers convert to a typed event or read the
/// fields they need and drop it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEvent {
    pub schema: &'static str,
    fields: Vec<(&'static str, FieldValue)>,
}

impl DecodedEvent {
    pub fn new(schema: &'static str, fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { schema, fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }
}

fn take<'a>(bytes: &'a [u8], cursor: &mut usize, len: usize) -> Result<&'a [u8]> {
    let end = cursor.checked_add(len).ok_or(CodecError::EndOfBuffer)?;
    let slice = bytes.get(*cursor..end).ok_or(CodecError::EndOfBuffer)?;
    *cursor = end;
    Ok(slice)
}

/// Decode one field at the cursor, advancing it by the field's width.
///
/// u64 values are reassembled little-endian into an exact 64-bit
/// integer; chain values routinely exceed 53 bits, so they must never
/// transit a floating type.
pub fn decode_field(ty: &FieldType, bytes: &[u8], cursor: &mut usize) -> Result<FieldValue> {
    match ty {
        FieldType::Scalar(Scalar::U8) => {
            let slice = take(bytes, cursor, 1)?;
            Ok(FieldValue::U8(slice[0]))
        }
        FieldType::Scalar(Scalar::U64) => {
            let slice = take(bytes, cursor, 8)?;
            let mut value = 0u64;
            for (i, byte) in slice.iter().enumerate() {
                value |= (*byte as u64) << (8 * i);
            }
            Ok(FieldValue::U64(value))
        }
        FieldType::FixedArray(Scalar::U8, len) => {
            let slice = take(bytes, cursor, *len)?;
            Ok(FieldValue::Bytes(slice.to_vec()))
        }
        FieldType::FixedArray(..) => Err(CodecError::UnsupportedFieldType),
        FieldType::Optional(inner) => {
            let flag = take(bytes, cursor, 1)?[0];
            if flag == 1 {
                decode_field(inner, bytes, cursor)
            } else {
                Ok(FieldValue::Absent)
            }
        }
    }
}

/// Decode a record against a schema, starting at cursor 0.
///
/// The caller must already have stripped the discriminator prefix.
/// Trailing bytes beyond the declared fields are ignored.
pub fn decode_record(schema: &EventSchema, bytes: &[u8]) -> Result<DecodedEvent> {
    let mut cursor = 0;
    let mut fields = Vec::with_capacity(schema.fields.len());
    for def in schema.fields {
        let value = decode_field(&def.ty, bytes, &mut cursor)?;
        fields.push((def.name, value));
    }
    Ok(DecodedEvent::new(schema.name, fields))
}

/// True iff `bytes` starts with the schema's discriminator.
pub fn match_discriminator(bytes: &[u8], schema: &EventSchema) -> bool {
    bytes.len() >= DISCRIMINATOR_LEN && bytes[..DISCRIMINATOR_LEN] == schema.discriminator
}

/// Try every registered schema in order; decode the first match.
///
/// `Ok(None)` means no discriminator matched, which is the expected
/// outcome for unrelated log payloads and is not an error. `Err` means
/// a discriminator matched but the remaining bytes were malformed.
pub fn decode_event_from_bytes(bytes: &[u8]) -> Result<Option<DecodedEvent>> {
    for schema in &SCHEMAS {
        if !match_discriminator(bytes, schema) {
            continue;
        }
        return decode_record(schema, &bytes[DISCRIMINATOR_LEN..]).map(Some);
    }
    Ok(None)
}

/// Extract the base64 payload from a log line, if it carries one.
///
/// A line carries a payload iff it contains [`PAYLOAD_MARKER`]; the
/// payload is everything after the marker, trimmed.
pub fn extract_base64_payload(line: &str) -> Option<&str> {
    let start = line.find(PAYLOAD_MARKER)? + PAYLOAD_MARKER.len();
    Some(line[start..].trim())
}

/// Scan log lines for decodable events, in log order.
///
/// Lazy and one-shot. Lines without a payload marker, payloads that are
/// not valid base64, unknown discriminators, and truncated records are
/// all skipped silently so unrelated log noise never aborts a scan.
/// Duplicates are preserved; callers wanting "first of kind" select
/// explicitly (see [`find_event`]).
pub fn decode_events_from_logs<I>(logs: I) -> impl Iterator<Item = DecodedEvent>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    logs.into_iter().filter_map(|line| {
        let payload = extract_base64_payload(line.as_ref())?;
        let bytes = base64_decode(payload).ok()?;
        decode_event_from_bytes(&bytes).ok().flatten()
    })
}

/// First event of the named kind in the logs, if any.
pub fn find_event<I>(logs: I, name: &str) -> Option<DecodedEvent>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    decode_events_from_logs(logs).find(|event| event.schema == name)
}

/// Encode one field value, appending to `out`.
pub fn encode_field(ty: &FieldType, value: &FieldValue, out: &mut Vec<u8>) -> Result<()> {
    match ty {
        FieldType::Scalar(Scalar::U8) => match value {
            FieldValue::U8(v) => {
                out.push(*v);
                Ok(())
            }
            _ => Err(CodecError::ValueMismatch),
        },
        FieldType::Scalar(Scalar::U64) => match value {
            FieldValue::U64(v) => {
                out.extend_from_slice(&v.to_le_bytes());
                Ok(())
            }
            _ => Err(CodecError::ValueMismatch),
        },
        FieldType::FixedArray(Scalar::U8, len) => match value {
            FieldValue::Bytes(bytes) => {
                if bytes.len() != *len {
                    return Err(CodecError::ArrayLength {
                        expected: *len,
                        got: bytes.len(),
                    });
                }
                out.extend_from_slice(bytes);
                Ok(())
            }
            _ => Err(CodecError::ValueMismatch),
        },
        FieldType::FixedArray(..) => Err(CodecError::UnsupportedFieldType),
        FieldType::Optional(inner) => match value {
            FieldValue::Absent => {
                out.push(0);
                Ok(())
            }
            present => {
                out.push(1);
                encode_field(inner, present, out)
            }
        },
    }
}

/// Encode a record's fields per the schema layout (no discriminator).
pub fn encode_record(schema: &EventSchema, event: &DecodedEvent) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for def in schema.fields {
        let value = event
            .get(def.name)
            .ok_or(CodecError::MissingField(def.name))?;
        encode_field(&def.ty, value, &mut out)?;
    }
    Ok(out)
}

/// Build a full log line for an event: marker + base64(discriminator ‖ fields).
pub fn encode_event_log(event: &DecodedEvent) -> Result<String> {
    let schema =
        schema(event.schema).ok_or_else(|| CodecError::UnknownSchema(event.schema.to_string()))?;
    let mut bytes = schema.discriminator.to_vec();
    bytes.extend_from_slice(&encode_record(schema, event)?);
    Ok(format!("{PAYLOAD_MARKER}{}", base64_encode(&bytes)))
}

/// The secret commitment published before betting opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundPrepared {
    pub version: u8,
    pub round_id: u64,
    /// SHA-256 of the round secret; checked once the secret is revealed.
    pub commit_hash: [u8; 32],
    pub round_profit_cap: u64,
    pub max_profit_per_bet: u64,
}

/// The moment public randomness becomes fixed for a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStarted {
    pub version: u8,
    pub round_id: u64,
    /// The public random value.
    pub blockhash: [u8; 32],
}

/// The reveal that lets anyone recompute and verify the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundFinalized {
    pub version: u8,
    pub round_id: u64,
    pub local_secret: [u8; 32],
    /// Basis points; 10000 = 1.00x.
    pub crash_point_bps: u64,
    pub blockhash: [u8; 32],
}

fn bytes32(event: &DecodedEvent, name: &str) -> Option<[u8; 32]> {
    event.get(name)?.as_bytes()?.try_into().ok()
}

impl RoundPrepared {
    pub const NAME: &'static str = "RoundPrepared";

    pub fn from_event(event: &DecodedEvent) -> Option<Self> {
        if event.schema != Self::NAME {
            return None;
        }
        Some(Self {
            version: event.get("version")?.as_u8()?,
            round_id: event.get("round_id")?.as_u64()?,
            commit_hash: bytes32(event, "commit_hash")?,
            round_profit_cap: event.get("round_profit_cap")?.as_u64()?,
            max_profit_per_bet: event.get("max_profit_per_bet")?.as_u64()?,
        })
    }

    pub fn from_logs<I>(logs: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_event(&find_event(logs, Self::NAME)?)
    }

    pub fn to_event(&self) -> DecodedEvent {
        DecodedEvent::new(
            Self::NAME,
            vec![
                ("version", FieldValue::U8(self.version)),
                ("round_id", FieldValue::U64(self.round_id)),
                ("commit_hash", FieldValue::Bytes(self.commit_hash.to_vec())),
                ("round_profit_cap", FieldValue::U64(self.round_profit_cap)),
                (
                    "max_profit_per_bet",
                    FieldValue::U64(self.max_profit_per_bet),
                ),
            ],
        )
    }

    pub fn to_log_line(&self) -> Result<String> {
        encode_event_log(&self.to_event())
    }
}

impl GameStarted {
    pub const NAME: &'static str = "GameStarted";

    pub fn from_event(event: &DecodedEvent) -> Option<Self> {
        if event.schema != Self::NAME {
            return None;
        }
        Some(Self {
            version: event.get("version")?.as_u8()?,
            round_id: event.get("round_id")?.as_u64()?,
            blockhash: bytes32(event, "blockhash")?,
        })
    }

    pub fn from_logs<I>(logs: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_event(&find_event(logs, Self::NAME)?)
    }

    pub fn to_event(&self) -> DecodedEvent {
        DecodedEvent::new(
            Self::NAME,
            vec![
                ("version", FieldValue::U8(self.version)),
                ("round_id", FieldValue::U64(self.round_id)),
                ("blockhash", FieldValue::Bytes(self.blockhash.to_vec())),
            ],
        )
    }

    pub fn to_log_line(&self) -> Result<String> {
        encode_event_log(&self.to_event())
    }
}

impl RoundFinalized {
    pub const NAME: &'static str = "RoundFinalized";

    pub fn from_event(event: &DecodedEvent) -> Option<Self> {
        if event.schema != Self::NAME {
            return None;
        }
        Some(Self {
            version: event.get("version")?.as_u8()?,
            round_id: event.get("round_id")?.as_u64()?,
            local_secret: bytes32(event, "local_secret")?,
            crash_point_bps: event.get("crash_point_bps")?.as_u64()?,
            blockhash: bytes32(event, "blockhash")?,
        })
    }

    pub fn from_logs<I>(logs: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_event(&find_event(logs, Self::NAME)?)
    }

    pub fn to_event(&self) -> DecodedEvent {
        DecodedEvent::new(
            Self::NAME,
            vec![
                ("version", FieldValue::U8(self.version)),
                ("round_id", FieldValue::U64(self.round_id)),
                (
                    "local_secret",
                    FieldValue::Bytes(self.local_secret.to_vec()),
                ),
                ("crash_point_bps", FieldValue::U64(self.crash_point_bps)),
                ("blockhash", FieldValue::Bytes(self.blockhash.to_vec())),
            ],
        )
    }

    pub fn to_log_line(&self) -> Result<String> {
        encode_event_log(&self.to_event())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_prepared() -> RoundPrepared {
        RoundPrepared {
            version: 1,
            round_id: 42,
            commit_hash: [7u8; 32],
            round_profit_cap: 1_000_000,
            max_profit_per_bet: 50_000,
        }
    }

    fn sample_started() -> GameStarted {
        GameStarted {
            version: 1,
            round_id: 42,
            blockhash: [9u8; 32],
        }
    }

    fn sample_finalized() -> RoundFinalized {
        RoundFinalized {
            version: 1,
            round_id: 42,
            local_secret: [3u8; 32],
            crash_point_bps: 24_831,
            blockhash: [9u8; 32],
        }
    }

    #[test]
    fn test_registry_shape() {
        assert_eq!(SCHEMAS.len(), 3);
        assert!(schema(RoundPrepared::NAME).is_some());
        assert!(schema(GameStarted::NAME).is_some());
        assert!(schema(RoundFinalized::NAME).is_some());
        assert!(schema("Unknown").is_none());
    }

    #[test]
    fn test_round_prepared_log_round_trip() {
        let event = sample_prepared();
        let line = event.to_log_line().unwrap();
        assert!(line.starts_with(PAYLOAD_MARKER));
        assert_eq!(RoundPrepared::from_logs([line]).unwrap(), event);
    }

    #[test]
    fn test_game_started_log_round_trip() {
        let event = sample_started();
        let line = event.to_log_line().unwrap();
        assert_eq!(GameStarted::from_logs([line]).unwrap(), event);
    }

    #[test]
    fn test_round_finalized_log_round_trip() {
        let event = sample_finalized();
        let line = event.to_log_line().unwrap();
        assert_eq!(RoundFinalized::from_logs([line]).unwrap(), event);
    }

    #[test]
    fn test_u64_values_above_53_bits_survive() {
        // Values past 2^53 are exactly where float-backed decoders corrupt.
        let mut event = sample_prepared();
        event.round_profit_cap = (1u64 << 53) + 1;
        event.max_profit_per_bet = u64::MAX;
        let line = event.to_log_line().unwrap();
        let decoded = RoundPrepared::from_logs([line]).unwrap();
        assert_eq!(decoded.round_profit_cap, (1u64 << 53) + 1);
        assert_eq!(decoded.max_profit_per_bet, u64::MAX);
    }

    #[test]
    fn test_extract_payload_marker_positions() {
        assert_eq!(
            extract_base64_payload("Program data: QUJD"),
            Some("QUJD")
        );
        // Marker mid-line, payload trimmed.
        assert_eq!(
            extract_base64_payload("prefix Program data: QUJD  "),
            Some("QUJD")
        );
        assert_eq!(extract_base64_payload("Program log: hello"), None);
        // The trailing space is part of the marker.
        assert_eq!(extract_base64_payload("Program data:QUJD"), None);
    }

    #[test]
    fn test_scan_skips_noise_and_preserves_order() {
        let prepared = sample_prepared();
        let finalized = sample_finalized();
        let logs = vec![
            "Program log: Instruction: PrepareRound".to_string(),
            prepared.to_log_line().unwrap(),
            "Program data: !!!not-base64!!!".to_string(),
            // Valid base64, unknown discriminator.
            format!("{PAYLOAD_MARKER}{}", base64_encode(&[0u8; 16])),
            finalized.to_log_line().unwrap(),
        ];
        let events: Vec<_> = decode_events_from_logs(&logs).collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].schema, RoundPrepared::NAME);
        assert_eq!(events[1].schema, RoundFinalized::NAME);
    }

    #[test]
    fn test_scan_preserves_duplicates() {
        let line = sample_started().to_log_line().unwrap();
        let logs = vec![line.clone(), line];
        assert_eq!(decode_events_from_logs(&logs).count(), 2);
    }

    #[test]
    fn test_find_event_takes_first_of_kind() {
        let mut first = sample_started();
        first.round_id = 1;
        let mut second = sample_started();
        second.round_id = 2;
        let logs = vec![
            first.to_log_line().unwrap(),
            second.to_log_line().unwrap(),
        ];
        let found = GameStarted::from_logs(&logs).unwrap();
        assert_eq!(found.round_id, 1);
    }

    #[test]
    fn test_unknown_discriminator_is_none() {
        let bytes = [0xffu8; 24];
        assert_eq!(decode_event_from_bytes(&bytes).unwrap(), None);
    }

    #[test]
    fn test_truncated_record_errors_and_scan_skips_it() {
        let schema = schema(GameStarted::NAME).unwrap();
        let mut bytes = schema.discriminator.to_vec();
        bytes.extend_from_slice(&[1, 2, 3]); // far short of the field layout
        assert_eq!(
            decode_event_from_bytes(&bytes).unwrap_err(),
            CodecError::EndOfBuffer
        );

        let line = format!("{PAYLOAD_MARKER}{}", base64_encode(&bytes));
        assert_eq!(decode_events_from_logs([line]).count(), 0);
    }

    #[test]
    fn test_short_buffer_no_discriminator_match() {
        assert_eq!(decode_event_from_bytes(&[1, 2, 3]).unwrap(), None);
    }

    #[test]
    fn test_encode_rejects_wrong_array_length() {
        let mut out = Vec::new();
        let err = encode_field(
            &FieldType::FixedArray(Scalar::U8, 32),
            &FieldValue::Bytes(vec![0u8; 31]),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CodecError::ArrayLength {
                expected: 32,
                got: 31
            }
        );
    }

    #[test]
    fn test_encode_rejects_mismatched_value() {
        let mut out = Vec::new();
        assert_eq!(
            encode_field(
                &FieldType::Scalar(Scalar::U64),
                &FieldValue::U8(1),
                &mut out
            )
            .unwrap_err(),
            CodecError::ValueMismatch
        );
    }

    // The registry schemas carry no optional fields; the codec still
    // must handle them, so these tests use a local layout.
    const OPTIONAL_U64: FieldType = FieldType::Optional(&FieldType::Scalar(Scalar::U64));

    #[test]
    fn test_optional_present_round_trip() {
        let mut out = Vec::new();
        encode_field(&OPTIONAL_U64, &FieldValue::U64(77), &mut out).unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out[0], 1);

        let mut cursor = 0;
        let value = decode_field(&OPTIONAL_U64, &out, &mut cursor).unwrap();
        assert_eq!(value, FieldValue::U64(77));
        assert_eq!(cursor, 9);
    }

    #[test]
    fn test_optional_absent_round_trip() {
        let mut out = Vec::new();
        encode_field(&OPTIONAL_U64, &FieldValue::Absent, &mut out).unwrap();
        assert_eq!(out, vec![0]);

        let mut cursor = 0;
        let value = decode_field(&OPTIONAL_U64, &out, &mut cursor).unwrap();
        assert_eq!(value, FieldValue::Absent);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_optional_nonstandard_flag_reads_absent() {
        // Any presence byte other than 1 means absent, matching the
        // on-chain encoder's contract.
        let mut cursor = 0;
        let value = decode_field(&OPTIONAL_U64, &[2, 0, 0], &mut cursor).unwrap();
        assert_eq!(value, FieldValue::Absent);
        assert_eq!(cursor, 1);
    }

    proptest! {
        #[test]
        fn prop_round_prepared_round_trips(
            version in any::<u8>(),
            round_id in any::<u64>(),
            commit_hash in proptest::array::uniform32(any::<u8>()),
            round_profit_cap in any::<u64>(),
            max_profit_per_bet in any::<u64>(),
        ) {
            let event = RoundPrepared {
                version,
                round_id,
                commit_hash,
                round_profit_cap,
                max_profit_per_bet,
            };
            let line = event.to_log_line().unwrap();
            prop_assert_eq!(RoundPrepared::from_logs([line]).unwrap(), event);
        }

        #[test]
        fn prop_round_finalized_round_trips(
            version in any::<u8>(),
            round_id in any::<u64>(),
            local_secret in proptest::array::uniform32(any::<u8>()),
            crash_point_bps in any::<u64>(),
            blockhash in proptest::array::uniform32(any::<u8>()),
        ) {
            let event = RoundFinalized {
                version,
                round_id,
                local_secret,
                crash_point_bps,
                blockhash,
            };
            let line = event.to_log_line().unwrap();
            prop_assert_eq!(RoundFinalized::from_logs([line]).unwrap(), event);
        }

        #[test]
        fn prop_decode_record_inverts_encode_record(
            version in any::<u8>(),
            round_id in any::<u64>(),
            blockhash in proptest::array::uniform32(any::<u8>()),
        ) {
            let schema = schema(GameStarted::NAME).unwrap();
            let event = GameStarted { version, round_id, blockhash }.to_event();
            let bytes = encode_record(schema, &event).unwrap();
            prop_assert_eq!(decode_record(schema, &bytes).unwrap(), event);
        }
    }
}
