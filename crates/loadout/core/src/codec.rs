//! Shareable identifier codec.
//!
//! An identifier is the URL-safe base64 (no padding) encoding of the compact
//! JSON text of a [`PublicPayload`]:
//!
//! ```text
//! {"v":1,"g":"lol","s":"abc","c":"ahri","r":"MID","ch":0}
//!   -> eyJ2IjoxLCJnIjoibG9sIiwicyI6ImFiYyIsImMiOiJhaHJpIiwiciI6Ik1JRCIsImNoIjowfQ
//! ```
//!
//! Key order and spelling are part of the wire format. The encoding is only
//! compact, not secret or tamper-proof.
//!
//! Decoding is total: any malformed input yields `None`.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// URL-safe alphabet. Encodes without padding; decodes with or without it and
/// tolerates non-zero trailing bits, as browser `atob` does.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Minimal data needed to replay a build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPayload {
    /// Payload schema version. Any JSON number is accepted on decode.
    #[serde(rename = "v")]
    pub version: Number,
    #[serde(rename = "g")]
    pub game_id: String,
    #[serde(rename = "s")]
    pub seed: String,
    #[serde(rename = "c")]
    pub entity_id: String,
    /// Role text as written by the encoder; parsed by the generator.
    #[serde(rename = "r")]
    pub role: String,
    #[serde(rename = "ch", with = "chaos_flag")]
    pub chaos: bool,
}

impl PublicPayload {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn is_current_version(&self) -> bool {
        self.version.as_f64() == Some(f64::from(Self::CURRENT_VERSION))
    }
}

/// Encodes a payload into a shareable identifier.
pub fn encode_identifier(payload: &PublicPayload) -> String {
    let json = serde_json::to_string(payload)
        .expect("payload of strings, a JSON number and a 0/1 flag always serializes");
    URL_SAFE_LENIENT.encode(json.as_bytes())
}

/// Decodes a shareable identifier, returning `None` for anything malformed.
///
/// Surrounding whitespace is ignored and the standard base64 characters
/// `+` and `/` are accepted in place of `-` and `_`.
pub fn decode_identifier(identifier: &str) -> Option<PublicPayload> {
    let normalized: String = identifier
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_LENIENT.decode(normalized.as_bytes()).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    match serde_json::from_str::<PublicPayload>(&json) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!("rejected identifier payload: {}", e);
            None
        }
    }
}

/// Chaos travels as the number `0` or `1`; `1.0` and `0.0` are read too.
mod chaos_flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(chaos: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*chaos))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let flag = f64::deserialize(deserializer)?;
        if flag == 0.0 {
            Ok(false)
        } else if flag == 1.0 {
            Ok(true)
        } else {
            Err(D::Error::custom(format!("chaos flag must be 0 or 1, got {flag}")))
        }
    }
}
