//! Versioned JSON envelope around `SaveData`

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::progress::SaveData;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    data: SaveData,
}

/// Serialize `data` into an envelope
pub fn encode(data: &SaveData) -> anyhow::Result<String> {
    let envelope = Envelope {
        version: SAVE_VERSION,
        data: data.clone(),
    };
    serde_json::to_string(&envelope).context("failed to serialize save")
}

/// Parse an envelope; other versions are rejected
pub fn decode(json: &str) -> anyhow::Result<SaveData> {
    let envelope: Envelope = serde_json::from_str(json).context("corrupt save envelope")?;
    if envelope.version != SAVE_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            envelope.version,
            SAVE_VERSION
        );
    }
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::RunStats;

    #[test]
    fn test_envelope_carries_data() {
        let mut data = SaveData::default();
        data.progress.record_run(
            &RunStats {
                hits: 3,
                precision_sum: 2.4,
                destroyed: 3,
                elapsed: 12.0,
                clear_time: Some(12.0),
            },
            1.0,
        );
        let json = encode(&data).unwrap();
        assert!(json.contains("\"version\":1"));
        assert_eq!(decode(&json).unwrap(), data);
    }

    #[test]
    fn test_rejects_other_versions() {
        let err = decode(r#"{ "version": 99, "data": {} }"#).unwrap_err();
        assert!(err.to_string().contains("unsupported save version 99"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(decode("not json").is_err());
    }
}
