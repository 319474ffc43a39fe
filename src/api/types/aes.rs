//! AES key types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::null_as_empty;

/// Key for a dynamically loaded pak file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicKey {
    pub pak_filename: String,
    pub pak_guid: String,
    pub key: String,
}

/// Response for GET /v2/aes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aes {
    /// Main encryption key, in the requested key format
    pub main_key: String,
    /// Build string, e.g. `++Fortnite+Release-30.10-CL-34033419`
    pub build: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dynamic_keys: Vec<DynamicKey>,
    pub updated: DateTime<Utc>,
}

impl Aes {
    /// Game version (`NN.NN`) embedded in the build string.
    pub fn version(&self) -> Option<&str> {
        let bytes = self.build.as_bytes();
        bytes
            .windows(5)
            .position(|w| {
                w[0].is_ascii_digit()
                    && w[1].is_ascii_digit()
                    && w[2] == b'.'
                    && w[3].is_ascii_digit()
                    && w[4].is_ascii_digit()
            })
            .map(|start| &self.build[start..start + 5])
    }

    /// Look up the dynamic key for a pak GUID.
    pub fn dynamic_key(&self, pak_guid: &str) -> Option<&DynamicKey> {
        self.dynamic_keys.iter().find(|k| k.pak_guid == pak_guid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aes(build: &str) -> Aes {
        Aes {
            main_key: "0x00".to_string(),
            build: build.to_string(),
            dynamic_keys: Vec::new(),
            updated: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
        }
    }

    #[test]
    fn test_version_from_build() {
        assert_eq!(
            aes("++Fortnite+Release-30.10-CL-34033419-Windows").version(),
            Some("30.10")
        );
        assert_eq!(aes("++Fortnite+Main").version(), None);
        assert_eq!(aes("").version(), None);
    }
}
