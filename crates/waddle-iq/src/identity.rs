//! Client identity advertised in disco, version and caps responses.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! name = "Waddle"
//! version = "0.1.0"
//! identity_type = "pc"
//! device_brand = "generic"
//! ```

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::IqError;

/// Device brand reported by Chromebooks running the client.
pub const CHROMIUM_BRAND: &str = "chromium";

/// Features the client supports, in advertisement order.
pub const DEFAULT_FEATURES: &[&str] = &[
    "urn:xmpp:jingle:1",
    "urn:xmpp:jingle:apps:file-transfer:3",
    "urn:xmpp:jingle:transports:s5b:1",
    "urn:xmpp:jingle:transports:ibb:1",
    "http://jabber.org/protocol/muc",
    "jabber:x:conference",
    "http://jabber.org/protocol/caps",
    "http://jabber.org/protocol/disco#info",
    "urn:xmpp:avatar:metadata+notify",
    "http://jabber.org/protocol/nick+notify",
    "urn:xmpp:ping",
    "jabber:iq:version",
    "urn:xmpp:time",
    "http://jabber.org/protocol/chatstates",
    "urn:xmpp:receipts",
    "urn:xmpp:chat-markers:0",
    "urn:xmpp:message-correct:0",
    "eu.siacs.conversations.axolotl.devicelist+notify",
];

/// Static description of this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientIdentity {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// disco identity type under category `client` (e.g. "phone", "pc")
    pub identity_type: String,
    /// Platform brand string, used to pick the advertised OS
    pub device_brand: String,
    /// Node used in entity capabilities
    pub caps_node: String,
    /// Supported features, in advertisement order
    pub features: Vec<String>,
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            name: "Waddle".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            identity_type: "phone".into(),
            device_brand: "generic".into(),
            caps_node: "https://waddle.social/client".into(),
            features: DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ClientIdentity {
    /// Parse an identity from TOML.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, IqError> {
        toml::from_str(toml_str).map_err(|e| IqError::InvalidConfig(e.to_string()))
    }

    /// Load an identity from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IqError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let identity = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), name = %identity.name, "Loaded client identity");
        Ok(identity)
    }

    /// Human-readable identity name (`name version`).
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    /// OS label for jabber:iq:version.
    pub fn operating_system(&self) -> &'static str {
        if self.device_brand == CHROMIUM_BRAND {
            "Chrome OS"
        } else {
            "Android"
        }
    }

    /// XEP-0115 verification string hash for this identity and feature set.
    pub fn caps_hash(&self) -> String {
        let mut s = String::new();
        s.push_str("client/");
        s.push_str(&self.identity_type);
        s.push_str("//");
        s.push_str(&self.display_name());
        s.push('<');

        let mut features: Vec<_> = self.features.iter().collect();
        features.sort();
        features.dedup();
        for feature in features {
            s.push_str(feature);
            s.push('<');
        }

        let mut hasher = Sha1::new();
        hasher.update(s.as_bytes());
        BASE64.encode(hasher.finalize())
    }
}
