//! Value objects consumed by the encoders.
//!
//! These are read-only views of state owned elsewhere (accounts, rooms,
//! cryptographic stores). Contents are never validated here.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use jid::{BareJid, Jid};
use serde::{Deserialize, Serialize};

use crate::CertificateError;

/// A local account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account JID (bare or with the bound resource)
    pub jid: Jid,
}

impl Account {
    pub fn new(jid: impl Into<Jid>) -> Self {
        Self { jid: jid.into() }
    }

    /// The account's server as a domain-only JID.
    pub fn server(&self) -> Jid {
        BareJid::from_parts(None, self.jid.domain()).into()
    }

    pub fn bare_jid(&self) -> BareJid {
        self.jid.to_bare()
    }

    /// Username (local part), empty for domain-only JIDs.
    pub fn username(&self) -> String {
        self.jid.node().map(|node| node.to_string()).unwrap_or_default()
    }
}

/// A group chat joined from a local account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    /// Room JID (may include our occupant nick)
    pub jid: Jid,
    /// Account acting in the room
    pub account: Account,
}

impl Conference {
    pub fn new(jid: impl Into<Jid>, account: Account) -> Self {
        Self {
            jid: jid.into(),
            account,
        }
    }

    pub fn room(&self) -> BareJid {
        self.jid.to_bare()
    }
}

/// Avatar image and metadata as published over PEP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// SHA-1 of the image (hex), used as the PEP item id
    pub sha1sum: String,
    /// Base64-encoded image data
    pub image: String,
    /// Image size in bytes
    pub size: u64,
    /// Height in pixels
    pub height: u32,
    /// Width in pixels
    pub width: u32,
    /// MIME type
    pub mime_type: String,
    /// Entity that owns the avatar
    pub owner: Option<Jid>,
}

/// A file about to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub expected_size: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, expected_size: u64) -> Self {
        Self {
            name: name.into(),
            expected_size,
        }
    }
}

/// MUC room affiliation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    /// Banned from the room
    Outcast,
    /// No affiliation
    None,
    /// Room member
    Member,
    /// Room administrator
    Admin,
    /// Room owner
    Owner,
}

impl Affiliation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Affiliation::Outcast => "outcast",
            Affiliation::None => "none",
            Affiliation::Member => "member",
            Affiliation::Admin => "admin",
            Affiliation::Owner => "owner",
        }
    }
}

impl std::fmt::Display for Affiliation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Affiliation {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "outcast" => Ok(Affiliation::Outcast),
            "none" => Ok(Affiliation::None),
            "member" => Ok(Affiliation::Member),
            "admin" => Ok(Affiliation::Admin),
            "owner" => Ok(Affiliation::Owner),
            other => Err(format!("unknown affiliation '{other}'")),
        }
    }
}

/// MUC room role (session-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// No role (not in room)
    None,
    /// Visitor (can read, limited send)
    Visitor,
    /// Participant (normal user)
    Participant,
    /// Moderator (can kick, manage)
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Visitor => "visitor",
            Role::Participant => "participant",
            Role::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Role::None),
            "visitor" => Ok(Role::Visitor),
            "participant" => Ok(Role::Participant),
            "moderator" => Ok(Role::Moderator),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Signed prekey record as serialized by the crypto store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPreKey {
    pub id: u32,
    /// Serialized public key
    pub public_key: Vec<u8>,
    /// Signature over the public key by the identity key
    pub signature: Vec<u8>,
}

/// Serialized long-term identity public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityKey(pub Vec<u8>);

/// One-time prekey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreKey {
    pub id: u32,
    /// Serialized public key
    pub public_key: Vec<u8>,
}

/// A certificate in a device verification chain.
///
/// Encoding may fail (e.g. a malformed certificate from the key store).
pub trait Certificate {
    /// DER encoding of the certificate.
    fn encoded(&self) -> Result<Vec<u8>, CertificateError>;
}

impl Certificate for Vec<u8> {
    fn encoded(&self) -> Result<Vec<u8>, CertificateError> {
        Ok(self.clone())
    }
}

impl Certificate for &[u8] {
    fn encoded(&self) -> Result<Vec<u8>, CertificateError> {
        Ok(self.to_vec())
    }
}

/// Direction for archive paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingOrder {
    /// Oldest first; continue after the reference
    #[default]
    Normal,
    /// Newest first; page before the reference
    Reverse,
}

/// Parameters of one archive query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MamQuery {
    /// Use the legacy archive namespace
    pub legacy: bool,
    /// Peer filter, or the room when `muc` is set
    pub with: Option<Jid>,
    /// Lower time bound
    pub start: Option<DateTime<Utc>>,
    /// Upper time bound
    pub end: Option<DateTime<Utc>>,
    /// Result set cursor from a previous page
    pub reference: Option<String>,
    pub paging_order: PagingOrder,
    /// Echoed by the server on each result message
    pub query_id: String,
    /// The archive belongs to a room addressed by `with`
    pub muc: bool,
}
