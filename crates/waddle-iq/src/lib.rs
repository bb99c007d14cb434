//! # waddle-iq
//!
//! Outbound IQ stanza generation for Waddle Social XMPP clients.
//!
//! The crate turns client state (accounts, rooms, avatars, key material,
//! archive queries) into IQ [`Packet`]s ready for a transport to send.
//! Everything is synchronous and side-effect free apart from trace logging.
//!
//! ## Layout
//!
//! - [`element`]: minimal XML element tree, serialized through minidom
//! - [`data_form`]: XEP-0004 forms with a submit-once lifecycle
//! - [`packet`]: IQ packets and inbound requests
//! - [`codec`]: base64, timestamp and timezone formatting
//! - [`xep`]: one encoder module per extension
//! - [`IqGenerator`]: encoders that need the [`ClientIdentity`]

pub mod codec;
pub mod data_form;
pub mod element;
pub mod identity;
pub mod packet;
pub mod pubsub;
pub mod types;
pub mod xep;

mod error;
mod generator;

pub use data_form::{DataForm, Field, SubmittedForm};
pub use element::{Content, Element, NS_CLIENT};
pub use error::{CertificateError, IqError};
pub use generator::IqGenerator;
pub use identity::ClientIdentity;
pub use packet::{IqType, Packet, Request, RequestType, ResponseType};
pub use types::*;
pub use xep::{EncodeWarning, Encoded};
