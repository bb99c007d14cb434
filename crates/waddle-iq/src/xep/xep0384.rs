//! XEP-0384: OMEMO Encryption (axolotl PEP nodes)
//!
//! Device lists, key bundles and device verification chains are published
//! to per-account PEP nodes. Bundle and verification nodes are scoped to a
//! device by appending `:<device id>` to the node name.
//!
//! ## XML Format
//!
//! ```xml
//! <item>
//!   <bundle xmlns='eu.siacs.conversations.axolotl'>
//!     <signedPreKeyPublic signedPreKeyId='1'>BASE64</signedPreKeyPublic>
//!     <signedPreKeySignature>BASE64</signedPreKeySignature>
//!     <identityKey>BASE64</identityKey>
//!     <prekeys xmlns='eu.siacs.conversations.axolotl'>
//!       <preKeyPublic preKeyId='1'>BASE64</preKeyPublic>
//!     </prekeys>
//!   </bundle>
//! </item>
//! ```

use std::collections::HashSet;

use jid::Jid;
use tracing::{debug, warn};

use crate::codec::base64_standard;
use crate::element::Element;
use crate::packet::Packet;
use crate::pubsub::{publish, retrieve};
use crate::types::{Certificate, IdentityKey, PreKey, SignedPreKey};
use crate::CertificateError;

/// Namespace of the axolotl payload elements.
pub const PEP_PREFIX: &str = "eu.siacs.conversations.axolotl";

/// Node holding the device list.
pub const PEP_DEVICE_LIST: &str = "eu.siacs.conversations.axolotl.devicelist";

/// Node prefix for per-device key bundles.
pub const PEP_BUNDLES: &str = "eu.siacs.conversations.axolotl.bundles";

/// Node prefix for per-device verification chains.
pub const PEP_VERIFICATION: &str = "eu.siacs.conversations.axolotl.verification";

/// A packet plus the non-fatal problems hit while encoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub packet: Packet,
    pub warnings: Vec<EncodeWarning>,
}

impl Encoded {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Non-fatal encoding problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeWarning {
    /// A certificate was left out of the chain.
    CertificateSkipped {
        /// Position in the input chain
        index: usize,
        reason: CertificateError,
    },
}

fn device_node(prefix: &str, device_id: u32) -> String {
    format!("{prefix}:{device_id}")
}

/// Fetch the device list of `to`, or our own when `to` is `None`.
pub fn retrieve_device_ids(to: Option<&Jid>) -> Packet {
    let mut packet = retrieve(PEP_DEVICE_LIST, None);
    if let Some(to) = to {
        packet.set_to(to.clone());
    }
    packet
}

/// Fetch the key bundle of one of `to`'s devices.
pub fn retrieve_bundles_for_device(to: &Jid, device_id: u32) -> Packet {
    let mut packet = retrieve(&device_node(PEP_BUNDLES, device_id), None);
    packet.set_to(to.clone());
    packet
}

/// Fetch the verification chain of one of `to`'s devices.
pub fn retrieve_verification_for_device(to: &Jid, device_id: u32) -> Packet {
    let mut packet = retrieve(&device_node(PEP_VERIFICATION, device_id), None);
    packet.set_to(to.clone());
    packet
}

/// Publish our device list; devices appear in iteration order.
///
/// The list is a set: a repeated id keeps its first position only.
pub fn publish_device_ids<I>(ids: I) -> Packet
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = HashSet::new();
    let mut item = Element::new("item");
    let list = item.add_child_ns("list", PEP_PREFIX);
    for id in ids.into_iter().filter(|id| seen.insert(*id)) {
        list.add_child("device").set_attribute("id", id);
    }
    publish(PEP_DEVICE_LIST, item)
}

/// Publish the key bundle for `device_id`.
pub fn publish_bundles(
    signed_pre_key: &SignedPreKey,
    identity_key: &IdentityKey,
    pre_keys: &[PreKey],
    device_id: u32,
) -> Packet {
    let mut item = Element::new("item");
    let bundle = item.add_child_ns("bundle", PEP_PREFIX);
    bundle
        .add_child("signedPreKeyPublic")
        .set_attribute("signedPreKeyId", signed_pre_key.id)
        .set_content(base64_standard(&signed_pre_key.public_key));
    bundle
        .add_child("signedPreKeySignature")
        .set_content(base64_standard(&signed_pre_key.signature));
    bundle
        .add_child("identityKey")
        .set_content(base64_standard(&identity_key.0));

    let prekeys = bundle.add_child_ns("prekeys", PEP_PREFIX);
    for pre_key in pre_keys {
        prekeys
            .add_child("preKeyPublic")
            .set_attribute("preKeyId", pre_key.id)
            .set_content(base64_standard(&pre_key.public_key));
    }

    debug!(device_id, pre_keys = pre_keys.len(), "Built OMEMO bundle");
    publish(&device_node(PEP_BUNDLES, device_id), item)
}

/// Publish a device verification (certificate chain plus signature).
///
/// A certificate that fails to encode is left out and reported as a
/// warning; the signature is appended regardless.
pub fn publish_verification<C: Certificate>(signature: &[u8], certificates: &[C], device_id: u32) -> Encoded {
    let mut warnings = Vec::new();
    let mut item = Element::new("item");
    let verification = item.add_child_ns("verification", PEP_PREFIX);

    let chain = verification.add_child("chain");
    for (index, certificate) in certificates.iter().enumerate() {
        match certificate.encoded() {
            Ok(der) => {
                chain
                    .add_child("certificate")
                    .set_attribute("index", index)
                    .set_content(base64_standard(&der));
            }
            Err(reason) => {
                warn!(index, device_id, error = %reason, "Skipping certificate in verification chain");
                warnings.push(EncodeWarning::CertificateSkipped { index, reason });
            }
        }
    }
    verification
        .add_child("signature")
        .set_content(base64_standard(signature));

    Encoded {
        packet: publish(&device_node(PEP_VERIFICATION, device_id), item),
        warnings,
    }
}
