//! XEP-0054: vcard-temp (legacy avatar retrieval)

use crate::packet::{Packet, RequestType};
use crate::types::Avatar;

/// vCard namespace.
pub const NS_VCARD: &str = "vcard-temp";

/// Fetch the owner's vCard, which carries the legacy avatar photo.
pub fn retrieve_vcard_avatar(avatar: &Avatar) -> Packet {
    let mut packet = Packet::new_request(RequestType::Get);
    if let Some(owner) = &avatar.owner {
        packet.set_to(owner.clone());
    }
    packet.add_child_ns("vCard", NS_VCARD);
    packet
}
