//! XEP-0115: Entity Capabilities
//!
//! The `<c/>` element advertises our disco#info hash in presence.

use crate::element::Element;
use crate::identity::ClientIdentity;

/// XEP-0115 Entity Capabilities namespace.
pub const NS_CAPS: &str = "http://jabber.org/protocol/caps";

/// Build the `<c>` element for inclusion in presence stanzas.
pub fn caps_element(identity: &ClientIdentity) -> Element {
    let mut c = Element::with_namespace("c", NS_CAPS);
    c.set_attribute("hash", "sha-1")
        .set_attribute("node", &identity.caps_node)
        .set_attribute("ver", identity.caps_hash());
    c
}
