//! Shared PEP envelopes (XEP-0060 publish and items retrieval).
//!
//! Every PEP-style encoder goes through these two helpers so the pubsub
//! shape stays identical across extensions.

use tracing::debug;

use crate::element::Element;
use crate::packet::{Packet, RequestType};

/// PubSub namespace (XEP-0060).
pub const NS_PUBSUB: &str = "http://jabber.org/protocol/pubsub";

/// Publish options form type (XEP-0060 §7.1.5).
pub const NS_PUBSUB_PUBLISH_OPTIONS: &str = "http://jabber.org/protocol/pubsub#publish-options";

/// `<pubsub><publish node='..'>item</publish></pubsub>` in an IQ set.
pub(crate) fn publish(node: &str, item: Element) -> Packet {
    let mut packet = Packet::new_request(RequestType::Set);
    let publish = packet.add_child_ns("pubsub", NS_PUBSUB).add_child("publish");
    publish.set_attribute("node", node);
    publish.append(item);
    debug!(node = %node, "Built pubsub publish");
    packet
}

/// `<pubsub><items node='..'>[item]</items></pubsub>` in an IQ get.
pub(crate) fn retrieve(node: &str, item: Option<Element>) -> Packet {
    let mut packet = Packet::new_request(RequestType::Get);
    let items = packet.add_child_ns("pubsub", NS_PUBSUB).add_child("items");
    items.set_attribute("node", node);
    if let Some(item) = item {
        items.append(item);
    }
    debug!(node = %node, "Built pubsub items request");
    packet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::IqType;

    #[test]
    fn test_publish_envelope() {
        let mut item = Element::new("item");
        item.set_attribute("id", "current");
        let packet = publish("urn:xmpp:test", item);

        assert_eq!(packet.iq_type(), IqType::Set);
        let pubsub = packet.payload().unwrap();
        assert!(pubsub.is("pubsub", NS_PUBSUB));
        let publish = pubsub.find_child("publish").unwrap();
        assert_eq!(publish.attribute("node"), Some("urn:xmpp:test"));
        assert_eq!(publish.children()[0].attribute("id"), Some("current"));
    }

    #[test]
    fn test_retrieve_without_item() {
        let packet = retrieve("urn:xmpp:test", None);

        assert_eq!(packet.iq_type(), IqType::Get);
        let items = packet.payload().unwrap().find_child("items").unwrap();
        assert_eq!(items.attribute("node"), Some("urn:xmpp:test"));
        assert!(items.children().is_empty());
    }
}
