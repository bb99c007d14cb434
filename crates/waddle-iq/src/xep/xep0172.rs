//! XEP-0172: User Nickname

use crate::element::Element;
use crate::packet::Packet;
use crate::pubsub::publish;

/// User nickname namespace (also the PEP node name).
pub const NS_NICK: &str = "http://jabber.org/protocol/nick";

/// Publish our nickname to PEP.
pub fn publish_nick(nick: &str) -> Packet {
    let mut item = Element::new("item");
    item.add_child_ns("nick", NS_NICK).set_content(nick);
    publish(NS_NICK, item)
}
