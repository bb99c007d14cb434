//! XEP-0092: Software Version

use crate::identity::ClientIdentity;
use crate::packet::{Packet, Request, ResponseType};

/// Software version namespace.
pub const NS_VERSION: &str = "jabber:iq:version";

/// Answer a jabber:iq:version request.
pub fn version_response(request: &Request, identity: &ClientIdentity) -> Packet {
    let mut packet = request.generate_response(ResponseType::Result);
    let query = packet.query(NS_VERSION);
    query.add_child("name").set_content(identity.name.as_str());
    query.add_child("version").set_content(identity.version.as_str());
    query.add_child("os").set_content(identity.operating_system());
    packet
}
