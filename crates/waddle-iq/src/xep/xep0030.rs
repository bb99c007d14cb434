//! XEP-0030: Service Discovery (disco#info responses)
//!
//! ```xml
//! <iq type='result' id='disco1' to='romeo@montague.lit/orchard'>
//!   <query xmlns='http://jabber.org/protocol/disco#info' node='...'>
//!     <identity category='client' type='phone' name='Waddle 0.1.0'/>
//!     <feature var='http://jabber.org/protocol/disco#info'/>
//!   </query>
//! </iq>
//! ```

use tracing::debug;

use crate::identity::ClientIdentity;
use crate::packet::{Packet, Request, ResponseType};

/// Service Discovery info namespace.
pub const NS_DISCO_INFO: &str = "http://jabber.org/protocol/disco#info";

/// Answer a disco#info request with our identity and features.
///
/// The requested `node` is echoed verbatim; features keep the configured order.
pub fn disco_response(request: &Request, identity: &ClientIdentity) -> Packet {
    let node = request
        .packet()
        .children()
        .iter()
        .find(|child| child.name() == "query")
        .and_then(|query| query.attribute("node"));

    let mut packet = request.generate_response(ResponseType::Result);
    let query = packet.add_child_ns("query", NS_DISCO_INFO);
    query.set_optional_attribute("node", node);
    query
        .add_child("identity")
        .set_attribute("category", "client")
        .set_attribute("type", &identity.identity_type)
        .set_attribute("name", identity.display_name());
    for feature in &identity.features {
        query.add_child("feature").set_attribute("var", feature);
    }

    debug!(id = %request.id(), node = ?node, features = identity.features.len(), "Built disco#info response");
    packet
}
