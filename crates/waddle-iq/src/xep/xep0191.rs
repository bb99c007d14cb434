//! XEP-0191: Blocking Command
//!
//! ```xml
//! <iq type='set'>
//!   <block xmlns='urn:xmpp:blocking'>
//!     <item jid='romeo@montague.net'>
//!       <report xmlns='urn:xmpp:reporting:0'><spam/></report>
//!     </item>
//!   </block>
//! </iq>
//! ```
//!
//! Spam reports follow XEP-0377.

use jid::Jid;
use tracing::debug;

use crate::packet::{Packet, RequestType};

/// Namespace for XEP-0191 Blocking Command.
pub const NS_BLOCKING: &str = "urn:xmpp:blocking";

/// Namespace for XEP-0377 Spam Reporting.
pub const NS_REPORTING: &str = "urn:xmpp:reporting:0";

/// Request the current blocklist.
pub fn generate_get_block_list() -> Packet {
    let mut packet = Packet::new_request(RequestType::Get);
    packet.add_child_ns("blocklist", NS_BLOCKING);
    packet
}

/// Block the bare form of `jid`, optionally reporting it as spam.
pub fn generate_set_block_request(jid: &Jid, report_spam: bool) -> Packet {
    let bare = jid.to_bare().to_string();
    let mut packet = Packet::new_request(RequestType::Set);
    let item = packet.add_child_ns("block", NS_BLOCKING).add_child("item");
    item.set_attribute("jid", &bare);
    if report_spam {
        item.add_child_ns("report", NS_REPORTING).add_child("spam");
    }
    debug!(jid = %bare, report_spam, "Built block request");
    packet
}

/// Unblock the bare form of `jid`.
pub fn generate_set_unblock_request(jid: &Jid) -> Packet {
    let mut packet = Packet::new_request(RequestType::Set);
    packet
        .add_child_ns("unblock", NS_BLOCKING)
        .add_child("item")
        .set_attribute("jid", jid.to_bare());
    packet
}
