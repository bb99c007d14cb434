//! XEP-0313: Message Archive Management
//!
//! Builds archive queries with a submitted filter form and Result Set
//! Management (XEP-0059) paging.
//!
//! ```xml
//! <iq type='set'>
//!   <query xmlns='urn:xmpp:mam:1' queryid='f27'>
//!     <x xmlns='jabber:x:data' type='submit'>
//!       <field var='FORM_TYPE' type='hidden'><value>urn:xmpp:mam:1</value></field>
//!       <field var='with'><value>juliet@capulet.lit</value></field>
//!       <field var='start'><value>2010-06-07T00:00:00.000Z</value></field>
//!     </x>
//!     <set xmlns='http://jabber.org/protocol/rsm'><before/></set>
//!   </query>
//! </iq>
//! ```

use tracing::debug;

use crate::codec::timestamp;
use crate::data_form::DataForm;
use crate::packet::{Packet, RequestType};
use crate::types::{MamQuery, PagingOrder};

/// MAM namespace.
pub const NS_MAM: &str = "urn:xmpp:mam:1";

/// Legacy MAM namespace, for servers that only speak the older revision.
pub const NS_MAM_LEGACY: &str = "urn:xmpp:mam:0";

/// Result Set Management namespace (XEP-0059).
pub const NS_RSM: &str = "http://jabber.org/protocol/rsm";

/// Build an archive query.
///
/// Room archives are addressed with `to` and never carry a `with` filter.
/// Reverse paging always attaches `<before/>`; an empty reference asks for
/// the last page.
pub fn query_message_archive_management(mam: &MamQuery) -> Packet {
    let ns = if mam.legacy { NS_MAM_LEGACY } else { NS_MAM };
    let mut packet = Packet::new_request(RequestType::Set);

    let mut form = DataForm::with_form_type(ns);
    if mam.muc {
        if let Some(room) = &mam.with {
            packet.set_to(room.clone());
        }
    } else if let Some(with) = &mam.with {
        form.put("with", with.to_string());
    }
    if let Some(start) = mam.start {
        form.put("start", timestamp(start));
    }
    if let Some(end) = mam.end {
        form.put("end", timestamp(end));
    }
    let form = form.submit();

    let query = packet.query(ns);
    query.set_attribute("queryid", &mam.query_id);
    query.append(form.into());
    match (mam.paging_order, &mam.reference) {
        (PagingOrder::Reverse, reference) => {
            query
                .add_child_ns("set", NS_RSM)
                .add_child("before")
                .set_content(reference.clone().unwrap_or_default());
        }
        (PagingOrder::Normal, Some(reference)) => {
            query
                .add_child_ns("set", NS_RSM)
                .add_child("after")
                .set_content(reference.as_str());
        }
        (PagingOrder::Normal, None) => {}
    }

    debug!(
        query_id = %mam.query_id,
        ns = %ns,
        muc = mam.muc,
        paging = ?mam.paging_order,
        "Built MAM query"
    );
    packet
}
