//! XEP-0045: Multi-User Chat administration
//!
//! Affiliation and role changes (§9, §10, `muc#admin`) and room
//! configuration (§10.2, `muc#owner`).
//!
//! Affiliations address users by JID; roles address occupants by nickname.

use jid::Jid;
use tracing::debug;

use crate::data_form::DataForm;
use crate::packet::{Packet, RequestType};
use crate::types::{Affiliation, Conference, Role};

/// Namespace for MUC admin protocol.
pub const NS_MUC_ADMIN: &str = "http://jabber.org/protocol/muc#admin";

/// Namespace for MUC owner protocol.
pub const NS_MUC_OWNER: &str = "http://jabber.org/protocol/muc#owner";

/// Form type of room configuration forms.
pub const NS_MUC_ROOMCONFIG: &str = "http://jabber.org/protocol/muc#roomconfig";

/// Options for a private, members-only, persistent room.
pub fn default_room_configuration() -> Vec<(&'static str, &'static str)> {
    vec![
        ("muc#roomconfig_persistentroom", "1"),
        ("muc#roomconfig_membersonly", "1"),
        ("muc#roomconfig_publicroom", "0"),
        ("muc#roomconfig_whois", "anyone"),
    ]
}

fn admin_set(conference: &Conference) -> Packet {
    let mut packet = Packet::new_request(RequestType::Set);
    packet
        .set_to(conference.room())
        .set_from(conference.account.jid.clone());
    packet
}

/// Set the affiliation of a single user.
pub fn change_affiliation(conference: &Conference, jid: &Jid, affiliation: Affiliation) -> Packet {
    change_affiliations(conference, std::slice::from_ref(jid), affiliation)
}

/// Set the same affiliation for several users, one item each, in order.
pub fn change_affiliations(conference: &Conference, jids: &[Jid], affiliation: Affiliation) -> Packet {
    let mut packet = admin_set(conference);
    let query = packet.query(NS_MUC_ADMIN);
    for jid in jids {
        query
            .add_child("item")
            .set_attribute("jid", jid)
            .set_attribute("affiliation", affiliation);
    }
    debug!(room = %conference.room(), count = jids.len(), affiliation = %affiliation, "Built affiliation change");
    packet
}

/// Change the role of the occupant using `nick`.
pub fn change_role(conference: &Conference, nick: &str, role: Role) -> Packet {
    let mut packet = admin_set(conference);
    packet
        .query(NS_MUC_ADMIN)
        .add_child("item")
        .set_attribute("nick", nick)
        .set_attribute("role", role);
    packet
}

/// List the users holding `affiliation` in the room.
pub fn query_affiliation(conference: &Conference, affiliation: Affiliation) -> Packet {
    let mut packet = Packet::new_request(RequestType::Get);
    packet.set_to(conference.room());
    packet
        .query(NS_MUC_ADMIN)
        .add_child("item")
        .set_attribute("affiliation", affiliation);
    packet
}

/// Submit a room configuration form.
pub fn configure_room<I, K, V>(conference: &Conference, options: I) -> Packet
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut form = DataForm::with_form_type(NS_MUC_ROOMCONFIG);
    for (var, value) in options {
        form.put(var.as_ref(), value);
    }

    let mut packet = Packet::new_request(RequestType::Set);
    packet.set_to(conference.room());
    packet.query(NS_MUC_OWNER).append(form.submit().into());
    packet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_form::NS_DATA_FORMS;
    use crate::types::Account;

    fn conference() -> Conference {
        let account = Account::new("crone1@shakespeare.lit/desktop".parse::<Jid>().unwrap());
        Conference::new("coven@chat.shakespeare.lit/firstwitch".parse::<Jid>().unwrap(), account)
    }

    #[test]
    fn test_single_affiliation_delegates_to_batch() {
        let jid: Jid = "hag66@shakespeare.lit".parse().unwrap();
        let single = change_affiliation(&conference(), &jid, Affiliation::Outcast);
        let batch = change_affiliations(&conference(), &[jid], Affiliation::Outcast);
        assert_eq!(single, batch);
    }

    #[test]
    fn test_admin_set_addressing() {
        let packet = change_role(&conference(), "pistol", Role::None);
        assert_eq!(packet.to().map(|j| j.to_string()), Some("coven@chat.shakespeare.lit".to_string()));
        assert_eq!(packet.from().map(|j| j.to_string()), Some("crone1@shakespeare.lit/desktop".to_string()));

        let item = packet.payload().unwrap().find_child("item").unwrap();
        assert_eq!(item.attribute("nick"), Some("pistol"));
        assert_eq!(item.attribute("role"), Some("none"));
        assert_eq!(item.attribute("jid"), None);
    }

    #[test]
    fn test_query_affiliation_is_filter_only() {
        let packet = query_affiliation(&conference(), Affiliation::Member);
        assert!(packet.from().is_none());
        let query = packet.payload().unwrap();
        assert!(query.is("query", NS_MUC_ADMIN));
        let item = query.find_child("item").unwrap();
        assert_eq!(item.attributes().collect::<Vec<_>>(), [("affiliation", "member")]);
    }

    #[test]
    fn test_configure_room_with_defaults() {
        let packet = configure_room(&conference(), default_room_configuration());
        let query = packet.payload().unwrap();
        assert!(query.is("query", NS_MUC_OWNER));

        let x = query.find_child_ns("x", NS_DATA_FORMS).unwrap();
        assert_eq!(x.attribute("type"), Some("submit"));
        // FORM_TYPE plus the four defaults
        assert_eq!(x.children().len(), 5);
        let whois = x
            .children()
            .iter()
            .find(|f| f.attribute("var") == Some("muc#roomconfig_whois"))
            .unwrap();
        assert_eq!(whois.find_child("value").unwrap().text(), Some("anyone"));
    }
}
