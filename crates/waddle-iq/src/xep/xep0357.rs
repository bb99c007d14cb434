//! XEP-0357: Push Notifications
//!
//! Registration with the app server goes through an ad-hoc command
//! (XEP-0050); the resulting node and secret are then enabled on our server.

use jid::Jid;

use crate::data_form::DataForm;
use crate::packet::{Packet, RequestType};
use crate::pubsub::NS_PUBSUB_PUBLISH_OPTIONS;

/// Namespace for XEP-0357 Push Notifications.
pub const NS_PUSH: &str = "urn:xmpp:push:0";

/// Namespace for XEP-0050 Ad-Hoc Commands.
pub const NS_COMMANDS: &str = "http://jabber.org/protocol/commands";

/// Command node of the app server's registration command.
pub const PUSH_REGISTER_NODE: &str = "register-push-gcm";

/// Register a device token with the push app server.
pub fn push_token_to_app_server(app_server: &Jid, token: &str, device_id: &str) -> Packet {
    let mut form = DataForm::new();
    form.put("token", token).put("device-id", device_id);

    let mut packet = Packet::new_request(RequestType::Set);
    packet.set_to(app_server.clone());
    packet
        .add_child_ns("command", NS_COMMANDS)
        .set_attribute("node", PUSH_REGISTER_NODE)
        .set_attribute("action", "execute")
        .append(form.submit().into());
    packet
}

/// Enable push for `node` on the app server `jid`.
pub fn enable_push(jid: &Jid, node: &str, secret: &str) -> Packet {
    let mut form = DataForm::with_form_type(NS_PUBSUB_PUBLISH_OPTIONS);
    form.put("secret", secret);

    let mut packet = Packet::new_request(RequestType::Set);
    packet
        .add_child_ns("enable", NS_PUSH)
        .set_attribute("jid", jid)
        .set_attribute("node", node)
        .append(form.submit().into());
    packet
}
