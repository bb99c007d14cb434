//! XEP-0077: In-Band Registration
//!
//! Password changes and captcha-gated account creation.

use crate::data_form::SubmittedForm;
use crate::packet::{Packet, RequestType};
use crate::types::Account;

/// Namespace for XEP-0077 In-Band Registration.
pub const NS_REGISTER: &str = "jabber:iq:register";

/// Change the account password on its own server.
pub fn generate_set_password(account: &Account, new_password: &str) -> Packet {
    let mut packet = Packet::new_request(RequestType::Set);
    packet.set_to(account.server());
    let query = packet.add_child_ns("query", NS_REGISTER);
    query.add_child("username").set_content(account.username());
    query.add_child("password").set_content(new_password);
    packet
}

/// Register an account, answering the server's captcha form if one was issued.
///
/// `id` must be the id of the registration form request so the server can
/// match the answer.
pub fn generate_create_account_with_captcha(
    account: &Account,
    id: &str,
    form: Option<&SubmittedForm>,
) -> Packet {
    let mut packet = Packet::new_request(RequestType::Set);
    packet
        .set_from(account.bare_jid())
        .set_to(account.server())
        .set_id(id);
    let query = packet.query(NS_REGISTER);
    if let Some(form) = form {
        query.append(form.into());
    }
    packet
}
