//! XMPP Extension Protocol encoders
//!
//! One module per XEP. Each encoder is a pure function from value objects
//! to a [`Packet`](crate::Packet); nothing here touches the network.
//!
//! ## Implemented XEPs
//!
//! - **XEP-0030**: Service Discovery - disco#info responses.
//! - **XEP-0045**: Multi-User Chat - affiliation, role and room configuration requests.
//! - **XEP-0054**: vcard-temp - avatar fallback retrieval.
//! - **XEP-0077**: In-Band Registration - password change and captcha signup.
//! - **XEP-0084**: User Avatar - PEP data and metadata.
//! - **XEP-0092**: Software Version - version responses.
//! - **XEP-0115**: Entity Capabilities - the `<c/>` presence element.
//! - **XEP-0172**: User Nickname - PEP nick publishing.
//! - **XEP-0191**: Blocking Command - block list, block and unblock.
//! - **XEP-0202**: Entity Time - time responses.
//! - **XEP-0313**: Message Archive Management - archive queries with RSM paging.
//! - **XEP-0357**: Push Notifications - app server registration and enable.
//! - **XEP-0363**: HTTP File Upload - slot requests.
//! - **XEP-0384**: OMEMO - device lists, bundles and verification chains.

pub mod xep0030;
pub mod xep0045;
pub mod xep0054;
pub mod xep0077;
pub mod xep0084;
pub mod xep0092;
pub mod xep0115;
pub mod xep0172;
pub mod xep0191;
pub mod xep0202;
pub mod xep0313;
pub mod xep0357;
pub mod xep0363;
pub mod xep0384;

pub use xep0030::{disco_response, NS_DISCO_INFO};
pub use xep0045::{
    change_affiliation, change_affiliations, change_role, configure_room, default_room_configuration,
    query_affiliation, NS_MUC_ADMIN, NS_MUC_OWNER, NS_MUC_ROOMCONFIG,
};
pub use xep0054::{retrieve_vcard_avatar, NS_VCARD};
pub use xep0077::{generate_create_account_with_captcha, generate_set_password, NS_REGISTER};
pub use xep0084::{
    publish_avatar, publish_avatar_metadata, retrieve_avatar_metadata, retrieve_pep_avatar,
    NS_AVATAR_DATA, NS_AVATAR_METADATA,
};
pub use xep0092::{version_response, NS_VERSION};
pub use xep0115::{caps_element, NS_CAPS};
pub use xep0172::{publish_nick, NS_NICK};
pub use xep0191::{
    generate_get_block_list, generate_set_block_request, generate_set_unblock_request, NS_BLOCKING,
    NS_REPORTING,
};
pub use xep0202::{entity_time_response, entity_time_response_at, NS_TIME};
pub use xep0313::{query_message_archive_management, NS_MAM, NS_MAM_LEGACY, NS_RSM};
pub use xep0357::{enable_push, push_token_to_app_server, NS_COMMANDS, NS_PUSH};
pub use xep0363::{convert_filename, request_http_upload_slot, NS_HTTP_UPLOAD};
pub use xep0384::{
    publish_bundles, publish_device_ids, publish_verification, retrieve_bundles_for_device,
    retrieve_device_ids, retrieve_verification_for_device, EncodeWarning, Encoded, PEP_BUNDLES,
    PEP_DEVICE_LIST, PEP_PREFIX, PEP_VERIFICATION,
};
