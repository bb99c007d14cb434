//! Encoders that depend on who we are.
//!
//! [`IqGenerator`] holds the [`ClientIdentity`] so callers answering
//! inbound queries don't have to thread it through every call.

use crate::element::Element;
use crate::identity::ClientIdentity;
use crate::packet::{Packet, Request};
use crate::xep::{xep0030, xep0092, xep0115, xep0202};

#[derive(Debug, Clone, Default)]
pub struct IqGenerator {
    identity: ClientIdentity,
}

impl IqGenerator {
    pub fn new(identity: ClientIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    /// Answer a disco#info query.
    pub fn disco_response(&self, request: &Request) -> Packet {
        xep0030::disco_response(request, &self.identity)
    }

    /// Answer a jabber:iq:version query.
    pub fn version_response(&self, request: &Request) -> Packet {
        xep0092::version_response(request, &self.identity)
    }

    /// Answer an entity time query with the local clock.
    pub fn entity_time_response(&self, request: &Request) -> Packet {
        xep0202::entity_time_response(request)
    }

    /// Caps element for outgoing presence.
    pub fn caps(&self) -> Element {
        xep0115::caps_element(&self.identity)
    }
}
