//! IQ packet model.
//!
//! A [`Packet`] is an `<iq/>` stanza under construction. Incoming requests
//! that must be answered are wrapped in [`Request`], which always carries an
//! id, so a response can only be generated from something correlatable.

use jid::Jid;
use xmpp_parsers::iq::{Iq, IqType as ParsedIqType};

use crate::element::{write_minidom, Element, NS_CLIENT};
use crate::IqError;

/// The `type` attribute of an IQ stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IqType {
    Get,
    Set,
    Result,
    Error,
}

impl IqType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Result => "result",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for IqType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Types a locally originated request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Get,
    Set,
}

impl From<RequestType> for IqType {
    fn from(value: RequestType) -> Self {
        match value {
            RequestType::Get => IqType::Get,
            RequestType::Set => IqType::Set,
        }
    }
}

/// Types a response may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Result,
    Error,
}

impl From<ResponseType> for IqType {
    fn from(value: ResponseType) -> Self {
        match value {
            ResponseType::Result => IqType::Result,
            ResponseType::Error => IqType::Error,
        }
    }
}

/// An IQ stanza and its payload.
///
/// Outbound requests leave the id unset unless an encoder needs a specific
/// one; the transport assigns ids when it sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    iq_type: IqType,
    id: Option<String>,
    to: Option<Jid>,
    from: Option<Jid>,
    children: Vec<Element>,
}

impl Packet {
    /// Create an empty request of the given type.
    pub fn new_request(request_type: RequestType) -> Self {
        Self::with_type(request_type.into())
    }

    fn with_type(iq_type: IqType) -> Self {
        Self {
            iq_type,
            id: None,
            to: None,
            from: None,
            children: Vec::new(),
        }
    }

    pub fn iq_type(&self) -> IqType {
        self.iq_type
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn to(&self) -> Option<&Jid> {
        self.to.as_ref()
    }

    pub fn from(&self) -> Option<&Jid> {
        self.from.as_ref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_to(&mut self, to: impl Into<Jid>) -> &mut Self {
        self.to = Some(to.into());
        self
    }

    pub fn set_from(&mut self, from: impl Into<Jid>) -> &mut Self {
        self.from = Some(from.into());
        self
    }

    /// Top-level child elements in wire order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The first top-level child, i.e. the semantic payload.
    pub fn payload(&self) -> Option<&Element> {
        self.children.first()
    }

    /// Append a namespaced top-level child and return it.
    pub fn add_child_ns(&mut self, name: impl Into<String>, namespace: impl Into<String>) -> &mut Element {
        self.append(Element::with_namespace(name, namespace))
    }

    /// Move an already built element under the stanza and return it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// The `<query/>` child under `namespace`, created on first access.
    pub fn query(&mut self, namespace: &str) -> &mut Element {
        match self.children.iter().position(|child| child.is("query", namespace)) {
            Some(index) => &mut self.children[index],
            None => self.add_child_ns("query", namespace),
        }
    }

    /// Convert to a `minidom` `<iq/>` element.
    pub fn to_element(&self) -> minidom::Element {
        let mut builder = minidom::Element::builder("iq", NS_CLIENT).attr("type", self.iq_type.as_str());
        if let Some(id) = &self.id {
            builder = builder.attr("id", id.as_str());
        }
        if let Some(to) = &self.to {
            builder = builder.attr("to", to.to_string());
        }
        if let Some(from) = &self.from {
            builder = builder.attr("from", from.to_string());
        }
        for child in &self.children {
            builder = builder.append(child.to_minidom(NS_CLIENT));
        }
        builder.build()
    }

    /// Serialize the stanza for the transport.
    pub fn to_xml(&self) -> Result<String, IqError> {
        write_minidom(&self.to_element())
    }
}

/// An incoming request that can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    id: String,
    packet: Packet,
}

impl Request {
    /// Wrap a packet, forcing its id to `id`.
    pub fn new(id: impl Into<String>, mut packet: Packet) -> Self {
        let id = id.into();
        packet.id = Some(id.clone());
        Self { id, packet }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn packet(&self) -> &Packet {
        &self.packet
    }

    /// The requesting entity.
    pub fn sender(&self) -> Option<&Jid> {
        self.packet.from()
    }

    /// The entity the request was addressed to.
    pub fn recipient(&self) -> Option<&Jid> {
        self.packet.to()
    }

    /// The request payload (e.g. the incoming `<query/>`).
    pub fn payload(&self) -> Option<&Element> {
        self.packet.payload()
    }

    /// Build an empty response addressed back to the requester.
    pub fn generate_response(&self, response_type: ResponseType) -> Packet {
        let mut response = Packet::with_type(response_type.into());
        response.id = Some(self.id.clone());
        response.to = self.packet.from.clone();
        response.from = self.packet.to.clone();
        response
    }
}

impl TryFrom<Packet> for Request {
    type Error = IqError;

    fn try_from(packet: Packet) -> Result<Self, Self::Error> {
        match packet.id.clone() {
            Some(id) => Ok(Self { id, packet }),
            None => Err(IqError::MissingId),
        }
    }
}

impl From<&Iq> for Request {
    fn from(iq: &Iq) -> Self {
        let (iq_type, payload) = match &iq.payload {
            ParsedIqType::Get(elem) => (IqType::Get, Some(elem)),
            ParsedIqType::Set(elem) => (IqType::Set, Some(elem)),
            ParsedIqType::Result(elem) => (IqType::Result, elem.as_ref()),
            ParsedIqType::Error(_) => (IqType::Error, None),
        };

        let mut packet = Packet::with_type(iq_type);
        packet.to = iq.to.clone();
        packet.from = iq.from.clone();
        if let Some(elem) = payload {
            packet.append(Element::from(elem));
        }
        Self::new(iq.id.clone(), packet)
    }
}
