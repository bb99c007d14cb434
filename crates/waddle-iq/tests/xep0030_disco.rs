//! Service discovery, software version and entity time responses built
//! from inbound requests.

mod common;

use chrono::{FixedOffset, TimeZone};
use minidom::Element;
use waddle_iq::xep::{xep0030::NS_DISCO_INFO, xep0092::NS_VERSION, xep0202, xep0202::NS_TIME};
use waddle_iq::{ClientIdentity, IqGenerator, IqType, Request};
use xmpp_parsers::iq::{Iq, IqType as ParsedIqType};

fn inbound(xml: &str) -> Request {
    let elem: Element = xml.parse().expect("valid XML");
    let iq = Iq::try_from(elem).expect("valid IQ");
    Request::from(&iq)
}

fn disco_request(node: Option<&str>) -> Request {
    let node = node.map(|n| format!(" node='{n}'")).unwrap_or_default();
    inbound(&format!(
        "<iq xmlns='jabber:client' type='get' id='disco1' from='romeo@montague.lit/orchard' to='juliet@capulet.lit/balcony'>\
         <query xmlns='http://jabber.org/protocol/disco#info'{node}/></iq>"
    ))
}

#[test]
fn xep0030_response_mirrors_request() {
    common::init_test();
    let generator = IqGenerator::default();
    let response = generator.disco_response(&disco_request(None));

    assert_eq!(response.iq_type(), IqType::Result);
    assert_eq!(response.id(), Some("disco1"));
    assert_eq!(response.to().map(ToString::to_string).as_deref(), Some("romeo@montague.lit/orchard"));
    assert_eq!(response.from().map(ToString::to_string).as_deref(), Some("juliet@capulet.lit/balcony"));
}

#[test]
fn xep0030_node_is_echoed() {
    common::init_test();
    let generator = IqGenerator::default();
    let node = format!("{}#{}", generator.identity().caps_node, generator.identity().caps_hash());
    let response = generator.disco_response(&disco_request(Some(&node)));

    let iq = common::wire_iq(&response, "unused");
    let ParsedIqType::Result(Some(query)) = iq.payload else {
        panic!("expected a result with a payload");
    };
    assert!(query.is("query", NS_DISCO_INFO));
    assert_eq!(query.attr("node"), Some(node.as_str()));
}

#[test]
fn xep0030_identity_and_features_on_the_wire() {
    common::init_test();
    let identity = ClientIdentity {
        name: "Pond".into(),
        version: "1.2".into(),
        identity_type: "pc".into(),
        features: vec!["urn:xmpp:ping".into(), "jabber:iq:version".into()],
        ..Default::default()
    };
    let generator = IqGenerator::new(identity);
    let elem = common::wire(&generator.disco_response(&disco_request(None)), "unused");

    let query = elem.get_child("query", NS_DISCO_INFO).expect("query");
    assert_eq!(query.attr("node"), None);

    let identity = query.get_child("identity", NS_DISCO_INFO).expect("identity");
    assert_eq!(identity.attr("category"), Some("client"));
    assert_eq!(identity.attr("type"), Some("pc"));
    assert_eq!(identity.attr("name"), Some("Pond 1.2"));

    let features: Vec<_> = query
        .children()
        .filter(|c| c.name() == "feature")
        .filter_map(|c| c.attr("var"))
        .collect();
    assert_eq!(features, ["urn:xmpp:ping", "jabber:iq:version"]);
}

#[test]
fn xep0092_version_response() {
    common::init_test();
    let request = inbound(
        "<iq xmlns='jabber:client' type='get' id='version_1' from='romeo@montague.lit/orchard'>\
         <query xmlns='jabber:iq:version'/></iq>",
    );
    let generator = IqGenerator::default();
    let elem = common::wire(&generator.version_response(&request), "unused");

    assert_eq!(elem.attr("id"), Some("version_1"));
    let query = elem.get_child("query", NS_VERSION).expect("query");
    assert_eq!(query.get_child("name", NS_VERSION).map(Element::text).as_deref(), Some("Waddle"));
    assert_eq!(query.get_child("os", NS_VERSION).map(Element::text).as_deref(), Some("Android"));
}

#[test]
fn xep0202_entity_time_response() {
    common::init_test();
    let request = inbound(
        "<iq xmlns='jabber:client' type='get' id='time_1' from='romeo@montague.lit/orchard'>\
         <time xmlns='urn:xmpp:time'/></iq>",
    );
    let offset = FixedOffset::west_opt(6 * 3600).unwrap();
    let now = offset.with_ymd_and_hms(2006, 12, 19, 11, 58, 35).unwrap();
    let elem = common::wire(&xep0202::entity_time_response_at(&request, now), "unused");

    let time = elem.get_child("time", NS_TIME).expect("time");
    assert_eq!(time.get_child("tzo", NS_TIME).map(Element::text).as_deref(), Some("-06:00"));
    assert_eq!(
        time.get_child("utc", NS_TIME).map(Element::text).as_deref(),
        Some("2006-12-19T17:58:35.000Z")
    );
}

#[test]
fn xep0030_packet_without_id_cannot_be_answered() {
    let packet = waddle_iq::Packet::new_request(waddle_iq::RequestType::Get);
    assert!(matches!(Request::try_from(packet), Err(waddle_iq::IqError::MissingId)));
}

#[test]
fn xep0030_reference_stanza() {
    let identity = ClientIdentity {
        name: "Pond".into(),
        version: "1.2".into(),
        identity_type: "pc".into(),
        features: vec!["http://jabber.org/protocol/disco#info".into(), "urn:xmpp:ping".into()],
        ..Default::default()
    };
    let response = IqGenerator::new(identity).disco_response(&disco_request(Some("urn:example#abc")));

    common::assert_wire_eq(
        &response,
        "unused",
        "<iq xmlns='jabber:client' type='result' id='disco1'
             to='romeo@montague.lit/orchard' from='juliet@capulet.lit/balcony'>
           <query xmlns='http://jabber.org/protocol/disco#info' node='urn:example#abc'>
             <identity category='client' type='pc' name='Pond 1.2'/>
             <feature var='http://jabber.org/protocol/disco#info'/>
             <feature var='urn:xmpp:ping'/>
           </query>
         </iq>",
    );
}

#[test]
fn xep0092_reference_stanza() {
    let request = inbound(
        "<iq xmlns='jabber:client' type='get' id='version_1' from='romeo@montague.lit/orchard'>\
         <query xmlns='jabber:iq:version'/></iq>",
    );
    let identity = ClientIdentity {
        name: "Pond".into(),
        version: "1.2".into(),
        device_brand: "chromium".into(),
        ..Default::default()
    };
    let response = IqGenerator::new(identity).version_response(&request);

    common::assert_wire_eq(
        &response,
        "unused",
        "<iq xmlns='jabber:client' type='result' id='version_1' to='romeo@montague.lit/orchard'>
           <query xmlns='jabber:iq:version'>
             <name>Pond</name>
             <version>1.2</version>
             <os>Chrome OS</os>
           </query>
         </iq>",
    );
}

#[test]
fn xep0202_reference_stanza() {
    let request = inbound(
        "<iq xmlns='jabber:client' type='get' id='time_1' from='romeo@montague.lit/orchard'>\
         <time xmlns='urn:xmpp:time'/></iq>",
    );
    let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let now = offset.with_ymd_and_hms(2006, 12, 19, 23, 28, 35).unwrap();

    common::assert_wire_eq(
        &xep0202::entity_time_response_at(&request, now),
        "unused",
        "<iq xmlns='jabber:client' type='result' id='time_1' to='romeo@montague.lit/orchard'>
           <time xmlns='urn:xmpp:time'>
             <utc>2006-12-19T17:58:35.000Z</utc>
             <tzo>+05:30</tzo>
           </time>
         </iq>",
    );
}
