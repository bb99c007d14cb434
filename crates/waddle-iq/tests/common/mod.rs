//! Shared helpers for the stanza tests.

#![allow(dead_code)]

use minidom::Element;
use waddle_iq::Packet;
use xmpp_parsers::iq::Iq;

/// Install a test subscriber once so encoder logs show up with `--nocapture`.
pub fn init_test() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Serialize `packet` as the transport would (with an id) and parse it back.
pub fn wire(packet: &Packet, id: &str) -> Element {
    let mut packet = packet.clone();
    if packet.id().is_none() {
        packet.set_id(id);
    }
    let xml = packet.to_xml().expect("packet serializes");
    xml.parse().expect("serialized packet is well-formed XML")
}

/// Same as [`wire`], but also checks the stanza is a valid IQ.
pub fn wire_iq(packet: &Packet, id: &str) -> Iq {
    Iq::try_from(wire(packet, id)).expect("valid IQ")
}

/// Values of the data form field `var` in the `jabber:x:data` child of `parent`.
pub fn form_values(parent: &Element, var: &str) -> Vec<String> {
    let Some(x) = parent.get_child("x", "jabber:x:data") else {
        return Vec::new();
    };
    x.children()
        .filter(|field| field.attr("var") == Some(var))
        .flat_map(|field| field.children().filter(|v| v.name() == "value").map(|v| v.text()))
        .collect()
}

/// Parse a reference stanza written across several lines.
///
/// Lines are trimmed and joined without whitespace between tags; a line that
/// continues an open tag (wrapped attributes) is joined with a single space.
pub fn reference(xml: &str) -> Element {
    let mut compact = String::new();
    for line in xml.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !compact.is_empty() && !compact.ends_with('>') {
            compact.push(' ');
        }
        compact.push_str(line);
    }
    compact.parse().expect("reference is well-formed XML")
}

/// Assert that `packet` puts exactly `expected` on the wire.
///
/// Names, namespaces, attributes, text and child order must all match, and
/// no extra siblings are allowed. Attribute order and prefixes are ignored.
pub fn assert_wire_eq(packet: &Packet, id: &str, expected: &str) {
    let actual = waddle_iq::Element::from(&wire(packet, id));
    let expected = waddle_iq::Element::from(&reference(expected));
    assert_eq!(actual, expected);
}
