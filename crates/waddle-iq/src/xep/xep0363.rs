//! XEP-0363: HTTP File Upload (slot requests)
//!
//! ```xml
//! <iq type='get' to='upload.montague.tld'>
//!   <request xmlns='urn:xmpp:http:upload'>
//!     <filename>VQ6EAOKbQdSnFkRmVUQAAA.jpg</filename>
//!     <size>23456</size>
//!     <content-type>image/jpeg</content-type>
//!   </request>
//! </iq>
//! ```

use jid::Jid;
use tracing::debug;
use uuid::Uuid;

use crate::codec::base64_url_safe;
use crate::packet::{Packet, RequestType};
use crate::types::UploadFile;

/// Namespace for HTTP File Upload slot requests.
pub const NS_HTTP_UPLOAD: &str = "urn:xmpp:http:upload";

/// Ask `host` for an upload slot.
pub fn request_http_upload_slot(host: &Jid, file: &UploadFile, mime: Option<&str>) -> Packet {
    let filename = convert_filename(&file.name);
    let mut packet = Packet::new_request(RequestType::Get);
    packet.set_to(host.clone());
    let request = packet.add_child_ns("request", NS_HTTP_UPLOAD);
    request.add_child("filename").set_content(filename.as_str());
    request
        .add_child("size")
        .set_content(file.expected_size.to_string());
    if let Some(mime) = mime {
        request.add_child("content-type").set_content(mime);
    }
    debug!(host = %host, filename = %filename, size = file.expected_size, "Built upload slot request");
    packet
}

/// Hex digits allowed in each dash-separated UUID group.
const UUID_GROUP_WIDTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Shorten a `<uuid>.<ext>` filename to `<base64url(uuid bytes)>.<ext>`.
///
/// The extension is everything from the first `.`. Names without a dot or
/// whose prefix is not a dashed UUID are returned unchanged.
pub fn convert_filename(name: &str) -> String {
    let Some(pos) = name.find('.') else {
        return name.to_string();
    };
    match parse_dashed_uuid(&name[..pos]) {
        Some(uuid) => format!("{}{}", base64_url_safe(uuid.as_bytes()), &name[pos..]),
        None => name.to_string(),
    }
}

/// Parse the five-group `8-4-4-4-12` form only.
///
/// Groups may be shorter than their width and are zero-extended on the left
/// (`1-1-1-1-1` is `00000001-0001-0001-0001-000000000001`). The simple,
/// braced and URN spellings are rejected.
fn parse_dashed_uuid(stem: &str) -> Option<Uuid> {
    let groups: Vec<&str> = stem.split('-').collect();
    if groups.len() != UUID_GROUP_WIDTHS.len() {
        return None;
    }

    let mut value: u128 = 0;
    for (group, width) in groups.into_iter().zip(UUID_GROUP_WIDTHS) {
        if group.is_empty() || group.len() > width || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let bits = u128::from_str_radix(group, 16).ok()?;
        value = (value << (width * 4)) | bits;
    }
    Some(Uuid::from_u128(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_uuid_filename() {
        assert_eq!(
            convert_filename("550e8400-e29b-41d4-a716-446655440000.png"),
            "VQ6EAOKbQdSnFkRmVUQAAA.png"
        );
    }

    #[test]
    fn test_convert_keeps_full_extension() {
        assert_eq!(
            convert_filename("ffffffff-ffff-ffff-ffff-fffffffffffe.tar.gz"),
            "_____________________g.tar.gz"
        );
    }

    #[test]
    fn test_non_uuid_names_unchanged() {
        assert_eq!(convert_filename("my-photo.png"), "my-photo.png");
        assert_eq!(convert_filename("no_extension"), "no_extension");
        assert_eq!(convert_filename(".hidden"), ".hidden");
        assert_eq!(
            convert_filename("550e8400-e29b-41d4-a716-44665544000Z.png"),
            "550e8400-e29b-41d4-a716-44665544000Z.png"
        );
    }

    #[test]
    fn test_undashed_uuid_spellings_unchanged() {
        for name in [
            "d41d8cd98f00b204e9800998ecf8427e.jpg",
            "{550e8400-e29b-41d4-a716-446655440000}.png",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000.png",
        ] {
            assert_eq!(convert_filename(name), name);
        }
    }

    #[test]
    fn test_short_groups_are_zero_extended() {
        assert_eq!(convert_filename("1-1-1-1-1.txt"), "AAAAAQABAAEAAQAAAAAAAQ.txt");
        assert_eq!(convert_filename("abcd-0-0-0-0.txt"), "AACrzQAAAAAAAAAAAAAAAA.txt");
    }

    #[test]
    fn test_malformed_groups_unchanged() {
        for name in [
            "550e8400-e29b-41d4-a716-4466554400001.png",
            "550e8400-e29b-41d4-a716.png",
            "550e8400--41d4-a716-446655440000.png",
            "550e8400-e29b-41d4-a716-+46655440000.png",
            "550e8400-e29b-41d4-a716-446655440000-1.png",
        ] {
            assert_eq!(convert_filename(name), name);
        }
    }

    #[test]
    fn test_uuid_without_extension_unchanged() {
        let name = "550e8400-e29b-41d4-a716-446655440000";
        assert_eq!(convert_filename(name), name);
    }

    #[test]
    fn test_slot_request_fields() {
        let host: Jid = "upload.montague.tld".parse().unwrap();
        let file = UploadFile::new("my-photo.jpg", 23456);
        let packet = request_http_upload_slot(&host, &file, Some("image/jpeg"));

        assert_eq!(packet.to(), Some(&host));
        let request = packet.payload().unwrap();
        assert!(request.is("request", NS_HTTP_UPLOAD));
        let names: Vec<_> = request.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["filename", "size", "content-type"]);
        assert_eq!(request.find_child("size").unwrap().text(), Some("23456"));
    }

    #[test]
    fn test_slot_request_without_mime() {
        let host: Jid = "upload.montague.tld".parse().unwrap();
        let file = UploadFile::new("notes.txt", 10);
        let packet = request_http_upload_slot(&host, &file, None);
        assert!(packet.payload().unwrap().find_child("content-type").is_none());
    }
}
