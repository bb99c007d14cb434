//! XEP-0202: Entity Time
//!
//! ```xml
//! <time xmlns='urn:xmpp:time'>
//!   <utc>2006-12-19T17:58:35.000Z</utc>
//!   <tzo>-06:00</tzo>
//! </time>
//! ```

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::codec::{timestamp, timezone_offset};
use crate::packet::{Packet, Request, ResponseType};

/// Entity time namespace.
pub const NS_TIME: &str = "urn:xmpp:time";

/// Answer an entity time request with the current local time.
pub fn entity_time_response(request: &Request) -> Packet {
    let now: DateTime<FixedOffset> = Local::now().into();
    entity_time_response_at(request, now)
}

/// Answer an entity time request for a given instant and offset.
pub fn entity_time_response_at(request: &Request, now: DateTime<FixedOffset>) -> Packet {
    let mut packet = request.generate_response(ResponseType::Result);
    let time = packet.add_child_ns("time", NS_TIME);
    time.add_child("utc").set_content(timestamp(now.with_timezone(&Utc)));
    time.add_child("tzo").set_content(timezone_offset(now.offset().local_minus_utc()));
    packet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::RequestType;
    use chrono::TimeZone;

    fn request() -> Request {
        let mut packet = Packet::new_request(RequestType::Get);
        packet.add_child_ns("time", NS_TIME);
        Request::new("time_1", packet)
    }

    #[test]
    fn test_fixed_instant() {
        let offset = FixedOffset::west_opt(6 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2006, 12, 19, 11, 58, 35).unwrap();
        let packet = entity_time_response_at(&request(), now);

        let time = packet.payload().unwrap();
        assert!(time.is("time", NS_TIME));
        assert_eq!(time.find_child("utc").unwrap().text(), Some("2006-12-19T17:58:35.000Z"));
        assert_eq!(time.find_child("tzo").unwrap().text(), Some("-06:00"));
    }

    #[test]
    fn test_current_time_shape() {
        let packet = entity_time_response(&request());
        let time = packet.payload().unwrap();
        let utc = time.find_child("utc").unwrap().text().unwrap();
        assert!(utc.ends_with('Z'));
        assert_eq!(time.find_child("tzo").unwrap().text().unwrap().len(), 6);
    }
}
