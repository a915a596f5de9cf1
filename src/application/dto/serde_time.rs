// Response timestamps are RFC 3339 with an explicit offset, e.g.
// `2024-06-01T06:00:00+00:00`.
use chrono::{DateTime, Utc};
use serde::Serializer;

pub fn rfc3339<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.to_rfc3339())
}

pub fn rfc3339_opt<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(at) => rfc3339(at, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Stamp {
        #[serde(serialize_with = "rfc3339")]
        at: DateTime<Utc>,
        #[serde(serialize_with = "rfc3339_opt")]
        maybe: Option<DateTime<Utc>>,
    }

    #[test]
    fn timestamps_keep_an_explicit_offset() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 6, 0, 0).unwrap();
        let json = serde_json::to_value(Stamp { at, maybe: None }).unwrap();
        assert_eq!(json["at"], "2024-06-01T06:00:00+00:00");
        assert!(json["maybe"].is_null());
    }
}
