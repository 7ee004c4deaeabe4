pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        if let Ok(time) = DateTime::parse_from_rfc3339(&str_time) {
            return Ok(time.naive_utc());
        }
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.and_utc().to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_write_rfc3339_and_read_it_back() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9).and_then(|d| d.and_hms_opt(10, 30, 0)).expect("date");
        let json = serde_json::to_string(&Stamped { at }).expect("serialize");
        assert_eq!(r#"{"at":"2024-03-09T10:30:00+00:00"}"#, json);
        let parsed: Stamped = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(at, parsed.at);
    }

    #[tokio::test]
    async fn test_should_read_naive_format() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":"2022-09-24T04:40:35.726029"}"#).expect("deserialize");
        assert_eq!("2022-09-24 04:40:35.726029", parsed.at.to_string());
    }
}
