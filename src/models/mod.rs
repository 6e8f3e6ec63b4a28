pub mod category;
pub mod receipt_sequence;
pub mod repair_request;
pub mod support_request;

pub use repair_request::RepairStatus;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the precision records are stored and serialized with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// `YYYY-MM-DDTHH:MM:SS.ffffffZ` for record timestamps.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| {
                    DateTime::parse_from_rfc3339(&raw)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(serde::de::Error::custom)
                })
                .transpose()
        }
    }
}

/// Money rendered as a string with two decimals, e.g. `"1500.50"`.
pub mod price {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(amount) => serializer.collect_str(&format_args!("{:.2}", amount.round_dp(2))),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        Option::<Decimal>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(with = "timestamp")]
        at: DateTime<Utc>,
        #[serde(with = "price")]
        price: Option<Decimal>,
    }

    #[test]
    fn timestamps_have_microseconds_and_zulu() {
        let at = Utc.with_ymd_and_hms(2023, 10, 1, 8, 30, 0).unwrap();
        let json = serde_json::to_value(Sample { at, price: None }).unwrap();
        assert_eq!(json["at"], "2023-10-01T08:30:00.000000Z");
        assert!(json["price"].is_null());
    }

    #[test]
    fn prices_render_two_decimals() {
        let at = Utc::now();
        let json = serde_json::to_value(Sample {
            at,
            price: Some(Decimal::new(15005, 1)),
        })
        .unwrap();
        assert_eq!(json["price"], "1500.50");
    }

    #[test]
    fn now_is_microsecond_precision() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }
}
