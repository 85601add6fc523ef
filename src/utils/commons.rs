use bigdecimal::{BigDecimal, ToPrimitive};
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool, PooledConnection},
};
use serde::{Deserialize, Deserializer, Serializer, ser::Error};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;
pub type DbConn<'db> = &'db mut PgConnection;

/// Money is stored and summed as `BigDecimal`; on the wire it is a plain JSON number.
pub fn serialize_decimal<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let as_f64 = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("{} does not fit in an f64", value)))?;
    serializer.serialize_f64(as_f64)
}

pub fn serialize_optional_decimal<S>(
    value: &Option<BigDecimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serialize_decimal(v, serializer),
        None => serializer.serialize_none(),
    }
}

/// Lets `Option<Option<T>>` tell an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::str::FromStr;

    #[derive(Serialize)]
    struct Money {
        #[serde(serialize_with = "serialize_decimal")]
        amount: BigDecimal,
        #[serde(serialize_with = "serialize_optional_decimal")]
        budget: Option<BigDecimal>,
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        budget: Option<Option<BigDecimal>>,
    }

    #[test]
    fn test_decimal_serializes_as_number() {
        let money = Money {
            amount: BigDecimal::from_str("12.50").unwrap(),
            budget: None,
        };
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["amount"], serde_json::json!(12.5));
        assert!(json["budget"].is_null());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert!(absent.budget.is_none());

        let cleared: Patch = serde_json::from_str(r#"{"budget": null}"#).unwrap();
        assert_eq!(cleared.budget, Some(None));

        let set: Patch = serde_json::from_str(r#"{"budget": "250.00"}"#).unwrap();
        assert_eq!(set.budget, Some(Some(BigDecimal::from(250))));
    }
}
