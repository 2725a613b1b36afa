//! Stored customer records and their line items.
//!
//! These types mirror the "customer" document shape held by the external
//! store. The store enforces no schema on its side, so deserialization is
//! deliberately forgiving: missing fields default, a null item list reads as
//! empty, and a malformed price coerces to zero instead of failing the whole
//! result set.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One stored customer document: profile fields plus the purchased items.
///
/// Records are immutable from the dashboard's perspective; there is no
/// write path back to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// First address line.
    #[serde(default)]
    pub address1: String,
    /// Second address line.
    #[serde(default)]
    pub address2: String,
    /// Purchased items, in store order.
    #[serde(default, deserialize_with = "items_or_empty")]
    pub items: Vec<LineItem>,
}

/// One purchased product entry nested inside a [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Product identifier, unique only within its owning record.
    #[serde(default)]
    pub id: String,
    /// Product description.
    #[serde(default)]
    pub description: String,
    /// Price. Coerced leniently, see [`coerce_price`].
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Decimal,
}

/// Coerces a raw JSON value into a price.
///
/// Accepts genuine numbers and numeric-looking text; anything else (null,
/// booleans, objects, non-numeric text) contributes exactly zero so that a
/// single malformed document can never poison a revenue sum.
#[must_use]
pub fn coerce_price(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from(u)
            } else {
                n.as_f64()
                    .and_then(|f| Decimal::try_from(f).ok())
                    .unwrap_or(Decimal::ZERO)
            }
        }
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_price(&value))
}

fn items_or_empty<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<LineItem>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn record_from(value: serde_json::Value) -> Record {
        serde_json::from_value(value).expect("record deserializes")
    }

    #[test]
    fn full_record_round_trips_fields() {
        let record = record_from(json!({
            "name": "Ayesha Khan",
            "email": "ayesha@example.com",
            "phone": "+92-300-0000000",
            "city": "Karachi",
            "address1": "House 12",
            "address2": "Street 4",
            "items": [
                {"name": "Sofa", "id": "sofa-01", "description": "Two-seater", "price": 250}
            ]
        }));
        assert_eq!(record.name, "Ayesha Khan");
        assert_eq!(record.city, "Karachi");
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].price, dec!(250));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record = record_from(json!({}));
        assert_eq!(record.name, "");
        assert!(record.items.is_empty());
    }

    #[test]
    fn null_items_read_as_empty() {
        let record = record_from(json!({"name": "x", "items": null}));
        assert!(record.items.is_empty());
    }

    // Numeric-string prices contribute identically to genuine numbers.
    #[rstest]
    #[case(json!(100), dec!(100))]
    #[case(json!("100"), dec!(100))]
    #[case(json!(99.5), dec!(99.5))]
    #[case(json!("99.50"), dec!(99.50))]
    #[case(json!(" 42 "), dec!(42))]
    #[case(json!(0), dec!(0))]
    fn price_coercion_accepts_numbers_and_numeric_text(
        #[case] raw: serde_json::Value,
        #[case] expected: Decimal,
    ) {
        assert_eq!(coerce_price(&raw), expected);
    }

    // Anything non-numeric is exactly zero, never an error.
    #[rstest]
    #[case(json!(null))]
    #[case(json!("abc"))]
    #[case(json!(""))]
    #[case(json!(true))]
    #[case(json!({"amount": 5}))]
    #[case(json!([1, 2]))]
    fn price_coercion_treats_garbage_as_zero(#[case] raw: serde_json::Value) {
        assert_eq!(coerce_price(&raw), Decimal::ZERO);
    }

    #[test]
    fn item_with_missing_price_deserializes_to_zero() {
        let record = record_from(json!({
            "items": [{"name": "Lamp", "id": "lamp-1", "description": ""}]
        }));
        assert_eq!(record.items[0].price, Decimal::ZERO);
    }

    #[test]
    fn item_with_string_price_matches_numeric_price() {
        let numeric = record_from(json!({"items": [{"id": "a", "price": 100}]}));
        let text = record_from(json!({"items": [{"id": "a", "price": "100"}]}));
        assert_eq!(numeric.items[0].price, text.items[0].price);
    }
}
