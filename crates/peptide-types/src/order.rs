//! Customer order types.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_quantity() -> i64 {
    1
}

/// A single line of an order.
///
/// `product_id` is not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    /// Identifier of the ordered product.
    pub product_id: String,
    /// Number of units.
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

/// A customer order with its compliance acknowledgements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    /// Ordered lines.
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    /// Customer name.
    pub customer_name: String,
    /// Contact email.
    pub email: String,
    /// Research institution.
    #[serde(default)]
    pub institution: Option<String>,
    /// Shipping country.
    pub country: String,
    /// Customer acknowledges Research Use Only.
    pub research_use_only_ack: bool,
    /// Customer confirms age as required.
    pub age_over_21_ack: bool,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Order {
    /// Returns true when both compliance acknowledgements were given.
    pub fn acknowledgements_complete(&self) -> bool {
        self.research_use_only_ack && self.age_over_21_ack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn order(ruo: bool, age: bool) -> Order {
        serde_json::from_value(json!({
            "items": [{"product_id": "abc", "quantity": 2}],
            "customer_name": "A",
            "email": "a@b.com",
            "country": "US",
            "research_use_only_ack": ruo,
            "age_over_21_ack": age
        }))
        .unwrap()
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let item: OrderItem = serde_json::from_value(json!({"product_id": "x"})).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_fractional_quantity_is_type_error() {
        let result: Result<OrderItem, _> =
            serde_json::from_value(json!({"product_id": "x", "quantity": 2.0}));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_quantity_is_nested_error() {
        let mut value = serde_json::to_value(order(true, true)).unwrap();
        value["items"][0]["quantity"] = json!(0);
        let order: Order = serde_json::from_value(value).unwrap();
        let errors = order.validate().unwrap_err();
        assert!(errors.errors().contains_key("items"));
    }

    #[test]
    fn test_acknowledgements_are_required_fields() {
        let result = serde_json::from_value::<Order>(json!({
            "items": [],
            "customer_name": "A",
            "email": "a@b.com",
            "country": "US",
            "research_use_only_ack": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let order = order(true, true);
        assert!(order.institution.is_none());
        assert!(order.notes.is_none());
    }

    proptest! {
        #[test]
        fn prop_acknowledgement_rule(ruo in any::<bool>(), age in any::<bool>()) {
            prop_assert_eq!(order(ruo, age).acknowledgements_complete(), ruo && age);
        }
    }
}
