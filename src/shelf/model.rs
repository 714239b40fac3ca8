use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discount: f64,
    pub quantity: i64,
    // Set once at creation; updates keep the stored value
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        discount: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            discount,
            quantity,
            created_at: Utc::now(),
        }
    }

    /// Price after discount, rounded to two decimal places.
    ///
    /// Always derived from `price` and `discount` at read time; never
    /// persisted.
    pub fn final_price(&self) -> f64 {
        let discounted = self.price - self.price * self.discount;
        (discounted * 100.0).round() / 100.0
    }
}
