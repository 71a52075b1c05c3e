//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe entity
///
/// Field order is the table column order and is the order keys appear in
/// serialized JSON. Keep it in step with [`Cafe::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Free-form seat count ("20-30", "50+")
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl Cafe {
    /// Table name
    pub const TABLE: &'static str = "cafe";

    /// Column names in table order
    pub const COLUMNS: [&'static str; 11] = [
        "id",
        "name",
        "map_url",
        "img_url",
        "location",
        "seats",
        "has_toilet",
        "has_wifi",
        "has_sockets",
        "can_take_calls",
        "coffee_price",
    ];

    /// Comma separated column list for SELECT statements
    pub fn select_list() -> String {
        Self::COLUMNS.join(", ")
    }
}

/// Create cafe payload
///
/// Text columns are optional here on purpose: a missing field is passed
/// through as NULL and the NOT NULL constraint rejects the write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeCreate {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}
