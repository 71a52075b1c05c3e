//! Form decoding for `POST /add`

use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::models::CafeCreate;

/// Raw form fields as submitted
///
/// Everything arrives as text; conversion to [`CafeCreate`] happens in
/// [`AddCafeForm::into_create`].
#[derive(Debug, Default, Deserialize)]
pub struct AddCafeForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub seats: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub sockets: Option<String>,
    pub calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl AddCafeForm {
    pub fn into_create(self) -> AppResult<CafeCreate> {
        Ok(CafeCreate {
            id: parse_id(self.id.as_deref())?,
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.loc,
            seats: self.seats,
            has_toilet: parse_flag("toilet", self.toilet.as_deref())?,
            has_wifi: parse_flag("wifi", self.wifi.as_deref())?,
            has_sockets: parse_flag("sockets", self.sockets.as_deref())?,
            can_take_calls: parse_flag("calls", self.calls.as_deref())?,
            coffee_price: self.coffee_price,
        })
    }
}

/// Optional integer id; blank means "let the store pick"
fn parse_id(raw: Option<&str>) -> AppResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| AppError::validation(format!("id: '{value}' is not an integer"))),
    }
}

/// Boolean form field
///
/// Absent or blank is false. Recognised tokens are case-insensitive;
/// anything else is rejected rather than guessed.
pub fn parse_flag(field: &str, raw: Option<&str>) -> AppResult<bool> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        _ => Err(AppError::validation(format!(
            "{field}: unrecognised boolean '{value}'"
        ))),
    }
}
