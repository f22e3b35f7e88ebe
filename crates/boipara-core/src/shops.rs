use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::picker::LocationPicker;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("{0} must be non-empty")]
    EmptyField(&'static str),

    #[error("shop location is not resolved: {0}")]
    UnresolvedLocation(&'static str),
}

/// Review state of a seller's shop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopStatus {
    Approved,
    Rejected,
    /// Also the fallback for statuses this client does not know.
    #[default]
    #[serde(other)]
    Pending,
}

impl std::fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            ShopStatus::Pending => "pending",
            ShopStatus::Approved => "approved",
            ShopStatus::Rejected => "rejected",
        })
    }
}

/// A seller's shop as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub seller_email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-text street address; the administrative region is `shop_location_id`.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub shop_location_id: Option<String>,
    #[serde(default)]
    pub status: ShopStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a shop. Only constructible with a resolved location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShop {
    pub name: String,
    pub seller_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub shop_location_id: String,
}

impl NewShop {
    /// Builds the create payload from form fields and the location picker.
    ///
    /// Blank optional fields are dropped rather than sent as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::EmptyField`] if `name` or `seller_email` is blank,
    /// or [`ShopError::UnresolvedLocation`] if the picker has no
    /// `shopLocationId` yet.
    pub fn from_picker(
        name: &str,
        seller_email: &str,
        phone: Option<&str>,
        address: Option<&str>,
        picker: &LocationPicker,
    ) -> Result<Self, ShopError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShopError::EmptyField("name"));
        }
        let seller_email = seller_email.trim();
        if seller_email.is_empty() {
            return Err(ShopError::EmptyField("seller email"));
        }

        let shop_location_id = picker.shop_location_id().ok_or_else(|| {
            ShopError::UnresolvedLocation(picker.warning().unwrap_or("no matching location"))
        })?;

        Ok(Self {
            name: name.to_string(),
            seller_email: seller_email.to_string(),
            phone: non_blank(phone),
            address: non_blank(address),
            shop_location_id: shop_location_id.to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "shops_test.rs"]
mod tests;
