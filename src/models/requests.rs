use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ExchangeTypes, MailLocation};

/// Request to find a single penpal match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "penpal_id", rename = "penpalId")]
    pub penpal_id: String,
}

/// Request to join the penpal directory
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePenpalRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(alias = "street_address", rename = "streetAddress")]
    pub street_address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    #[serde(alias = "zip_code", rename = "zipCode")]
    pub zip_code: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 10))]
    pub interests: String,
    #[serde(alias = "discord_handle", rename = "discordHandle", default)]
    pub discord_handle: Option<String>,
    #[serde(alias = "mail_location", rename = "mailLocation")]
    pub mail_location: MailLocation,
    #[serde(alias = "exchange_types", rename = "exchangeTypes")]
    pub exchange_types: ExchangeTypes,
}
