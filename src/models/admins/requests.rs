use serde::Deserialize;

use crate::models::common::deserialize_lenient_string;

#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateLockerRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub lockernumber: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub combo: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLockerComboRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub lockernumber: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub newlockercombo: String,
}
