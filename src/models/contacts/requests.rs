use serde::Deserialize;

use crate::models::common::deserialize_lenient_string;

// 创建联系人并关联到学生
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub sid: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub middlename: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub homephone: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub workphone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub priority: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePhoneRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub newnumber: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriorityRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub priority: String,
}
