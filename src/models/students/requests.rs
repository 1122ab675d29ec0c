use serde::Deserialize;

use crate::models::common::deserialize_lenient_string;

// 学生入学请求
#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub middlename: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub age: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub gradelevel: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub email: String,
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
pub struct UpdateGradeLevelRequest {
    #[serde(default)]
    pub sid: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub gradelevel: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLockerRequest {
    #[serde(default)]
    pub sid: String,
    #[serde(
        default,
        rename = "lockerNumber",
        alias = "lockernumber",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub locker_number: String,
}

// 学生与联系人关联请求
#[derive(Debug, Deserialize)]
pub struct StudentContactRequest {
    #[serde(default)]
    pub sid: String,
    #[serde(default, rename = "contactId")]
    pub contact_id: String,
}
