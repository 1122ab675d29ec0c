use serde::{Deserialize, Serialize};

// 通讯地址，学生、教师、联系人共用
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostalAddress {
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal: Option<String>,
}

impl PostalAddress {
    pub fn new(province: &str, city: &str, address: &str, postal: &str) -> Self {
        use super::non_empty;
        Self {
            province: non_empty(Some(province.to_string())),
            city: non_empty(Some(city.to_string())),
            address: non_empty(Some(address.to_string())),
            postal: non_empty(Some(postal.to_string())),
        }
    }
}
