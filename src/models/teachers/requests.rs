use serde::Deserialize;

// 教师注册请求
#[derive(Debug, Deserialize)]
pub struct RegisterTeacherRequest {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub middlename: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub email: String,
}
