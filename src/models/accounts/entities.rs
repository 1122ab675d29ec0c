use serde::{Deserialize, Serialize};

// 账号角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Student, // 学生
    Teacher, // 教师
    Admin,   // 管理员
}

impl AccountRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static AccountRole] {
        &[&Self::Admin]
    }
    pub fn student_or_admin() -> &'static [&'static AccountRole] {
        &[&Self::Student, &Self::Admin]
    }
    pub fn teacher_or_admin() -> &'static [&'static AccountRole] {
        &[&Self::Teacher, &Self::Admin]
    }

    /// 请求体中标识该角色 ID 的字段名
    pub fn id_field(&self) -> &'static str {
        match self {
            AccountRole::Student => "sid",
            AccountRole::Teacher => "tid",
            AccountRole::Admin => "aid",
        }
    }

    /// 连续登录失败是否会锁定账号
    ///
    /// 管理员不参与锁定，否则最后一个管理员被锁后无人能解锁。
    pub fn locks_on_failed_login(&self) -> bool {
        !matches!(self, AccountRole::Admin)
    }
}

impl<'de> Deserialize<'de> for AccountRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AccountRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid account role: '{s}'. Supported roles: student, teacher, admin"
            ))
        })
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Student => write!(f, "{}", AccountRole::STUDENT),
            AccountRole::Teacher => write!(f, "{}", AccountRole::TEACHER),
            AccountRole::Admin => write!(f, "{}", AccountRole::ADMIN),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AccountRole::STUDENT => Ok(AccountRole::Student),
            AccountRole::TEACHER => Ok(AccountRole::Teacher),
            AccountRole::ADMIN => Ok(AccountRole::Admin),
            _ => Err(format!("Invalid account role: {s}")),
        }
    }
}

// 账号状态（对外展示）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountStatus {
    pub temp_password: bool,
    pub attempts: i32,
    pub disabled: bool,
}

/// 登录与凭据管理所需的账号信息，三种角色共用
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    pub id: String,
    pub role: AccountRole,
    pub first_name: String,
    /// 个人邮箱，临时密码发送到这里
    pub email: String,
    pub password_hash: String,
    pub status: AccountStatus,
}

/// 已通过认证的请求主体，由 RequireJWT 放入请求扩展
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub id: String,
    pub role: AccountRole,
    pub temp_password: bool,
}

impl Principal {
    /// 管理员可以操作任何账号，其余角色只能操作自己
    pub fn can_manage(&self, role: AccountRole, id: &str) -> bool {
        self.role == AccountRole::Admin || (self.role == role && self.id == id)
    }
}
