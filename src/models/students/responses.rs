use serde::Serialize;

use super::entities::Student;
use crate::models::{contacts::entities::Contact, lockers::entities::Locker};

// 学生档案：学生记录 + 储物柜 + 联系人
#[derive(Debug, Serialize)]
pub struct StudentProfileResponse {
    pub student: Student,
    pub locker: Option<Locker>,
    pub contacts: Vec<Contact>,
}
