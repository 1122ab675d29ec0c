use std::sync::Arc;

use crate::models::{
    accounts::{AccountCredentials, AccountRole},
    admins::entities::{Admin, NewAdmin},
    contacts::entities::{Contact, NewContact, UpdateContact},
    lockers::entities::Locker,
    photos::entities::Photo,
    students::entities::{NewStudent, Student, UpdateStudent},
    teachers::entities::{NewTeacher, Teacher, UpdateTeacher},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号通用方法（学生、教师、管理员）
    // 角色 ID 是否已被任一角色占用
    async fn identifier_exists(&self, id: &str) -> Result<bool>;
    // 校内邮箱是否已被学生或教师占用
    async fn school_email_exists(&self, school_email: &str) -> Result<bool>;
    // 获取登录凭据
    async fn get_account(&self, role: AccountRole, id: &str)
    -> Result<Option<AccountCredentials>>;
    // 更新失败计数与禁用状态
    async fn update_login_state(
        &self,
        role: AccountRole,
        id: &str,
        attempts: i32,
        disabled: bool,
    ) -> Result<bool>;
    // 更新密码哈希与临时密码标记
    async fn update_password(
        &self,
        role: AccountRole,
        id: &str,
        password_hash: &str,
        temp_password: bool,
    ) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: NewStudent) -> Result<Student>;
    async fn get_student(&self, sid: &str) -> Result<Option<Student>>;
    async fn update_student(&self, sid: &str, update: UpdateStudent) -> Result<Option<Student>>;
    // 查询占用某储物柜的学生
    async fn get_student_by_locker(&self, locker_id: &str) -> Result<Option<Student>>;
    // 关联联系人，已关联时返回 false
    async fn link_contact(&self, sid: &str, contact_id: &str) -> Result<bool>;
    async fn unlink_contact(&self, sid: &str, contact_id: &str) -> Result<bool>;
    // 按优先级列出学生的联系人
    async fn list_student_contacts(&self, sid: &str) -> Result<Vec<Contact>>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher>;
    async fn get_teacher(&self, tid: &str) -> Result<Option<Teacher>>;
    async fn update_teacher(&self, tid: &str, update: UpdateTeacher) -> Result<Option<Teacher>>;

    /// 管理员管理方法
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin>;
    async fn get_admin(&self, aid: &str) -> Result<Option<Admin>>;
    async fn count_admins(&self) -> Result<u64>;

    /// 联系人管理方法
    // 创建联系人并关联到学生
    async fn create_student_contact(&self, sid: &str, contact: NewContact) -> Result<Contact>;
    async fn get_contact(&self, id: &str) -> Result<Option<Contact>>;
    async fn update_contact(&self, id: &str, update: UpdateContact) -> Result<Option<Contact>>;
    // 删除联系人及其所有学生关联
    async fn delete_contact(&self, id: &str) -> Result<bool>;

    /// 储物柜管理方法
    async fn create_locker(&self, locker_number: &str, combo: &str) -> Result<Locker>;
    async fn get_locker(&self, id: &str) -> Result<Option<Locker>>;
    async fn get_locker_by_number(&self, locker_number: &str) -> Result<Option<Locker>>;
    async fn update_locker_combo(&self, locker_number: &str, combo: &str)
    -> Result<Option<Locker>>;

    /// 头像管理方法
    /// 替换账号头像，旧记录随之删除；账号不存在时返回 `None`
    async fn replace_photo(
        &self,
        owner_role: AccountRole,
        owner_id: &str,
        url: &str,
    ) -> Result<Option<Photo>>;
    async fn get_photo(&self, id: &str) -> Result<Option<Photo>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
