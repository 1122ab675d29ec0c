//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounts;
mod admins;
mod contacts;
mod lockers;
mod photos;
mod students;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config.database.pool_size, config.database.timeout)
                .await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::migrate(&db).await?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite 存储（单连接，供测试使用）
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        let db = Self::connect_sqlite("sqlite::memory:", 1, 5).await?;
        Self::migrate(&db).await?;
        Ok(Self { db })
    }

    /// 运行迁移
    async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .map_err(|e| SchoolError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        max_connections: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 唯一约束冲突转为 Conflict，其余保持为数据库操作错误
pub(crate) fn map_write_error(err: sea_orm::DbErr, context: &str) -> SchoolError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
            SchoolError::conflict(format!("{context}: {detail}"))
        }
        _ => SchoolError::database_operation(format!("{context}: {err}")),
    }
}

// Storage trait 实现
use crate::models::{
    accounts::{AccountCredentials, AccountRole},
    admins::entities::{Admin, NewAdmin},
    contacts::entities::{Contact, NewContact, UpdateContact},
    lockers::entities::Locker,
    photos::entities::Photo,
    students::entities::{NewStudent, Student, UpdateStudent},
    teachers::entities::{NewTeacher, Teacher, UpdateTeacher},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn identifier_exists(&self, id: &str) -> Result<bool> {
        self.identifier_exists_impl(id).await
    }

    async fn school_email_exists(&self, school_email: &str) -> Result<bool> {
        self.school_email_exists_impl(school_email).await
    }

    async fn get_account(
        &self,
        role: AccountRole,
        id: &str,
    ) -> Result<Option<AccountCredentials>> {
        self.get_account_impl(role, id).await
    }

    async fn update_login_state(
        &self,
        role: AccountRole,
        id: &str,
        attempts: i32,
        disabled: bool,
    ) -> Result<bool> {
        self.update_login_state_impl(role, id, attempts, disabled)
            .await
    }

    async fn update_password(
        &self,
        role: AccountRole,
        id: &str,
        password_hash: &str,
        temp_password: bool,
    ) -> Result<bool> {
        self.update_password_impl(role, id, password_hash, temp_password)
            .await
    }

    // 学生模块
    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student(&self, sid: &str) -> Result<Option<Student>> {
        self.get_student_impl(sid).await
    }

    async fn update_student(&self, sid: &str, update: UpdateStudent) -> Result<Option<Student>> {
        self.update_student_impl(sid, update).await
    }

    async fn get_student_by_locker(&self, locker_id: &str) -> Result<Option<Student>> {
        self.get_student_by_locker_impl(locker_id).await
    }

    async fn link_contact(&self, sid: &str, contact_id: &str) -> Result<bool> {
        self.link_contact_impl(sid, contact_id).await
    }

    async fn unlink_contact(&self, sid: &str, contact_id: &str) -> Result<bool> {
        self.unlink_contact_impl(sid, contact_id).await
    }

    async fn list_student_contacts(&self, sid: &str) -> Result<Vec<Contact>> {
        self.list_student_contacts_impl(sid).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher(&self, tid: &str) -> Result<Option<Teacher>> {
        self.get_teacher_impl(tid).await
    }

    async fn update_teacher(&self, tid: &str, update: UpdateTeacher) -> Result<Option<Teacher>> {
        self.update_teacher_impl(tid, update).await
    }

    // 管理员模块
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin> {
        self.create_admin_impl(admin).await
    }

    async fn get_admin(&self, aid: &str) -> Result<Option<Admin>> {
        self.get_admin_impl(aid).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    // 联系人模块
    async fn create_student_contact(&self, sid: &str, contact: NewContact) -> Result<Contact> {
        self.create_student_contact_impl(sid, contact).await
    }

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        self.get_contact_impl(id).await
    }

    async fn update_contact(&self, id: &str, update: UpdateContact) -> Result<Option<Contact>> {
        self.update_contact_impl(id, update).await
    }

    async fn delete_contact(&self, id: &str) -> Result<bool> {
        self.delete_contact_impl(id).await
    }

    // 储物柜模块
    async fn create_locker(&self, locker_number: &str, combo: &str) -> Result<Locker> {
        self.create_locker_impl(locker_number, combo).await
    }

    async fn get_locker(&self, id: &str) -> Result<Option<Locker>> {
        self.get_locker_impl(id).await
    }

    async fn get_locker_by_number(&self, locker_number: &str) -> Result<Option<Locker>> {
        self.get_locker_by_number_impl(locker_number).await
    }

    async fn update_locker_combo(
        &self,
        locker_number: &str,
        combo: &str,
    ) -> Result<Option<Locker>> {
        self.update_locker_combo_impl(locker_number, combo).await
    }

    // 头像模块
    async fn replace_photo(
        &self,
        owner_role: AccountRole,
        owner_id: &str,
        url: &str,
    ) -> Result<Option<Photo>> {
        self.replace_photo_impl(owner_role, owner_id, url).await
    }

    async fn get_photo(&self, id: &str) -> Result<Option<Photo>> {
        self.get_photo_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SchoolError;
    use crate::models::common::PostalAddress;
    use sea_orm::{EntityTrait, PaginatorTrait};

    fn new_student(sid: &str, school_email: &str) -> NewStudent {
        NewStudent {
            sid: sid.to_string(),
            first_name: "Ada".into(),
            middle_name: None,
            last_name: "Lovelace".into(),
            age: 15,
            dob: "2011-12-10".into(),
            email: "ada@example.com".into(),
            address: PostalAddress::default(),
            grade_level: 10,
            yog: 2029,
            school_email: school_email.to_string(),
            password_hash: "hash".into(),
        }
    }

    fn new_contact() -> NewContact {
        NewContact {
            first_name: "Anne".into(),
            middle_name: None,
            last_name: "Byron".into(),
            home_phone: "5550100".into(),
            work_phone: None,
            email: "anne@example.com".into(),
            address: PostalAddress::default(),
            relation: "mother".into(),
            priority: 1,
        }
    }

    #[tokio::test]
    async fn test_identifier_exists_across_roles() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_student(new_student("123456", "ada.lovelace@school.test"))
            .await
            .unwrap();
        storage
            .create_admin(NewAdmin {
                aid: "654321".into(),
                first_name: "Root".into(),
                last_name: "Admin".into(),
                dob: "1970-01-01".into(),
                email: "root@example.com".into(),
                password_hash: "hash".into(),
                temp_password: false,
            })
            .await
            .unwrap();

        assert!(storage.identifier_exists("123456").await.unwrap());
        assert!(storage.identifier_exists("654321").await.unwrap());
        assert!(!storage.identifier_exists("111111").await.unwrap());
        assert!(
            storage
                .school_email_exists("ada.lovelace@school.test")
                .await
                .unwrap()
        );
        assert_eq!(storage.count_admins().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_state_and_password_update() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_student(new_student("123456", "a@school.test"))
            .await
            .unwrap();

        assert!(
            storage
                .update_login_state(AccountRole::Student, "123456", 3, false)
                .await
                .unwrap()
        );
        let account = storage
            .get_account(AccountRole::Student, "123456")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.status.attempts, 3);
        assert!(account.status.temp_password);

        storage
            .update_password(AccountRole::Student, "123456", "new-hash", false)
            .await
            .unwrap();
        let account = storage
            .get_account(AccountRole::Student, "123456")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.password_hash, "new-hash");
        assert!(!account.status.temp_password);

        // 角色不匹配时查不到
        assert!(
            storage
                .get_account(AccountRole::Teacher, "123456")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_locker_is_assigned_once() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_student(new_student("123456", "a@school.test"))
            .await
            .unwrap();
        storage
            .create_student(new_student("234567", "b@school.test"))
            .await
            .unwrap();
        let locker = storage.create_locker("101", "12-34-56").await.unwrap();

        storage
            .update_student(
                "123456",
                UpdateStudent {
                    locker: Some(locker.id.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let err = storage
            .update_student(
                "234567",
                UpdateStudent {
                    locker: Some(locker.id.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolError::Conflict(_)));

        let owner = storage
            .get_student_by_locker(&locker.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(owner.sid, "123456");

        // 柜号唯一
        let err = storage.create_locker("101", "00-00-00").await.unwrap_err();
        assert!(matches!(err, SchoolError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_replace_photo_removes_previous() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_student(new_student("123456", "a@school.test"))
            .await
            .unwrap();

        let first = storage
            .replace_photo(AccountRole::Student, "123456", "https://cdn.test/a.png")
            .await
            .unwrap()
            .unwrap();
        let second = storage
            .replace_photo(AccountRole::Student, "123456", "https://cdn.test/b.png")
            .await
            .unwrap()
            .unwrap();

        let student = storage.get_student("123456").await.unwrap().unwrap();
        assert_eq!(student.photo.as_deref(), Some(second.id.as_str()));
        assert!(storage.get_photo(&first.id).await.unwrap().is_none());
        assert_eq!(
            storage.get_photo(&second.id).await.unwrap().unwrap().url,
            "https://cdn.test/b.png"
        );

        // 账号不存在时不写入
        assert!(
            storage
                .replace_photo(AccountRole::Teacher, "123456", "https://cdn.test/c.png")
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(
            crate::entity::photos::Entity::find()
                .count(&storage.db)
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_contact_links_follow_deletion() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_student(new_student("123456", "a@school.test"))
            .await
            .unwrap();
        storage
            .create_student(new_student("234567", "b@school.test"))
            .await
            .unwrap();

        let contact = storage
            .create_student_contact("123456", new_contact())
            .await
            .unwrap();
        assert!(storage.link_contact("234567", &contact.id).await.unwrap());
        assert!(!storage.link_contact("234567", &contact.id).await.unwrap());
        assert_eq!(
            storage.list_student_contacts("234567").await.unwrap().len(),
            1
        );

        assert!(storage.delete_contact(&contact.id).await.unwrap());
        assert!(storage.list_student_contacts("123456").await.unwrap().is_empty());
        assert!(storage.list_student_contacts("234567").await.unwrap().is_empty());
        assert!(!storage.delete_contact(&contact.id).await.unwrap());
    }
}
