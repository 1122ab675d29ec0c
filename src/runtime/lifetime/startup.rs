use crate::config::AppConfig;
use crate::mail::{Mailer, create_mailer};
use crate::models::admins::entities::NewAdmin;
use crate::services::identifiers::allocate_identifier;
use crate::storage::Storage;
use crate::utils::password::{generate_password, hash_password};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn Mailer>,
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何管理员，则创建一个
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_admins().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} admin(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No admins found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count admins: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let (password, temp_password) = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) => (password, false),
        Err(_) => {
            let pwd = generate_password(16, 2, 2, 2);
            warn!("==========================================================");
            warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", pwd);
            warn!("  Please save this password or set ADMIN_PASSWORD env var");
            warn!("==========================================================");
            (pwd, true)
        }
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let aid = match allocate_identifier(storage).await {
        Ok(aid) => aid,
        Err(e) => {
            warn!("Failed to allocate admin id: {}, skipping admin seed", e);
            return;
        }
    };

    let admin = NewAdmin {
        aid,
        first_name: "System".to_string(),
        last_name: "Administrator".to_string(),
        dob: String::new(),
        email: format!("admin@{}", AppConfig::get().school.email_domain),
        password_hash,
        temp_password,
    };

    match storage.create_admin(admin).await {
        Ok(admin) => {
            warn!("Default admin account created (aid: {})", admin.aid);
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、邮件发送器和默认管理员
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    let mailer = create_mailer().expect("Failed to create mail transport");
    warn!(
        "Mail transport initialized ({})",
        AppConfig::get().mail.transport
    );

    StartupContext { storage, mailer }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    #[tokio::test]
    async fn test_seed_admin_only_once() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::new_in_memory().await.unwrap());

        seed_admin(&storage).await;
        assert_eq!(storage.count_admins().await.unwrap(), 1);

        // 已有管理员时不再创建
        seed_admin(&storage).await;
        assert_eq!(storage.count_admins().await.unwrap(), 1);
    }
}
