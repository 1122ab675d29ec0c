//! 邮件发送
//!
//! 临时密码通过邮件发给账号的个人邮箱。发送失败直接向上返回错误，不做重试。

mod log;
#[cfg(test)]
mod memory;
mod smtp;

pub use log::LogMailer;
#[cfg(test)]
pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use crate::models::accounts::AccountRole;

/// 待发送的邮件
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutboundMail) -> Result<()>;
}

pub(crate) const TEMP_PASSWORD_PREFIX: &str = "Temporary password: ";

/// 临时密码通知邮件
pub fn temp_password_mail(
    to: &str,
    first_name: &str,
    role: AccountRole,
    id: &str,
    password: &str,
) -> OutboundMail {
    let system_name = &AppConfig::get().app.system_name;
    OutboundMail {
        to: to.to_string(),
        subject: format!("{system_name}: your temporary password"),
        body: format!(
            "Hello {first_name},\n\n\
             A temporary password has been issued for {role} account {id}.\n\n\
             {TEMP_PASSWORD_PREFIX}{password}\n\n\
             Sign in with it and choose a new password right away.\n"
        ),
    }
}

/// 根据配置创建邮件发送器
pub fn create_mailer() -> Result<Arc<dyn Mailer>> {
    let config = AppConfig::get();
    match config.mail.transport.as_str() {
        "smtp" => Ok(Arc::new(SmtpMailer::new(&config.mail)?)),
        "log" => {
            if config.is_production() {
                tracing::warn!("Mail transport is 'log' in production, no mail will be delivered");
            }
            Ok(Arc::new(LogMailer))
        }
        other => Err(SchoolError::mail_transport(format!(
            "Unknown mail transport: {other}. Supported: smtp, log"
        ))),
    }
}
