use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Mailer, OutboundMail, TEMP_PASSWORD_PREFIX};
use crate::errors::{Result, SchoolError};

/// 测试用：记录所有邮件，可模拟发送失败
#[derive(Default)]
pub struct MemoryMailer {
    outbox: Mutex<Vec<OutboundMail>>,
    failing: AtomicBool,
}

impl MemoryMailer {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutboundMail> {
        self.outbox.lock().map(|o| o.clone()).unwrap_or_default()
    }

    /// 从最近一封发往 `to` 的邮件中取出临时密码
    pub fn last_password_for(&self, to: &str) -> Option<String> {
        self.sent()
            .into_iter()
            .rev()
            .find(|m| m.to == to)
            .and_then(|m| {
                m.body
                    .lines()
                    .find_map(|l| l.strip_prefix(TEMP_PASSWORD_PREFIX))
                    .map(str::to_string)
            })
    }
}

#[async_trait::async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, mail: OutboundMail) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SchoolError::mail_transport("connection refused"));
        }
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(mail);
        }
        Ok(())
    }
}
