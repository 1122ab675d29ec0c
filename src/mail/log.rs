use tracing::info;

use super::{Mailer, OutboundMail};
use crate::errors::Result;

/// 开发环境用：把邮件内容写入日志而不真正发送
pub struct LogMailer;

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutboundMail) -> Result<()> {
        info!(
            to = %mail.to,
            subject = %mail.subject,
            "Outbound mail (log transport):\n{}",
            mail.body
        );
        Ok(())
    }
}
