//! 角色 ID 与校内邮箱的分配

use std::sync::Arc;
use tracing::warn;

use crate::errors::{Result, SchoolError};
use crate::storage::Storage;
use crate::utils::school_email::{school_email_candidate, school_email_local_part};
use crate::utils::{generate_identifier, is_valid_identifier};

/// 单次分配最多尝试的次数
pub const MAX_ALLOCATION_ATTEMPTS: u32 = 32;

/// 分配一个三种角色都未使用的 ID
pub async fn allocate_identifier(storage: &Arc<dyn Storage>) -> Result<String> {
    allocate_identifier_with(storage, generate_identifier).await
}

pub(crate) async fn allocate_identifier_with<F>(
    storage: &Arc<dyn Storage>,
    mut generate: F,
) -> Result<String>
where
    F: FnMut() -> String,
{
    for _ in 0..MAX_ALLOCATION_ATTEMPTS {
        let candidate = generate();
        if is_valid_identifier(&candidate) && !storage.identifier_exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    warn!(
        "Identifier allocation gave up after {} attempts",
        MAX_ALLOCATION_ATTEMPTS
    );
    Err(SchoolError::identifier_exhausted(format!(
        "no free identifier after {MAX_ALLOCATION_ATTEMPTS} attempts"
    )))
}

/// 分配校内邮箱，重名时追加序号
pub async fn allocate_school_email(
    storage: &Arc<dyn Storage>,
    first_name: &str,
    last_name: &str,
    domain: &str,
) -> Result<String> {
    let local_part = school_email_local_part(first_name, last_name);
    for n in 1..=MAX_ALLOCATION_ATTEMPTS {
        let candidate = school_email_candidate(&local_part, domain, n);
        if !storage.school_email_exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Err(SchoolError::identifier_exhausted(format!(
        "no free school email for {local_part}@{domain}"
    )))
}
