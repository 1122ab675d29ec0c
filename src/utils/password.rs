use crate::config::AppConfig;
use crate::errors::SchoolError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::{Rng, seq::SliceRandom};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+?";

/// 生成随机密码
///
/// 保证至少包含 `min_special` 个特殊字符、`min_digits` 个数字和 `min_upper` 个大写字母，
/// 其余位置从全部字符集中随机抽取，最后整体打乱。最低要求之和超过 `length` 时以之和为准。
pub fn generate_password(
    length: usize,
    min_special: usize,
    min_digits: usize,
    min_upper: usize,
) -> String {
    let mut rng = rand::rng();
    let mut pick = |set: &[u8]| set[rng.random_range(0..set.len())] as char;

    let mut chars: Vec<char> = Vec::with_capacity(length);
    chars.extend((0..min_special).map(|_| pick(SPECIAL)));
    chars.extend((0..min_digits).map(|_| pick(DIGITS)));
    chars.extend((0..min_upper).map(|_| pick(UPPERCASE)));

    let all = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();
    while chars.len() < length {
        chars.push(pick(&all));
    }

    chars.shuffle(&mut rand::rng());
    chars.into_iter().collect()
}

/// 按配置长度生成临时密码
pub fn generate_temp_password() -> String {
    generate_password(AppConfig::get().auth.temp_password_length, 1, 1, 1)
}

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, SchoolError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| SchoolError::password_hashing(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SchoolError::password_hashing(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
