//! 角色 ID：6 位数字，首位非 0

use rand::Rng;

pub const IDENTIFIER_LENGTH: usize = 6;

/// 生成一个随机 ID（不检查是否已占用）
pub fn generate_identifier() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..1_000_000u32).to_string()
}

/// 校验 ID 格式
pub fn is_valid_identifier(id: &str) -> bool {
    id.len() == IDENTIFIER_LENGTH
        && id.bytes().all(|b| b.is_ascii_digit())
        && !id.starts_with('0')
}
