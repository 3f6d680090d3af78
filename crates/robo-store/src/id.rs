//! 机器人 ID 生成
//!
//! ID 为操作系统随机字节的小写十六进制编码。唯一性是尽力而为的：
//! 存储层不做冲突检测，重复 ID 会直接覆盖旧条目。

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::StoreError;

/// 默认 ID 字节数（编码后 8 个十六进制字符）
pub const DEFAULT_ID_BYTES: usize = 4;

/// 生成 `n_bytes` 字节随机数并编码为 `2 * n_bytes` 个十六进制字符
///
/// # 错误
///
/// - `n_bytes == 0`：[`StoreError::InvalidIdLength`]
/// - 随机数源失败：[`StoreError::IdGeneration`]
pub fn random_id(n_bytes: usize) -> Result<String, StoreError> {
    if n_bytes == 0 {
        return Err(StoreError::InvalidIdLength(n_bytes));
    }

    let mut bytes = vec![0u8; n_bytes];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}
