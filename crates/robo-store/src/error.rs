//! 存储层错误类型定义

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 操作系统随机数源不可用
    #[error("ID generation failed: {0}")]
    IdGeneration(#[from] rand::Error),

    /// ID 字节数为 0
    #[error("Invalid ID length: {0} bytes (must be at least 1)")]
    InvalidIdLength(usize),
}
