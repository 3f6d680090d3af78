//! 请求处理器共享状态

use robo_store::{DEFAULT_ID_BYTES, MemRobotStore, RobotStore};
use std::sync::Arc;

/// 每个服务实例一份，通过 axum `State` 传给处理器
#[derive(Clone)]
pub struct AppState {
    /// 机器人存储
    pub store: Arc<dyn RobotStore>,
    /// 新机器人 ID 的随机字节数
    pub id_bytes: usize,
}

impl AppState {
    /// 使用给定存储与 ID 长度创建
    pub fn new(store: Arc<dyn RobotStore>, id_bytes: usize) -> Self {
        Self { store, id_bytes }
    }
}

impl Default for AppState {
    /// 内存存储 + 默认 ID 长度
    fn default() -> Self {
        Self::new(Arc::new(MemRobotStore::new()), DEFAULT_ID_BYTES)
    }
}
