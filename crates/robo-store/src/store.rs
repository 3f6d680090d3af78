//! 机器人存储
//!
//! `ID -> Arc<Robot>` 映射。存储锁只保护映射本身：
//! 查询返回 `Arc<Robot>` 的克隆后立即释放锁，机器人内部状态由其自身的锁保护，
//! 因此两把锁永远不会同时持有。

use parking_lot::RwLock;
use robo_core::Robot;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 机器人存储接口
///
/// 实现必须线程安全（多个请求处理器会并发调用）。
pub trait RobotStore: Send + Sync {
    /// 查询机器人，不存在时返回 `None`
    fn get(&self, id: &str) -> Option<Arc<Robot>>;

    /// 插入机器人；ID 已存在时静默替换
    fn put(&self, id: String, robot: Arc<Robot>);

    /// 移除机器人并返回它（不存在时返回 `None`）
    fn remove(&self, id: &str) -> Option<Arc<Robot>>;

    /// 当前条目数
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 内存存储（读写锁保护的 HashMap）
///
/// 多个读者可以并发查询，写入与其他所有访问互斥。
#[derive(Debug, Default)]
pub struct MemRobotStore {
    robots: RwLock<HashMap<String, Arc<Robot>>>,
}

impl MemRobotStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }
}

impl RobotStore for MemRobotStore {
    fn get(&self, id: &str) -> Option<Arc<Robot>> {
        self.robots.read().get(id).cloned()
    }

    fn put(&self, id: String, robot: Arc<Robot>) {
        let replaced = self.robots.write().insert(id.clone(), robot);
        if replaced.is_some() {
            debug!("Robot {} replaced", id);
        } else {
            debug!("Robot {} stored", id);
        }
    }

    fn remove(&self, id: &str) -> Option<Arc<Robot>> {
        let removed = self.robots.write().remove(id);
        if removed.is_some() {
            debug!("Robot {} removed", id);
        }
        removed
    }

    fn len(&self) -> usize {
        self.robots.read().len()
    }
}
