//! # Robo Store
//!
//! 线程安全的机器人注册表与 ID 生成
//!
//! 存储对象需显式创建并传给请求处理器（每个服务实例一个），不使用全局变量。
//!
//! ```rust
//! use robo_core::{Coordinate, Robot, Room};
//! use robo_store::{MemRobotStore, RobotStore, random_id};
//! use std::sync::Arc;
//!
//! let store = MemRobotStore::new();
//! let id = random_id(4).unwrap();
//! let robot = Robot::new(Room::new(5, 5), 'N', Coordinate::new(1, 2)).unwrap();
//! store.put(id.clone(), Arc::new(robot));
//!
//! assert!(store.get(&id).is_some());
//! ```

mod error;
pub mod id;
pub mod store;

pub use error::StoreError;
pub use id::{DEFAULT_ID_BYTES, random_id};
pub use store::{MemRobotStore, RobotStore};
