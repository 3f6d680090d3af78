//! # Robo Core
//!
//! 房间网格机器人的核心状态机（无 IO 依赖）
//!
//! ## 模块
//!
//! - `heading`: 朝向与罗盘（`[N, E, S, W]` 循环顺序）
//! - `geometry`: 房间尺寸与坐标
//! - `command`: 单字符命令
//! - `robot`: 机器人状态机（自带读写锁）
//! - `error`: 错误类型
//!
//! ## 使用示例
//!
//! ```rust
//! use robo_core::{Coordinate, Heading, Robot, Room};
//!
//! let robot = Robot::new(Room::new(5, 5), 'N', Coordinate::new(1, 2)).unwrap();
//! let report = robot.execute_commands("RFRFFRFRF").unwrap();
//!
//! assert_eq!(report.heading, Heading::N);
//! assert_eq!(report.coordinate, Coordinate::new(1, 3));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - 为 `Heading`、`Room`、`Coordinate` 提供序列化支持

pub mod command;
mod error;
pub mod geometry;
pub mod heading;
pub mod robot;

// 重新导出常用类型
pub use command::Command;
pub use error::RobotError;
pub use geometry::{Coordinate, Room};
pub use heading::{Compass, Heading};
pub use robot::{Report, Robot};
