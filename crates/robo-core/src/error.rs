//! Robot 错误类型定义

use crate::geometry::{Coordinate, Room};
use crate::robot::Report;
use thiserror::Error;

/// Robot 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    /// 起点坐标不在房间内（创建时）
    #[error("the robot coordinates {coordinate} are outside the room {room}")]
    OutOfBounds { coordinate: Coordinate, room: Room },

    /// 命令串中出现无法识别的字符（执行时）
    ///
    /// 之前的合法命令已生效且不会回滚，`report` 为遇到该字符前的状态。
    #[error("invalid command {command:?} at position {position}")]
    InvalidCommand {
        /// 无法识别的字符
        command: char,
        /// 字符在命令串中的位置（从 0 开始，按字符计）
        position: usize,
        /// 停止处理时机器人的状态
        report: Report,
    },
}

impl RobotError {
    /// 错误发生时机器人的状态（仅 `InvalidCommand` 携带）
    pub fn report(&self) -> Option<Report> {
        match self {
            Self::InvalidCommand { report, .. } => Some(*report),
            Self::OutOfBounds { .. } => None,
        }
    }
}
