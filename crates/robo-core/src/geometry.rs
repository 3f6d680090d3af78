//! 房间与坐标
//!
//! 房间左上角为原点 `(0, 0)`，`x` 向东增长，`y` 向南增长。

use crate::heading::Heading;
use std::fmt;

/// 房间尺寸（机器人活动的边界，创建后不可变）
///
/// 尺寸是否为正由调用方负责；`0` 宽或 `0` 高的房间不会报错，
/// 只是任何起点坐标都会被判定为越界。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Room {
    /// 宽度（x 方向格数）
    #[cfg_attr(feature = "serde", serde(rename = "x"))]
    pub width: u64,
    /// 高度（y 方向格数）
    #[cfg_attr(feature = "serde", serde(rename = "y"))]
    pub height: u64,
}

impl Room {
    /// 创建房间
    pub const fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// 坐标是否严格位于房间内（`x < width && y < height`）
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 机器人在房间中的格子坐标
///
/// 反序列化时缺失的分量取 `0`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Coordinate {
    pub x: u64,
    pub y: u64,
}

impl Coordinate {
    /// 创建坐标
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// 沿 `heading` 前进一格后的坐标
    ///
    /// 目标格位于 `room` 之外时返回 `None`（调用方据此原地不动）。
    pub fn step(self, heading: Heading, room: Room) -> Option<Self> {
        let Self { x, y } = self;
        match heading {
            Heading::N => y.checked_sub(1).map(|y| Self { x, y }),
            Heading::S => y.checked_add(1).filter(|&y| y < room.height).map(|y| Self { x, y }),
            Heading::E => x.checked_add(1).filter(|&x| x < room.width).map(|x| Self { x, y }),
            Heading::W => x.checked_sub(1).map(|x| Self { x, y }),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
