//! JSON 请求/响应格式
//!
//! - 状态：`{"direction":"N","x":1,"y":3,"id":"abcd1234"}`
//! - 创建：`{"direction":"N","room":{"x":5,"y":5},"start":{"x":1,"y":2}}`
//! - 命令：`{"cmd":"RFRFFRFRF"}`

use robo_core::{Coordinate, Report, Room};
use serde::{Deserialize, Deserializer, Serialize};

/// 机器人状态响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub direction: String,
    pub x: u64,
    pub y: u64,
    pub id: String,
}

impl StatusResponse {
    pub fn new(report: Report, id: impl Into<String>) -> Self {
        Self {
            direction: report.heading.to_string(),
            x: report.coordinate.x,
            y: report.coordinate.y,
            id: id.into(),
        }
    }
}

/// 创建请求
///
/// `direction` 缺省为 `"N"`；`room` / `start` 缺省为 `{0, 0}`。
/// 字段为 `null` 时与缺省相同。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    #[serde(default = "default_direction", deserialize_with = "null_as_north")]
    pub direction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room: Room,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: Coordinate,
}

fn default_direction() -> String {
    "N".to_string()
}

fn null_as_north<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_direction))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 命令请求
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub cmd: String,
}

/// 错误响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
