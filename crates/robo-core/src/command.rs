//! 命令类型定义模块
//!
//! 命令串中的每个字符对应一条命令。

/// 单字符机器人命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// 左转（`L`）
    Left,
    /// 右转（`R`）
    Right,
    /// 前进一格（`F`），遇到房间边界时原地不动
    Forward,
}

impl Command {
    /// 从字符解析命令（大小写不敏感）
    ///
    /// 非 `L`/`R`/`F` 的字符返回 `None`。
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'F' => Some(Self::Forward),
            _ => None,
        }
    }

    /// 命令符号（大写）
    pub fn as_char(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Forward => 'F',
        }
    }
}
