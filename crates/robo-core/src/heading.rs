//! 朝向与罗盘
//!
//! 机器人只有四个离散朝向，按固定的循环顺序 `[N, E, S, W]` 排列，
//! 左转/右转即在该顺序上做模 4 的索引运算。

use std::fmt;

/// 循环顺序中的朝向数量
const HEADING_COUNT: u8 = 4;

/// 机器人朝向
///
/// 判别值即循环顺序 `[N, E, S, W]` 中的索引。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Heading {
    /// 北（默认）
    #[default]
    N = 0,
    /// 东
    E = 1,
    /// 南
    S = 2,
    /// 西
    W = 3,
}

impl Heading {
    /// 全部朝向，按循环顺序排列
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    /// 从字符严格解析朝向（大小写不敏感）
    ///
    /// 无法识别的字符返回 `None`。需要宽松行为时使用 [`Compass::new`]。
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::N),
            'E' => Some(Self::E),
            'S' => Some(Self::S),
            'W' => Some(Self::W),
            _ => None,
        }
    }

    /// 从循环索引转换（自动取模）
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % HEADING_COUNT) as usize]
    }

    /// 循环索引
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 大写朝向符号
    pub fn as_char(self) -> char {
        match self {
            Self::N => 'N',
            Self::E => 'E',
            Self::S => 'S',
            Self::W => 'W',
        }
    }

    /// 右侧相邻朝向：N -> E -> S -> W -> N
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// 左侧相邻朝向：N -> W -> S -> E -> N
    pub fn left(self) -> Self {
        Self::from_index(self.index() + HEADING_COUNT - 1)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Heading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Heading {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Heading::from_char(c).ok_or_else(|| {
            serde::de::Error::invalid_value(serde::de::Unexpected::Char(c), &"one of N, E, S, W")
        })
    }
}

/// 罗盘
///
/// 持有机器人当前朝向。创建时对输入采取宽松策略：
/// 无法识别的朝向字符静默回落到 `N`，不会报错。
/// 这是有意为之的容错行为，不是输入校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compass {
    heading: Heading,
}

impl Compass {
    /// 创建罗盘（大小写不敏感，未知字符默认为 `N`）
    pub fn new(c: char) -> Self {
        Self {
            heading: Heading::from_char(c).unwrap_or_default(),
        }
    }

    /// 当前朝向
    pub fn current(&self) -> Heading {
        self.heading
    }

    /// 右转 90°
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// 左转 90°
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }
}

impl From<Heading> for Compass {
    fn from(heading: Heading) -> Self {
        Self { heading }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_new() {
        let cases = [
            ('N', Heading::N),
            ('E', Heading::E),
            ('S', Heading::S),
            ('W', Heading::W),
            ('A', Heading::N),
            ('n', Heading::N),
            ('e', Heading::E),
            ('s', Heading::S),
            ('w', Heading::W),
        ];

        for (input, want) in cases {
            assert_eq!(Compass::new(input).current(), want, "Compass::new({input:?})");
        }
    }

    #[test]
    fn test_compass_turn_right() {
        let cases = [
            ('N', Heading::E),
            ('E', Heading::S),
            ('S', Heading::W),
            ('W', Heading::N),
            ('A', Heading::E),
            ('w', Heading::N),
        ];

        for (input, want) in cases {
            let mut compass = Compass::new(input);
            compass.turn_right();
            assert_eq!(compass.current(), want, "turn_right from {input:?}");
        }
    }

    #[test]
    fn test_compass_turn_left() {
        let cases = [
            ('N', Heading::W),
            ('E', Heading::N),
            ('S', Heading::E),
            ('W', Heading::S),
            ('A', Heading::W),
            ('e', Heading::N),
        ];

        for (input, want) in cases {
            let mut compass = Compass::new(input);
            compass.turn_left();
            assert_eq!(compass.current(), want, "turn_left from {input:?}");
        }
    }

    #[test]
    fn test_heading_from_char_is_strict() {
        assert_eq!(Heading::from_char('s'), Some(Heading::S));
        assert_eq!(Heading::from_char('x'), None);
        // 非 ASCII 字符不做大小写折叠
        assert_eq!(Heading::from_char('Ñ'), None);
    }

    #[test]
    fn test_heading_index_roundtrip() {
        for heading in Heading::ALL {
            assert_eq!(Heading::from_index(heading.index()), heading);
        }
        assert_eq!(Heading::from_index(5), Heading::E); // 取模
    }

    #[test]
    fn test_heading_display() {
        assert_eq!(Heading::W.to_string(), "W");
        assert_eq!(format!("{}", Compass::new('s').current()), "S");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_heading_serde() {
        assert_eq!(serde_json::to_string(&Heading::E).unwrap(), "\"E\"");
        let heading: Heading = serde_json::from_str("\"w\"").unwrap();
        assert_eq!(heading, Heading::W);
        assert!(serde_json::from_str::<Heading>("\"Q\"").is_err());
    }
}
