//! Robot - 房间内的机器人状态机
//!
//! 状态为 `(朝向, 坐标)`，只能通过单字符命令迁移：
//!
//! - `L` / `R`：左转 / 右转
//! - `F`：沿当前朝向前进一格；会越过房间边界时静默忽略（不是错误）
//! - 其他字符：立即停止处理并返回 [`RobotError::InvalidCommand`]，
//!   之前已执行的命令不回滚
//!
//! # 并发
//!
//! 每个 `Robot` 自带一把读写锁：
//!
//! - [`Robot::execute_commands`] 在整个命令串执行期间持有写锁，
//!   并发的两批命令只会表现为某种先后顺序，不会交错
//! - [`Robot::report`] 持有读锁
//!
//! 写锁内部通过 `RobotState::report`（不加锁）取结果，避免自死锁。

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::command::Command;
use crate::error::RobotError;
use crate::geometry::{Coordinate, Room};
use crate::heading::{Compass, Heading};

/// 机器人状态快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Report {
    /// 当前朝向
    pub heading: Heading,
    /// 当前坐标
    pub coordinate: Coordinate,
}

/// 受锁保护的可变部分
#[derive(Debug, Clone, Copy)]
struct RobotState {
    compass: Compass,
    coordinate: Coordinate,
}

impl RobotState {
    /// 不加锁的状态读取，仅供已持有锁的代码使用
    fn report(&self) -> Report {
        Report {
            heading: self.compass.current(),
            coordinate: self.coordinate,
        }
    }

    fn apply(&mut self, command: Command, room: Room) {
        match command {
            Command::Left => self.compass.turn_left(),
            Command::Right => self.compass.turn_right(),
            Command::Forward => {
                let heading = self.compass.current();
                match self.coordinate.step(heading, room) {
                    Some(next) => self.coordinate = next,
                    None => trace!(
                        "Forward blocked at {} facing {} in room {}",
                        self.coordinate, heading, room
                    ),
                }
            },
        }
    }
}

/// 机器人
///
/// 房间边界在创建时确定且不再改变；朝向与坐标只能通过
/// [`execute_commands`](Self::execute_commands) 修改。
#[derive(Debug)]
pub struct Robot {
    room: Room,
    state: RwLock<RobotState>,
}

impl Robot {
    /// 创建机器人
    ///
    /// 朝向字符按 [`Compass::new`] 的宽松规则解析（未知字符默认为 `N`）。
    ///
    /// # 错误
    ///
    /// `start.x >= room.width` 或 `start.y >= room.height` 时返回
    /// [`RobotError::OutOfBounds`]。
    pub fn new(room: Room, heading: char, start: Coordinate) -> Result<Self, RobotError> {
        Self::with_compass(room, Compass::new(heading), start)
    }

    /// 使用已解析的罗盘创建机器人
    pub fn with_compass(
        room: Room,
        compass: Compass,
        start: Coordinate,
    ) -> Result<Self, RobotError> {
        if !room.contains(start) {
            return Err(RobotError::OutOfBounds {
                coordinate: start,
                room,
            });
        }

        debug!(
            "Robot created in room {} at {} facing {}",
            room,
            start,
            compass.current()
        );

        Ok(Self {
            room,
            state: RwLock::new(RobotState {
                compass,
                coordinate: start,
            }),
        })
    }

    /// 房间边界
    pub fn room(&self) -> Room {
        self.room
    }

    /// 执行命令串并返回最终状态
    ///
    /// 命令从左到右逐个执行，整批期间持有写锁。
    /// 空串是合法的空操作。
    ///
    /// # 错误
    ///
    /// 遇到非 `L`/`R`/`F` 字符时立即停止，返回 [`RobotError::InvalidCommand`]，
    /// 其中携带停止前的状态；已执行的命令不会回滚。
    pub fn execute_commands(&self, commands: &str) -> Result<Report, RobotError> {
        let mut state = self.state.write();

        for (position, c) in commands.chars().enumerate() {
            let Some(command) = Command::from_char(c) else {
                let report = state.report();
                debug!(
                    "Invalid command {:?} at position {}, stopping batch at {} facing {}",
                    c, position, report.coordinate, report.heading
                );
                return Err(RobotError::InvalidCommand {
                    command: c,
                    position,
                    report,
                });
            };
            state.apply(command, self.room);
        }

        Ok(state.report())
    }

    /// 读取当前状态（读锁）
    pub fn report(&self) -> Report {
        self.state.read().report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot(room: Room, heading: char, start: Coordinate) -> Robot {
        Robot::new(room, heading, start).unwrap()
    }

    #[test]
    fn test_robot_single_commands() {
        let cases = [
            ("L", Heading::W, Coordinate::new(1, 1)),
            ("R", Heading::E, Coordinate::new(1, 1)),
            ("F", Heading::N, Coordinate::new(1, 0)),
        ];

        for (cmd, want_heading, want_coordinate) in cases {
            let r = robot(Room::new(3, 3), 'N', Coordinate::new(1, 1));
            let report = r.execute_commands(cmd).unwrap();
            assert_eq!(report.heading, want_heading, "cmd {cmd}");
            assert_eq!(report.coordinate, want_coordinate, "cmd {cmd}");
            assert_eq!(r.report(), report);
        }
    }

    #[test]
    fn test_robot_command_sequences() {
        let cases = [
            ((5, 5), 'N', (1, 2), "RFRFFRFRF", Heading::N, (1, 3)),
            ((5, 5), 'E', (0, 0), "RFLFFLRF", Heading::E, (3, 1)),
            ((1, 1), 'E', (0, 0), "RFLFFLRF", Heading::E, (0, 0)),
        ];

        for ((w, h), heading, (x, y), cmd, want_heading, (want_x, want_y)) in cases {
            let room = Room::new(w, h);
            let r = robot(room, heading, Coordinate::new(x, y));
            let report = r.execute_commands(cmd).unwrap();
            assert_eq!(
                report,
                Report {
                    heading: want_heading,
                    coordinate: Coordinate::new(want_x, want_y)
                },
                "cmd {cmd} in room {room}"
            );
        }
    }

    #[test]
    fn test_lowercase_commands() {
        let r = robot(Room::new(5, 5), 'n', Coordinate::new(1, 2));
        let report = r.execute_commands("rfrffrfrf").unwrap();
        assert_eq!(report.heading, Heading::N);
        assert_eq!(report.coordinate, Coordinate::new(1, 3));
    }

    #[test]
    fn test_invalid_command_stops_batch() {
        let r = robot(Room::new(5, 5), 'N', Coordinate::new(1, 2));
        let err = r.execute_commands("RFRFFRFRFAFFFF").unwrap_err();

        let expected = Report {
            heading: Heading::N,
            coordinate: Coordinate::new(1, 3),
        };
        assert_eq!(
            err,
            RobotError::InvalidCommand {
                command: 'A',
                position: 9,
                report: expected,
            }
        );
        // 前缀命令已生效，后续 F 未执行
        assert_eq!(r.report(), expected);
    }

    #[test]
    fn test_invalid_first_command_leaves_state() {
        let r = robot(Room::new(3, 3), 'S', Coordinate::new(2, 2));
        let err = r.execute_commands("xL").unwrap_err();
        assert_eq!(err.report(), Some(r.report()));
        assert_eq!(r.report().heading, Heading::S);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let r = robot(Room::new(3, 3), 'W', Coordinate::new(0, 2));
        let report = r.execute_commands("").unwrap();
        assert_eq!(report.heading, Heading::W);
        assert_eq!(report.coordinate, Coordinate::new(0, 2));
    }

    #[test]
    fn test_state_persists_across_batches() {
        let r = robot(Room::new(5, 5), 'E', Coordinate::new(0, 0));
        r.execute_commands("FF").unwrap();
        let report = r.execute_commands("RF").unwrap();
        assert_eq!(report.heading, Heading::S);
        assert_eq!(report.coordinate, Coordinate::new(2, 1));
    }

    #[test]
    fn test_new_robot() {
        let r = Robot::new(Room::new(3, 3), 'N', Coordinate::new(1, 1)).unwrap();
        assert_eq!(r.room(), Room::new(3, 3));
        assert_eq!(
            r.report(),
            Report {
                heading: Heading::N,
                coordinate: Coordinate::new(1, 1)
            }
        );
    }

    #[test]
    fn test_new_robot_unknown_heading_defaults_to_north() {
        let r = Robot::new(Room::new(3, 3), '?', Coordinate::new(0, 0)).unwrap();
        assert_eq!(r.report().heading, Heading::N);
    }

    #[test]
    fn test_new_robot_out_of_bounds() {
        let cases = [
            (Room::new(1, 1), Coordinate::new(1, 1)),
            (Room::new(3, 3), Coordinate::new(3, 0)),
            (Room::new(3, 3), Coordinate::new(0, 3)),
            (Room::new(0, 0), Coordinate::new(0, 0)),
        ];

        for (room, start) in cases {
            let err = Robot::new(room, 'N', start).unwrap_err();
            assert_eq!(
                err,
                RobotError::OutOfBounds {
                    coordinate: start,
                    room
                }
            );
        }
    }

    #[test]
    fn test_robot_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Robot>();
    }
}
