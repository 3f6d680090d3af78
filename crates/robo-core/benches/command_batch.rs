//! 命令批次执行性能基准测试
//!
//! 覆盖整批持锁执行、边界截断以及读锁快照三条路径。

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use robo_core::{Coordinate, Robot, Room};

fn bench_execute_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_commands");

    for len in [16usize, 256, 4096] {
        let cmds: String = "RFLFFLRF".chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &cmds, |b, cmds| {
            let robot = Robot::new(Room::new(64, 64), 'N', Coordinate::new(32, 32)).unwrap();
            b.iter(|| robot.execute_commands(black_box(cmds)).unwrap());
        });
    }

    group.finish();
}

fn bench_clamped_forward(c: &mut Criterion) {
    // 1x1 房间中每个 F 都会被截断
    let robot = Robot::new(Room::new(1, 1), 'E', Coordinate::new(0, 0)).unwrap();
    let cmds = "F".repeat(1024);
    c.bench_function("clamped_forward_1024", |b| {
        b.iter(|| robot.execute_commands(black_box(&cmds)).unwrap())
    });
}

fn bench_report(c: &mut Criterion) {
    let robot = Robot::new(Room::new(5, 5), 'N', Coordinate::new(1, 2)).unwrap();
    c.bench_function("robot_report", |b| b.iter(|| black_box(robot.report())));
}

criterion_group!(
    benches,
    bench_execute_commands,
    bench_clamped_forward,
    bench_report
);
criterion_main!(benches);
