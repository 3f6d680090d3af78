//! # Robo Server
//!
//! 房间网格机器人的 HTTP 服务。
//!
//! ```bash
//! # 启动服务
//! robo-server --port 8080
//!
//! # 创建机器人
//! curl -X POST localhost:8080/robot \
//!      -d '{"direction":"N","room":{"x":5,"y":5},"start":{"x":1,"y":2}}'
//!
//! # 执行命令
//! curl -X POST localhost:8080/robot/<id> -d '{"cmd":"RFRFFRFRF"}'
//!
//! # 查询状态
//! curl localhost:8080/robot/<id>
//! ```

pub mod config;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod wire;

pub use config::{Args, ServerConfig};
pub use routes::router;
pub use state::AppState;
