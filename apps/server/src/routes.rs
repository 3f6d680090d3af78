//! 路由与请求处理器
//!
//! | 方法   | 路径          | 说明           |
//! |--------|---------------|----------------|
//! | POST   | `/robot`      | 创建机器人     |
//! | GET    | `/robot/{id}` | 查询状态       |
//! | POST   | `/robot/{id}` | 执行命令串     |
//! | DELETE | `/robot/{id}` | 从存储中移除   |

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use robo_core::Robot;
use robo_store::random_id;
use std::sync::Arc;
use tracing::{debug, error};

use crate::middleware::{json_content_type, log_request};
use crate::state::AppState;
use crate::wire::{CommandRequest, CreateRequest, ErrorResponse, StatusResponse};

/// 构建带中间件的路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/robot", post(create_robot))
        .route(
            "/robot/{id}",
            get(robot_status).post(command_robot).delete(delete_robot),
        )
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn(json_content_type))
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

async fn create_robot(State(state): State<AppState>, body: Bytes) -> Response {
    let req: CreateRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    // 只取第一个字符，未知朝向按 N 处理
    let Some(heading) = req.direction.chars().next() else {
        return error_response(StatusCode::BAD_REQUEST, "direction must not be empty");
    };

    let robot = match Robot::new(req.room, heading, req.start) {
        Ok(robot) => robot,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let id = match random_id(state.id_bytes) {
        Ok(id) => id,
        Err(e) => {
            error!("Failed to generate robot ID: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        },
    };

    let report = robot.report();
    state.store.put(id.clone(), Arc::new(robot));

    Json(StatusResponse::new(report, id)).into_response()
}

async fn robot_status(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get(&id) {
        Some(robot) => Json(StatusResponse::new(robot.report(), id)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn command_robot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let req = match serde_json::from_slice::<CommandRequest>(&body) {
        Ok(req) if !req.cmd.is_empty() => req,
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    let Some(robot) = state.store.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match robot.execute_commands(&req.cmd) {
        Ok(report) => Json(StatusResponse::new(report, id)).into_response(),
        Err(e) => {
            debug!("Robot {}: {}", id, e);
            // 非法命令之前的部分已生效，响应中带上当前状态
            let report = e.report().unwrap_or_else(|| robot.report());
            (StatusCode::BAD_REQUEST, Json(StatusResponse::new(report, id))).into_response()
        },
    }
}

async fn delete_robot(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
