//! robo-server 主入口

use anyhow::{Context, Result};
use clap::Parser;
use robo_server::{AppState, Args, router};
use robo_store::MemRobotStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数并合并配置文件
    let args = Args::parse();
    let config = args.resolve()?;

    // 初始化日志（RUST_LOG 优先）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let state = AppState::new(Arc::new(MemRobotStore::new()), config.id_bytes);
    let app = router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("绑定监听地址失败: {}", addr))?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    info!("Server stopped");
    Ok(())
}

/// 等待 Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // 无法监听信号时持续运行
        std::future::pending::<()>().await;
    }
    info!("Received interrupt signal. Shutting down...");
}
