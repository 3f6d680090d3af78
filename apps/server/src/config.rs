//! 服务配置
//!
//! 优先级：命令行参数 > TOML 配置文件 > 默认值。
//!
//! ```toml
//! addr = "127.0.0.1"
//! port = 8080
//! id_bytes = 4
//! log_filter = "robo_server=info"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use robo_store::DEFAULT_ID_BYTES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 8080;

/// 默认日志过滤规则（`RUST_LOG` 未设置时使用）
pub const DEFAULT_LOG_FILTER: &str = "robo_server=info";

/// 服务配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// 监听地址（空串等同于 `0.0.0.0`）
    pub addr: String,

    /// 监听端口
    pub port: u16,

    /// 机器人 ID 的随机字节数（编码后长度翻倍）
    pub id_bytes: usize,

    /// tracing 过滤规则
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
            id_bytes: DEFAULT_ID_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// 从 TOML 文件加载配置，缺失的键使用默认值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.id_bytes == 0 {
            anyhow::bail!("id_bytes 必须至少为 1，得到: {}", self.id_bytes);
        }
        self.socket_addr()?;
        Ok(())
    }

    /// 监听的 Socket 地址
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = if self.addr.is_empty() {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            self.addr
                .parse()
                .with_context(|| format!("无效的监听地址: {:?}", self.addr))?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Robo Server - 房间网格机器人 HTTP 服务
#[derive(Parser, Debug, Default)]
#[command(name = "robo-server")]
#[command(about = "HTTP service for creating and commanding grid robots", long_about = None)]
#[command(version)]
pub struct Args {
    /// 监听地址
    ///
    /// 默认: 0.0.0.0（所有接口）
    #[arg(long)]
    pub addr: Option<String>,

    /// 监听端口
    ///
    /// 默认: 8080
    #[arg(long)]
    pub port: Option<u16>,

    /// TOML 配置文件路径（可选）
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 机器人 ID 的随机字节数
    ///
    /// 默认: 4（8 个十六进制字符）
    #[arg(long)]
    pub id_bytes: Option<usize>,
}

impl Args {
    /// 合并配置文件与命令行参数，得到最终配置
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(ref addr) = self.addr {
            config.addr = addr.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(id_bytes) = self.id_bytes {
            config.id_bytes = id_bytes;
        }

        config.validate()?;
        Ok(config)
    }
}
