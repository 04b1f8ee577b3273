//! 日志系统配置模块
//! 支持结构化日志与日志级别配置（仅控制台输出）

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 环境变量 `RUST_LOG` 优先于配置中的level。
/// 重复初始化返回错误（tracing全局subscriber只能设置一次）。
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // 设置日志级别过滤器
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // 根据配置选择日志格式
    if config.format == "json" {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()?;
    } else {
        Registry::default().with(filter).with(fmt::layer()).try_init()?;
    }

    Ok(())
}
