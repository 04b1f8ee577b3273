//! 测试辅助模块
//! 提供测试工具和辅助函数

use std::sync::Once;

use brbit_core::config::{LoggingConfig, RegistryConfig};
use brbit_core::WalletRegistry;
use rust_decimal::Decimal;

/// BIP39测试向量（checksum有效的12词助记词）
/// 来源：https://github.com/trezor/python-mnemonic/blob/master/vectors.json
pub const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

static INIT: Once = Once::new();

/// 初始化测试日志（整个测试进程只执行一次）
pub fn init_test_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "text".to_string(),
        };
        let _ = brbit_core::infrastructure::logging::init_logging(&config);
    });
}

/// 测试配置：零延迟，1%手续费
pub fn test_registry_config() -> RegistryConfig {
    RegistryConfig {
        fee_rate: Decimal::new(1, 2),
        send_latency_ms: 0,
    }
}

/// 构造一个已通过助记词还原、填充了演示数据的注册表
pub fn restored_registry() -> WalletRegistry {
    init_test_logging();
    let mut registry = WalletRegistry::with_config(test_registry_config());
    registry
        .restore_from_phrase(TEST_MNEMONIC)
        .expect("test mnemonic must restore");
    registry
}
