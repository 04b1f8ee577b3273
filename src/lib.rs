//! BRBIT - 移动端加密钱包演示应用核心
//!
//! 纯模拟模式：余额、地址、交易哈希均为演示数据，
//! 唯一真实的密码学操作是BIP39助记词的生成与校验

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{WalletError, WalletResult};
pub use service::registry::WalletRegistry;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::{Config, RegistryConfig},
        domain::{Transaction, TransactionStatus, TxDirection, Wallet},
        error::{WalletError, WalletResult},
        service::registry::{SendReceipt, WalletRegistry},
    };
}
