//! Service 模块
//!
//! 钱包注册表及其协作者（助记词、模拟哈希、演示数据种子）

pub mod demo_seeder;
pub mod mnemonic;
pub mod registry;
pub mod tx_hash;

// 重新导出常用类型
pub use registry::{SendReceipt, WalletRegistry};
pub use tx_hash::{MockHashGenerator, TxHashGenerator};
