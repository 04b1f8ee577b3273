//! Domain 模块
//!
//! 钱包与交易的领域模型（纯演示数据，不含任何私钥信息）

pub mod transaction;
pub mod wallet;

// 重新导出常用类型
pub use transaction::{Transaction, TransactionStatus, TxDirection};
pub use wallet::Wallet;
