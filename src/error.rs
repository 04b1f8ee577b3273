//! 统一错误定义
//! 本层无致命错误：所有失败路径以返回值形式交给调用方检查

use rust_decimal::Decimal;
use thiserror::Error;

/// 钱包注册表错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Insufficient balance in {symbol}: available {available}, requested {requested}")]
    InsufficientBalance {
        symbol: String,
        available: Decimal,
        requested: Decimal,
    },

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Mnemonic generation failed: {0}")]
    MnemonicGeneration(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl WalletError {
    /// 稳定的机器可读错误码（snake_case），供上层展示层映射提示文案
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::WalletNotFound(_) => "wallet_not_found",
            WalletError::InsufficientBalance { .. } => "insufficient_balance",
            WalletError::InvalidMnemonic(_) => "invalid_mnemonic",
            WalletError::MnemonicGeneration(_) => "mnemonic_generation_failed",
            WalletError::InvalidAmount(_) => "invalid_amount",
            WalletError::InvalidAddress(_) => "invalid_address",
        }
    }
}

pub type WalletResult<T> = Result<T, WalletError>;
