//! 交易领域模型
//! 统一交易状态与方向定义：金额恒为正数，方向单独编码正负语义

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 交易方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxDirection {
    Send,
    Receive,
}

impl fmt::Display for TxDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxDirection::Send => write!(f, "send"),
            TxDirection::Receive => write!(f, "receive"),
        }
    }
}

/// 交易状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// 交易待确认
    Pending,
    /// 交易已完成
    Completed,
    /// 交易失败
    Failed,
}

impl TransactionStatus {
    /// 获取状态描述
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pending => "交易待确认",
            Self::Completed => "交易已完成",
            Self::Failed => "交易失败",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// 演示交易记录（倒序保存，最新在前）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub direction: TxDirection,
    /// 金额恒为正数，正负语义由 direction 编码
    pub amount: Decimal,
    /// 币种符号，必须指向注册表中已存在的钱包
    pub coin: String,
    pub date: NaiveDate,
    /// 对手方地址
    pub address: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub fee: Option<Decimal>,
    pub tx_hash: Option<String>,
}
