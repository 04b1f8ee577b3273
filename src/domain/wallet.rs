//! 钱包领域模型
//! 仅包含可公开展示的信息：地址、余额、法币估值，无私钥字段

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 演示钱包（余额与估值均为模拟数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub name: String,
    /// 币种符号，注册表内唯一
    pub symbol: String,
    /// 收款地址（格式不做校验，演示用）
    pub address: String,
    /// 原生单位余额，任何操作后均 >= 0
    pub balance: Decimal,
    /// 法币估值
    pub value: Decimal,
    /// 24小时涨跌幅（百分比，有符号）
    pub change_24h: Decimal,
    /// 图标URL
    pub icon: String,
}

impl Wallet {
    /// 余额是否足够支出指定金额
    pub fn can_spend(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc_wallet() -> Wallet {
        Wallet {
            id: "1".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
            balance: Decimal::new(25, 4),
            value: Decimal::new(12534, 2),
            change_24h: Decimal::new(245, 2),
            icon: "https://cryptologos.cc/logos/bitcoin-btc-logo.png?v=025".to_string(),
        }
    }

    #[test]
    fn test_can_spend_boundaries() {
        let wallet = btc_wallet();
        assert!(wallet.can_spend(Decimal::new(25, 4))); // 全额
        assert!(wallet.can_spend(Decimal::new(1, 3)));
        assert!(!wallet.can_spend(Decimal::new(26, 4)));
    }

    #[test]
    fn test_wallet_serde_roundtrip() {
        let wallet = btc_wallet();
        let json = serde_json::to_string(&wallet).expect("serialize");
        let back: Wallet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(wallet, back);
    }
}
