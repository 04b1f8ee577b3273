//! 演示数据种子
//! 固定的演示钱包集合与相对当前时间的演示交易历史

use chrono::{Duration, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::domain::{Transaction, TransactionStatus, TxDirection, Wallet};

/// 固定演示钱包集合（BTC / ETH / SOL）
static DEMO_WALLETS: Lazy<Vec<Wallet>> = Lazy::new(|| {
    vec![
        Wallet {
            id: "1".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
            balance: Decimal::new(25, 4),      // 0.0025
            value: Decimal::new(12534, 2),     // 125.34
            change_24h: Decimal::new(245, 2),  // +2.45%
            icon: "https://cryptologos.cc/logos/bitcoin-btc-logo.png?v=025".to_string(),
        },
        Wallet {
            id: "2".to_string(),
            name: "Ethereum".to_string(),
            symbol: "ETH".to_string(),
            address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
            balance: Decimal::new(15, 2),      // 0.15
            value: Decimal::new(35078, 2),     // 350.78
            change_24h: Decimal::new(321, 2),  // +3.21%
            icon: "https://cryptologos.cc/logos/ethereum-eth-logo.png?v=025".to_string(),
        },
        Wallet {
            id: "3".to_string(),
            name: "Solana".to_string(),
            symbol: "SOL".to_string(),
            address: "9ZNmBLQdCkE6mqZQkEi3MYwRcQs2GjLGSvBL7jvGrVxU".to_string(),
            balance: Decimal::new(35, 1),      // 3.5
            value: Decimal::new(18923, 2),     // 189.23
            change_24h: Decimal::new(-115, 2), // -1.15%
            icon: "https://cryptologos.cc/logos/solana-sol-logo.png?v=025".to_string(),
        },
    ]
});

/// 返回演示钱包集合的独立副本
pub fn demo_wallets() -> Vec<Wallet> {
    DEMO_WALLETS.clone()
}

/// 构造演示交易历史（时间戳相对当前时刻，倒序：最新在前）
pub fn demo_transactions() -> Vec<Transaction> {
    let now = Utc::now();

    let entries = [
        (
            "1",
            TxDirection::Receive,
            Decimal::new(25, 4), // 0.0025
            "BTC",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            Duration::days(1),
            Decimal::new(1, 4), // 0.0001
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
        ),
        (
            "2",
            TxDirection::Send,
            Decimal::new(5, 2), // 0.05
            "ETH",
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
            Duration::days(3),
            Decimal::new(1, 3), // 0.001
            "0x8723d5C6634C0532925a3b844Bc454e4438f321",
        ),
        (
            "3",
            TxDirection::Receive,
            Decimal::new(25, 1), // 2.5
            "SOL",
            "9ZNmBLQdCkE6mqZQkEi3MYwRcQs2GjLGSvBL7jvGrVxU",
            Duration::days(7),
            Decimal::new(5, 5), // 0.00005
            "9ZNmBLQdCkE6mqZQkEi3MYwRcQs2GjLGSvBL7jvGrVxU",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, direction, amount, coin, address, age, fee, tx_hash)| {
            let timestamp = now - age;
            Transaction {
                id: id.to_string(),
                direction,
                amount,
                coin: coin.to_string(),
                date: timestamp.date_naive(),
                address: address.to_string(),
                status: TransactionStatus::Completed,
                timestamp,
                fee: Some(fee),
                tx_hash: Some(tx_hash.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_wallets_fixed_set() {
        let wallets = demo_wallets();
        assert_eq!(wallets.len(), 3);

        let symbols: Vec<&str> = wallets.iter().map(|w| w.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL"]);

        let btc = &wallets[0];
        assert_eq!(btc.balance, Decimal::new(25, 4));
        assert_eq!(btc.value, Decimal::new(12534, 2));
    }

    #[test]
    fn test_demo_wallet_symbols_unique() {
        let wallets = demo_wallets();
        let mut symbols: Vec<&str> = wallets.iter().map(|w| w.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), wallets.len());
    }

    #[test]
    fn test_demo_transactions_newest_first() {
        let transactions = demo_transactions();
        assert_eq!(transactions.len(), 3);
        for pair in transactions.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_demo_transactions_reference_demo_wallets() {
        let wallets = demo_wallets();
        for tx in demo_transactions() {
            assert!(wallets.iter().any(|w| w.symbol == tx.coin));
            assert!(tx.amount > Decimal::ZERO);
            assert_eq!(tx.status, TransactionStatus::Completed);
        }
    }
}
