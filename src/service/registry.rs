//! 钱包注册表
//!
//! 进程内的模拟钱包/交易存储：两个有序集合（钱包、交易）加一条可选恢复短语。
//! 所有突变同步完成，仅 `send` 通过人为延迟模拟网络耗时。
//! 注册表以显式依赖注入给消费方，不提供全局单例，测试可各自构造独立实例。

use rust_decimal::Decimal;
use zeroize::Zeroizing;

use crate::config::RegistryConfig;
use crate::domain::{Transaction, TransactionStatus, TxDirection, Wallet};
use crate::error::{WalletError, WalletResult};
use crate::infrastructure::validation;
use crate::service::demo_seeder;
use crate::service::mnemonic;
use crate::service::tx_hash::{MockHashGenerator, TxHashGenerator};
use crate::utils::time_utils;

/// `send` 成功后的回执
#[derive(Debug, Clone, PartialEq)]
pub struct SendReceipt {
    pub tx_hash: String,
    /// 模拟手续费（默认为金额的1%）
    pub fee: Decimal,
}

/// 模拟钱包/交易注册表
///
/// 生命周期：未初始化 → 已初始化（generate/restore/initialize）→ 已清空（clear）
pub struct WalletRegistry {
    wallets: Vec<Wallet>,
    /// 倒序保存：最新交易在前
    transactions: Vec<Transaction>,
    /// 恢复短语仅驻留进程内存，drop时清零
    seed_phrase: Option<Zeroizing<String>>,
    initialized: bool,
    config: RegistryConfig,
    hash_generator: Box<dyn TxHashGenerator>,
}

impl WalletRegistry {
    /// 创建空注册表（默认配置）
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// 创建空注册表（指定配置）
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_hash_generator(config, Box::new(MockHashGenerator))
    }

    /// 注入自定义哈希生成器（测试或未来真实实现）
    pub fn with_hash_generator(
        config: RegistryConfig,
        hash_generator: Box<dyn TxHashGenerator>,
    ) -> Self {
        Self {
            wallets: Vec::new(),
            transactions: Vec::new(),
            seed_phrase: None,
            initialized: false,
            config,
            hash_generator,
        }
    }

    /// 初始化注册表：首次调用时填充演示数据，幂等
    pub fn initialize(&mut self) -> bool {
        if !self.initialized {
            self.seed_demo_data();
            self.initialized = true;
            tracing::info!(wallets = self.wallets.len(), "registry_initialized");
        }
        self.initialized
    }

    /// 生成新的12词恢复短语并设为当前短语
    ///
    /// 生成失败时返回错误，不退化为固定短语。
    pub fn generate_recovery_phrase(&mut self) -> WalletResult<String> {
        let phrase = mnemonic::generate_mnemonic()?;
        self.seed_phrase = Some(Zeroizing::new(phrase.clone()));
        tracing::info!("recovery_phrase_generated");
        Ok(phrase)
    }

    /// 从恢复短语还原钱包
    ///
    /// 校验失败时不触碰任何状态；成功后重新填充演示数据。
    pub fn restore_from_phrase(&mut self, phrase: &str) -> WalletResult<()> {
        mnemonic::validate_mnemonic(phrase)?;

        self.seed_phrase = Some(Zeroizing::new(phrase.to_string()));
        self.seed_demo_data();
        self.initialized = true;

        tracing::info!(wallets = self.wallets.len(), "wallet_restored_from_phrase");
        Ok(())
    }

    /// 所有钱包
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// 按币种符号查找钱包
    pub fn wallet_by_symbol(&self, symbol: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.symbol == symbol)
    }

    /// 按ID查找钱包
    pub fn wallet_by_id(&self, id: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    /// 所有交易（最新在前）
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// 按币种过滤交易
    pub fn transactions_by_coin(&self, coin: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.coin == coin).collect()
    }

    /// 指定币种的收款地址
    pub fn receive_address(&self, symbol: &str) -> Option<&str> {
        self.wallet_by_symbol(symbol).map(|w| w.address.as_str())
    }

    /// 发起模拟转账
    ///
    /// 校验顺序：地址非空、金额为正、钱包存在、余额充足；
    /// 任一失败都不会触碰状态。成功路径先等待模拟网络延迟，
    /// 再扣减余额并把 `completed` 转账记录插入交易列表头部。
    pub async fn send(
        &mut self,
        from_symbol: &str,
        to_address: &str,
        amount: Decimal,
    ) -> WalletResult<SendReceipt> {
        validation::validate_send_request(to_address, amount)?;

        let wallet_idx = self
            .wallets
            .iter()
            .position(|w| w.symbol == from_symbol)
            .ok_or_else(|| WalletError::WalletNotFound(from_symbol.to_string()))?;

        if !self.wallets[wallet_idx].can_spend(amount) {
            return Err(WalletError::InsufficientBalance {
                symbol: from_symbol.to_string(),
                available: self.wallets[wallet_idx].balance,
                requested: amount,
            });
        }

        // 模拟网络延迟（不可取消，无独立超时）
        if self.config.send_latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.send_latency_ms))
                .await;
        }

        let tx_hash = self.hash_generator.send_hash();
        let tx_id = self.hash_generator.tx_id();
        let fee = amount * self.config.fee_rate;
        let now = chrono::Utc::now();

        let wallet = &mut self.wallets[wallet_idx];
        wallet.balance -= amount;
        let coin = wallet.symbol.clone();

        self.transactions.insert(
            0,
            Transaction {
                id: tx_id,
                direction: TxDirection::Send,
                amount,
                coin: coin.clone(),
                date: time_utils::current_date(),
                address: to_address.to_string(),
                status: TransactionStatus::Completed,
                timestamp: now,
                fee: Some(fee),
                tx_hash: Some(tx_hash.clone()),
            },
        );

        tracing::info!(coin = %coin, amount = %amount, fee = %fee, tx_hash = %tx_hash, "send_completed");

        Ok(SendReceipt { tx_hash, fee })
    }

    /// 模拟收款
    ///
    /// 仅校验钱包存在；金额校验约定由调用方完成
    /// （见 `infrastructure::validation::validate_positive_amount`）。
    pub fn simulate_receive(&mut self, symbol: &str, amount: Decimal) -> WalletResult<String> {
        let wallet_idx = self
            .wallets
            .iter()
            .position(|w| w.symbol == symbol)
            .ok_or_else(|| WalletError::WalletNotFound(symbol.to_string()))?;

        let tx_hash = self.hash_generator.receive_hash();
        let tx_id = self.hash_generator.tx_id();
        let now = chrono::Utc::now();

        let wallet = &mut self.wallets[wallet_idx];
        wallet.balance += amount;
        let coin = wallet.symbol.clone();
        let address = wallet.address.clone();

        self.transactions.insert(
            0,
            Transaction {
                id: tx_id,
                direction: TxDirection::Receive,
                amount,
                coin: coin.clone(),
                date: time_utils::current_date(),
                address,
                status: TransactionStatus::Completed,
                timestamp: now,
                fee: None,
                tx_hash: Some(tx_hash.clone()),
            },
        );

        tracing::info!(coin = %coin, amount = %amount, tx_hash = %tx_hash, "receive_simulated");

        Ok(tx_hash)
    }

    /// 所有钱包法币估值之和（空集合为0）
    pub fn total_value(&self) -> Decimal {
        self.wallets.iter().map(|w| w.value).sum()
    }

    /// 是否已配置钱包
    pub fn has_wallet(&self) -> bool {
        !self.wallets.is_empty()
    }

    /// 当前恢复短语（未生成/已清空时为None）
    pub fn seed_phrase(&self) -> Option<&str> {
        self.seed_phrase.as_deref().map(|s| s.as_str())
    }

    /// 注册表是否处于已初始化状态
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 清空注册表：两个集合清空，恢复短语擦除（登出/删除账户时使用）
    pub fn clear(&mut self) {
        self.wallets.clear();
        self.transactions.clear();
        self.seed_phrase = None; // Zeroizing drop时清零内存
        self.initialized = false;
        tracing::info!("registry_cleared");
    }

    fn seed_demo_data(&mut self) {
        self.wallets = demo_seeder::demo_wallets();
        self.transactions = demo_seeder::demo_transactions();
    }
}

impl Default for WalletRegistry {
    fn default() -> Self {
        Self::new()
    }
}
