//! 模拟交易哈希生成器
//!
//! 哈希为"时间戳+伪随机数"拼接，无任何密码学意义。
//! 以trait形式注入注册表，未来接入真实链上哈希时无需改动注册表逻辑，
//! 测试中也可以替换为固定实现。

use rand::Rng;

use crate::utils::time_utils::current_timestamp_ms;

/// 交易哈希/ID生成策略
pub trait TxHashGenerator: Send + Sync {
    /// 转账交易哈希
    fn send_hash(&self) -> String;

    /// 收款交易哈希
    fn receive_hash(&self) -> String;

    /// 交易记录ID
    fn tx_id(&self) -> String;
}

/// 默认实现：`tx_{毫秒时间戳}_{0..1000000随机数}`
#[derive(Debug, Default, Clone)]
pub struct MockHashGenerator;

impl MockHashGenerator {
    fn synthesize(&self, prefix: &str) -> String {
        let nonce: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("{}_{}_{}", prefix, current_timestamp_ms(), nonce)
    }
}

impl TxHashGenerator for MockHashGenerator {
    fn send_hash(&self) -> String {
        self.synthesize("tx")
    }

    fn receive_hash(&self) -> String {
        self.synthesize("rx")
    }

    fn tx_id(&self) -> String {
        format!("tx_{}", uuid::Uuid::new_v4().simple())
    }
}
