//! BIP39助记词封装
//!
//! 本层是整个应用中唯一真实的密码学操作：
//! 生成128位熵的12词助记词，以及校验词数与checksum。
//! 密钥派生、签名、广播均不在本仓库范围内。

use bip39::{Language, Mnemonic};
use rand::RngCore;

use crate::error::{WalletError, WalletResult};

/// 助记词固定为12个单词（128位熵）
pub const MNEMONIC_WORD_COUNT: usize = 12;

/// 熵长度：128 bits = 12 词
pub const ENTROPY_BITS: usize = 128;

/// 生成新的12词助记词
///
/// 熵来源为操作系统CSPRNG（`rand::thread_rng`）。
/// 生成失败时向调用方返回显式错误，不会退化为固定短语。
pub fn generate_mnemonic() -> WalletResult<String> {
    let mut entropy = [0u8; ENTROPY_BITS / 8];
    rand::thread_rng().fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy).map_err(|e| {
        log::warn!("BIP39 mnemonic generation failed: {}", e);
        WalletError::MnemonicGeneration(e.to_string())
    })?;

    Ok(mnemonic.to_string())
}

/// 校验助记词：必须恰好12个单词且通过BIP39 checksum
pub fn validate_mnemonic(phrase: &str) -> WalletResult<()> {
    let word_count = phrase.split_whitespace().count();
    if word_count != MNEMONIC_WORD_COUNT {
        return Err(WalletError::InvalidMnemonic(format!(
            "expected {} words, got {}",
            MNEMONIC_WORD_COUNT, word_count
        )));
    }

    Mnemonic::parse_in(Language::English, phrase)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// BIP39测试向量
    /// 来源：https://github.com/trezor/python-mnemonic/blob/master/vectors.json
    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generated_mnemonic_has_12_words() {
        let phrase = generate_mnemonic().expect("generation should succeed");
        assert_eq!(phrase.split_whitespace().count(), MNEMONIC_WORD_COUNT);
    }

    #[test]
    fn test_generated_mnemonic_validates() {
        let phrase = generate_mnemonic().expect("generation should succeed");
        assert!(validate_mnemonic(&phrase).is_ok());
    }

    #[test]
    fn test_known_vector_validates() {
        assert!(validate_mnemonic(TEST_MNEMONIC).is_ok());
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // 12个合法单词但checksum错误
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        let err = validate_mnemonic(phrase).unwrap_err();
        assert_eq!(err.code(), "invalid_mnemonic");
    }

    #[test]
    fn test_wrong_word_count_rejected() {
        let err = validate_mnemonic("abandon abandon abandon").unwrap_err();
        assert_eq!(err.code(), "invalid_mnemonic");
        assert!(err.to_string().contains("12 words"));
    }

    #[test]
    fn test_unknown_word_rejected() {
        let phrase = "mango apple banana orange grape lemon peach cherry kiwi melon pear strawberry";
        assert!(validate_mnemonic(phrase).is_err());
    }

    #[test]
    fn test_two_generations_differ() {
        // 128位熵下碰撞概率可忽略
        let a = generate_mnemonic().unwrap();
        let b = generate_mnemonic().unwrap();
        assert_ne!(a, b);
    }
}
