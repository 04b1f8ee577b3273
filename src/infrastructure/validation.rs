//! 调用方输入校验
//! 对应移动端表单层的前置检查：金额为正、地址非空、助记词形态正确。
//! `simulate_receive` 本身不校验金额，调用方应先通过这里的检查。

use rust_decimal::Decimal;

use crate::error::{WalletError, WalletResult};
use crate::service::mnemonic::MNEMONIC_WORD_COUNT;

/// 校验转账请求的表单字段（不含余额检查，余额由注册表负责）
pub fn validate_send_request(to_address: &str, amount: Decimal) -> WalletResult<()> {
    if to_address.trim().is_empty() {
        return Err(WalletError::InvalidAddress(
            "destination address is empty".to_string(),
        ));
    }
    validate_positive_amount(amount)
}

/// 金额必须大于零
pub fn validate_positive_amount(amount: Decimal) -> WalletResult<()> {
    if amount <= Decimal::ZERO {
        return Err(WalletError::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

/// 助记词形态预检查：恰好12个单词（checksum校验在 service::mnemonic）
pub fn validate_phrase_shape(phrase: &str) -> WalletResult<()> {
    let word_count = phrase.split_whitespace().count();
    if word_count != MNEMONIC_WORD_COUNT {
        return Err(WalletError::InvalidMnemonic(format!(
            "recovery phrase must contain exactly {} words, got {}",
            MNEMONIC_WORD_COUNT, word_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_rejected() {
        let err = validate_send_request("  ", Decimal::ONE).unwrap_err();
        assert_eq!(err.code(), "invalid_address");
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        assert!(validate_positive_amount(Decimal::ZERO).is_err());
        assert!(validate_positive_amount(Decimal::new(-1, 2)).is_err());
        assert!(validate_positive_amount(Decimal::new(1, 4)).is_ok());
    }

    #[test]
    fn test_phrase_shape() {
        let twelve = vec!["word"; 12].join(" ");
        assert!(validate_phrase_shape(&twelve).is_ok());
        assert!(validate_phrase_shape("one two three").is_err());
        assert!(validate_phrase_shape("").is_err());
    }
}
