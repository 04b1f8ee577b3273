//! 时间工具模块
//! 提供时间处理相关的工具函数

use chrono::{NaiveDate, Utc};

/// 获取当前时间戳（毫秒）
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// 当前UTC日历日期（交易记录的date字段）
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}
