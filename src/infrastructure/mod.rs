//! Infrastructure 模块
//!
//! 日志初始化与调用方输入校验

pub mod logging;
pub mod validation;
