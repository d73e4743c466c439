//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义进程级 `AppError`，入口只需区分“用法错误”（打印用法、退出码 1）
//! 与“生成链路错误”（打印底层原因、退出码 1）。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，`?` 直接上转，无需手动 map。

use crate::icon_set::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 参数个数不对，携带完整用法说明
    #[error("{0}")]
    Usage(String),

    /// 图标生成链路错误（加载 / 解码 / 缩放 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),
}

impl AppError {
    /// 进程退出码。
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Icon(_) => 1,
        }
    }
}
