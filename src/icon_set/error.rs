//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 图标生成链路（加载 → 缩放居中 → 写 PNG → 写 ICO）中的所有失败都收敛到 `IconError`，
//! 调用侧按分支匹配，消息保留底层库的原始错误描述。

/// 图标生成统一错误类型。
///
/// 该类型会在进程入口被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("尺寸错误：{0}")]
    InvalidDimensions(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("写入错误：{0}")]
    Write(String),
}
