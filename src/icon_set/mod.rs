//! # 图标集生成模块（icon_set）
//!
//! ## 设计思路
//!
//! 将“源图加载 → 缩放居中 → PNG 写盘 → ICO 封装”按职责拆分为多个子模块：
//!
//! - `config`：显式配置值（输出目录、目标尺寸、ICO 帧策略）
//! - `source`：源图加载与 RGBA 统一、产物记录
//! - `pipeline`：纯函数缩放与居中，不做 I/O
//! - `ico`：ICO 帧生成与容器编码
//! - `output`：内存编码后一次性写盘，写入错误不丢失
//! - `generator`：编排整条流程
//! - `error`：统一错误类型
//!
//! ## 调用链
//!
//! ```text
//! main.rs（参数校验）
//!    ↓
//! generator.rs（线性编排 + 阶段耗时日志）
//!    ├─ source.rs（读取 + 解码 + 转 RGBA）
//!    ├─ pipeline.rs（按比例缩放 + 透明画布居中）
//!    └─ ico.rs（帧生成 + ICO 编码）
//!    ↓
//! 返回 IconError，由入口上转为 AppError
//! ```

mod config;
mod error;
mod generator;
mod ico;
mod output;
mod pipeline;
mod source;

pub use config::{ICO_MAX_DIMENSION, IcoSource, IconSetConfig, IconTarget};
pub use error::IconError;
pub use generator::IconGenerator;
pub use pipeline::{centering_offset, fit_dimensions, resize_and_center};
pub use source::{IconArtifact, SourceImage};
