//! # 图标集生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   参数校验 · 日志初始化 · 退出码                 │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<(), AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  ├─ cli ──────── 位置参数解析 / 用法说明                  │
//! │  └─ icon_set ─── 源图加载 · 缩放居中 · PNG / ICO 写盘     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，决定进程退出码 |
//! | [`cli`] | 只接受一个源图路径参数，其余情况给出用法 |
//! | [`icon_set`] | 生成 `32x32.png` / `128x128.png` / `128x128@2x.png` / `icon.ico` |

pub mod cli;
pub mod error;
pub mod icon_set;
