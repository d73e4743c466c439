//! 命令行参数处理
//!
//! 只接受一个位置参数（源图路径），没有任何选项或环境变量开关。

use std::path::Path;

use crate::error::AppError;

const DEFAULT_PROGRAM_NAME: &str = "icon-forge";

/// 用法说明。
pub fn usage(program: &str) -> String {
    format!("Usage: {} path/to/source.png", program)
}

/// 从完整参数列表（含程序名）中取出源图路径。
///
/// 参数个数不是恰好一个时返回 `AppError::Usage`。
pub fn source_path_from_args(args: &[String]) -> Result<&str, AppError> {
    let program = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_PROGRAM_NAME);

    match args {
        [_, source] => Ok(source.as_str()),
        _ => Err(AppError::Usage(usage(program))),
    }
}
