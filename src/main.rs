//! # 图标集生成工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数校验与退出码。
//! 生成逻辑见 `icon_set` 模块。

use std::process::ExitCode;

use icon_forge::cli;
use icon_forge::error::AppError;
use icon_forge::icon_set::{IconGenerator, IconSetConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(usage)) => {
            println!("{}", usage);
            ExitCode::from(1)
        }
        Err(err) => {
            log::error!("❌ 图标集生成失败: {err}");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let source_path = cli::source_path_from_args(args)?;

    let generator = IconGenerator::new(IconSetConfig::default())?;
    log::info!(
        "🚀 开始生成图标集 - 源图: {} 输出目录: {}",
        source_path,
        generator.config().output_dir.display()
    );

    let artifacts = generator.run(source_path)?;
    log::info!("🎉 图标集生成完成，共 {} 个文件", artifacts.len());

    Ok(())
}
