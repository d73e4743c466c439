//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，处理链路固定为线性序列：
//! 1. 加载源图并统一为 RGBA
//! 2. 依次生成各 PNG 产物（缩放 → 居中 → 写盘）
//! 3. 生成 ICO 容器
//!
//! ## 实现思路
//!
//! - 任一步失败立即返回，已写出的文件保留在磁盘上，不做回滚。
//! - 每写出一个文件向标准输出打印一行确认信息。
//! - 记录 `load/png/ico/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use image::RgbaImage;

use super::ico::{build_frames, write_ico};
use super::output::{encode_png, write_output};
use super::pipeline::resize_and_center;
use super::{IconArtifact, IconError, IconSetConfig, IconTarget, SourceImage};

/// 图标集生成器。
#[derive(Debug, Clone)]
pub struct IconGenerator {
    config: IconSetConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器，配置非法时直接拒绝。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_forge::icon_set::{IconGenerator, IconSetConfig};
    ///
    /// let generator = IconGenerator::new(IconSetConfig::default())?;
    /// let artifacts = generator.run("logo.png")?;
    /// assert_eq!(artifacts.len(), 4);
    /// # Ok::<(), icon_forge::icon_set::IconError>(())
    /// ```
    pub fn new(config: IconSetConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IconSetConfig {
        &self.config
    }

    /// 从源图路径生成完整图标集。
    pub fn run(&self, source_path: impl AsRef<Path>) -> Result<Vec<IconArtifact>, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = SourceImage::load(source_path)?;
        let load_elapsed = load_start.elapsed();

        let artifacts = self.generate(&source)?;

        log::debug!(
            "⏱️ 图标集生成完成 - load={}ms total={}ms",
            load_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(artifacts)
    }

    /// 基于已加载的源图生成全部产物。
    pub fn generate(&self, source: &SourceImage) -> Result<Vec<IconArtifact>, IconError> {
        std::fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            IconError::Write(format!(
                "创建输出目录 '{}' 失败：{}",
                self.config.output_dir.display(),
                e
            ))
        })?;

        let mut artifacts = Vec::with_capacity(self.config.png_targets.len() + 1);
        let mut rendered = Vec::with_capacity(self.config.png_targets.len());

        let png_start = Instant::now();
        for target in &self.config.png_targets {
            let canvas = self.write_png(source, target)?;
            artifacts.push(IconArtifact::Png {
                path: self.config.output_dir.join(target.file_name()),
                width: target.width,
                height: target.height,
            });
            rendered.push(canvas);
        }
        let png_elapsed = png_start.elapsed();

        let ico_start = Instant::now();
        let ico_path = self.config.ico_path();
        let frames = build_frames(
            source.pixels(),
            &self.config.ico_sizes,
            self.config.ico_source,
            self.config.resize_filter,
            &rendered,
        )?;
        let frame_sizes = write_ico(&ico_path, &frames)?;
        announce_saved(&ico_path);
        log::info!(
            "💾 ICO 已写入 - 帧来源: {} 帧尺寸: {:?}",
            self.config.ico_source.as_str(),
            frame_sizes
        );
        artifacts.push(IconArtifact::Ico {
            path: ico_path,
            frames: frame_sizes,
        });

        log::debug!(
            "⏱️ 阶段耗时 - png={}ms ico={}ms",
            png_elapsed.as_millis(),
            ico_start.elapsed().as_millis()
        );

        Ok(artifacts)
    }

    fn write_png(&self, source: &SourceImage, target: &IconTarget) -> Result<RgbaImage, IconError> {
        let canvas = resize_and_center(
            source.pixels(),
            target.width,
            target.height,
            self.config.resize_filter,
        )?;

        let path = self.config.output_dir.join(target.file_name());
        write_output(&path, &encode_png(&canvas)?)?;

        announce_saved(&path);
        log::info!(
            "💾 PNG 已写入 - {} ({}x{})",
            target.name,
            target.width,
            target.height
        );

        Ok(canvas)
    }
}

/// 每写出一个文件打印一行确认。
fn announce_saved(path: &Path) {
    println!("Saved {}", path.display());
}
