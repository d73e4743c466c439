//! # 数据源与产物模型
//!
//! ## 设计思路
//!
//! - `SourceImage` 表示已解码、统一为 RGBA 的源图，加载后只读
//! - `IconArtifact` 表示已落盘的产物，供调用侧汇总与测试断言

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, RgbaImage};

use super::IconError;

/// 解码后的源图（RGBA8）。
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// 从本地路径加载并解码源图。
    ///
    /// 格式按文件内容识别而非扩展名；调色板、灰度、RGB 输入统一转换为 RGBA，
    /// 无 alpha 通道时补全为完全不透明。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;

        image::guess_format(&bytes)
            .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        log::info!(
            "✅ 源图解码成功 - 尺寸: {}x{} 色彩: {:?}",
            width,
            height,
            decoded.color()
        );

        Self::from_dynamic(decoded)
    }

    /// 从已解码图像构建源图。
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, IconError> {
        Self::from_rgba(image.to_rgba8())
    }

    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, IconError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(IconError::InvalidDimensions(format!(
                "源图尺寸为空：{}x{}",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels })
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// 已写入磁盘的产物。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconArtifact {
    /// 单尺寸 PNG。
    Png {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// 多分辨率 ICO，`frames` 为内嵌帧的实际尺寸。
    Ico {
        path: PathBuf,
        frames: Vec<(u32, u32)>,
    },
}

impl IconArtifact {
    pub fn path(&self) -> &Path {
        match self {
            Self::Png { path, .. } | Self::Ico { path, .. } => path,
        }
    }
}
