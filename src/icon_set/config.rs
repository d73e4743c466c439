//! # 配置模块
//!
//! ## 设计思路
//!
//! 输出目录、PNG 目标尺寸列表、ICO 帧尺寸等原本散落在流程中的“隐式常量”
//! 集中到 `IconSetConfig`，生成器只消费这个显式配置值，便于脱离文件系统做单元测试。
//!
//! ## 实现思路
//!
//! - `Default` 提供桌面应用打包工具所需的固定产物列表。
//! - `IcoSource` 负责 ICO 帧来源的字符串解析与反向输出。
//! - `validate` 在生成器创建时一次性校验，流程中不再重复判断。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::IconError;

/// ICO 容器单帧允许的最大边长（像素）。
pub const ICO_MAX_DIMENSION: u32 = 256;

/// 单个 PNG 产物的目标规格。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    /// 产物名称，同时作为文件名主干（`<name>.png`）。
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl IconTarget {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// 输出文件名。
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// ICO 帧的来源。
///
/// - `Canvas`：复用 PNG 阶段生成的居中画布，ICO 帧与同尺寸 PNG 逐像素一致
/// - `Original`：直接从原图按比例缩放到帧尺寸内，不做透明填充
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcoSource {
    Canvas,
    Original,
}

impl IcoSource {
    /// 从外部字符串解析帧来源。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_forge::icon_set::IcoSource;
    ///
    /// let source = IcoSource::from_str("original")?;
    /// assert_eq!(source.as_str(), "original");
    /// # Ok::<(), icon_forge::icon_set::IconError>(())
    /// ```
    pub fn from_str(source: &str) -> Result<Self, IconError> {
        match source.trim().to_lowercase().as_str() {
            "canvas" => Ok(Self::Canvas),
            "original" => Ok(Self::Original),
            other => Err(IconError::InvalidConfig(format!(
                "未知 ICO 帧来源：{}（可选：canvas / original）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Canvas => "canvas",
            Self::Original => "original",
        }
    }
}

/// 图标集生成配置。
#[derive(Debug, Clone)]
pub struct IconSetConfig {
    /// 所有产物的输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 按顺序生成的 PNG 产物。
    pub png_targets: Vec<IconTarget>,
    /// ICO 文件名。
    pub ico_file_name: String,
    /// ICO 内嵌帧的边长列表（正方形）。
    pub ico_sizes: Vec<u32>,
    /// ICO 帧来源策略。
    pub ico_source: IcoSource,
    /// 缩放滤镜，默认 Lanczos3 以减少锯齿。
    pub resize_filter: FilterType,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            png_targets: vec![
                IconTarget::new("32x32", 32, 32),
                IconTarget::new("128x128", 128, 128),
                IconTarget::new("128x128@2x", 256, 256),
            ],
            ico_file_name: "icon.ico".to_string(),
            ico_sizes: vec![32, 128, 256],
            ico_source: IcoSource::Canvas,
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl IconSetConfig {
    /// 替换输出目录，其余保持不变。
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn ico_path(&self) -> PathBuf {
        self.output_dir.join(&self.ico_file_name)
    }

    /// 校验配置的自洽性。
    pub(crate) fn validate(&self) -> Result<(), IconError> {
        if self.png_targets.is_empty() {
            return Err(IconError::InvalidConfig("PNG 目标列表为空".to_string()));
        }

        let mut seen = HashSet::new();
        for target in &self.png_targets {
            if target.name.trim().is_empty() {
                return Err(IconError::InvalidConfig("PNG 目标名称为空".to_string()));
            }
            if target.width == 0 || target.height == 0 {
                return Err(IconError::InvalidConfig(format!(
                    "PNG 目标 {} 尺寸非法：{}x{}",
                    target.name, target.width, target.height
                )));
            }
            if !seen.insert(target.name.as_str()) {
                return Err(IconError::InvalidConfig(format!(
                    "PNG 目标名称重复：{}",
                    target.name
                )));
            }
        }

        if self.ico_file_name.trim().is_empty() {
            return Err(IconError::InvalidConfig("ICO 文件名为空".to_string()));
        }
        if self.ico_sizes.is_empty() {
            return Err(IconError::InvalidConfig("ICO 帧尺寸列表为空".to_string()));
        }
        if let Some(size) = self
            .ico_sizes
            .iter()
            .find(|size| **size == 0 || **size > ICO_MAX_DIMENSION)
        {
            return Err(IconError::InvalidConfig(format!(
                "ICO 帧尺寸非法：{}（范围：1..={}）",
                size, ICO_MAX_DIMENSION
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lists_fixed_artifacts() {
        let config = IconSetConfig::default();
        let names: Vec<String> = config.png_targets.iter().map(IconTarget::file_name).collect();

        assert_eq!(names, vec!["32x32.png", "128x128.png", "128x128@2x.png"]);
        assert_eq!(config.png_targets[2].width, 256);
        assert_eq!(config.ico_sizes, vec![32, 128, 256]);
        assert_eq!(config.ico_path(), PathBuf::from(".").join("icon.ico"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_output_dir_only_changes_root() {
        let config = IconSetConfig::default().with_output_dir("out/icons");

        assert_eq!(config.output_dir, PathBuf::from("out/icons"));
        assert_eq!(config.ico_path(), PathBuf::from("out/icons").join("icon.ico"));
        assert_eq!(config.png_targets.len(), 3);
    }

    #[test]
    fn ico_source_parses_case_insensitively() {
        assert_eq!(IcoSource::from_str(" Canvas ").unwrap(), IcoSource::Canvas);
        assert_eq!(IcoSource::from_str("ORIGINAL").unwrap(), IcoSource::Original);
        assert_eq!(IcoSource::Original.as_str(), "original");
        assert!(matches!(
            IcoSource::from_str("padded"),
            Err(IconError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_sized_target() {
        let mut config = IconSetConfig::default();
        config.png_targets.push(IconTarget::new("broken", 0, 16));

        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let mut config = IconSetConfig::default();
        config.png_targets.push(IconTarget::new("32x32", 64, 64));

        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_ico_frames_over_container_limit() {
        let mut config = IconSetConfig::default();
        config.ico_sizes = vec![32, 512];

        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.ico_sizes.clear();
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }
}
