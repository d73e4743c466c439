//! # 缩放与居中流水线模块
//!
//! ## 设计思路
//!
//! 本模块全部是纯函数：输入位图与目标尺寸，输出新位图，不做任何 I/O，
//! 这样可以脱离文件系统单独做性质测试。
//!
//! ## 实现思路
//!
//! 1. 按宽高比计算“恰好放得下”的缩放尺寸（受限边填满，另一边四舍五入）
//! 2. 用 `fast_image_resize` 卷积缩放（默认 Lanczos3），失败时回退 `image::imageops::resize`
//! 3. 新建全透明画布，按整数除法计算偏移后整体替换粘贴（保留 alpha）

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba, RgbaImage};

use super::IconError;

/// 计算在目标框内保持宽高比的最大尺寸。
///
/// 源图相对更宽时按宽度受限，否则按高度受限；非受限边使用“四舍六入五成双”取整。
pub fn fit_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<(u32, u32), IconError> {
    if source_width == 0 || source_height == 0 {
        return Err(IconError::InvalidDimensions(format!(
            "源图尺寸非法：{}x{}",
            source_width, source_height
        )));
    }
    if target_width == 0 || target_height == 0 {
        return Err(IconError::InvalidDimensions(format!(
            "目标尺寸非法：{}x{}",
            target_width, target_height
        )));
    }

    let source_ratio = source_width as f64 / source_height as f64;
    let target_ratio = target_width as f64 / target_height as f64;

    let (new_width, new_height) = if source_ratio > target_ratio {
        let height = (target_width as f64 / source_ratio).round_ties_even();
        (target_width, height as u32)
    } else {
        let width = (target_height as f64 * source_ratio).round_ties_even();
        (width as u32, target_height)
    };

    if new_width == 0 || new_height == 0 {
        return Err(IconError::InvalidDimensions(format!(
            "源图 {}x{} 宽高比过于极端，缩放到 {}x{} 后尺寸为 {}x{}",
            source_width, source_height, target_width, target_height, new_width, new_height
        )));
    }

    Ok((new_width, new_height))
}

/// 居中偏移（向下取整）。
pub fn centering_offset(
    target_width: u32,
    target_height: u32,
    new_width: u32,
    new_height: u32,
) -> (u32, u32) {
    (
        target_width.saturating_sub(new_width) / 2,
        target_height.saturating_sub(new_height) / 2,
    )
}

/// 将源图按比例缩放进目标尺寸，并居中贴到透明画布上。
///
/// 返回的画布尺寸恒等于 `target_width x target_height`，未覆盖区域 alpha 为 0。
///
/// # 示例
/// ```rust,ignore
/// use icon_forge::icon_set::resize_and_center;
/// use image::imageops::FilterType;
///
/// let canvas = resize_and_center(source.pixels(), 128, 128, FilterType::Lanczos3)?;
/// assert_eq!(canvas.dimensions(), (128, 128));
/// # Ok::<(), icon_forge::icon_set::IconError>(())
/// ```
pub fn resize_and_center(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (source_width, source_height) = image.dimensions();
    let (new_width, new_height) =
        fit_dimensions(source_width, source_height, target_width, target_height)?;

    let resized = resize_rgba(image, new_width, new_height, filter)?;

    let mut canvas: RgbaImage =
        ImageBuffer::from_pixel(target_width, target_height, Rgba([0, 0, 0, 0]));
    let (offset_x, offset_y) = centering_offset(target_width, target_height, new_width, new_height);
    image::imageops::replace(&mut canvas, &resized, offset_x as i64, offset_y as i64);

    log::debug!(
        "🧩 缩放居中：{}x{} -> {}x{}，画布 {}x{}，偏移 ({}, {})",
        source_width,
        source_height,
        new_width,
        new_height,
        target_width,
        target_height,
        offset_x,
        offset_y
    );

    Ok(canvas)
}

/// 缩放到精确尺寸；尺寸未变时直接复制。
pub(crate) fn resize_rgba(
    image: &RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }

    match resize_with_fast_image_resize(image, width, height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            Ok(image::imageops::resize(image, width, height, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}
