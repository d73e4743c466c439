//! # ICO 容器模块
//!
//! ## 设计思路
//!
//! ICO 帧的来源由 `IcoSource` 决定：默认复用 PNG 阶段的居中画布，
//! 保证同尺寸的 ICO 帧与 PNG 逐像素一致；`Original` 则直接按比例缩放原图，不做填充，
//! 也不放大（超过源图宽或高的帧尺寸直接跳过）。
//! 每一帧都以内嵌 PNG 的形式写入容器。

use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{ExtendedColorType, RgbaImage};

use super::output::write_output;
use super::pipeline::{fit_dimensions, resize_and_center, resize_rgba};
use super::{IcoSource, IconError};

/// 按帧来源策略生成 ICO 各帧位图。
///
/// `rendered` 为 PNG 阶段已生成的画布；`Canvas` 模式下同尺寸画布直接复用。
/// `Original` 模式不放大：边长超过源图宽或高的帧尺寸会被跳过，全部跳过时报错。
pub(crate) fn build_frames(
    source: &RgbaImage,
    sizes: &[u32],
    ico_source: IcoSource,
    filter: FilterType,
    rendered: &[RgbaImage],
) -> Result<Vec<RgbaImage>, IconError> {
    let (source_width, source_height) = source.dimensions();
    let sizes: Vec<u32> = match ico_source {
        IcoSource::Canvas => sizes.to_vec(),
        IcoSource::Original => sizes
            .iter()
            .copied()
            .filter(|&size| {
                let fits = size <= source_width && size <= source_height;
                if !fits {
                    log::warn!(
                        "⚠️ 源图 {}x{} 小于 ICO 帧 {}x{}，跳过该帧",
                        source_width,
                        source_height,
                        size,
                        size
                    );
                }
                fits
            })
            .collect(),
    };

    if sizes.is_empty() {
        return Err(IconError::InvalidDimensions(format!(
            "源图 {}x{} 小于所有 ICO 帧尺寸",
            source_width, source_height
        )));
    }

    sizes
        .iter()
        .map(|&size| match ico_source {
            IcoSource::Canvas => {
                match rendered
                    .iter()
                    .find(|canvas| canvas.dimensions() == (size, size))
                {
                    Some(canvas) => Ok(canvas.clone()),
                    None => resize_and_center(source, size, size, filter),
                }
            }
            IcoSource::Original => {
                let (new_width, new_height) =
                    fit_dimensions(source_width, source_height, size, size)?;
                resize_rgba(source, new_width, new_height, filter)
            }
        })
        .collect()
}

/// 将各帧编码为 ICO 文件，返回写入的帧尺寸。
pub(crate) fn write_ico(path: &Path, frames: &[RgbaImage]) -> Result<Vec<(u32, u32)>, IconError> {
    let ico_frames = frames
        .iter()
        .map(|frame| {
            let (width, height) = frame.dimensions();
            IcoFrame::as_png(frame.as_raw(), width, height, ExtendedColorType::Rgba8).map_err(|e| {
                IconError::Encode(format!("ICO 帧 {}x{} 编码失败：{}", width, height, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&ico_frames)
        .map_err(|e| IconError::Encode(format!("ICO 容器编码失败：{}", e)))?;
    write_output(path, &bytes)?;

    Ok(frames.iter().map(RgbaImage::dimensions).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};

    fn wide_source() -> RgbaImage {
        ImageBuffer::from_fn(400, 200, |x, _| Rgba([(x % 255) as u8, 40, 200, 255]))
    }

    /// 解析 ICO 目录项中的宽高（0 表示 256）。
    fn directory_sizes(bytes: &[u8]) -> Vec<(u32, u32)> {
        let count = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;
        (0..count)
            .map(|i| {
                let entry = &bytes[6 + i * 16..6 + (i + 1) * 16];
                let side = |b: u8| if b == 0 { 256 } else { b as u32 };
                (side(entry[0]), side(entry[1]))
            })
            .collect()
    }

    #[test]
    fn canvas_frames_reuse_rendered_pngs() {
        let source = wide_source();
        let rendered =
            vec![resize_and_center(&source, 32, 32, FilterType::Lanczos3).expect("render")];

        let frames = build_frames(
            &source,
            &[32, 64],
            IcoSource::Canvas,
            FilterType::Lanczos3,
            &rendered,
        )
        .expect("frames");

        assert_eq!(frames[0], rendered[0]);
        assert_eq!(frames[1].dimensions(), (64, 64));
        assert_eq!(frames[1].get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn original_frames_keep_aspect_without_padding() {
        let frames = build_frames(
            &wide_source(),
            &[32, 128],
            IcoSource::Original,
            FilterType::Lanczos3,
            &[],
        )
        .expect("frames");

        assert_eq!(frames[0].dimensions(), (32, 16));
        assert_eq!(frames[1].dimensions(), (128, 64));
        assert!(frames[1].pixels().all(|p| p.0[3] != 0));
    }

    #[test]
    fn writes_container_with_every_frame() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.ico");
        let frames = build_frames(
            &wide_source(),
            &[32, 128, 256],
            IcoSource::Canvas,
            FilterType::Lanczos3,
            &[],
        )
        .expect("frames");

        let written = write_ico(&path, &frames).expect("ico write");
        assert_eq!(written, vec![(32, 32), (128, 128), (256, 256)]);

        let bytes = std::fs::read(&path).expect("read ico");
        assert_eq!(&bytes[0..4], &[0, 0, 1, 0]);
        assert_eq!(directory_sizes(&bytes), written);

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Ico)
            .expect("ico should decode");
        assert_eq!((decoded.width(), decoded.height()), (256, 256));
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("icon.ico");
        let frames = vec![RgbaImage::new(16, 16)];

        assert!(matches!(
            write_ico(&path, &frames),
            Err(IconError::Write(_))
        ));
    }

    #[test]
    fn original_frames_skip_sizes_larger_than_source() {
        let frames = build_frames(
            &wide_source(),
            &[32, 128, 256],
            IcoSource::Original,
            FilterType::Lanczos3,
            &[],
        )
        .expect("frames");

        let sizes: Vec<(u32, u32)> = frames.iter().map(RgbaImage::dimensions).collect();
        assert_eq!(sizes, vec![(32, 16), (128, 64)]);
    }

    #[test]
    fn original_frames_fail_when_every_size_is_too_large() {
        let tiny: RgbaImage = ImageBuffer::from_pixel(20, 20, Rgba([1, 2, 3, 255]));

        let result = build_frames(&tiny, &[32, 128], IcoSource::Original, FilterType::Lanczos3, &[]);
        assert!(matches!(result, Err(IconError::InvalidDimensions(_))));
    }

    #[cfg(unix)]
    #[test]
    fn full_disk_is_a_write_error() {
        let frames = vec![RgbaImage::new(16, 16)];

        assert!(matches!(
            write_ico(Path::new("/dev/full"), &frames),
            Err(IconError::Write(_))
        ));
    }
}
