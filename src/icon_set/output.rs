//! # 落盘模块
//!
//! 先在内存中完成编码，再一次性写入目标文件。
//! 写入阶段的任何 I/O 错误（含磁盘已满）都会作为 `IconError::Write` 返回，不会被缓冲区吞掉。

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::IconError;

/// 将画布编码为 PNG 字节。
pub(crate) fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let (width, height) = canvas.dimensions();
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| IconError::Encode(format!("PNG {}x{} 编码失败：{}", width, height, e)))?;
    Ok(bytes)
}

/// 写入已编码的文件内容。
pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    std::fs::write(path, bytes)
        .map_err(|e| IconError::Write(format!("写入 {} 失败：{}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn encoded_png_decodes_back_to_same_pixels() {
        let canvas: RgbaImage =
            ImageBuffer::from_fn(8, 4, |x, y| Rgba([x as u8, y as u8, 3, (x * 30) as u8]));

        let bytes = encode_png(&canvas).expect("encode");
        let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();

        assert_eq!(decoded, canvas);
    }

    #[test]
    fn missing_parent_dir_is_a_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("32x32.png");

        assert!(matches!(
            write_output(&path, b"png"),
            Err(IconError::Write(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn full_disk_is_a_write_error() {
        let bytes = encode_png(&RgbaImage::new(16, 16)).expect("encode");

        assert!(matches!(
            write_output(Path::new("/dev/full"), &bytes),
            Err(IconError::Write(_))
        ));
    }
}
