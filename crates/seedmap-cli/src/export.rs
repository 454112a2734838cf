//! PNG output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::CliError;

/// Encodes row-major RGBA8 pixels as a PNG at `path`, creating parent
/// directories as needed.
pub fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<(), CliError> {
    let io_err = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_png_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps").join("tile.png");
        let pixels: Vec<u8> = (0..3 * 2)
            .flat_map(|i| [i as u8 * 40, 100, 200, 255])
            .collect();

        write_png(&path, 3, 2, &pixels).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&buf[..info.buffer_size()], pixels.as_slice());
    }

    #[test]
    fn test_wrong_pixel_count_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_png(&dir.path().join("bad.png"), 4, 4, &[0; 12]);
        assert!(matches!(result, Err(CliError::Png(_))));
    }
}
