//! Integration tests for bmpfx crates.
//!
//! End-to-end checks that run real BMP files through the reader, a filter
//! and the writer.

#[cfg(test)]
mod tests {
    use bmpfx_core::{Bgr8, Image};
    use bmpfx_io::{Bitmap, BmpReader, BmpWriter, ImageReader, ImageWriter};
    use bmpfx_ops::Filter;
    use tempfile::tempdir;

    fn gradient(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |r, c| {
            Bgr8::new(
                (c * 255 / width.max(1)) as u8,
                (r * 255 / height.max(1)) as u8,
                ((r + c) * 9 % 256) as u8,
            )
        })
        .unwrap()
    }

    /// Test full pipeline: write -> read -> filter -> write -> read
    #[test]
    fn test_filter_pipeline_every_filter() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bmp");
        let source = Bitmap::new(gradient(13, 7));
        bmpfx_io::write(&input, &source).unwrap();

        for filter in Filter::ALL {
            let output = dir.path().join(format!("{}.bmp", filter.name()));

            let mut bitmap = bmpfx_io::read(&input).unwrap();
            filter.apply(&mut bitmap.image);
            bmpfx_io::write(&output, &bitmap).unwrap();

            let mut expected = source.image.clone();
            filter.apply(&mut expected);
            let loaded = bmpfx_io::read(&output).unwrap();
            assert_eq!(loaded.image, expected, "{filter}");
            assert_eq!(loaded.info, source.info, "{filter}");
        }
    }

    #[test]
    fn test_header_fields_survive_filtering() {
        let mut source = Bitmap::new(gradient(6, 5));
        source.info.top_down = true;
        source.info.x_pels_per_meter = 3780;
        source.info.y_pels_per_meter = 1000;

        let bytes = BmpWriter::new().write_to_memory(&source).unwrap();
        let mut bitmap = BmpReader::new().read_from_memory(&bytes).unwrap();
        Filter::Blur.apply(&mut bitmap.image);
        let filtered = BmpWriter::new().write_to_memory(&bitmap).unwrap();

        assert_eq!(filtered.len(), bytes.len());
        // Both headers match byte for byte; only pixels change.
        assert_eq!(&filtered[..54], &bytes[..54]);
    }

    #[test]
    fn test_reflect_twice_restores_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("odd.bmp");
        // Width 5 needs one padding byte per row.
        bmpfx_io::write(&path, &Bitmap::new(gradient(5, 4))).unwrap();
        let original = std::fs::read(&path).unwrap();

        for _ in 0..2 {
            let mut bitmap = bmpfx_io::read(&path).unwrap();
            Filter::Reflect.apply(&mut bitmap.image);
            bmpfx_io::write(&path, &bitmap).unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_known_pixel_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("white.bmp");
        let white = Image::filled(3, 2, Bgr8::WHITE).unwrap();
        bmpfx_io::write(&path, &Bitmap::new(white)).unwrap();

        let mut sepia = bmpfx_io::read(&path).unwrap();
        Filter::Sepia.apply(&mut sepia.image);
        assert!(sepia.image.pixels().iter().all(|&px| px == Bgr8::rgb(255, 255, 239)));

        let mut gray = Bitmap::new(Image::filled(2, 2, Bgr8::rgb(10, 20, 31)).unwrap());
        Filter::Grayscale.apply(&mut gray.image);
        assert!(gray.image.pixels().iter().all(|&px| px == Bgr8::gray(20)));
    }

    #[test]
    fn test_parallel_matches_serial_on_decoded_file() {
        let bytes = BmpWriter::new()
            .write_to_memory(&Bitmap::new(gradient(37, 23)))
            .unwrap();

        for filter in Filter::ALL {
            let mut serial = BmpReader::new().read_from_memory(&bytes).unwrap();
            let mut parallel = serial.clone();
            filter.apply(&mut serial.image);
            filter.apply_parallel(&mut parallel.image);
            assert_eq!(serial, parallel, "{filter}");
        }
    }

    #[test]
    fn test_unsupported_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-a-bitmap.bmp");
        let mut bytes = b"GIF89a".to_vec();
        bytes.resize(64, 0);
        std::fs::write(&path, bytes).unwrap();

        let err = BmpReader::new().read(&path).unwrap_err();
        assert!(err.is_format_error(), "{err}");
    }
}
