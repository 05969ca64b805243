//! Asset writer
//!
//! Renders icon sizes and persists them either as one multi-size ICO or as
//! one PNG per size. Existing files are overwritten in place.

mod error;

pub use error::AssetError;

use crate::core::IconSize;
use crate::render::render;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::ImageFormat;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest frame an ICO directory entry can describe
pub const MAX_CONTAINER_SIDE: u32 = 256;

/// How a batch of sizes is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// All sizes as frames of one ICO file
    Container { file_name: String },
    /// One `favicon-{w}x{h}.png` per size
    Standalone,
}

/// File name used for a standalone PNG of `size`
pub fn standalone_file_name(size: IconSize) -> String {
    format!("favicon-{}.png", size)
}

/// A file produced by the writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenAsset {
    pub path: PathBuf,
    /// Frame sizes in file order
    pub sizes: Vec<IconSize>,
}

impl fmt::Display for WrittenAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self.sizes.iter().map(IconSize::to_string).collect();
        write!(f, "{} ({})", self.path.display(), sizes.join(", "))
    }
}

/// Writes rendered icons into one output directory
#[derive(Debug, Clone)]
pub struct AssetWriter {
    out_dir: PathBuf,
}

impl AssetWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create the output directory if it is missing
    pub fn ensure_dir(&self) -> Result<(), AssetError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| AssetError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })
    }

    /// Render and persist `sizes` in the given mode.
    ///
    /// `on_written` runs after each file lands on disk. A failure stops the
    /// batch; files written before it are left in place.
    pub fn write<F>(
        &self,
        mode: &OutputMode,
        sizes: &[IconSize],
        mut on_written: F,
    ) -> Result<Vec<WrittenAsset>, AssetError>
    where
        F: FnMut(&WrittenAsset),
    {
        self.ensure_dir()?;

        let written = match mode {
            OutputMode::Container { file_name } => {
                let asset = self.write_container(file_name, sizes)?;
                on_written(&asset);
                vec![asset]
            }
            OutputMode::Standalone => {
                let mut assets = Vec::with_capacity(sizes.len());
                for &size in sizes {
                    let asset = self.write_png(&standalone_file_name(size), size)?;
                    on_written(&asset);
                    assets.push(asset);
                }
                assets
            }
        };

        Ok(written)
    }

    /// Bundle `sizes` into one ICO, smallest frame first
    pub fn write_container(
        &self,
        file_name: &str,
        sizes: &[IconSize],
    ) -> Result<WrittenAsset, AssetError> {
        let mut frames = sizes.to_vec();
        frames.sort_by_key(|size| (size.area(), size.width, size.height));
        frames.dedup();

        if let Some(&bad) = frames.iter().find(|size| !fits_container(**size)) {
            return Err(AssetError::InvalidFrameSize(bad));
        }

        let path = self.out_dir.join(file_name);
        let mut dir = IconDir::new(ResourceType::Icon);
        for &size in &frames {
            let canvas = render(size.width, size.height);
            let image = IconImage::from_rgba_data(size.width, size.height, canvas.into_raw());
            let entry = IconDirEntry::encode(&image)
                .map_err(|source| AssetError::EncodeFrame { size, source })?;
            dir.add_entry(entry);
            tracing::debug!(size = %size, "encoded icon frame");
        }

        let mut bytes = Vec::new();
        dir.write(&mut bytes)
            .map_err(|source| AssetError::EncodeContainer {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, &bytes).map_err(|source| AssetError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), frames = frames.len(), bytes = bytes.len(), "wrote icon container");
        Ok(WrittenAsset {
            path,
            sizes: frames,
        })
    }

    /// Render `size` and save it as a PNG named `file_name`
    pub fn write_png(&self, file_name: &str, size: IconSize) -> Result<WrittenAsset, AssetError> {
        let path = self.out_dir.join(file_name);
        let canvas = render(size.width, size.height);

        canvas
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(source) => AssetError::Write {
                    path: path.clone(),
                    source,
                },
                other => AssetError::EncodePng {
                    path: path.clone(),
                    source: other,
                },
            })?;

        tracing::debug!(path = %path.display(), size = %size, "wrote png");
        Ok(WrittenAsset {
            path,
            sizes: vec![size],
        })
    }
}

fn fits_container(size: IconSize) -> bool {
    size.is_valid() && size.width <= MAX_CONTAINER_SIDE && size.height <= MAX_CONTAINER_SIDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FLAG_RED, TRANSPARENT};
    use std::fs::File;
    use tempfile::TempDir;

    fn squares(sides: &[u32]) -> Vec<IconSize> {
        sides.iter().copied().map(IconSize::square).collect()
    }

    fn read_container(path: &Path) -> IconDir {
        IconDir::read(File::open(path).unwrap()).unwrap()
    }

    #[test]
    fn test_standalone_file_name() {
        assert_eq!(standalone_file_name(IconSize::square(16)), "favicon-16x16.png");
        assert_eq!(
            standalone_file_name(IconSize::new(180, 96)),
            "favicon-180x96.png"
        );
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("a").join("b");
        let writer = AssetWriter::new(&out);

        writer.ensure_dir().unwrap();
        writer.ensure_dir().unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_container_frames_sorted_ascending() {
        let tmp = TempDir::new().unwrap();
        let writer = AssetWriter::new(tmp.path());

        let asset = writer
            .write_container("favicon.ico", &squares(&[128, 16, 64, 32, 48]))
            .unwrap();
        assert_eq!(asset.sizes, squares(&[16, 32, 48, 64, 128]));

        let dir = read_container(&asset.path);
        let widths: Vec<u32> = dir.entries().iter().map(|e| e.width()).collect();
        let heights: Vec<u32> = dir.entries().iter().map(|e| e.height()).collect();
        assert_eq!(widths, vec![16, 32, 48, 64, 128]);
        assert_eq!(heights, widths);
    }

    #[test]
    fn test_container_frames_hold_rendered_pixels() {
        let tmp = TempDir::new().unwrap();
        let writer = AssetWriter::new(tmp.path());
        let asset = writer
            .write_container("favicon.ico", &squares(&[16]))
            .unwrap();

        let dir = read_container(&asset.path);
        let frame = dir.entries()[0].decode().unwrap();
        let rgba = frame.rgba_data();
        let pixel = |x: usize, y: usize| &rgba[(y * 16 + x) * 4..(y * 16 + x) * 4 + 4];

        assert_eq!(pixel(8, 8), &FLAG_RED.0);
        assert_eq!(pixel(0, 0)[3], TRANSPARENT.0[3]);
    }

    #[test]
    fn test_container_rejects_oversized_frame() {
        let tmp = TempDir::new().unwrap();
        let writer = AssetWriter::new(tmp.path());

        let err = writer
            .write_container("favicon.ico", &squares(&[16, 300]))
            .unwrap_err();
        assert!(matches!(err, AssetError::InvalidFrameSize(size) if size == IconSize::square(300)));
        assert!(!tmp.path().join("favicon.ico").exists());
    }

    #[test]
    fn test_png_matches_render() {
        let tmp = TempDir::new().unwrap();
        let writer = AssetWriter::new(tmp.path());

        let asset = writer
            .write_png("favicon-32x32.png", IconSize::square(32))
            .unwrap();
        let decoded = image::open(&asset.path).unwrap().to_rgba8();
        assert_eq!(decoded, render(32, 32));
    }

    #[test]
    fn test_standalone_mode_reports_each_file() {
        let tmp = TempDir::new().unwrap();
        let writer = AssetWriter::new(tmp.path().join("app"));
        let mut seen = Vec::new();

        let written = writer
            .write(&OutputMode::Standalone, &squares(&[16, 96]), |asset| {
                seen.push(asset.path.clone())
            })
            .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            seen,
            vec![
                tmp.path().join("app").join("favicon-16x16.png"),
                tmp.path().join("app").join("favicon-96x96.png"),
            ]
        );
        for path in &seen {
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let writer = AssetWriter::new(tmp.path());
        let mode = OutputMode::Container {
            file_name: "favicon.ico".to_string(),
        };

        writer.write(&mode, &squares(&[16, 32]), |_| {}).unwrap();
        let first = fs::read(tmp.path().join("favicon.ico")).unwrap();
        writer.write(&mode, &squares(&[16, 32]), |_| {}).unwrap();
        let second = fs::read(tmp.path().join("favicon.ico")).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_unwritable_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let writer = AssetWriter::new(blocker.join("app"));
        let err = writer
            .write(&OutputMode::Standalone, &squares(&[16]), |_| {})
            .unwrap_err();
        assert!(matches!(err, AssetError::CreateDir { .. }));
    }

    #[test]
    fn test_written_asset_display() {
        let asset = WrittenAsset {
            path: PathBuf::from("app").join("favicon.ico"),
            sizes: squares(&[16, 32]),
        };
        let shown = asset.to_string();
        assert!(shown.ends_with("favicon.ico (16x16, 32x32)"));
    }
}
