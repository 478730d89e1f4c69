//! # Image Size Statistics

use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageError, ImageReader};

use crate::errors::{RSResult, RecstatError};

/// The size of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    /// Height in pixels.
    pub height: u32,

    /// Width in pixels.
    pub width: u32,
}

impl ImageSize {
    /// Create a size from `(height, width)`.
    pub fn new(
        height: u32,
        width: u32,
    ) -> Self {
        Self { height, width }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Running min/max aggregates over a sequence of [`ImageSize`]s.
///
/// The ratio extrema are folded from each image's own ratio; they are not
/// derived from the width and height extrema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSizeStats {
    /// Number of images observed.
    pub count: usize,

    /// Minimum height.
    pub min_height: u32,

    /// Maximum height.
    pub max_height: u32,

    /// Minimum width.
    pub min_width: u32,

    /// Maximum width.
    pub max_width: u32,

    /// Minimum aspect ratio.
    pub min_ratio: f64,

    /// Maximum aspect ratio.
    pub max_ratio: f64,
}

impl Default for ImageSizeStats {
    fn default() -> Self {
        Self {
            count: 0,
            min_height: u32::MAX,
            max_height: 0,
            min_width: u32::MAX,
            max_width: 0,
            min_ratio: f64::INFINITY,
            max_ratio: 0.0,
        }
    }
}

impl ImageSizeStats {
    /// Fold one image size into the aggregates.
    pub fn observe(
        &mut self,
        size: ImageSize,
    ) {
        let ratio = size.aspect_ratio();
        self.count += 1;
        self.min_height = self.min_height.min(size.height);
        self.max_height = self.max_height.max(size.height);
        self.min_width = self.min_width.min(size.width);
        self.max_width = self.max_width.max(size.width);
        self.min_ratio = self.min_ratio.min(ratio);
        self.max_ratio = self.max_ratio.max(ratio);
    }

    /// Check if no images were observed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl FromIterator<ImageSize> for ImageSizeStats {
    fn from_iter<I: IntoIterator<Item = ImageSize>>(iter: I) -> Self {
        let mut stats = Self::default();
        for size in iter {
            stats.observe(size);
        }
        stats
    }
}

impl fmt::Display for ImageSizeStats {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "no images");
        }
        writeln!(f, "min_h: {}", self.min_height)?;
        writeln!(f, "max_h: {}", self.max_height)?;
        writeln!(f, "min_w: {}", self.min_width)?;
        writeln!(f, "max_w: {}", self.max_width)?;
        writeln!(f, "min_ratio: {}", self.min_ratio)?;
        writeln!(f, "max_ratio: {}", self.max_ratio)
    }
}

fn should_retry(err: &ImageError) -> bool {
    matches!(err, ImageError::Decoding(_) | ImageError::Unsupported(_))
}

fn decode_with_guessed_format(path: &Path) -> Result<DynamicImage, ImageError> {
    let reader = BufReader::new(File::open(path)?);
    ImageReader::new(reader).with_guessed_format()?.decode()
}

/// Decode an image and read its size.
///
/// When the extension does not match the content, decoding is retried with
/// the format sniffed from the file bytes.
pub fn read_image_size<P: AsRef<Path>>(path: P) -> RSResult<ImageSize> {
    let path = path.as_ref();
    let img = match image::open(path) {
        Ok(img) => Ok(img),
        Err(err) if should_retry(&err) => {
            log::warn!(
                "Standard decode failed for {} ({err}). Retrying with format sniffing.",
                path.display()
            );
            decode_with_guessed_format(path)
        }
        Err(err) => Err(err),
    }
    .map_err(|source| RecstatError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ImageSize::new(img.height(), img.width()))
}

/// List the regular files of a directory, sorted by file name.
pub fn list_image_files<P: AsRef<Path>>(dir: P) -> RSResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RecstatError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            log::debug!("skipping directory: {}", entry.path().display());
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

/// Scan every image in a directory.
///
/// Any file which fails to decode aborts the scan.
pub fn scan_image_dir<P: AsRef<Path>>(dir: P) -> RSResult<ImageSizeStats> {
    let mut stats = ImageSizeStats::default();
    for path in list_image_files(dir)? {
        let size = read_image_size(&path)?;
        log::trace!("{}: {}x{}", path.display(), size.height, size.width);
        stats.observe(size);
    }
    Ok(stats)
}
