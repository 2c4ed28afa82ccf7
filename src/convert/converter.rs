//! Thumbnail download and local format conversion

use crate::core::thumbnail::ThumbnailFormat;
use crate::error::ThumbError;
use crate::utils::filename::{generate_unique_filename, to_safe_filename};
use image::ImageOutputFormat;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of a single download request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Saved in the requested format
    Saved(PathBuf),
    /// Conversion failed; the unconverted JPEG bytes were saved instead
    FellBackToJpeg(PathBuf),
}

impl DownloadOutcome {
    /// Path of the saved file
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Saved(path) | DownloadOutcome::FellBackToJpeg(path) => path,
        }
    }

    /// Whether the JPEG fallback was taken
    pub fn fell_back(&self) -> bool {
        matches!(self, DownloadOutcome::FellBackToJpeg(_))
    }
}

/// Downloads thumbnails and re-encodes them into the requested format
pub struct FormatConverter {
    client: reqwest::Client,
    output_dir: PathBuf,
}

impl FormatConverter {
    /// Create a converter writing into `output_dir`
    pub fn new(client: reqwest::Client, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Download a thumbnail in the requested format.
    ///
    /// JPG saves the source bytes unmodified; the image host already
    /// serves JPEG. PNG and WEBP decode the fetched bitmap and re-encode
    /// it locally at maximum quality. When decoding or re-encoding fails,
    /// the converter falls back exactly once to an unconverted JPEG under
    /// the filename with its extension rewritten to `.jpg`.
    pub async fn download_as(
        &self,
        source_url: &str,
        filename: &str,
        format: ThumbnailFormat,
    ) -> Result<DownloadOutcome, ThumbError> {
        match format {
            ThumbnailFormat::Jpg => {
                let path = self.save_direct(source_url, filename).await?;
                Ok(DownloadOutcome::Saved(path))
            }
            ThumbnailFormat::Png | ThumbnailFormat::Webp => {
                match self.convert_and_save(source_url, filename, format).await {
                    Ok(path) => Ok(DownloadOutcome::Saved(path)),
                    Err(e) if e.is_recoverable() => {
                        warn!(
                            "Conversion to {} failed ({}), downloading as JPG instead",
                            format.label(),
                            e
                        );
                        let fallback_name = Path::new(filename).with_extension("jpg");
                        let path = self
                            .save_direct(source_url, &fallback_name.to_string_lossy())
                            .await?;
                        Ok(DownloadOutcome::FellBackToJpeg(path))
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    async fn fetch_bytes(&self, source_url: &str) -> Result<Vec<u8>, ThumbError> {
        debug!("Fetching thumbnail bytes from {}", source_url);
        let response = self
            .client
            .get(source_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn save_direct(&self, source_url: &str, filename: &str) -> Result<PathBuf, ThumbError> {
        let bytes = self.fetch_bytes(source_url).await?;
        self.write_atomic(filename, &bytes).await
    }

    async fn convert_and_save(
        &self,
        source_url: &str,
        filename: &str,
        format: ThumbnailFormat,
    ) -> Result<PathBuf, ThumbError> {
        let bytes = self.fetch_bytes(source_url).await?;
        let bitmap = image::load_from_memory(&bytes)?;

        let output_format = match format {
            ThumbnailFormat::Png => ImageOutputFormat::Png,
            ThumbnailFormat::Webp => ImageOutputFormat::WebP,
            ThumbnailFormat::Jpg => ImageOutputFormat::Jpeg(100),
        };

        let mut encoded = Vec::new();
        bitmap.write_to(&mut Cursor::new(&mut encoded), output_format)?;
        info!(
            "Re-encoded {}x{} bitmap as {}",
            bitmap.width(),
            bitmap.height(),
            format.label()
        );

        self.write_atomic(filename, &encoded).await
    }

    /// Write bytes under a sanitized, collision-free name in the output
    /// directory, via a temp file and rename
    async fn write_atomic(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ThumbError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let requested = Path::new(filename);
        let stem = requested
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = requested
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let safe = to_safe_filename(&stem, &extension);
        let unique = generate_unique_filename(&self.output_dir, &safe)?;
        let target = self.output_dir.join(unique);

        let tmp = target.with_extension("tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &target).await?;
        info!("Saved {}", target.display());

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter_for(dir: &tempfile::TempDir) -> FormatConverter {
        FormatConverter::new(reqwest::Client::new(), dir.path())
    }

    fn sample_jpeg_bytes() -> Vec<u8> {
        let bitmap = image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4));
        let mut bytes = Vec::new();
        bitmap
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Jpeg(100))
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_jpg_downloads_source_bytes_unmodified() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/vi/abc/hqdefault.jpg")
            .with_status(200)
            .with_body(b"raw jpeg bytes")
            .expect(1)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let outcome = converter_for(&dir)
            .download_as(
                &format!("{}/vi/abc/hqdefault.jpg", server.url()),
                "RAO RAMZAN YT DOWNLOADER - 450p.jpg",
                ThumbnailFormat::Jpg,
            )
            .await
            .unwrap();

        assert!(!outcome.fell_back());
        assert_eq!(
            outcome.path().file_name().unwrap().to_string_lossy(),
            "RAO RAMZAN YT DOWNLOADER - 450p.jpg"
        );
        assert_eq!(std::fs::read(outcome.path()).unwrap(), b"raw jpeg bytes");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_png_conversion_re_encodes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/vi/abc/maxresdefault.jpg")
            .with_status(200)
            .with_body(sample_jpeg_bytes())
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let outcome = converter_for(&dir)
            .download_as(
                &format!("{}/vi/abc/maxresdefault.jpg", server.url()),
                "RAO RAMZAN YT DOWNLOADER - 1080p.png",
                ThumbnailFormat::Png,
            )
            .await
            .unwrap();

        assert!(matches!(outcome, DownloadOutcome::Saved(_)));
        let saved = std::fs::read(outcome.path()).unwrap();
        // PNG signature
        assert_eq!(&saved[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_conversion_failure_falls_back_to_jpg_once() {
        let mut server = mockito::Server::new_async().await;
        // Initial fetch for conversion plus exactly one fallback fetch
        let mock = server
            .mock("GET", "/vi/abc/maxresdefault.jpg")
            .with_status(200)
            .with_body(b"definitely not an image")
            .expect(2)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let outcome = converter_for(&dir)
            .download_as(
                &format!("{}/vi/abc/maxresdefault.jpg", server.url()),
                "RAO RAMZAN YT DOWNLOADER - 2K.png",
                ThumbnailFormat::Png,
            )
            .await
            .unwrap();

        assert!(outcome.fell_back());
        assert_eq!(
            outcome.path().extension().unwrap().to_string_lossy(),
            "jpg"
        );
        assert_eq!(
            std::fs::read(outcome.path()).unwrap(),
            b"definitely not an image"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_error_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/vi/abc/hqdefault.jpg")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let err = converter_for(&dir)
            .download_as(
                &format!("{}/vi/abc/hqdefault.jpg", server.url()),
                "thumb.jpg",
                ThumbnailFormat::Jpg,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ThumbError::DownloadFailed(_)));
    }

    #[tokio::test]
    async fn test_existing_file_is_not_clobbered() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/vi/abc/hqdefault.jpg")
            .with_status(200)
            .with_body(b"new bytes")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("thumb.jpg"), b"old bytes").unwrap();

        let outcome = converter_for(&dir)
            .download_as(
                &format!("{}/vi/abc/hqdefault.jpg", server.url()),
                "thumb.jpg",
                ThumbnailFormat::Jpg,
            )
            .await
            .unwrap();

        assert_eq!(
            outcome.path().file_name().unwrap().to_string_lossy(),
            "thumb (1).jpg"
        );
        assert_eq!(
            std::fs::read(dir.path().join("thumb.jpg")).unwrap(),
            b"old bytes"
        );
    }
}
