//! quadmosaic-io - Image acquisition and output
//!
//! Thin adapters between image files and [`Pix`]. Decoding and encoding
//! are delegated to the `image` crate; this crate only converts between
//! its RGB buffers and the packed pixels analyzed by the decomposition.
//!
//! # Examples
//!
//! ```no_run
//! use quadmosaic_io::{ImageFormat, read_image_resized, write_image};
//!
//! // Load any supported file onto a 1000x1000 canvas
//! let pix = read_image_resized("photo.jpg", 1000, 1000).unwrap();
//! write_image(&pix, "canvas.png", ImageFormat::Png).unwrap();
//! ```

mod error;

pub use error::{IoError, IoResult};

use image::imageops::FilterType;
use image::{ImageError, RgbImage};
use quadmosaic_core::{Error, Pix, PixelGrid};
use std::path::Path;
use tracing::debug;

/// Image file formats supported for writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// PNG format
    #[default]
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// BMP format
    Bmp,
    /// PNM (binary PPM) format
    Pnm,
    /// TIFF format
    Tiff,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Pnm => "pnm",
            Self::Tiff => "tif",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "pnm" | "ppm" => Ok(Self::Pnm),
            "tif" | "tiff" => Ok(Self::Tiff),
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Pnm => image::ImageFormat::Pnm,
            Self::Tiff => image::ImageFormat::Tiff,
        }
    }
}

fn decode_error(err: ImageError) -> IoError {
    match err {
        ImageError::IoError(e) => IoError::Io(e),
        ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
        other => IoError::Decode(other.to_string()),
    }
}

fn with_text(pix: Pix, text: String) -> Pix {
    match pix.try_into_mut() {
        Ok(mut pix_mut) => {
            pix_mut.set_text(Some(text));
            pix_mut.into()
        }
        Err(pix) => pix,
    }
}

/// Convert an `image` RGB buffer into a [`Pix`].
pub fn pix_from_rgb_image(img: &RgbImage) -> IoResult<Pix> {
    Ok(Pix::from_rgb_bytes(img.width(), img.height(), img.as_raw())?)
}

/// Convert a [`Pix`] into an `image` RGB buffer.
pub fn pix_to_rgb_image(pix: &Pix) -> RgbImage {
    RgbImage::from_fn(pix.width(), pix.height(), |x, y| {
        let (r, g, b) = pix.rgb_at(x, y);
        image::Rgb([r, g, b])
    })
}

/// Read an image file into an RGB [`Pix`].
///
/// Any alpha channel is dropped; grayscale and palette images are expanded
/// to RGB. The source path is stored as the image text.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let img = image::open(path).map_err(decode_error)?.to_rgb8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "read image");
    let pix = pix_from_rgb_image(&img)?;
    Ok(with_text(pix, path.display().to_string()))
}

/// Read an image file and resize it to exactly `width` x `height`.
///
/// # Errors
///
/// Returns a core [`Error::InvalidDimension`] if either target dimension
/// is zero.
pub fn read_image_resized<P: AsRef<Path>>(path: P, width: u32, height: u32) -> IoResult<Pix> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height }.into());
    }
    let path = path.as_ref();
    let img = image::open(path).map_err(decode_error)?.to_rgb8();
    let resized = if img.dimensions() == (width, height) {
        img
    } else {
        debug!(
            path = %path.display(),
            from_width = img.width(),
            from_height = img.height(),
            width,
            height,
            "resizing image"
        );
        image::imageops::resize(&img, width, height, FilterType::Triangle)
    };
    let pix = pix_from_rgb_image(&resized)?;
    Ok(with_text(pix, path.display().to_string()))
}

/// Write a [`Pix`] to a file in the given format.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let img = pix_to_rgb_image(pix);
    img.save_with_format(path, format.to_image_format())
        .map_err(|e| match e {
            ImageError::IoError(e) => IoError::Io(e),
            other => IoError::Encode(other.to_string()),
        })?;
    debug!(path = %path.display(), ?format, "wrote image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ImageFormat::from_path("a/b.PNG").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("x.jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("x.ppm").unwrap(), ImageFormat::Pnm);
        assert!(matches!(
            ImageFormat::from_path("x.xyz"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(ImageFormat::from_path("noext").is_err());
    }

    #[test]
    fn test_rgb_image_conversion() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([7, 8, 9]));
        let pix = pix_from_rgb_image(&img).unwrap();
        assert_eq!(pix.get_rgb(2, 1), Some((7, 8, 9)));
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));

        let back = pix_to_rgb_image(&pix);
        assert_eq!(back, img);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_image("/nonexistent/quadmosaic/none.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn test_read_resized_rejects_zero() {
        let err = read_image_resized("whatever.png", 0, 10).unwrap_err();
        assert!(matches!(
            err,
            IoError::Core(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
    }
}
