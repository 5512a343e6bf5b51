use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::AtlasError;

/// Encode raw image bytes as a `data:<mime>;base64,...` URL.
///
/// The format is sniffed from the bytes; anything `image` cannot recognise
/// is rejected with [`AtlasError::NotAnImage`].
pub fn encode(bytes: &[u8]) -> Result<String, AtlasError> {
    let format = image::guess_format(bytes).map_err(|_| AtlasError::NotAnImage)?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Split a `data:` URL back into its MIME type and decoded payload.
pub fn decode(url: &str) -> Result<(String, Vec<u8>), AtlasError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| AtlasError::DataUrl("missing `data:` prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AtlasError::DataUrl("missing `,` separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| AtlasError::DataUrl("only base64 payloads are supported".to_string()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AtlasError::DataUrl(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}

/// Pixel dimensions of an encoded image, if its header can be read.
pub fn dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Conventional file extension for a MIME type produced by [`encode`].
pub fn extension(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/tiff" => "tiff",
        _ => "png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([249, 115, 22]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_encode_png() {
        let url = encode(&tiny_png()).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_encode_rejects_non_images() {
        assert!(matches!(encode(b"hello, world"), Err(AtlasError::NotAnImage)));
    }

    #[test]
    fn test_decode_recovers_bytes() {
        let png = tiny_png();
        let (mime, bytes) = decode(&encode(&png).unwrap()).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, png);
        assert_eq!(dimensions(&bytes), Some((3, 2)));
    }

    #[test]
    fn test_decode_rejects_malformed_urls() {
        assert!(decode("/fri_map.png?t=0").is_err());
        assert!(decode("data:image/png,plain").is_err());
        assert!(decode("data:image/png;base64").is_err());
        assert!(decode("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("image/jpeg"), "jpg");
        assert_eq!(extension("image/png"), "png");
    }
}
