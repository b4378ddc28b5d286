//! QR code compositing.
//!
//! The QR image itself comes from a remote rendering service. When possible
//! it is downloaded and decorated before being handed to the client:
//!
//! - the configured brand mark is drawn on a white pad at the centre of the
//!   code (QR error correction tolerates the occlusion);
//! - when a codeword is requested, the image is wrapped in an SVG that adds a
//!   text badge under the code.
//!
//! The result is a data URL. Any failure along the way falls back to the
//! plain remote QR URL, which is always scannable.

use crate::config::Config;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use common::link::{public_url, remote_qr_url};
use common::requests::QrCodeResponse;
use image::imageops::FilterType;
use image::{load_from_memory, DynamicImage, Rgba, RgbaImage};
use log::{debug, warn};
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use std::path::PathBuf;
use thiserror::Error;

/// Fraction of the QR side the brand mark may cover.
const BRAND_MARK_RATIO: u32 = 5;
/// White margin around the brand mark, in pixels.
const BRAND_MARK_PADDING: u32 = 4;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("invalid QR service URL: {0}")]
    Url(String),
    #[error("failed to fetch QR image: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("QR service answered with status {0}")]
    Status(u16),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read brand mark {path}: {source}")]
    BrandMark {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("compositing task failed: {0}")]
    Task(String),
}

/// Builds the QR code for an inspection, composited when possible.
pub async fn build_qr_code(
    client: &reqwest::Client,
    config: &Config,
    id: i64,
    reference: &str,
    codeword: Option<String>,
) -> Result<QrCodeResponse, QrError> {
    let link = public_url(&config.public_base_url, id, reference);
    let remote = remote_qr_url(&config.qr_service_url, &link, config.qr_size)
        .map_err(|e| QrError::Url(e.to_string()))?;

    match composite_remote(client, &remote, config.brand_mark_path.clone(), codeword).await {
        Ok(data_url) => {
            debug!("Composited QR code for inspection {}", id);
            Ok(QrCodeResponse {
                url: data_url,
                composited: true,
                public_url: link,
            })
        }
        Err(e) => {
            warn!("QR compositing failed for inspection {}, using remote image: {}", id, e);
            Ok(QrCodeResponse {
                url: remote,
                composited: false,
                public_url: link,
            })
        }
    }
}

async fn composite_remote(
    client: &reqwest::Client,
    remote: &str,
    brand_mark_path: Option<PathBuf>,
    codeword: Option<String>,
) -> Result<String, QrError> {
    let response = client.get(remote).send().await?;
    if !response.status().is_success() {
        return Err(QrError::Status(response.status().as_u16()));
    }
    let qr_bytes = response.bytes().await?.to_vec();

    tokio::task::spawn_blocking(move || {
        let brand_mark = match brand_mark_path {
            Some(path) => Some(
                std::fs::read(&path).map_err(|source| QrError::BrandMark { path, source })?,
            ),
            None => None,
        };
        composite(&qr_bytes, brand_mark.as_deref(), codeword.as_deref())
    })
    .await
    .map_err(|e| QrError::Task(e.to_string()))?
}

/// Decorates raw QR image bytes and returns a data URL.
pub fn composite(
    qr_bytes: &[u8],
    brand_mark: Option<&[u8]>,
    codeword: Option<&str>,
) -> Result<String, QrError> {
    let mut canvas = load_from_memory(qr_bytes)?.to_rgba8();
    if let Some(mark) = brand_mark {
        overlay_brand_mark(&mut canvas, &load_from_memory(mark)?);
    }
    let (width, height) = canvas.dimensions();
    let png = encode_png(canvas)?;

    match codeword.map(str::trim).filter(|c| !c.is_empty()) {
        Some(codeword) => {
            let svg = badge_svg(&BASE64.encode(&png), width, height, codeword);
            Ok(format!("data:image/svg+xml;base64,{}", BASE64.encode(svg)))
        }
        None => Ok(format!("data:image/png;base64,{}", BASE64.encode(png))),
    }
}

/// Draws `mark` on a white square at the centre of `canvas`.
fn overlay_brand_mark(canvas: &mut RgbaImage, mark: &DynamicImage) {
    let (width, height) = canvas.dimensions();
    let max_side = (width.min(height) / BRAND_MARK_RATIO).max(1);
    let mark = mark.resize(max_side, max_side, FilterType::Lanczos3).to_rgba8();
    let (mark_w, mark_h) = mark.dimensions();

    let pad_w = mark_w + 2 * BRAND_MARK_PADDING;
    let pad_h = mark_h + 2 * BRAND_MARK_PADDING;
    let pad = RgbaImage::from_pixel(pad_w, pad_h, Rgba([255, 255, 255, 255]));
    let pad_x = i64::from(width.saturating_sub(pad_w) / 2);
    let pad_y = i64::from(height.saturating_sub(pad_h) / 2);

    image::imageops::overlay(canvas, &pad, pad_x, pad_y);
    image::imageops::overlay(
        canvas,
        &mark,
        pad_x + i64::from(BRAND_MARK_PADDING),
        pad_y + i64::from(BRAND_MARK_PADDING),
    );
}

/// Flattens alpha over white and encodes an 8-bit RGB PNG.
fn encode_png(canvas: RgbaImage) -> Result<Vec<u8>, QrError> {
    let (w, h) = canvas.dimensions();
    let mut background = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut background, &canvas, 0, 0);
    let raw = DynamicImage::ImageRgba8(background).to_rgb8().into_raw();

    let mut out = Vec::new();
    {
        let mut encoder = PngEncoder::new(&mut out, w, h);
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raw)?;
    }
    Ok(out)
}

fn badge_svg(png_base64: &str, width: u32, height: u32, codeword: &str) -> String {
    let badge_height = (height / 6).max(24);
    let font_size = badge_height * 11 / 20;
    let baseline = height + badge_height * 7 / 10;
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{total}\" viewBox=\"0 0 {w} {total}\">",
            "<image href=\"data:image/png;base64,{png}\" x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\"/>",
            "<rect x=\"0\" y=\"{h}\" width=\"{w}\" height=\"{badge}\" fill=\"#111111\"/>",
            "<text x=\"{cx}\" y=\"{baseline}\" font-family=\"Arial, sans-serif\" font-size=\"{font}\" ",
            "font-weight=\"bold\" text-anchor=\"middle\" fill=\"#ffffff\">{text}</text>",
            "</svg>"
        ),
        w = width,
        h = height,
        total = height + badge_height,
        png = png_base64,
        badge = badge_height,
        cx = width / 2,
        baseline = baseline,
        font = font_size,
        text = crate::html::escape_html(codeword),
    )
}
