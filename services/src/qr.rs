use base64::{Engine as _, engine::general_purpose::STANDARD};
use qrcode::QrCode;
use qrcode::render::svg;

/// Renders `content` as a QR code and returns it as an SVG data URL.
pub fn render_data_url(content: &str) -> Result<String, String> {
    let code = QrCode::new(content.as_bytes()).map_err(|e| e.to_string())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .build();

    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(image)))
}
