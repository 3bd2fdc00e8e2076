use crate::constants::{LABEL_FONT, LABEL_FONT_PX, LABEL_PAD_PX};
use glam::Vec2;
use landing_core::{LabelRect, LABEL_TEXT_SIZE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// White text on a transparent background, RGBA8, rows top to bottom.
pub struct LabelBitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    /// Quad in label space covering the whole bitmap, baseline on y = 0.
    pub rect: LabelRect,
}

/// Rasterize `text` with the browser's 2D canvas.
pub fn rasterize_label(document: &web::Document, text: &str) -> anyhow::Result<LabelBitmap> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = context_2d(&canvas)?;
    ctx.set_font(LABEL_FONT);
    let metrics = ctx
        .measure_text(text)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let ascent = LABEL_FONT_PX;
    let descent = (LABEL_FONT_PX * 0.25).ceil();
    let text_w = metrics.width().ceil() as f32;
    let width = (text_w + 2.0 * LABEL_PAD_PX).max(1.0) as u32;
    let height = (ascent + descent + 2.0 * LABEL_PAD_PX).max(1.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    // resizing resets the context state
    let ctx = context_2d(&canvas)?;
    ctx.set_font(LABEL_FONT);
    ctx.set_text_baseline("alphabetic");
    #[allow(deprecated)]
    ctx.set_fill_style(&JsValue::from_str("#ffffff"));
    let baseline_y = LABEL_PAD_PX + ascent;
    ctx.fill_text(text, LABEL_PAD_PX as f64, baseline_y as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let rgba = image.data().0;

    // pixels -> world units so the cap height matches the label text size
    let k = LABEL_TEXT_SIZE / ascent;
    let rect = LabelRect::new(
        Vec2::new(-LABEL_PAD_PX * k, -(height as f32 - baseline_y) * k),
        Vec2::new((width as f32 - LABEL_PAD_PX) * k, baseline_y * k),
    );
    Ok(LabelBitmap {
        width,
        height,
        rgba,
        rect,
    })
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
