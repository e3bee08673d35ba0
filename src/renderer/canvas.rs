//! Canvas 2D backend

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Frame, css_color};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        Ok(Self { canvas, ctx, dpr })
    }

    /// Match the backing store to the frame's CSS size
    fn resize(&self, frame: &Frame) {
        let width = (frame.size.x as f64 * self.dpr) as u32;
        let height = (frame.size.y as f64 * self.dpr) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            let style = self.canvas.style();
            let _ = style.set_property("width", &format!("{}px", frame.size.x));
            let _ = style.set_property("height", &format!("{}px", frame.size.y));
            log::debug!("Canvas resized to {}x{}", width, height);
        }
    }

    pub fn render(&self, frame: &Frame) {
        self.resize(frame);

        let ctx = &self.ctx;
        let _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, frame.size.x as f64, frame.size.y as f64);

        for quad in &frame.quads {
            ctx.set_fill_style_str(&css_color(quad.color));
            ctx.fill_rect(
                quad.origin.x as f64,
                quad.origin.y as f64,
                quad.size.x as f64,
                quad.size.y as f64,
            );
        }

        ctx.set_fill_style_str("#ffffff");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for label in &frame.labels {
            ctx.set_font(&format!("{}px sans-serif", label.size.round()));
            let _ = ctx.fill_text(&label.text, label.center.x as f64, label.center.y as f64);
        }
    }
}
