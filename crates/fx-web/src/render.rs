use anyhow::anyhow;
use fx_core::{Hsla, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backend for [`Surface`]. Coordinates are CSS pixels; the
/// backing store is scaled by the device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            size: Vec2::ZERO,
        })
    }

    pub fn resize(&mut self, css_size: Vec2, dpr: f64) {
        self.size = css_size;
        let w = (css_size.x as f64 * dpr) as u32;
        let h = (css_size.y as f64 * dpr) as u32;
        self.canvas.set_width(w.max(1));
        self.canvas.set_height(h.max(1));
        let _ = self.canvas.style().set_property("width", &format!("{}px", css_size.x));
        let _ = self.canvas.style().set_property("height", &format!("{}px", css_size.y));
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn set_glow(&self, color: &str, glow: f32) {
        self.ctx.set_shadow_blur(glow as f64);
        if glow > 0.0 {
            self.ctx.set_shadow_color(color);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla, glow: f32) {
        let css = color.css();
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&css);
        self.set_glow(&css, glow);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Hsla, glow: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let css = color.css();
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&css);
        self.set_glow(&css, glow);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla, width: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn gradient_line(&mut self, from: Vec2, to: Vec2, from_color: Hsla, to_color: Hsla, width: f32) {
        let g = self
            .ctx
            .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        let _ = g.add_color_stop(0.0, &from_color.css());
        let _ = g.add_color_stop(1.0, &to_color.css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_canvas_gradient(&g);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[Vec2], color: Hsla, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn glyph(&mut self, glyph: &str, center: Vec2, size: f32, color: Hsla) {
        self.ctx.set_font(&format!("{}px system-ui, sans-serif", size.round()));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&color.css());
        let _ = self.ctx.fill_text(glyph, center.x as f64, center.y as f64);
    }
}
