//! Canvas 2D backend for the browser build

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Canvas;

impl Canvas for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(
            self,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        if let Err(e) = self.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.close_path();
        self.fill();
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        self.set_stroke_style_str(color);
        let pattern = js_sys::Array::of2(
            &JsValue::from_f64(dash[0] as f64),
            &JsValue::from_f64(dash[1] as f64),
        );
        if let Err(e) = self.set_line_dash(&pattern) {
            log::warn!("setLineDash failed: {:?}", e);
        }
        self.begin_path();
        self.move_to(from.x as f64, from.y as f64);
        self.line_to(to.x as f64, to.y as f64);
        self.stroke();
        // Solid lines for anything drawn after the net
        let _ = self.set_line_dash(&js_sys::Array::new());
    }
}
