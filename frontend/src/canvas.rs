use std::f64::consts::TAU;

use log::debug;
use shared::render::{DrawCommand, DrawSurface, Fill, Shadow, Stroke};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const FONT_STACK: &str = "'Segoe UI', Roboto, system-ui, sans-serif";

/// Replays wheel scenes onto a canvas 2D context.
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    fn apply_fill(&self, fill: &Fill) {
        match fill {
            Fill::Solid(color) => self.context.set_fill_style_str(color),
            Fill::Radial { x, y, r0, r1, inner, outer } => {
                let gradient = self
                    .context
                    .create_radial_gradient(*x, *y, *r0, *x, *y, *r1)
                    .and_then(|gradient| {
                        gradient.add_color_stop(0.0, inner)?;
                        gradient.add_color_stop(1.0, outer)?;
                        Ok(gradient)
                    });
                match gradient {
                    Ok(gradient) => self.context.set_fill_style_canvas_gradient(&gradient),
                    Err(err) => {
                        debug!("Gradient {} -> {} failed, using solid fill: {:?}", inner, outer, err);
                        self.context.set_fill_style_str(inner);
                    }
                }
            }
        }
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        self.context.set_stroke_style_str(&stroke.color);
        self.context.set_line_width(stroke.width);
    }

    fn apply_shadow(&self, shadow: &Shadow) {
        self.context.set_shadow_color(&shadow.color);
        self.context.set_shadow_blur(shadow.blur);
        self.context.set_shadow_offset_x(shadow.offset_x);
        self.context.set_shadow_offset_y(shadow.offset_y);
    }

    fn finish_path(&self, fill: &Fill, stroke: Option<&Stroke>) {
        self.apply_fill(fill);
        self.context.fill();
        if let Some(stroke) = stroke {
            self.apply_stroke(stroke);
            self.context.stroke();
        }
    }

    fn try_draw(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = self.context;
        match command {
            DrawCommand::Clear { size } => ctx.clear_rect(0.0, 0.0, *size, *size),
            DrawCommand::Circle { cx, cy, radius, fill, stroke } => {
                ctx.begin_path();
                ctx.arc(*cx, *cy, *radius, 0.0, TAU)?;
                self.finish_path(fill, stroke.as_ref());
            }
            DrawCommand::Wedge { cx, cy, radius, start, end, fill, stroke } => {
                ctx.begin_path();
                ctx.move_to(*cx, *cy);
                ctx.arc(*cx, *cy, *radius, *start, *end)?;
                ctx.close_path();
                self.finish_path(fill, stroke.as_ref());
            }
            DrawCommand::Text { cx, cy, angle, distance, text, font_px, color, shadow } => {
                ctx.save();
                ctx.translate(*cx, *cy)?;
                ctx.rotate(*angle)?;
                ctx.translate(*distance, 0.0)?;
                ctx.set_font(&format!("bold {}px {}", font_px.round(), FONT_STACK));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(color);
                if let Some(shadow) = shadow {
                    self.apply_shadow(shadow);
                }
                let result = ctx.fill_text(text, 0.0, 0.0);
                ctx.restore();
                result?;
            }
            DrawCommand::Polygon { points, fill, stroke, shadow } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                ctx.save();
                if let Some(shadow) = shadow {
                    self.apply_shadow(shadow);
                }
                ctx.begin_path();
                ctx.move_to(first.0, first.1);
                for (x, y) in rest {
                    ctx.line_to(*x, *y);
                }
                ctx.close_path();
                self.finish_path(fill, stroke.as_ref());
                ctx.restore();
            }
        }
        Ok(())
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn draw(&mut self, command: &DrawCommand) {
        if let Err(err) = self.try_draw(command) {
            debug!("Canvas command failed: {:?}", err);
        }
    }
}
