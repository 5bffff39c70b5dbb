use std::rc::Rc;

use log::warn;
use shared::{render_wheel, Entry};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::canvas::CanvasSurface;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub entries: Rc<Vec<Entry>>,
    pub rotation: f64,
    pub size: f64,
    #[prop_or_default]
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.entries.clone(), props.rotation, props.size),
            move |(entries, rotation, size)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = draw(&canvas, entries, *rotation, *size) {
                        warn!("Failed to draw wheel: {:?}", err);
                    }
                }
                || ()
            },
        );
    }

    let size = props.size;
    html! {
        <div class={styles::WHEEL_STAGE}>
            <canvas
                ref={canvas_ref}
                width={format!("{}", size.round())}
                height={format!("{}", size.round())}
                role="img"
                aria-label="Spinning wheel"
                class="mx-auto rounded-full transition-all duration-300"
                style={format!(
                    "width: {size}px; height: {size}px; {}",
                    if props.is_spinning {
                        "filter: drop-shadow(0px 5px 20px rgba(245, 158, 11, 0.4));"
                    } else {
                        "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                    }
                )}
            />
        </div>
    }
}

fn draw(canvas: &HtmlCanvasElement, entries: &[Entry], rotation: f64, size: f64) -> Result<(), JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    // Back the canvas with device pixels and draw in CSS pixels.
    let ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
    let pixels = (size * ratio).round().max(0.0) as u32;
    if canvas.width() != pixels || canvas.height() != pixels {
        canvas.set_width(pixels);
        canvas.set_height(pixels);
    }
    context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;

    render_wheel(&mut CanvasSurface::new(&context), entries, rotation, size);
    Ok(())
}
