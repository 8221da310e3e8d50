use std::f64::consts::PI;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::preview::{GLASS_BOTTOM, GLASS_TOP, LABEL_COLOR, PreviewSpec, Rect, Shape, layout};

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewCanvasProps {
    pub spec: PreviewSpec,
}

/// Sizes the canvas to its parent (times devicePixelRatio) and paints the
/// schematic for `spec`.
fn paint(canvas: &HtmlCanvasElement, spec: &PreviewSpec) -> Result<(), JsValue> {
    if !canvas.is_connected() {
        return Ok(());
    }
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(parent) = canvas.parent_element() else {
        return Ok(());
    };
    let dpr = window.device_pixel_ratio().max(1.0);
    let bounds = parent.get_bounding_client_rect();
    let (w, h) = (bounds.width(), bounds.height());
    canvas.set_width((w * dpr).max(0.0) as u32);
    canvas.set_height((h * dpr).max(0.0) as u32);
    let style = canvas.style();
    style.set_property("width", &format!("{w}px"))?;
    style.set_property("height", &format!("{h}px"))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_line_width(1.2);
    ctx.set_line_cap("square");
    ctx.set_line_join("miter");

    for shape in layout(spec, w, h) {
        draw_shape(&ctx, &shape)?;
    }
    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    match shape {
        Shape::FillRect { rect, color } => {
            ctx.set_fill_style_str(color);
            ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
        }
        Shape::Glass { rect } => {
            let g = ctx.create_linear_gradient(rect.x, rect.y, rect.x, rect.y + rect.h);
            g.add_color_stop(0.0, GLASS_TOP)?;
            g.add_color_stop(1.0, GLASS_BOTTOM)?;
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
        }
        Shape::StrokeRect { rect, color } => {
            ctx.set_stroke_style_str(color);
            ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
        }
        Shape::Polyline { points, color } => {
            let Some((&(x0, y0), rest)) = points.split_first() else {
                return Ok(());
            };
            ctx.begin_path();
            ctx.move_to(x0, y0);
            for &(x, y) in rest {
                ctx.line_to(x, y);
            }
            ctx.set_stroke_style_str(color);
            ctx.stroke();
        }
        Shape::Triangle { points, color } => {
            let [(ax, ay), (bx, by), (cx, cy)] = *points;
            ctx.begin_path();
            ctx.move_to(ax, ay);
            ctx.line_to(bx, by);
            ctx.line_to(cx, cy);
            ctx.close_path();
            ctx.set_fill_style_str(color);
            ctx.fill();
        }
        Shape::RoundRect { rect, radius, color } => {
            rounded_rect_path(ctx, rect, *radius)?;
            ctx.set_fill_style_str(color);
            ctx.fill();
        }
        Shape::Label { text, x, y, vertical } => {
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.set_font("12px Geist, sans-serif");
            ctx.set_text_align("center");
            if *vertical {
                ctx.save();
                ctx.translate(*x, *y)?;
                ctx.rotate(-PI / 2.0)?;
                ctx.fill_text(text, 0.0, 0.0)?;
                ctx.restore();
            } else {
                ctx.fill_text(text, *x, *y)?;
            }
        }
    }
    Ok(())
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, r: &Rect, radius: f64) -> Result<(), JsValue> {
    let rad = radius.min(r.w / 2.0).min(r.h / 2.0).max(0.0);
    let (x, y, w, h) = (r.x, r.y, r.w, r.h);
    ctx.begin_path();
    ctx.move_to(x + rad, y);
    ctx.arc_to(x + w, y, x + w, y + h, rad)?;
    ctx.arc_to(x + w, y + h, x, y + h, rad)?;
    ctx.arc_to(x, y + h, x, y, rad)?;
    ctx.arc_to(x, y, x + w, y, rad)?;
    ctx.close_path();
    Ok(())
}

#[function_component(PreviewCanvas)]
pub fn preview_canvas(props: &PreviewCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    // latest spec for the resize listener
    let spec_ref = use_mut_ref(|| props.spec.clone());

    // Repaint whenever the configuration changes
    {
        let canvas_ref = canvas_ref.clone();
        let spec_ref = spec_ref.clone();
        use_effect_with(props.spec.clone(), move |spec| {
            *spec_ref.borrow_mut() = spec.clone();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = paint(&canvas, spec) {
                    log::error!(target: "preview", "paint failed: {e:?}");
                }
            }
            || ()
        });
    }

    // Repaint on window resize
    {
        let canvas_ref = canvas_ref.clone();
        let spec_ref = spec_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = paint(&canvas, &spec_ref.borrow()) {
                        log::error!(target: "preview", "paint failed: {e:?}");
                    }
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(w) = &window {
                if w
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!(target: "preview", "could not listen for resize");
                }
            }
            move || {
                if let Some(w) = window {
                    let _ = w.remove_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }
                drop(on_resize);
            }
        });
    }

    html! {
        <canvas id="previewCanvas" ref={canvas_ref} style="position:absolute; inset:0; display:block;"></canvas>
    }
}
