//! Canvas area sparkline for the KPI cards.
//!
//! Drawn fully on every data or hover change; the series is a few dozen
//! monthly points at most, so incremental patching would buy nothing.

use crate::scale::sparkline_points;
use dioxus::prelude::*;
use sca_api::snapshot::ChartPoint;
use sca_utils::{dates, numbers};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const INSET: f64 = 10.0;

#[derive(Props, Clone, PartialEq)]
pub struct SparklineProps {
    /// Canvas DOM id; must be unique per card.
    pub id: String,
    /// Monthly series for one metric.
    pub points: ReadOnlySignal<Vec<ChartPoint>>,
    #[props(default = 240.0)]
    pub width: f64,
    #[props(default = 80.0)]
    pub height: f64,
    #[props(default = "#cccccc".to_string())]
    pub color: String,
    /// Hover readout: (month label, formatted value); `None` on leave.
    #[props(default)]
    pub on_hover: EventHandler<Option<(String, String)>>,
}

#[component]
pub fn Sparkline(props: SparklineProps) -> Element {
    let mut hover_index = use_signal(|| None::<usize>);
    let points = props.points;
    let (width, height) = (props.width, props.height);

    // Redraw whenever the series or the hover position changes.
    let canvas_id = props.id.clone();
    let color = props.color.clone();
    use_effect(move || {
        let data = points();
        let hover = hover_index();
        draw(&canvas_id, &data, width, height, &color, hover);
    });

    let on_hover = props.on_hover;
    let mouse_move = move |evt: Event<MouseData>| {
        let data = points();
        let x = evt.data().element_coordinates().x;
        match hover_index_for(x, width, data.len()) {
            Some(i) => {
                let point = &data[i];
                on_hover.call(Some((
                    dates::month_label(&point.date),
                    numbers::format_count(point.value),
                )));
                hover_index.set(Some(i));
            }
            None => {
                on_hover.call(None);
                hover_index.set(None);
            }
        }
    };
    let mouse_leave = move |_| {
        on_hover.call(None);
        hover_index.set(None);
    };

    rsx! {
        canvas {
            id: "{props.id}",
            width: "{props.width}",
            height: "{props.height}",
            style: "display: block;",
            onmousemove: mouse_move,
            onmouseleave: mouse_leave,
        }
    }
}

/// Which data index a mouse x-position points at; `None` outside the
/// drawn span.
fn hover_index_for(x: f64, width: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let x_step = (width - 2.0 * INSET) / (len - 1) as f64;
    let idx = ((x - INSET) / x_step).round();
    if idx < 0.0 || idx as usize >= len {
        None
    } else {
        Some(idx as usize)
    }
}

fn draw(
    canvas_id: &str,
    data: &[ChartPoint],
    width: f64,
    height: f64,
    color: &str,
    hover: Option<usize>,
) {
    let Some(canvas) = canvas_element(canvas_id) else {
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        return;
    };
    ctx.clear_rect(0.0, 0.0, width, height);
    if data.is_empty() {
        return;
    }

    let values: Vec<f64> = data.iter().map(|p| p.value).collect();
    let pts = sparkline_points(&values, width, height, INSET);

    // Filled area under the line.
    ctx.begin_path();
    ctx.move_to(INSET, height - INSET);
    for (x, y) in &pts {
        ctx.line_to(*x, *y);
    }
    if let Some((last_x, _)) = pts.last() {
        ctx.line_to(*last_x, height - INSET);
    }
    ctx.close_path();
    ctx.set_fill_style_str(color);
    ctx.set_global_alpha(0.35);
    ctx.fill();
    ctx.set_global_alpha(1.0);

    // Line on top.
    ctx.begin_path();
    for (i, (x, y)) in pts.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    ctx.stroke();

    if let Some(i) = hover {
        if let Some((x, y)) = pts.get(i) {
            ctx.begin_path();
            let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU);
            ctx.set_fill_style_str(color);
            ctx.fill();
        }
    }
}

fn canvas_element(id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok()??.dyn_into().ok()
}

#[cfg(test)]
mod tests {
    use super::hover_index_for;

    #[test]
    fn test_hover_index_maps_positions() {
        // 3 points across 240px with 10px insets: steps at 10, 120, 230.
        assert_eq!(hover_index_for(10.0, 240.0, 3), Some(0));
        assert_eq!(hover_index_for(125.0, 240.0, 3), Some(1));
        assert_eq!(hover_index_for(230.0, 240.0, 3), Some(2));
    }

    #[test]
    fn test_hover_index_out_of_bounds() {
        assert_eq!(hover_index_for(-200.0, 240.0, 3), None);
        assert_eq!(hover_index_for(1000.0, 240.0, 3), None);
        assert_eq!(hover_index_for(50.0, 240.0, 0), None);
    }

    #[test]
    fn test_single_point_always_hits() {
        assert_eq!(hover_index_for(0.0, 240.0, 1), Some(0));
        assert_eq!(hover_index_for(239.0, 240.0, 1), Some(0));
    }
}
