//! Duration-vs-engagement scatter plot.

use crate::components::{ChartHeader, NoData, ACCENT};
use crate::observed::use_observed_size;
use crate::scale::{extent, LinearScale};
use dioxus::prelude::*;
use sca_api::snapshot::ScatterPoint;

const CONTAINER_ID: &str = "scatter-plot-container";
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 70.0;
const TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Props, Clone, PartialEq)]
pub struct ScatterPlotProps {
    pub data: Vec<ScatterPoint>,
    /// Fired when a point is hovered (or left).
    #[props(default)]
    pub on_hover: EventHandler<Option<ScatterPoint>>,
}

/// SVG scatter of engagement rate against duration. Width follows the
/// observed container box; drawing is deferred behind a placeholder
/// until the container has a nonzero box.
#[component]
pub fn ScatterPlot(props: ScatterPlotProps) -> Element {
    let size = use_observed_size(CONTAINER_ID);
    let hover = use_signal(|| None::<ScatterPoint>);

    let hover_text = match hover() {
        Some(p) => format!(
            "Duration: {:.0}s, engagement: {:.1}%",
            p.duration_seconds,
            p.engagement_rate * 100.0
        ),
        None => "Hover over a point".to_string(),
    };

    let chart = if props.data.is_empty() {
        rsx! { NoData {} }
    } else if let Some(sz) = size() {
        render_svg(&props.data, sz.width.max(320.0), hover, props.on_hover)
    } else {
        rsx! { NoData { label: "Preparing chart...".to_string() } }
    };

    rsx! {
        div {
            ChartHeader {
                title: "Engagement rate vs. duration",
                subtitle: "how duration affects engagement",
            }
            div {
                style: "font-size: 12px; color: #666; min-height: 16px;",
                "{hover_text}"
            }
            div {
                id: CONTAINER_ID,
                style: "width: 100%;",
                {chart}
            }
            div {
                style: "font-size: 11px; color: #999; margin-top: 4px;",
                "Note: engagement rate is (likes + comments) / views"
            }
        }
    }
}

struct TickMark {
    position: f64,
    text_y: f64,
    label: String,
}

fn render_svg(
    data: &[ScatterPoint],
    width: f64,
    mut hover: Signal<Option<ScatterPoint>>,
    on_hover: EventHandler<Option<ScatterPoint>>,
) -> Element {
    let inner_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let x_max = extent(data.iter().map(|p| p.duration_seconds))
        .map(|(_, hi)| hi)
        .unwrap_or(1.0)
        .max(1.0);
    let y_max = extent(data.iter().map(|p| p.engagement_rate))
        .map(|(_, hi)| hi)
        .unwrap_or(0.1)
        .max(0.1);
    let x_scale = LinearScale::new((0.0, x_max), (0.0, inner_width));
    let y_scale = LinearScale::new((0.0, y_max), (inner_height, 0.0));

    let x_tick_end = inner_height + 5.0;
    let x_tick_text_y = inner_height + 20.0;
    let x_ticks: Vec<TickMark> = TICK_FRACTIONS
        .iter()
        .map(|t| TickMark {
            position: t * inner_width,
            text_y: x_tick_text_y,
            label: format!("{:.0}", t * x_max),
        })
        .collect();
    let y_ticks: Vec<TickMark> = TICK_FRACTIONS
        .iter()
        .map(|t| {
            let position = inner_height - t * inner_height;
            TickMark {
                position,
                text_y: position + 4.0,
                label: format!("{:.0}%", t * y_max * 100.0),
            }
        })
        .collect();

    let dots: Vec<(f64, f64, ScatterPoint)> = data
        .iter()
        .map(|p| (x_scale.apply(p.duration_seconds), y_scale.apply(p.engagement_rate), p.clone()))
        .collect();

    let transform = format!("translate({}, {})", MARGIN_LEFT, MARGIN_TOP);
    let x_label_x = inner_width / 2.0;
    let x_label_y = inner_height + MARGIN_BOTTOM - 8.0;
    let y_label_transform = format!(
        "translate({}, {}) rotate(-90)",
        -MARGIN_LEFT + 20.0,
        inner_height / 2.0
    );

    rsx! {
        svg {
            width: "{width}",
            height: "{HEIGHT}",
            g {
                transform: "{transform}",
                line {
                    x1: "0", y1: "{inner_height}", x2: "{inner_width}", y2: "{inner_height}",
                    stroke: "#ccc",
                }
                line {
                    x1: "0", y1: "0", x2: "0", y2: "{inner_height}",
                    stroke: "#ccc",
                }
                for tick in x_ticks {
                    g {
                        line {
                            x1: "{tick.position}", y1: "{inner_height}",
                            x2: "{tick.position}", y2: "{x_tick_end}",
                            stroke: "#ccc",
                        }
                        text {
                            x: "{tick.position}", y: "{tick.text_y}",
                            text_anchor: "middle", font_size: "11", fill: "#666",
                            "{tick.label}"
                        }
                    }
                }
                for tick in y_ticks {
                    g {
                        line {
                            x1: "0", y1: "{tick.position}", x2: "-5", y2: "{tick.position}",
                            stroke: "#ccc",
                        }
                        text {
                            x: "-10", y: "{tick.text_y}",
                            text_anchor: "end", font_size: "11", fill: "#666",
                            "{tick.label}"
                        }
                    }
                }
                for (cx, cy, point) in dots {
                    circle {
                        cx: "{cx}",
                        cy: "{cy}",
                        r: "5",
                        fill: "{ACCENT}",
                        fill_opacity: "0.75",
                        style: "cursor: pointer;",
                        onmouseenter: {
                            let p = point.clone();
                            move |_| {
                                hover.set(Some(p.clone()));
                                on_hover.call(Some(p.clone()));
                            }
                        },
                        onmouseleave: move |_| {
                            hover.set(None);
                            on_hover.call(None);
                        },
                    }
                }
                text {
                    x: "{x_label_x}", y: "{x_label_y}",
                    text_anchor: "middle", font_size: "12", fill: "#666",
                    "Duration (sec)"
                }
                text {
                    transform: "{y_label_transform}",
                    text_anchor: "middle", font_size: "12", fill: "#666",
                    "Engagement rate"
                }
            }
        }
    }
}
