//! Chart Component
//!
//! Weight-progress bar chart using HTML5 Canvas.

use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{format_kg, GlobalState, WeightEntry};
use crate::theme::BAR_FILL;

/// Padding added below/above the observed weights for the y-axis domain.
const Y_DOMAIN_PAD_KG: f64 = 2.0;

/// Bar chart of the weight series
#[component]
pub fn WeightChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let series = state.series.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Summary line below the chart
#[component]
pub fn TotalLost() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let total_lost = create_memo(move |_| state.total_lost());

    view! {
        <div class="mt-6 text-center">
            <p class="text-lg font-semibold text-teal-700">
                "Total Weight Lost: "
                <span class="text-green-600">
                    {move || format_kg(total_lost.get())} " kg"
                </span>
            </p>
        </div>
    }
}

/// Y-axis domain around the observed weights: `[min - 2, max + 2]`.
///
/// Returns `None` for an empty series (the chart shows its placeholder
/// instead of inventing a scale).
fn y_domain(series: &[WeightEntry]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for entry in series {
        min = min.min(entry.weight);
        max = max.max(entry.weight);
    }

    if series.is_empty() {
        None
    } else {
        Some((min - Y_DOMAIN_PAD_KG, max + Y_DOMAIN_PAD_KG))
    }
}

/// Compact label for the x axis: `YYYY-MM-DD` dates render as "May 22",
/// anything else is shown verbatim.
fn date_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &[WeightEntry]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some((y_min, y_max)) = y_domain(series) else {
        // Empty series: placeholder text instead of axes
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data yet", width / 2.0 - 40.0, height / 2.0);
        return;
    };

    // Draw grid lines
    ctx.set_stroke_style(&"#d1d5db".into()); // gray-300
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // One slot per entry, bar centered in its slot
    let slot_width = chart_width / series.len() as f64;
    let bar_width = (slot_width * 0.6).min(60.0);

    ctx.set_fill_style(&BAR_FILL.into());

    for (i, entry) in series.iter().enumerate() {
        let slot_left = margin_left + i as f64 * slot_width;
        let x = slot_left + (slot_width - bar_width) / 2.0;

        // Scale y to chart area (inverted because canvas y grows downward)
        let y = margin_top + ((y_max - entry.weight) / (y_max - y_min)) * chart_height;
        let bar_height = margin_top + chart_height - y;

        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // Draw x-axis labels
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");

    for (i, entry) in series.iter().enumerate() {
        let label = date_label(&entry.date);
        let x = margin_left + (i as f64 + 0.5) * slot_width - 15.0;
        let _ = ctx.fill_text(&label, x, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, weight: f64) -> WeightEntry {
        WeightEntry {
            date: date.to_string(),
            weight,
        }
    }

    #[test]
    fn test_y_domain_pads_observed_range() {
        let series = vec![entry("2025-05-22", 113.2), entry("2025-06-01", 104.6)];
        let (min, max) = y_domain(&series).unwrap();
        assert!((min - 102.6).abs() < 1e-9);
        assert!((max - 115.2).abs() < 1e-9);
    }

    #[test]
    fn test_y_domain_empty_series() {
        assert_eq!(y_domain(&[]), None);
    }

    #[test]
    fn test_date_label_formats_iso_dates() {
        assert_eq!(date_label("2025-05-22"), "May 22");
    }

    #[test]
    fn test_date_label_passes_through_other_labels() {
        assert_eq!(date_label("Week 3"), "Week 3");
    }
}
