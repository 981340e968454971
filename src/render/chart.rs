//! Bar chart of sorted read lengths, drawn as an SVG document in points
//! (1pt = 1/72") and handed to [`crate::render::output`] for encoding.

use crate::lengths::SortedLengths;

pub const TITLE: &str = "Read length distribution";
pub const X_LABEL: &str = "Reads";
pub const Y_LABEL: &str = "Length in bases";

const PT_PER_CM: f64 = 72.0 / 2.54;
/// Fixed canvas, 29cm x 21cm.
pub const CANVAS_WIDTH: f64 = 29.0 * PT_PER_CM;
pub const CANVAS_HEIGHT: f64 = 21.0 * PT_PER_CM;

const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 56.0;
const TICK_LEN: f64 = 5.0;
const TARGET_TICKS: usize = 6;

const BAR_FILL: &str = "#f15a60";
const AXIS_STROKE: &str = "#000000";

/// Input model for the chart: one bar per read, height = read length.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<f64>,
}

impl BarChart {
    pub fn from_lengths(lengths: &SortedLengths) -> Self {
        Self {
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            bars: lengths.iter().map(|&len| len as f64).collect(),
        }
    }

    pub fn to_svg(&self) -> String {
        let plot_x0 = MARGIN_LEFT;
        let plot_x1 = CANVAS_WIDTH - MARGIN_RIGHT;
        let plot_y0 = MARGIN_TOP;
        let plot_y1 = CANVAS_HEIGHT - MARGIN_BOTTOM;

        let y_max = self.bars.iter().copied().fold(0.0_f64, f64::max);
        let y_axis = Axis::from_zero(y_max, TARGET_TICKS);
        let x_axis = Axis::from_zero(self.bars.len() as f64, TARGET_TICKS);

        let mut out = String::with_capacity(256 + self.bars.len() * 96);
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT,
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<rect width="{:.2}" height="{:.2}" fill="white" />"#,
            CANVAS_WIDTH, CANVAS_HEIGHT
        ));
        out.push('\n');

        // Bars: x in [i, i + 1) data units, no outline.
        out.push_str(&format!(r#"<g fill="{BAR_FILL}" stroke="none">"#));
        out.push('\n');
        for (i, &h) in self.bars.iter().enumerate() {
            let x = x_axis.to_px(i as f64, plot_x0, plot_x1);
            let w = x_axis.to_px(i as f64 + 1.0, plot_x0, plot_x1) - x;
            let top = y_axis.to_px(h, plot_y1, plot_y0);
            out.push_str(&format!(
                r#"<rect x="{x:.3}" y="{top:.3}" width="{w:.3}" height="{:.3}" />"#,
                plot_y1 - top
            ));
            out.push('\n');
        }
        out.push_str("</g>\n");

        // Axes
        out.push_str(&line(plot_x0, plot_y1, plot_x1, plot_y1));
        out.push_str(&line(plot_x0, plot_y0, plot_x0, plot_y1));
        for (&v, label) in y_axis.ticks.iter().zip(&y_axis.labels) {
            let y = y_axis.to_px(v, plot_y1, plot_y0);
            out.push_str(&line(plot_x0 - TICK_LEN, y, plot_x0, y));
            out.push_str(&text(plot_x0 - TICK_LEN - 3.0, y + 3.5, label, 10.0, "end", None));
        }
        for (&v, label) in x_axis.ticks.iter().zip(&x_axis.labels) {
            let x = x_axis.to_px(v, plot_x0, plot_x1);
            out.push_str(&line(x, plot_y1, x, plot_y1 + TICK_LEN));
            out.push_str(&text(x, plot_y1 + TICK_LEN + 12.0, label, 10.0, "middle", None));
        }

        out.push_str(&text(CANVAS_WIDTH / 2.0, MARGIN_TOP / 2.0 + 6.0, &self.title, 16.0, "middle", None));
        out.push_str(&text(
            (plot_x0 + plot_x1) / 2.0,
            CANVAS_HEIGHT - 14.0,
            &self.x_label,
            12.0,
            "middle",
            None,
        ));
        let y_label_x = 20.0;
        let y_label_y = (plot_y0 + plot_y1) / 2.0;
        out.push_str(&text(
            y_label_x,
            y_label_y,
            &self.y_label,
            12.0,
            "middle",
            Some(-90.0),
        ));

        out.push_str("</svg>\n");
        out
    }
}

/// Linear axis starting at zero with "nice number" integer ticks.
#[derive(Debug, Clone)]
struct Axis {
    max: f64,
    ticks: Vec<f64>,
    labels: Vec<String>,
}

impl Axis {
    fn from_zero(data_max: f64, target_ticks: usize) -> Self {
        let data_max = data_max.max(1.0);
        let rough = data_max / (target_ticks.max(2) - 1) as f64;
        let step = nice_step(rough).max(1.0);
        let max = (data_max / step).ceil() * step;
        let count = (max / step).round() as usize;
        let ticks: Vec<f64> = (0..=count).map(|k| k as f64 * step).collect();
        let labels = ticks.iter().map(|v| format!("{}", *v as u64)).collect();
        Self { max, ticks, labels }
    }

    fn to_px(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        px_min + value / self.max * (px_max - px_min)
    }
}

fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!(
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{AXIS_STROKE}" stroke-width="1" />"#
    ) + "\n"
}

fn text(x: f64, y: f64, content: &str, size: f64, anchor: &str, rotate: Option<f64>) -> String {
    let mut out = format!(
        r#"<text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="{size:.1}" text-anchor="{anchor}""#
    );
    if let Some(angle) = rotate {
        out.push_str(&format!(r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#));
    }
    out.push('>');
    for ch in content.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out.push_str("</text>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/chart.rs"]
mod tests;
