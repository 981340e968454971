use super::*;
use crate::lengths::ReadLengths;

fn chart(lengths: Vec<usize>) -> BarChart {
    BarChart::from_lengths(&ReadLengths::from(lengths).sorted())
}

fn bar_count(svg: &str) -> usize {
    svg.matches("<rect x=").count()
}

#[test]
fn bars_follow_sorted_lengths() {
    let c = chart(vec![12, 10, 3]);
    assert_eq!(c.bars, vec![3.0, 10.0, 12.0]);
    assert_eq!(c.title, "Read length distribution");
    assert_eq!(c.x_label, "Reads");
    assert_eq!(c.y_label, "Length in bases");
}

#[test]
fn svg_has_one_rect_per_bar_and_labels() {
    let svg = chart(vec![5, 8, 8, 13]).to_svg();
    assert_eq!(bar_count(&svg), 4);
    assert!(svg.contains(">Read length distribution</text>"));
    assert!(svg.contains(">Reads</text>"));
    assert!(svg.contains(">Length in bases</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn empty_lengths_give_zero_bars() {
    let c = chart(Vec::new());
    assert!(c.bars.is_empty());
    let svg = c.to_svg();
    assert_eq!(bar_count(&svg), 0);
    assert!(svg.contains(">Reads</text>"));
}

#[test]
fn canvas_is_29_by_21_cm() {
    assert!((CANVAS_WIDTH - 822.05).abs() < 0.01);
    assert!((CANVAS_HEIGHT - 595.28).abs() < 0.01);
    let svg = chart(vec![1]).to_svg();
    assert!(svg.contains(r#"width="822.05" height="595.28""#));
}

#[test]
fn y_ticks_cover_tallest_bar() {
    let axis = Axis::from_zero(137.0, 6);
    assert_eq!(axis.ticks.first().copied(), Some(0.0));
    assert!(axis.max >= 137.0);
    assert_eq!(axis.labels.last().map(String::as_str), Some("140"));
}

#[test]
fn nice_step_values() {
    assert_eq!(nice_step(1.2), 1.0);
    assert_eq!(nice_step(27.4), 20.0);
    assert_eq!(nice_step(450.0), 500.0);
    assert_eq!(nice_step(8.0), 10.0);
}
