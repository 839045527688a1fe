//! Inline SVG line charts for value and wealth series.
//!
//! Output is a self-contained `<svg>` element embedded straight into the
//! page; no raster encoding step exists anywhere in the pipeline.

use std::fmt::Write as _;

const WIDTH: i32 = 860;
const HEIGHT: i32 = 420;
const PADDING: f64 = 48.0;

const SERIES_COLORS: [&str; 6] = [
    "#348dc1", "#ff9933", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

/// One labelled line on the chart.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Render labelled series over a shared x axis as an SVG line chart.
///
/// Returns an empty string when there is nothing to draw; callers treat
/// that as "no chart" rather than an error.
pub fn line_chart(title: &str, x_labels: &[String], series: &[ChartSeries]) -> String {
    if x_labels.is_empty() || series.is_empty() {
        return String::new();
    }

    let (min_v, max_v) = value_extent(series);
    let mut svg = svg_header(WIDTH, HEIGHT);

    let _ = write!(
        svg,
        r#"<text x="{x}" y="20" text-anchor="middle" font-size="14">{title}</text>"#,
        x = WIDTH / 2,
    );

    draw_y_axis(&mut svg, min_v, max_v);
    draw_x_axis(&mut svg, x_labels);

    for (index, line) in series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let points = scale_points(&line.values, min_v, max_v);
        svg.push_str(&polyline(&points, color));
    }

    draw_legend(&mut svg, series);
    svg.push_str("</svg>");
    svg
}

fn value_extent(series: &[ChartSeries]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for line in series {
        for value in &line.values {
            if value.is_finite() {
                min_v = min_v.min(*value);
                max_v = max_v.max(*value);
            }
        }
    }
    if min_v > max_v {
        (0.0, 1.0)
    } else {
        (min_v, max_v)
    }
}

fn x_position(index: usize, len: usize) -> f64 {
    let span = f64::from(WIDTH) - 2.0 * PADDING;
    if len <= 1 {
        PADDING + span / 2.0
    } else {
        PADDING + span * index as f64 / (len - 1) as f64
    }
}

fn y_position(value: f64, min_v: f64, max_v: f64) -> f64 {
    let span = f64::from(HEIGHT) - 2.0 * PADDING;
    if max_v <= min_v {
        f64::from(HEIGHT) / 2.0
    } else {
        f64::from(HEIGHT) - PADDING - span * (value - min_v) / (max_v - min_v)
    }
}

fn scale_points(values: &[f64], min_v: f64, max_v: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                x_position(index, values.len()),
                y_position(*value, min_v, max_v),
            )
        })
        .collect()
}

fn polyline(points: &[(f64, f64)], stroke: &str) -> String {
    let mut path = String::new();
    for (x, y) in points {
        let _ = write!(path, "{x:.1},{y:.1} ");
    }
    format!(
        r#"<polyline fill="none" stroke="{stroke}" stroke-width="1.5" points="{}"/>"#,
        path.trim_end()
    )
}

fn draw_y_axis(svg: &mut String, min_v: f64, max_v: f64) {
    let ticks = 4;
    for step in 0..=ticks {
        let value = min_v + (max_v - min_v) * f64::from(step) / f64::from(ticks);
        let y = y_position(value, min_v, max_v);
        let _ = write!(
            svg,
            r##"<line x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#ddd" stroke-width="0.5"/><text x="{tx}" y="{ty:.1}" text-anchor="end">{value:.0}</text>"##,
            x1 = PADDING,
            x2 = f64::from(WIDTH) - PADDING,
            tx = PADDING - 6.0,
            ty = y + 3.0,
        );
    }
}

fn draw_x_axis(svg: &mut String, x_labels: &[String]) {
    let len = x_labels.len();
    let picks = if len <= 2 {
        (0..len).collect::<Vec<_>>()
    } else {
        vec![0, len / 2, len - 1]
    };
    for index in picks {
        let x = x_position(index, len);
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{y}" text-anchor="middle">{label}</text>"#,
            y = f64::from(HEIGHT) - PADDING + 16.0,
            label = x_labels[index],
        );
    }
}

fn draw_legend(svg: &mut String, series: &[ChartSeries]) {
    let mut x = PADDING;
    let y = 34.0;
    for (index, line) in series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let _ = write!(
            svg,
            r#"<line x1="{x:.1}" y1="{y}" x2="{x2:.1}" y2="{y}" stroke="{color}" stroke-width="2"/><text x="{tx:.1}" y="{ty}">{label}</text>"#,
            x2 = x + 18.0,
            tx = x + 22.0,
            ty = y + 3.0,
            label = line.label,
        );
        x += 22.0 + 7.0 * line.label.len() as f64 + 16.0;
    }
}

fn svg_header(width: i32, height: i32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}"><style>text{{font-family:Arial,sans-serif;font-size:10px;fill:#666}}</style>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(count: usize) -> Vec<String> {
        (0..count).map(|index| index.to_string()).collect()
    }

    #[test]
    fn renders_one_polyline_per_series() {
        let series = vec![
            ChartSeries {
                label: String::from("AAPL_value"),
                values: vec![1000.0, 1100.0, 950.0],
            },
            ChartSeries {
                label: String::from("Total"),
                values: vec![1000.0, 1100.0, 950.0],
            },
        ];

        let svg = line_chart("Value of Investments", &labels(3), &series);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("AAPL_value"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(line_chart("t", &[], &[]).is_empty());
        assert!(line_chart("t", &labels(2), &[]).is_empty());
    }

    #[test]
    fn flat_series_stays_inside_the_viewport() {
        let series = vec![ChartSeries {
            label: String::from("flat"),
            values: vec![5.0; 10],
        }];
        let svg = line_chart("flat", &labels(10), &series);
        assert!(svg.contains("<polyline"));
    }
}
