//! Benford comparison chart as self-contained SVG markup.

use crate::model::BenfordSummary;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 500.0;
const MARGIN: f64 = 60.0;

const BAR_FILL: &str = "#4C78A8";
const LINE_STROKE: &str = "#F58518";
const GRID_STROKE: &str = "#E0E0E0";

/// Render the observed-vs-expected chart for a Benford summary.
///
/// Uses the record's raw percentages; rounding only ever happens in the
/// textual reports.
pub fn benford_chart(summary: &BenfordSummary) -> String {
    let digits: Vec<u32> = summary.digits.iter().map(|d| d.digit).collect();
    let observed: Vec<f64> = summary.digits.iter().map(|d| d.observed_percent).collect();
    let expected: Vec<f64> = summary.digits.iter().map(|d| d.expected_percent).collect();
    render_chart(&digits, &observed, &expected)
}

/// Draw observed bars and an expected line-with-markers overlay.
///
/// The vertical scale normalizes to the maximum across both series,
/// with a small floor so an all-zero input still has a scale. Layout is
/// a pure function of the inputs; no I/O happens here.
pub fn render_chart(digits: &[u32], observed: &[f64], expected: &[f64]) -> String {
    let chart_width = WIDTH - 2.0 * MARGIN;
    let chart_height = HEIGHT - 2.0 * MARGIN;
    let max_value = observed
        .iter()
        .chain(expected.iter())
        .copied()
        .fold(0.01_f64, f64::max);

    let span = digits.len().saturating_sub(1).max(1) as f64;
    let x_pos = |index: usize| MARGIN + index as f64 * (chart_width / span);
    let y_pos = |value: f64| HEIGHT - MARGIN - (value / max_value) * chart_height;

    let slot_width = chart_width / digits.len().max(1) as f64;
    let bar_width = slot_width * 0.6;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        WIDTH, HEIGHT
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"Arial\" \
         font-size=\"18\">Benford&apos;s Law Analysis</text>\n",
        WIDTH / 2.0,
        MARGIN / 2.0
    ));

    // Horizontal gridlines with value labels at fifths of the scale.
    for tick in 0..=5 {
        let value = max_value * tick as f64 / 5.0;
        let y = y_pos(value);
        svg.push_str(&format!(
            "<line x1=\"{}\" y1=\"{:.2}\" x2=\"{}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            MARGIN,
            y,
            WIDTH - MARGIN,
            y,
            GRID_STROKE
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{:.2}\" text-anchor=\"end\" font-family=\"Arial\" \
             font-size=\"12\">{:.2}</text>\n",
            MARGIN - 10.0,
            y + 4.0,
            value
        ));
    }

    // Observed bars with digit labels underneath.
    for (i, digit) in digits.iter().enumerate() {
        let bar_x = MARGIN + i as f64 * slot_width + bar_width * 0.2;
        let bar_height = (observed[i] / max_value) * chart_height;
        let bar_y = HEIGHT - MARGIN - bar_height;
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
             fill=\"{}\" opacity=\"0.85\"/>\n",
            bar_x, bar_y, bar_width, bar_height, BAR_FILL
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"Arial\" \
             font-size=\"12\">{}</text>\n",
            bar_x + bar_width / 2.0,
            HEIGHT - MARGIN / 2.0,
            digit
        ));
    }

    // Expected curve with circle markers.
    let points: Vec<String> = (0..digits.len())
        .map(|i| format!("{:.2},{:.2}", x_pos(i), y_pos(expected[i])))
        .collect();
    svg.push_str(&format!(
        "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        points.join(" "),
        LINE_STROKE
    ));
    for i in 0..digits.len() {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"{}\"/>\n",
            x_pos(i),
            y_pos(expected[i]),
            LINE_STROKE
        ));
    }

    // Axis titles.
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"Arial\" \
         font-size=\"14\">Leading Digit</text>\n",
        WIDTH / 2.0,
        HEIGHT - 10.0
    ));
    svg.push_str(&format!(
        "<text x=\"20\" y=\"{}\" text-anchor=\"middle\" font-family=\"Arial\" \
         font-size=\"14\" transform=\"rotate(-90 20,{})\">Proportion</text>\n",
        HEIGHT / 2.0,
        HEIGHT / 2.0
    ));
    svg.push_str("</svg>");

    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart() -> String {
        let digits: Vec<u32> = (1..=9).collect();
        let observed = vec![0.4, 0.2, 0.1, 0.08, 0.07, 0.05, 0.04, 0.03, 0.03];
        let expected = vec![0.301, 0.176, 0.125, 0.097, 0.079, 0.067, 0.058, 0.051, 0.046];
        render_chart(&digits, &observed, &expected)
    }

    #[test]
    fn test_chart_structure() {
        let svg = sample_chart();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        // One background plus nine observed bars.
        assert_eq!(svg.matches("<rect").count(), 10);
        // Nine expected markers.
        assert_eq!(svg.matches("<circle").count(), 9);
        assert_eq!(svg.matches("<polyline").count(), 1);
        // Six gridlines.
        assert_eq!(svg.matches("<line").count(), 6);
    }

    #[test]
    fn test_chart_is_deterministic() {
        assert_eq!(sample_chart(), sample_chart());
    }

    #[test]
    fn test_all_zero_series_keeps_scale_floor() {
        let digits: Vec<u32> = (1..=9).collect();
        let zeros = vec![0.0; 9];
        let svg = render_chart(&digits, &zeros, &zeros);

        // The floor keeps every coordinate finite.
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}
