//! Color constants and scaling helpers for the TUI.

use ratatui::style::Color;

/// Farm boundary line color.
pub const BOUNDARY_COLOR: Color = Color::Cyan;
/// Mooring line color.
pub const MOORING_COLOR: Color = Color::DarkGray;
/// Turbine marker color.
pub const TURBINE_COLOR: Color = Color::White;
/// Selected control highlight.
pub const SELECTED_FG: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns a color for an effective/free-stream speed ratio on the wake map.
///
/// Near-free-stream flow is cold, deep deficits are hot.
pub fn speed_ratio_color(ratio: f32) -> Color {
    if ratio >= 0.97 {
        Color::Blue
    } else if ratio >= 0.90 {
        Color::Cyan
    } else if ratio >= 0.80 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Computes square canvas bounds covering all points with 5% padding.
///
/// Returns `([x_lo, x_hi], [y_lo, y_hi])`; degenerate inputs fall back to
/// unit bounds.
pub fn canvas_bounds(points: impl Iterator<Item = (f64, f64)>) -> ([f64; 2], [f64; 2]) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if !min_x.is_finite() || !max_x.is_finite() {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    let half = ((max_x - min_x).max(max_y - min_y).max(1.0) / 2.0) * 1.05;
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    ([cx - half, cx + half], [cy - half, cy + half])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_square_and_cover_points() {
        let points = vec![(-100.0, 0.0), (100.0, 50.0)];
        let (xb, yb) = canvas_bounds(points.into_iter());
        assert!(xb[0] < -100.0 && xb[1] > 100.0);
        assert!(yb[0] < 0.0 && yb[1] > 50.0);
        let width = xb[1] - xb[0];
        let height = yb[1] - yb[0];
        assert!((width - height).abs() < 1e-9);
    }

    #[test]
    fn empty_input_falls_back_to_unit_bounds() {
        let (xb, yb) = canvas_bounds(std::iter::empty());
        assert_eq!(xb, [-1.0, 1.0]);
        assert_eq!(yb, [-1.0, 1.0]);
    }

    #[test]
    fn ratio_colors_order_from_cold_to_hot() {
        assert_eq!(speed_ratio_color(1.0), Color::Blue);
        assert_eq!(speed_ratio_color(0.93), Color::Cyan);
        assert_eq!(speed_ratio_color(0.85), Color::Yellow);
        assert_eq!(speed_ratio_color(0.5), Color::Red);
    }
}
