//! Pure drawing math: scales, extents, donut arcs, color ramps.
//!
//! Kept free of DOM types so the zero-data edge cases (empty series,
//! zero maxima, degenerate domains) are testable natively.

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A zero-span domain maps every
    /// value onto the start of the range instead of dividing by zero.
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Min/max of a value sequence; `None` for an empty one.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let mut lo = first;
    let mut hi = first;
    for v in iter {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}

/// Fractions along the circle start at 12 o'clock and run clockwise
/// (matching how the usage donuts are read).
fn donut_angle(fraction: f64) -> f64 {
    -std::f64::consts::FRAC_PI_2 + fraction * std::f64::consts::TAU
}

fn point_on(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path for an annulus segment covering `[start_fraction, end_fraction]`
/// of the full circle. A span of (almost) the whole circle is drawn as a
/// complete ring, since a single arc command cannot express 360 degrees.
pub fn donut_segment_path(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_fraction: f64,
    end_fraction: f64,
) -> String {
    let span = (end_fraction - start_fraction).clamp(0.0, 1.0);
    if span >= 0.9999 {
        return full_ring_path(cx, cy, inner_radius, outer_radius);
    }

    let start = donut_angle(start_fraction);
    let end = donut_angle(end_fraction);
    let large_arc = i32::from(span > 0.5);
    let (x0, y0) = point_on(cx, cy, outer_radius, start);
    let (x1, y1) = point_on(cx, cy, outer_radius, end);
    let (x2, y2) = point_on(cx, cy, inner_radius, end);
    let (x3, y3) = point_on(cx, cy, inner_radius, start);
    format!(
        "M {x0:.2} {y0:.2} \
         A {outer_radius:.2} {outer_radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} \
         A {inner_radius:.2} {inner_radius:.2} 0 {large_arc} 0 {x3:.2} {y3:.2} Z"
    )
}

fn full_ring_path(cx: f64, cy: f64, inner_radius: f64, outer_radius: f64) -> String {
    // Two half-circle arcs per radius; even-odd fill cuts the hole.
    let top_outer = cy - outer_radius;
    let bottom_outer = cy + outer_radius;
    let top_inner = cy - inner_radius;
    let bottom_inner = cy + inner_radius;
    format!(
        "M {cx:.2} {top_outer:.2} \
         A {outer_radius:.2} {outer_radius:.2} 0 1 1 {cx:.2} {bottom_outer:.2} \
         A {outer_radius:.2} {outer_radius:.2} 0 1 1 {cx:.2} {top_outer:.2} Z \
         M {cx:.2} {top_inner:.2} \
         A {inner_radius:.2} {inner_radius:.2} 0 1 0 {cx:.2} {bottom_inner:.2} \
         A {inner_radius:.2} {inner_radius:.2} 0 1 0 {cx:.2} {top_inner:.2} Z"
    )
}

/// Interpolate between two `#rrggbb` colors. `t` is clamped to [0, 1];
/// unparseable inputs fall back to the first color.
pub fn lerp_hex(from: &str, to: &str, t: f64) -> String {
    let t = t.clamp(0.0, 1.0);
    match (parse_hex(from), parse_hex(to)) {
        (Some(a), Some(b)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8
            };
            format!(
                "#{:02x}{:02x}{:02x}",
                mix(a.0, b.0),
                mix(a.1, b.1),
                mix(a.2, b.2)
            )
        }
        _ => from.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Lightest and darkest ends of the heat ramp (shared with the daily
/// blocks of the original analytics chart).
pub const HEAT_RAMP_LOW: &str = "#ffe5e5";
pub const HEAT_RAMP_HIGH: &str = "#e29191";

/// Heat-map cell color: intensity relative to the table maximum. A zero
/// maximum (empty table) renders everything at the light end.
pub fn heat_color(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return HEAT_RAMP_LOW.to_string();
    }
    lerp_hex(HEAT_RAMP_LOW, HEAT_RAMP_HIGH, value / max)
}

/// Normalize a value series into (x, y) pixel points for a sparkline,
/// with a fixed inset on every side. Single-point series sit at the left
/// edge; a flat series draws along the bottom.
pub fn sparkline_points(values: &[f64], width: f64, height: f64, inset: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let (lo, hi) = extent(values.iter().copied()).unwrap_or((0.0, 0.0));
    let x_step = if values.len() > 1 {
        (width - 2.0 * inset) / (values.len() - 1) as f64
    } else {
        0.0
    };
    let y_scale = LinearScale::new((lo, hi), (height - inset, inset));
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (inset + i as f64 * x_step, y_scale.apply(*v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
        assert_eq!(scale.apply(10.0), 100.0);
    }

    #[test]
    fn test_zero_span_domain_does_not_divide() {
        let scale = LinearScale::new((3.0, 3.0), (20.0, 80.0));
        assert_eq!(scale.apply(3.0), 20.0);
        assert_eq!(scale.apply(99.0), 20.0);
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent([3.0, -1.0, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(extent(std::iter::empty()), None);
    }

    #[test]
    fn test_donut_segment_is_finite() {
        let path = donut_segment_path(100.0, 100.0, 50.0, 80.0, 0.0, 0.604);
        assert!(path.starts_with("M "));
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn test_full_circle_segment_uses_ring_path() {
        let path = donut_segment_path(100.0, 100.0, 50.0, 80.0, 0.0, 1.0);
        // Two subpaths: outer ring and inner hole.
        assert_eq!(path.matches('M').count(), 2);
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn test_lerp_hex_endpoints() {
        assert_eq!(lerp_hex("#ffe5e5", "#e29191", 0.0), "#ffe5e5");
        assert_eq!(lerp_hex("#ffe5e5", "#e29191", 1.0), "#e29191");
        // Bad input falls back rather than panicking.
        assert_eq!(lerp_hex("oops", "#e29191", 0.5), "oops");
    }

    #[test]
    fn test_heat_color_zero_max() {
        assert_eq!(heat_color(0.0, 0.0), HEAT_RAMP_LOW);
        assert_eq!(heat_color(5.0, 5.0), HEAT_RAMP_HIGH);
    }

    #[test]
    fn test_sparkline_points() {
        let points = sparkline_points(&[0.0, 10.0], 240.0, 80.0, 10.0);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], (10.0, 70.0));
        assert_eq!(points[1], (230.0, 10.0));
        assert!(sparkline_points(&[], 240.0, 80.0, 10.0).is_empty());
        // Flat series must not produce NaN.
        let flat = sparkline_points(&[5.0, 5.0, 5.0], 240.0, 80.0, 10.0);
        assert!(flat.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }
}
