//! Layout math for the SVG charts. Pure functions, no DOM access.

use contracts::dashboards::d400_insurance_analytics::TreemapNode;
use std::f64::consts::PI;

/// Default plotly qualitative palette
pub const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Evenly spaced "nice" ticks from 0 covering `max` (1, 2, 2.5 or 5 times a
/// power of ten). Returns `[0, 1]` for an empty or non-positive range.
pub fn nice_ticks(max: f64, target_count: usize) -> Vec<f64> {
    if max <= 0.0 || !max.is_finite() || target_count == 0 {
        return vec![0.0, 1.0];
    }

    let raw_step = max / target_count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Maps `value` in `0..=max` onto `0..=extent`
pub fn scale(value: f64, max: f64, extent: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        value / max * extent
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Radians, clockwise from 12 o'clock
    pub start_angle: f64,
    pub end_angle: f64,
    pub fraction: f64,
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Splits the circle proportionally to `values`. Non-positive values get an
/// empty slice; an all-zero input gives no slices.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    values
        .iter()
        .map(|value| {
            let fraction = value.max(0.0) / total;
            let start = angle;
            angle += fraction * 2.0 * PI;
            Slice {
                start_angle: start,
                end_angle: angle,
                fraction,
            }
        })
        .collect()
}

/// Point on a circle at `angle` (clockwise from 12 o'clock)
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

/// SVG path of a donut segment between `inner` and `outer` radii
pub fn donut_path(cx: f64, cy: f64, outer: f64, inner: f64, slice: &Slice) -> String {
    // A full circle cannot be drawn with a single arc
    let end = if slice.fraction >= 1.0 {
        slice.start_angle + 2.0 * PI - 1e-4
    } else {
        slice.end_angle
    };
    let large_arc = if end - slice.start_angle > PI { 1 } else { 0 };

    let (x0, y0) = polar(cx, cy, outer, slice.start_angle);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, slice.start_angle);

    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        x0, y0, outer, outer, large_arc, x1, y1, x2, y2, inner, inner, large_arc, x3, y3
    )
}

/// One placed treemap rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: String,
    pub label: String,
    pub level: usize,
    pub value: f64,
    pub rect: Rect,
}

/// Slice-and-dice layout: level 0 splits the width, level 1 splits each
/// parent's height, and so on. Parents are emitted before their children;
/// children start `header` below the top of their parent.
pub fn treemap_tiles(roots: &[TreemapNode], bounds: Rect, header: f64) -> Vec<Tile> {
    let mut tiles = Vec::new();
    layout_level(roots, bounds, true, header, &mut tiles);
    tiles
}

fn layout_level(
    nodes: &[TreemapNode],
    bounds: Rect,
    horizontal: bool,
    header: f64,
    out: &mut Vec<Tile>,
) {
    let total: f64 = nodes.iter().map(|n| n.value.max(0.0)).sum();
    if total <= 0.0 {
        return;
    }

    let mut offset = 0.0;
    for node in nodes {
        let value = node.value.max(0.0);
        let rect = if horizontal {
            Rect::new(bounds.x + offset, bounds.y, bounds.width * value / total, bounds.height)
        } else {
            Rect::new(bounds.x, bounds.y + offset, bounds.width, bounds.height * value / total)
        };
        offset += if horizontal { rect.width } else { rect.height };

        out.push(Tile {
            id: node.id.clone(),
            label: node.label.clone(),
            level: node.level,
            value: node.value,
            rect,
        });
        let inner = Rect::new(
            rect.x,
            rect.y + header.min(rect.height),
            rect.width,
            (rect.height - header).max(0.0),
        );
        layout_level(&node.children, inner, !horizontal, header, out);
    }
}

/// Stable colour index per distinct label, in order of first appearance
pub fn color_keys<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = Vec::new();
    for label in labels {
        if !keys.contains(&label) {
            keys.push(label);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, level: usize, value: f64, children: Vec<TreemapNode>) -> TreemapNode {
        TreemapNode {
            id: id.to_string(),
            label: id.rsplit('/').next().unwrap_or(id).to_string(),
            level,
            value,
            children,
        }
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(3.0, 3), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(nice_ticks(0.0, 5), vec![0.0, 1.0]);
        let ticks = nice_ticks(7300.0, 5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(*ticks.last().unwrap() >= 7300.0);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(5.0, 10.0, 200.0), 100.0);
        assert_eq!(scale(5.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[2].fraction, 0.5);
        assert!((slices[2].end_angle - 2.0 * PI).abs() < 1e-9);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    fn test_donut_path_full_circle() {
        let slices = pie_slices(&[5.0]);
        let path = donut_path(100.0, 100.0, 80.0, 40.0, &slices[0]);
        assert!(path.starts_with("M 100.00 20.00"));
        assert!(path.contains(" 0 1 1 "));
    }

    #[test]
    fn test_treemap_tiles_slice_and_dice() {
        let roots = vec![
            node("Arusha", 0, 100.0, vec![node("Arusha/Farm", 1, 100.0, vec![])]),
            node(
                "Dar",
                0,
                300.0,
                vec![
                    node("Dar/Office", 1, 100.0, vec![]),
                    node("Dar/Retail", 1, 200.0, vec![]),
                ],
            ),
        ];
        let tiles = treemap_tiles(&roots, Rect::new(0.0, 0.0, 400.0, 300.0), 0.0);
        let ids: Vec<&str> = tiles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["Arusha", "Arusha/Farm", "Dar", "Dar/Office", "Dar/Retail"]);

        assert_eq!(tiles[0].rect, Rect::new(0.0, 0.0, 100.0, 300.0));
        assert_eq!(tiles[2].rect, Rect::new(100.0, 0.0, 300.0, 300.0));
        assert_eq!(tiles[3].rect, Rect::new(100.0, 0.0, 300.0, 100.0));
        assert_eq!(tiles[4].rect, Rect::new(100.0, 100.0, 300.0, 200.0));
    }

    #[test]
    fn test_treemap_tiles_empty() {
        assert!(treemap_tiles(&[], Rect::new(0.0, 0.0, 10.0, 10.0), 0.0).is_empty());
    }

    #[test]
    fn test_treemap_children_leave_room_for_header() {
        let roots = vec![node("Dar", 0, 10.0, vec![node("Dar/Retail", 1, 10.0, vec![])])];
        let tiles = treemap_tiles(&roots, Rect::new(0.0, 0.0, 100.0, 100.0), 20.0);
        assert_eq!(tiles[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(tiles[1].rect, Rect::new(0.0, 20.0, 100.0, 80.0));
    }

    #[test]
    fn test_color_keys_first_appearance() {
        assert_eq!(
            color_keys(["Retail", "Office", "Retail", "Farm"]),
            vec!["Retail", "Office", "Farm"]
        );
        assert_eq!(palette_color(10), PALETTE[0]);
    }
}
