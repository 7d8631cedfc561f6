//! Static pitch markings in the normalized pitch space.
//!
//! FIFA dimensions (metres) are scaled into the inner rectangle of the
//! layout's [`PitchSpace`], so markings and player markers share one
//! coordinate system with no extra transform.

use crate::scene::Element;
use lineup_core::PitchSpace;

/// Real-world reference dimensions (metres)
pub mod field {
    pub const LENGTH_M: f32 = 105.0;
    pub const WIDTH_M: f32 = 68.0;
    pub const CENTER_CIRCLE_RADIUS_M: f32 = 9.15;
    pub const PENALTY_AREA_WIDTH_M: f32 = 40.32;
    pub const PENALTY_AREA_LENGTH_M: f32 = 16.5;
    pub const GOAL_AREA_WIDTH_M: f32 = 18.32;
    pub const GOAL_AREA_LENGTH_M: f32 = 5.5;
    pub const PENALTY_SPOT_M: f32 = 11.0;
}

const LINE_WIDTH: f32 = 0.4;
const SPOT_RADIUS: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Containment with a small tolerance for rounding at shared edges.
    pub fn contains(&self, other: &Rect) -> bool {
        const TOLERANCE: f32 = 1e-3;
        other.x >= self.x - TOLERANCE
            && other.y >= self.y - TOLERANCE
            && other.right() <= self.right() + TOLERANCE
            && other.bottom() <= self.bottom() + TOLERANCE
    }

    fn to_element(self, class: &str) -> Element {
        Element::new("rect")
            .attr("class", class)
            .attr("x", fmt_num(self.x))
            .attr("y", fmt_num(self.y))
            .attr("width", fmt_num(self.width))
            .attr("height", fmt_num(self.height))
    }
}

/// Pitch markings; the top half is the side of line 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchGeometry {
    pub view_width: f32,
    pub view_height: f32,
    pub boundary: Rect,
    pub halfway_y: f32,
    pub center: (f32, f32),
    pub center_circle_radius: f32,
    pub penalty_boxes: [Rect; 2],
    pub goal_boxes: [Rect; 2],
    pub penalty_spots: [(f32, f32); 2],
}

impl PitchGeometry {
    pub fn new(pitch: &PitchSpace) -> Self {
        let boundary = Rect {
            x: pitch.margin,
            y: pitch.margin,
            width: pitch.inner_width(),
            height: pitch.inner_height(),
        };
        let sx = boundary.width / field::WIDTH_M;
        let sy = boundary.height / field::LENGTH_M;
        let center = (pitch.width / 2.0, pitch.height / 2.0);

        let end_box = |width_m: f32, length_m: f32, top: bool| {
            let width = width_m * sx;
            let height = length_m * sy;
            let y = if top { boundary.y } else { boundary.bottom() - height };
            Rect { x: center.0 - width / 2.0, y, width, height }
        };

        let spot_offset = field::PENALTY_SPOT_M * sy;

        Self {
            view_width: pitch.width,
            view_height: pitch.height,
            boundary,
            halfway_y: center.1,
            center,
            center_circle_radius: field::CENTER_CIRCLE_RADIUS_M * sx.min(sy),
            penalty_boxes: [
                end_box(field::PENALTY_AREA_WIDTH_M, field::PENALTY_AREA_LENGTH_M, true),
                end_box(field::PENALTY_AREA_WIDTH_M, field::PENALTY_AREA_LENGTH_M, false),
            ],
            goal_boxes: [
                end_box(field::GOAL_AREA_WIDTH_M, field::GOAL_AREA_LENGTH_M, true),
                end_box(field::GOAL_AREA_WIDTH_M, field::GOAL_AREA_LENGTH_M, false),
            ],
            penalty_spots: [
                (center.0, boundary.y + spot_offset),
                (center.0, boundary.bottom() - spot_offset),
            ],
        }
    }

    /// SVG element drawn behind the markers, stretched to the container.
    pub fn to_svg(&self) -> Element {
        let mut svg = Element::new("svg")
            .attr("class", "pitch-lines")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr(
                "viewBox",
                format!("0 0 {} {}", fmt_num(self.view_width), fmt_num(self.view_height)),
            )
            .attr("preserveAspectRatio", "none")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", fmt_num(LINE_WIDTH))
            .attr("aria-hidden", "true");

        svg.push(self.boundary.to_element("pitch-boundary"));
        svg.push(
            Element::new("line")
                .attr("class", "pitch-halfway")
                .attr("x1", fmt_num(self.boundary.x))
                .attr("y1", fmt_num(self.halfway_y))
                .attr("x2", fmt_num(self.boundary.right()))
                .attr("y2", fmt_num(self.halfway_y)),
        );
        svg.push(circle("pitch-center-circle", self.center, self.center_circle_radius, false));
        svg.push(circle("pitch-center-spot", self.center, SPOT_RADIUS, true));
        for penalty_box in &self.penalty_boxes {
            svg.push(penalty_box.to_element("pitch-penalty-box"));
        }
        for goal_box in &self.goal_boxes {
            svg.push(goal_box.to_element("pitch-goal-box"));
        }
        for spot in self.penalty_spots {
            svg.push(circle("pitch-penalty-spot", spot, SPOT_RADIUS, true));
        }
        svg
    }
}

fn circle(class: &str, (cx, cy): (f32, f32), r: f32, filled: bool) -> Element {
    let element = Element::new("circle")
        .attr("class", class)
        .attr("cx", fmt_num(cx))
        .attr("cy", fmt_num(cy))
        .attr("r", fmt_num(r));
    if filled {
        element.attr("fill", "currentColor").attr("stroke", "none")
    } else {
        element
    }
}

/// Two decimals, trailing zeros trimmed (`12.50` -> `12.5`, `4.00` -> `4`).
pub(crate) fn fmt_num(value: f32) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_matches_margins() {
        let geometry = PitchGeometry::new(&PitchSpace::default());
        assert_eq!(geometry.boundary, Rect { x: 4.0, y: 4.0, width: 92.0, height: 132.0 });
        assert_eq!(geometry.halfway_y, 70.0);
        assert_eq!(geometry.center, (50.0, 70.0));
    }

    #[test]
    fn test_boxes_are_nested_and_inside_boundary() {
        let geometry = PitchGeometry::new(&PitchSpace::default());
        for i in 0..2 {
            assert!(geometry.boundary.contains(&geometry.penalty_boxes[i]));
            assert!(geometry.penalty_boxes[i].contains(&geometry.goal_boxes[i]));
        }
        assert_eq!(geometry.penalty_boxes[0].y, 4.0);
        assert!((geometry.penalty_boxes[1].bottom() - 136.0).abs() < 1e-3);
    }

    #[test]
    fn test_boxes_are_mirrored() {
        let geometry = PitchGeometry::new(&PitchSpace::default());
        let top = geometry.penalty_boxes[0];
        let bottom = geometry.penalty_boxes[1];
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.width, bottom.width);
        assert!(((top.y - 4.0) - (136.0 - bottom.bottom())).abs() < 1e-3);
    }

    #[test]
    fn test_svg_uses_pitch_view_box() {
        let svg = PitchGeometry::new(&PitchSpace::default()).to_svg();
        assert_eq!(svg.get_attr("viewBox"), Some("0 0 100 140"));

        let mut boxes = Vec::new();
        svg.find_by_class("pitch-penalty-box", &mut boxes);
        assert_eq!(boxes.len(), 2);

        let mut goal_boxes = Vec::new();
        svg.find_by_class("pitch-goal-box", &mut goal_boxes);
        assert_eq!(goal_boxes.len(), 2);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(4.0), "4");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(34.666), "34.67");
        assert_eq!(fmt_num(-0.001), "0");
    }
}
