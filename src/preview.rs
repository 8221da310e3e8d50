//! Schematic preview of the configured product.
//!
//! [`layout`] turns the current configuration into a flat list of [`Shape`]s in
//! CSS pixels; the preview canvas component paints them. Keeping the geometry
//! here means it can be checked without a browser.

use rust_decimal::prelude::ToPrimitive;

use crate::model::pricing::parse_dimension;
use crate::model::{ConfiguratorState, FrameId, Opening};

pub const MAIN_COLOR: &str = "#ffffff";
pub const FRAME_FILL: &str = "#1a1a1a";
pub const HANDLE_COLOR: &str = "#888888";
pub const TRACK_COLOR: &str = "rgba(255,255,255,0.2)";
pub const LABEL_COLOR: &str = "rgba(255,255,255,0.6)";
pub const GLASS_TOP: &str = "rgba(255, 255, 255, 0.15)";
pub const GLASS_BOTTOM: &str = "rgba(200, 200, 220, 0.08)";

const PADDING: f64 = 40.0;
/// Used for a dimension that is not (yet) a valid number.
const FALLBACK_CM: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    FillRect { rect: Rect, color: &'static str },
    /// Vertical glass gradient over the rect.
    Glass { rect: Rect },
    StrokeRect { rect: Rect, color: &'static str },
    Polyline { points: Vec<(f64, f64)>, color: &'static str },
    Triangle { points: [(f64, f64); 3], color: &'static str },
    RoundRect { rect: Rect, radius: f64, color: &'static str },
    /// Centered text; `vertical` rotates it by -90° around the anchor.
    Label { text: String, x: f64, y: f64, vertical: bool },
}

/// Everything the preview depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSpec {
    pub frame: FrameId,
    pub has_opening: bool,
    pub has_glass: bool,
    pub opening: Opening,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl PreviewSpec {
    pub fn from_state(state: &ConfiguratorState) -> Self {
        let dim = |field, raw: &str| {
            parse_dimension(field, raw)
                .ok()
                .and_then(|d| d.to_f64())
                .unwrap_or(FALLBACK_CM)
        };
        let frame = state.frame.unwrap_or(FrameId::Fixed);
        Self {
            frame,
            has_opening: state.frame.is_some_and(|f| f.frame().has_opening),
            has_glass: state.has_glass,
            opening: state.draft.opening,
            width_cm: dim("width", &state.draft.width_text),
            height_cm: dim("height", &state.draft.height_text),
        }
    }
}

fn cm_label(v: f64) -> String {
    format!("{v} cm")
}

/// Lay the product out inside a `canvas_w` × `canvas_h` box.
pub fn layout(spec: &PreviewSpec, canvas_w: f64, canvas_h: f64) -> Vec<Shape> {
    let avail_w = canvas_w - PADDING * 2.0;
    let avail_h = canvas_h - PADDING * 2.0;
    if avail_w <= 0.0 || avail_h <= 0.0 || spec.width_cm <= 0.0 || spec.height_cm <= 0.0 {
        return Vec::new();
    }

    let ratio = spec.width_cm / spec.height_cm;
    let (draw_w, draw_h) = if ratio > avail_w / avail_h {
        (avail_w, avail_w / ratio)
    } else {
        (avail_h * ratio, avail_h)
    };
    let outer = Rect {
        x: (canvas_w - draw_w) / 2.0,
        y: (canvas_h - draw_h) / 2.0,
        w: draw_w,
        h: draw_h,
    };
    let thick = draw_w.min(draw_h) * 0.06;
    let inner = Rect {
        x: outer.x + thick,
        y: outer.y + thick,
        w: draw_w - thick * 2.0,
        h: draw_h - thick * 2.0,
    };

    let mut shapes = vec![Shape::FillRect {
        rect: outer,
        color: FRAME_FILL,
    }];
    if spec.has_glass {
        shapes.push(Shape::Glass { rect: inner });
    }
    shapes.push(Shape::StrokeRect {
        rect: outer,
        color: MAIN_COLOR,
    });

    if spec.frame == FrameId::Slide {
        let half = inner.w / 2.0;
        shapes.push(Shape::StrokeRect {
            rect: Rect { w: half, ..inner },
            color: MAIN_COLOR,
        });
        shapes.push(Shape::StrokeRect {
            rect: Rect {
                x: inner.x + half,
                w: half,
                ..inner
            },
            color: MAIN_COLOR,
        });
        let track_y = outer.y + outer.h - thick / 3.0;
        shapes.push(Shape::Polyline {
            points: vec![(outer.x, track_y), (outer.x + outer.w, track_y)],
            color: TRACK_COLOR,
        });
    } else {
        shapes.push(Shape::StrokeRect {
            rect: inner,
            color: MAIN_COLOR,
        });
    }

    if spec.has_opening {
        opening_marks(spec, inner, &mut shapes);
    }

    shapes.push(Shape::Label {
        text: cm_label(spec.width_cm),
        x: outer.x + outer.w / 2.0,
        y: outer.y + outer.h + 25.0,
        vertical: false,
    });
    shapes.push(Shape::Label {
        text: cm_label(spec.height_cm),
        x: outer.x - 15.0,
        y: outer.y + outer.h / 2.0,
        vertical: true,
    });
    shapes
}

fn opening_marks(spec: &PreviewSpec, r: Rect, shapes: &mut Vec<Shape>) {
    let left = spec.opening == Opening::Left;
    let mid_y = r.y + r.h / 2.0;

    if matches!(spec.frame, FrameId::Classic | FrameId::DoorSimple | FrameId::TiltTurn) {
        let (hinge_x, apex_x) = if left { (r.x, r.x + r.w) } else { (r.x + r.w, r.x) };
        shapes.push(Shape::Polyline {
            points: vec![(hinge_x, r.y), (apex_x, mid_y), (hinge_x, r.y + r.h)],
            color: MAIN_COLOR,
        });
    }
    if spec.frame == FrameId::TiltTurn {
        shapes.push(Shape::Polyline {
            points: vec![(r.x, r.y + r.h), (r.x + r.w / 2.0, r.y), (r.x + r.w, r.y + r.h)],
            color: MAIN_COLOR,
        });
    }

    if spec.frame == FrameId::Slide {
        let len = r.w.min(r.h) * 0.15;
        let head = len * 0.4;
        // arrow sits in the pane that moves
        let pane_center = if left { r.x + r.w / 4.0 } else { r.x + r.w - r.w / 4.0 };
        let (start_x, end_x, back) = if left {
            (pane_center - len / 2.0, pane_center + len / 2.0, -head)
        } else {
            (pane_center + len / 2.0, pane_center - len / 2.0, head)
        };
        shapes.push(Shape::Polyline {
            points: vec![(start_x, mid_y), (end_x, mid_y)],
            color: MAIN_COLOR,
        });
        shapes.push(Shape::Triangle {
            points: [
                (end_x, mid_y),
                (end_x + back, mid_y - head / 2.0),
                (end_x + back, mid_y + head / 2.0),
            ],
            color: MAIN_COLOR,
        });

        let h = r.h * 0.4;
        let w = (r.w * 0.015).max(4.0);
        shapes.push(Shape::RoundRect {
            rect: Rect {
                x: pane_center - w / 2.0,
                y: mid_y - h / 2.0,
                w,
                h,
            },
            radius: w,
            color: HANDLE_COLOR,
        });
    } else {
        let h = (r.h * 0.15).max(20.0);
        let w = h / 4.0;
        let x = if left { r.x + r.w - w * 1.5 } else { r.x + w * 0.5 };
        shapes.push(Shape::RoundRect {
            rect: Rect {
                x,
                y: mid_y - h / 2.0,
                w,
                h,
            },
            radius: w / 2.0,
            color: HANDLE_COLOR,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigAction;
    use std::rc::Rc;
    use yew::Reducible;

    fn spec(frame: FrameId, w: f64, h: f64) -> PreviewSpec {
        PreviewSpec {
            frame,
            has_opening: frame.frame().has_opening,
            has_glass: true,
            opening: Opening::Right,
            width_cm: w,
            height_cm: h,
        }
    }

    fn outer(shapes: &[Shape]) -> Rect {
        match shapes.first() {
            Some(Shape::FillRect { rect, .. }) => *rect,
            other => panic!("expected frame fill first, got {other:?}"),
        }
    }

    fn handles(shapes: &[Shape]) -> Vec<Rect> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::RoundRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn wide_product_fills_available_width() {
        let shapes = layout(&spec(FrameId::Fixed, 200.0, 100.0), 480.0, 480.0);
        let r = outer(&shapes);
        assert_eq!(r.w, 400.0);
        assert_eq!(r.h, 200.0);
        assert_eq!((r.x, r.y), (40.0, 140.0));
    }

    #[test]
    fn tall_product_fills_available_height() {
        let r = outer(&layout(&spec(FrameId::DoorSimple, 90.0, 210.0), 500.0, 500.0));
        assert_eq!(r.h, 420.0);
        assert!((r.w - 180.0).abs() < 1e-9);
        assert!((r.x + r.w / 2.0 - 250.0).abs() < 1e-9);
    }

    #[test]
    fn fixed_frame_has_no_handle_or_marks() {
        let shapes = layout(&spec(FrameId::Fixed, 100.0, 100.0), 400.0, 400.0);
        assert!(handles(&shapes).is_empty());
        assert!(!shapes.iter().any(|s| matches!(s, Shape::Polyline { .. })));
    }

    #[test]
    fn glass_toggle_controls_gradient() {
        let mut sp = spec(FrameId::Classic, 100.0, 100.0);
        assert!(layout(&sp, 400.0, 400.0).iter().any(|s| matches!(s, Shape::Glass { .. })));
        sp.has_glass = false;
        assert!(!layout(&sp, 400.0, 400.0).iter().any(|s| matches!(s, Shape::Glass { .. })));
    }

    #[test]
    fn handle_moves_with_opening_side() {
        let mut sp = spec(FrameId::Classic, 100.0, 100.0);
        let right = handles(&layout(&sp, 400.0, 400.0))[0];
        sp.opening = Opening::Left;
        let left = handles(&layout(&sp, 400.0, 400.0))[0];
        assert!(right.x < 200.0);
        assert!(left.x > 200.0);
        assert_eq!(right.h, left.h);
    }

    fn marks(shapes: &[Shape]) -> Vec<Vec<(f64, f64)>> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Polyline { points, color } if *color == MAIN_COLOR => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn opening_v_points_away_from_hinge() {
        for frame in [FrameId::Classic, FrameId::DoorSimple] {
            let mut sp = spec(frame, 100.0, 100.0);
            let shapes = layout(&sp, 400.0, 400.0);
            let o = outer(&shapes);
            let center = o.x + o.w / 2.0;
            let v = &marks(&shapes)[0];
            // hinge on the right, apex on the left
            assert!(v[1].0 < center, "{frame:?}");
            assert!(close(v[0].0, v[2].0) && v[0].0 > center, "{frame:?}");
            assert!(close(v[1].1, o.y + o.h / 2.0));

            sp.opening = Opening::Left;
            let v = &marks(&layout(&sp, 400.0, 400.0))[0];
            assert!(v[1].0 > center, "{frame:?}");
            assert!(v[0].0 < center, "{frame:?}");
        }
    }

    #[test]
    fn tilt_turn_adds_inverted_v_from_bottom() {
        let shapes = layout(&spec(FrameId::TiltTurn, 100.0, 100.0), 400.0, 400.0);
        let o = outer(&shapes);
        let tilt = &marks(&shapes)[1];
        let (apex, ends) = (tilt[1], [tilt[0], tilt[2]]);
        assert!(close(apex.0, o.x + o.w / 2.0));
        assert!(ends.iter().all(|e| e.1 > apex.1 && close(e.1, ends[0].1)));
        assert!(ends[0].0 < apex.0 && ends[1].0 > apex.0);
    }

    #[test]
    fn slide_arrow_follows_opening() {
        let arrow = |opening: Opening| {
            let mut sp = spec(FrameId::Slide, 200.0, 100.0);
            sp.opening = opening;
            let shapes = layout(&sp, 480.0, 480.0);
            let shaft = marks(&shapes)[0].clone();
            let head = shapes
                .iter()
                .find_map(|s| match s {
                    Shape::Triangle { points, .. } => Some(*points),
                    _ => None,
                })
                .unwrap();
            (outer(&shapes), shaft, head)
        };

        let (o, shaft, head) = arrow(Opening::Right);
        // moving pane is the right one, arrow points left
        assert!(shaft[0].0 > o.x + o.w / 2.0);
        assert!(shaft[1].0 < shaft[0].0);
        assert!(close(head[0].0, shaft[1].0));
        assert!(head[1].0 > head[0].0 && head[2].0 > head[0].0);

        let (o, shaft, head) = arrow(Opening::Left);
        assert!(shaft[0].0 < o.x + o.w / 2.0);
        assert!(shaft[1].0 > shaft[0].0);
        assert!(close(head[0].0, shaft[1].0));
        assert!(head[1].0 < head[0].0 && head[2].0 < head[0].0);
    }

    #[test]
    fn slide_track_sits_a_third_of_the_frame_above_bottom() {
        let shapes = layout(&spec(FrameId::Slide, 200.0, 100.0), 480.0, 480.0);
        let o = outer(&shapes);
        let thick = o.w.min(o.h) * 0.06;
        let track = shapes
            .iter()
            .find_map(|s| match s {
                Shape::Polyline { points, color } if *color == TRACK_COLOR => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(track.len(), 2);
        for (x, y) in &track {
            assert!(close(*y, o.y + o.h - thick / 3.0));
            assert!(*x >= o.x && *x <= o.x + o.w);
        }
        assert!(close(o.y + o.h - track[0].1, 4.0));
    }

    #[test]
    fn tilt_turn_draws_both_opening_marks() {
        let shapes = layout(&spec(FrameId::TiltTurn, 100.0, 100.0), 400.0, 400.0);
        let polylines = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Polyline { .. }))
            .count();
        assert_eq!(polylines, 2);
    }

    #[test]
    fn slide_has_two_panes_track_and_arrow() {
        let shapes = layout(&spec(FrameId::Slide, 200.0, 100.0), 480.0, 480.0);
        let panes = shapes
            .iter()
            .filter(|s| matches!(s, Shape::StrokeRect { .. }))
            .count();
        // outer + two panes
        assert_eq!(panes, 3);
        assert!(shapes.iter().any(|s| matches!(s, Shape::Polyline { color, .. } if *color == TRACK_COLOR)));
        assert!(shapes.iter().any(|s| matches!(s, Shape::Triangle { .. })));
        let h = handles(&shapes)[0];
        assert!(h.w >= 4.0);
    }

    #[test]
    fn labels_follow_dimensions() {
        let shapes = layout(&spec(FrameId::Fixed, 80.5, 120.0), 400.0, 400.0);
        let labels: Vec<_> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Label { text, vertical, .. } => Some((text.as_str(), *vertical)),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec![("80.5 cm", false), ("120 cm", true)]);
    }

    #[test]
    fn too_small_canvas_draws_nothing() {
        assert!(layout(&spec(FrameId::Fixed, 100.0, 100.0), 60.0, 400.0).is_empty());
    }

    #[test]
    fn spec_falls_back_for_missing_input() {
        let s = Rc::new(ConfiguratorState::default())
            .reduce(ConfigAction::SelectFrame(FrameId::Slide))
            .reduce(ConfigAction::SetWidth("250".into()));
        let sp = PreviewSpec::from_state(&s);
        assert_eq!(sp.width_cm, 250.0);
        assert_eq!(sp.height_cm, FALLBACK_CM);
        assert!(sp.has_opening);
        let empty = PreviewSpec::from_state(&ConfiguratorState::default());
        assert_eq!(empty.frame, FrameId::Fixed);
        assert!(!empty.has_opening);
    }
}
