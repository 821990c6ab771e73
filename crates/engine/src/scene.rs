//! Scene construction for a single frame.

use arrayvec::ArrayVec;

use crate::core::{Circle, Ellipse, Rectangle, Shape, Square};
use crate::types::{Point, MAX_SHAPES};

/// The shapes drawn in one frame.
pub type Scene = ArrayVec<Shape, MAX_SHAPES>;

/// Build the shapes for frame `frame`.
///
/// Motion profile (`f` = frame index):
/// - rectangle slides right by 1 per frame
/// - square drifts left and down by 1/2 per frame
/// - ellipse drifts left and down by 1/3 per frame while its string grows by 1
/// - circle drifts right by 1/5 per frame
pub fn scene_for_frame(frame: u32) -> Scene {
    let f = frame as f32;

    let mut scene = Scene::new();
    scene.push(Rectangle::new(Point::new(5.0 + f, 5.0), 2.0, 8.0).into());
    scene.push(Square::new(Point::new(50.0 - f / 2.0, 5.0 + f / 2.0), 7.0).into());
    scene.push(
        Ellipse::new(
            Point::new(10.0 - f / 3.0, 35.0 + f / 3.0),
            Point::new(25.0 - f / 3.0, 35.0 + f / 3.0),
            22.0 + f,
        )
        .into(),
    );
    scene.push(Circle::new(Point::new(50.0 + f / 5.0, 35.0), 15.0).into());
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeKind;

    #[test]
    fn scene_has_one_of_each_kind_in_order() {
        let kinds: Vec<ShapeKind> = scene_for_frame(0).iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            [
                ShapeKind::Rectangle,
                ShapeKind::Square,
                ShapeKind::Ellipse,
                ShapeKind::Circle
            ]
        );
    }

    #[test]
    fn scene_is_deterministic() {
        assert_eq!(scene_for_frame(17), scene_for_frame(17));
    }

    #[test]
    fn rectangle_moves_right_one_unit_per_frame() {
        let Shape::Rectangle(r0) = scene_for_frame(0)[0] else {
            panic!("expected rectangle first");
        };
        let Shape::Rectangle(r3) = scene_for_frame(3)[0] else {
            panic!("expected rectangle first");
        };
        assert_eq!(r0.anchor(), Point::new(5.0, 5.0));
        assert_eq!(r3.anchor(), Point::new(8.0, 5.0));
        assert_eq!((r3.width(), r3.height()), (2.0, 8.0));
    }

    #[test]
    fn ellipse_string_grows_one_unit_per_frame() {
        let Shape::Ellipse(e) = scene_for_frame(10)[2] else {
            panic!("expected ellipse third");
        };
        assert_eq!(e.string_length(), 32.0);
        assert!(!e.is_empty());
    }

    #[test]
    fn consecutive_frames_differ() {
        for f in 0..39 {
            assert_ne!(scene_for_frame(f), scene_for_frame(f + 1), "frame {}", f);
        }
    }
}
