//! Shape variants and their containment predicates.
//!
//! Sizes are normalized on construction: a negative or NaN size becomes `0.0`,
//! which yields a degenerate shape rather than an error.

use crate::types::Point;

/// Clamp a size parameter into `[0, +inf]`.
#[inline(always)]
fn non_negative(v: f32) -> f32 {
    if v >= 0.0 {
        v
    } else {
        0.0
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    anchor: Point,
    width: f32,
    height: f32,
}

impl Rectangle {
    pub fn new(anchor: Point, width: f32, height: f32) -> Self {
        Self {
            anchor,
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// True when `p` lies inside the rectangle or on its edge.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.anchor.x <= p.x
            && p.x <= self.anchor.x + self.width
            && self.anchor.y <= p.y
            && p.y <= self.anchor.y + self.height
    }
}

/// Axis-aligned square anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    anchor: Point,
    side: f32,
}

impl Square {
    pub fn new(anchor: Point, side: f32) -> Self {
        Self {
            anchor,
            side: non_negative(side),
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    /// The equivalent rectangle (`width = height = side`).
    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle::new(self.anchor, self.side, self.side)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.as_rectangle().contains(p)
    }
}

/// Ellipse defined by two foci and the length of the "string" tied between them.
///
/// A point is inside when the sum of its distances to both foci does not exceed
/// `string_length`. If `string_length` is shorter than the distance between the
/// foci, no point qualifies and the ellipse is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    focus1: Point,
    focus2: Point,
    string_length: f32,
}

impl Ellipse {
    pub fn new(focus1: Point, focus2: Point, string_length: f32) -> Self {
        Self {
            focus1,
            focus2,
            string_length: non_negative(string_length),
        }
    }

    pub fn foci(&self) -> (Point, Point) {
        (self.focus1, self.focus2)
    }

    pub fn string_length(&self) -> f32 {
        self.string_length
    }

    /// True when no point can satisfy the containment predicate.
    pub fn is_empty(&self) -> bool {
        self.string_length < self.focus1.distance(self.focus2)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.distance(self.focus1) + p.distance(self.focus2) <= self.string_length
    }
}

/// Circle defined by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius: non_negative(radius),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The equivalent ellipse: both foci at the center, string length `2 * radius`.
    pub fn as_ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, self.center, 2.0 * self.radius)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.distance(self.center) <= self.radius
    }
}

/// Discriminant of a [`Shape`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Ellipse,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
        }
    }
}

/// Any drawable shape.
///
/// The set of variants is closed; `contains` dispatches with an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Ellipse(Ellipse),
    Circle(Circle),
}

impl Shape {
    /// Containment predicate, inclusive of the boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use term_shapes_core::{Circle, Shape};
    /// use term_shapes_types::Point;
    ///
    /// let s = Shape::from(Circle::new(Point::ORIGIN, 5.0));
    /// assert!(s.contains(Point::new(3.0, 4.0)));
    /// assert!(!s.contains(Point::new(3.0, 4.01)));
    /// ```
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle(r) => r.contains(p),
            Shape::Square(s) => s.contains(p),
            Shape::Ellipse(e) => e.contains(p),
            Shape::Circle(c) => c.contains(p),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::Ellipse(e)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let r = Rectangle::new(Point::ORIGIN, -3.0, f32::NAN);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
        assert_eq!(Square::new(Point::ORIGIN, -1.0).side(), 0.0);
        assert_eq!(Circle::new(Point::ORIGIN, -1.0).radius(), 0.0);
        assert_eq!(
            Ellipse::new(Point::ORIGIN, Point::ORIGIN, -1.0).string_length(),
            0.0
        );
    }

    #[test]
    fn zero_size_shapes_contain_only_their_anchor() {
        let p = Point::new(2.0, 3.0);
        let near = Point::new(2.0, 3.1);

        let r = Rectangle::new(p, 0.0, 0.0);
        assert!(r.contains(p));
        assert!(!r.contains(near));

        let s = Square::new(p, 0.0);
        assert!(s.contains(p));
        assert!(!s.contains(near));

        let c = Circle::new(p, 0.0);
        assert!(c.contains(p));
        assert!(!c.contains(near));
    }

    #[test]
    fn square_matches_equivalent_rectangle() {
        let s = Square::new(Point::new(1.0, 1.0), 4.0);
        let r = s.as_rectangle();
        for y in -2..8 {
            for x in -2..8 {
                let p = Point::new(x as f32, y as f32);
                assert_eq!(s.contains(p), r.contains(p), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn circle_matches_equivalent_ellipse_on_grid() {
        let c = Circle::new(Point::new(10.0, 10.0), 6.0);
        let e = c.as_ellipse();
        for y in 0..21 {
            for x in 0..21 {
                let p = Point::new(x as f32, y as f32);
                assert_eq!(c.contains(p), e.contains(p), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn short_string_ellipse_is_empty() {
        let e = Ellipse::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 9.0);
        assert!(e.is_empty());
        assert!(!e.contains(Point::new(5.0, 0.0)));
        assert!(!e.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn shape_dispatch_and_kind() {
        let shapes: [Shape; 4] = [
            Rectangle::new(Point::ORIGIN, 1.0, 1.0).into(),
            Square::new(Point::ORIGIN, 1.0).into(),
            Ellipse::new(Point::ORIGIN, Point::ORIGIN, 2.0).into(),
            Circle::new(Point::ORIGIN, 1.0).into(),
        ];
        let kinds: Vec<&str> = shapes.iter().map(|s| s.kind().as_str()).collect();
        assert_eq!(kinds, ["rectangle", "square", "ellipse", "circle"]);
        assert!(shapes.iter().all(|s| s.contains(Point::ORIGIN)));
        assert!(shapes.iter().all(|s| !s.contains(Point::new(1.5, 1.5))));
    }
}
