//! Geometry value types and the margin clamp used for overlay placement.

use serde::{Deserialize, Serialize};

/// Minimum pixel distance kept between an element's edge and its container's
/// edge when clamping.
pub const CLAMP_MARGIN: f32 = 8.0;

/// 2D position in container-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// 2D size for width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle, position plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.pos.x + self.size.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.pos.y + self.size.height
    }
}

/// Clamp a candidate top-left position so the element stays inside the
/// container with `margin` pixels of breathing room on every side.
///
/// The upper bound is floored at zero: when the container is narrower than
/// `2 * margin + element width` the allowed range degenerates and the result
/// sticks to the floor rather than going negative. Same for the vertical axis.
pub fn clamp_to_container(candidate: Point, container: Size, element: Size, margin: f32) -> Point {
    let max_left = (container.width - element.width - margin).max(0.0);
    let max_top = (container.height - element.height - margin).max(0.0);
    Point::new(
        candidate.x.max(margin).min(max_left),
        candidate.y.max(margin).min(max_top),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_position_inside_margins() {
        let container = Size::new(400.0, 300.0);
        let element = Size::new(50.0, 50.0);
        let candidates = [
            Point::new(-100.0, -100.0),
            Point::new(0.0, 0.0),
            Point::new(8.0, 8.0),
            Point::new(200.0, 150.0),
            Point::new(1000.0, 1000.0),
        ];
        for candidate in candidates {
            let clamped = clamp_to_container(candidate, container, element, CLAMP_MARGIN);
            assert!(clamped.x >= CLAMP_MARGIN);
            assert!(clamped.y >= CLAMP_MARGIN);
            assert!(clamped.x <= 400.0 - 50.0 - CLAMP_MARGIN);
            assert!(clamped.y <= 300.0 - 50.0 - CLAMP_MARGIN);
        }
    }

    #[test]
    fn clamp_passes_through_an_in_range_candidate() {
        let clamped = clamp_to_container(
            Point::new(100.0, 80.0),
            Size::new(400.0, 300.0),
            Size::new(50.0, 50.0),
            CLAMP_MARGIN,
        );
        assert_eq!(clamped, Point::new(100.0, 80.0));
    }

    #[test]
    fn narrow_container_degenerates_to_the_zero_floor() {
        // Element wider than the container: max(width - elem - margin, 0) = 0,
        // so both bounds collapse and the result sticks at the floor.
        let clamped = clamp_to_container(
            Point::new(50.0, 50.0),
            Size::new(40.0, 40.0),
            Size::new(100.0, 100.0),
            CLAMP_MARGIN,
        );
        assert_eq!(clamped, Point::new(0.0, 0.0));
    }

    #[test]
    fn clamp_is_component_wise() {
        let clamped = clamp_to_container(
            Point::new(512.0, 12.0),
            Size::new(400.0, 300.0),
            Size::new(50.0, 50.0),
            CLAMP_MARGIN,
        );
        assert_eq!(clamped, Point::new(342.0, 12.0));
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }
}
