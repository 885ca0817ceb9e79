// Axis-aligned integer rectangles

use glam::IVec2;

/// Axis-aligned rectangle in pixel space (`y` grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from a top-left corner and a size
    pub fn from_corner(corner: IVec2, size: IVec2) -> Self {
        Self::new(corner.x, corner.y, size.x, size.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Top-left corner
    pub fn corner(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Copy of this rectangle moved by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Strict overlap test.
    ///
    /// Rectangles that only share an edge do not intersect, so a box resting
    /// on a floor is touching it without overlapping it.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_one_pixel_overlap_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 10, 10);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 4, 4);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_edges_and_translation() {
        let r = Rect::new(3, 4, 10, 20).translated(2, -4);
        assert_eq!(r.right(), 15);
        assert_eq!(r.bottom(), 20);
        assert_eq!(r.corner(), IVec2::new(5, 0));
        assert_eq!(Rect::from_corner(r.corner(), IVec2::new(10, 20)), r);
    }
}
