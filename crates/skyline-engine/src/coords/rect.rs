use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Sizes may be negative; use [`Rect::normalized`] before comparing extents.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Rectangle reaching `radius` either side of `center`.
    #[inline]
    pub fn around(center: Vec2, radius: Vec2) -> Self {
        Self::new(center.x - radius.x, center.y - radius.y, radius.x * 2.0, radius.y * 2.0)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Grows (or shrinks, for negative `d`) every edge by `d`.
    #[inline]
    pub fn inflate(self, d: f32) -> Self {
        let r = self.normalized();
        Rect::new(r.origin.x - d, r.origin.y - d, r.size.x + 2.0 * d, r.size.y + 2.0 * d)
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        let min = Vec2::new(a.origin.x.min(b.origin.x), a.origin.y.min(b.origin.y));
        let max = Vec2::new(a.max().x.max(b.max().x), a.max().y.max(b.max().y));
        Rect::from_min_max(min, max)
    }

    /// Bounding box of a point set. `None` for an empty iterator.
    pub fn bounding(points: impl IntoIterator<Item = Vec2>) -> Option<Rect> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| {
            (Vec2::new(lo.x.min(p.x), lo.y.min(p.y)), Vec2::new(hi.x.max(p.x), hi.y.max(p.y)))
        });
        Some(Rect::from_min_max(min, max))
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Closed containment of a whole rectangle: edges may touch.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        b.origin.x >= a.origin.x
            && b.origin.y >= a.origin.y
            && b.max().x <= a.max().x
            && b.max().y <= a.max().y
    }
}
