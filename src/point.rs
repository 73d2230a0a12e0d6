use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Number of fractional digits kept when points are compared or printed.
pub const PRECISION: i32 = 3;

/// A 2D point, also used as a translation vector.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point with both coordinates rounded to [`PRECISION`] fractional digits.
    pub fn rounded(self) -> Self {
        Self::new(round(self.x), round(self.y))
    }

    /// Whether two points coincide once rounded.
    pub fn coincides(self, other: Point) -> bool {
        self.rounded() == other.rounded()
    }

    /// Mirror `self` around `center`.
    pub(crate) fn reflect_around(self, center: Point) -> Self {
        center * 2.0 - self
    }
}

/// Round a single coordinate to [`PRECISION`] fractional digits.
pub fn round(value: f64) -> f64 {
    let factor = 10f64.powi(PRECISION);
    (value * factor).round() / factor
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

