// Shared geometry types: points and axis-aligned rectangles

/// A 2D coordinate in screen units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Point reached by travelling `distance` along `angle_degrees`
    /// (counter-clockwise on screen, 0 = +x).
    pub fn offset(&self, angle_degrees: f64, distance: f64) -> Point {
        let angle_rad = angle_degrees.to_radians();
        Point {
            x: self.x + angle_rad.cos() * distance,
            y: self.y - angle_rad.sin() * distance,
        }
    }
}

/// Axis-aligned rectangle, screen convention (`top < bottom`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Rect {
            left: center.x - half_w,
            right: center.x + half_w,
            top: center.y - half_h,
            bottom: center.y + half_h,
        }
    }

    pub fn centerx(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn centery(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The five points sampled for collision checks: the four corners
    /// (top-left, top-right, bottom-left, bottom-right) then the center.
    pub fn critical_points(&self) -> [Point; 5] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.centerx(), self.centery()),
        ]
    }
}
