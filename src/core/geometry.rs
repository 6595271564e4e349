//! Basic geometry types shared by layout, hit-testing, and rendering.
//!
//! All coordinates are f32 logical pixels; the renderer applies the device
//! scale factor when rasterizing.

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin + size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when `point` falls inside this rectangle.
    /// Top/left edges are inclusive, bottom/right exclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Rounds every component up to the next integer.
    ///
    /// Text layers placed on fractional coordinates rasterize blurry; layout
    /// snaps title frames to whole pixels with this.
    pub fn ceiled(&self) -> Rect {
        Rect {
            x: self.x.ceil(),
            y: self.y.ceil(),
            width: self.width.ceil(),
            height: self.height.ceil(),
        }
    }
}
