pub mod animation;
pub mod color;
pub mod control;
pub mod geometry;
pub mod layers;
pub mod layout;
pub mod measure;
pub mod scroll;
pub mod style;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
