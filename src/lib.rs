pub mod config;
pub mod core;
pub mod render;

pub use crate::core::color::Color;
pub use crate::core::control::{ControlEvent, SegmentedControl};
pub use crate::core::geometry::{Point, Rect, Size};
pub use crate::core::measure::{CellMeasure, TextMeasure};
pub use crate::core::scroll::{EventFlow, PointerPhase, ScrollSurface};
pub use crate::core::style::{FontSpec, SegmentStyle};
