//! Conversions to and from Floem's color type, for widgets that render the
//! values computed here.

use floem::peniko;

use crate::color::Color;
use crate::gradient::GradientStop;

impl From<Color> for peniko::Color {
    fn from(c: Color) -> Self {
        peniko::Color::rgba(c.r(), c.g(), c.b(), c.a())
    }
}

impl From<peniko::Color> for Color {
    fn from(c: peniko::Color) -> Self {
        Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// `(offset, color)` pair as Floem gradients expect it.
impl From<GradientStop> for (f32, peniko::Color) {
    fn from(stop: GradientStop) -> Self {
        (stop.offset as f32, stop.color.into())
    }
}
