//! Vertical fill gradients for area charts.

use serde::Serialize;

/// Height in pixels the gradient spans.
pub const GRADIENT_HEIGHT: f64 = 400.0;

/// Hex alpha suffixes appended to a `#rrggbb` color.
const TOP_ALPHA: &str = "40"; // ~25%
const BOTTOM_ALPHA: &str = "10"; // ~6%

/// A linear gradient under construction.
pub trait LinearGradient {
    fn add_color_stop(&mut self, offset: f64, color: &str);
}

/// Surface able to create gradients, such as a 2D canvas context.
pub trait DrawingContext {
    type Gradient: LinearGradient;

    fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Self::Gradient;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Plain-data gradient, usable when no native context is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GradientSpec {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient for GradientSpec {
    fn add_color_stop(&mut self, offset: f64, color: &str) {
        self.stops.push(ColorStop {
            offset,
            color: color.to_string(),
        });
    }
}

/// Context that records gradients as [`GradientSpec`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecContext;

impl DrawingContext for SpecContext {
    type Gradient = GradientSpec;

    fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> GradientSpec {
        GradientSpec {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }
}

/// Top-to-bottom fade of `color` from ~25% to ~6% opacity.
pub fn create_gradient<C: DrawingContext>(ctx: &C, color: &str) -> C::Gradient {
    let mut gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, GRADIENT_HEIGHT);
    gradient.add_color_stop(0.0, &format!("{}{}", color, TOP_ALPHA));
    gradient.add_color_stop(1.0, &format!("{}{}", color, BOTTOM_ALPHA));
    gradient
}

impl GradientSpec {
    /// Gradient for `color` without a native context.
    pub fn for_color(color: &str) -> Self {
        create_gradient(&SpecContext, color)
    }
}
