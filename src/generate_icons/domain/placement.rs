/// Where a proportionally shrunk image lands on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl Placement {
    /// Fits a `width`x`height` image inside a `canvas`x`canvas` square.
    ///
    /// Images that already fit keep their size (no upscaling). Larger ones are
    /// scaled down so the longer side equals `canvas`. The result is centered,
    /// with any odd leftover pixel going to the right/bottom edge.
    pub fn fit_centered(width: u32, height: u32, canvas: u32) -> Self {
        let (w, h) = if width <= canvas && height <= canvas {
            (width, height)
        } else if width >= height {
            (canvas, scale_side(height, width, canvas))
        } else {
            (scale_side(width, height, canvas), canvas)
        };

        Self {
            width: w,
            height: h,
            x: (canvas - w) / 2,
            y: (canvas - h) / 2,
        }
    }

    pub fn fills_canvas(&self, canvas: u32) -> bool {
        self.width == canvas && self.height == canvas
    }
}

// Shorter side after the longer one has been brought down to `canvas`.
fn scale_side(side: u32, long: u32, canvas: u32) -> u32 {
    let scaled = (side as f64 * canvas as f64 / long as f64).round() as u32;
    scaled.clamp(1, canvas)
}
