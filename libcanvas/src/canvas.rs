use core::ops::Range;

use pixel_abi::Pixel;

/// Clips the span `start..start + len` to `0..max`
pub(crate) fn clip_span(start: i64, len: usize, max: usize) -> Range<i64> {
    let max = i64::try_from(max).unwrap_or(i64::MAX);
    // always within i64 after the min, start is at least i64::MIN
    let end = (i128::from(start) + len as i128).min(i128::from(max)) as i64;
    start.max(0)..end
}

/// Drawing primitives over a grid of premultiplied pixels.
///
/// Coordinates are signed, anything landing outside of the canvas is clipped.
pub trait DrawingCanvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Returns the pixel at (x, y), or `None` if it is outside of the canvas
    fn pixel_at(&self, x: i64, y: i64) -> Option<Pixel>;

    /// Replaces the pixel at (x, y)
    fn draw_pixel(&mut self, x: i64, y: i64, pixel: Pixel);

    /// Composites `pixel` over the pixel at (x, y)
    #[inline]
    fn blend_pixel(&mut self, x: i64, y: i64, pixel: Pixel) {
        if let Some(dst) = self.pixel_at(x, y) {
            self.draw_pixel(x, y, pixel.over(dst));
        }
    }

    /// Replaces every pixel of the rectangle at (x, y)
    #[inline]
    fn draw_rect(&mut self, x: i64, y: i64, width: usize, height: usize, pixel: Pixel) {
        let cols = clip_span(x, width, self.width());
        for row in clip_span(y, height, self.height()) {
            for col in cols.clone() {
                self.draw_pixel(col, row, pixel);
            }
        }
    }

    /// Like [`DrawingCanvas::draw_rect`] but the corners are given, both included
    #[inline]
    fn draw_rect_points(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, pixel: Pixel) {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        let width = usize::try_from(x2.abs_diff(x1)).unwrap_or(usize::MAX).saturating_add(1);
        let height = usize::try_from(y2.abs_diff(y1)).unwrap_or(usize::MAX).saturating_add(1);

        self.draw_rect(x1, y1, width, height, pixel);
    }

    /// Composites `pixel` over every pixel of the rectangle at (x, y)
    #[inline]
    fn fill_rect(&mut self, x: i64, y: i64, width: usize, height: usize, pixel: Pixel) {
        let cols = clip_span(x, width, self.width());
        for row in clip_span(y, height, self.height()) {
            for col in cols.clone() {
                self.blend_pixel(col, row, pixel);
            }
        }
    }

    /// Draws a 1px line from (x0, y0) to (x1, y1), both ends included
    fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, pixel: Pixel) {
        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.draw_pixel(x, y, pixel);
            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// Draws a circle centered at (cx, cy) with a 1px `border_color` outline,
    /// filled with `fill_color` if there is one.
    fn draw_circle(
        &mut self,
        cx: i64,
        cy: i64,
        radius: u32,
        border_color: Pixel,
        fill_color: Option<Pixel>,
    ) {
        let radius = radius as i64;

        if let Some(fill_color) = fill_color {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dy * dy <= radius * radius {
                        self.draw_pixel(cx + dx, cy + dy, fill_color);
                    }
                }
            }
        }

        let mut xx = radius;
        let mut yy = 0;
        let mut err = 1 - radius;

        while xx >= yy {
            for (ox, oy) in [(xx, yy), (yy, xx)] {
                self.draw_pixel(cx + ox, cy + oy, border_color);
                self.draw_pixel(cx - ox, cy + oy, border_color);
                self.draw_pixel(cx + ox, cy - oy, border_color);
                self.draw_pixel(cx - ox, cy - oy, border_color);
            }

            yy += 1;
            if err < 0 {
                err += 2 * yy + 1;
            } else {
                xx -= 1;
                err += 2 * (yy - xx) + 1;
            }
        }
    }
}
