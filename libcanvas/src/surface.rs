use pixel_abi::{BufferLayout, Pixel};
use zerocopy::{FromBytes, IntoBytes};

use crate::{DrawingCanvas, SnapshotImage, SurfaceError, canvas};

/// A drawable view of a pixel buffer owned by someone else
///
/// Everything drawn on the surface lands directly in the borrowed buffer.
pub struct Surface<'a> {
    width: usize,
    height: usize,
    pixels: &'a mut [Pixel],
}

impl<'a> Surface<'a> {
    /// Creates a surface drawing into `pixels`, which must hold exactly `width * height` pixels
    pub fn new(width: usize, height: usize, pixels: &'a mut [Pixel]) -> Result<Self, SurfaceError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(SurfaceError::BufferSize {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a surface drawing into raw `bytes` laid out as `layout`
    pub fn from_bytes(layout: BufferLayout, bytes: &'a mut [u8]) -> Result<Self, SurfaceError> {
        if !layout.is_packed() {
            return Err(SurfaceError::NotPacked);
        }

        let byte_len_err = SurfaceError::ByteLength {
            expected: layout.byte_len(),
            len: bytes.len(),
        };
        if bytes.len() != layout.byte_len() {
            return Err(byte_len_err);
        }

        let pixels = <[Pixel]>::mut_from_bytes(bytes).map_err(|_| byte_len_err)?;
        Self::new(layout.width(), layout.height(), pixels)
    }

    pub fn layout(&self) -> BufferLayout {
        BufferLayout::packed(self.width, self.height)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &*self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut *self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.pixels.as_mut_bytes()
    }

    /// Replaces every pixel with `pixel`
    pub fn clear(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Takes a copy of the current contents
    pub fn snapshot(&self) -> SnapshotImage {
        SnapshotImage::from_pixels(self.width, self.height, self.pixels())
            .expect("a surface always holds width * height pixels")
    }

    /// Composites `image` over the surface with its top-left corner at (off_x, off_y)
    ///
    /// The parts of the image falling outside of the surface are clipped.
    pub fn draw_image(&mut self, image: &SnapshotImage, off_x: i64, off_y: i64) {
        let cols = canvas::clip_span(off_x, image.width(), self.width);
        let rows = canvas::clip_span(off_y, image.height(), self.height);
        if cols.is_empty() || rows.is_empty() {
            return;
        }

        let alpha_mode = image.alpha_mode();
        let src_cols = (cols.start - off_x) as usize..(cols.end - off_x) as usize;

        for row in rows {
            let Some(src_row) = image.row((row - off_y) as usize) else {
                continue;
            };

            let target_row_index = row as usize * self.width;
            let target_pixels = &mut self.pixels
                [target_row_index + cols.start as usize..target_row_index + cols.end as usize];
            let src_pixels = &src_row[src_cols.clone()];

            for (target_pixel, src_pixel) in target_pixels.iter_mut().zip(src_pixels) {
                *target_pixel = alpha_mode.premultiply(*src_pixel).over(*target_pixel);
            }
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(x + y * self.width)
    }
}

impl DrawingCanvas for Surface<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn pixel_at(&self, x: i64, y: i64) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    fn draw_pixel(&mut self, x: i64, y: i64, pixel: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }
}

#[cfg(test)]
mod tests {
    use pixel_abi::AlphaMode;

    use super::*;

    fn rows(surface: &Surface) -> Vec<Vec<Pixel>> {
        surface
            .pixels()
            .chunks(surface.width())
            .map(|r| r.to_vec())
            .collect()
    }

    #[test]
    fn new_checks_buffer_size() {
        let mut pixels = [Pixel::CLEAR; 5];
        assert_eq!(
            Surface::new(3, 2, &mut pixels).err(),
            Some(SurfaceError::BufferSize {
                width: 3,
                height: 2,
                len: 5
            })
        );
        assert!(Surface::new(5, 1, &mut pixels).is_ok());
    }

    #[test]
    fn from_bytes_aliases_buffer() {
        let mut bytes = vec![0u8; 8];
        {
            let mut surface = Surface::from_bytes(BufferLayout::packed(2, 1), &mut bytes).unwrap();
            surface.draw_pixel(1, 0, Pixel::from_rgba(1, 2, 3, 4));
        }
        assert_eq!(bytes, [0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn from_bytes_rejects_bad_buffers() {
        let mut bytes = vec![0u8; 7];
        assert_eq!(
            Surface::from_bytes(BufferLayout::packed(2, 1), &mut bytes).err(),
            Some(SurfaceError::ByteLength {
                expected: 8,
                len: 7
            })
        );

        let padded = BufferLayout::with_stride(1, 1, 8).unwrap();
        let mut bytes = vec![0u8; 8];
        assert_eq!(
            Surface::from_bytes(padded, &mut bytes).err(),
            Some(SurfaceError::NotPacked)
        );
    }

    #[test]
    fn drawing_outside_is_clipped() {
        let mut pixels = [Pixel::CLEAR; 4];
        let mut surface = Surface::new(2, 2, &mut pixels).unwrap();
        surface.draw_pixel(-1, 0, Pixel::RED);
        surface.draw_pixel(2, 0, Pixel::RED);
        surface.draw_pixel(0, 2, Pixel::RED);
        assert_eq!(surface.pixel_at(2, 0), None);
        surface.draw_rect(-5, 1, 6, 10, Pixel::BLUE);
        assert_eq!(
            rows(&surface),
            [[Pixel::CLEAR, Pixel::CLEAR], [Pixel::BLUE, Pixel::CLEAR]]
        );
    }

    #[test]
    fn rect_points_are_inclusive() {
        let mut pixels = [Pixel::CLEAR; 9];
        let mut surface = Surface::new(3, 3, &mut pixels).unwrap();
        surface.draw_rect_points(2, 1, 1, 2, Pixel::GREEN);
        assert_eq!(
            rows(&surface),
            [
                [Pixel::CLEAR, Pixel::CLEAR, Pixel::CLEAR],
                [Pixel::CLEAR, Pixel::GREEN, Pixel::GREEN],
                [Pixel::CLEAR, Pixel::GREEN, Pixel::GREEN],
            ]
        );
    }

    #[test]
    fn fill_rect_blends() {
        let mut pixels = [Pixel::BLUE; 2];
        let mut surface = Surface::new(2, 1, &mut pixels).unwrap();
        surface.fill_rect(1, 0, 1, 1, Pixel::from_rgba(128, 0, 0, 128));
        assert_eq!(surface.pixels()[0], Pixel::BLUE);
        assert_eq!(surface.pixels()[1], Pixel::from_rgba(128, 0, 127, 0xFF));
    }

    #[test]
    fn diagonal_line() {
        let mut pixels = [Pixel::CLEAR; 9];
        let mut surface = Surface::new(3, 3, &mut pixels).unwrap();
        surface.draw_line(2, 2, 0, 0, Pixel::WHITE);
        for i in 0..3 {
            assert_eq!(surface.pixel_at(i, i), Some(Pixel::WHITE));
        }
        assert_eq!(surface.pixels().iter().filter(|p| **p == Pixel::WHITE).count(), 3);
    }

    #[test]
    fn horizontal_line_includes_both_ends() {
        let mut pixels = [Pixel::CLEAR; 4];
        let mut surface = Surface::new(4, 1, &mut pixels).unwrap();
        surface.draw_line(0, 0, 3, 0, Pixel::WHITE);
        assert!(surface.pixels().iter().all(|p| *p == Pixel::WHITE));
    }

    #[test]
    fn circle_outline_and_fill() {
        let mut pixels = [Pixel::CLEAR; 25];
        let mut surface = Surface::new(5, 5, &mut pixels).unwrap();
        surface.draw_circle(2, 2, 2, Pixel::RED, Some(Pixel::GREEN));
        assert_eq!(surface.pixel_at(2, 2), Some(Pixel::GREEN));
        assert_eq!(surface.pixel_at(2, 0), Some(Pixel::RED));
        assert_eq!(surface.pixel_at(4, 2), Some(Pixel::RED));
        assert_eq!(surface.pixel_at(0, 0), Some(Pixel::CLEAR));
    }

    #[test]
    fn snapshot_is_independent() {
        let mut pixels = [Pixel::RED; 2];
        let mut surface = Surface::new(2, 1, &mut pixels).unwrap();
        let image = surface.snapshot();
        surface.clear(Pixel::BLUE);
        assert_eq!(image.pixel(0, 0), Some(Pixel::RED));
        assert_eq!(image.pixel(1, 0), Some(Pixel::RED));
    }

    #[test]
    fn draw_image_at_offset_clips() {
        let image = SnapshotImage::from_pixels(2, 2, &[Pixel::RED; 4]).unwrap();
        let mut pixels = [Pixel::CLEAR; 9];
        let mut surface = Surface::new(3, 3, &mut pixels).unwrap();
        surface.draw_image(&image, 2, -1);
        assert_eq!(
            rows(&surface),
            [
                [Pixel::CLEAR, Pixel::CLEAR, Pixel::RED],
                [Pixel::CLEAR, Pixel::CLEAR, Pixel::CLEAR],
                [Pixel::CLEAR, Pixel::CLEAR, Pixel::CLEAR],
            ]
        );

        surface.draw_image(&image, 10, 10);
        surface.draw_image(&image, -2, 0);
        assert_eq!(surface.pixel_at(0, 0), Some(Pixel::CLEAR));
    }

    #[test]
    fn draw_image_composites() {
        let half = Pixel::from_rgba(0, 0, 128, 128);
        let image = SnapshotImage::from_pixels(1, 1, &[half]).unwrap();
        let mut pixels = [Pixel::RED, Pixel::CLEAR];
        let mut surface = Surface::new(2, 1, &mut pixels).unwrap();
        surface.draw_image(&image, 0, 0);
        surface.draw_image(&image, 1, 0);
        assert_eq!(surface.pixels()[0], Pixel::from_rgba(127, 0, 128, 0xFF));
        assert_eq!(surface.pixels()[1], half);
    }

    #[test]
    fn draw_image_converts_alpha_modes() {
        let layout = BufferLayout::packed(2, 1);
        let bytes = vec![255, 0, 0, 128, 0, 255, 0, 0];

        let straight = SnapshotImage::from_bytes(layout, AlphaMode::Straight, bytes.clone()).unwrap();
        let mut pixels = [Pixel::CLEAR; 2];
        Surface::new(2, 1, &mut pixels)
            .unwrap()
            .draw_image(&straight, 0, 0);
        assert_eq!(pixels, [Pixel::from_rgba(128, 0, 0, 128), Pixel::CLEAR]);

        let opaque = SnapshotImage::from_bytes(layout, AlphaMode::Ignored, bytes).unwrap();
        let mut pixels = [Pixel::CLEAR; 2];
        Surface::new(2, 1, &mut pixels)
            .unwrap()
            .draw_image(&opaque, 0, 0);
        assert_eq!(pixels, [Pixel::RED, Pixel::GREEN]);
    }

    #[test]
    fn draw_padded_image() {
        let layout = BufferLayout::with_stride(1, 2, 8).unwrap();
        let bytes = vec![1, 1, 1, 255, 9, 9, 9, 9, 2, 2, 2, 255, 9, 9, 9, 9];
        let image = SnapshotImage::from_bytes(layout, AlphaMode::Premultiplied, bytes).unwrap();
        let mut pixels = [Pixel::CLEAR; 2];
        Surface::new(1, 2, &mut pixels)
            .unwrap()
            .draw_image(&image, 0, 0);
        assert_eq!(pixels, [Pixel::from_rgb(1, 1, 1), Pixel::from_rgb(2, 2, 2)]);
    }

    #[test]
    fn rect_points_far_off_canvas_are_clipped() {
        let mut pixels = [Pixel::CLEAR; 6];
        let mut surface = Surface::new(3, 2, &mut pixels).unwrap();
        surface.draw_rect_points(i64::MIN, 0, i64::MAX, 0, Pixel::RED);
        assert_eq!(rows(&surface)[0], vec![Pixel::RED; 3]);
        assert_eq!(rows(&surface)[1], vec![Pixel::CLEAR; 3]);

        surface.draw_rect(i64::MIN, i64::MIN, usize::MAX, usize::MAX, Pixel::BLUE);
        assert!(surface.pixels().iter().all(|p| *p == Pixel::BLUE));
        surface.fill_rect(-1, 1, usize::MAX, 1, Pixel::GREEN);
        assert_eq!(rows(&surface)[1], vec![Pixel::GREEN; 3]);
    }
}
