use std::{
    convert::Infallible,
    fmt,
    ops::{Index, IndexMut},
};

use pixel_abi::Pixel;

use crate::{BitmapError, dlog};

/// Returns `width * height`, failing if it overflows
fn pixel_count(width: usize, height: usize) -> Result<usize, BitmapError> {
    width
        .checked_mul(height)
        .ok_or(BitmapError::DimensionsOverflow { width, height })
}

#[track_caller]
fn expect_pixel_count(width: usize, height: usize) -> usize {
    match pixel_count(width, height) {
        Ok(count) => count,
        Err(err) => panic!("{err}"),
    }
}

/// An owned grid of premultiplied pixels, stored row by row
///
/// The pixel at (x, y) lives at index `x + y * width` of [`Bitmap::pixels`].
/// The buffer never changes size once the bitmap is created.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pub(crate) pixels: Box<[Pixel]>,
}

impl Bitmap {
    /// Creates a bitmap out of `pixels`, taking ownership of them.
    ///
    /// Fails unless there are exactly `width * height` pixels.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: impl Into<Vec<Pixel>>,
    ) -> Result<Self, BitmapError> {
        let pixels = pixels.into();
        if pixel_count(width, height)? != pixels.len() {
            return Err(BitmapError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }

        dlog!("Created a {width}x{height} bitmap from pixels");
        Ok(Self {
            width,
            height,
            pixels: pixels.into_boxed_slice(),
        })
    }

    /// Creates a fully transparent bitmap
    ///
    /// # Panics
    /// If `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_filled_with(width, height, Pixel::CLEAR)
    }

    /// Creates a bitmap and fills it repeatedly with a given `pixel`
    ///
    /// # Panics
    /// If `width * height` overflows.
    #[track_caller]
    pub fn new_filled_with(width: usize, height: usize, pixel: Pixel) -> Self {
        let pixels = vec![pixel; expect_pixel_count(width, height)];
        Self {
            width,
            height,
            pixels: pixels.into_boxed_slice(),
        }
    }

    /// Creates a bitmap by calling `generator` once for every pixel, row by row.
    ///
    /// # Panics
    /// If `width * height` overflows.
    #[track_caller]
    pub fn from_fn(
        width: usize,
        height: usize,
        mut generator: impl FnMut(usize, usize) -> Pixel,
    ) -> Self {
        match Self::try_from_fn(width, height, |x, y| Ok::<_, Infallible>(generator(x, y))) {
            Ok(bitmap) => bitmap,
            Err(never) => match never {},
        }
    }

    /// Like [`Bitmap::from_fn`] but `generator` may fail, the first error
    /// aborts the construction and is returned as is.
    ///
    /// # Panics
    /// If `width * height` overflows.
    #[track_caller]
    pub fn try_from_fn<E>(
        width: usize,
        height: usize,
        mut generator: impl FnMut(usize, usize) -> Result<Pixel, E>,
    ) -> Result<Self, E> {
        let mut pixels = Vec::with_capacity(expect_pixel_count(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(generator(x, y)?);
            }
        }

        dlog!("Generated a {width}x{height} bitmap");
        Ok(Self {
            width,
            height,
            pixels: pixels.into_boxed_slice(),
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The whole buffer, row by row
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels.into_vec()
    }

    /// Returns an iterator over the rows of the bitmap, from top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + DoubleEndedIterator + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.pixels[start..start + self.width]
        })
    }

    /// Applies `transform` to every pixel, keeping the results grouped by row
    pub fn map_rows<T>(&self, mut transform: impl FnMut(Pixel) -> T) -> Vec<Vec<T>> {
        self.rows()
            .map(|row| row.iter().map(|pixel| transform(*pixel)).collect())
            .collect()
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    #[inline]
    #[track_caller]
    fn expect_index_of(&self, x: usize, y: usize) -> usize {
        match self.index_of(x, y) {
            Some(index) => index,
            None => panic!(
                "pixel ({x}, {y}) is out of bounds of a {}x{} bitmap",
                self.width, self.height
            ),
        }
    }

    /// Returns the pixel at (x, y), or `None` if it is out of bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        self.index_of(x, y).map(|index| &mut self.pixels[index])
    }

    /// Replaces the pixel at (x, y)
    ///
    /// # Panics
    /// If (x, y) is out of bounds.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        self[(x, y)] = pixel;
    }
}

impl Index<(usize, usize)> for Bitmap {
    type Output = Pixel;

    #[inline]
    #[track_caller]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.pixels[self.expect_index_of(x, y)]
    }
}

impl IndexMut<(usize, usize)> for Bitmap {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        let index = self.expect_index_of(x, y);
        &mut self.pixels[index]
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
