//! Handing the pixel buffer over to the rendering surface and back.

use libcanvas::{SnapshotImage, Surface};
use pixel_abi::BufferLayout;
use zerocopy::IntoBytes;

use crate::{Bitmap, dlog, log};

/// Lives exactly as long as a surface handed out by [`Bitmap::with_surface`]
struct SurfaceScope {
    width: usize,
    height: usize,
}

impl SurfaceScope {
    fn acquire(width: usize, height: usize) -> Self {
        dlog!("Acquired a {width}x{height} surface");
        Self { width, height }
    }
}

impl Drop for SurfaceScope {
    fn drop(&mut self) {
        if std::thread::panicking() {
            dlog!(
                "Released a {}x{} surface while unwinding",
                self.width,
                self.height
            );
        } else {
            dlog!("Released a {}x{} surface", self.width, self.height);
        }
    }
}

impl Bitmap {
    /// The layout of [`Bitmap::as_bytes`], rows are never padded
    pub fn layout(&self) -> BufferLayout {
        BufferLayout::packed(self.width(), self.height())
    }

    /// The whole buffer as bytes, 4 per pixel in the order red, green, blue, alpha
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Lends the bitmap's buffer to `draw` as a [`Surface`].
    ///
    /// Everything drawn on the surface is reflected in the bitmap. The surface
    /// can't outlive this call, it is released however `draw` returns.
    pub fn with_surface<R>(&mut self, draw: impl FnOnce(&mut Surface<'_>) -> R) -> R {
        let (width, height) = self.size();
        let _scope = SurfaceScope::acquire(width, height);

        let mut surface = Surface::new(width, height, &mut self.pixels)
            .expect("a bitmap always holds width * height pixels");
        draw(&mut surface)
    }

    /// Takes a snapshot of the current contents, later changes to the bitmap don't affect it
    pub fn to_image(&self) -> SnapshotImage {
        SnapshotImage::from_pixels(self.width(), self.height(), self.pixels())
            .expect("a bitmap always holds width * height pixels")
    }

    /// Creates a bitmap the size of `image` and draws the image onto it.
    ///
    /// Images that aren't premultiplied are converted while drawing.
    pub fn from_image(image: &SnapshotImage) -> Self {
        let mut bitmap = Bitmap::new(image.width(), image.height());
        bitmap.with_surface(|surface| surface.draw_image(image, 0, 0));

        log!(
            "Created a {}x{} bitmap from a {:?} image",
            image.width(),
            image.height(),
            image.alpha_mode()
        );
        bitmap
    }
}

impl From<&Bitmap> for SnapshotImage {
    fn from(bitmap: &Bitmap) -> Self {
        bitmap.to_image()
    }
}

impl From<&SnapshotImage> for Bitmap {
    fn from(image: &SnapshotImage) -> Self {
        Bitmap::from_image(image)
    }
}
