//! Planar linear-light image buffer.
//!
//! [`ImageBuf`] is the single image container the correction stages operate
//! on: three same-length `f32` planes (`r`, `g`, `b`) in row-major order,
//! values in linear light. Nominally `[0, ~1]`, but values above 1 are legal
//! before tone mapping (specular highlights); the kernel never produces NaN
//! or negative samples.
//!
//! # Memory Layout
//!
//! ```text
//! r: [R R R R ...]  ← one f32 per pixel, row-major
//! g: [G G G G ...]
//! b: [B B B B ...]
//! ```
//!
//! # Ownership
//!
//! A buffer is owned exclusively by one correction stage for the duration of
//! one call and is mutated in place. There is no sharing and no interior
//! mutability; parallelism happens *inside* a call by splitting the planes
//! into disjoint row ranges.
//!
//! # Usage
//!
//! ```rust
//! use darkroom_core::ImageBuf;
//!
//! let mut img = ImageBuf::filled(64, 48, [0.18, 0.18, 0.18]);
//! img.set_pixel(3, 7, [1.0, 0.5, 0.25]);
//! assert_eq!(img.pixel(3, 7), [1.0, 0.5, 0.25]);
//! ```

use crate::{Error, Result};

/// Planar floating-point RGB image buffer in linear light.
///
/// All three planes hold exactly `width * height` samples, row-major,
/// top-to-bottom. See the module docs for layout and ownership rules.
#[derive(Clone)]
pub struct ImageBuf {
    /// Red plane, `width * height` samples
    r: Vec<f32>,
    /// Green plane, `width * height` samples
    g: Vec<f32>,
    /// Blue plane, `width * height` samples
    b: Vec<f32>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageBuf {
    /// Creates a new image filled with zeros (black).
    ///
    /// # Example
    ///
    /// ```rust
    /// use darkroom_core::ImageBuf;
    ///
    /// let img = ImageBuf::new(1920, 1080);
    /// assert_eq!(img.width(), 1920);
    /// assert_eq!(img.pixel(0, 0), [0.0, 0.0, 0.0]);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let n = width as usize * height as usize;
        Self {
            r: vec![0.0; n],
            g: vec![0.0; n],
            b: vec![0.0; n],
            width,
            height,
        }
    }

    /// Creates an image filled with a constant pixel value.
    ///
    /// This is also the shape the (external) placeholder ingestion stage
    /// produces: a buffer of constant mid-gray.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darkroom_core::ImageBuf;
    ///
    /// let gray = ImageBuf::filled(100, 100, [0.5, 0.5, 0.5]);
    /// assert_eq!(gray.pixel(50, 50), [0.5, 0.5, 0.5]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [f32; 3]) -> Self {
        let n = width as usize * height as usize;
        Self {
            r: vec![pixel[0]; n],
            g: vec![pixel[1]; n],
            b: vec![pixel[2]; n],
            width,
            height,
        }
    }

    /// Creates an image from existing channel planes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaneMismatch`] if the planes differ in length, and
    /// [`Error::InvalidDimensions`] if their common length is not
    /// `width * height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darkroom_core::ImageBuf;
    ///
    /// let plane = vec![0.0f32; 64 * 48];
    /// let img = ImageBuf::from_planes(64, 48, plane.clone(), plane.clone(), plane).unwrap();
    /// assert_eq!(img.pixel_count(), 64 * 48);
    /// ```
    pub fn from_planes(
        width: u32,
        height: u32,
        r: Vec<f32>,
        g: Vec<f32>,
        b: Vec<f32>,
    ) -> Result<Self> {
        if r.len() != g.len() || r.len() != b.len() {
            return Err(Error::plane_mismatch(r.len(), g.len(), b.len()));
        }
        let expected = width as usize * height as usize;
        if r.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples per plane, got {}", expected, r.len()),
            ));
        }
        Ok(Self { r, g, b, width, height })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the three channel planes as read-only slices (r, g, b).
    #[inline]
    pub fn planes(&self) -> (&[f32], &[f32], &[f32]) {
        (&self.r, &self.g, &self.b)
    }

    /// Returns the three channel planes as mutable slices (r, g, b).
    ///
    /// Correction stages use this to iterate the planes in lock-step (or to
    /// split them into disjoint row ranges for parallel processing).
    #[inline]
    pub fn planes_mut(&mut self) -> (&mut [f32], &mut [f32], &mut [f32]) {
        (&mut self.r, &mut self.g, &mut self.b)
    }

    /// Returns the sample index for pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y) as `[r, g, b]`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.offset(x, y);
        [self.r[i], self.g[i], self.b[i]]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; 3]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.offset(x, y);
        self.r[i] = pixel[0];
        self.g[i] = pixel[1];
        self.b[i] = pixel[2];
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: [f32; 3]) {
        self.r.fill(pixel[0]);
        self.g.fill(pixel[1]);
        self.b.fill(pixel[2]);
    }

    /// Applies a function to each pixel in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darkroom_core::ImageBuf;
    ///
    /// let mut img = ImageBuf::filled(10, 10, [0.5, 0.5, 0.5]);
    /// img.map_pixels(|px| [px[0] * 2.0, px[1] * 2.0, px[2] * 2.0]);
    /// assert_eq!(img.pixel(0, 0), [1.0, 1.0, 1.0]);
    /// ```
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn([f32; 3]) -> [f32; 3],
    {
        for i in 0..self.r.len() {
            let out = f([self.r[i], self.g[i], self.b[i]]);
            self.r[i] = out[0];
            self.g[i] = out[1];
            self.b[i] = out[2];
        }
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [f32; 3])> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}

impl std::fmt::Debug for ImageBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuf")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
