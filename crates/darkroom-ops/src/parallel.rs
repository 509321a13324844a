//! Row-parallel buffer application using Rayon.
//!
//! The per-pixel kernels in [`white_balance`](crate::white_balance) and
//! [`grading`](crate::grading) are pure functions of one pixel, so rows can
//! be processed independently. Each entry point precomputes its constants
//! once, then fans rows out across the Rayon pool.
//!
//! # Example
//!
//! ```rust
//! use darkroom_core::ImageBuf;
//! use darkroom_ops::{parallel, Pipeline, WhiteBalanceParams};
//!
//! let mut img = ImageBuf::filled(64, 64, [0.5, 0.5, 0.5]);
//! let pipeline = Pipeline {
//!     white_balance: WhiteBalanceParams { temperature: -40.0, tint: 0.0 },
//!     ..Pipeline::default()
//! };
//! parallel::process(&mut img, &pipeline);
//! ```

use darkroom_core::ImageBuf;
use rayon::prelude::*;
use tracing::debug;

use crate::grading::{GradingKernel, GradingParams};
use crate::pipeline::Pipeline;
use crate::white_balance::{self, WhiteBalanceParams};

/// Applies a per-pixel operation to every pixel, one row per Rayon task.
///
/// The operation must be pure per pixel; rows are mutated concurrently.
pub fn for_each_pixel<F>(img: &mut ImageBuf, op: F)
where
    F: Fn([f32; 3]) -> [f32; 3] + Sync,
{
    let width = img.width() as usize;
    if width == 0 || img.pixel_count() == 0 {
        return;
    }

    let (r, g, b) = img.planes_mut();
    r.par_chunks_mut(width)
        .zip(g.par_chunks_mut(width))
        .zip(b.par_chunks_mut(width))
        .for_each(|((row_r, row_g), row_b)| {
            for i in 0..row_r.len() {
                let [ro, go, bo] = op([row_r[i], row_g[i], row_b[i]]);
                row_r[i] = ro;
                row_g[i] = go;
                row_b[i] = bo;
            }
        });
}

/// Row-parallel white balance.
pub fn white_balance(img: &mut ImageBuf, params: &WhiteBalanceParams) {
    if params.is_neutral() {
        return;
    }
    debug!(
        width = img.width(),
        height = img.height(),
        "applying white balance (parallel)"
    );

    let scale = params.scale();
    for_each_pixel(img, |px| white_balance::apply_pixel(px, scale));
}

/// Row-parallel three-way grading.
pub fn grade(img: &mut ImageBuf, params: &GradingParams) {
    if params.is_identity() {
        return;
    }
    debug!(
        width = img.width(),
        height = img.height(),
        "applying three-way grading (parallel)"
    );

    let kernel = GradingKernel::new(params);
    for_each_pixel(img, |px| kernel.apply_pixel(px));
}

/// Row-parallel pipeline run, fused into a single pass over the buffer.
///
/// Equivalent to [`Pipeline::apply`] but each pixel goes through white
/// balance and grading back to back while it is hot, instead of two full
/// buffer sweeps.
pub fn process(img: &mut ImageBuf, pipeline: &Pipeline) {
    if pipeline.is_neutral() {
        return;
    }
    debug!(
        width = img.width(),
        height = img.height(),
        "running pipeline (parallel)"
    );

    let wb_active = !pipeline.white_balance.is_neutral();
    let scale = pipeline.white_balance.scale();

    let grading_active = !pipeline.grading.is_identity();
    let kernel = GradingKernel::new(&pipeline.grading);

    for_each_pixel(img, |px| {
        let px = if wb_active {
            white_balance::apply_pixel(px, scale)
        } else {
            px
        };
        if grading_active {
            kernel.apply_pixel(px)
        } else {
            px
        }
    });
}
