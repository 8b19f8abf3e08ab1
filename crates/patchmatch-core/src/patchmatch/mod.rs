//! PatchMatch nearest-neighbor field search over the patches of one image.
//!
//! A run initializes a random field and then alternates, for a fixed number
//! of iterations, a propagation sweep and a random search sweep. Even
//! iterations walk the field in raster order, odd ones in reverse raster
//! order. Both sweeps rewrite cells in place, so later cells of a sweep see
//! the updates of earlier ones.

pub mod config;
mod init;
mod propagation;
mod search;

use ndarray::Array2;
use rand::Rng;

use crate::error::{PatchMatchError, Result};
use crate::field::{DistanceField, NnField, Offset};
use crate::frame::Frame;
use crate::metric::PatchDistance;
use crate::patch::PatchAccessor;

pub use config::PatchMatchConfig;

/// Raster traversal order of one sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// Top-left to bottom-right.
    Forward,
    /// Bottom-right to top-left.
    Backward,
}

impl Sweep {
    pub fn for_iteration(iter: usize) -> Self {
        if iter % 2 == 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Result of a [`PatchMatch::run`].
#[derive(Clone, Debug)]
pub struct PatchMatchOutput {
    pub nnf: NnField,
    /// Present iff the run was asked to compute it.
    pub distance_field: Option<DistanceField>,
}

/// Nearest-neighbor field search engine bound to one frame.
#[derive(Debug)]
pub struct PatchMatch<'a> {
    patches: PatchAccessor<'a>,
    config: PatchMatchConfig,
    metric: Box<dyn PatchDistance>,
    directions: [Offset; 8],
}

impl<'a> PatchMatch<'a> {
    /// Build an engine using the metric named by `config.distance`.
    pub fn new(frame: &'a Frame, config: PatchMatchConfig) -> Result<Self> {
        let metric = config.distance.metric();
        Self::with_metric(frame, config, metric)
    }

    /// Build an engine with a caller-provided metric. `config.distance` is
    /// ignored.
    pub fn with_metric(
        frame: &'a Frame,
        config: PatchMatchConfig,
        metric: Box<dyn PatchDistance>,
    ) -> Result<Self> {
        config.validate(frame)?;
        let patches = PatchAccessor::new(frame, config.patch_size)
            .ok_or_else(|| PatchMatchError::config("patch_size does not fit the image"))?;
        Ok(Self {
            patches,
            config,
            metric,
            directions: Offset::principal_directions(),
        })
    }

    pub fn config(&self) -> &PatchMatchConfig {
        &self.config
    }

    /// Height of the field (representative-pixel rows).
    pub fn height(&self) -> usize {
        self.patches.height()
    }

    /// Width of the field (representative-pixel columns).
    pub fn width(&self) -> usize {
        self.patches.width()
    }

    /// Initialize a field and refine it for `nb_iter` iterations.
    pub fn run<R: Rng + ?Sized>(
        &self,
        nb_iter: usize,
        compute_distance_field: bool,
        rng: &mut R,
    ) -> Result<PatchMatchOutput> {
        self.run_with_progress(nb_iter, compute_distance_field, rng, |_, _| {})
    }

    /// Like [`PatchMatch::run`], calling `on_iteration(done, total)` after
    /// every propagation + random search pass.
    pub fn run_with_progress<R, F>(
        &self,
        nb_iter: usize,
        compute_distance_field: bool,
        rng: &mut R,
        mut on_iteration: F,
    ) -> Result<PatchMatchOutput>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, usize),
    {
        let mut nnf = self.initialize(rng);
        for iter in 0..nb_iter {
            self.propagate(&mut nnf, iter)?;
            self.random_search(&mut nnf, iter, rng)?;
            on_iteration(iter + 1, nb_iter);
        }

        let distance_field = if compute_distance_field {
            Some(self.distance_field(&nnf)?)
        } else {
            None
        };

        Ok(PatchMatchOutput {
            nnf,
            distance_field,
        })
    }

    /// Patch distance of every cell under `nnf`, evaluated from scratch.
    pub fn distance_field(&self, nnf: &NnField) -> Result<DistanceField> {
        self.check_shape(nnf)?;
        let mut df = Array2::<f64>::zeros(nnf.dim());
        for ((i, j), d) in df.indexed_iter_mut() {
            *d = self.patch_distance(i, j, nnf.get(i, j))?;
        }
        Ok(df)
    }

    /// Distance between the patch at `(i, j)` and the patch at `(i, j) + offset`.
    pub fn patch_distance(&self, i: usize, j: usize, offset: Offset) -> Result<f64> {
        let a = self.patches.get(i as isize, j as isize)?;
        let b = self.patches.get_shifted(i, j, offset)?;
        Ok(self.metric.distance(&a, &b))
    }

    /// Candidate score: infinite for targets outside the region and, with
    /// `non_zero_nnf`, for the zero offset.
    fn score(&self, i: usize, j: usize, candidate: Offset) -> Result<f64> {
        if !self.patches.is_inside(i, j, candidate)
            || (self.config.non_zero_nnf && candidate.is_zero())
        {
            return Ok(f64::INFINITY);
        }
        self.patch_distance(i, j, candidate)
    }

    /// Whether `(i, j)` lies on the border ring held at the zero offset.
    fn is_pinned(&self, i: usize, j: usize) -> bool {
        let b = self.config.border_size;
        b > 0 && (i < b || j < b || i + b >= self.height() || j + b >= self.width())
    }

    fn check_shape(&self, nnf: &NnField) -> Result<()> {
        if nnf.dim() != (self.height(), self.width()) {
            return Err(PatchMatchError::config(format!(
                "field is {}x{} but the image supports {}x{} representative pixels",
                nnf.height(),
                nnf.width(),
                self.height(),
                self.width()
            )));
        }
        Ok(())
    }
}
