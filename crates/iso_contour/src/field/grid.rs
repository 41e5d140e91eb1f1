//! Sampled scalar grid with per-axis coordinates.
//!
//! This module defines [`GridField`], a read-only view over a row-major sample buffer and the
//! x/y coordinate vectors that place each sample in data space. The x axis is the fastest
//! varying one: the sample at column `ix` and row `iy` lives at `values[iy * nx + ix]`.
use std::borrow::Cow;

use glam::DVec2;

use crate::error::{Axis, Error, Result};

/// Scalar samples on a rectangular, possibly non-uniform grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridField<'a> {
    values: Cow<'a, [f64]>,
    x_axis: Cow<'a, [f64]>,
    y_axis: Cow<'a, [f64]>,
}

impl<'a> GridField<'a> {
    /// Borrows `values` laid out row-major with `x_axis.len()` columns and `y_axis.len()` rows.
    pub fn new(values: &'a [f64], x_axis: &'a [f64], y_axis: &'a [f64]) -> Result<Self> {
        Self::from_cows(
            Cow::Borrowed(values),
            Cow::Borrowed(x_axis),
            Cow::Borrowed(y_axis),
        )
    }

    /// Borrows `values` with explicit row/column counts that must agree with the axis lengths.
    ///
    /// Argument order follows the storage order: rows (`ny`, y axis) are the major index,
    /// columns (`nx`, x axis) the minor one.
    pub fn with_dims(
        values: &'a [f64],
        ny: usize,
        nx: usize,
        y_axis: &'a [f64],
        x_axis: &'a [f64],
    ) -> Result<Self> {
        if y_axis.len() != ny {
            return Err(Error::DimensionMismatch {
                what: "y axis",
                expected: ny,
                actual: y_axis.len(),
            });
        }
        if x_axis.len() != nx {
            return Err(Error::DimensionMismatch {
                what: "x axis",
                expected: nx,
                actual: x_axis.len(),
            });
        }
        Self::new(values, x_axis, y_axis)
    }

    fn from_cows(
        values: Cow<'a, [f64]>,
        x_axis: Cow<'a, [f64]>,
        y_axis: Cow<'a, [f64]>,
    ) -> Result<Self> {
        let (nx, ny) = (x_axis.len(), y_axis.len());
        if nx == 0 || ny == 0 {
            return Err(Error::EmptyGrid { nx, ny });
        }

        let expected = nx.checked_mul(ny).ok_or(Error::DimensionMismatch {
            what: "values",
            expected: usize::MAX,
            actual: values.len(),
        })?;
        if values.len() != expected {
            return Err(Error::DimensionMismatch {
                what: "values",
                expected,
                actual: values.len(),
            });
        }

        check_axis(&x_axis, Axis::X)?;
        check_axis(&y_axis, Axis::Y)?;

        Ok(Self {
            values,
            x_axis,
            y_axis,
        })
    }
}

impl GridField<'static> {
    /// Takes ownership of the sample buffer and axes.
    pub fn from_vecs(values: Vec<f64>, x_axis: Vec<f64>, y_axis: Vec<f64>) -> Result<Self> {
        Self::from_cows(Cow::Owned(values), Cow::Owned(x_axis), Cow::Owned(y_axis))
    }

    /// Samples `f(x, y)` at every grid node.
    pub fn from_fn(
        x_axis: Vec<f64>,
        y_axis: Vec<f64>,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(x_axis.len() * y_axis.len());
        for &y in &y_axis {
            for &x in &x_axis {
                values.push(f(x, y));
            }
        }
        Self::from_vecs(values, x_axis, y_axis)
    }

    /// Grid whose axes are the node indices `0..nx` and `0..ny`.
    pub fn from_index_axes(values: Vec<f64>, nx: usize, ny: usize) -> Result<Self> {
        let x_axis = (0..nx).map(|i| i as f64).collect();
        let y_axis = (0..ny).map(|i| i as f64).collect();
        Self::from_vecs(values, x_axis, y_axis)
    }
}

impl GridField<'_> {
    /// Number of columns (x axis length).
    #[inline]
    pub fn nx(&self) -> usize {
        self.x_axis.len()
    }

    /// Number of rows (y axis length).
    #[inline]
    pub fn ny(&self) -> usize {
        self.y_axis.len()
    }

    /// Number of cells, `(nx - 1) * (ny - 1)`.
    pub fn cell_count(&self) -> usize {
        self.nx().saturating_sub(1) * self.ny().saturating_sub(1)
    }

    /// Sample at column `ix`, row `iy`.
    #[inline]
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.nx() + ix]
    }

    #[inline]
    pub fn x(&self, ix: usize) -> f64 {
        self.x_axis[ix]
    }

    #[inline]
    pub fn y(&self, iy: usize) -> f64 {
        self.y_axis[iy]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Data-space position of the node at `(ix, iy)`.
    #[inline]
    pub fn index_to_world(&self, ix: usize, iy: usize) -> DVec2 {
        DVec2::new(self.x(ix), self.y(iy))
    }

    /// Returns `true` if `p` lies exactly on one of the four outer grid lines.
    pub fn is_on_boundary(&self, p: DVec2) -> bool {
        let (x0, x1) = (self.x_axis[0], self.x_axis[self.nx() - 1]);
        let (y0, y1) = (self.y_axis[0], self.y_axis[self.ny() - 1]);
        p.x == x0 || p.x == x1 || p.y == y0 || p.y == y1
    }

    /// Returns `true` if both axes are strictly increasing or strictly decreasing.
    pub fn axes_monotonic(&self) -> bool {
        is_strictly_monotonic(&self.x_axis) && is_strictly_monotonic(&self.y_axis)
    }
}

fn check_axis(axis: &[f64], which: Axis) -> Result<()> {
    match axis.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteAxis { axis: which, index }),
        None => Ok(()),
    }
}

fn is_strictly_monotonic(axis: &[f64]) -> bool {
    axis.windows(2).all(|w| w[0] < w[1]) || axis.windows(2).all(|w| w[0] > w[1])
}
