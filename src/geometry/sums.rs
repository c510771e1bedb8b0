//! Kernel double sums
//!
//! `Σ_i Σ_j K(x_i, x_j)` over one point set is symmetric in (i, j), so it is
//! evaluated over the upper triangle only: the diagonal once, each
//! off-diagonal pair once and doubled. That is n(n+1)/2 kernel calls instead
//! of n². The cross sum between two different sets has no such symmetry.

use crate::cache::KernelCache;
use crate::kernel::Kernel;
use ndarray::ArrayView2;

/// Gram matrix entries of one point set, evaluated on demand
pub(crate) struct Gram<'a, 'k, K: ?Sized> {
    points: ArrayView2<'a, f64>,
    kernel: &'k K,
    cache: Option<KernelCache>,
    evaluations: usize,
}

impl<'a, 'k, K: Kernel + ?Sized> Gram<'a, 'k, K> {
    pub(crate) fn new(points: ArrayView2<'a, f64>, kernel: &'k K, cache: Option<KernelCache>) -> Self {
        Self {
            points,
            kernel,
            cache,
            evaluations: 0,
        }
    }

    /// K(p_i, p_j)
    pub(crate) fn entry(&mut self, i: usize, j: usize) -> f64 {
        let Gram {
            points,
            kernel,
            cache,
            evaluations,
        } = self;

        let mut evaluate = || {
            *evaluations += 1;
            kernel.compute(points.row(i), points.row(j))
        };

        match cache {
            Some(cache) => cache.get_or_compute(i, j, evaluate),
            None => evaluate(),
        }
    }

    /// Σ_i K(x_i, x_i) + 2 Σ_{i<j} K(x_i, x_j)
    pub(crate) fn self_sum(&mut self) -> f64 {
        let n = self.points.nrows();
        let mut summation = 0.0;

        for i in 0..n {
            summation += self.entry(i, i);
            for j in (i + 1)..n {
                summation += 2.0 * self.entry(i, j);
            }
        }

        summation
    }

    /// Σ_j K(p_i, p_j) over every point of the set, p_i included
    pub(crate) fn row_sum(&mut self, i: usize) -> f64 {
        let n = self.points.nrows();
        let mut summation = 0.0;

        for j in 0..n {
            summation += self.entry(i, j);
        }

        summation
    }

    /// Number of kernel calls made so far (cache hits excluded)
    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub(crate) fn cache(&self) -> Option<&KernelCache> {
        self.cache.as_ref()
    }
}

/// Σ_{a∈A} Σ_{b∈B} K(a, b), all m·n pairs
pub(crate) fn cross_sum<K: Kernel + ?Sized>(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    kernel: &K,
) -> f64 {
    let mut summation = 0.0;

    for x in a.outer_iter() {
        for y in b.outer_iter() {
            summation += kernel.compute(x, y);
        }
    }

    summation
}
