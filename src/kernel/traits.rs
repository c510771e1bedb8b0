//! Kernel trait definition

use ndarray::ArrayView1;

/// Kernel function trait
///
/// A kernel function K(x, y) must be symmetric and positive-semidefinite for
/// the geometry estimators to return non-negative values. Neither property is
/// checked when the kernel is evaluated; the estimators report a
/// `ContractViolation` when a result betrays a non-PSD kernel.
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y)
    fn compute(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;

    /// Short human-readable description used in reports and logs
    fn describe(&self) -> String {
        "custom".to_string()
    }
}

impl<K: Kernel + ?Sized> Kernel for &K {
    fn compute(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (**self).compute(x, y)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<K: Kernel + ?Sized> Kernel for Box<K> {
    fn compute(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (**self).compute(x, y)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Kernel backed by an arbitrary closure
///
/// Built with [`from_fn`] so that the closure's argument types are inferred
/// from the bound there.
#[derive(Clone)]
pub struct FnKernel<F> {
    func: F,
    name: String,
}

/// Wrap a closure `(x, y) -> f64` as a [`Kernel`]
///
/// ```
/// use treesvm::kernel::{from_fn, Kernel};
/// use ndarray::array;
///
/// let kernel = from_fn(|x, y| x.dot(&y) + 1.0);
/// assert_eq!(kernel.compute(array![1.0, 2.0].view(), array![3.0, 4.0].view()), 12.0);
/// ```
pub fn from_fn<F>(func: F) -> FnKernel<F>
where
    F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + Send + Sync,
{
    FnKernel {
        func,
        name: "custom".to_string(),
    }
}

impl<F> FnKernel<F> {
    /// Attach a description shown in reports
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> Kernel for FnKernel<F>
where
    F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + Send + Sync,
{
    fn compute(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (self.func)(x, y)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
