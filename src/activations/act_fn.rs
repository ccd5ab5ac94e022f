/// An elementwise activation function bundled with its derivative.
///
/// Both functions receive the (row, col) position of the element they transform, which lets
/// an activation depend on where the value sits in the matrix. Most activations ignore it.
///
/// # Precondition
/// `df` must be the derivative of `f` expressed in terms of the *activated* value: the
/// training engine calls `df(row, col, f(z))`, never `df(row, col, z)`. The weight update adds
/// the scaled gradient, so it only descends on the squared error when this relationship holds.
/// A mismatched pair is not detected and silently diverges.
pub trait ActFn {
    /// The activation.
    fn f(&self, row: usize, col: usize, z: f64) -> f64;

    /// The derivative of the activation at the point that produced the activated value `y`.
    fn df(&self, row: usize, col: usize, y: f64) -> f64;
}

impl<A: ActFn + ?Sized> ActFn for &A {
    fn f(&self, row: usize, col: usize, z: f64) -> f64 {
        (**self).f(row, col, z)
    }

    fn df(&self, row: usize, col: usize, y: f64) -> f64 {
        (**self).df(row, col, y)
    }
}

/// An activation pair built from two caller supplied closures.
#[derive(Clone, Copy)]
pub struct FnPair<F, D> {
    f: F,
    df: D,
}

impl<F, D> FnPair<F, D>
where
    F: Fn(usize, usize, f64) -> f64,
    D: Fn(usize, usize, f64) -> f64,
{
    /// Creates a new `FnPair`.
    ///
    /// # Arguments
    /// * `f` - The activation.
    /// * `df` - Its derivative in terms of the activated value, see [`ActFn`].
    ///
    /// # Returns
    /// A new `FnPair` instance.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> ActFn for FnPair<F, D>
where
    F: Fn(usize, usize, f64) -> f64,
    D: Fn(usize, usize, f64) -> f64,
{
    fn f(&self, row: usize, col: usize, z: f64) -> f64 {
        (self.f)(row, col, z)
    }

    fn df(&self, row: usize, col: usize, y: f64) -> f64 {
        (self.df)(row, col, y)
    }
}
