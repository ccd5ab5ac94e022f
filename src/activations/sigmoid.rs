use super::ActFn;

/// The logistic function, scaled by `amp`.
#[derive(Clone, Copy, Debug)]
pub struct Sigmoid {
    amp: f64,
}

impl Sigmoid {
    /// Creates a new `Sigmoid` whose image is `(0, amp)`.
    pub fn new(amp: f64) -> Self {
        Self { amp }
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl ActFn for Sigmoid {
    fn f(&self, _row: usize, _col: usize, z: f64) -> f64 {
        self.amp / (1. + (-z).exp())
    }

    // With s = y / amp, d/dz amp * s(z) = amp * s * (1 - s) = y * (1 - y / amp).
    fn df(&self, _row: usize, _col: usize, y: f64) -> f64 {
        y * (1. - y / self.amp)
    }
}
