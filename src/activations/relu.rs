use super::ActFn;

/// Rectified linear unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Relu;

impl ActFn for Relu {
    fn f(&self, _row: usize, _col: usize, z: f64) -> f64 {
        z.max(0.)
    }

    // relu(z) > 0 iff z > 0, so the activated value is enough to pick the branch.
    fn df(&self, _row: usize, _col: usize, y: f64) -> f64 {
        if y > 0. {
            1.
        } else {
            0.
        }
    }
}
