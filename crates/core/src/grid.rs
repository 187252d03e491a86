//! Uniform periodic mesh helpers.

/// A uniform 1D mesh over `[start, stop)` with `n` sample points.
///
/// The domain is treated as periodic with period `stop - start`; the
/// endpoint `stop` is never included among the sample points. The same
/// type describes both the spatial axis and the (bounded) velocity axis.
#[derive(Debug, Clone, Copy)]
pub struct Mesh1D {
    pub start: f64,
    pub stop: f64,
    pub n: usize,
    pub step: f64,
}

impl Mesh1D {
    pub fn new(start: f64, stop: f64, n: usize) -> Self {
        assert!(n >= 1, "mesh must have at least one point");
        assert!(
            stop > start,
            "mesh extent must be positive (start={start}, stop={stop})"
        );
        let step = (stop - start) / n as f64;
        Self {
            start,
            stop,
            n,
            step,
        }
    }

    /// Domain length `stop - start` (the period of the mesh).
    #[inline]
    pub fn extent(&self) -> f64 {
        self.stop - self.start
    }

    /// The `n` equally spaced samples `start + i * step`, endpoint excluded.
    pub fn points(&self) -> Vec<f64> {
        (0..self.n)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}
