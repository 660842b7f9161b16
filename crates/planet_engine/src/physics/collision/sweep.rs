//! Discretized swept-path sampling
//!
//! A path from one pose to another is tested by sampling poses at a fixed
//! density per unit of distance travelled rather than by solving the
//! continuous sweep analytically.

use super::orientation::OrientationState;

/// Paths shorter than this are treated as a single pose
const MIN_PATH_LENGTH: f32 = 1.0e-6;

/// Iterator over poses along a straight path
///
/// Yields samples at `t = i / (samples_per_unit * distance)` for every `t`
/// in `[0, 1)`. The end pose itself is not sampled. A zero-length (or
/// non-finite) path yields exactly one sample at the start pose.
#[derive(Debug, Clone)]
pub struct PathSampler {
    from: OrientationState,
    to: OrientationState,
    step: f32,
    index: usize,
    count: usize,
}

impl PathSampler {
    /// Sample the path from `from` to `to`
    pub fn new(from: OrientationState, to: OrientationState, samples_per_unit: f32) -> Self {
        let distance = (to.position - from.position).norm();
        let density = samples_per_unit * distance;

        let (step, count) = if distance > MIN_PATH_LENGTH && density.is_finite() && density > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = density.ceil() as usize;
            (density.recip(), count.max(1))
        } else {
            log::trace!("Zero-length path at {:?}, sampling start pose only", from.position);
            (0.0, 1)
        };

        Self { from, to, step, index: 0, count }
    }

    /// Step between consecutive samples as a fraction of the path
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Total number of samples this path produces
    pub fn sample_count(&self) -> usize {
        self.count
    }
}

impl Iterator for PathSampler {
    type Item = OrientationState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let t = self.index as f32 * self.step;
        self.index += 1;
        Some(self.from.lerp(&self.to, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSampler {}
