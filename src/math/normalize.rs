//! Rescaling raw weights onto a target area

use num_traits::Float;

/// Sum of a weight sequence
pub fn total<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |sum, &value| sum + value)
}

/// Scale weights so they sum to `area` while keeping their proportions
///
/// Every weight is multiplied by `area / sum(weights)`. A sequence whose sum
/// is not positive is returned unchanged; the layout then collapses to
/// zero-size rectangles instead of dividing by zero.
pub fn normalize<T: Float>(weights: &[T], area: T) -> Vec<T> {
    let sum = total(weights);
    if sum <= T::zero() {
        return weights.to_vec();
    }

    let scale = area / sum;
    weights.iter().map(|&weight| weight * scale).collect()
}
