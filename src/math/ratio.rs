//! Row quality measured as the worst aspect ratio among its cells

use num_traits::Float;

use crate::math::normalize::total;

/// Worst aspect ratio any cell of `row` would have in a strip against a side of `length`
///
/// Computes `max(length² · max / sum², sum² / (length² · min))`. The first
/// term grows when the strip is too thin for its largest cell, the second
/// when it is too thick for its smallest. Lower is squarer. An empty row
/// scores zero, so the first candidate is always accepted.
pub fn worst_ratio<T: Float>(row: &[T], length: T) -> T {
    if row.is_empty() {
        return T::zero();
    }

    let sum = total(row);
    let largest = row.iter().fold(T::neg_infinity(), |acc, &value| acc.max(value));
    let smallest = row.iter().fold(T::infinity(), |acc, &value| acc.min(value));

    let length_squared = length * length;
    let sum_squared = sum * sum;

    (length_squared * largest / sum_squared).max(sum_squared / (length_squared * smallest))
}

/// Whether appending `next` to `row` keeps the row at least as square as it is now
///
/// Ties favour growing the row. An empty row always accepts.
pub fn improves_ratio<T: Float>(row: &[T], next: T, length: T) -> bool {
    if row.is_empty() {
        return true;
    }

    let mut candidate = Vec::with_capacity(row.len() + 1);
    candidate.extend_from_slice(row);
    candidate.push(next);

    worst_ratio(row, length) >= worst_ratio(&candidate, length)
}
