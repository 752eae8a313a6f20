//! Entry points that turn raw weights into treemap rectangles

use std::cmp::Ordering;

use num_traits::Float;

use crate::algorithm::squarify::squarify;
use crate::geometry::container::Container;
use crate::geometry::rectangle::Rectangle;
use crate::io::error::{Result, TreemapError, invalid_parameter};
use crate::math::normalize::normalize;

/// Lay out weights inside the `width` × `height` region at (`x_offset`, `y_offset`)
///
/// Returns one rectangle per weight, in input order. Weights are scaled so
/// their rectangles exactly tile the region. Every call is independent; no
/// state survives between calls.
///
/// The caller is expected to pass non-negative finite weights and positive
/// dimensions. Nothing is checked here: a zero dimension collapses every
/// rectangle to zero area and NaN weights propagate into the coordinates.
/// [`try_compute_layout`] checks these preconditions instead.
pub fn compute_layout<T: Float>(
    weights: &[T],
    width: T,
    height: T,
    x_offset: T,
    y_offset: T,
) -> Vec<Rectangle<T>> {
    if weights.is_empty() {
        return Vec::new();
    }

    let normalized = normalize(weights, width * height);
    let container = Container::new(x_offset, y_offset, width, height);
    squarify(&normalized, container)
}

/// [`compute_layout`] with its preconditions checked
///
/// # Errors
///
/// Returns an error if:
/// - `width` or `height` is not a finite positive number
/// - an offset is not finite
/// - any weight is negative or not finite
/// - the resulting layout still contains non-finite coordinates
pub fn try_compute_layout<T: Float>(
    weights: &[T],
    width: T,
    height: T,
    x_offset: T,
    y_offset: T,
) -> Result<Vec<Rectangle<T>>> {
    validate_region(width, height, x_offset, y_offset)?;
    validate_weights(weights)?;

    let rects = compute_layout(weights, width, height, x_offset, y_offset);
    ensure_finite(&rects)?;
    Ok(rects)
}

/// Lay out the heaviest weights first, returning rectangles in input order
///
/// Squarified layouts are squarest when rows are built from large to small
/// weights. The weights are visited in descending order (ties keep their
/// input order) and the rectangles are then moved back to the index of the
/// weight they belong to.
///
/// # Errors
///
/// Same conditions as [`try_compute_layout`].
pub fn compute_sorted_layout<T: Float>(
    weights: &[T],
    width: T,
    height: T,
    x_offset: T,
    y_offset: T,
) -> Result<Vec<Rectangle<T>>> {
    validate_region(width, height, x_offset, y_offset)?;
    validate_weights(weights)?;

    let order = descending_order(weights);
    let sorted: Vec<T> = order
        .iter()
        .filter_map(|&index| weights.get(index).copied())
        .collect();

    let placed = compute_layout(&sorted, width, height, x_offset, y_offset);
    ensure_finite(&placed)?;

    let empty = Rectangle::new(T::zero(), T::zero(), T::zero(), T::zero());
    let mut rects = vec![empty; weights.len()];
    for (&index, rect) in order.iter().zip(placed) {
        if let Some(slot) = rects.get_mut(index) {
            *slot = rect;
        }
    }
    Ok(rects)
}

/// Index of the first rectangle containing the point, if any
pub fn hit_test<T: Float>(rects: &[Rectangle<T>], x: T, y: T) -> Option<usize> {
    rects.iter().position(|rect| rect.contains_point(x, y))
}

fn descending_order<T: Float>(weights: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        match (weights.get(a), weights.get(b)) {
            (Some(wa), Some(wb)) => wb.partial_cmp(wa).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    });
    order
}

fn validate_region<T: Float>(width: T, height: T, x_offset: T, y_offset: T) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= T::zero() {
            return Err(invalid_parameter(
                parameter,
                &as_f64(value),
                &"must be a finite positive number",
            ));
        }
    }
    for (parameter, value) in [("x_offset", x_offset), ("y_offset", y_offset)] {
        if !value.is_finite() {
            return Err(invalid_parameter(parameter, &as_f64(value), &"must be finite"));
        }
    }
    Ok(())
}

fn validate_weights<T: Float>(weights: &[T]) -> Result<()> {
    match weights
        .iter()
        .position(|&weight| !weight.is_finite() || weight < T::zero())
    {
        Some(index) => Err(TreemapError::InvalidWeight {
            index,
            value: weights.get(index).map_or(f64::NAN, |&weight| as_f64(weight)),
        }),
        None => Ok(()),
    }
}

fn ensure_finite<T: Float>(rects: &[Rectangle<T>]) -> Result<()> {
    match rects.iter().position(|rect| !rect.is_finite()) {
        Some(index) => {
            tracing::debug!(index, "layout contains non-finite geometry");
            Err(TreemapError::NonFiniteLayout { index })
        }
        None => Ok(()),
    }
}

fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
