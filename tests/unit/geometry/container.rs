//! Tests for strip placement and cutting of the free region

#[cfg(test)]
mod tests {
    use squarify::geometry::container::Container;
    use squarify::geometry::rectangle::Rectangle;

    fn assert_rect_eq(actual: Option<&Rectangle>, expected: Rectangle) {
        let Some(actual) = actual else {
            unreachable!("Missing rectangle, expected {expected:?}");
        };
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(
            close(actual.x1, expected.x1)
                && close(actual.y1, expected.y1)
                && close(actual.x2, expected.x2)
                && close(actual.y2, expected.y2),
            "Expected {expected:?}, got {actual:?}"
        );
    }

    // Tests shortest edge for wide, tall and square containers
    // Verified by returning max instead of min
    #[test]
    fn test_shortest_edge() {
        assert!((Container::<f64>::new(0.0, 0.0, 30.0, 10.0).shortest_edge() - 10.0).abs() < f64::EPSILON);
        assert!((Container::<f64>::new(0.0, 0.0, 4.0, 9.0).shortest_edge() - 4.0).abs() < f64::EPSILON);
        assert!((Container::<f64>::new(0.0, 0.0, 7.0, 7.0).shortest_edge() - 7.0).abs() < f64::EPSILON);
    }

    // Tests that a wide container receives a full-height vertical strip stacked top to bottom
    // Verified by swapping the orientation test
    #[test]
    fn test_coordinates_for_wide_container() {
        let container = Container::new(2.0, 3.0, 30.0, 10.0);
        let rects = container.coordinates_for(&[40.0, 60.0]);

        assert_eq!(rects.len(), 2);
        assert_rect_eq(rects.first(), Rectangle::new(2.0, 3.0, 12.0, 7.0));
        assert_rect_eq(rects.get(1), Rectangle::new(2.0, 7.0, 12.0, 13.0));
    }

    // Tests that a tall container receives a full-width horizontal strip running left to right
    // Verified by stacking along y in the tall branch
    #[test]
    fn test_coordinates_for_tall_container() {
        let container = Container::new(0.0, 0.0, 4.0, 9.0);
        let rects = container.coordinates_for(&[4.0, 12.0]);

        assert_eq!(rects.len(), 2);
        assert_rect_eq(rects.first(), Rectangle::new(0.0, 0.0, 1.0, 4.0));
        assert_rect_eq(rects.get(1), Rectangle::new(1.0, 0.0, 4.0, 4.0));
    }

    // Tests that a square container is treated as wide
    // Verified by changing >= to > in the orientation test
    #[test]
    fn test_coordinates_for_square_container_uses_vertical_strip() {
        let container = Container::new(0.0, 0.0, 2.0, 2.0);
        let rects = container.coordinates_for(&[2.0]);

        assert_rect_eq(rects.first(), Rectangle::new(0.0, 0.0, 1.0, 2.0));
    }

    // Tests that a zero-sum row collapses to zero-size cells at the origin instead of NaN
    // Verified by removing the zero-thickness guard
    #[test]
    fn test_coordinates_for_zero_row() {
        let container = Container::new(1.0, 1.0, 10.0, 5.0);
        let rects = container.coordinates_for(&[0.0, 0.0]);

        assert_eq!(rects.len(), 2);
        for rect in &rects {
            assert!(rect.is_finite());
            assert_rect_eq(Some(rect), Rectangle::new(1.0, 1.0, 1.0, 1.0));
        }
    }

    // Tests that a container cut down to zero width collapses its row instead of dividing by zero
    // Verified by removing the zero-span guard in coordinates_for
    #[test]
    fn test_coordinates_for_exhausted_container() {
        let container = Container::new(10.0, 0.0, 0.0, 10.0);
        let rects = container.coordinates_for(&[1e-299, 2e-299]);

        assert_eq!(rects.len(), 2);
        for rect in &rects {
            assert!(rect.is_finite(), "Non-finite {rect:?}");
            assert_rect_eq(Some(rect), Rectangle::new(10.0, 0.0, 10.0, 0.0));
        }
    }

    // Tests that cutting a container with no extent along the strip leaves it unchanged
    // Verified by dividing by the zero height in the wide branch
    #[test]
    fn test_cut_area_exhausted_container() {
        let flat = Container::new(4.0, 2.0, 6.0, 0.0);
        let narrow = Container::new(10.0, 0.0, 0.0, 10.0);

        assert_eq!(flat.cut_area(1e-300), flat);
        assert_eq!(narrow.cut_area(1e-300), narrow);
    }

    // Tests that an empty row produces no rectangles
    // Verified by emitting a placeholder for empty rows
    #[test]
    fn test_coordinates_for_empty_row() {
        let container = Container::new(0.0, 0.0, 10.0, 5.0);

        assert!(container.coordinates_for(&[]).is_empty());
    }

    // Tests that cutting a wide container removes a strip from the left edge
    // Verified by shrinking height instead of width
    #[test]
    fn test_cut_area_wide() {
        let container = Container::new(0.0, 0.0, 30.0, 10.0);
        let cut = container.cut_area(100.0);

        assert_eq!(cut, Container::new(10.0, 0.0, 20.0, 10.0));
        assert_eq!(container, Container::new(0.0, 0.0, 30.0, 10.0));
    }

    // Tests that cutting a tall container removes a strip from the top edge
    // Verified by advancing x in the tall branch
    #[test]
    fn test_cut_area_tall() {
        let container = Container::new(5.0, 5.0, 4.0, 10.0);
        let cut = container.cut_area(8.0);

        assert_eq!(cut, Container::new(5.0, 7.0, 4.0, 8.0));
    }

    // Tests that rounding past the far edge never yields a negative dimension
    // Verified by removing the clamp
    #[test]
    fn test_cut_area_clamps_at_zero() {
        let container = Container::<f64>::new(0.0, 0.0, 3.0, 1.0);
        let cut = container.cut_area(3.000_000_001);

        assert!(cut.width >= 0.0);
        assert!(cut.width.abs() < f64::EPSILON);
    }

    // Tests that cut area and strip placement agree on strip thickness
    // Verified by using the long edge in cut_area
    #[test]
    fn test_cut_matches_strip() {
        let container = Container::<f64>::new(0.0, 0.0, 12.0, 5.0);
        let row = [10.0, 15.0];
        let rects = container.coordinates_for(&row);
        let cut = container.cut_area(25.0);

        for rect in &rects {
            assert!((rect.x2 - cut.x).abs() < 1e-9);
        }
        assert!((cut.area() + 25.0 - container.area()).abs() < 1e-9);
        assert_eq!(cut.bounds(), Rectangle::new(5.0, 0.0, 12.0, 5.0));
    }
}
