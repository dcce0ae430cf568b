#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_case::test_case;

    use tagcloud_rs::cloud::{CircularCloudLayouter, LayouterConfig};
    use tagcloud_rs::curves::ArchimedeanSpiral;
    use tagcloud_rs::geometry::CollidesWith;
    use tagcloud_rs::geometry::primitives::{Rect, Size};

    fn layouter() -> CircularCloudLayouter<ArchimedeanSpiral> {
        CircularCloudLayouter::new(ArchimedeanSpiral::default())
    }

    fn put_all(layouter: &mut CircularCloudLayouter<ArchimedeanSpiral>, sizes: &[(i32, i32)]) {
        for &(w, h) in sizes {
            layouter
                .put_next_rectangle(Size::new(w, h))
                .expect("valid size should always be placeable");
        }
    }

    #[test_case(&[(100, 100), (100, 100), (100, 100), (100, 100), (100, 100)]; "five equal squares")]
    #[test_case(&[(100, 100), (200, 100), (100, 200), (1000, 1000), (100, 100)]; "mixed aspect ratios")]
    #[test_case(&[(1, 1), (1, 1), (1, 1), (1, 1), (1, 1), (1, 1)]; "degenerate single pixels")]
    #[test_case(&[(30, 400), (400, 30), (30, 400), (400, 30), (50, 50), (50, 50)]; "tall and wide strips")]
    fn placed_rectangles_never_overlap(sizes: &[(i32, i32)]) {
        let mut layouter = layouter();
        put_all(&mut layouter, sizes);

        assert_eq!(layouter.rects().len(), sizes.len());
        for (a, b) in layouter.rects().iter().tuple_combinations() {
            assert!(
                !a.collides_with(b),
                "rectangles {a:?} and {b:?} overlap"
            );
        }
    }

    // Regression bounds for the default config, not tight optima. Five equal
    // squares settle into a cluster well under 7.5 * rect area; the
    // descending sequence is dominated by the 500x500 anchor.
    #[test_case(&[(100, 100); 5], 75_000; "five 100x100 squares")]
    #[test_case(&[(500, 500), (400, 400), (300, 300), (200, 200), (100, 100)], 900_000; "descending squares")]
    fn bounding_area_stays_under_ceiling(sizes: &[(i32, i32)], max_area: i64) {
        let mut layouter = layouter();
        put_all(&mut layouter, sizes);

        let extent = layouter.bounding_extent().expect("cloud is not empty");
        assert!(
            extent.area() <= max_area,
            "bounding extent {}x{} has area {}, expected <= {max_area}",
            extent.width(),
            extent.height(),
            extent.area()
        );
    }

    #[test]
    fn first_rectangle_is_centered_on_the_origin() {
        let mut layouter = layouter();
        let placed = layouter.put_next_rectangle(Size::new(100, 100)).unwrap();
        assert_eq!(placed, Rect::try_new(-50, -50, 50, 50).unwrap());
    }

    #[test]
    fn first_rectangle_with_odd_dimensions_hugs_the_origin() {
        let mut layouter = layouter();
        let placed = layouter.put_next_rectangle(Size::new(99, 101)).unwrap();
        // integer centering pushes the extra pixel to the max side
        assert_eq!(placed, Rect::try_new(-49, -50, 50, 51).unwrap());
    }

    #[test_case(0, 100; "zero width")]
    #[test_case(100, 0; "zero height")]
    #[test_case(-100, 100; "negative width")]
    #[test_case(100, -100; "negative height")]
    fn invalid_size_is_rejected_without_mutation(width: i32, height: i32) {
        let mut layouter = layouter();
        layouter.put_next_rectangle(Size::new(50, 50)).unwrap();

        let result = layouter.put_next_rectangle(Size::new(width, height));

        assert!(result.is_err());
        assert_eq!(layouter.rects().len(), 1);
    }

    #[test]
    fn reading_rects_twice_yields_identical_collections() {
        let mut layouter = layouter();
        put_all(&mut layouter, &[(120, 40), (80, 80), (40, 120)]);

        let first: Vec<Rect> = layouter.rects().to_vec();
        let second: Vec<Rect> = layouter.rects().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn placed_rectangles_keep_their_requested_size() {
        let mut layouter = layouter();
        let sizes = [(123, 45), (7, 300), (64, 64)];
        put_all(&mut layouter, &sizes);

        for (rect, &(w, h)) in layouter.rects().iter().zip(sizes.iter()) {
            assert_eq!((rect.width(), rect.height()), (w, h));
        }
    }

    #[test]
    fn bounding_extent_is_none_for_an_empty_cloud() {
        assert!(layouter().bounding_extent().is_none());
    }

    #[test]
    fn bounding_extent_covers_every_placed_rectangle() {
        let mut layouter = layouter();
        put_all(&mut layouter, &[(100, 100); 8]);

        let extent = layouter.bounding_extent().unwrap();
        for rect in layouter.rects() {
            assert!(rect.x_min >= extent.x_min && rect.x_max <= extent.x_max);
            assert!(rect.y_min >= extent.y_min && rect.y_max <= extent.y_max);
        }
    }

    #[test_case(0.0, 1.0; "zero angle step")]
    #[test_case(-0.1, 1.0; "negative angle step")]
    #[test_case(0.01, 0.0; "zero compaction step")]
    #[test_case(0.01, -1.0; "negative compaction step")]
    fn invalid_config_fails_at_construction(angle_step: f64, compaction_step: f64) {
        let config = LayouterConfig {
            angle_step,
            compaction_step,
        };
        let result = CircularCloudLayouter::with_config(ArchimedeanSpiral::default(), config);
        assert!(result.is_err());
    }

    #[test]
    fn compaction_pulls_the_second_rectangle_flush_against_the_first() {
        let mut layouter = layouter();
        let first = layouter.put_next_rectangle(Size::new(100, 100)).unwrap();
        let second = layouter.put_next_rectangle(Size::new(100, 100)).unwrap();

        // flush means the open-interval predicate reports no collision but
        // the rectangles share an edge coordinate on some axis
        assert!(!first.collides_with(&second));
        let touching_x = first.x_min == second.x_max || first.x_max == second.x_min;
        let touching_y = first.y_min == second.y_max || first.y_max == second.y_min;
        assert!(
            touching_x || touching_y,
            "expected {second:?} to rest flush against {first:?}"
        );
    }
}
