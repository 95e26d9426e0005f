#[cfg(test)]
mod iterator_tests {
    use itertools::Itertools;

    use crate::{tests::utils::TEST_IMAGE_SIZE, utils::iterator::GridIterator};

    fn missing_pixel(data: &[bool]) -> bool {
        let missed_pixel = data.iter().position(|visited| !visited);
        if let Some(pixel) = missed_pixel {
            let x = pixel % TEST_IMAGE_SIZE;
            let y = pixel / TEST_IMAGE_SIZE;
            println!("missed pixel {}: {} {}", pixel, x, y);
        }
        missed_pixel.is_some()
    }

    #[test]
    fn test_grid_iterator_visits_indices() {
        let mut visit = vec![false; TEST_IMAGE_SIZE * TEST_IMAGE_SIZE];
        for (x, y, idx) in GridIterator::new(TEST_IMAGE_SIZE, TEST_IMAGE_SIZE) {
            assert_eq!(
                TEST_IMAGE_SIZE * y + x,
                idx,
                "1D pixel index missmatches 2D coordinates"
            );
            assert!(!visit[idx], "Pixel visited twice");
            visit[idx] = true;
        }
        assert!(!missing_pixel(&visit), "Pixel not visited");
    }

    #[test]
    fn test_grid_iterator_is_row_major() {
        let order = GridIterator::new(3, 2).map(|(x, y, _)| (x, y)).collect_vec();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_grid_iterator_exact_size() {
        let mut iter = GridIterator::new(4, 3);
        assert_eq!(iter.len(), 12);
        iter.nth(4);
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.count(), 7);
    }

    #[test]
    fn test_grid_iterator_empty_grids() {
        assert_eq!(GridIterator::new(0, 5).count(), 0);
        assert_eq!(GridIterator::new(5, 0).count(), 0);
        assert_eq!(GridIterator::new(0, 0).len(), 0);
    }

    #[test]
    fn test_grid_iterator_single_pixel() {
        assert_eq!(GridIterator::new(1, 1).collect_vec(), vec![(0, 0, 0)]);
    }
}
