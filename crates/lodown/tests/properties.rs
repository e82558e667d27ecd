//! Property tests for traversal order and the filter/reject split.

use lodown::{each, filter, index_of, partition, reject, unique, JsValue};
use proptest::prelude::*;

fn numbers(values: &[i64]) -> JsValue {
    JsValue::from(values.iter().map(|&n| JsValue::from(n)).collect::<Vec<_>>())
}

fn divisible(value: &JsValue, by: i64) -> bool {
    value.as_f64().is_some_and(|n| (n as i64) % by == 0)
}

proptest! {
    #[test]
    fn each_visits_every_index_once(values in prop::collection::vec(-50i64..50, 0..40)) {
        let arr = numbers(&values);
        let mut indices = Vec::new();
        each(&arr, |_, key, col| {
            assert!(std::ptr::eq(col, &arr));
            indices.push(key.as_index().unwrap());
        });
        prop_assert_eq!(indices, (0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn filter_and_reject_split_the_input(
        values in prop::collection::vec(-50i64..50, 0..40),
        by in 1i64..5,
    ) {
        let arr = numbers(&values);
        let kept = filter(&arr, |n, _, _| divisible(n, by));
        let dropped = reject(&arr, |n, _, _| divisible(n, by));
        prop_assert_eq!(kept.len() + dropped.len(), values.len());

        // Walking the input in order must consume both halves in order.
        let (mut k, mut d) = (0, 0);
        for &n in &values {
            let value = JsValue::from(n);
            if divisible(&value, by) {
                prop_assert_eq!(&kept[k], &value);
                k += 1;
            } else {
                prop_assert_eq!(&dropped[d], &value);
                d += 1;
            }
        }
    }

    #[test]
    fn partition_matches_filter_and_reject(
        values in prop::collection::vec(-50i64..50, 0..40),
        by in 1i64..5,
    ) {
        let arr = numbers(&values);
        let (matching, rest) = partition(&arr, |n, _, _| divisible(n, by));
        prop_assert_eq!(matching, filter(&arr, |n, _, _| divisible(n, by)));
        prop_assert_eq!(rest, reject(&arr, |n, _, _| divisible(n, by)));
    }

    #[test]
    fn unique_keeps_first_occurrences(values in prop::collection::vec(0i64..10, 0..40)) {
        let arr = numbers(&values);
        let distinct = JsValue::from(unique(&arr));
        let items = distinct.as_array().unwrap();

        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(index_of(&distinct, item), i as i64);
        }
        for &n in &values {
            prop_assert!(index_of(&distinct, &JsValue::from(n)) >= 0);
        }
        // First occurrences appear in input order.
        let positions: Vec<i64> = items.iter().map(|item| index_of(&arr, item)).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
