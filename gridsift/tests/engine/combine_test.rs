use crate::helpers::{item_config, item_records, skus};
use gridsift::{apply_filters, FilterConfig, FilterMode, FilterStore, FilterValue, Record};

#[cfg(test)]
mod combinator_tests {
    use super::*;

    #[test]
    fn it_should_return_the_source_unchanged_when_no_filter_is_active() {
        // Given
        let store = FilterStore::new(item_config());
        let records = item_records();

        // When
        let and_view = apply_filters(&store, &records, FilterMode::And);
        let or_view = apply_filters(&store, &records, FilterMode::Or);

        // Then
        assert_eq!(and_view, records);
        assert_eq!(or_view, records);
    }

    #[test]
    fn it_should_treat_cleared_values_as_inactive() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("sku", FilterValue::text(""));
        store.set("price", FilterValue::number_range(None, None));
        let records = item_records();

        // When
        let view = apply_filters(&store, &records, FilterMode::And);

        // Then
        assert_eq!(view, records);
    }

    #[test]
    fn it_should_require_every_active_filter_in_and_mode() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("name", FilterValue::text("a"));
        store.set("price", FilterValue::number_range(Some(20.0), None));
        let records = item_records();

        // When
        let view = apply_filters(&store, &records, FilterMode::And);

        // Then: "a" matches Apple and Banana, price >= 20 keeps Banana only
        assert_eq!(skus(&view), vec!["B2"]);
    }

    #[test]
    fn it_should_accept_any_active_filter_in_or_mode() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("sku", FilterValue::text("A1"));
        store.set("status", FilterValue::select("Discontinued"));
        let records = item_records();

        // When
        let view = apply_filters(&store, &records, FilterMode::Or);

        // Then
        assert_eq!(skus(&view), vec!["A1", "C3"]);
    }

    #[test]
    fn it_should_keep_the_and_result_a_subset_of_the_or_result() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("name", FilterValue::text("an"));
        store.set("price", FilterValue::number_range(Some(20.0), Some(50.0)));
        let records = item_records();

        // When
        let and_view = apply_filters(&store, &records, FilterMode::And);
        let or_view = apply_filters(&store, &records, FilterMode::Or);

        // Then
        assert!(and_view.iter().all(|record| or_view.contains(record)));
        assert!(and_view.len() <= or_view.len());
    }

    #[test]
    fn it_should_preserve_source_order_in_both_modes() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("price", FilterValue::number_range(Some(0.0), Some(100.0)));
        let records = item_records();

        // When
        let and_view = apply_filters(&store, &records, FilterMode::And);
        let or_view = apply_filters(&store, &records, FilterMode::Or);

        // Then
        assert_eq!(skus(&and_view), vec!["A1", "B2", "C3"]);
        assert_eq!(skus(&or_view), vec!["A1", "B2", "C3"]);
    }

    #[test]
    fn it_should_be_idempotent_over_its_own_output() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("name", FilterValue::text("apple | cherry"));
        let records = item_records();

        // When
        let once = apply_filters(&store, &records, FilterMode::And);
        let twice = apply_filters(&store, &once, FilterMode::And);

        // Then
        assert_eq!(once, twice);
    }

    #[test]
    fn it_should_exclude_records_missing_the_filtered_field() {
        // Given
        let mut store = FilterStore::new(item_config());
        store.set("price", FilterValue::number_range(Some(0.0), None));
        let records = vec![
            Record::new().with("sku", "A1").with("price", 10.0),
            Record::new().with("sku", "NOPRICE"),
        ];

        // When
        let view = apply_filters(&store, &records, FilterMode::And);

        // Then
        assert_eq!(skus(&view), vec!["A1"]);
    }

    // The end-to-end scenario: text OR-terms within a single field, then a
    // numeric range narrowing it under AND.
    #[test]
    fn it_should_filter_the_inventory_scenario_end_to_end() {
        // Given
        let config = FilterConfig::new().text("sku").number("price").date("date");
        let records = vec![
            Record::new()
                .with("sku", "A1")
                .with("price", 10.0)
                .with("date", "2024-01-05"),
            Record::new()
                .with("sku", "B2")
                .with("price", 25.0)
                .with("date", "2024-02-10"),
        ];
        let mut store = FilterStore::new(config);

        // When: a single text filter with OR terms
        store.set("sku", FilterValue::text("A1 | B2"));
        let both = apply_filters(&store, &records, FilterMode::And);

        // Then
        assert_eq!(skus(&both), vec!["A1", "B2"]);

        // When: a price range joins under AND
        store.set("price", FilterValue::number_range(Some(20.0), Some(30.0)));
        let narrowed = apply_filters(&store, &records, FilterMode::And);

        // Then
        assert_eq!(skus(&narrowed), vec!["B2"]);
    }
}
