use chrono::NaiveDate;
use gridsift::{matches, split_terms, FieldValue, FilterValue};

#[cfg(test)]
mod text_predicate_tests {
    use super::*;

    #[test]
    fn it_should_match_any_pipe_separated_term() {
        // Given
        let apple = FieldValue::from("Apple");
        let banana = FieldValue::from("Banana");
        let cherry = FieldValue::from("Cherry");
        let filter = FilterValue::text("app | cherry");

        // When / Then
        assert!(matches(Some(&apple), &filter));
        assert!(!matches(Some(&banana), &filter));
        assert!(matches(Some(&cherry), &filter));
    }

    #[test]
    fn it_should_trim_terms_and_drop_empty_segments() {
        // Given
        let terms = split_terms("  ABC | | XYZ  ||");

        // Then
        assert_eq!(terms, vec!["ABC", "XYZ"]);
    }

    #[test]
    fn it_should_match_nothing_for_whitespace_only_input() {
        // Given
        let cell = FieldValue::from("Apple");
        let filter = FilterValue::text("   ");

        // When / Then
        assert!(filter.is_active());
        assert!(!matches(Some(&cell), &filter));
    }

    #[test]
    fn it_should_search_case_insensitively_as_substring() {
        // Given
        let cell = FieldValue::from("WideBody Chassis");

        // When / Then
        assert!(matches(Some(&cell), &FilterValue::text("wideBODY")));
        assert!(matches(Some(&cell), &FilterValue::text("chas")));
        assert!(!matches(Some(&cell), &FilterValue::text("chassisx")));
    }

    #[test]
    fn it_should_stringify_non_text_cells_before_searching() {
        // Given
        let price = FieldValue::Number(1250.0);

        // When / Then
        assert!(matches(Some(&price), &FilterValue::text("125")));
        assert!(!matches(Some(&price), &FilterValue::text("126")));
    }

    #[test]
    fn it_should_never_match_missing_or_null_cells() {
        // Given
        let filter = FilterValue::text("anything");

        // When / Then
        assert!(!matches(None, &filter));
        assert!(!matches(Some(&FieldValue::Null), &filter));
    }
}

#[cfg(test)]
mod number_predicate_tests {
    use super::*;

    #[test]
    fn it_should_include_both_range_boundaries() {
        // Given
        let cell = FieldValue::Number(10.0);

        // When / Then
        assert!(matches(
            Some(&cell),
            &FilterValue::number_range(Some(10.0), Some(10.0))
        ));
        assert!(!matches(
            Some(&cell),
            &FilterValue::number_range(None, Some(9.0))
        ));
        assert!(!matches(
            Some(&cell),
            &FilterValue::number_range(Some(11.0), None)
        ));
    }

    #[test]
    fn it_should_apply_single_bounds_one_sidedly() {
        // Given
        let cell = FieldValue::Number(25.0);

        // When / Then
        assert!(matches(
            Some(&cell),
            &FilterValue::number_range(Some(20.0), None)
        ));
        assert!(matches(
            Some(&cell),
            &FilterValue::number_range(None, Some(30.0))
        ));
    }

    #[test]
    fn it_should_coerce_numeric_text_cells() {
        // Given
        let cell = FieldValue::from(" 42.5 ");

        // When / Then
        assert!(matches(
            Some(&cell),
            &FilterValue::number_range(Some(42.0), Some(43.0))
        ));
    }

    #[test]
    fn it_should_exclude_cells_without_a_numeric_reading() {
        // Given
        let filter = FilterValue::number_range(Some(0.0), Some(100.0));

        // When / Then
        assert!(!matches(Some(&FieldValue::from("not a number")), &filter));
        assert!(!matches(Some(&FieldValue::Null), &filter));
        assert!(!matches(Some(&FieldValue::Bool(true)), &filter));
        assert!(!matches(None, &filter));
    }

    #[test]
    fn it_should_not_match_when_both_bounds_are_unset() {
        // Given
        let cell = FieldValue::Number(5.0);

        // When / Then
        assert!(!matches(Some(&cell), &FilterValue::number_range(None, None)));
    }
}

#[cfg(test)]
mod date_predicate_tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn it_should_include_the_whole_bound_day_for_single_bounds() {
        // Given
        let cell = FieldValue::from("2024-02-10");

        // When / Then
        assert!(matches(
            Some(&cell),
            &FilterValue::date_range(Some(day(2024, 2, 10)), None)
        ));
        assert!(matches(
            Some(&cell),
            &FilterValue::date_range(None, Some(day(2024, 2, 10)))
        ));
    }

    // Pins the asymmetric both-bounds behavior: a record at the start
    // bound's midnight is excluded even though a lone start bound would
    // accept the same day.
    #[test]
    fn it_should_exclude_start_midnight_when_both_date_bounds_set() {
        // Given
        let at_start_midnight = FieldValue::from("2024-02-10");
        let later_that_day = FieldValue::from("2024-02-10T09:30:00");
        let filter = FilterValue::date_range(Some(day(2024, 2, 10)), Some(day(2024, 2, 20)));

        // When / Then
        assert!(!matches(Some(&at_start_midnight), &filter));
        assert!(matches(Some(&later_that_day), &filter));
    }

    #[test]
    fn it_should_include_the_end_day_up_to_its_last_instant() {
        // Given
        let end_day_evening = FieldValue::from("2024-02-20T23:59:59");
        let next_day = FieldValue::from("2024-02-21");
        let filter = FilterValue::date_range(Some(day(2024, 2, 1)), Some(day(2024, 2, 20)));

        // When / Then
        assert!(matches(Some(&end_day_evening), &filter));
        assert!(!matches(Some(&next_day), &filter));
    }

    #[test]
    fn it_should_exclude_unparsable_date_cells() {
        // Given
        let filter = FilterValue::date_range(Some(day(2024, 1, 1)), None);

        // When / Then
        assert!(!matches(Some(&FieldValue::from("not a date")), &filter));
        assert!(!matches(Some(&FieldValue::from("")), &filter));
        assert!(!matches(Some(&FieldValue::Null), &filter));
        assert!(!matches(None, &filter));
    }

    #[test]
    fn it_should_parse_the_supported_date_formats() {
        // Given
        let filter = FilterValue::date_range(Some(day(2024, 1, 1)), Some(day(2024, 12, 31)));

        // When / Then
        assert!(matches(Some(&FieldValue::from("2024-06-15")), &filter));
        assert!(matches(Some(&FieldValue::from("2024-06-15T08:00:00")), &filter));
        assert!(matches(
            Some(&FieldValue::from("2024-06-15T08:00:00+00:00")),
            &filter
        ));
        assert!(matches(Some(&FieldValue::from("06/15/2024")), &filter));
    }
}

#[cfg(test)]
mod select_predicate_tests {
    use super::*;

    #[test]
    fn it_should_require_exact_case_sensitive_equality() {
        // Given
        let active = FieldValue::from("Active");
        let lowercase = FieldValue::from("active");
        let filter = FilterValue::select("Active");

        // When / Then
        assert!(matches(Some(&active), &filter));
        assert!(!matches(Some(&lowercase), &filter));
    }

    #[test]
    fn it_should_not_match_on_substrings() {
        // Given
        let cell = FieldValue::from("Active items");

        // When / Then
        assert!(!matches(Some(&cell), &FilterValue::select("Active")));
    }

    #[test]
    fn it_should_not_match_when_nothing_is_selected() {
        // Given
        let cell = FieldValue::from("Active");

        // When / Then
        assert!(!matches(Some(&cell), &FilterValue::Select(None)));
    }
}
