//! End-to-end integration tests
//!
//! These tests validate the complete load pipeline using predefined store
//! snapshots. Each fixture test:
//! 1. Reads store.json from a fixture directory
//! 2. Loads the dashboard with the default configuration
//! 3. Writes the text report to a temporary file
//! 4. Compares actual output with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path with both buckets
//! - Single-bucket and empty stores
//! - Out-of-order and cross-month dates
//! - Invalid records under the default skip policy
//! - Inline (non-stringified) values with numeric amounts and timestamps
//! - Amounts overflowing the totals and fields of the wrong JSON type
//!
//! Each test is run twice: once with the synchronous strategy and once with
//! the async strategy.

#[cfg(test)]
mod tests {
    use finances_dashboard::cli::StrategyType;
    use finances_dashboard::strategy::{create_strategy, DashboardConfig};
    use finances_dashboard::{AmountPolicy, DashboardError, OutputFormat, TRANSACTIONS_KEY};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture by loading store.json and comparing with expected.txt
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "happy_path")
    /// * `strategy_type` - Loading strategy to use (Sync or Async)
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or output doesn't match expected
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        // Construct paths to fixture files
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/store.json", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        // Verify fixture files exist
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        // Create processing strategy with the default configuration
        let strategy = create_strategy(strategy_type, DashboardConfig::default());

        // Create temporary output file
        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        // Load the dashboard and write the text report
        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to load dashboard: {}", e));

        // Flush output
        temp_output.flush().expect("Failed to flush temp file");

        // Read actual output from temp file
        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        // Read expected output
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// Run the pipeline on a fixture with a custom configuration
    fn run_with_config(
        fixture_name: &str,
        strategy_type: StrategyType,
        config: DashboardConfig,
    ) -> Result<String, DashboardError> {
        let input_path = format!("tests/fixtures/{}/store.json", fixture_name);
        let mut output = Vec::new();
        create_strategy(strategy_type, config).process(Path::new(&input_path), &mut output)?;
        Ok(String::from_utf8(output).expect("report is not UTF-8"))
    }

    /// End-to-end test for all fixtures with both strategies
    #[rstest]
    #[case("happy_path")]
    #[case("outflow_only")]
    #[case("empty_store")]
    #[case("missing_key")]
    #[case("unordered_dates")]
    #[case("invalid_records")]
    #[case("inline_records")]
    #[case("overflow_and_field_types")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    #[rstest]
    fn test_json_report_lists_rejected_records(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = DashboardConfig::new(AmountPolicy::Skip, OutputFormat::Json, TRANSACTIONS_KEY);
        let output = run_with_config("invalid_records", strategy, config).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rejected: Vec<&str> = json["rejected"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_str().unwrap())
            .collect();

        assert_eq!(rejected, vec!["2", "3", "4", "5"]);
        assert_eq!(json["transactions"].as_array().unwrap().len(), 1);
        assert_eq!(json["totals"]["total"], "250");
    }

    #[rstest]
    fn test_zero_policy_keeps_unparseable_amounts(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = DashboardConfig::new(AmountPolicy::Zero, OutputFormat::Csv, TRANSACTIONS_KEY);
        let output = run_with_config("invalid_records", strategy, config).unwrap();

        // ids 2 and 5 have bad amounts; 3 (type) and 4 (date) are still rejected
        let ids: Vec<&str> = output
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
    }

    #[rstest]
    fn test_fail_policy_aborts(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = DashboardConfig::new(AmountPolicy::Fail, OutputFormat::Text, TRANSACTIONS_KEY);
        let result = run_with_config("invalid_records", strategy, config);

        assert_eq!(result, Err(DashboardError::invalid_amount("abc", "2")));
    }

    #[rstest]
    fn test_overflow_and_field_types_are_rejected_per_record(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = DashboardConfig::new(AmountPolicy::Skip, OutputFormat::Json, TRANSACTIONS_KEY);
        let output = run_with_config("overflow_and_field_types", strategy, config).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rejected: Vec<&str> = json["rejected"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_str().unwrap())
            .collect();

        assert_eq!(rejected, vec!["2", "4"]);
        assert_eq!(json["transactions"][1]["id"], "7");
    }

    #[rstest]
    fn test_fail_policy_aborts_on_overflow(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = DashboardConfig::new(AmountPolicy::Fail, OutputFormat::Text, TRANSACTIONS_KEY);
        let result = run_with_config("overflow_and_field_types", strategy, config);

        assert!(matches!(result, Err(DashboardError::AmountOverflow { .. })));
    }

    #[rstest]
    fn test_missing_store_file(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let result = run_with_config("does_not_exist", strategy, DashboardConfig::default());
        assert!(matches!(result, Err(DashboardError::FileNotFound { .. })));
    }

    #[rstest]
    fn test_custom_key_reads_other_value(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = DashboardConfig::new(AmountPolicy::Skip, OutputFormat::Text, "@gofinances:settings");
        let result = run_with_config("missing_key", strategy, config);

        // the settings value is an object, not a transaction list
        assert!(matches!(result, Err(DashboardError::MalformedStore { .. })));
    }
}
