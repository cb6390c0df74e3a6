//! Property-based tests for input handling and solver selection.

use proptest::prelude::*;

use subsum_core::options::SolverOptions;
use subsum_core::registry::DefaultFactory;
use subsum_lib::input::parse_values;
use subsum_orchestration::orchestrator::{analyze_comparison_results, execute_solvers};
use subsum_orchestration::solver_selection::get_solvers_to_run;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Values printed comma-separated parse back unchanged.
    #[test]
    fn comma_separated_roundtrip(values in prop::collection::vec(any::<u64>(), 0..50)) {
        let text = values.iter().map(u64::to_string).collect::<Vec<_>>().join(",");
        prop_assert_eq!(parse_values([text.as_str()]).unwrap(), values);
    }

    /// Values printed one per line parse back unchanged.
    #[test]
    fn line_separated_roundtrip(values in prop::collection::vec(any::<u64>(), 0..50)) {
        let text = values.iter().map(u64::to_string).collect::<Vec<_>>().join("\n");
        prop_assert_eq!(parse_values(text.lines()).unwrap(), values);
    }

    /// Every registered solver agrees when run together.
    #[test]
    fn all_solvers_agree(values in prop::collection::vec(0u64..80, 0..20), bound in -2i64..500) {
        let factory = DefaultFactory::new();
        let solvers = get_solvers_to_run("all", &factory).unwrap();
        let results = execute_solvers(&solvers, &values, bound, &SolverOptions::default());
        prop_assert_eq!(results.len(), 2);
        prop_assert!(analyze_comparison_results(&results).is_ok());
    }
}
