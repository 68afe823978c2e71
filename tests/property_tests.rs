use proptest::prelude::*;
use weave_stats::statistics::{
    Freeze, MethodAccumulator, PropertyAccumulator, WeavingOutcome, WeavingRecorder,
};

fn outcome_strategy() -> impl Strategy<Value = WeavingOutcome> {
    prop_oneof![
        Just(WeavingOutcome::Succeeded),
        "[a-z ]{1,20}".prop_map(|cause| WeavingOutcome::failed(cause)),
    ]
}

proptest! {
    #[test]
    fn prop_counts_add_up_and_order_is_kept(outcomes in prop::collection::vec(outcome_strategy(), 0..64)) {
        let mut method = MethodAccumulator::new("Run");
        for (i, outcome) in outcomes.iter().enumerate() {
            method.record_attempt(&format!("Run#{i}"), &["Log"], outcome.clone());
        }

        let stats = method.freeze();

        prop_assert_eq!(stats.success_count() + stats.failure_count(), outcomes.len());
        prop_assert_eq!(stats.total_attempts(), outcomes.len());
        for (i, record) in stats.records().iter().enumerate() {
            prop_assert_eq!(record.target(), format!("Run#{i}"));
            prop_assert_eq!(record.outcome(), &outcomes[i]);
        }
    }

    #[test]
    fn prop_setter_only_property(n in 0usize..32) {
        let mut property = PropertyAccumulator::new("Value");
        for _ in 0..n {
            property.setter_container().record_attempt("Value.set", &["Log"], WeavingOutcome::Succeeded);
        }

        let stats = property.freeze();

        prop_assert_eq!(stats.getter().total_attempts(), 0);
        prop_assert_eq!(stats.setter().total_attempts(), n);
    }
}
