//! Tests that the facade re-exports the core types.

use crate::predicates::Tag;
use crate::{And, BoxedEvaluator, Evaluator, FirstClausePolicy, MatchConfig, Or};
use sift_core::test_support::TestElement;

#[test]
fn core_types_are_reachable_through_the_facade() {
    let config = MatchConfig::default();
    assert_eq!(config.first_clause_policy(), FirstClausePolicy::Conjoin);

    let tag: BoxedEvaluator<TestElement> = Box::new(Tag::new("p"));
    let and = And::from_evaluators(vec![tag]);
    let mut or = Or::new();
    or.add(Box::new(and) as BoxedEvaluator<TestElement>);

    let node = TestElement::new("p");
    assert!(or.matches(&node, &node));
}
