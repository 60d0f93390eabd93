//! Tests for [`SelectorBuilder`].

use insta::assert_snapshot;
use rstest::rstest;
use sift_core::test_support::TestElement;

use crate::predicates::{Attribute, Class, Id, Tag};
use crate::{FirstClausePolicy, MatchConfig, SelectorBuilder, SelectorError};

fn flatten_config() -> MatchConfig {
    MatchConfig::default().with_first_clause_policy(FirstClausePolicy::Flatten)
}

#[test]
fn single_clause_builds_conjunction() {
    let selector = SelectorBuilder::new()
        .predicate(Tag::new("div"))
        .predicate(Class::new("foo"))
        .build()
        .expect("build");
    let root = TestElement::new("body");

    assert_snapshot!(selector.to_string(), @"div .foo");
    assert!(selector.matches(&root, &TestElement::new("div").with_class("foo")));
    assert!(!selector.matches(&root, &TestElement::new("div")));
}

#[test]
fn empty_builder_matches_everything() {
    let selector = SelectorBuilder::<TestElement>::new()
        .build()
        .expect("build");
    let node = TestElement::new("anything");

    assert_eq!(selector.to_string(), "");
    assert!(selector.matches(&node, &node));
}

#[test]
fn selector_list_conjoins_each_clause() {
    let selector = SelectorBuilder::new()
        .predicate(Tag::new("a"))
        .predicate(Class::new("x"))
        .or()
        .predicate(Tag::new("b"))
        .build()
        .expect("build");
    let root = TestElement::new("body");

    assert_snapshot!(selector.to_string(), @":or[a .x, b]");
    assert!(selector.matches(&root, &TestElement::new("a").with_class("x")));
    assert!(selector.matches(&root, &TestElement::new("b")));
    assert!(!selector.matches(&root, &TestElement::new("a")));
    assert!(!selector.matches(&root, &TestElement::new("c").with_class("x")));
}

#[test]
fn flatten_policy_splits_first_clause() {
    let selector = SelectorBuilder::with_config(flatten_config())
        .predicate(Tag::new("a"))
        .predicate(Class::new("x"))
        .or()
        .predicate(Tag::new("b"))
        .build()
        .expect("build");
    let root = TestElement::new("body");

    assert_snapshot!(selector.to_string(), @":or[a, .x, b]");
    assert!(selector.matches(&root, &TestElement::new("a")));
    assert!(selector.matches(&root, &TestElement::new("c").with_class("x")));
}

#[rstest]
#[case::conjoin(FirstClausePolicy::Conjoin)]
#[case::flatten(FirstClausePolicy::Flatten)]
fn later_clauses_stay_conjoined_under_either_policy(#[case] policy: FirstClausePolicy) {
    let config = MatchConfig::default().with_first_clause_policy(policy);
    let selector = SelectorBuilder::with_config(config)
        .predicate(Tag::new("p"))
        .or()
        .predicate(Tag::new("a"))
        .predicate(Attribute::new("href"))
        .build()
        .expect("build");
    let root = TestElement::new("body");

    assert!(selector.matches(&root, &TestElement::new("a").with_attribute("href", "/")));
    assert!(!selector.matches(&root, &TestElement::new("a")));
}

#[test]
fn negate_last_wraps_only_rightmost_predicate() {
    let selector = SelectorBuilder::new()
        .predicate(Tag::new("a"))
        .predicate(Attribute::new("href"))
        .negate_last()
        .expect("negate")
        .build()
        .expect("build");
    let root = TestElement::new("body");

    assert_snapshot!(selector.to_string(), @"a :not([href])");
    assert!(selector.matches(&root, &TestElement::new("a")));
    assert!(!selector.matches(&root, &TestElement::new("a").with_attribute("href", "/")));
    assert!(!selector.matches(&root, &TestElement::new("span")));
}

#[test]
fn negate_last_on_empty_clause_fails() {
    let err = SelectorBuilder::<TestElement>::new()
        .negate_last()
        .expect_err("nothing to negate");
    assert_eq!(err, SelectorError::NothingToNegate);
}

#[test]
fn negate_last_after_or_sees_only_new_clause() {
    let err = SelectorBuilder::<TestElement>::new()
        .predicate(Tag::new("a"))
        .or()
        .negate_last()
        .expect_err("new clause is empty");
    assert_eq!(err, SelectorError::NothingToNegate);
}

#[rstest]
#[case::trailing(1)]
#[case::leading(0)]
fn empty_clause_in_list_is_rejected(#[case] empty_index: usize) {
    let builder = SelectorBuilder::<TestElement>::new();
    let builder = if empty_index == 0 {
        builder.or().predicate(Id::new("main"))
    } else {
        builder.predicate(Id::new("main")).or()
    };

    let err = builder.build().expect_err("empty clause");
    assert_eq!(err, SelectorError::EmptyClause { index: empty_index });
    assert_eq!(
        err.to_string(),
        format!("selector clause {empty_index} has no predicates")
    );
}

#[test]
fn builder_keeps_config_on_selector() {
    let config = flatten_config().with_max_visited_nodes(7);
    let selector = SelectorBuilder::<TestElement>::with_config(config.clone())
        .predicate(Tag::new("p"))
        .build()
        .expect("build");

    assert_eq!(selector.config(), &config);
}
