//! Unit and behaviour tests for the `sift` facade.

use sift_core::test_support::TestElement;

mod builder_tests;
mod reexport_tests;


/// A small page used across the selector tests.
///
/// ```text
/// body
/// ├── div#intro.note
/// │   └── p.lead
/// ├── div
/// │   ├── p
/// │   └── a[href=/docs]
/// └── p.note
/// ```
fn page() -> TestElement {
    TestElement::new("body")
        .with_child(
            TestElement::new("div")
                .with_id("intro")
                .with_class("note")
                .with_child(TestElement::new("p").with_class("lead")),
        )
        .with_child(
            TestElement::new("div")
                .with_child(TestElement::new("p"))
                .with_child(TestElement::new("a").with_attribute("href", "/docs")),
        )
        .with_child(TestElement::new("p").with_class("note"))
}

/// Renders matched elements as `tag#id.class` strings for assertions.
fn describe(nodes: &[&TestElement]) -> Vec<String> {
    use sift_core::Node;

    nodes
        .iter()
        .map(|node| {
            let mut label = node.tag_name().to_owned();
            if let Some(id) = node.id() {
                label.push('#');
                label.push_str(id);
            }
            for class in ["note", "lead"] {
                if node.has_class(class) {
                    label.push('.');
                    label.push_str(class);
                }
            }
            label
        })
        .collect()
}
