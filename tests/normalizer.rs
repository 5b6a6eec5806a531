use scopegraph::core::{collapse_arguments, CallGraph, CallNormalizer, NormalizedCall};

#[test]
fn arguments_and_nested_calls_collapse_to_an_empty_pair() {
    assert_eq!(
        collapse_arguments("foo(a, b, bar(c))"),
        NormalizedCall::Collapsed("foo()".to_string())
    );
}

#[test]
fn already_empty_call_is_left_alone() {
    assert_eq!(collapse_arguments("foo()"), NormalizedCall::Unchanged);
}

#[test]
fn text_after_the_last_close_parenthesis_survives() {
    assert_eq!(
        collapse_arguments("load(path).head"),
        NormalizedCall::Collapsed("load().head".to_string())
    );
}

#[test]
fn unbalanced_capture_is_reported_not_mutated() {
    assert_eq!(collapse_arguments("foo(a"), NormalizedCall::Unbalanced);
}

#[test]
fn normalizer_pass_rewrites_the_graph_in_place() {
    let mut graph = CallGraph::new();
    graph.record("data.f", "helper(x, y)".to_string());
    graph.record("data.f", "done()".to_string());

    let rewritten = CallNormalizer::new().normalize(&mut graph);

    assert_eq!(rewritten, 1);
    assert_eq!(
        graph.calls_for("data.f").unwrap(),
        &["helper()".to_string(), "done()".to_string()]
    );
}

#[test]
fn normalizing_twice_changes_nothing_further() {
    let mut graph = CallGraph::new();
    graph.record("data.f", "helper(x, y)".to_string());

    let normalizer = CallNormalizer::new();
    normalizer.normalize(&mut graph);
    let second_pass = normalizer.normalize(&mut graph);

    assert_eq!(second_pass, 0);
    assert_eq!(graph.calls_for("data.f").unwrap(), &["helper()".to_string()]);
}

#[test]
fn unbalanced_entry_keeps_its_pre_normalized_form() {
    let mut graph = CallGraph::new();
    graph.record("data.f", "foo(a".to_string());

    CallNormalizer::new().normalize(&mut graph);

    assert_eq!(graph.calls_for("data.f").unwrap(), &["foo(a".to_string()]);
}
