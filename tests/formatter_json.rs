use scopegraph::core::CallGraph;
use scopegraph::formatters::JsonGraphFormatter;

#[test]
fn output_is_pretty_printed_with_four_space_indent() {
    let mut graph = CallGraph::new();
    graph.record("data.DF.__init__", "DF.save_to_html()".to_string());

    let out = JsonGraphFormatter::new().format_graph(&graph).unwrap();

    let expected = "{\n    \"data.DF.__init__\": [\n        \"DF.save_to_html()\"\n    ]\n}";
    assert_eq!(out, expected);
}

#[test]
fn keys_serialize_in_insertion_order() {
    let mut graph = CallGraph::new();
    graph.record("data.z_last_in_alpha", "a()".to_string());
    graph.record("data.a_first_in_alpha", "b()".to_string());

    let out = JsonGraphFormatter::new().format_graph(&graph).unwrap();

    let z_pos = out.find("z_last_in_alpha").unwrap();
    let a_pos = out.find("a_first_in_alpha").unwrap();
    assert!(z_pos < a_pos);
}

#[test]
fn empty_graph_serializes_to_an_empty_object() {
    let graph = CallGraph::new();
    let out = JsonGraphFormatter::new().format_graph(&graph).unwrap();
    assert_eq!(out, "{}");
}
