//! Graph extraction over realistic record shapes: paths, bare graph
//! objects, and rows with dangling relationship endpoints.

#[cfg(test)]
mod graph_extractor_tests {
    use std::collections::HashMap;

    use boltgraph::bolt::graph_objects::{Node, Path, PathSegment, Relationship};
    use boltgraph::bolt::values::{BoltValue, Record};
    use boltgraph::transform::graph_extractor::{extract_graph, GraphBuilder};

    fn person_node() -> Node {
        let mut props = HashMap::new();
        props.insert("prop1".to_string(), BoltValue::from("prop1"));
        Node::new(1, vec!["Person".to_string()], props)
    }

    fn movie_node() -> Node {
        let mut props = HashMap::new();
        props.insert("prop2".to_string(), BoltValue::from("prop2"));
        Node::new(2, vec!["Movie".to_string()], props)
    }

    fn acted_in(start: i64, end: i64) -> Relationship {
        Relationship::new(3, start, end, "ACTED_IN".to_string(), HashMap::new())
    }

    /// A record with a single path column maps to two nodes and one
    /// relationship.
    #[test]
    fn test_extracts_nodes_and_relationships_from_path() {
        let start = person_node();
        let end = movie_node();
        let rel = acted_in(start.identity, end.identity);
        let path = Path::new(vec![PathSegment::new(start, rel, end)]);
        let records = vec![Record::new(vec!["p".to_string()], vec![path.into()])];

        let graph = extract_graph(&records);

        assert_eq!(graph.nodes.len(), 2);
        let node_start = graph.nodes.iter().find(|n| n.id == "1").unwrap();
        assert_eq!(node_start.labels, vec!["Person"]);
        assert_eq!(node_start.properties["prop1"], BoltValue::from("prop1"));
        let node_end = graph.nodes.iter().find(|n| n.id == "2").unwrap();
        assert_eq!(node_end.labels, vec!["Movie"]);
        assert_eq!(node_end.properties["prop2"], BoltValue::from("prop2"));

        assert_eq!(graph.relationships.len(), 1);
        let rel = &graph.relationships[0];
        assert_eq!(rel.id, "3");
        assert_eq!(rel.start_node_id, "1");
        assert_eq!(rel.end_node_id, "2");
        assert_eq!(rel.rel_type, "ACTED_IN");
        assert!(rel.properties.is_empty());
    }

    /// Bare node and relationship columns map the same way as a path.
    #[test]
    fn test_extracts_bare_nodes_and_relationships() {
        let start = person_node();
        let end = movie_node();
        let rel = acted_in(start.identity, end.identity);
        let records = vec![Record::new(
            vec!["r".to_string(), "n1".to_string(), "n2".to_string()],
            vec![rel.into(), start.into(), end.into()],
        )];

        let graph = extract_graph(&records);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.relationships.len(), 1);
        assert_eq!(graph.relationships[0].id, "3");
        assert_eq!(graph.relationships[0].start_node_id, "1");
        assert_eq!(graph.relationships[0].end_node_id, "2");
        assert_eq!(graph.relationships[0].rel_type, "ACTED_IN");
    }

    /// A relationship whose endpoints were never returned as nodes is
    /// dropped, not an error.
    #[test]
    fn test_drops_relationship_with_no_endpoint_nodes() {
        // RUST_LOG=debug shows the drop diagnostics from the builder.
        let _ = env_logger::builder().is_test(true).try_init();
        let rel = acted_in(1, 2);
        let records = vec![Record::new(vec!["r".to_string()], vec![rel.into()])];

        let graph = extract_graph(&records);

        assert!(graph.nodes.is_empty());
        assert!(graph.relationships.is_empty());
    }

    #[test]
    fn test_drops_relationship_when_end_node_missing() {
        let start = person_node();
        let rel = acted_in(start.identity, 2);
        let records = vec![Record::new(
            vec!["r".to_string(), "n1".to_string()],
            vec![rel.into(), start.into()],
        )];

        let graph = extract_graph(&records);

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.relationships.is_empty());
    }

    #[test]
    fn test_drops_relationship_when_start_node_missing() {
        let end = movie_node();
        let rel = acted_in(1, end.identity);
        let records = vec![Record::new(
            vec!["r".to_string(), "n2".to_string()],
            vec![rel.into(), end.into()],
        )];

        let graph = extract_graph(&records);

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.relationships.is_empty());
    }

    /// Endpoint nodes may arrive in a later record than the relationship;
    /// materialization waits for the full scan.
    #[test]
    fn test_endpoints_from_later_record_satisfy_relationship() {
        let rel = acted_in(1, 2);
        let records = vec![
            Record::new(vec!["r".to_string()], vec![rel.into()]),
            Record::new(
                vec!["n1".to_string(), "n2".to_string()],
                vec![person_node().into(), movie_node().into()],
            ),
        ];

        let graph = extract_graph(&records);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.relationships.len(), 1);
    }

    /// Every returned relationship endpoint must name a returned node.
    #[test]
    fn test_relationships_are_referentially_consistent() {
        let mut builder = GraphBuilder::new();
        builder.add_node(&person_node());
        builder.add_relationship(&acted_in(1, 2));
        builder.add_relationship(&acted_in(1, 1));
        let graph = builder.finish();

        let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for rel in &graph.relationships {
            assert!(node_ids.contains(&rel.start_node_id.as_str()));
            assert!(node_ids.contains(&rel.end_node_id.as_str()));
        }
        // Only the self-loop survives.
        assert_eq!(graph.relationships.len(), 1);
    }

    #[test]
    fn test_nodes_keep_first_discovery_order() {
        let records = vec![
            Record::new(vec!["n".to_string()], vec![movie_node().into()]),
            Record::new(vec!["n".to_string()], vec![person_node().into()]),
            Record::new(vec!["n".to_string()], vec![movie_node().into()]),
        ];

        let graph = extract_graph(&records);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    /// Graph model serializes with the wire field names the UI expects.
    #[test]
    fn test_graph_serialization_field_names() {
        let start = person_node();
        let end = movie_node();
        let rel = acted_in(start.identity, end.identity);
        let records = vec![Record::new(
            vec!["n1".to_string(), "n2".to_string(), "r".to_string()],
            vec![start.into(), end.into(), rel.into()],
        )];

        let json = serde_json::to_value(extract_graph(&records)).unwrap();

        assert_eq!(json["nodes"][0]["id"], "1");
        assert_eq!(json["nodes"][0]["labels"][0], "Person");
        assert_eq!(json["relationships"][0]["type"], "ACTED_IN");
        assert_eq!(json["relationships"][0]["startNodeId"], "1");
        assert_eq!(json["relationships"][0]["endNodeId"], "2");
    }

    /// Properties pass through untouched; integer normalization is a
    /// separate composable pass.
    #[test]
    fn test_properties_are_not_integer_normalized() {
        let mut props = HashMap::new();
        props.insert("big".to_string(), BoltValue::from(i64::MAX));
        let node = Node::new(7, vec!["Counter".to_string()], props);
        let records = vec![Record::new(vec!["n".to_string()], vec![node.into()])];

        let graph = extract_graph(&records);

        assert_eq!(graph.nodes[0].properties["big"], BoltValue::from(i64::MAX));
    }
}
