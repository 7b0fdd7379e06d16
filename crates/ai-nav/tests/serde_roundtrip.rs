#![cfg(feature = "serde")]

use ai_nav::{AStar, AdjacencyMatrix};

#[test]
fn adjacency_matrix_roundtrips_via_serde() {
    let matrix: AdjacencyMatrix<String> = [
        ("a".to_string(), "b".to_string(), 1),
        ("b".to_string(), "c".to_string(), 1),
        ("a".to_string(), "c".to_string(), 5),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&matrix).expect("serialize matrix");
    let back: AdjacencyMatrix<String> = serde_json::from_str(&json).expect("deserialize matrix");
    assert_eq!(back, matrix);

    let start = "a".to_string();
    let end = "c".to_string();
    assert_eq!(
        AStar::new(matrix).path(&start, &end),
        AStar::new(back).path(&start, &end)
    );
}

#[test]
fn adjacency_matrix_serializes_as_edge_lists() {
    let matrix: AdjacencyMatrix<String> = [("x".to_string(), "y".to_string(), 7)]
        .into_iter()
        .collect();
    let value = serde_json::to_value(&matrix).expect("serialize matrix");
    assert_eq!(
        value,
        serde_json::json!({
            "x": [{ "node": "y", "weight": 7 }],
            "y": [{ "node": "x", "weight": 7 }],
        })
    );
}
