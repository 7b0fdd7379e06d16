use ai_nav::{AStar, AStarQuery, AdjacencyMatrix};

fn triangle() -> AStar<char> {
    AStar::new(
        [('A', 'B', 1), ('B', 'C', 1), ('A', 'C', 5)]
            .into_iter()
            .collect(),
    )
}

#[test]
fn prefers_cheaper_two_hop_route() {
    let astar = triangle();
    assert_eq!(astar.path(&'A', &'C'), vec!['B', 'C']);
    assert_eq!(astar.path(&'C', &'A'), vec!['B', 'A']);
}

#[test]
fn repeated_queries_are_identical() {
    let astar = triangle();
    let first = astar.path(&'A', &'C');
    let second = astar.path(&'A', &'C');
    assert_eq!(first, second);
}

#[test]
fn disconnected_components_have_no_path() {
    let astar = AStar::new(
        [('A', 'B', 1), ('C', 'D', 1)]
            .into_iter()
            .collect::<AdjacencyMatrix<char>>(),
    );
    assert!(astar.path(&'A', &'D').is_empty());
    assert!(astar.path(&'D', &'A').is_empty());
}

#[test]
fn unknown_endpoints_have_no_path() {
    let astar = triangle();
    assert!(astar.path(&'A', &'Z').is_empty());
    assert!(astar.path(&'Z', &'A').is_empty());
}

#[test]
fn start_equal_to_end_is_empty() {
    let astar = triangle();
    assert!(astar.path(&'B', &'B').is_empty());
}

#[test]
fn equal_cost_routes_prefer_first_inserted_neighbor() {
    // A-B-D and A-C-D both cost 2.
    let via_b = AStar::new(
        [('A', 'B', 1), ('B', 'D', 1), ('A', 'C', 1), ('C', 'D', 1)]
            .into_iter()
            .collect::<AdjacencyMatrix<char>>(),
    );
    assert_eq!(via_b.path(&'A', &'D'), vec!['B', 'D']);

    let via_c = AStar::new(
        [('A', 'C', 1), ('C', 'D', 1), ('A', 'B', 1), ('B', 'D', 1)]
            .into_iter()
            .collect::<AdjacencyMatrix<char>>(),
    );
    assert_eq!(via_c.path(&'A', &'D'), vec!['C', 'D']);
}

#[test]
fn removing_a_node_reroutes() {
    let mut astar = triangle();
    astar.matrix_mut().remove_node(&'B');
    assert_eq!(astar.path(&'A', &'C'), vec!['C']);
}

#[test]
fn longer_chain_is_walked_in_order() {
    let astar = AStar::new(
        [(0u32, 1u32, 2), (1, 2, 2), (2, 3, 2), (3, 4, 2), (0, 4, 100)]
            .into_iter()
            .collect::<AdjacencyMatrix<u32>>(),
    );
    assert_eq!(astar.path(&0, &4), vec![1, 2, 3, 4]);
}

#[test]
fn reused_query_matches_allocating_api() {
    let astar = triangle();
    let mut query = AStarQuery::default();
    let mut out = Vec::new();

    assert!(astar.path_into(&'A', &'C', &mut query, &mut out));
    assert_eq!(out, astar.path(&'A', &'C'));

    assert!(!astar.path_into(&'A', &'Q', &mut query, &mut out));
    assert!(out.is_empty());
}

#[test]
fn negative_cycle_terminates_without_path() {
    let astar = AStar::new(
        [('a', 'b', -1), ('c', 'd', 1)]
            .into_iter()
            .collect::<AdjacencyMatrix<char>>(),
    );
    assert!(astar.path(&'c', &'a').is_empty());
}
