#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Stable error codes exposed by the public API.

use mazeworks_core::{
    AdjacencyListGraph, CollectionError, CollectionErrorCode, DisjointSets, GraphError,
    GraphErrorCode, IndexedMinPriorityQueue, MazeError, MazeErrorCode, MazeGrid, WeightedEdge,
};
use rstest::rstest;

#[rstest]
#[case::duplicate(CollectionError::DuplicateItem { structure: "priority queue" }, "COLLECTION_DUPLICATE_ITEM")]
#[case::missing(CollectionError::ItemNotFound { structure: "disjoint sets" }, "COLLECTION_ITEM_NOT_FOUND")]
#[case::empty(CollectionError::EmptyQueue { structure: "priority queue" }, "COLLECTION_EMPTY_QUEUE")]
#[case::nan(CollectionError::InvalidPriority { structure: "priority queue" }, "COLLECTION_INVALID_PRIORITY")]
fn collection_codes_are_stable(#[case] error: CollectionError, #[case] expected: &str) {
    assert_eq!(error.code().as_str(), expected);
    assert_eq!(error.code().to_string(), expected);
}

#[test]
fn collection_messages_name_the_structure() {
    let mut queue = IndexedMinPriorityQueue::<u8>::new();
    let err = queue.remove_min().expect_err("queue is empty");
    assert_eq!(err.code(), CollectionErrorCode::EmptyQueue);
    assert_eq!(
        err.to_string(),
        "cannot read the minimum of an empty priority queue"
    );

    let mut sets = DisjointSets::<u8>::new();
    let err = sets.find_set(&1).expect_err("item is unknown");
    assert_eq!(err.to_string(), "item is not present in the disjoint sets");
}

#[test]
fn graph_errors_carry_the_weight() {
    let mut graph = AdjacencyListGraph::new();
    let err = graph
        .add_edge(WeightedEdge::new(0_u8, 1, f64::INFINITY))
        .expect_err("infinite weight");
    assert_eq!(err.code(), GraphErrorCode::NonFiniteWeight);
    assert_eq!(err, GraphError::NonFiniteWeight {
        weight: f64::INFINITY
    });
    assert_eq!(err.to_string(), "edge weight inf is not finite");
}

#[test]
fn maze_errors_wrap_lower_layers() {
    let err = MazeError::from(CollectionError::EmptyQueue {
        structure: "priority queue",
    });
    assert_eq!(err.code(), MazeErrorCode::Collection);
    assert_eq!(err.collection_code(), Some(CollectionErrorCode::EmptyQueue));

    let err = MazeError::from(GraphError::NonFiniteWeight { weight: f64::NAN });
    assert_eq!(err.code().as_str(), "MAZE_GRAPH_FAILURE");

    let err = MazeGrid::new(0, 0).expect_err("zero dimensions");
    assert_eq!(err.to_string(), "maze dimensions 0x0 are invalid");
}
