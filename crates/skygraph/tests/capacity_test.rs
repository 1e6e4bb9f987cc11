use skygraph::{Color, Error, Graph, GraphKind};

#[test]
fn zero_capacity_is_rejected() {
    let err = Graph::<i32>::new(0, GraphKind::Undirected).unwrap_err();
    assert!(matches!(err, Error::ZeroCapacity));
}

#[test]
fn fills_to_capacity_in_insertion_order() {
    for capacity in [1, 2, 5, 17] {
        let mut g: Graph<usize> = Graph::new(capacity, GraphKind::Directed).expect("graph");
        assert!(g.is_empty());
        for key in 0..capacity {
            assert_eq!(g.add_vertex(key * 10), key);
        }
        assert_eq!(g.len(), capacity);
        assert_eq!(g.capacity(), capacity);
        assert!(g.is_full());
        assert_eq!(*g.data_by_index(capacity - 1), (capacity - 1) * 10);
    }
}

#[test]
#[should_panic(expected = "add_vertex on a full graph")]
fn add_vertex_past_capacity_panics() {
    let mut g: Graph<i32> = Graph::new(2, GraphKind::Directed).expect("graph");
    g.add_vertex(1);
    g.add_vertex(2);
    g.add_vertex(3);
}

#[test]
fn try_add_vertex_reports_full_graph() {
    let mut g: Graph<i32> = Graph::new(1, GraphKind::Directed).expect("graph");
    assert_eq!(g.try_add_vertex(1).expect("first vertex"), 0);

    let err = g.try_add_vertex(2).unwrap_err();
    assert!(matches!(err, Error::Full { capacity: 1 }));
    assert_eq!(g.len(), 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn vertex_by_index_checks_len_not_capacity() {
    let mut g: Graph<i32> = Graph::new(4, GraphKind::Directed).expect("graph");
    g.add_vertex(1);
    g.vertex_by_index(1);
}

#[test]
fn new_vertices_have_default_traversal_state() {
    let mut g: Graph<i32> = Graph::new(1, GraphKind::Directed).expect("graph");
    g.add_vertex(42);
    let v = g.vertex_by_index(0);

    assert_eq!(v.color(), Color::Black);
    assert_eq!(v.distance(), 0);
    assert_eq!(v.predecessor(), None);
    assert!(v.neighbor_list().is_none());
}

#[test]
fn traversal_state_can_be_updated_in_place() {
    let mut g: Graph<i32> = Graph::new(2, GraphKind::Undirected).expect("graph");
    g.add_vertex(1);
    g.add_vertex(2);

    let v = g.vertex_by_key_mut(&2).expect("vertex");
    v.set_color(Color::Gray);
    v.set_distance(3);
    v.set_predecessor(Some(0));

    let v = g.vertex_by_index(1);
    assert_eq!(v.color(), Color::Gray);
    assert_eq!(v.distance(), 3);
    assert_eq!(v.predecessor(), Some(0));
    assert_eq!(g.vertex_by_index(0).color(), Color::Black);
}

#[test]
fn kind_is_fixed_at_construction() {
    let g: Graph<i32> = Graph::new(1, GraphKind::Undirected).expect("graph");
    assert_eq!(g.kind(), GraphKind::Undirected);
    assert!(!g.is_directed());
}

#[test]
fn unreservable_capacity_is_an_allocation_error() {
    let err = Graph::<i32>::new(usize::MAX, GraphKind::Directed).unwrap_err();
    assert!(matches!(
        err,
        Error::Allocation {
            capacity: usize::MAX,
            ..
        }
    ));
}

#[test]
fn clone_is_independent_and_fills_to_capacity() {
    let mut g: Graph<i32> = Graph::new(4, GraphKind::Undirected).expect("graph");
    g.add_vertex(1);
    g.add_vertex(2);
    g.add_edge(&1, &2);

    let mut c = g.clone();
    c.add_vertex(3);
    c.add_vertex(4);
    c.add_edge(&3, &4);

    assert!(c.is_full());
    assert_eq!(c.capacity(), 4);
    assert!(c.is_neighbor_of(&2, &1));
    assert_eq!(g.len(), 2);
    assert_eq!(g.neighbor_entry_count(), 2);
}

#[test]
fn color_displays_lowercase() {
    assert_eq!(Color::Black.to_string(), "black");
    assert_eq!(Color::Gray.to_string(), "gray");
    assert_eq!(Color::White.to_string(), "white");
}
