//! Dispatch behavior of the uniform handle: every capability routes to the
//! variant's own logic, and inapplicable capabilities are silent no-ops.

use letter_graphs::bipartite::BipartiteGraph;
use letter_graphs::complete::CompleteGraph;
use letter_graphs::edge::edge_set;
use letter_graphs::prelude::{Graph, WeightedGraph};
use letter_graphs::simple::SimpleGraph;
use letter_graphs::vertex::vertex_set;

use proptest::prelude::*;

use super::strategy::*;

#[test]
fn derived_edge_variants_ignore_edge_mutation() {
    let mut g = Graph::from(CompleteGraph::new(vertex_set("AB".chars())));
    g.add_edge('A', 'C');
    g.remove_edge('A', 'B');
    assert_eq!(g.edges(), &edge_set([('A', 'B')]));

    let mut g = Graph::from(BipartiteGraph::new(
        vertex_set("A".chars()),
        vertex_set("X".chars()),
    ));
    g.add_edge('A', 'B');
    g.remove_edge('A', 'X');
    assert_eq!(g.edges(), &edge_set([('A', 'X')]));
}

#[test]
fn bipartite_vertices_are_side_driven() {
    let mut g = Graph::from(BipartiteGraph::new(
        vertex_set("A".chars()),
        vertex_set("X".chars()),
    ));
    g.add_vertex('B');
    g.remove_vertex('A');
    assert_eq!(g.vertices(), &vertex_set("AX".chars()));

    g.add_upper('B');
    assert_eq!(g.edges(), &edge_set([('A', 'X'), ('B', 'X')]));
}

#[test]
fn weight_operations_only_apply_to_weighted() {
    let mut g = Graph::from(SimpleGraph::new(edge_set([('A', 'B')]), []));
    assert_eq!(g.weight('A', 'B'), None);
    g.set_weight('A', 'B', 9);
    g.add_edge_weighted('B', 'C', 9);
    assert_eq!(g.edges(), &edge_set([('A', 'B')]));

    let mut g = Graph::from(WeightedGraph::new(edge_set([('A', 'B')]), 1, []));
    g.set_weight('A', 'B', 9);
    assert_eq!(g.weight('B', 'A'), Some(9));
}

#[test]
fn display_is_the_variant_display() {
    let g = Graph::from(CompleteGraph::new(vertex_set("AB".chars())));
    assert_eq!(g.to_string(), "Complete { A, B }");
}

proptest! {
    #[test]
    fn kind_tracks_the_variant(g in arb_graph()) {
        let name = g.kind().name();
        prop_assert!(g.to_string().to_lowercase().starts_with(name));
    }

    #[test]
    fn side_operations_are_no_ops_off_bipartite(g in arb_graph(), l in arb_letter()) {
        prop_assume!(g.kind() != letter_graphs::prelude::GraphKind::Bipartite);
        let mut h = g.clone();
        h.add_upper(l);
        h.add_lower(l);
        h.remove_upper(l);
        h.remove_lower(l);
        prop_assert_eq!(&h, &g);
    }
}
