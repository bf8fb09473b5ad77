use letter_graphs::edge::edge_set;
use letter_graphs::simple::SimpleGraph;
use letter_graphs::vertex::vertex_set;

use proptest::prelude::*;

use super::strategy::*;

#[test]
fn edge_endpoints_become_vertices() {
    let g = SimpleGraph::new(edge_set([('B', 'A'), ('C', 'D')]), vertex_set("Z".chars()));
    assert_eq!(g.vertices(), &vertex_set("ABCDZ".chars()));
    assert_eq!(g.edges(), &edge_set([('A', 'B'), ('C', 'D')]));
}

#[test]
fn remove_vertex_drops_incident_edges() {
    let mut g = SimpleGraph::new(edge_set([('A', 'B'), ('B', 'C'), ('C', 'D')]), []);
    g.remove_vertex('C');
    assert_eq!(g.edges(), &edge_set([('A', 'B')]));
    assert_eq!(g.vertices(), &vertex_set("ABD".chars()));
}

#[test]
fn remove_edge_keeps_endpoints() {
    let mut g = SimpleGraph::new(edge_set([('A', 'B')]), []);
    g.remove_edge('B', 'A');
    assert!(g.edges().is_empty());
    assert_eq!(g.vertices(), &vertex_set("AB".chars()));
}

#[test]
fn display_lists_edges() {
    let g = SimpleGraph::new(edge_set([('B', 'A')]), []);
    assert_eq!(g.to_string(), "Simple { AB }");
    assert_eq!(SimpleGraph::empty().to_string(), "Simple { }");
}

proptest! {
    #[test]
    fn out_of_range_mutations_are_no_ops(
        mut g in arb_simple(),
        c in arb_out_of_range(),
        l in arb_letter(),
    ) {
        let before = g.clone();
        g.add_vertex(c);
        g.remove_vertex(c);
        g.add_edge(c, l);
        g.add_edge(l, c);
        g.remove_edge(c, l);
        prop_assert_eq!(&g, &before);
    }

    #[test]
    fn self_loops_are_never_created(mut g in arb_simple(), l in arb_letter()) {
        g.add_edge(l, l);
        prop_assert!(g.edges().iter().all(|e| e.lo() != e.hi()));
    }

    #[test]
    fn edges_reference_present_vertices(g in arb_simple()) {
        for e in g.edges() {
            prop_assert!(g.vertices().contains(&e.lo()));
            prop_assert!(g.vertices().contains(&e.hi()));
        }
    }
}
