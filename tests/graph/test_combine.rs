use letter_graphs::combine::CombineError;
use letter_graphs::complete::CompleteGraph;
use letter_graphs::edge::edge_set;
use letter_graphs::prelude::{Graph, GraphKind, WeightedGraph};
use letter_graphs::simple::SimpleGraph;
use letter_graphs::vertex::vertex_set;

use proptest::prelude::*;

use super::strategy::*;

#[test]
fn simple_plus_complete_degrades_to_simple() {
    let s = Graph::from(SimpleGraph::new(edge_set([('A', 'B')]), []));
    let c = Graph::from(CompleteGraph::new(vertex_set("BC".chars())));
    let sum = s.add(&c).unwrap();
    assert_eq!(sum.kind(), GraphKind::Simple);
    assert_eq!(sum.edges(), &edge_set([('A', 'B'), ('B', 'C')]));
    assert_eq!(sum.vertices(), &vertex_set("ABC".chars()));
}

#[test]
fn weighted_conflict_keeps_minimum() {
    let mut a = WeightedGraph::new(edge_set([('A', 'B')]), 1, []);
    a.set_weight('A', 'B', 3);
    let mut b = WeightedGraph::new(edge_set([('A', 'B')]), 1, []);
    b.set_weight('A', 'B', 7);
    let sum = &a + &b;
    assert_eq!(sum.weight('A', 'B'), Some(3));
}

#[test]
fn mixed_weighted_error_points_at_the_conversion() {
    let w = Graph::from(WeightedGraph::new(edge_set([('A', 'B')]), 1, []));
    let s = Graph::from(SimpleGraph::new(edge_set([('A', 'B')]), []));
    let err = (&w + &s).unwrap_err();
    assert_eq!(
        err,
        CombineError::MixedWeighted {
            lhs: GraphKind::Weighted,
            rhs: GraphKind::Simple,
        }
    );
    assert!(err.to_string().contains("as_weighted"));
}

proptest! {
    #[test]
    fn mixed_weighted_is_always_rejected(w in arb_weighted(), g in arb_unweighted()) {
        let w = Graph::from(w);
        prop_assert!((&w + &g).is_err());
        prop_assert!((&g + &w).is_err());
        prop_assert!((&w - &g).is_err());
        prop_assert!((&g - &w).is_err());
    }

    #[test]
    fn weighted_add_unions_edges_at_minimum_weight(a in arb_weighted(), b in arb_weighted()) {
        let sum = &a + &b;
        prop_assert_eq!(sum.edges(), &(a.edges() | b.edges()));
        for (e, w) in sum.weights() {
            let (x, y) = e.letters();
            let expected = match (a.weight(x, y), b.weight(x, y)) {
                (Some(w1), Some(w2)) => w1.min(w2),
                (Some(w1), None) => w1,
                (None, Some(w2)) => w2,
                (None, None) => unreachable!("edge came from one of the operands"),
            };
            prop_assert_eq!(w, expected);
        }
    }

    #[test]
    fn weighted_subtract_removes_exactly_rhs_edges(a in arb_weighted(), b in arb_weighted()) {
        let diff = &a - &b;
        prop_assert_eq!(diff.edges(), &(a.edges() - b.edges()));
        for (e, w) in diff.weights() {
            let (x, y) = e.letters();
            prop_assert_eq!(Some(w), a.weight(x, y));
        }
        prop_assert!(diff.weights().map(|(e, _)| e).eq(diff.edges().iter().copied()));
    }

    #[test]
    fn complete_add_stays_complete(a in arb_complete(), b in arb_complete()) {
        let sum = &a + &b;
        prop_assert_eq!(sum.vertices(), &(a.vertices() | b.vertices()));
        prop_assert_eq!(sum.edges(), &complete_edges(sum.vertices()));
    }

    #[test]
    fn complete_subtract_stays_complete(a in arb_complete(), b in arb_complete()) {
        let diff = &a - &b;
        prop_assert_eq!(diff.vertices(), &(a.vertices() - b.vertices()));
        prop_assert_eq!(diff.edges(), &complete_edges(diff.vertices()));
    }

    #[test]
    fn bipartite_add_unions_the_sides(a in arb_bipartite(), b in arb_bipartite()) {
        let sum = &a + &b;
        prop_assert_eq!(sum.upper(), &(a.upper() | b.upper()));
        prop_assert_eq!(sum.lower(), &(a.lower() | b.lower()));
        prop_assert_eq!(sum.edges(), &cross_edges(sum.upper(), sum.lower()));
    }

    #[test]
    fn bipartite_subtract_removes_side_members(
        a in arb_bipartite_disjoint(),
        b in arb_bipartite_disjoint(),
    ) {
        let diff = &a - &b;
        prop_assert_eq!(diff.upper(), &(a.upper() - b.upper()));
        prop_assert_eq!(diff.lower(), &(a.lower() - b.lower()));
        prop_assert_eq!(diff.edges(), &cross_edges(diff.upper(), diff.lower()));
    }

    // Every pair without a specialized rule falls back to a simple graph.
    #[test]
    fn other_pairs_degrade_to_simple(a in arb_unweighted(), b in arb_unweighted()) {
        prop_assume!(!(a.kind() == b.kind() && a.kind() != GraphKind::Simple));

        let sum = a.add(&b).unwrap();
        prop_assert_eq!(sum.kind(), GraphKind::Simple);
        prop_assert_eq!(sum.edges(), &(a.edges() | b.edges()));
        prop_assert_eq!(sum.vertices(), &(a.vertices() | b.vertices()));

        let diff = a.subtract(&b).unwrap();
        prop_assert_eq!(diff.kind(), GraphKind::Simple);
        prop_assert_eq!(diff.edges(), &(a.edges() - b.edges()));
        prop_assert_eq!(diff.vertices(), a.vertices());
    }

    // The operators are sugar for the combinator methods.
    #[test]
    fn operators_match_the_methods(a in arb_graph(), b in arb_graph()) {
        prop_assert_eq!(&a + &b, a.add(&b));
        prop_assert_eq!(&a - &b, a.subtract(&b));
    }

    // Combination never mutates its operands.
    #[test]
    fn operands_are_untouched(a in arb_graph(), b in arb_graph()) {
        let (a2, b2) = (a.clone(), b.clone());
        let _ = &a + &b;
        let _ = &a - &b;
        prop_assert_eq!(&a, &a2);
        prop_assert_eq!(&b, &b2);
    }
}
