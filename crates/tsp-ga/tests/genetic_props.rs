use proptest::prelude::*;
use serde_json::json;
use tsp_core::{drive, Graph, GraphSpec, Stepper};
use tsp_exact::held_karp;
use tsp_ga::{GaParams, Genetic};

fn coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    (4usize..10).prop_flat_map(|n| prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn best_length_never_increases(coords in coords(), seed in any::<u64>()) {
        let g = Graph::complete_euclidean(&coords, None).unwrap();
        let mut ga = Genetic::with_seed(&g, GaParams::new().with_pop(16).with_gens(12), seed);

        let mut prev = f64::INFINITY;
        loop {
            let snap = ga.step();
            let len = snap.best_len.as_f64();
            prop_assert!(len <= prev);
            prev = len;
            if let Some(t) = &snap.best_tour {
                prop_assert!(g.validate_tour(t).is_ok());
                prop_assert!(g.is_complete(t));
            }
            if snap.done {
                prop_assert_eq!(snap.progress, 12);
                break;
            }
        }
    }

    #[test]
    fn never_beats_the_optimum(coords in coords(), seed in any::<u64>()) {
        let g = Graph::complete_euclidean(&coords, None).unwrap();
        let optimum = g.tour_length(&held_karp(&g).unwrap()).as_f64();
        let mut ga = Genetic::with_seed(&g, GaParams::new().with_pop(10).with_gens(6), seed);
        let last = drive(&mut ga, 20, |_| {});
        prop_assert!(last.best_len.as_f64() >= optimum - 1e-9);
    }
}

#[test]
fn sparse_closure_is_respected() {
    // only node 4 links back to the start
    let spec: GraphSpec = serde_json::from_value(json!({
        "nodes": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 2, "y": 0}, {"x": 2, "y": 1}, {"x": 0, "y": 1}],
        "edges": [
            {"u": 0, "v": 1}, {"u": 0, "v": 4}, {"u": 1, "v": 2}, {"u": 1, "v": 3},
            {"u": 2, "v": 3}, {"u": 3, "v": 4}, {"u": 2, "v": 4}, {"u": 1, "v": 4}
        ],
        "start": 0
    }))
    .unwrap();
    let g = spec.build().unwrap();
    let mut ga = Genetic::with_seed(&g, GaParams::new().with_pop(12).with_gens(10), 4);
    for t in ga.population() {
        assert!(g.closes(t));
    }
    let last = drive(&mut ga, 50, |_| {});
    let tour = last.best_tour.expect("feasible graph");
    assert!(g.tour_length(&tour).is_finite());
    assert!(g.closes(&tour));
}
