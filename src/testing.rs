/// Every weight store should pass the same randomised checks, both on its own and as the backing
/// store of a [`WeightedGraph`](crate::repr::WeightedGraph). Graphs in these tests use their slots
/// as node identities, i.e. node `u` lives in slot `u`.
macro_rules! test_weighted_graph_ops {
    ($env:ident, $store:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{
                algo::*, gens::*, prelude::*, repr::digest::GraphDigest,
                testing::test_weighted_graph_ops,
            };
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Graph = WeightedGraph<Slot, $store>;

            /// Copies all weights of `graph` into a plain matrix (`0` = no edge)
            fn reference_matrix(graph: &Graph) -> Vec<Vec<Weight>> {
                let n = graph.len();
                let mut matrix = vec![vec![0 as Weight; n]; n];
                for edge in graph.edges() {
                    matrix[*edge.src() as usize][*edge.dst() as usize] = edge.weight();
                }
                matrix
            }

            /// Distances from `source` computed by plain Bellman-Ford relaxation
            fn bellman_ford(matrix: &[Vec<Weight>], source: Slot) -> Vec<Cost> {
                let n = matrix.len();
                let mut dist = vec![INFINITE_COST; n];
                dist[source as usize] = 0;

                for _ in 0..n {
                    let mut changed = false;
                    for u in 0..n {
                        if dist[u] == INFINITE_COST {
                            continue;
                        }
                        for v in 0..n {
                            let w = matrix[u][v];
                            if w != 0 && dist[u] + (w as Cost) < dist[v] {
                                dist[v] = dist[u] + w as Cost;
                                changed = true;
                            }
                        }
                    }
                    if !changed {
                        break;
                    }
                }

                dist
            }

            $(
                test_weighted_graph_ops!($store: $trait);
            )*
        }
    };
    ($store:ident: WeightStore) => {
        #[test]
        fn test_weight_store() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                let mut store = <$store as WeightStore>::new(n);
                let mut reference = vec![vec![0 as Weight; n as usize]; n as usize];
                let mut m: NumEdges = 0;

                for _ in 0..(n * 10) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w: Weight = if rng.random_bool(0.3) { 0 } else { rng.random_range(1..100) };

                    let prev = std::mem::replace(&mut reference[u as usize][v as usize], w);
                    if prev == 0 && w != 0 {
                        m += 1;
                    } else if prev != 0 && w == 0 {
                        m -= 1;
                    }

                    assert_eq!(store.set_weight(u, v, w), (prev != 0).then_some(prev));
                    assert_eq!(store.number_of_edges(), m);
                }

                for u in 0..n {
                    let row = &reference[u as usize];
                    let expected = row
                        .iter()
                        .enumerate()
                        .filter(|(_, w)| **w != 0)
                        .map(|(v, &w)| (v as Slot, w))
                        .collect_vec();
                    assert_eq!(store.out_weights(u).collect_vec(), expected);

                    for v in 0..n {
                        let w = row[v as usize];
                        assert_eq!(store.weight(u, v), (w != 0).then_some(w));
                    }
                }
            }
        }
    };
    ($store:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [2 as NumNodes, 10, 30] {
                let mut graph = Graph::from_nodes(0..n).unwrap();
                let mut reference = vec![vec![0 as Weight; n as usize]; n as usize];

                assert!(graph.is_full());
                assert!(graph.is_singleton_graph());

                for _ in 0..(n * 5) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w: Weight = rng.random_range(1..50);

                    let old = reference[u as usize][v as usize];
                    if old != 0 {
                        assert!(graph.has_edge(&Edge::new(u, v, old)).unwrap());
                    }

                    assert_eq!(
                        graph.replace_edge(Edge::new(u, v, w)),
                        Ok((old != 0).then_some(old))
                    );
                    reference[u as usize][v as usize] = w;

                    assert_eq!(graph.weight_between(&u, &v), Ok(w));
                    assert_eq!(graph.edge_between(&u, &v), Ok(Edge::new(u, v, w)));
                    if old != 0 && old != w {
                        assert!(!graph.has_edge(&Edge::new(u, v, old)).unwrap());
                    }
                }

                for _ in 0..(n * 3) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = reference[u as usize][v as usize];

                    if w != 0 {
                        assert_eq!(graph.remove_edge_between(&u, &v), Ok(Edge::new(u, v, w)));
                        reference[u as usize][v as usize] = 0;
                    } else {
                        assert_eq!(
                            graph.remove_edge_between(&u, &v),
                            Err(GraphError::EdgeNotFound { src: u, dst: v })
                        );
                    }

                    assert_eq!(graph.connects(&u, &v), Ok(false));
                    assert_eq!(
                        graph.weight_between(&u, &v),
                        Err(GraphError::EdgeNotFound { src: u, dst: v })
                    );
                }

                let expected = {
                    let reference = &reference;
                    (0..n)
                        .cartesian_product(0..n)
                        .filter_map(|(u, v)| {
                            let w = reference[u as usize][v as usize];
                            (w != 0).then(|| Edge::new(u, v, w))
                        })
                        .collect_vec()
                };

                assert_eq!(graph.edges().collect_vec(), expected);
                assert_eq!(graph.number_of_edges() as usize, expected.len());
                for u in 0..n {
                    assert_eq!(
                        graph.edges_from(&u).unwrap().collect_vec(),
                        expected.iter().filter(|e| *e.src() == u).cloned().collect_vec()
                    );
                    assert_eq!(
                        graph.out_degree_of(&u),
                        Ok(expected.iter().filter(|e| *e.src() == u).count() as NumNodes)
                    );
                }

                // operations on unknown nodes fail and leave the graph untouched
                let digest = graph.digest_sha256();
                let unknown = n;

                assert_eq!(graph.add_edge(Edge::new(0, unknown, 1)), Err(GraphError::NodeNotFound(unknown)));
                assert_eq!(graph.add_edge(Edge::new(unknown, 0, 1)), Err(GraphError::NodeNotFound(unknown)));
                assert_eq!(graph.remove_edge_between(&unknown, &0), Err(GraphError::NodeNotFound(unknown)));
                assert_eq!(graph.connects(&0, &unknown), Err(GraphError::NodeNotFound(unknown)));
                assert_eq!(graph.weight_between(&unknown, &0), Err(GraphError::NodeNotFound(unknown)));
                assert_eq!(graph.has_edge(&Edge::unit(unknown, 0)), Err(GraphError::NodeNotFound(unknown)));
                assert!(matches!(graph.edges_from(&unknown), Err(GraphError::NodeNotFound(x)) if x == unknown));
                assert!(!graph.has_node(&unknown));

                assert_eq!(graph.add_node(unknown), Err(GraphError::GraphFull { capacity: n }));
                assert_eq!(graph.add_node(0), Err(GraphError::GraphFull { capacity: n }));

                assert_eq!(graph.digest_sha256(), digest);
                assert_eq!(graph.number_of_nodes(), n);
            }
        }
    };
    ($store:ident: ShortestPath) => {
        #[test]
        fn test_shortest_path() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [2 as NumNodes, 10, 25] {
                for p in [0.05, 0.1, 0.3] {
                    for _ in 0..5 {
                        let graph = Graph::gnp(rng, n, p, 20);
                        let matrix = reference_matrix(&graph);

                        for s in 0..n {
                            let dist = bellman_ford(&matrix, s);
                            let tree = graph.shortest_path_tree(&s).unwrap();
                            assert_eq!(tree.distances(), dist.as_slice());

                            for t in 0..n {
                                let path = graph.shortest_path(&s, &t).unwrap();

                                if dist[t as usize] == INFINITE_COST {
                                    assert!(path.is_empty());
                                    assert_eq!(path.cost(), INFINITE_COST);
                                    continue;
                                }

                                assert_eq!(path.cost(), dist[t as usize]);
                                assert_eq!(path.start(), Some(&s));
                                assert_eq!(path.end(), Some(&t));

                                let walked: Cost = path
                                    .iter()
                                    .tuple_windows()
                                    .map(|(u, v)| graph.weight_between(u, v).unwrap() as Cost)
                                    .sum();
                                assert_eq!(walked, path.cost());
                            }
                        }
                    }
                }
            }
        }
    };
    ($store:ident: NonDirectPath) => {
        #[test]
        fn test_non_direct_path() {
            let rng = &mut Pcg64Mcg::seed_from_u64(6);

            for n in [3 as NumNodes, 10, 20] {
                for _ in 0..5 {
                    let mut graph = Graph::gnp(rng, n, 0.3, 20);
                    let digest = graph.digest_sha256();

                    for s in 0..n {
                        for t in 0..n {
                            let path = graph.shortest_non_direct_path(&s, &t).unwrap();
                            assert_eq!(graph.digest_sha256(), digest);

                            if s != t {
                                assert_ne!(path.hops(), 1);
                            }

                            let mut without = graph.clone();
                            let _ = without.remove_edge_between(&s, &t);
                            assert_eq!(path, without.shortest_path(&s, &t).unwrap());
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_weighted_graph_ops;
