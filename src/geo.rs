/*!
# Geographic Distances

Utilities to derive edge weights from locations on a sphere:

- [`GeoCoordinates`] stores latitude/longitude in degrees and computes great-circle distances
  with the haversine formula,
- [`Located`] is implemented by node identities that have a position,
- [`complete_network`] connects every ordered pair of located nodes by an edge weighted with
  their distance in whole kilometres.

## Example
```
use std::fmt;
use wgraphs::{algo::*, geo::*, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Airport {
    iata: &'static str,
    position: (i32, i32),
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iata)
    }
}

impl Located for Airport {
    fn coordinates(&self) -> GeoCoordinates {
        GeoCoordinates::new(self.position.0 as f64, self.position.1 as f64)
    }
}

let a = Airport { iata: "AAA", position: (0, 0) };
let b = Airport { iata: "BBB", position: (0, 1) };
let c = Airport { iata: "CCC", position: (0, 2) };

let mut network: MatrixGraph<Airport> = complete_network([a.clone(), b, c.clone()]).unwrap();
assert_eq!(network.number_of_edges(), 6);

let route = network.shortest_non_direct_path(&a, &c).unwrap();
assert_eq!(route.to_string(), "AAA -> BBB -> CCC");
assert_eq!(route.cost(), 222);
```
*/

use itertools::Itertools;
use tracing::debug;

use crate::prelude::*;

/// Mean radius of the earth in kilometres
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A point on a sphere given by latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinates {
    latitude: f64,
    longitude: f64,
    radius: f64,
}

impl GeoCoordinates {
    /// Creates coordinates on the earth ([`EARTH_RADIUS_KM`])
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_radius(latitude, longitude, EARTH_RADIUS_KM)
    }

    /// Creates coordinates on a sphere with the given radius
    pub fn with_radius(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Great-circle distance to `other` in units of the radius of `self`
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat_diff = (other.latitude - self.latitude).to_radians();
        let lon_diff = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let angle = ((lat_diff / 2.0).sin().powi(2)
            + (lon_diff / 2.0).sin().powi(2) * lat1.cos() * lat2.cos())
        .sqrt();

        2.0 * self.radius * angle.asin()
    }

    /// Distance to `other` truncated to an edge weight.
    ///
    /// Coordinates closer than one unit yield `0`, i.e. no edge.
    pub fn weight_to(&self, other: &Self) -> Weight {
        self.distance_to(other) as Weight
    }
}

/// Node identities with a geographic position
pub trait Located {
    fn coordinates(&self) -> GeoCoordinates;
}

/// Builds the complete directed network over `nodes`: the capacity equals the number of nodes and
/// every ordered pair `(u, v)` with `u != v` is connected by an edge weighted with
/// [`GeoCoordinates::weight_to`].
///
/// # Errors
/// [`GraphError::NodeAlreadyPresent`] if `nodes` contains duplicates.
pub fn complete_network<N, S, I>(nodes: I) -> GraphResult<WeightedGraph<N, S>, N>
where
    N: GraphNode + Located,
    S: WeightStore,
    I: IntoIterator<Item = N>,
{
    let mut graph = WeightedGraph::<N, S>::from_nodes(nodes)?;
    let coordinates = graph.nodes().map(Located::coordinates).collect_vec();

    for ((u, cu), (v, cv)) in coordinates
        .iter()
        .enumerate()
        .cartesian_product(coordinates.iter().enumerate())
    {
        if u != v {
            graph.set_weight_at(u as Slot, v as Slot, cu.weight_to(cv));
        }
    }

    debug!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "built complete geographic network"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::{
        fmt,
        hash::{Hash, Hasher},
    };

    use super::*;
    use crate::algo::*;

    /// Airports are identified by their IATA code only
    #[derive(Debug, Clone)]
    struct Airport {
        iata: &'static str,
        coordinates: GeoCoordinates,
    }

    impl Airport {
        fn new(iata: &'static str, latitude: f64, longitude: f64) -> Self {
            Self {
                iata,
                coordinates: GeoCoordinates::new(latitude, longitude),
            }
        }
    }

    impl PartialEq for Airport {
        fn eq(&self, other: &Self) -> bool {
            self.iata == other.iata
        }
    }

    impl Eq for Airport {}

    impl Hash for Airport {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.iata.hash(state);
        }
    }

    impl fmt::Display for Airport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.iata)
        }
    }

    impl Located for Airport {
        fn coordinates(&self) -> GeoCoordinates {
            self.coordinates
        }
    }

    fn portugal() -> [Airport; 3] {
        [
            Airport::new("LIS", 38.7813, -9.1359),
            Airport::new("OPO", 41.2481, -8.6814),
            Airport::new("FAO", 37.0144, -7.9659),
        ]
    }

    #[test]
    fn haversine() {
        let [lis, opo, _] = portugal();
        let d = lis.coordinates.distance_to(&opo.coordinates);
        assert!((d - 277.01).abs() < 0.01, "{d}");
        assert_eq!(d, opo.coordinates.distance_to(&lis.coordinates));
        assert_eq!(lis.coordinates.distance_to(&lis.coordinates), 0.0);

        let origin = GeoCoordinates::new(0.0, 0.0);
        let antipode = GeoCoordinates::new(0.0, 180.0);
        assert!((origin.distance_to(&antipode) - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);

        let unit = GeoCoordinates::with_radius(0.0, 0.0, 1.0);
        assert!((unit.distance_to(&GeoCoordinates::new(90.0, 0.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn complete_network_weights() {
        let [lis, opo, fao] = portugal();
        let network: SparseGraph<Airport> = complete_network(portugal()).unwrap();

        assert_eq!(network.capacity(), 3);
        assert_eq!(network.number_of_edges(), 6);
        assert_eq!(network.weight_between(&lis, &opo), Ok(277));
        assert_eq!(network.weight_between(&opo, &lis), Ok(277));
        assert_eq!(network.weight_between(&lis, &fao), Ok(221));
        assert_eq!(network.weight_between(&opo, &fao), Ok(474));
        assert_eq!(
            network.weight_between(&fao, &fao),
            Err(GraphError::EdgeNotFound {
                src: fao.clone(),
                dst: fao
            })
        );
    }

    #[test]
    fn identity_by_business_key() {
        let [lis, ..] = portugal();
        let network: MatrixGraph<Airport> = complete_network(portugal()).unwrap();

        // same code, different coordinates: still the same node
        let moved = Airport::new("LIS", 0.0, 0.0);
        assert!(network.has_node(&moved));
        assert_eq!(network.slot_of(&moved), network.slot_of(&lis));

        assert_eq!(
            complete_network::<_, DenseWeights, _>([lis.clone(), moved]).map(|_| ()),
            Err(GraphError::NodeAlreadyPresent(lis))
        );
    }

    #[test]
    fn non_direct_route() {
        let [lis, opo, fao] = portugal();
        let mut network: MatrixGraph<Airport> = complete_network(portugal()).unwrap();

        assert_eq!(network.shortest_path(&opo, &fao).unwrap().cost(), 474);

        let route = network.shortest_non_direct_path(&opo, &fao).unwrap();
        assert_eq!(route.to_string(), "OPO -> LIS -> FAO");
        assert_eq!(route.cost(), 498);
        assert_eq!(route.nodes(), &[opo.clone(), lis, fao.clone()]);
        assert_eq!(network.weight_between(&opo, &fao), Ok(474));
    }
}
