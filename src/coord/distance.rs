//! Great-circle distance
//!
//! Coordinates are angular, so planar distance on raw degrees is wrong at any
//! real-world scale. Everything here works on the sphere.

use crate::constants::geo::EARTH_RADIUS_METERS;
use crate::coord::Coordinates;

/// Calculate the distance between two points in meters (Haversine formula)
///
/// # Arguments
/// * `p1` - First point
/// * `p2` - Second point
///
/// # Returns
/// Distance in meters. NaN in, NaN out; callers validate first.
pub fn haversine_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = (p2.lng - p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_degree_of_latitude() {
        let nyc = Coordinates::new(40.7128, -74.0060);
        let north = Coordinates::new(41.7128, -74.0060);

        let distance = haversine_distance(nyc, north);
        assert!(
            (distance - 111_195.0).abs() < 100.0,
            "Distance {} should be approximately 111195",
            distance
        );
    }

    #[test]
    fn test_symmetric() {
        let bondi = Coordinates::new(-33.8915, 151.2767);
        let manly = Coordinates::new(-33.7969, 151.2840);

        assert_relative_eq!(
            haversine_distance(bondi, manly),
            haversine_distance(manly, bondi)
        );
    }

    #[test]
    fn test_zero_on_same_point() {
        let bondi = Coordinates::new(-33.8915, 151.2767);
        assert_eq!(haversine_distance(bondi, bondi), 0.0);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        let equator = haversine_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
        let sydney = haversine_distance(
            Coordinates::new(-33.87, 151.0),
            Coordinates::new(-33.87, 152.0),
        );
        assert!(sydney < equator);
    }

    #[test]
    fn test_antipodal_points() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_METERS;

        let p = Coordinates::new(1.251, -179.0);
        let q = Coordinates::new(-1.251, 1.0);
        let distance = haversine_distance(p, q);
        assert!(distance.is_finite());
        assert_relative_eq!(distance, half_circumference, max_relative = 1e-9);

        let north = Coordinates::new(90.0, 0.0);
        let south = Coordinates::new(-90.0, 0.0);
        assert_relative_eq!(haversine_distance(north, south), half_circumference, max_relative = 1e-9);
    }

    #[test]
    fn test_antimeridian() {
        let west = Coordinates::new(0.0, 179.5);
        let east = Coordinates::new(0.0, -179.5);
        let one_degree = haversine_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
        assert_relative_eq!(haversine_distance(west, east), one_degree, max_relative = 1e-9);
    }
}
