use nalgebra::Vector3;

/// Mean Earth radius (in kilometres).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude (in degrees, positive north).
    pub latitude: f64,
    /// Longitude (in degrees, positive east).
    pub longitude: f64,
}

impl Location {
    /// Returns a [Location] with the given coordinates (in degrees).
    pub fn new(latitude: f64, longitude: f64) -> Location {
        Location {
            latitude,
            longitude,
        }
    }

    /// Returns the unit vector pointing from the Earth's centre through this location.
    pub fn to_unit_vector(self) -> Vector3<f64> {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Returns the great-circle surface distance between `a` and `b` (in kilometres).
///
/// Uses the angle between the two unit vectors, which stays accurate for
/// both very close and nearly antipodal points.
pub fn distance_on_surface(a: Location, b: Location) -> f64 {
    let u = a.to_unit_vector();
    let v = b.to_unit_vector();
    let angle = u.cross(&v).norm().atan2(u.dot(&v));
    EARTH_RADIUS_KM * angle
}

/// Returns the initial great-circle course from `a` to `b`.
///
/// The result is in degrees in `[0, 360)`, clockwise from north.
pub fn initial_bearing(a: Location, b: Location) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_log::test;

    #[test]
    fn test_zero_distance() {
        let p = Location::new(46.49, -1.79);
        assert_eq!(distance_on_surface(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_of_longitude_on_equator() {
        let d = distance_on_surface(Location::new(0.0, 0.0), Location::new(0.0, 1.0));
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM * std::f64::consts::PI / 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d, 111.195, epsilon = 1e-3);
    }

    #[test]
    fn test_symmetric() {
        let a = Location::new(38.928962, -29.901633);
        let b = Location::new(18.677174, -63.668182);
        assert_abs_diff_eq!(
            distance_on_surface(a, b),
            distance_on_surface(b, a),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_antipodal() {
        let d = distance_on_surface(Location::new(0.0, 0.0), Location::new(0.0, 180.0));
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM * std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_pole_to_pole() {
        let d = distance_on_surface(Location::new(90.0, 0.0), Location::new(-90.0, 45.0));
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM * std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_dateline_wraparound() {
        let d = distance_on_surface(Location::new(0.0, 179.5), Location::new(0.0, -179.5));
        assert_abs_diff_eq!(d, 111.195, epsilon = 1e-3);
    }

    #[test]
    fn test_bearing() {
        let origin = Location::new(0.0, 0.0);
        assert_abs_diff_eq!(
            initial_bearing(origin, Location::new(1.0, 0.0)),
            0.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            initial_bearing(origin, Location::new(0.0, 1.0)),
            90.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            initial_bearing(origin, Location::new(-1.0, 0.0)),
            180.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            initial_bearing(origin, Location::new(0.0, -1.0)),
            270.0,
            epsilon = 1e-9
        );
    }
}
