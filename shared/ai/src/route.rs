//! Built-in westbound route around the world.
//!
//! Atlantic, Panama canal, Pacific, Indonesia, Indian Ocean, Suez canal,
//! Mediterranean, Gibraltar, Bay of Biscay.

use crate::config::{CheckpointConfig, CourseConfig, DEFAULT_FINISH_RADIUS, DEFAULT_TEAM};

// (latitude, longitude, radius in km)
const ROUTE: &[(f64, f64, f64)] = &[
    (38.928962, -29.901633, 50.0),
    (18.677174, -63.668182, 50.0),
    (17.355385, -64.297441, 50.0),
    (9.468760, -80.265292, 50.0),
    (6.566362, -78.732970, 50.0),
    (0.697582, -156.908280, 50.0),
    (5.487077343928526, 126.97826013731992, 50.0),
    (0.8943043273826395, 119.64370985998079, 50.0),
    (-9.192082956771523, 115.57420879991402, 30.0),
    (-9.80403836568785, 94.98431811057729, 30.0),
    (-5.141523842516368, 78.59842933046924, 50.0),
    (12.591779742351633, 50.93666853797446, 50.0),
    (12.10319809495949, 43.51976068090509, 50.0),
    (12.98804162692998, 42.86416890074322, 50.0),
    // Red Sea and Suez.
    (27.118790429173686, 34.7089570042413, 50.0),
    (28.135176741601782, 33.33616470489151, 50.0),
    (29.546402188408344, 32.45334833295368, 50.0),
    (29.558882503421046, 32.419672786937205, 50.0),
    (29.690592481026997, 32.3962240979495, 50.0),
    (29.586539241656073, 32.39168175553029, 50.0),
    (30.00741768544188, 32.35381929715478, 30.0),
    (32.15420070036845, 32.35381929715478, 30.0),
    // Mediterranean.
    (31.750059040719893, 31.628250697760066, 30.0),
    (36.360876335435854, 14.603450611417891, 25.0),
    (38.021641064885735, 8.78681357086634, 50.0),
    (35.99194826343473, -5.293664432945284, 50.0),
    (35.92692671250301, -6.41828139588345, 50.0),
    (36.270678601096456, -10.988420977846186, 50.0),
    (38.8375726341942, -10.196388980391959, 50.0),
    (43.45451988515832, -10.687687955181907, 50.0),
];

pub fn default_config() -> CourseConfig {
    CourseConfig {
        team: DEFAULT_TEAM.to_string(),
        checkpoints: ROUTE
            .iter()
            .map(|&(latitude, longitude, radius)| CheckpointConfig {
                latitude,
                longitude,
                radius,
            })
            .collect(),
        finish_radius: DEFAULT_FINISH_RADIUS,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;
    use vendee_api::Location;

    #[test]
    fn test_default_route_is_valid() {
        let config = default_config();
        config.validate().unwrap();
        assert_eq!(config.checkpoints.len(), 30);
    }

    #[test]
    fn test_default_route_returns_home() {
        let start = Location::new(46.470243284275966, -1.788456535301071);
        let course = default_config().build(start).unwrap();
        assert_eq!(course.len(), 31);
        assert_eq!(course.get(30).unwrap().location(), start);
        assert_eq!(course.get(30).unwrap().radius(), 5.0);
    }
}
