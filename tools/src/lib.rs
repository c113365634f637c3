use anyhow::{anyhow, Context};
use serde::Serialize;
use std::path::Path;
use vendee_ai::{Course, CourseConfig};
use vendee_api::{distance_on_surface, initial_bearing, Location};

/// One row of a course report: a checkpoint and the leg leading to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leg {
    pub index: usize,
    pub location: Location,
    pub radius: f64,
    /// Distance from the previous checkpoint (or the start) in km.
    pub distance: f64,
    /// Initial bearing from the previous checkpoint (or the start) in degrees.
    pub bearing: f64,
    pub cumulative_distance: f64,
}

/// Parses "LAT,LON" in degrees.
pub fn parse_location(s: &str) -> anyhow::Result<Location> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("Expected LAT,LON, got {s:?}"))?;
    let latitude = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude {lat:?}"))?;
    let longitude = lon
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude {lon:?}"))?;
    Ok(Location::new(latitude, longitude))
}

/// Loads a course config from `path`, or the built-in route.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<CourseConfig> {
    match path {
        Some(path) => CourseConfig::load(path),
        None => {
            log::info!("Using built-in route");
            Ok(vendee_ai::route::default_config())
        }
    }
}

pub fn legs(course: &Course, start: Location) -> Vec<Leg> {
    let mut previous = start;
    let mut cumulative_distance = 0.0;
    course
        .iter()
        .enumerate()
        .map(|(index, checkpoint)| {
            let location = checkpoint.location();
            let distance = distance_on_surface(previous, location);
            let bearing = initial_bearing(previous, location);
            cumulative_distance += distance;
            previous = location;
            Leg {
                index,
                location,
                radius: checkpoint.radius(),
                distance,
                bearing,
                cumulative_distance,
            }
        })
        .collect()
}
