#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
mod geo;
mod host;

pub use geo::{distance_on_surface, initial_bearing, Location, EARTH_RADIUS_KM};
pub use host::{Bot, Forecast, Terrain, Weather, WorldMap};

use nalgebra::Vector2;

/// A steering command for the next tick.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Steering {
    /// Sail towards a location.
    Location(Location),
    /// Hold a heading (in degrees, clockwise from north).
    Heading(f64),
    /// Follow a direction vector (east, north).
    Vector(Vector2<f64>),
    /// Turn left by the given amount (in degrees).
    Left(f64),
    /// Turn right by the given amount (in degrees).
    Right(f64),
}

/// What the bot wants the vessel to do during the next tick.
///
/// `None` fields leave the corresponding control unchanged.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instructions {
    /// Steering command.
    pub steering: Option<Steering>,
    /// Fraction of full sail, between 0 and 1.
    pub sail: Option<f64>,
}

impl Instructions {
    /// Sail towards `location` using the given fraction of full sail.
    pub fn goto(location: Location, sail: f64) -> Instructions {
        Instructions {
            steering: Some(Steering::Location(location)),
            sail: Some(sail),
        }
    }

    /// Returns the target location, if the steering command is a [Steering::Location].
    pub fn location(&self) -> Option<Location> {
        match self.steering {
            Some(Steering::Location(location)) => Some(location),
            _ => None,
        }
    }
}

/// Kinematic state of the vessel handed to the bot each tick.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickState {
    /// Time since the start of the race (in hours).
    pub time: f64,
    /// Length of this tick (in hours).
    pub dt: f64,
    /// Current position.
    pub location: Location,
    /// Current heading (in degrees, clockwise from north).
    pub heading: f64,
    /// Current speed (in km/h).
    pub speed: f64,
    /// Current heading as a unit vector (east, north).
    pub vector: Vector2<f64>,
}

impl TickState {
    /// Returns the distance the vessel is expected to cover this tick (in kilometres).
    pub fn jump(&self) -> f64 {
        self.dt * self.speed.abs()
    }
}

/// All APIs.
pub mod prelude {
    #[doc(inline)]
    pub use super::geo::*;
    #[doc(inline)]
    pub use super::host::*;
    #[doc(inline)]
    pub use super::{Instructions, Steering, TickState};
    pub use nalgebra::{vector, Vector2};
}
