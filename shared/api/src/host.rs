use crate::geo::Location;
use crate::{Instructions, TickState};

/// Wind at a point in space and time (in km/h).
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weather {
    /// Eastward component.
    pub u: f64,
    /// Northward component.
    pub v: f64,
}

impl Weather {
    /// Returns the wind speed (in km/h).
    pub fn speed(&self) -> f64 {
        self.u.hypot(self.v)
    }
}

/// Surface type at a location.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[allow(missing_docs)]
    Sea,
    #[allow(missing_docs)]
    Land,
}

/// Weather forecast provided by the host.
pub trait Forecast {
    /// Returns the forecast wind at `location`, `hours_ahead` hours from now.
    fn weather(&self, location: Location, hours_ahead: f64) -> Weather;
}

impl<F> Forecast for F
where
    F: Fn(Location, f64) -> Weather,
{
    fn weather(&self, location: Location, hours_ahead: f64) -> Weather {
        self(location, hours_ahead)
    }
}

/// Map of the world provided by the host.
pub trait WorldMap {
    /// Returns whether `location` is sea or land.
    fn terrain(&self, location: Location) -> Terrain;
}

impl<F> WorldMap for F
where
    F: Fn(Location) -> Terrain,
{
    fn terrain(&self, location: Location) -> Terrain {
        self(location)
    }
}

/// A ship-controlling bot.
///
/// The host calls [Bot::run] exactly once per tick and never concurrently.
pub trait Bot {
    /// Returns the team name.
    fn team(&self) -> &str;

    /// Returns the instructions for the next tick.
    fn run(
        &mut self,
        state: &TickState,
        forecast: &dyn Forecast,
        world_map: &dyn WorldMap,
    ) -> Instructions;
}
