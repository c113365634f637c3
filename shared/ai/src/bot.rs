use crate::config::CourseConfig;
use crate::course::{Course, CourseTracker};
use crate::route;
use vendee_api::prelude::*;

/// Sails the course checkpoint by checkpoint.
pub struct CourseBot {
    team: String,
    tracker: CourseTracker,
    current_target: Option<usize>,
    finished: bool,
}

impl CourseBot {
    pub fn new(config: &CourseConfig, start: Location) -> anyhow::Result<CourseBot> {
        let course = config.build(start)?;
        log::info!(
            "Team {:?} sailing {} checkpoints from {}",
            config.team,
            course.len(),
            start
        );
        Ok(CourseBot {
            team: config.team.clone(),
            tracker: CourseTracker::new(course),
            current_target: None,
            finished: false,
        })
    }

    pub fn with_default_route(start: Location) -> anyhow::Result<CourseBot> {
        Self::new(&route::default_config(), start)
    }

    pub fn tracker(&self) -> &CourseTracker {
        &self.tracker
    }

    pub fn course(&self) -> &Course {
        self.tracker.course()
    }

    fn on_new_target(
        &self,
        index: usize,
        target: Location,
        state: &TickState,
        forecast: &dyn Forecast,
        world_map: &dyn WorldMap,
    ) {
        if world_map.terrain(target) == Terrain::Land {
            log::warn!("Checkpoint {} at {} is on land", index, target);
        }
        let wind = forecast.weather(state.location, 0.0);
        log::debug!(
            "t={:.2}h heading for checkpoint {} at {}, {:.0} km away, wind {:.1} km/h",
            state.time,
            index,
            target,
            distance_on_surface(state.location, target),
            wind.speed()
        );
    }
}

impl Bot for CourseBot {
    fn team(&self) -> &str {
        &self.team
    }

    fn run(
        &mut self,
        state: &TickState,
        forecast: &dyn Forecast,
        world_map: &dyn WorldMap,
    ) -> Instructions {
        let advance = self.tracker.advance(state.location, state.speed, state.dt);

        for index in &advance.newly_reached {
            log::info!(
                "t={:.2}h reached checkpoint {}/{}",
                state.time,
                index + 1,
                self.tracker.course().len()
            );
        }

        if let (Some(index), Some(target)) = (advance.target_index, advance.target) {
            if self.current_target != Some(index) {
                self.on_new_target(index, target, state, forecast, world_map);
            }
        } else if !self.finished {
            log::info!("t={:.2}h course complete", state.time);
            self.finished = true;
        }
        self.current_target = advance.target_index;

        Instructions {
            steering: advance.target.map(Steering::Location),
            sail: Some(advance.throttle),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::CheckpointConfig;
    use std::cell::Cell;
    use test_log::test;

    fn config() -> CourseConfig {
        CourseConfig {
            team: "Test".to_string(),
            checkpoints: vec![
                CheckpointConfig {
                    latitude: 0.0,
                    longitude: 1.0,
                    radius: 10.0,
                },
                CheckpointConfig {
                    latitude: 0.0,
                    longitude: 2.0,
                    radius: 10.0,
                },
            ],
            finish_radius: 5.0,
        }
    }

    fn state(latitude: f64, longitude: f64) -> TickState {
        TickState {
            time: 0.0,
            dt: 1.0,
            location: Location::new(latitude, longitude),
            heading: 90.0,
            speed: 10.0,
            vector: vector![1.0, 0.0],
        }
    }

    fn calm(_: Location, _: f64) -> Weather {
        Weather::default()
    }

    fn sea(_: Location) -> Terrain {
        Terrain::Sea
    }

    #[test]
    fn test_steers_to_first_checkpoint() {
        let mut bot = CourseBot::new(&config(), Location::new(0.0, 0.0)).unwrap();
        assert_eq!(bot.team(), "Test");
        let instructions = bot.run(&state(0.0, 0.0), &calm, &sea);
        assert_eq!(instructions.location(), Some(Location::new(0.0, 1.0)));
        assert_eq!(instructions.sail, Some(1.0));
    }

    #[test]
    fn test_full_course() {
        let mut bot = CourseBot::new(&config(), Location::new(0.0, 0.0)).unwrap();
        let instructions = bot.run(&state(0.0, 1.0), &calm, &sea);
        assert_eq!(instructions.location(), Some(Location::new(0.0, 2.0)));
        let instructions = bot.run(&state(0.0, 2.0), &calm, &sea);
        assert_eq!(instructions.location(), Some(Location::new(0.0, 0.0)));
        let instructions = bot.run(&state(0.0, 0.0), &calm, &sea);
        assert_eq!(instructions.steering, None);
        assert!(bot.course().is_complete());
        assert_eq!(bot.course().reached_count(), 3);
    }

    #[test]
    fn test_queries_world_map_once_per_target() {
        let mut bot = CourseBot::new(&config(), Location::new(0.0, 0.0)).unwrap();
        let queries = Cell::new(0);
        let world_map = |_: Location| {
            queries.set(queries.get() + 1);
            Terrain::Land
        };
        bot.run(&state(0.0, 0.0), &calm, &world_map);
        bot.run(&state(0.0, 0.5), &calm, &world_map);
        assert_eq!(queries.get(), 1);
        bot.run(&state(0.0, 1.0), &calm, &world_map);
        assert_eq!(queries.get(), 2);
    }

    #[test]
    fn test_default_route() {
        let start = Location::new(46.470243284275966, -1.788456535301071);
        let mut bot = CourseBot::with_default_route(start).unwrap();
        assert_eq!(bot.team(), crate::config::DEFAULT_TEAM);
        let instructions = bot.run(&state(start.latitude, start.longitude), &calm, &sea);
        assert_eq!(
            instructions.location(),
            Some(Location::new(38.928962, -29.901633))
        );
    }
}
