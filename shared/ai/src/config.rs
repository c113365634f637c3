use crate::course::{Checkpoint, Course};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vendee_api::Location;

pub const DEFAULT_TEAM: &str = "ABoatingAccident";

/// Radius of the return-to-start checkpoint (in kilometres).
pub const DEFAULT_FINISH_RADIUS: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckpointConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Arrival radius (in kilometres).
    pub radius: f64,
}

impl CheckpointConfig {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// Course description, normally loaded from a JSON file.
///
/// The checkpoints are sailed in order. A final checkpoint at the start
/// location is appended by [CourseConfig::build].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseConfig {
    #[serde(default = "default_team")]
    pub team: String,
    pub checkpoints: Vec<CheckpointConfig>,
    #[serde(default = "default_finish_radius")]
    pub finish_radius: f64,
}

fn default_team() -> String {
    DEFAULT_TEAM.to_string()
}

fn default_finish_radius() -> f64 {
    DEFAULT_FINISH_RADIUS
}

impl CourseConfig {
    pub fn from_json(json: &str) -> anyhow::Result<CourseConfig> {
        let config: CourseConfig =
            serde_json::from_str(json).context("Failed to parse course config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<CourseConfig> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read course config {}", path.display()))?;
        let config = Self::from_json(&json).with_context(|| format!("In {}", path.display()))?;
        log::info!(
            "Loaded {} checkpoints for team {:?} from {}",
            config.checkpoints.len(),
            config.team,
            path.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.checkpoints.is_empty() {
            bail!("Course has no checkpoints");
        }
        for (index, checkpoint) in self.checkpoints.iter().enumerate() {
            validate_location(checkpoint.location())
                .with_context(|| format!("Checkpoint {index}"))?;
            if !checkpoint.radius.is_finite() || checkpoint.radius <= 0.0 {
                bail!(
                    "Checkpoint {index}: radius must be positive, got {}",
                    checkpoint.radius
                );
            }
        }
        if !self.finish_radius.is_finite() || self.finish_radius <= 0.0 {
            bail!(
                "Finish radius must be positive, got {}",
                self.finish_radius
            );
        }
        Ok(())
    }

    /// Builds the course, ending with a checkpoint back at `start`.
    pub fn build(&self, start: Location) -> anyhow::Result<Course> {
        self.validate()?;
        validate_location(start).context("Start location")?;
        let checkpoints = self
            .checkpoints
            .iter()
            .map(|c| Checkpoint::new(c.location(), c.radius))
            .chain(std::iter::once(Checkpoint::new(start, self.finish_radius)))
            .collect();
        Ok(Course::new(checkpoints))
    }
}

fn validate_location(location: Location) -> anyhow::Result<()> {
    let Location {
        latitude,
        longitude,
    } = location;
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        bail!("latitude {latitude} out of range");
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        bail!("longitude {longitude} out of range");
    }
    Ok(())
}
