use vendee_api::{distance_on_surface, Location};

/// Travel distances at or below this (in kilometres) count as standing still.
const MIN_JUMP: f64 = 1e-9;

/// A waypoint the vessel has to pass within `radius` of.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    location: Location,
    radius: f64,
    reached: bool,
}

impl Checkpoint {
    /// `radius` is in kilometres.
    pub fn new(location: Location, radius: f64) -> Self {
        Self {
            location,
            radius,
            reached: false,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn reached(&self) -> bool {
        self.reached
    }
}

/// Ordered list of checkpoints. The order is fixed at construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Course {
    checkpoints: Vec<Checkpoint>,
}

impl Course {
    pub fn new(checkpoints: Vec<Checkpoint>) -> Self {
        Self { checkpoints }
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Checkpoint> {
        self.checkpoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> + '_ {
        self.checkpoints.iter()
    }

    /// Index of the first checkpoint not yet reached.
    pub fn next_index(&self) -> Option<usize> {
        self.checkpoints.iter().position(|c| !c.reached)
    }

    pub fn reached_count(&self) -> usize {
        self.checkpoints.iter().filter(|c| c.reached).count()
    }

    pub fn is_complete(&self) -> bool {
        self.next_index().is_none()
    }
}

/// Result of one [CourseTracker::advance] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Advance {
    /// Where to steer, or `None` once every checkpoint has been reached.
    pub target: Option<Location>,
    /// Course index of `target`.
    pub target_index: Option<usize>,
    /// Fraction of full sail, in `[0, 1]`.
    pub throttle: f64,
    /// Checkpoints that were reached during this call, in course order.
    pub newly_reached: Vec<usize>,
}

/// Steers towards the first unreached checkpoint and slows down near it.
#[derive(Clone, Debug)]
pub struct CourseTracker {
    course: Course,
}

impl CourseTracker {
    pub fn new(course: Course) -> Self {
        Self { course }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Evaluates one tick.
    ///
    /// Checkpoints are scanned in course order. Every checkpoint up to and
    /// including the first unreached one is tested for arrival, and the scan
    /// stops at that first unreached checkpoint, which becomes the target.
    /// Checkpoints after it are never looked at, so the course is always
    /// sailed strictly in order.
    ///
    /// `speed` is in km/h and `tick_duration` in hours.
    pub fn advance(&mut self, location: Location, speed: f64, tick_duration: f64) -> Advance {
        let jump = tick_duration * speed.abs();
        let mut throttle = 1.0;
        let mut newly_reached = vec![];

        for (index, checkpoint) in self.course.checkpoints.iter_mut().enumerate() {
            let dist = distance_on_surface(location, checkpoint.location);
            throttle = throttle_for(dist, checkpoint.radius, jump);

            if dist < checkpoint.radius && !checkpoint.reached {
                checkpoint.reached = true;
                newly_reached.push(index);
            }

            if !checkpoint.reached {
                return Advance {
                    target: Some(checkpoint.location),
                    target_index: Some(index),
                    throttle,
                    newly_reached,
                };
            }
        }

        Advance {
            target: None,
            target_index: None,
            throttle,
            newly_reached,
        }
    }
}

/// Full sail unless the checkpoint is within reach this tick, in which case
/// sail is cut so that one tick covers roughly one radius.
fn throttle_for(dist: f64, radius: f64, jump: f64) -> f64 {
    if !jump.is_finite() || jump <= MIN_JUMP {
        return 1.0;
    }
    if dist < 2.0 * radius + jump {
        let throttle = (radius / jump).min(1.0);
        if throttle.is_finite() {
            throttle.clamp(0.0, 1.0)
        } else {
            1.0
        }
    } else {
        1.0
    }
}
