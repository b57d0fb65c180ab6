//! Travel time between two points with a circular expressway
//!
//! Trips start and end inside the rectangle [0, 1] x [0, 0.6]. The
//! expressway is the circle of radius 1/2 around the origin and moving along
//! or inside it takes no time, so a trip either goes straight or drives to
//! the expressway, rides it and drives off again, whichever is faster.

use ordered_float::OrderedFloat;

use crate::simulation::RandomSource;

pub const UNIVERSE_WIDTH: f64 = 1.0;
pub const UNIVERSE_HEIGHT: f64 = 0.6;
pub const EXPRESSWAY_RADIUS: f64 = 0.5;

/// A 2D position in the universe rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Inside or on the expressway circle
    pub fn on_expressway(&self) -> bool {
        self.x * self.x + self.y * self.y <= EXPRESSWAY_RADIUS * EXPRESSWAY_RADIUS
    }

    /// Where the ray from the origin through this point meets the
    /// expressway. Only meaningful for points off the expressway.
    pub fn closest_on_expressway(&self) -> Point {
        let len = (self.x * self.x + self.y * self.y).sqrt();
        if len > 0.0 {
            Point::new(
                self.x / len * EXPRESSWAY_RADIUS,
                self.y / len * EXPRESSWAY_RADIUS,
            )
        } else {
            *self
        }
    }
}

/// Which way a trip went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Direct,
    Expressway,
}

/// A trip from one point to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trip {
    pub from: Point,
    pub to: Point,
}

impl Trip {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Travel time of a trip along with the path taken
#[derive(Debug, Clone, PartialEq)]
pub struct TravelTime {
    pub time: f64,
    pub path: Vec<Point>,
    pub route: Route,
}

fn direct(trip: &Trip) -> TravelTime {
    TravelTime {
        time: trip.from.distance(&trip.to),
        path: vec![trip.from, trip.to],
        route: Route::Direct,
    }
}

fn via_expressway(trip: &Trip) -> TravelTime {
    let (a, b) = (trip.from, trip.to);
    let (time, path) = match (a.on_expressway(), b.on_expressway()) {
        (true, true) => (0.0, vec![a, b]),
        (true, false) => {
            let exit = b.closest_on_expressway();
            (b.distance(&exit), vec![a, exit, b])
        }
        (false, true) => {
            let entry = a.closest_on_expressway();
            (a.distance(&entry), vec![a, entry, b])
        }
        (false, false) => {
            let entry = a.closest_on_expressway();
            let exit = b.closest_on_expressway();
            (
                a.distance(&entry) + b.distance(&exit),
                vec![a, entry, exit, b],
            )
        }
    };
    TravelTime {
        time,
        path,
        route: Route::Expressway,
    }
}

/// The faster of going straight and using the expressway. Ties go straight.
pub fn actual_travel_time(trip: &Trip) -> TravelTime {
    [direct(trip), via_expressway(trip)]
        .into_iter()
        .min_by_key(|t| OrderedFloat(t.time))
        .unwrap_or_else(|| direct(trip))
}

pub fn simulate_trips(trips: &[Trip]) -> Vec<TravelTime> {
    trips.iter().map(actual_travel_time).collect()
}

/// Mean travel time, 0 for no trips
pub fn average_time(times: &[TravelTime]) -> f64 {
    if times.is_empty() {
        return 0.0;
    }
    times.iter().map(|t| t.time).sum::<f64>() / times.len() as f64
}

/// Six hand-picked trips covering every inside/outside combination
pub fn fixed_trips() -> Vec<Trip> {
    let from = [
        (0.45, 0.05),
        (0.04, 0.13),
        (0.56, 0.49),
        (0.20, 0.30),
        (0.54, 0.30),
        (0.00, 0.00),
    ];
    let to = [
        (0.05, 0.45),
        (0.18, 0.32),
        (0.16, 0.50),
        (0.95, 0.40),
        (0.40, 0.59),
        (0.60, 0.45),
    ];
    from.iter()
        .zip(to.iter())
        .map(|(&(ax, ay), &(bx, by))| Trip::new(Point::new(ax, ay), Point::new(bx, by)))
        .collect()
}

/// `n` trips with both ends uniform over the universe rectangle
pub fn random_trips<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Vec<Trip> {
    (0..n)
        .map(|_| {
            let from = Point::new(
                rng.uniform_real(0.0, UNIVERSE_WIDTH),
                rng.uniform_real(0.0, UNIVERSE_HEIGHT),
            );
            let to = Point::new(
                rng.uniform_real(0.0, UNIVERSE_WIDTH),
                rng.uniform_real(0.0, UNIVERSE_HEIGHT),
            );
            Trip::new(from, to)
        })
        .collect()
}
