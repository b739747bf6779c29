//! Ride catalog and load-time status derivation.
//!
//! Rides are loaded once from the embedded CSV catalog. Each ride then gets a
//! random wait estimate, after which rides due for maintenance are forced
//! closed. Nothing is recomputed after load.

use crate::config::classes::{STATUS_CLOSED, STATUS_OPEN};
use crate::config::{MAINTENANCE_SLOTS, MAX_RIDE_WAIT_MINS, MIN_RIDE_WAIT_MINS};
use crate::utils::{
    format_wait_minutes, parse_optional_time_of_day, parse_time_of_day, TimeOfDay,
    TimeOfDayError, NONE_SENTINEL,
};
use log::{debug, info, warn};
use rand::Rng;
use rand_distr::{uniform, Distribution, Uniform};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

static DEFAULT_CATALOG: &str = include_str!("rides.csv");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideStatus {
    Open,
    Closed,
}

impl RideStatus {
    pub fn label(self) -> &'static str {
        match self {
            RideStatus::Open => "OPEN",
            RideStatus::Closed => "CLOSED",
        }
    }

    /// Text-colour class the status element carries.
    pub fn css_class(self) -> &'static str {
        match self {
            RideStatus::Open => STATUS_OPEN,
            RideStatus::Closed => STATUS_CLOSED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitEstimate {
    Unknown,
    Minutes(u32),
}

/// Inclusive `min..=max` bounds of a ride requirement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub name: String,
    pub number: u32,
    pub description: String,
    pub status: RideStatus,
    pub wait: WaitEstimate,
    pub duration_mins: Span<u32>,
    pub weight_kg: Span<u32>,
    pub height_m: Span<f32>,
    pub maintenance: Option<TimeOfDay>,
}

impl Ride {
    /// Text shown in the ride's wait-time element.
    pub fn wait_label(&self) -> String {
        match (self.status, self.wait) {
            (RideStatus::Closed, _) | (_, WaitEstimate::Unknown) => NONE_SENTINEL.to_string(),
            (RideStatus::Open, WaitEstimate::Minutes(mins)) => format_wait_minutes(mins),
        }
    }
}

#[derive(Debug)]
pub enum RideDataError {
    Csv(csv::Error),
    EmptyCatalog,
    InvalidWaitRange(uniform::Error),
    InvalidSchedule(TimeOfDayError),
}

impl fmt::Display for RideDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideDataError::Csv(e) => write!(f, "Failed to read ride catalog: {}", e),
            RideDataError::EmptyCatalog => write!(f, "Ride catalog contains no valid rides"),
            RideDataError::InvalidWaitRange(e) => write!(f, "Invalid wait-time range: {}", e),
            RideDataError::InvalidSchedule(e) => write!(f, "Invalid maintenance slot: {}", e),
        }
    }
}

impl std::error::Error for RideDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RideDataError::Csv(e) => Some(e),
            RideDataError::InvalidWaitRange(e) => Some(e),
            RideDataError::InvalidSchedule(e) => Some(e),
            RideDataError::EmptyCatalog => None,
        }
    }
}

impl From<csv::Error> for RideDataError {
    fn from(e: csv::Error) -> Self {
        RideDataError::Csv(e)
    }
}

/// One catalog line as laid out in the CSV file.
#[derive(Debug, Deserialize)]
struct RideRow {
    name: String,
    number: u32,
    description: String,
    min_duration_mins: u32,
    max_duration_mins: u32,
    min_weight_kg: u32,
    max_weight_kg: u32,
    min_height_m: f32,
    max_height_m: f32,
    maintenance_time: String,
}

impl RideRow {
    fn into_ride(self) -> Result<Ride, String> {
        if self.min_duration_mins > self.max_duration_mins {
            return Err(format!(
                "duration range {}-{} is inverted",
                self.min_duration_mins, self.max_duration_mins
            ));
        }
        if self.min_weight_kg > self.max_weight_kg {
            return Err(format!(
                "weight range {}-{} is inverted",
                self.min_weight_kg, self.max_weight_kg
            ));
        }
        if self.min_height_m.is_nan()
            || self.max_height_m.is_nan()
            || self.min_height_m > self.max_height_m
        {
            return Err(format!(
                "height range {}-{} is invalid",
                self.min_height_m, self.max_height_m
            ));
        }
        let maintenance =
            parse_optional_time_of_day(&self.maintenance_time).map_err(|e| e.to_string())?;

        Ok(Ride {
            name: self.name,
            number: self.number,
            description: self.description,
            status: RideStatus::Open,
            wait: WaitEstimate::Unknown,
            duration_mins: Span {
                min: self.min_duration_mins,
                max: self.max_duration_mins,
            },
            weight_kg: Span {
                min: self.min_weight_kg,
                max: self.max_weight_kg,
            },
            height_m: Span {
                min: self.min_height_m,
                max: self.max_height_m,
            },
            maintenance,
        })
    }
}

/// Read rides from CSV text with a header row.
///
/// Rows that fail to parse, carry an inverted range, or repeat a ride number
/// are skipped with a warning. Fails when no ride survives.
pub fn read_rides_from_csv_string(csv_content: &str) -> Result<Vec<Ride>, RideDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());
    reader.headers()?;

    let mut rides = Vec::new();
    let mut seen_numbers = HashSet::new();

    for (i, record) in reader.deserialize::<RideRow>().enumerate() {
        // Line 1 is the header
        let line = i + 2;
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping ride on line {}: {}", line, e);
                continue;
            }
        };

        let ride = match row.into_ride() {
            Ok(ride) => ride,
            Err(e) => {
                warn!("Skipping ride on line {}: {}", line, e);
                continue;
            }
        };

        // Only rides that survive validation claim their number
        if !seen_numbers.insert(ride.number) {
            warn!("Duplicate ride number {} on line {}, skipping", ride.number, line);
            continue;
        }
        rides.push(ride);
    }

    if rides.is_empty() {
        return Err(RideDataError::EmptyCatalog);
    }
    info!("Loaded {} rides from catalog", rides.len());
    Ok(rides)
}

/// Rides bundled with the site.
pub fn default_rides() -> Result<Vec<Ride>, RideDataError> {
    read_rides_from_csv_string(DEFAULT_CATALOG)
}

/// Preset time slots at which rides go down for maintenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    slots: Vec<TimeOfDay>,
}

impl MaintenanceSchedule {
    pub fn from_slots<S: AsRef<str>>(slots: &[S]) -> Result<Self, TimeOfDayError> {
        let slots = slots
            .iter()
            .map(|s| parse_time_of_day(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[TimeOfDay] {
        &self.slots
    }

    /// First slot equal to `time`, scanning in schedule order.
    pub fn first_match(&self, time: &TimeOfDay) -> Option<&TimeOfDay> {
        self.slots.iter().find(|slot| *slot == time)
    }
}

/// Schedule built from [`MAINTENANCE_SLOTS`].
pub fn default_schedule() -> Result<MaintenanceSchedule, RideDataError> {
    MaintenanceSchedule::from_slots(&MAINTENANCE_SLOTS).map_err(RideDataError::InvalidSchedule)
}

/// Give every ride a uniform random wait in the configured inclusive range.
pub fn derive_wait_times<R: Rng + ?Sized>(
    rides: &mut [Ride],
    rng: &mut R,
) -> Result<(), RideDataError> {
    let wait_dist = Uniform::new_inclusive(MIN_RIDE_WAIT_MINS, MAX_RIDE_WAIT_MINS)
        .map_err(RideDataError::InvalidWaitRange)?;

    for ride in rides.iter_mut() {
        let mins = wait_dist.sample(rng);
        ride.wait = WaitEstimate::Minutes(mins);
        debug!("Ride {} estimated wait: {}", ride.number, ride.wait_label());
    }
    Ok(())
}

/// Close every ride whose maintenance time is in `schedule`, zeroing its wait.
///
/// Returns how many rides were closed.
pub fn apply_maintenance_overrides(rides: &mut [Ride], schedule: &MaintenanceSchedule) -> usize {
    let mut closed = 0;
    for ride in rides.iter_mut() {
        let Some(time) = ride.maintenance else {
            continue;
        };
        if let Some(slot) = schedule.first_match(&time) {
            ride.status = RideStatus::Closed;
            ride.wait = WaitEstimate::Minutes(0);
            closed += 1;
            info!("Ride {} ({}) closed for maintenance at {}", ride.number, ride.name, slot);
        }
    }
    closed
}

/// Load-time pipeline: wait estimates first, then maintenance overrides.
pub fn prepare_rides<R: Rng + ?Sized>(
    mut rides: Vec<Ride>,
    schedule: &MaintenanceSchedule,
    rng: &mut R,
) -> Result<Vec<Ride>, RideDataError> {
    derive_wait_times(&mut rides, rng)?;
    apply_maintenance_overrides(&mut rides, schedule);
    Ok(rides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HEADER: &str = "name,number,description,min_duration_mins,max_duration_mins,min_weight_kg,max_weight_kg,min_height_m,max_height_m,maintenance_time\n";

    fn ride(number: u32, maintenance: &str) -> Ride {
        Ride {
            name: format!("Ride {}", number),
            number,
            description: String::new(),
            status: RideStatus::Open,
            wait: WaitEstimate::Unknown,
            duration_mins: Span { min: 1, max: 2 },
            weight_kg: Span { min: 10, max: 90 },
            height_m: Span { min: 1.2, max: 1.9 },
            maintenance: parse_optional_time_of_day(maintenance).unwrap(),
        }
    }

    fn parse_label_minutes(label: &str) -> u32 {
        let label = label.trim_end_matches(" mins");
        match label.split_once("h ") {
            Some((h, m)) => h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap(),
            None => label.parse().unwrap(),
        }
    }

    #[test]
    fn default_catalog_loads_three_rides() {
        let rides = default_rides().unwrap();
        assert_eq!(rides.len(), 3);
        assert_eq!(rides[0].name, "Carousel of Feels");
        assert_eq!(rides[0].duration_mins, Span { min: 2, max: 3 });
        assert_eq!(rides[1].maintenance.unwrap().to_string(), "14:30:00");
        assert_eq!(rides[2].maintenance, None);
        assert!(rides.iter().all(|r| r.status == RideStatus::Open));
        assert!(rides.iter().all(|r| r.wait_label() == "-"));
    }

    #[test]
    fn catalog_skips_bad_and_duplicate_rows() {
        let csv = format!(
            "{}A,1,ok,1,2,10,90,1.2,1.9,-\n\
             B,1,dup,1,2,10,90,1.2,1.9,-\n\
             C,2,inverted,5,2,10,90,1.2,1.9,-\n\
             D,3,bad time,1,2,10,90,1.2,1.9,25:00:00\n\
             E,four,not a number,1,2,10,90,1.2,1.9,-\n\
             F,5,ok,1,2,10,90,1.2,1.9,09:00:00\n",
            HEADER
        );
        let rides = read_rides_from_csv_string(&csv).unwrap();
        let names: Vec<&str> = rides.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "F"]);
    }

    #[test]
    fn rejected_row_does_not_claim_its_number() {
        let csv = format!(
            "{}Broken,7,inverted,9,2,10,90,1.2,1.9,-\n\
             Bad Slot,8,bad time,1,2,10,90,1.2,1.9,12:99:00\n\
             Fixed,7,ok,2,9,10,90,1.2,1.9,-\n\
             Also Fixed,8,ok,1,2,10,90,1.2,1.9,12:30:00\n",
            HEADER
        );
        let rides = read_rides_from_csv_string(&csv).unwrap();
        let numbers: Vec<(u32, &str)> = rides
            .iter()
            .map(|r| (r.number, r.name.as_str()))
            .collect();
        assert_eq!(numbers, vec![(7, "Fixed"), (8, "Also Fixed")]);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert!(matches!(
            read_rides_from_csv_string(HEADER),
            Err(RideDataError::EmptyCatalog)
        ));
    }

    #[test]
    fn wait_times_stay_in_range_and_match_labels() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rides: Vec<Ride> = (1..=50).map(|n| ride(n, "-")).collect();
        for _ in 0..20 {
            derive_wait_times(&mut rides, &mut rng).unwrap();
            for r in &rides {
                let WaitEstimate::Minutes(mins) = r.wait else {
                    panic!("wait not derived");
                };
                assert!((MIN_RIDE_WAIT_MINS..=MAX_RIDE_WAIT_MINS).contains(&mins));
                assert_eq!(parse_label_minutes(&r.wait_label()), mins);
            }
        }
    }

    #[test]
    fn maintenance_example_closes_matching_rides() {
        let schedule = MaintenanceSchedule::from_slots(&["14:30:00", "17:15:00"]).unwrap();
        let rides = vec![ride(1, "17:15:00"), ride(2, "14:30:00"), ride(3, "-")];
        let mut rng = StdRng::seed_from_u64(42);
        let rides = prepare_rides(rides, &schedule, &mut rng).unwrap();

        for closed in &rides[..2] {
            assert_eq!(closed.status, RideStatus::Closed);
            assert_eq!(closed.wait, WaitEstimate::Minutes(0));
            assert_eq!(closed.wait_label(), "-");
        }
        let open = &rides[2];
        assert_eq!(open.status, RideStatus::Open);
        let mins = parse_label_minutes(&open.wait_label());
        assert!((1..=120).contains(&mins));
        assert_eq!(open.wait, WaitEstimate::Minutes(mins));
    }

    #[test]
    fn overrides_are_idempotent_and_order_independent() {
        let forward = MaintenanceSchedule::from_slots(&["14:30:00", "17:15:00"]).unwrap();
        let reverse = MaintenanceSchedule::from_slots(&["17:15:00", "14:30:00"]).unwrap();
        let base = vec![ride(1, "17:15:00"), ride(2, "10:00:00"), ride(3, "14:30:00")];

        let mut once = base.clone();
        assert_eq!(apply_maintenance_overrides(&mut once, &forward), 2);
        let mut twice = once.clone();
        apply_maintenance_overrides(&mut twice, &forward);
        assert_eq!(once, twice);

        let mut reversed = base;
        apply_maintenance_overrides(&mut reversed, &reverse);
        assert_eq!(once, reversed);
    }

    #[test]
    fn status_labels_and_classes() {
        assert_eq!(RideStatus::Open.label(), "OPEN");
        assert_eq!(RideStatus::Closed.label(), "CLOSED");
        assert_eq!(RideStatus::Open.css_class(), "txt-color-open");
        assert_eq!(RideStatus::Closed.css_class(), "txt-color-close");
    }

    #[test]
    fn default_schedule_parses() {
        let schedule = default_schedule().unwrap();
        assert_eq!(schedule.slots().len(), 2);
    }
}
