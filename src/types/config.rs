//! Configuration structures for the elevator simulator
//!
//! This module contains the simulation configuration structure, the partial
//! update applied by `configure`, command line arguments, and validation logic.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default values
pub mod defaults {
    /// Number of floors in the building
    pub const FLOOR_COUNT: usize = 10;
    /// Number of elevator cars
    pub const ELEVATOR_COUNT: usize = 2;
    /// Passengers each car can hold
    pub const CAPACITY: usize = 5;
    /// Simulated seconds for a car to travel one floor
    pub const SECONDS_PER_FLOOR: u64 = 1;
    /// Simulated seconds a car dwells before loading
    pub const SECONDS_PER_PICKUP: u64 = 1;
    /// Simulated seconds between passenger batches
    pub const SECONDS_PER_PASSENGER_BATCH: u64 = 1;
    /// Passengers created per batch
    pub const PEOPLE_PER_BATCH: usize = 1;
    /// Total passengers to deliver before the run ends
    pub const TARGET_PEOPLE: usize = 40;
    /// Safety bound on simulated seconds for the cadenced runner
    pub const MAX_SIMULATED_SECONDS: u64 = 100_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "elevator-sim",
    version = "0.1.0",
    about = "Elevator Dispatch Simulator - Simulates a fleet of elevators serving random passengers",
    long_about = "Simulates a building with a fleet of elevators. Passengers appear on random floors, are dispatched to the best-positioned car, board, ride, and alight until a target number of passengers has been delivered.

EXAMPLES:
    # Run with default settings
    elevator-sim

    # Use a configuration file
    elevator-sim --config building.json

    # Override specific settings
    elevator-sim --floor-count 20 --elevator-count 4 --target-people 200

    # Generate configuration template
    elevator-sim --print-config > building.json

    # Validate configuration without running
    elevator-sim --config building.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of floors in the building
    #[arg(
        long,
        help = "Number of floors",
        long_help = "Number of floors in the building. Must be at least 2. Default: 10"
    )]
    pub floor_count: Option<usize>,

    /// Number of elevator cars
    #[arg(long, help = "Number of elevators")]
    pub elevator_count: Option<usize>,

    /// Passengers per car
    #[arg(long, help = "Capacity of each elevator")]
    pub capacity: Option<usize>,

    /// Simulated seconds per floor travelled
    #[arg(long, help = "Simulated seconds per floor travelled")]
    pub seconds_per_floor: Option<u64>,

    /// Simulated seconds of dwell before loading
    #[arg(long, help = "Simulated seconds of dwell before loading")]
    pub seconds_per_pickup: Option<u64>,

    /// Simulated seconds between passenger batches
    #[arg(long, help = "Simulated seconds between passenger batches")]
    pub seconds_per_batch: Option<u64>,

    /// Passengers created per batch
    #[arg(long, help = "Passengers created per batch")]
    pub people_per_batch: Option<usize>,

    /// Passengers to deliver before the run ends
    #[arg(
        long,
        help = "Total passengers to deliver",
        long_help = "The run ends once this many passengers have reached their destination. Default: 40"
    )]
    pub target_people: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Upper bound on simulated seconds
    #[arg(long, help = "Stop after this many simulated seconds")]
    pub max_seconds: Option<u64>,

    /// Drive the engine one full tick at a time instead of by timing cadence
    #[arg(long, help = "Run tick-by-tick instead of using the timing parameters")]
    pub lockstep: bool,

    /// Print the final report as JSON
    #[arg(long, help = "Print the final report as JSON")]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

impl CliArgs {
    /// Collect the configuration overrides given on the command line
    pub fn overrides(&self) -> ConfigUpdate {
        ConfigUpdate {
            floor_count: self.floor_count,
            elevator_count: self.elevator_count,
            capacity: self.capacity,
            seconds_per_floor: self.seconds_per_floor,
            seconds_per_pickup: self.seconds_per_pickup,
            seconds_per_passenger_batch: self.seconds_per_batch,
            people_per_batch: self.people_per_batch,
            target_people: self.target_people,
            seed: self.seed,
            max_simulated_seconds: self.max_seconds,
        }
    }
}

/// Partial configuration
///
/// Used both as the on-disk configuration file format and as the argument to
/// `SimulationEngine::configure`. Unset fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigUpdate {
    /// Number of floors in the building
    pub floor_count: Option<usize>,
    /// Number of elevator cars
    pub elevator_count: Option<usize>,
    /// Passengers each car can hold
    pub capacity: Option<usize>,
    /// Simulated seconds for a car to travel one floor
    pub seconds_per_floor: Option<u64>,
    /// Simulated seconds a car dwells before loading
    pub seconds_per_pickup: Option<u64>,
    /// Simulated seconds between passenger batches
    pub seconds_per_passenger_batch: Option<u64>,
    /// Passengers created per batch
    pub people_per_batch: Option<usize>,
    /// Total passengers to deliver
    pub target_people: Option<usize>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Safety bound on simulated seconds
    pub max_simulated_seconds: Option<u64>,
}

impl ConfigUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the floor count
    pub fn floor_count(mut self, value: usize) -> Self {
        self.floor_count = Some(value);
        self
    }

    /// Set the elevator count
    pub fn elevator_count(mut self, value: usize) -> Self {
        self.elevator_count = Some(value);
        self
    }

    /// Set the per-car capacity
    pub fn capacity(mut self, value: usize) -> Self {
        self.capacity = Some(value);
        self
    }

    /// Set the number of passengers created per batch
    pub fn people_per_batch(mut self, value: usize) -> Self {
        self.people_per_batch = Some(value);
        self
    }

    /// Set the target number of delivered passengers
    pub fn target_people(mut self, value: usize) -> Self {
        self.target_people = Some(value);
        self
    }

    /// Set the random seed
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Set all three timing parameters at once
    pub fn timing(mut self, per_floor: u64, per_pickup: u64, per_batch: u64) -> Self {
        self.seconds_per_floor = Some(per_floor);
        self.seconds_per_pickup = Some(per_pickup);
        self.seconds_per_passenger_batch = Some(per_batch);
        self
    }

    /// Whether the update leaves every field unchanged
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Configuration for an elevator simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Number of floors in the building, numbered from 1
    pub floor_count: usize,

    /// Number of elevator cars
    pub elevator_count: usize,

    /// Passengers each car can hold
    pub capacity: usize,

    /// Simulated seconds for a car to travel one floor
    pub seconds_per_floor: u64,

    /// Simulated seconds a car dwells with its door open before loading
    pub seconds_per_pickup: u64,

    /// Simulated seconds between passenger batches
    pub seconds_per_passenger_batch: u64,

    /// Passengers created per batch
    pub people_per_batch: usize,

    /// Total passengers to deliver before the run ends
    pub target_people: usize,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Safety bound on simulated seconds for the cadenced runner
    pub max_simulated_seconds: u64,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Fewer than two floors
    #[error("Floor count must be at least 2, got {0}")]
    InvalidFloorCount(usize),

    /// No elevators
    #[error("Elevator count must be greater than 0, got {0}")]
    InvalidElevatorCount(usize),

    /// Cars that cannot carry anyone
    #[error("Capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// A timing parameter of zero seconds
    #[error("Invalid timing for {field}: {value} (must be greater than 0)")]
    InvalidTiming {
        /// Name of the timing field
        field: String,
        /// The invalid value
        value: u64,
    },

    /// Empty passenger batches
    #[error("People per batch must be greater than 0, got {0}")]
    InvalidBatchSize(usize),

    /// Nothing to deliver
    #[error("Target people must be greater than 0, got {0}")]
    InvalidTargetPeople(usize),

    /// Runner bound of zero seconds
    #[error("Max simulated seconds must be greater than 0, got {0}")]
    InvalidMaxSimulatedSeconds(u64),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            floor_count: defaults::FLOOR_COUNT,
            elevator_count: defaults::ELEVATOR_COUNT,
            capacity: defaults::CAPACITY,
            seconds_per_floor: defaults::SECONDS_PER_FLOOR,
            seconds_per_pickup: defaults::SECONDS_PER_PICKUP,
            seconds_per_passenger_batch: defaults::SECONDS_PER_PASSENGER_BATCH,
            people_per_batch: defaults::PEOPLE_PER_BATCH,
            target_people: defaults::TARGET_PEOPLE,
            seed: None,
            max_simulated_seconds: defaults::MAX_SIMULATED_SECONDS,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(&args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Ok(config.merged(&args.overrides()))
    }

    /// Load configuration from a JSON file, filling unset fields with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigUpdate = serde_json::from_str(&content)?;
                Ok(Self::default().merged(&config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Return a copy of this configuration with the update's set fields applied
    pub fn merged(&self, update: &ConfigUpdate) -> Self {
        Self {
            floor_count: update.floor_count.unwrap_or(self.floor_count),
            elevator_count: update.elevator_count.unwrap_or(self.elevator_count),
            capacity: update.capacity.unwrap_or(self.capacity),
            seconds_per_floor: update.seconds_per_floor.unwrap_or(self.seconds_per_floor),
            seconds_per_pickup: update.seconds_per_pickup.unwrap_or(self.seconds_per_pickup),
            seconds_per_passenger_batch: update
                .seconds_per_passenger_batch
                .unwrap_or(self.seconds_per_passenger_batch),
            people_per_batch: update.people_per_batch.unwrap_or(self.people_per_batch),
            target_people: update.target_people.unwrap_or(self.target_people),
            seed: update.seed.or(self.seed),
            max_simulated_seconds: update
                .max_simulated_seconds
                .unwrap_or(self.max_simulated_seconds),
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.floor_count < 2 {
            return Err(ConfigValidationError::InvalidFloorCount(self.floor_count));
        }

        if self.elevator_count == 0 {
            return Err(ConfigValidationError::InvalidElevatorCount(self.elevator_count));
        }

        if self.capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity(self.capacity));
        }

        self.validate_timing("seconds_per_floor", self.seconds_per_floor)?;
        self.validate_timing("seconds_per_pickup", self.seconds_per_pickup)?;
        self.validate_timing("seconds_per_passenger_batch", self.seconds_per_passenger_batch)?;

        if self.people_per_batch == 0 {
            return Err(ConfigValidationError::InvalidBatchSize(self.people_per_batch));
        }

        if self.target_people == 0 {
            return Err(ConfigValidationError::InvalidTargetPeople(self.target_people));
        }

        if self.max_simulated_seconds == 0 {
            return Err(ConfigValidationError::InvalidMaxSimulatedSeconds(
                self.max_simulated_seconds,
            ));
        }

        Ok(())
    }

    /// Helper method to validate timing values
    fn validate_timing(&self, field: &str, value: u64) -> Result<(), ConfigValidationError> {
        if value == 0 {
            return Err(ConfigValidationError::InvalidTiming { field: field.to_string(), value });
        }
        Ok(())
    }

    /// Top floor of the building
    pub fn top_floor(&self) -> usize {
        self.floor_count
    }

    /// Timing parameters as (per floor, per pickup, per batch)
    pub fn timing(&self) -> (u64, u64, u64) {
        (self.seconds_per_floor, self.seconds_per_pickup, self.seconds_per_passenger_batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.floor_count, 10);
        assert_eq!(config.elevator_count, 2);
        assert_eq!(config.capacity, 5);
        assert_eq!(config.timing(), (1, 1, 1));
        assert_eq!(config.people_per_batch, 1);
        assert_eq!(config.target_people, 40);
        assert!(config.seed.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec!["test", "--floor-count", "20", "--capacity", "8", "--seed", "42"];
        let cli_args = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(cli_args.floor_count, Some(20));
        assert_eq!(cli_args.capacity, Some(8));
        assert_eq!(cli_args.seed, Some(42));
        assert!(!cli_args.dry_run);

        let config = SimulationConfig::from_cli_args(&cli_args).unwrap();
        assert_eq!(config.floor_count, 20);
        assert_eq!(config.capacity, 8);
        assert_eq!(config.elevator_count, 2);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_cli_seconds_per_batch_maps_to_config() {
        let args = vec!["test", "--seconds-per-batch", "3", "--max-seconds", "500"];
        let cli_args = CliArgs::try_parse_from(args).unwrap();
        let config = SimulationConfig::from_cli_args(&cli_args).unwrap();
        assert_eq!(config.seconds_per_passenger_batch, 3);
        assert_eq!(config.max_simulated_seconds, 500);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = SimulationConfig::default();
        let merged = base.merged(&ConfigUpdate::new().capacity(3).target_people(7));

        assert_eq!(merged.capacity, 3);
        assert_eq!(merged.target_people, 7);
        assert_eq!(merged.floor_count, base.floor_count);
        assert_eq!(merged.elevator_count, base.elevator_count);

        assert_eq!(base.merged(&ConfigUpdate::new()), base);
        assert!(ConfigUpdate::new().is_empty());
        assert!(!ConfigUpdate::new().seed(1).is_empty());
    }

    #[test]
    fn test_validation_floor_count() {
        let config = SimulationConfig { floor_count: 1, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidFloorCount(1)));

        let config = SimulationConfig { floor_count: 2, ..SimulationConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_elevators_and_capacity() {
        let config = SimulationConfig { elevator_count: 0, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidElevatorCount(0)));

        let config = SimulationConfig { capacity: 0, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidCapacity(0)));
    }

    #[test]
    fn test_validation_timing() {
        let config = SimulationConfig { seconds_per_pickup: 0, ..SimulationConfig::default() };
        match config.validate() {
            Err(ConfigValidationError::InvalidTiming { field, value }) => {
                assert_eq!(field, "seconds_per_pickup");
                assert_eq!(value, 0);
            }
            other => panic!("unexpected validation result: {:?}", other),
        }
    }

    #[test]
    fn test_validation_demand() {
        let config = SimulationConfig { people_per_batch: 0, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidBatchSize(0)));

        let config = SimulationConfig { target_people: 0, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTargetPeople(0)));

        let config = SimulationConfig { max_simulated_seconds: 0, ..SimulationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxSimulatedSeconds(0)));
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "floor_count": 15,
            "elevator_count": 3,
            "target_people": 100
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.floor_count, 15);
        assert_eq!(config.elevator_count, 3);
        assert_eq!(config.target_people, 100);
        assert_eq!(config.capacity, defaults::CAPACITY);
    }

    #[test]
    fn test_config_file_errors() {
        let missing = SimulationConfig::from_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

        let yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let result = SimulationConfig::from_file(yaml.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_negative_values_rejected_by_parser() {
        use std::io::Write;

        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{ "capacity": -1 }"#).unwrap();
        temp_file.flush().unwrap();

        let result = SimulationConfig::from_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = SimulationConfig { seed: Some(9), ..SimulationConfig::default() };
        let json = config.print_json().unwrap();
        assert!(json.contains("\"floor_count\": 10"));

        let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
