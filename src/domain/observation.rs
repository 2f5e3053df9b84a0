// Observation domain models
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The measured quantities a station row can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Temperature,
    Conductivity,
    Oxygen,
    Ph,
}

impl Variable {
    pub const ALL: [Variable; 4] = [
        Variable::Temperature,
        Variable::Conductivity,
        Variable::Oxygen,
        Variable::Ph,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::Conductivity => "conductivity",
            Variable::Oxygen => "oxygen",
            Variable::Ph => "ph",
        }
    }

    pub fn parse(name: &str) -> Option<Variable> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

/// One measurement instant from the water station. Sensors drop out
/// independently, so every measurement is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub conductivity: Option<f64>,
    pub oxygen: Option<f64>,
    pub ph: Option<f64>,
}

impl Observation {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            temperature: None,
            conductivity: None,
            oxygen: None,
            ph: None,
        }
    }

    pub fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Temperature => self.temperature,
            Variable::Conductivity => self.conductivity,
            Variable::Oxygen => self.oxygen,
            Variable::Ph => self.ph,
        }
    }

    pub fn set_value(&mut self, variable: Variable, value: Option<f64>) {
        match variable {
            Variable::Temperature => self.temperature = value,
            Variable::Conductivity => self.conductivity = value,
            Variable::Oxygen => self.oxygen = value,
            Variable::Ph => self.ph = value,
        }
    }
}

/// Observations ordered ascending by timestamp. The ordering comes from
/// the fetch's sort parameter and is not re-verified here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    pub rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.rows.first()
    }
}

/// Single air-temperature reading from the meteo dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirReading {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
}

/// Summary shown above the charts: latest water temperature with the
/// matching air temperature, timestamp already in the presentation zone.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReading {
    pub timestamp: DateTime<Tz>,
    pub temperature: Option<f64>,
    pub air_temperature: Option<f64>,
}
