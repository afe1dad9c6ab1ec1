//! Vehicle classes and how much they suffer on poor road surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Road surface quality, bucketed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBucket {
  High,
  Medium,
  Low,
}

impl QualityBucket {
  pub const ALL: [QualityBucket; 3] = [QualityBucket::High, QualityBucket::Medium, QualityBucket::Low];

  pub fn of(quality: f64) -> Self {
    if quality >= 0.85 {
      QualityBucket::High
    } else if quality >= 0.75 {
      QualityBucket::Medium
    } else {
      QualityBucket::Low
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
  /// Copes with narrow and rough roads.
  #[serde(alias = "boda")]
  Motorcycle,
  /// Needs good surfaces.
  #[serde(alias = "bajaji")]
  ThreeWheeler,
}

impl Default for VehicleClass {
  fn default() -> Self {
    VehicleClass::Motorcycle
  }
}

impl VehicleClass {
  pub const ALL: [VehicleClass; 2] = [VehicleClass::Motorcycle, VehicleClass::ThreeWheeler];

  /// Cost multiplier for traveling on a road of the given quality. Good roads are never penalized.
  pub fn penalty(self, bucket: QualityBucket) -> f64 {
    match (self, bucket) {
      (_, QualityBucket::High) => 1.0,
      (VehicleClass::Motorcycle, QualityBucket::Medium) => 1.1,
      (VehicleClass::Motorcycle, QualityBucket::Low) => 1.3,
      (VehicleClass::ThreeWheeler, QualityBucket::Medium) => 1.3,
      (VehicleClass::ThreeWheeler, QualityBucket::Low) => 1.8,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      VehicleClass::Motorcycle => "motorcycle",
      VehicleClass::ThreeWheeler => "three_wheeler",
    }
  }
}

impl fmt::Display for VehicleClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown vehicle class `{0}`, expected `motorcycle` or `three_wheeler`")]
pub struct UnknownVehicleClass(pub String);

impl FromStr for VehicleClass {
  type Err = UnknownVehicleClass;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "motorcycle" | "boda" => Ok(VehicleClass::Motorcycle),
      "three_wheeler" | "three-wheeler" | "bajaji" => Ok(VehicleClass::ThreeWheeler),
      _ => Err(UnknownVehicleClass(String::from(s))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;

  #[rstest]
  #[case(1.0, QualityBucket::High)]
  #[case(0.85, QualityBucket::High)]
  #[case(0.849, QualityBucket::Medium)]
  #[case(0.75, QualityBucket::Medium)]
  #[case(0.7499, QualityBucket::Low)]
  #[case(0.0, QualityBucket::Low)]
  fn test_quality_bucket(#[case] quality: f64, #[case] expected: QualityBucket) {
    assert_eq!(QualityBucket::of(quality), expected);
  }

  #[rstest]
  fn test_penalty_grows_as_quality_worsens(
    #[values(VehicleClass::Motorcycle, VehicleClass::ThreeWheeler)] vehicle: VehicleClass,
  ) {
    assert_eq!(vehicle.penalty(QualityBucket::High), 1.0);
    assert!(vehicle.penalty(QualityBucket::Medium) > vehicle.penalty(QualityBucket::High));
    assert!(vehicle.penalty(QualityBucket::Low) > vehicle.penalty(QualityBucket::Medium));
  }

  #[rstest]
  #[case(QualityBucket::Medium)]
  #[case(QualityBucket::Low)]
  fn test_three_wheeler_suffers_more(#[case] bucket: QualityBucket) {
    assert!(VehicleClass::ThreeWheeler.penalty(bucket) > VehicleClass::Motorcycle.penalty(bucket));
  }

  #[test]
  fn test_parse() {
    assert_eq!("boda".parse::<VehicleClass>(), Ok(VehicleClass::Motorcycle));
    assert_eq!("Three-Wheeler".parse::<VehicleClass>(), Ok(VehicleClass::ThreeWheeler));
    assert_eq!(
      "truck".parse::<VehicleClass>(),
      Err(UnknownVehicleClass(String::from("truck")))
    );

    for vehicle in VehicleClass::ALL.iter() {
      assert_eq!(vehicle.to_string().parse::<VehicleClass>(), Ok(*vehicle));
    }
  }
}
