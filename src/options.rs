//! Options that tune how a birth moment is turned into pillars.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES, MIN_UTC_OFFSET_MINUTES, MINUTES_PER_DEGREE};
use crate::error::{InputField, SajuError, check_range};

const MAX_LONGITUDE: f64 = 180.0;

/// Which clock the day and hour pillars are read from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimePolicy {
    /// Civil time as given.
    #[default]
    Standard,
    /// Local mean solar time at `longitude` (degrees east, negative west).
    TrueSolar { longitude: f64 },
}

/// Where the day boundary falls inside the 자 hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZiHourRule {
    /// The day changes at 00:00; 23:xx belongs to the current day.
    #[default]
    Midnight,
    /// The day changes at 23:00; 23:xx takes the next day's pillars.
    ZiStart,
    /// 야자시: the day changes at 00:00, but 23:xx takes the 자 hour stem of the
    /// next day while keeping the current day pillar.
    LateZi,
}

/// Options for [`crate::calculate_four_pillars_with`].
///
/// Every field has a default, so partial documents deserialize:
///
/// ```
/// use manseryeok::{CalculationOptions, ZiHourRule};
///
/// let options: CalculationOptions = serde_json::from_str(r#"{"ziHourRule":"ziStart"}"#).unwrap();
/// assert_eq!(options.zi_hour_rule, ZiHourRule::ZiStart);
/// assert_eq!(options.utc_offset_minutes, 540);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationOptions {
    pub time_policy: TimePolicy,
    pub zi_hour_rule: ZiHourRule,
    /// Offset of the civil time zone from UTC, in minutes
    pub utc_offset_minutes: i32,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            time_policy: TimePolicy::Standard,
            zi_hour_rule: ZiHourRule::Midnight,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl CalculationOptions {
    /// Checks the longitude and UTC offset ranges.
    ///
    /// # Errors
    /// Returns `SajuError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<(), SajuError> {
        check_range(
            InputField::UtcOffset,
            self.utc_offset_minutes,
            MIN_UTC_OFFSET_MINUTES,
            MAX_UTC_OFFSET_MINUTES,
        )?;
        if let TimePolicy::TrueSolar { longitude } = self.time_policy {
            // NaN fails the range check too
            if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
                return Err(SajuError::InvalidInput {
                    field: InputField::Longitude,
                    value: longitude,
                    min: -MAX_LONGITUDE,
                    max: MAX_LONGITUDE,
                });
            }
        }
        Ok(())
    }

    /// Minutes to add to civil time to reach the clock the day and hour pillars use.
    ///
    /// Zero for [`TimePolicy::Standard`]. For [`TimePolicy::TrueSolar`], four minutes per
    /// degree between `longitude` and the zone meridian, rounded to the nearest minute.
    #[allow(clippy::cast_possible_truncation)]
    pub fn correction_minutes(&self) -> i64 {
        match self.time_policy {
            TimePolicy::Standard => 0,
            TimePolicy::TrueSolar { longitude } => {
                let meridian = f64::from(self.utc_offset_minutes) / MINUTES_PER_DEGREE;
                ((longitude - meridian) * MINUTES_PER_DEGREE).round() as i64
            }
        }
    }
}
