//! Korean lunisolar calendar conversion and Four Pillars (사주) calculation.
//!
//! ```
//! use manseryeok::{BirthInfo, calculate_four_pillars, lunar_to_solar};
//!
//! let date = lunar_to_solar(1992, 9, 29, false)?;
//! assert_eq!(date.to_string(), "1992-10-24");
//!
//! let pillars = calculate_four_pillars(&BirthInfo::lunar(1992, 9, 29, false, 5, 30))?;
//! assert_eq!(pillars.to_string(), "임신연주, 경술월주, 계유일주, 을묘시주");
//! assert_eq!(pillars.to_hanja_string(), "壬申年 庚戌月 癸酉日 乙卯時");
//! # Ok::<(), manseryeok::SajuError>(())
//! ```

mod calendar;
mod consts;
mod ephemeris;
mod error;
mod options;
mod pillars;
mod prelude;
mod sexagenary;
mod solar_terms;
mod types;

pub use calendar::{CALENDAR, CalendarTable, LunarMonth, LunarYear, lunar_to_solar, solar_to_lunar};
pub use consts::*;
pub use error::{Calendar, DateError, InputField, SajuError};
pub use options::{CalculationOptions, TimePolicy, ZiHourRule};
pub use pillars::{
    BirthInfo, FourPillars, FourPillarsDetail, PillarDetail, PillarLabel, PillarLabels, PillarStrings, Position,
    calculate_four_pillars, calculate_four_pillars_with,
};
pub use sexagenary::{Branch, Element, Pillar, Stem, YinYang};
pub use solar_terms::{SolarTerm, solar_term_instant};
pub use types::{LocalDateTime, LunarDate, SolarDate, days_in_month, is_leap_year};
