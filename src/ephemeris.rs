//! Solar position and time-scale offsets for timing the solar terms.
//!
//! The Earth's heliocentric longitude and radius come from the abridged VSOP87
//! series printed in Meeus, *Astronomical Algorithms* (2nd ed., appendix III).
//! Nutation in longitude keeps the leading terms of IAU 2000B. Together they
//! give the apparent solar longitude to about one arcsecond, which the Sun
//! covers in under half a minute.
//!
//! Ephemeris time (TT) is turned into universal time with the Espenak-Meeus
//! polynomials for ΔT. Those are fits to observations up to 2005 and
//! extrapolations after it, so instants late in the century carry a few
//! seconds to a minute of uncertainty.

use std::f64::consts::TAU;

/// Julian date of J2000.0
const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
const SECONDS_PER_DAY: f64 = 86_400.0;
const ARCSEC_PER_DEGREE: f64 = 3_600.0;
const AS2RAD: f64 = TAU / 1_296_000.0;
/// VSOP87 series are tabulated in units of 1e-8 radian or astronomical unit
const VSOP_SCALE: f64 = 1e8;
/// Rotation from the VSOP87 dynamical frame to FK5, in arcseconds
const FK5_CORRECTION: f64 = -0.090_33;
/// Annual aberration at one astronomical unit, in arcseconds
const ABERRATION: f64 = 20.489_8;
/// Nutation coefficients are in units of 0.1 µas
const NUTATION_SCALE: f64 = 1e-7;

/// Rows of `(amplitude, phase, frequency)`; each contributes `a·cos(b + c·τ)`.
type Series = &'static [(f64, f64, f64)];

const L0: Series = &[
    (175_347_046.0, 0.0, 0.0),
    (3_341_656.0, 4.669_256_8, 6283.075_850_0),
    (34_894.0, 4.626_10, 12_566.151_70),
    (3497.0, 2.7441, 5753.3849),
    (3418.0, 2.8289, 3.5231),
    (3136.0, 3.6277, 77_713.7715),
    (2676.0, 4.4181, 7860.4194),
    (2343.0, 6.1352, 3930.2097),
    (1324.0, 0.7425, 11_506.7698),
    (1273.0, 2.0371, 529.6910),
    (1199.0, 1.1096, 1577.3435),
    (990.0, 5.233, 5884.927),
    (902.0, 2.045, 26.298),
    (857.0, 3.508, 398.149),
    (780.0, 1.179, 5223.694),
    (753.0, 2.533, 5507.553),
    (505.0, 4.583, 18_849.228),
    (492.0, 4.205, 775.523),
    (357.0, 2.920, 0.067),
    (317.0, 5.849, 11_790.629),
    (284.0, 1.899, 796.298),
    (271.0, 0.315, 10_977.079),
    (243.0, 0.345, 5486.778),
    (206.0, 4.806, 2544.314),
    (205.0, 1.869, 5573.143),
    (202.0, 2.458, 6069.777),
    (156.0, 0.833, 213.299),
    (132.0, 3.411, 2942.463),
    (126.0, 1.083, 20.775),
    (115.0, 0.645, 0.980),
    (103.0, 0.636, 4694.003),
    (102.0, 0.976, 15_720.839),
    (102.0, 4.267, 7.114),
    (99.0, 6.21, 2146.17),
    (98.0, 0.68, 155.42),
    (86.0, 5.98, 161_000.69),
    (85.0, 1.30, 6275.96),
    (85.0, 3.67, 71_430.70),
    (80.0, 1.81, 17_260.15),
    (79.0, 3.04, 12_036.46),
    (75.0, 1.76, 5088.63),
    (74.0, 3.50, 3154.69),
    (74.0, 4.68, 801.82),
    (70.0, 0.83, 9437.76),
    (62.0, 3.98, 8827.39),
    (61.0, 1.82, 7084.90),
    (57.0, 2.78, 6286.60),
    (56.0, 4.39, 14_143.50),
    (56.0, 3.47, 6279.55),
    (52.0, 0.19, 12_139.55),
    (52.0, 1.33, 1748.02),
    (51.0, 0.28, 5856.48),
    (49.0, 0.49, 1194.45),
    (41.0, 5.37, 8429.24),
    (41.0, 2.40, 19_651.05),
    (39.0, 6.17, 10_447.39),
    (37.0, 6.04, 10_213.29),
    (37.0, 2.57, 1059.38),
    (36.0, 1.71, 2352.87),
    (36.0, 1.78, 6812.77),
    (33.0, 0.59, 17_789.85),
    (30.0, 0.44, 83_996.85),
    (30.0, 2.74, 1349.87),
    (25.0, 3.16, 4690.48),
];
const L1: Series = &[
    (628_331_966_747.0, 0.0, 0.0),
    (206_059.0, 2.678_235, 6283.075_850),
    (4303.0, 2.6351, 12_566.1517),
    (425.0, 1.590, 3.523),
    (119.0, 5.796, 26.298),
    (109.0, 2.966, 1577.344),
    (93.0, 2.59, 18_849.23),
    (72.0, 1.14, 529.69),
    (68.0, 1.87, 398.15),
    (67.0, 4.41, 5507.55),
    (59.0, 2.89, 5223.69),
    (56.0, 2.17, 155.42),
    (45.0, 0.40, 796.30),
    (36.0, 0.47, 775.52),
    (29.0, 2.65, 7.11),
    (21.0, 5.34, 0.98),
    (19.0, 1.85, 5486.78),
    (19.0, 4.97, 213.30),
    (17.0, 2.99, 6275.96),
    (16.0, 0.03, 2544.31),
    (16.0, 1.43, 2146.17),
    (15.0, 1.21, 10_977.08),
    (12.0, 2.83, 1748.02),
    (12.0, 3.26, 5088.63),
    (12.0, 5.27, 1194.45),
    (12.0, 2.08, 4694.00),
    (11.0, 0.77, 553.57),
    (10.0, 1.30, 6286.60),
    (10.0, 4.24, 1349.87),
    (9.0, 2.70, 242.73),
    (9.0, 5.64, 951.72),
    (8.0, 5.30, 2352.87),
    (6.0, 2.65, 9437.76),
    (6.0, 4.67, 4690.48),
];
const L2: Series = &[
    (52_919.0, 0.0, 0.0),
    (8720.0, 1.0721, 6283.0758),
    (309.0, 0.867, 12_566.152),
    (27.0, 0.05, 3.52),
    (16.0, 5.19, 26.30),
    (16.0, 3.68, 155.42),
    (10.0, 0.76, 18_849.23),
    (9.0, 2.06, 77_713.77),
    (7.0, 0.83, 775.52),
    (5.0, 4.66, 1577.34),
    (4.0, 1.03, 7.11),
    (4.0, 3.44, 5573.14),
    (3.0, 5.14, 796.30),
    (3.0, 6.05, 5507.55),
    (3.0, 1.19, 242.73),
    (3.0, 6.12, 529.69),
    (3.0, 0.31, 398.15),
    (3.0, 2.28, 553.57),
    (2.0, 4.38, 5223.69),
    (2.0, 3.75, 0.98),
];
const L3: Series = &[
    (289.0, 5.844, 6283.076),
    (35.0, 0.0, 0.0),
    (17.0, 5.49, 12_566.15),
    (3.0, 5.20, 155.42),
    (1.0, 4.72, 3.52),
    (1.0, 5.30, 18_849.23),
    (1.0, 5.97, 242.73),
];
const L4: Series = &[
    (114.0, 3.142, 0.0),
    (8.0, 4.13, 6283.08),
    (1.0, 3.84, 12_566.15),
];
const L5: Series = &[
    (1.0, 3.14, 0.0),
];
const R0: Series = &[
    (100_013_989.0, 0.0, 0.0),
    (1_670_700.0, 3.098_463_5, 6283.075_850_0),
    (13_956.0, 3.055_25, 12_566.151_70),
    (3084.0, 5.1985, 77_713.7715),
    (1628.0, 1.1739, 5753.3849),
    (1576.0, 2.8469, 7860.4194),
    (925.0, 5.453, 11_506.770),
    (542.0, 4.564, 3930.210),
    (472.0, 3.661, 5884.927),
    (346.0, 0.964, 5507.553),
    (329.0, 5.900, 5223.694),
    (307.0, 0.299, 5573.143),
    (243.0, 4.273, 11_790.629),
    (212.0, 5.847, 1577.344),
    (186.0, 5.022, 10_977.079),
    (175.0, 3.012, 18_849.228),
    (110.0, 5.055, 5486.778),
    (98.0, 0.89, 6069.78),
    (86.0, 5.69, 15_720.84),
    (86.0, 1.27, 161_000.69),
    (65.0, 0.27, 17_260.15),
    (63.0, 0.92, 529.69),
    (57.0, 2.01, 83_996.85),
    (56.0, 5.24, 71_430.70),
    (49.0, 3.25, 2544.31),
    (47.0, 2.58, 775.52),
    (45.0, 5.54, 9437.76),
    (43.0, 6.01, 6275.96),
    (39.0, 5.36, 4694.00),
    (38.0, 2.39, 8827.39),
    (37.0, 0.83, 19_651.05),
    (37.0, 4.90, 12_139.55),
    (36.0, 1.67, 12_036.46),
    (35.0, 1.84, 2942.46),
    (33.0, 0.24, 7084.90),
    (32.0, 0.18, 5088.63),
    (32.0, 1.78, 398.15),
    (28.0, 1.21, 6286.60),
    (28.0, 1.90, 6279.55),
    (26.0, 4.59, 10_447.39),
];
const R1: Series = &[
    (103_019.0, 1.107_490, 6283.075_850),
    (1721.0, 1.0644, 12_566.1517),
    (702.0, 3.142, 0.0),
    (32.0, 1.02, 18_849.23),
    (31.0, 2.84, 5507.55),
    (25.0, 1.32, 5223.69),
    (18.0, 1.42, 1577.34),
    (10.0, 5.91, 10_977.08),
    (9.0, 1.42, 6275.96),
    (9.0, 0.27, 5486.78),
];
const R2: Series = &[
    (4359.0, 5.7846, 6283.0758),
    (124.0, 5.579, 12_566.152),
    (12.0, 3.14, 0.0),
    (9.0, 3.63, 77_713.77),
    (6.0, 1.87, 5573.14),
    (3.0, 5.47, 18_849.23),
];
const R3: Series = &[
    (145.0, 4.273, 6283.076),
    (7.0, 3.92, 12_566.15),
];
const R4: Series = &[
    (4.0, 2.56, 6283.08),
];

const LONGITUDE: [Series; 6] = [L0, L1, L2, L3, L4, L5];
const RADIUS: [Series; 5] = [R0, R1, R2, R3, R4];

/// Leading IAU 2000B lunisolar terms: multipliers of `[l, l', F, D, Ω]`, then the
/// sine coefficient for Δψ and its rate per century.
const NUTATION: [([i8; 5], f64, f64); 13] = [
    ([0, 0, 0, 0, 1], -172_064_161.0, -174_666.0),
    ([0, 0, 2, -2, 2], -13_170_906.0, -1675.0),
    ([0, 0, 2, 0, 2], -2_276_413.0, -234.0),
    ([0, 0, 0, 0, 2], 2_074_554.0, 207.0),
    ([0, 1, 0, 0, 0], 1_475_877.0, -3633.0),
    ([0, 1, 2, -2, 2], -516_821.0, 1226.0),
    ([1, 0, 0, 0, 0], 711_159.0, 73.0),
    ([0, 0, 2, 0, 1], -387_298.0, -367.0),
    ([1, 0, 2, 0, 2], -301_461.0, -36.0),
    ([0, -1, 2, -2, 2], 215_829.0, -494.0),
    ([0, 0, 2, -2, 1], 128_227.0, 137.0),
    ([-1, 0, 2, 0, 2], 123_457.0, 11.0),
    ([-1, 0, 0, 2, 0], 156_994.0, 10.0),
];

/// Sums a VSOP87 coordinate as `Σ τ^i · Σ a·cos(b + c·τ)`.
fn evaluate(series: &[Series], tau: f64) -> f64 {
    let mut power = 1.0;
    let mut total = 0.0;
    for terms in series {
        let sum: f64 = terms.iter().map(|&(a, b, c)| a * (b + c * tau).cos()).sum();
        total += sum * power;
        power *= tau;
    }
    total / VSOP_SCALE
}

/// The Delaunay arguments `[l, l', F, D, Ω]` in radians, `t` in Julian centuries of TT.
#[allow(clippy::suboptimal_flops)]
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = 485_868.249_036 + 1_717_915_923.217_8 * t + 31.879_2 * t2 + 0.051_635 * t3 - 0.000_244_70 * t4;
    let lp = 1_287_104.793_05 + 129_596_581.048_1 * t - 0.553_2 * t2 + 0.000_136 * t3 - 0.000_011_49 * t4;
    let f = 335_779.526_232 + 1_739_527_262.847_8 * t - 12.751_2 * t2 - 0.001_037 * t3 + 0.000_004_17 * t4;
    let d = 1_072_260.703_69 + 1_602_961_601.209_0 * t - 6.370_6 * t2 + 0.006_593 * t3 - 0.000_031_69 * t4;
    let om = 450_160.398_036 - 6_962_890.543_1 * t + 7.472_2 * t2 + 0.007_702 * t3 - 0.000_059_39 * t4;

    [l, lp, f, d, om].map(|arcsec| arcsec * AS2RAD)
}

/// Nutation in longitude (Δψ) in arcseconds.
pub(crate) fn nutation_in_longitude(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let sum: f64 = NUTATION
        .iter()
        .map(|(multipliers, sine, rate)| {
            let arg: f64 = multipliers.iter().zip(&args).map(|(&n, &a)| f64::from(n) * a).sum();
            (sine + rate * t) * arg.sin()
        })
        .sum();
    sum * NUTATION_SCALE
}

/// Apparent geocentric longitude of the Sun in degrees, `0..360`, at Julian
/// ephemeris date `jde` (TT).
pub(crate) fn apparent_solar_longitude(jde: f64) -> f64 {
    let t = (jde - J2000) / DAYS_PER_CENTURY;
    let tau = t / 10.0;
    let earth = evaluate(&LONGITUDE, tau).to_degrees();
    let radius = evaluate(&RADIUS, tau);
    let correction = FK5_CORRECTION + nutation_in_longitude(t) - ABERRATION / radius;
    (earth + 180.0 + correction / ARCSEC_PER_DEGREE).rem_euclid(360.0)
}

/// ΔT = TT − UT in seconds at a decimal Gregorian year.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3) - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.334_5 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2) - 0.562_8 * (2150.0 - year)
    }
}

/// Converts a Julian ephemeris date (TT) to a Julian date in UT.
pub(crate) fn universal_time(jde: f64) -> f64 {
    let year = 2000.0 + (jde - J2000) / DAYS_PER_JULIAN_YEAR;
    jde - delta_t_seconds(year) / SECONDS_PER_DAY
}
