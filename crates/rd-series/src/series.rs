//! E-series identifiers and their strided value tables.

use std::fmt;
use std::str::FromStr;

use rd_core::Real;
use thiserror::Error;

/// Base table shared by E3/E6/E12/E24: every 2nd entry is E12, every 4th is
/// E6 and every 8th is E3. Mantissas are in hundreds (100 == 1.0).
const E24_BASE: [u16; 24] = [
    100, 110, 120, 130, 150, 160, 180, 200, 220, 240, 270, 300, 330, 360, 390, 430, 470, 510, 560,
    620, 680, 750, 820, 910,
];

/// Base table shared by E48/E96/E192: every 2nd entry is E96, every 4th is
/// E48.
const E192_BASE: [u16; 192] = [
    100, 101, 102, 104, 105, 106, 107, 109, 110, 111, 113, 114, 115, 117, 118, 120, 121, 123, 124,
    126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 142, 143, 145, 147, 149, 150, 152, 154, 156,
    158, 160, 162, 164, 165, 167, 169, 172, 174, 176, 178, 180, 182, 184, 187, 189, 191, 193, 196,
    198, 200, 203, 205, 208, 210, 213, 215, 218, 221, 223, 226, 229, 232, 234, 237, 240, 243, 246,
    249, 252, 255, 258, 261, 264, 267, 271, 274, 277, 280, 284, 287, 291, 294, 298, 301, 305, 309,
    312, 316, 320, 324, 328, 332, 336, 340, 344, 348, 352, 357, 361, 365, 370, 374, 379, 383, 388,
    392, 397, 402, 407, 412, 417, 422, 427, 432, 437, 442, 448, 453, 459, 464, 470, 475, 481, 487,
    493, 499, 505, 511, 517, 523, 530, 536, 542, 549, 556, 562, 569, 576, 583, 590, 597, 604, 612,
    619, 626, 634, 642, 649, 657, 665, 673, 681, 690, 698, 706, 715, 723, 732, 741, 750, 759, 768,
    777, 787, 796, 806, 816, 825, 835, 845, 856, 866, 876, 887, 898, 909, 920, 931, 942, 953, 965,
    976, 988,
];

/// One of the seven standard E-series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    E3,
    E6,
    E12,
    E24,
    E48,
    E96,
    E192,
}

impl Series {
    pub const ALL: [Series; 7] = [
        Series::E3,
        Series::E6,
        Series::E12,
        Series::E24,
        Series::E48,
        Series::E96,
        Series::E192,
    ];

    /// Nominal component tolerance as a fraction (E24 = 5% -> 0.05).
    ///
    /// E3 carries the historical 40% band; its modern datasheet label is
    /// usually just "> 20%".
    pub fn tolerance(self) -> Real {
        match self {
            Series::E3 => 0.40,
            Series::E6 => 0.20,
            Series::E12 => 0.10,
            Series::E24 => 0.05,
            Series::E48 => 0.02,
            Series::E96 => 0.01,
            Series::E192 => 0.005,
        }
    }

    /// Human-facing label including the tolerance band.
    pub fn label(self) -> &'static str {
        match self {
            Series::E3 => "E3 (> 20%)",
            Series::E6 => "E6 (20%)",
            Series::E12 => "E12 (10%)",
            Series::E24 => "E24 (5%)",
            Series::E48 => "E48 (2%)",
            Series::E96 => "E96 (1%)",
            Series::E192 => "E192 (0.5%)",
        }
    }

    /// The strided value table for this series.
    pub fn table(self) -> SeriesTable {
        let (base, stride, significant_digits): (&'static [u16], usize, i32) = match self {
            Series::E3 => (&E24_BASE, 8, 2),
            Series::E6 => (&E24_BASE, 4, 2),
            Series::E12 => (&E24_BASE, 2, 2),
            Series::E24 => (&E24_BASE, 1, 2),
            Series::E48 => (&E192_BASE, 4, 3),
            Series::E96 => (&E192_BASE, 2, 3),
            Series::E192 => (&E192_BASE, 1, 3),
        };
        let tol = self.tolerance();
        SeriesTable {
            series: self,
            base,
            stride,
            significant_digits,
            err_low: 1.0 - tol,
            err_high: 1.0 + tol,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::E3 => "E3",
            Series::E6 => "E6",
            Series::E12 => "E12",
            Series::E24 => "E24",
            Series::E48 => "E48",
            Series::E96 => "E96",
            Series::E192 => "E192",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown series '{0}' (expected one of E3, E6, E12, E24, E48, E96, E192)")]
pub struct ParseSeriesError(String);

impl FromStr for Series {
    type Err = ParseSeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E3" => Ok(Series::E3),
            "E6" => Ok(Series::E6),
            "E12" => Ok(Series::E12),
            "E24" => Ok(Series::E24),
            "E48" => Ok(Series::E48),
            "E96" => Ok(Series::E96),
            "E192" => Ok(Series::E192),
            _ => Err(ParseSeriesError(s.to_string())),
        }
    }
}

/// An immutable view over one series' standard mantissas.
///
/// Mantissas are three-digit integers in [100, 999] representing one decade
/// of preferred values; the strided iteration subsamples the shared base
/// table for the coarser series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesTable {
    series: Series,
    base: &'static [u16],
    stride: usize,
    significant_digits: i32,
    err_low: Real,
    err_high: Real,
}

impl SeriesTable {
    pub fn series(&self) -> Series {
        self.series
    }

    /// Mantissas in ascending order; restartable, one decade's worth.
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        self.base.iter().step_by(self.stride).copied()
    }

    /// Number of values per decade (3 for E3, ..., 192 for E192).
    pub fn len(&self) -> usize {
        self.base.len() / self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest mantissa; always 100, the lower edge of the decade window.
    pub fn first(&self) -> u16 {
        self.base[0]
    }

    /// Largest mantissa reachable at this stride.
    pub fn last(&self) -> u16 {
        self.base[self.base.len() - self.stride]
    }

    pub fn significant_digits(&self) -> i32 {
        self.significant_digits
    }

    /// Worst-case component multipliers `(err_low, err_high)` with
    /// `err_low <= 1 <= err_high`.
    pub fn tolerance_bounds(&self) -> (Real, Real) {
        (self.err_low, self.err_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_counts_per_series() {
        let counts = [3usize, 6, 12, 24, 48, 96, 192];
        for (series, count) in Series::ALL.into_iter().zip(counts) {
            let table = series.table();
            assert_eq!(table.len(), count, "{series}");
            assert_eq!(table.values().count(), count, "{series}");
        }
    }

    #[test]
    fn first_is_always_100() {
        for series in Series::ALL {
            assert_eq!(series.table().first(), 100, "{series}");
        }
    }

    #[test]
    fn last_matches_stride_sampling() {
        assert_eq!(Series::E3.table().last(), 470);
        assert_eq!(Series::E6.table().last(), 680);
        assert_eq!(Series::E12.table().last(), 820);
        assert_eq!(Series::E24.table().last(), 910);
        assert_eq!(Series::E48.table().last(), 953);
        assert_eq!(Series::E96.table().last(), 976);
        assert_eq!(Series::E192.table().last(), 988);
    }

    #[test]
    fn values_strictly_increasing_and_in_range() {
        for series in Series::ALL {
            let table = series.table();
            let values: Vec<u16> = table.values().collect();
            for pair in values.windows(2) {
                assert!(pair[0] < pair[1], "{series}: {} !< {}", pair[0], pair[1]);
            }
            assert!(values.iter().all(|&v| (100..=999).contains(&v)));
            assert_eq!(*values.last().unwrap(), table.last());
        }
    }

    #[test]
    fn coarse_series_are_subsets_of_fine() {
        let e24: Vec<u16> = Series::E24.table().values().collect();
        for v in Series::E6.table().values() {
            assert!(e24.contains(&v));
        }
        let e192: Vec<u16> = Series::E192.table().values().collect();
        for v in Series::E48.table().values() {
            assert!(e192.contains(&v));
        }
    }

    #[test]
    fn tolerance_bounds_straddle_unity() {
        for series in Series::ALL {
            let (lo, hi) = series.table().tolerance_bounds();
            assert!(lo < 1.0 && 1.0 < hi, "{series}");
            assert!((hi - 1.0 - (1.0 - lo)).abs() < 1e-12, "{series}");
        }
    }

    #[test]
    fn parse_roundtrip() {
        for series in Series::ALL {
            assert_eq!(series.to_string().parse::<Series>().unwrap(), series);
        }
        assert_eq!("e96".parse::<Series>().unwrap(), Series::E96);
        assert!("E25".parse::<Series>().is_err());
    }
}
