//! Normalized birth input.
//!
//! The engine never performs solar→lunar conversion; it consumes the output
//! of an upstream calendar normalizer as-is. Ranges are re-validated once
//! here and the engine fails fast instead of clamping.

use crate::error::TuViError;
use serde::Serialize;
use tuvi_canchi::{CanChi, Chi, canchi_from_year};

/// Birth gender, used only by direction-reversed auxiliary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

/// A normalized lunar birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthInput {
    /// Lunar year (calendar year the lunar year began in).
    pub year: i32,
    /// Lunar month, 1..=12.
    pub month: u8,
    /// Lunar day, 1..=30.
    pub day: u8,
    /// True when the month is the intercalary (leap) month.
    pub leap_month: bool,
    /// Two-hour birth slot as an Earthly Branch.
    pub hour: Chi,
    pub gender: Gender,
}

impl BirthInput {
    /// Validate the cyclic domains. The lunar calendar itself guarantees
    /// these upstream; an out-of-range value here means a broken caller.
    pub fn validate(&self) -> Result<(), TuViError> {
        if !(1..=12).contains(&self.month) {
            return Err(TuViError::InvalidInput("lunar month must be 1..=12"));
        }
        if !(1..=30).contains(&self.day) {
            return Err(TuViError::InvalidInput("lunar day must be 1..=30"));
        }
        Ok(())
    }

    /// Stem-branch pair of the birth year.
    pub fn year_canchi(&self) -> CanChi {
        canchi_from_year(self.year)
    }

    /// Thuận (forward) ring direction: dương nam / âm nữ.
    ///
    /// Yang-year males and yin-year females run the gender-sensitive rings
    /// forward; the other two combinations run them backward.
    pub fn is_thuan(&self) -> bool {
        let duong_year = self.year_canchi().can.is_duong();
        match self.gender {
            Gender::Male => duong_year,
            Gender::Female => !duong_year,
        }
    }
}
