//! The 60-term sexagenary cycle (Lục Thập Hoa Giáp) and nạp âm elements.
//!
//! The cycle pairs stems and branches in lockstep: position n carries stem
//! n mod 10 and branch n mod 12. The epoch is CE 1984 = Giáp Tý (position 0).
//! Nạp âm assigns one element to each consecutive pair of positions
//! (30 groups over the 60 terms).

use crate::can::Can;
use crate::chi::Chi;
use crate::ngu_hanh::NguHanh;
use serde::Serialize;

/// A stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CanChi {
    pub can: Can,
    pub chi: Chi,
}

/// Reference epoch: CE 1984 = Giáp Tý (cycle position 0).
pub const CANCHI_EPOCH_YEAR: i32 = 1984;

/// Nạp âm element for each of the 30 sexagenary pair-groups, in cycle order
/// (group 0 = Giáp Tý / Ất Sửu = Hải Trung Kim, ... group 29 = Nhâm Tuất /
/// Quý Hợi = Đại Hải Thủy).
const NAP_AM_TABLE: [NguHanh; 30] = [
    NguHanh::Kim,  // Giáp Tý, Ất Sửu
    NguHanh::Hoa,  // Bính Dần, Đinh Mão
    NguHanh::Moc,  // Mậu Thìn, Kỷ Tỵ
    NguHanh::Tho,  // Canh Ngọ, Tân Mùi
    NguHanh::Kim,  // Nhâm Thân, Quý Dậu
    NguHanh::Hoa,  // Giáp Tuất, Ất Hợi
    NguHanh::Thuy, // Bính Tý, Đinh Sửu
    NguHanh::Tho,  // Mậu Dần, Kỷ Mão
    NguHanh::Kim,  // Canh Thìn, Tân Tỵ
    NguHanh::Moc,  // Nhâm Ngọ, Quý Mùi
    NguHanh::Thuy, // Giáp Thân, Ất Dậu
    NguHanh::Tho,  // Bính Tuất, Đinh Hợi
    NguHanh::Hoa,  // Mậu Tý, Kỷ Sửu
    NguHanh::Moc,  // Canh Dần, Tân Mão
    NguHanh::Thuy, // Nhâm Thìn, Quý Tỵ
    NguHanh::Kim,  // Giáp Ngọ, Ất Mùi
    NguHanh::Hoa,  // Bính Thân, Đinh Dậu
    NguHanh::Moc,  // Mậu Tuất, Kỷ Hợi
    NguHanh::Tho,  // Canh Tý, Tân Sửu
    NguHanh::Kim,  // Nhâm Dần, Quý Mão
    NguHanh::Hoa,  // Giáp Thìn, Ất Tỵ
    NguHanh::Thuy, // Bính Ngọ, Đinh Mùi
    NguHanh::Tho,  // Mậu Thân, Kỷ Dậu
    NguHanh::Kim,  // Canh Tuất, Tân Hợi
    NguHanh::Moc,  // Nhâm Tý, Quý Sửu
    NguHanh::Thuy, // Giáp Dần, Ất Mão
    NguHanh::Tho,  // Bính Thìn, Đinh Tỵ
    NguHanh::Hoa,  // Mậu Ngọ, Kỷ Mùi
    NguHanh::Moc,  // Canh Thân, Tân Dậu
    NguHanh::Thuy, // Nhâm Tuất, Quý Hợi
];

impl CanChi {
    pub const fn new(can: Can, chi: Chi) -> CanChi {
        CanChi { can, chi }
    }

    /// Display name, e.g. "Giáp Tý".
    pub fn name(self) -> String {
        format!("{} {}", self.can.name(), self.chi.name())
    }

    /// Position of this pair in the 60-cycle (0 = Giáp Tý).
    ///
    /// Stems and branches advance in lockstep, so only pairs whose indices
    /// share parity occur in the cycle; `(6s - 5b) mod 60` is the unique
    /// position for those.
    pub fn cycle_index(self) -> u8 {
        let s = self.can.index() as i32;
        let b = self.chi.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }
}

/// Stem-branch pair at a raw cycle position, taken mod 60.
pub fn canchi_from_index(index: i64) -> CanChi {
    let n = index.rem_euclid(60) as i32;
    CanChi {
        can: Can::from_offset(n),
        chi: Chi::from_offset(n),
    }
}

/// Stem-branch pair of a calendar year, anchored to 1984 = Giáp Tý.
///
/// Works for years before the epoch as well (negative offsets wrap).
pub fn canchi_from_year(year: i32) -> CanChi {
    canchi_from_index((year - CANCHI_EPOCH_YEAR) as i64)
}

/// Nạp âm element of a stem-branch pair.
pub fn nap_am(pair: CanChi) -> NguHanh {
    NAP_AM_TABLE[(pair.cycle_index() / 2) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_giap_ty() {
        let p = canchi_from_year(1984);
        assert_eq!(p.can, Can::Giap);
        assert_eq!(p.chi, Chi::Ty);
        assert_eq!(p.cycle_index(), 0);
    }

    #[test]
    fn year_2000_is_canh_thin() {
        let p = canchi_from_year(2000);
        assert_eq!(p.can, Can::Canh);
        assert_eq!(p.chi, Chi::Thin);
    }

    #[test]
    fn year_before_epoch() {
        // 1983 = Quý Hợi, the last term of the cycle.
        let p = canchi_from_year(1983);
        assert_eq!(p.can, Can::Quy);
        assert_eq!(p.chi, Chi::Hoi);
        assert_eq!(p.cycle_index(), 59);
    }

    #[test]
    fn cycle_wraps_at_60() {
        let a = canchi_from_year(1984);
        let b = canchi_from_year(2044);
        assert_eq!(a, b);
    }

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60 {
            let p = canchi_from_index(i);
            assert_eq!(p.cycle_index() as i64, i);
        }
    }

    #[test]
    fn nap_am_known_pairs() {
        // Giáp Tý = Hải Trung Kim.
        assert_eq!(nap_am(canchi_from_year(1984)), NguHanh::Kim);
        // Bính Tý = Giản Hạ Thủy (position 12).
        assert_eq!(nap_am(canchi_from_index(12)), NguHanh::Thuy);
        // Mậu Ngọ = Thiên Thượng Hỏa (position 54).
        assert_eq!(nap_am(canchi_from_index(54)), NguHanh::Hoa);
        // Nhâm Tuất = Đại Hải Thủy (position 58).
        assert_eq!(nap_am(canchi_from_index(58)), NguHanh::Thuy);
    }

    #[test]
    fn nap_am_pairs_share_element() {
        // Each even position and its successor share one nạp âm group.
        for g in 0..30 {
            let a = nap_am(canchi_from_index(2 * g));
            let b = nap_am(canchi_from_index(2 * g + 1));
            assert_eq!(a, b, "group {g}");
        }
    }

    #[test]
    fn name_formats() {
        assert_eq!(canchi_from_year(1984).name(), "Giáp Tý");
    }
}
