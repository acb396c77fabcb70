//! The 12 Chi (Earthly Branches).
//!
//! Branch order starts at Tý (Rat). Note the two similar identifiers:
//! `Ty` is Tý (index 0) and `Ti` is Tỵ (index 5).

use crate::ngu_hanh::NguHanh;
use serde::Serialize;

/// The 12 Earthly Branches in cycle order (Tý = 0 .. Hợi = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Chi {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 12 branches in order (index 0 = Tý).
pub const ALL_CHIS: [Chi; 12] = [
    Chi::Ty,
    Chi::Suu,
    Chi::Dan,
    Chi::Mao,
    Chi::Thin,
    Chi::Ti,
    Chi::Ngo,
    Chi::Mui,
    Chi::Than,
    Chi::Dau,
    Chi::Tuat,
    Chi::Hoi,
];

impl Chi {
    /// Vietnamese name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// 0-based index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ty => 0,
            Self::Suu => 1,
            Self::Dan => 2,
            Self::Mao => 3,
            Self::Thin => 4,
            Self::Ti => 5,
            Self::Ngo => 6,
            Self::Mui => 7,
            Self::Than => 8,
            Self::Dau => 9,
            Self::Tuat => 10,
            Self::Hoi => 11,
        }
    }

    /// Branch at a raw position, taken mod 12.
    pub fn from_offset(offset: i32) -> Chi {
        ALL_CHIS[offset.rem_euclid(12) as usize]
    }

    /// Branch advanced by `delta` steps around the 12-cycle
    /// (negative `delta` counts backward).
    pub fn offset(self, delta: i32) -> Chi {
        Chi::from_offset(self.index() as i32 + delta)
    }

    /// Fixed element of the branch itself (not nạp âm).
    pub const fn element(self) -> NguHanh {
        match self {
            Self::Ty | Self::Hoi => NguHanh::Thuy,
            Self::Suu | Self::Thin | Self::Mui | Self::Tuat => NguHanh::Tho,
            Self::Dan | Self::Mao => NguHanh::Moc,
            Self::Ti | Self::Ngo => NguHanh::Hoa,
            Self::Than | Self::Dau => NguHanh::Kim,
        }
    }

    /// Dương (yang) branches sit at even indices.
    pub const fn is_duong(self) -> bool {
        self.index() % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_chis_count() {
        assert_eq!(ALL_CHIS.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, c) in ALL_CHIS.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for c in ALL_CHIS {
            assert!(!c.name().is_empty());
        }
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Chi::Hoi.offset(1), Chi::Ty);
        assert_eq!(Chi::Ty.offset(-1), Chi::Hoi);
        assert_eq!(Chi::Dan.offset(12), Chi::Dan);
        assert_eq!(Chi::Ngo.offset(-18), Chi::Ty);
    }

    #[test]
    fn branch_elements() {
        assert_eq!(Chi::Ty.element(), NguHanh::Thuy);
        assert_eq!(Chi::Dan.element(), NguHanh::Moc);
        assert_eq!(Chi::Ngo.element(), NguHanh::Hoa);
        assert_eq!(Chi::Dau.element(), NguHanh::Kim);
        assert_eq!(Chi::Tuat.element(), NguHanh::Tho);
    }

    #[test]
    fn duong_am_alternate() {
        assert!(Chi::Ty.is_duong());
        assert!(!Chi::Suu.is_duong());
        assert!(Chi::Ngo.is_duong());
        assert!(!Chi::Hoi.is_duong());
    }
}
