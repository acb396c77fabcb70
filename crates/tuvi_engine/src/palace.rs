//! Palace layout: the 12-palace ring, Mệnh/Thân anchors, palace stems, Cục.
//!
//! The Destiny (Mệnh) and Body (Thân) branches come from two independent
//! explicit tables keyed by (lunar month, hour branch). The classical
//! counting rule behind them — from Dần, forward by month, then back
//! (Mệnh) or forward (Thân) by the hour — is deliberately frozen into
//! tables rather than re-derived, so a directionality slip cannot creep in.

use crate::cuc::Cuc;
use crate::error::TuViError;
use serde::Serialize;
use tuvi_canchi::{Can, CanChi, Chi, nap_am};

/// The 12 palace roles in ring order from Mệnh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum PalaceRole {
    Menh,
    PhuMau,
    PhucDuc,
    DienTrach,
    QuanLoc,
    NoBoc,
    ThienDi,
    TatAch,
    TaiBach,
    TuTuc,
    PhuThe,
    HuynhDe,
}

/// All 12 roles in ring order (index 0 = Mệnh).
pub const ALL_PALACE_ROLES: [PalaceRole; 12] = [
    PalaceRole::Menh,
    PalaceRole::PhuMau,
    PalaceRole::PhucDuc,
    PalaceRole::DienTrach,
    PalaceRole::QuanLoc,
    PalaceRole::NoBoc,
    PalaceRole::ThienDi,
    PalaceRole::TatAch,
    PalaceRole::TaiBach,
    PalaceRole::TuTuc,
    PalaceRole::PhuThe,
    PalaceRole::HuynhDe,
];

impl PalaceRole {
    /// Position in the ring, counted from Mệnh.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vietnamese display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Menh => "Mệnh",
            Self::PhuMau => "Phụ Mẫu",
            Self::PhucDuc => "Phúc Đức",
            Self::DienTrach => "Điền Trạch",
            Self::QuanLoc => "Quan Lộc",
            Self::NoBoc => "Nô Bộc",
            Self::ThienDi => "Thiên Di",
            Self::TatAch => "Tật Ách",
            Self::TaiBach => "Tài Bạch",
            Self::TuTuc => "Tử Tức",
            Self::PhuThe => "Phu Thê",
            Self::HuynhDe => "Huynh Đệ",
        }
    }
}

/// Mệnh branch by [month − 1][hour branch index].
const MENH_TABLE: [[u8; 12]; 12] = [
    [2, 1, 0, 11, 10, 9, 8, 7, 6, 5, 4, 3],
    [3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 5, 4],
    [4, 3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 5],
    [5, 4, 3, 2, 1, 0, 11, 10, 9, 8, 7, 6],
    [6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8, 7],
    [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8],
    [8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10],
    [10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11],
    [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
    [0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
    [1, 0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
];

/// Thân branch by [month − 1][hour branch index].
const THAN_TABLE: [[u8; 12]; 12] = [
    [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1],
    [3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2],
    [4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3],
    [5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4],
    [6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5],
    [7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6],
    [8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7],
    [9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8],
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0],
];

/// Destiny Palace branch for a (month, hour) pair.
pub fn destiny_branch(month: u8, hour: Chi) -> Result<Chi, TuViError> {
    if !(1..=12).contains(&month) {
        return Err(TuViError::InvalidInput("lunar month must be 1..=12"));
    }
    let idx = MENH_TABLE[(month - 1) as usize][hour.index() as usize];
    Ok(Chi::from_offset(idx as i32))
}

/// Body Palace branch for a (month, hour) pair.
///
/// Looked up independently of [`destiny_branch`]; the two tables are not
/// offsets of each other.
pub fn body_branch(month: u8, hour: Chi) -> Result<Chi, TuViError> {
    if !(1..=12).contains(&month) {
        return Err(TuViError::InvalidInput("lunar month must be 1..=12"));
    }
    let idx = THAN_TABLE[(month - 1) as usize][hour.index() as usize];
    Ok(Chi::from_offset(idx as i32))
}

/// Stem of the palace at `branch` for a given year stem (Ngũ Hổ Độn rule).
///
/// The stem of the Dần palace depends on the year stem (Giáp/Kỷ → Bính,
/// Ất/Canh → Mậu, Bính/Tân → Canh, Đinh/Nhâm → Nhâm, Mậu/Quý → Giáp);
/// the remaining palaces advance stem-by-stem from Dần around the ring.
pub fn palace_stem(year_can: Can, branch: Chi) -> Can {
    let dan_stem = (year_can.index() % 5) * 2 + 2;
    let steps_from_dan = (branch.index() as i32 - 2).rem_euclid(12);
    Can::from_offset(dan_stem as i32 + steps_from_dan)
}

/// Cục of a chart: nạp âm element of the Mệnh palace's stem-branch pillar.
pub fn cuc_for(year_can: Can, menh: Chi) -> Cuc {
    let pillar = CanChi::new(palace_stem(year_can, menh), menh);
    Cuc::new(nap_am(pillar))
}

/// Branch of the palace holding `role`, given the Mệnh branch.
///
/// Roles advance with the branches: Phụ Mẫu sits one branch forward of
/// Mệnh, and so on around the ring.
pub fn role_branch(menh: Chi, role: PalaceRole) -> Chi {
    menh.offset(role.index() as i32)
}
