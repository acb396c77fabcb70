//! Main-star placement: the Tử Vi anchor table and the two star chains.
//!
//! The anchor table is irregular (a zigzag of forward/backward remainders
//! around ceil(day / cục)) and is reproduced entry by entry rather than
//! computed. Rows were cross-checked against the published per-cục columns.

use crate::cuc::Cuc;
use crate::error::TuViError;
use crate::star::MainStar;
use tuvi_canchi::Chi;

/// Tử Vi branch by [cục number − 2][lunar day − 1].
#[rustfmt::skip]
const TU_VI_TABLE: [[u8; 30]; 5] = [
    // Thủy nhị cục
    [ 1,  2,  2,  3,  3,  4,  4,  5,  5,  6,  6,  7,  7,  8,  8,  9,  9, 10, 10, 11, 11,  0,  0,  1,  1,  2,  2,  3,  3,  4],
    // Mộc tam cục
    [ 4,  1,  2,  5,  2,  3,  6,  3,  4,  7,  4,  5,  8,  5,  6,  9,  6,  7, 10,  7,  8, 11,  8,  9,  0,  9, 10,  1, 10, 11],
    // Kim tứ cục
    [11,  4,  1,  2,  0,  5,  2,  3,  1,  6,  3,  4,  2,  7,  4,  5,  3,  8,  5,  6,  4,  9,  6,  7,  5, 10,  7,  8,  6, 11],
    // Thổ ngũ cục
    [ 6, 11,  4,  1,  2,  7,  0,  5,  2,  3,  8,  1,  6,  3,  4,  9,  2,  7,  4,  5, 10,  3,  8,  5,  6, 11,  4,  9,  6,  7],
    // Hỏa lục cục
    [ 9,  6, 11,  4,  1,  2, 10,  7,  0,  5,  2,  3, 11,  8,  1,  6,  3,  4,  0,  9,  2,  7,  4,  5,  1, 10,  3,  8,  5,  6],
];

/// Palace branch of the anchor star (Tử Vi) for a cục and lunar day.
pub fn anchor_branch(cuc: Cuc, day: u8) -> Result<Chi, TuViError> {
    if !(1..=30).contains(&day) {
        return Err(TuViError::InvalidInput("lunar day must be 1..=30"));
    }
    let row = (cuc.so() - 2) as usize;
    let idx = TU_VI_TABLE[row][(day - 1) as usize];
    Ok(Chi::from_offset(idx as i32))
}

/// Offsets of the Tử Vi chain, backward from the anchor.
const TU_VI_CHAIN: [(MainStar, i32); 5] = [
    (MainStar::ThienCo, -1),
    (MainStar::ThaiDuong, -3),
    (MainStar::VuKhuc, -4),
    (MainStar::ThienDong, -5),
    (MainStar::LiemTrinh, -8),
];

/// Offsets of the Thiên Phủ chain, forward from Thiên Phủ.
const THIEN_PHU_CHAIN: [(MainStar, i32); 7] = [
    (MainStar::ThaiAm, 1),
    (MainStar::ThamLang, 2),
    (MainStar::CuMon, 3),
    (MainStar::ThienTuong, 4),
    (MainStar::ThienLuong, 5),
    (MainStar::ThatSat, 6),
    (MainStar::PhaQuan, 10),
];

/// Thiên Phủ mirrors the anchor across the Dần–Thân axis.
fn thien_phu_branch(anchor: Chi) -> Chi {
    Chi::from_offset(4 - anchor.index() as i32)
}

/// Branch of every main star, indexed by [`MainStar::index`].
///
/// Total over all anchor branches by construction; the two chains cover the
/// full catalogue exactly once.
pub fn main_positions(anchor: Chi) -> [Chi; 14] {
    let phu = thien_phu_branch(anchor);
    let mut out = [anchor; 14];
    out[MainStar::ThienPhu.index() as usize] = phu;
    for (star, delta) in TU_VI_CHAIN {
        out[star.index() as usize] = anchor.offset(delta);
    }
    for (star, delta) in THIEN_PHU_CHAIN {
        out[star.index() as usize] = phu.offset(delta);
    }
    out
}
