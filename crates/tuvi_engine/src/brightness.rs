//! Per-branch brightness tables.
//!
//! A star has no brightness of its own; it is rated at its resident branch
//! on the five-level scale Miếu > Vượng > Đắc > Bình > Hãm. The 14 main
//! stars and the classically rated auxiliaries carry full 12-entry rows;
//! every other star is Bình at every branch, which keeps the lookup total
//! over the branch domain.

use crate::star::{AuxStar, Star};
use serde::Serialize;
use tuvi_canchi::Chi;

/// Brightness scale, ordered dimmest to brightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Brightness {
    Ham,
    Binh,
    Dac,
    Vuong,
    Mieu,
}

impl Brightness {
    /// Vietnamese name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ham => "Hãm",
            Self::Binh => "Bình",
            Self::Dac => "Đắc",
            Self::Vuong => "Vượng",
            Self::Mieu => "Miếu",
        }
    }
}

use Brightness::{Binh as B, Dac as D, Ham as H, Mieu as M, Vuong as V};

/// Brightness rows for the 14 main stars, branch order Tý..Hợi.
const MAIN_ROWS: [[Brightness; 12]; 14] = [
    // Tử Vi
    [B, D, V, B, D, D, M, D, V, B, D, D],
    // Thiên Cơ
    [D, H, D, M, M, V, V, H, D, M, M, D],
    // Thái Dương
    [H, B, V, M, V, M, M, B, H, H, H, H],
    // Vũ Khúc
    [V, M, D, H, M, B, V, M, D, B, M, H],
    // Thiên Đồng
    [V, H, M, B, B, D, H, H, M, B, B, M],
    // Liêm Trinh
    [B, V, M, B, V, H, B, V, M, B, V, H],
    // Thiên Phủ
    [V, D, V, B, M, D, V, D, V, B, M, D],
    // Thái Âm
    [M, M, B, H, H, H, H, H, D, V, V, M],
    // Tham Lang
    [V, M, B, H, M, H, V, M, B, H, M, H],
    // Cự Môn
    [V, B, D, M, H, B, V, B, D, M, H, B],
    // Thiên Tướng
    [V, D, M, H, V, D, V, D, M, H, V, D],
    // Thiên Lương
    [V, M, D, V, M, H, M, M, H, B, M, H],
    // Thất Sát
    [M, V, M, H, D, B, M, V, M, H, D, B],
    // Phá Quân
    [M, V, H, H, D, B, M, V, H, H, D, B],
];

/// Xương/Khúc: rated by trine — Thân Tý Thìn vượng, Tỵ Dậu Sửu miếu,
/// Dần Ngọ Tuất hãm, Hợi Mão Mùi bình.
const VAN_ROW: [Brightness; 12] = [V, M, H, B, V, M, H, B, V, M, H, B];

/// Kình/Đà: tứ mộ miếu, tứ chính hãm, tứ sinh đắc.
const KINH_DA_ROW: [Brightness; 12] = [H, M, D, H, M, D, H, M, D, H, M, D];

/// Hỏa/Linh: fire trine miếu, water trine hãm, metal trine đắc.
const HOA_LINH_ROW: [Brightness; 12] = [H, D, M, B, H, D, M, B, H, D, M, B];

/// Không/Kiếp: đắc at Tỵ and Hợi, hãm elsewhere.
const KHONG_KIEP_ROW: [Brightness; 12] = [H, H, H, H, H, D, H, H, H, H, H, D];

const BINH_ROW: [Brightness; 12] = [B; 12];

fn row_of(star: Star) -> &'static [Brightness; 12] {
    match star {
        Star::Main(s) => &MAIN_ROWS[s.index() as usize],
        Star::Aux(AuxStar::VanXuong) | Star::Aux(AuxStar::VanKhuc) => &VAN_ROW,
        Star::Aux(AuxStar::KinhDuong) | Star::Aux(AuxStar::DaLa) => &KINH_DA_ROW,
        Star::Aux(AuxStar::HoaTinh) | Star::Aux(AuxStar::LinhTinh) => &HOA_LINH_ROW,
        Star::Aux(AuxStar::DiaKhong) | Star::Aux(AuxStar::DiaKiep) => &KHONG_KIEP_ROW,
        Star::Aux(_) => &BINH_ROW,
    }
}

/// Brightness of a star at its resident branch. Total over the domain.
pub fn brightness_of(star: Star, branch: Chi) -> Brightness {
    row_of(star)[branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::{ALL_AUX_STARS, ALL_MAIN_STARS, MainStar};
    use tuvi_canchi::ALL_CHIS;

    #[test]
    fn lookup_total_over_domain() {
        for s in ALL_MAIN_STARS {
            for &c in &ALL_CHIS {
                let _ = brightness_of(Star::Main(s), c);
            }
        }
        for s in ALL_AUX_STARS {
            for &c in &ALL_CHIS {
                let _ = brightness_of(Star::Aux(s), c);
            }
        }
    }

    #[test]
    fn tu_vi_mieu_at_ngo() {
        assert_eq!(brightness_of(Star::Main(MainStar::TuVi), Chi::Ngo), Brightness::Mieu);
    }

    #[test]
    fn tu_vi_never_ham() {
        for &c in &ALL_CHIS {
            assert!(brightness_of(Star::Main(MainStar::TuVi), c) > Brightness::Ham);
        }
    }

    #[test]
    fn thai_duong_dim_at_night_branches() {
        for c in [Chi::Than, Chi::Dau, Chi::Tuat, Chi::Hoi, Chi::Ty] {
            assert_eq!(
                brightness_of(Star::Main(MainStar::ThaiDuong), c),
                Brightness::Ham
            );
        }
        assert_eq!(
            brightness_of(Star::Main(MainStar::ThaiDuong), Chi::Ngo),
            Brightness::Mieu
        );
    }

    #[test]
    fn thai_am_bright_at_night_branches() {
        assert_eq!(brightness_of(Star::Main(MainStar::ThaiAm), Chi::Hoi), Brightness::Mieu);
        assert_eq!(brightness_of(Star::Main(MainStar::ThaiAm), Chi::Ngo), Brightness::Ham);
    }

    #[test]
    fn khong_kiep_dac_only_at_ti_hoi() {
        for &c in &ALL_CHIS {
            let b = brightness_of(Star::Aux(AuxStar::DiaKhong), c);
            if c == Chi::Ti || c == Chi::Hoi {
                assert_eq!(b, Brightness::Dac);
            } else {
                assert_eq!(b, Brightness::Ham);
            }
        }
    }

    #[test]
    fn unrated_aux_is_binh() {
        for &c in &ALL_CHIS {
            assert_eq!(brightness_of(Star::Aux(AuxStar::TamThai), c), Brightness::Binh);
        }
    }

    #[test]
    fn scale_orders_dim_to_bright() {
        assert!(Brightness::Ham < Brightness::Binh);
        assert!(Brightness::Dac < Brightness::Vuong);
        assert!(Brightness::Vuong < Brightness::Mieu);
    }
}
