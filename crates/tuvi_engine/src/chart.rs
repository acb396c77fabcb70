//! Chart assembly: the single entry point that turns a validated birth
//! input into a complete, immutable 12-palace chart.
//!
//! Construction is atomic: callers get a fully populated [`Chart`] or an
//! error, never a partial result.

use crate::aux::place_aux;
use crate::brightness::{Brightness, brightness_of};
use crate::cuc::Cuc;
use crate::error::TuViError;
use crate::input::BirthInput;
use crate::palace::{
    ALL_PALACE_ROLES, PalaceRole, body_branch, cuc_for, destiny_branch, palace_stem,
};
use crate::placement::{anchor_branch, main_positions};
use crate::star::{
    ALL_AUX_STARS, ALL_MAIN_STARS, AUX_STAR_COUNT, AuxStar, MainStar, Nature, Star,
};
use serde::Serialize;
use tuvi_canchi::{Can, CanChi, Chi, NguHanh, SinhKhac, canchi_from_year, nap_am};

/// The layout under construction: everything the auxiliary rules may read.
///
/// Mutation is confined to the engine filling the aux slots in rule order;
/// rules themselves only get a shared reference.
#[derive(Debug, Clone)]
pub struct Layout {
    pub year: CanChi,
    pub menh: Chi,
    pub than: Chi,
    pub cuc: Cuc,
    main: [Chi; 14],
    aux: [Option<Chi>; AUX_STAR_COUNT],
}

impl Layout {
    /// Validate the input and compute the palace frame and main stars.
    /// Auxiliary slots start empty.
    pub fn prepare(input: &BirthInput) -> Result<Layout, TuViError> {
        input.validate()?;
        let year = canchi_from_year(input.year);
        let menh = destiny_branch(input.month, input.hour)?;
        let than = body_branch(input.month, input.hour)?;
        let cuc = cuc_for(year.can, menh);
        let anchor = anchor_branch(cuc, input.day)?;
        Ok(Layout {
            year,
            menh,
            than,
            cuc,
            main: main_positions(anchor),
            aux: [None; AUX_STAR_COUNT],
        })
    }

    /// Branch of a main star. Main stars are always placed.
    pub fn main_of(&self, star: MainStar) -> Chi {
        self.main[star.index() as usize]
    }

    /// Branch of an auxiliary star, if its rule has run and placed it.
    pub fn aux_of(&self, star: AuxStar) -> Option<Chi> {
        self.aux[star.index() as usize]
    }

    /// Branch of any star.
    pub fn star_of(&self, star: Star) -> Option<Chi> {
        match star {
            Star::Main(s) => Some(self.main_of(s)),
            Star::Aux(s) => self.aux_of(s),
        }
    }

    pub(crate) fn set_aux(&mut self, star: AuxStar, branch: Option<Chi>) {
        self.aux[star.index() as usize] = branch;
    }
}

/// A star resolved into a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedStar {
    pub star: Star,
    pub nature: Nature,
    pub brightness: Brightness,
}

/// One of the 12 palaces of a finished chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    pub role: PalaceRole,
    pub branch: Chi,
    /// Palace stem from the Ngũ Hổ Độn rule.
    pub stem: Can,
    /// Fixed element of the palace branch.
    pub element: NguHanh,
    /// Stars in placement order: main tier first, catalogue order within
    /// each tier.
    pub stars: Vec<PlacedStar>,
}

/// A complete chart. Immutable after construction, no references back to
/// the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    /// The 12 palaces in branch order (index 0 = Tý).
    pub palaces: Vec<Palace>,
    /// Branch index of the Destiny Palace.
    pub destiny_index: u8,
    /// Branch index of the Body Palace (may equal `destiny_index`).
    pub body_index: u8,
    pub cuc: Cuc,
    pub year_canchi: CanChi,
    /// Bản Mệnh: nạp âm element of the birth year.
    pub ban_menh: NguHanh,
    /// Tuần Không empty-marker branch pair.
    pub tuan: (Chi, Chi),
    /// Triệt Lộ empty-marker branch pair.
    pub triet: (Chi, Chi),
    /// Mệnh chủ ruling star (by Mệnh branch).
    pub menh_chu: Star,
    /// Thân chủ ruling star (by year branch).
    pub than_chu: Star,
}

/// Tuần Không: the two branches left uncovered by the year's decade of the
/// sexagenary cycle.
fn tuan_khong(year: CanChi) -> (Chi, Chi) {
    let decade_start = (year.cycle_index() / 10) * 10;
    let first = Chi::from_offset(decade_start as i32 + 10);
    (first, first.offset(1))
}

/// Triệt Lộ branch pair by year stem.
fn triet_lo(year_can: Can) -> (Chi, Chi) {
    let first = match year_can {
        Can::Giap | Can::Ky => Chi::Than,
        Can::At | Can::Canh => Chi::Ngo,
        Can::Binh | Can::Tan => Chi::Thin,
        Can::Dinh | Can::Nham => Chi::Dan,
        Can::Mau | Can::Quy => Chi::Ty,
    };
    (first, first.offset(1))
}

/// Mệnh chủ ruling star by Mệnh branch.
fn menh_chu(menh: Chi) -> Star {
    match menh {
        Chi::Ty => Star::Main(MainStar::ThamLang),
        Chi::Suu | Chi::Hoi => Star::Main(MainStar::CuMon),
        Chi::Dan | Chi::Tuat => Star::Aux(AuxStar::LocTon),
        Chi::Mao | Chi::Dau => Star::Aux(AuxStar::VanKhuc),
        Chi::Thin | Chi::Than => Star::Main(MainStar::LiemTrinh),
        Chi::Ti | Chi::Mui => Star::Main(MainStar::VuKhuc),
        Chi::Ngo => Star::Main(MainStar::PhaQuan),
    }
}

/// Thân chủ ruling star by year branch.
fn than_chu(year_chi: Chi) -> Star {
    match year_chi {
        Chi::Ty => Star::Aux(AuxStar::LinhTinh),
        Chi::Ngo => Star::Aux(AuxStar::HoaTinh),
        Chi::Suu | Chi::Mui => Star::Main(MainStar::ThienTuong),
        Chi::Dan | Chi::Than => Star::Main(MainStar::ThienLuong),
        Chi::Mao | Chi::Dau => Star::Main(MainStar::ThienDong),
        Chi::Thin | Chi::Tuat => Star::Aux(AuxStar::VanXuong),
        Chi::Ti | Chi::Hoi => Star::Main(MainStar::ThienCo),
    }
}

/// Compute the full chart for a normalized birth input.
///
/// Pure and deterministic: no I/O, no shared state, bounded work. Safe to
/// call concurrently from any number of threads.
pub fn compute_chart(input: &BirthInput) -> Result<Chart, TuViError> {
    let mut layout = Layout::prepare(input)?;
    place_aux(input, &mut layout);

    // Fixed-order collection per branch keeps the in-palace ordering
    // deterministic: mains in catalogue order, then auxiliaries.
    let mut palaces = Vec::with_capacity(12);
    for branch_idx in 0..12u8 {
        let branch = Chi::from_offset(branch_idx as i32);
        let ring_steps = (branch_idx as i32 - layout.menh.index() as i32).rem_euclid(12);
        let role = ALL_PALACE_ROLES[ring_steps as usize];

        let mut stars = Vec::new();
        for s in ALL_MAIN_STARS {
            if layout.main_of(s) == branch {
                stars.push(placed(Star::Main(s), branch));
            }
        }
        for s in ALL_AUX_STARS {
            if layout.aux_of(s) == Some(branch) {
                stars.push(placed(Star::Aux(s), branch));
            }
        }

        palaces.push(Palace {
            role,
            branch,
            stem: palace_stem(layout.year.can, branch),
            element: branch.element(),
            stars,
        });
    }

    // Every main star must have landed exactly once across the ring.
    let placed_mains: usize = palaces
        .iter()
        .map(|p| p.stars.iter().filter(|s| matches!(s.star, Star::Main(_))).count())
        .sum();
    if placed_mains != ALL_MAIN_STARS.len() {
        return Err(TuViError::Invariant("main star lost during collection"));
    }

    Ok(Chart {
        destiny_index: layout.menh.index(),
        body_index: layout.than.index(),
        cuc: layout.cuc,
        year_canchi: layout.year,
        ban_menh: nap_am(layout.year),
        tuan: tuan_khong(layout.year),
        triet: triet_lo(layout.year.can),
        menh_chu: menh_chu(layout.menh),
        than_chu: than_chu(layout.year.chi),
        palaces,
    })
}

fn placed(star: Star, branch: Chi) -> PlacedStar {
    PlacedStar {
        star,
        nature: star.nature(),
        brightness: brightness_of(star, branch),
    }
}

impl Chart {
    /// The Destiny Palace.
    pub fn destiny_palace(&self) -> &Palace {
        &self.palaces[self.destiny_index as usize]
    }

    /// The Body Palace.
    pub fn body_palace(&self) -> &Palace {
        &self.palaces[self.body_index as usize]
    }

    /// The palace holding a given role.
    pub fn palace_of(&self, role: PalaceRole) -> &Palace {
        let branch = Chi::from_offset(self.destiny_index as i32 + role.index() as i32);
        &self.palaces[branch.index() as usize]
    }

    /// Sinh/khắc standing of the Bản Mệnh element toward the Cục element.
    pub fn ban_menh_cuc_relation(&self) -> SinhKhac {
        self.ban_menh.relation_to(self.cuc.element)
    }
}
