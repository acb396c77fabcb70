//! The 10 Can (Heavenly Stems).

use serde::Serialize;

/// The 10 Heavenly Stems in cycle order (Giáp = 0 .. Quý = 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Can {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All 10 stems in order (index 0 = Giáp).
pub const ALL_CANS: [Can; 10] = [
    Can::Giap,
    Can::At,
    Can::Binh,
    Can::Dinh,
    Can::Mau,
    Can::Ky,
    Can::Canh,
    Can::Tan,
    Can::Nham,
    Can::Quy,
];

impl Can {
    /// Vietnamese name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Giap => 0,
            Self::At => 1,
            Self::Binh => 2,
            Self::Dinh => 3,
            Self::Mau => 4,
            Self::Ky => 5,
            Self::Canh => 6,
            Self::Tan => 7,
            Self::Nham => 8,
            Self::Quy => 9,
        }
    }

    /// Stem at a raw position, taken mod 10.
    pub fn from_offset(offset: i32) -> Can {
        ALL_CANS[offset.rem_euclid(10) as usize]
    }

    /// Stem advanced by `delta` steps around the 10-cycle.
    pub fn offset(self, delta: i32) -> Can {
        Can::from_offset(self.index() as i32 + delta)
    }

    /// Dương (yang) stems sit at even indices: Giáp, Bính, Mậu, Canh, Nhâm.
    pub const fn is_duong(self) -> bool {
        self.index() % 2 == 0
    }
}
