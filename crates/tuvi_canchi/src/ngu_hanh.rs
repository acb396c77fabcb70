//! Ngũ Hành (five elements) and their generating/overcoming relations.

use serde::Serialize;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NguHanh {
    Kim,
    Moc,
    Thuy,
    Hoa,
    Tho,
}

/// How one element stands to another in the sinh/khắc cycles,
/// seen from the first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SinhKhac {
    /// Same element.
    BinhHoa,
    /// The first generates the second.
    Sinh,
    /// The first is generated by the second.
    DuocSinh,
    /// The first overcomes the second.
    Khac,
    /// The first is overcome by the second.
    BiKhac,
}

/// All five elements.
pub const ALL_NGU_HANH: [NguHanh; 5] = [
    NguHanh::Kim,
    NguHanh::Moc,
    NguHanh::Thuy,
    NguHanh::Hoa,
    NguHanh::Tho,
];

impl NguHanh {
    /// Vietnamese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kim => "Kim",
            Self::Moc => "Mộc",
            Self::Thuy => "Thủy",
            Self::Hoa => "Hỏa",
            Self::Tho => "Thổ",
        }
    }

    /// The element this one generates (tương sinh).
    pub const fn sinh(self) -> NguHanh {
        match self {
            Self::Kim => Self::Thuy,
            Self::Thuy => Self::Moc,
            Self::Moc => Self::Hoa,
            Self::Hoa => Self::Tho,
            Self::Tho => Self::Kim,
        }
    }

    /// The element this one overcomes (tương khắc).
    pub const fn khac(self) -> NguHanh {
        match self {
            Self::Kim => Self::Moc,
            Self::Moc => Self::Tho,
            Self::Tho => Self::Thuy,
            Self::Thuy => Self::Hoa,
            Self::Hoa => Self::Kim,
        }
    }

    /// Relation of `self` to `other` in the sinh/khắc cycles.
    pub fn relation_to(self, other: NguHanh) -> SinhKhac {
        if self == other {
            SinhKhac::BinhHoa
        } else if self.sinh() == other {
            SinhKhac::Sinh
        } else if other.sinh() == self {
            SinhKhac::DuocSinh
        } else if self.khac() == other {
            SinhKhac::Khac
        } else {
            SinhKhac::BiKhac
        }
    }
}
