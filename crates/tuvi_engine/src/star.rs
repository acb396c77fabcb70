//! The star catalogue: 14 main stars and 79 auxiliary stars.
//!
//! Declaration order is the canonical order. It fixes the tie-break when
//! several stars land in one palace: main stars come before auxiliaries, and
//! within each tier stars sort by catalogue position. Nature (cát/hung/
//! neutral) is static per star; brightness is per resident branch and lives
//! in the brightness tables.

use serde::Serialize;

/// Auspicious / inauspicious / neutral classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nature {
    Cat,
    Hung,
    Neutral,
}

/// The 14 main stars, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum MainStar {
    TuVi,
    ThienCo,
    ThaiDuong,
    VuKhuc,
    ThienDong,
    LiemTrinh,
    ThienPhu,
    ThaiAm,
    ThamLang,
    CuMon,
    ThienTuong,
    ThienLuong,
    ThatSat,
    PhaQuan,
}

/// All 14 main stars in canonical order.
pub const ALL_MAIN_STARS: [MainStar; 14] = [
    MainStar::TuVi,
    MainStar::ThienCo,
    MainStar::ThaiDuong,
    MainStar::VuKhuc,
    MainStar::ThienDong,
    MainStar::LiemTrinh,
    MainStar::ThienPhu,
    MainStar::ThaiAm,
    MainStar::ThamLang,
    MainStar::CuMon,
    MainStar::ThienTuong,
    MainStar::ThienLuong,
    MainStar::ThatSat,
    MainStar::PhaQuan,
];

impl MainStar {
    /// 0-based catalogue position.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vietnamese display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TuVi => "Tử Vi",
            Self::ThienCo => "Thiên Cơ",
            Self::ThaiDuong => "Thái Dương",
            Self::VuKhuc => "Vũ Khúc",
            Self::ThienDong => "Thiên Đồng",
            Self::LiemTrinh => "Liêm Trinh",
            Self::ThienPhu => "Thiên Phủ",
            Self::ThaiAm => "Thái Âm",
            Self::ThamLang => "Tham Lang",
            Self::CuMon => "Cự Môn",
            Self::ThienTuong => "Thiên Tướng",
            Self::ThienLuong => "Thiên Lương",
            Self::ThatSat => "Thất Sát",
            Self::PhaQuan => "Phá Quân",
        }
    }

    /// Static nature of the star.
    pub const fn nature(self) -> Nature {
        match self {
            Self::TuVi
            | Self::ThienCo
            | Self::ThaiDuong
            | Self::VuKhuc
            | Self::ThienDong
            | Self::ThienPhu
            | Self::ThaiAm
            | Self::ThienTuong
            | Self::ThienLuong => Nature::Cat,
            Self::LiemTrinh
            | Self::ThamLang
            | Self::CuMon
            | Self::ThatSat
            | Self::PhaQuan => Nature::Hung,
        }
    }
}

/// The 79 auxiliary stars, in canonical order.
///
/// The last three groups of 12 are the Thái Tuế, Tràng Sinh, and Bác Sĩ
/// rings. Two distinct classical stars share a romanized name: `QuanPhu` is
/// Quan Phù (Thái Tuế ring) and `QuanPhuBacSi` is Quan Phủ (Bác Sĩ ring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum AuxStar {
    VanXuong,
    VanKhuc,
    ThaiPhu,
    PhongCao,
    DiaKhong,
    DiaKiep,
    TaPhu,
    HuuBat,
    ThienHinh,
    ThienRieu,
    ThienY,
    ThienGiai,
    DiaGiai,
    LocTon,
    KinhDuong,
    DaLa,
    ThienKhoi,
    ThienViet,
    ThienQuan,
    ThienPhuc,
    HoaLoc,
    HoaQuyen,
    HoaKhoa,
    HoaKy,
    HongLoan,
    ThienHy,
    DaoHoa,
    HoaCai,
    KiepSat,
    ThienMa,
    CoThan,
    QuaTu,
    LongTri,
    PhuongCac,
    GiaiThan,
    ThienKhoc,
    ThienHu,
    HoaTinh,
    LinhTinh,
    TamThai,
    BatToa,
    AnQuang,
    ThienQuy,
    // Thái Tuế ring
    ThaiTue,
    ThieuDuong,
    TangMon,
    ThieuAm,
    QuanPhu,
    TuPhu,
    TuePha,
    LongDuc,
    BachHo,
    PhucDuc,
    DieuKhach,
    TrucPhu,
    // Tràng Sinh ring
    TrangSinh,
    MocDuc,
    QuanDoi,
    LamQuan,
    DeVuong,
    Suy,
    Benh,
    Tu,
    Mo,
    Tuyet,
    Thai,
    Duong,
    // Bác Sĩ ring
    BacSi,
    LucSi,
    ThanhLong,
    TieuHao,
    TuongQuan,
    TauThu,
    PhiLiem,
    HyThan,
    BenhPhu,
    DaiHao,
    PhucBinh,
    QuanPhuBacSi,
}

/// Number of auxiliary stars in the catalogue.
pub const AUX_STAR_COUNT: usize = 79;

/// All auxiliary stars in canonical order.
pub const ALL_AUX_STARS: [AuxStar; AUX_STAR_COUNT] = [
    AuxStar::VanXuong,
    AuxStar::VanKhuc,
    AuxStar::ThaiPhu,
    AuxStar::PhongCao,
    AuxStar::DiaKhong,
    AuxStar::DiaKiep,
    AuxStar::TaPhu,
    AuxStar::HuuBat,
    AuxStar::ThienHinh,
    AuxStar::ThienRieu,
    AuxStar::ThienY,
    AuxStar::ThienGiai,
    AuxStar::DiaGiai,
    AuxStar::LocTon,
    AuxStar::KinhDuong,
    AuxStar::DaLa,
    AuxStar::ThienKhoi,
    AuxStar::ThienViet,
    AuxStar::ThienQuan,
    AuxStar::ThienPhuc,
    AuxStar::HoaLoc,
    AuxStar::HoaQuyen,
    AuxStar::HoaKhoa,
    AuxStar::HoaKy,
    AuxStar::HongLoan,
    AuxStar::ThienHy,
    AuxStar::DaoHoa,
    AuxStar::HoaCai,
    AuxStar::KiepSat,
    AuxStar::ThienMa,
    AuxStar::CoThan,
    AuxStar::QuaTu,
    AuxStar::LongTri,
    AuxStar::PhuongCac,
    AuxStar::GiaiThan,
    AuxStar::ThienKhoc,
    AuxStar::ThienHu,
    AuxStar::HoaTinh,
    AuxStar::LinhTinh,
    AuxStar::TamThai,
    AuxStar::BatToa,
    AuxStar::AnQuang,
    AuxStar::ThienQuy,
    AuxStar::ThaiTue,
    AuxStar::ThieuDuong,
    AuxStar::TangMon,
    AuxStar::ThieuAm,
    AuxStar::QuanPhu,
    AuxStar::TuPhu,
    AuxStar::TuePha,
    AuxStar::LongDuc,
    AuxStar::BachHo,
    AuxStar::PhucDuc,
    AuxStar::DieuKhach,
    AuxStar::TrucPhu,
    AuxStar::TrangSinh,
    AuxStar::MocDuc,
    AuxStar::QuanDoi,
    AuxStar::LamQuan,
    AuxStar::DeVuong,
    AuxStar::Suy,
    AuxStar::Benh,
    AuxStar::Tu,
    AuxStar::Mo,
    AuxStar::Tuyet,
    AuxStar::Thai,
    AuxStar::Duong,
    AuxStar::BacSi,
    AuxStar::LucSi,
    AuxStar::ThanhLong,
    AuxStar::TieuHao,
    AuxStar::TuongQuan,
    AuxStar::TauThu,
    AuxStar::PhiLiem,
    AuxStar::HyThan,
    AuxStar::BenhPhu,
    AuxStar::DaiHao,
    AuxStar::PhucBinh,
    AuxStar::QuanPhuBacSi,
];

impl AuxStar {
    /// 0-based catalogue position.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vietnamese display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::VanXuong => "Văn Xương",
            Self::VanKhuc => "Văn Khúc",
            Self::ThaiPhu => "Thai Phụ",
            Self::PhongCao => "Phong Cáo",
            Self::DiaKhong => "Địa Không",
            Self::DiaKiep => "Địa Kiếp",
            Self::TaPhu => "Tả Phù",
            Self::HuuBat => "Hữu Bật",
            Self::ThienHinh => "Thiên Hình",
            Self::ThienRieu => "Thiên Riêu",
            Self::ThienY => "Thiên Y",
            Self::ThienGiai => "Thiên Giải",
            Self::DiaGiai => "Địa Giải",
            Self::LocTon => "Lộc Tồn",
            Self::KinhDuong => "Kình Dương",
            Self::DaLa => "Đà La",
            Self::ThienKhoi => "Thiên Khôi",
            Self::ThienViet => "Thiên Việt",
            Self::ThienQuan => "Thiên Quan",
            Self::ThienPhuc => "Thiên Phúc",
            Self::HoaLoc => "Hóa Lộc",
            Self::HoaQuyen => "Hóa Quyền",
            Self::HoaKhoa => "Hóa Khoa",
            Self::HoaKy => "Hóa Kỵ",
            Self::HongLoan => "Hồng Loan",
            Self::ThienHy => "Thiên Hỷ",
            Self::DaoHoa => "Đào Hoa",
            Self::HoaCai => "Hoa Cái",
            Self::KiepSat => "Kiếp Sát",
            Self::ThienMa => "Thiên Mã",
            Self::CoThan => "Cô Thần",
            Self::QuaTu => "Quả Tú",
            Self::LongTri => "Long Trì",
            Self::PhuongCac => "Phượng Các",
            Self::GiaiThan => "Giải Thần",
            Self::ThienKhoc => "Thiên Khốc",
            Self::ThienHu => "Thiên Hư",
            Self::HoaTinh => "Hỏa Tinh",
            Self::LinhTinh => "Linh Tinh",
            Self::TamThai => "Tam Thai",
            Self::BatToa => "Bát Tọa",
            Self::AnQuang => "Ân Quang",
            Self::ThienQuy => "Thiên Quý",
            Self::ThaiTue => "Thái Tuế",
            Self::ThieuDuong => "Thiếu Dương",
            Self::TangMon => "Tang Môn",
            Self::ThieuAm => "Thiếu Âm",
            Self::QuanPhu => "Quan Phù",
            Self::TuPhu => "Tử Phù",
            Self::TuePha => "Tuế Phá",
            Self::LongDuc => "Long Đức",
            Self::BachHo => "Bạch Hổ",
            Self::PhucDuc => "Phúc Đức",
            Self::DieuKhach => "Điếu Khách",
            Self::TrucPhu => "Trực Phù",
            Self::TrangSinh => "Tràng Sinh",
            Self::MocDuc => "Mộc Dục",
            Self::QuanDoi => "Quan Đới",
            Self::LamQuan => "Lâm Quan",
            Self::DeVuong => "Đế Vượng",
            Self::Suy => "Suy",
            Self::Benh => "Bệnh",
            Self::Tu => "Tử",
            Self::Mo => "Mộ",
            Self::Tuyet => "Tuyệt",
            Self::Thai => "Thai",
            Self::Duong => "Dưỡng",
            Self::BacSi => "Bác Sĩ",
            Self::LucSi => "Lực Sĩ",
            Self::ThanhLong => "Thanh Long",
            Self::TieuHao => "Tiểu Hao",
            Self::TuongQuan => "Tướng Quân",
            Self::TauThu => "Tấu Thư",
            Self::PhiLiem => "Phi Liêm",
            Self::HyThan => "Hỷ Thần",
            Self::BenhPhu => "Bệnh Phù",
            Self::DaiHao => "Đại Hao",
            Self::PhucBinh => "Phục Binh",
            Self::QuanPhuBacSi => "Quan Phủ",
        }
    }

    /// Static nature of the star.
    pub const fn nature(self) -> Nature {
        match self {
            Self::VanXuong
            | Self::VanKhuc
            | Self::ThaiPhu
            | Self::PhongCao
            | Self::TaPhu
            | Self::HuuBat
            | Self::ThienGiai
            | Self::DiaGiai
            | Self::LocTon
            | Self::ThienKhoi
            | Self::ThienViet
            | Self::ThienQuan
            | Self::ThienPhuc
            | Self::HoaLoc
            | Self::HoaQuyen
            | Self::HoaKhoa
            | Self::HongLoan
            | Self::ThienHy
            | Self::ThienMa
            | Self::LongTri
            | Self::PhuongCac
            | Self::GiaiThan
            | Self::TamThai
            | Self::BatToa
            | Self::AnQuang
            | Self::ThienQuy
            | Self::ThieuDuong
            | Self::ThieuAm
            | Self::LongDuc
            | Self::PhucDuc
            | Self::TrangSinh
            | Self::QuanDoi
            | Self::LamQuan
            | Self::DeVuong
            | Self::BacSi
            | Self::ThanhLong
            | Self::TauThu
            | Self::HyThan => Nature::Cat,
            Self::DiaKhong
            | Self::DiaKiep
            | Self::ThienHinh
            | Self::ThienRieu
            | Self::KinhDuong
            | Self::DaLa
            | Self::HoaKy
            | Self::KiepSat
            | Self::CoThan
            | Self::QuaTu
            | Self::ThienKhoc
            | Self::ThienHu
            | Self::HoaTinh
            | Self::LinhTinh
            | Self::ThaiTue
            | Self::TangMon
            | Self::QuanPhu
            | Self::TuPhu
            | Self::TuePha
            | Self::BachHo
            | Self::DieuKhach
            | Self::TrucPhu
            | Self::Suy
            | Self::Benh
            | Self::Tu
            | Self::Mo
            | Self::Tuyet
            | Self::TieuHao
            | Self::DaiHao
            | Self::PhiLiem
            | Self::BenhPhu
            | Self::PhucBinh
            | Self::QuanPhuBacSi => Nature::Hung,
            Self::ThienY
            | Self::DaoHoa
            | Self::HoaCai
            | Self::MocDuc
            | Self::Thai
            | Self::Duong
            | Self::LucSi
            | Self::TuongQuan => Nature::Neutral,
        }
    }
}

/// Either tier of star, as stored in a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Star {
    Main(MainStar),
    Aux(AuxStar),
}

impl Star {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main(s) => s.name(),
            Self::Aux(s) => s.name(),
        }
    }

    pub const fn nature(self) -> Nature {
        match self {
            Self::Main(s) => s.nature(),
            Self::Aux(s) => s.nature(),
        }
    }

    /// Sort key: all main stars before all auxiliaries, catalogue order
    /// within each tier.
    pub const fn order(self) -> u16 {
        match self {
            Self::Main(s) => s.index() as u16,
            Self::Aux(s) => 100 + s.index() as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_star_count() {
        assert_eq!(ALL_MAIN_STARS.len(), 14);
    }

    #[test]
    fn aux_star_count() {
        assert_eq!(ALL_AUX_STARS.len(), AUX_STAR_COUNT);
    }

    #[test]
    fn main_indices_sequential() {
        for (i, s) in ALL_MAIN_STARS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn aux_indices_sequential() {
        for (i, s) in ALL_AUX_STARS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty_and_unique() {
        let mut names: Vec<&str> = ALL_MAIN_STARS.iter().map(|s| s.name()).collect();
        names.extend(ALL_AUX_STARS.iter().map(|s| s.name()));
        for n in &names {
            assert!(!n.is_empty());
        }
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count, "duplicate display name");
    }

    #[test]
    fn order_main_before_aux() {
        assert!(Star::Main(MainStar::PhaQuan).order() < Star::Aux(AuxStar::VanXuong).order());
    }

    #[test]
    fn nature_defined_for_whole_catalogue() {
        let mut cat = 0;
        let mut hung = 0;
        let mut neutral = 0;
        for s in ALL_AUX_STARS {
            match s.nature() {
                Nature::Cat => cat += 1,
                Nature::Hung => hung += 1,
                Nature::Neutral => neutral += 1,
            }
        }
        assert_eq!(cat + hung + neutral, AUX_STAR_COUNT);
        assert!(cat > 0 && hung > 0 && neutral > 0);
    }

    #[test]
    fn thai_tue_ring_head_is_hung() {
        assert_eq!(AuxStar::ThaiTue.nature(), Nature::Hung);
        assert_eq!(AuxStar::TangMon.nature(), Nature::Hung);
        assert_eq!(AuxStar::ThieuDuong.nature(), Nature::Cat);
    }

    #[test]
    fn sat_pha_tham_are_hung() {
        assert_eq!(MainStar::ThatSat.nature(), Nature::Hung);
        assert_eq!(MainStar::PhaQuan.nature(), Nature::Hung);
        assert_eq!(MainStar::ThamLang.nature(), Nature::Hung);
        assert_eq!(MainStar::TuVi.nature(), Nature::Cat);
    }
}
