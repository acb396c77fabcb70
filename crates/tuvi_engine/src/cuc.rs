//! Cục: the element cycle governing the anchor-star day table.

use serde::Serialize;
use tuvi_canchi::NguHanh;

/// The five cục, identified by element. Exactly one per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cuc {
    pub element: NguHanh,
}

impl Cuc {
    pub const fn new(element: NguHanh) -> Cuc {
        Cuc { element }
    }

    /// Cycle length used as the modulus of the Tử Vi day table:
    /// Thủy 2, Mộc 3, Kim 4, Thổ 5, Hỏa 6.
    pub const fn so(self) -> u8 {
        match self.element {
            NguHanh::Thuy => 2,
            NguHanh::Moc => 3,
            NguHanh::Kim => 4,
            NguHanh::Tho => 5,
            NguHanh::Hoa => 6,
        }
    }

    /// Traditional name, e.g. "Thủy nhị cục".
    pub const fn name(self) -> &'static str {
        match self.element {
            NguHanh::Thuy => "Thủy nhị cục",
            NguHanh::Moc => "Mộc tam cục",
            NguHanh::Kim => "Kim tứ cục",
            NguHanh::Tho => "Thổ ngũ cục",
            NguHanh::Hoa => "Hỏa lục cục",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuvi_canchi::ngu_hanh::ALL_NGU_HANH;

    #[test]
    fn cycle_lengths_distinct() {
        let mut lens: Vec<u8> = ALL_NGU_HANH.iter().map(|&e| Cuc::new(e).so()).collect();
        lens.sort_unstable();
        assert_eq!(lens, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn names_carry_the_number() {
        assert_eq!(Cuc::new(NguHanh::Thuy).name(), "Thủy nhị cục");
        assert_eq!(Cuc::new(NguHanh::Hoa).name(), "Hỏa lục cục");
    }
}
