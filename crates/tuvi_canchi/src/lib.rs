//! Can/Chi (Heavenly Stem / Earthly Branch) cycle arithmetic.
//!
//! This crate provides:
//! - The 10 Can (stems) and 12 Chi (branches) with modular stepping
//! - The 60-term sexagenary cycle anchored to CE 1984 = Giáp Tý
//! - Ngũ Hành (five element) relations and the nạp âm element table
//!
//! Everything here is pure integer arithmetic over fixed cycles; all
//! functions are total.

pub mod can;
pub mod chi;
pub mod hoa_giap;
pub mod ngu_hanh;

pub use can::{ALL_CANS, Can};
pub use chi::{ALL_CHIS, Chi};
pub use hoa_giap::{CANCHI_EPOCH_YEAR, CanChi, canchi_from_index, canchi_from_year, nap_am};
pub use ngu_hanh::{NguHanh, SinhKhac};
