//! Tử Vi (Purple Star Astrology) chart computation engine.
//!
//! This crate provides:
//! - Palace layout: the 12-palace ring, Mệnh/Thân anchors, palace stems, Cục
//! - Star placement: the Tử Vi anchor table, both main-star chains, and the
//!   full auxiliary rule set including the three 12-star rings
//! - Brightness and nature classification per placed star
//!
//! The engine is a pure function over a normalized lunar birth input; all
//! rule tables are process-wide immutable constants. Calendar conversion,
//! persistence, transport, and rendering live with the callers.

pub mod aux;
pub mod brightness;
pub mod chart;
pub mod cuc;
pub mod error;
pub mod input;
pub mod palace;
pub mod placement;
pub mod star;

pub use brightness::{Brightness, brightness_of};
pub use chart::{Chart, Layout, Palace, PlacedStar, compute_chart};
pub use cuc::Cuc;
pub use error::TuViError;
pub use input::{BirthInput, Gender};
pub use palace::{ALL_PALACE_ROLES, PalaceRole, body_branch, cuc_for, destiny_branch, palace_stem};
pub use placement::{anchor_branch, main_positions};
pub use star::{
    ALL_AUX_STARS, ALL_MAIN_STARS, AUX_STAR_COUNT, AuxStar, MainStar, Nature, Star,
};
