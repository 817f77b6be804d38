//! Domain models for liuyao
//!
//! The casting and interpretation pipeline without any I/O concerns. Every
//! operation takes explicit inputs and returns new values.

mod symbols;
mod line;
mod error;
mod hexagram;
mod calendar;
mod cast;
mod annotate;
mod derive;
mod interpret;
mod texts;
mod reading;

pub use symbols::{Branch, Element, Kinship, Spirit, Stem, Trigram};
pub use line::{Line, LineKind};
pub use error::DivinationError;
pub use hexagram::Hexagram;
pub use calendar::{checked_date, day_stem, days_since_epoch, parse_date};
pub use cast::{
    cast_at, cast_by_coins, cast_by_coins_with, cast_by_time, cast_for_date, cast_for_date_with,
    cast_manual, cast_manual_at, cast_manual_codes, coin_kind, time_kinds, toss_line, CastMethod,
};
pub use annotate::{annotate, assign_kinship, assign_spirits, assign_spirits_for, assign_stems_and_branches};
pub use derive::{derive, hidden, mutual, opposite, reversed, transformed, DerivedKind};
pub use interpret::{glyph_row, interpret, Interpretation, LineKinship, LineSpirit, Verdict};
pub use texts::{generic_text, LineTexts, NoTexts};
pub use reading::{Chart, Reading};
