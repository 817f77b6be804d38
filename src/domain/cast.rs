//! Casting: turning coins, clocks or explicit values into six lines
//!
//! Every method returns a raw hexagram stamped with the cast date and its
//! day stem. Randomness and the clock can be injected through the `*_with`
//! and `*_at` variants; the plain forms use the thread RNG and local time.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::calendar::{checked_date, day_stem};
use super::error::DivinationError;
use super::hexagram::Hexagram;
use super::line::LineKind;

/// How a hexagram was cast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastMethod {
    Coins,
    #[default]
    Time,
    Manual,
    SpecifiedDate,
}

impl CastMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastMethod::Coins => "coins",
            CastMethod::Time => "time",
            CastMethod::Manual => "manual",
            CastMethod::SpecifiedDate => "specified_date",
        }
    }
}

/// Line kind for the number of heads among three coins
pub fn coin_kind(heads: u8) -> Result<LineKind, DivinationError> {
    match heads {
        3 => Ok(LineKind::OldYang),
        2 => Ok(LineKind::YoungYin),
        1 => Ok(LineKind::YoungYang),
        0 => Ok(LineKind::OldYin),
        n => Err(DivinationError::InternalInconsistency(format!(
            "three coins cannot show {n} heads"
        ))),
    }
}

/// Tosses three fair coins and reads the line
pub fn toss_line<R: Rng + ?Sized>(rng: &mut R) -> Result<LineKind, DivinationError> {
    let heads = (0..3).map(|_| u8::from(rng.gen_bool(0.5))).sum();
    coin_kind(heads)
}

/// Line kinds from the six time-sum formulas
pub fn time_kinds(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> [LineKind; 6] {
    let year_digit = i64::from(year.rem_euclid(10));
    let (month, day, hour, minute, second) = (
        i64::from(month),
        i64::from(day),
        i64::from(hour),
        i64::from(minute),
        i64::from(second),
    );

    [
        year_digit + month,
        day + hour,
        minute + second,
        year_digit + day,
        month + minute,
        hour + second,
    ]
    .map(LineKind::from_number)
}

fn stamp_now(hexagram: Hexagram, now: NaiveDateTime) -> Hexagram {
    let stem = day_stem(now.date());
    hexagram.stamped(now.month(), now.day(), now.hour(), stem, false)
}

/// Coin-toss cast with the thread RNG at the current local time
pub fn cast_by_coins() -> Result<Hexagram, DivinationError> {
    cast_by_coins_with(&mut rand::thread_rng(), Local::now().naive_local())
}

pub fn cast_by_coins_with<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<Hexagram, DivinationError> {
    let mut kinds = [LineKind::YoungYang; 6];
    for kind in kinds.iter_mut() {
        *kind = toss_line(rng)?;
    }
    Ok(stamp_now(Hexagram::assemble(kinds), now))
}

/// Cast from the current local time
pub fn cast_by_time() -> Hexagram {
    cast_at(Local::now().naive_local())
}

/// Cast from a given moment, using its minute and second
pub fn cast_at(now: NaiveDateTime) -> Hexagram {
    let kinds = time_kinds(
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    );
    stamp_now(Hexagram::assemble(kinds), now)
}

/// Cast from six explicit line kinds, stamped with the current local time
pub fn cast_manual(kinds: &[LineKind]) -> Result<Hexagram, DivinationError> {
    cast_manual_at(kinds, Local::now().naive_local())
}

pub fn cast_manual_at(kinds: &[LineKind], now: NaiveDateTime) -> Result<Hexagram, DivinationError> {
    let kinds: [LineKind; 6] = kinds.try_into().map_err(|_| {
        DivinationError::InvalidInput(format!("exactly 6 line values required, got {}", kinds.len()))
    })?;
    Ok(stamp_now(Hexagram::assemble(kinds), now))
}

/// Cast from six numeric codes (0..=3)
pub fn cast_manual_codes(codes: &[u8]) -> Result<Hexagram, DivinationError> {
    let kinds = codes
        .iter()
        .map(|&c| LineKind::from_code(c))
        .collect::<Result<Vec<_>, _>>()?;
    cast_manual(&kinds)
}

/// Cast for a given date and hour with a random minute and second
///
/// `lunar` is recorded on the result but the date is not converted.
pub fn cast_for_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    lunar: bool,
) -> Result<Hexagram, DivinationError> {
    cast_for_date_with(&mut rand::thread_rng(), year, month, day, hour, lunar)
}

pub fn cast_for_date_with<R: Rng + ?Sized>(
    rng: &mut R,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    lunar: bool,
) -> Result<Hexagram, DivinationError> {
    let date = checked_date(year, month, day)?;
    if hour > 23 {
        return Err(DivinationError::InvalidInput(format!(
            "hour must be 0..=23, got {hour}"
        )));
    }

    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);
    let kinds = time_kinds(year, month, day, hour, minute, second);

    Ok(Hexagram::assemble(kinds).stamped(month, day, hour, day_stem(date), lunar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use LineKind::*;

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn coin_sums_map_to_kinds() {
        assert_eq!(coin_kind(3).unwrap(), OldYang);
        assert_eq!(coin_kind(2).unwrap(), YoungYin);
        assert_eq!(coin_kind(1).unwrap(), YoungYang);
        assert_eq!(coin_kind(0).unwrap(), OldYin);
    }

    #[test]
    fn impossible_coin_sum_fails_loudly() {
        assert!(matches!(
            coin_kind(4),
            Err(DivinationError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn coin_cast_is_stamped() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = moment(2024, 6, 1, 15, 30, 0);
        let hex = cast_by_coins_with(&mut rng, now).unwrap();

        assert_eq!(hex.month, Some(6));
        assert_eq!(hex.day, Some(1));
        assert_eq!(hex.hour, Some(15));
        assert_eq!(hex.day_stem, Some(day_stem(now.date())));
        assert!(!hex.lunar);
    }

    #[test]
    fn coin_cast_is_reproducible_with_a_seed() {
        let now = moment(2024, 6, 1, 15, 30, 0);
        let a = cast_by_coins_with(&mut StdRng::seed_from_u64(42), now).unwrap();
        let b = cast_by_coins_with(&mut StdRng::seed_from_u64(42), now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn time_formulas() {
        // 2023-05-10 14:25:37
        // pos1 = 3+5 = 8 -> 0, pos2 = 10+14 = 24 -> 0, pos3 = 25+37 = 62 -> 2
        // pos4 = 3+10 = 13 -> 1, pos5 = 5+25 = 30 -> 2, pos6 = 14+37 = 51 -> 3
        let kinds = time_kinds(2023, 5, 10, 14, 25, 37);
        assert_eq!(kinds, [YoungYang, YoungYang, OldYang, YoungYin, OldYang, OldYin]);
    }

    #[test]
    fn time_cast_uses_the_given_moment() {
        let now = moment(2023, 5, 10, 14, 25, 37);
        let hex = cast_at(now);
        assert_eq!(hex.kinds(), time_kinds(2023, 5, 10, 14, 25, 37));
        assert_eq!(hex.month, Some(5));
        assert_eq!(hex.day, Some(10));
        assert_eq!(hex.hour, Some(14));
    }

    #[test]
    fn manual_requires_six_values() {
        let now = moment(2024, 1, 1, 0, 0, 0);
        for n in [0, 5, 7] {
            let kinds = vec![YoungYang; n];
            assert!(matches!(
                cast_manual_at(&kinds, now),
                Err(DivinationError::InvalidInput(_))
            ));
        }
        assert!(cast_manual_at(&[YoungYin; 6], now).is_ok());
    }

    #[test]
    fn manual_codes_are_validated() {
        assert!(cast_manual_codes(&[0, 1, 2, 3, 0, 1]).is_ok());
        assert!(matches!(
            cast_manual_codes(&[0, 1, 2, 9, 0, 1]),
            Err(DivinationError::InvalidInput(_))
        ));
    }

    #[test]
    fn specified_date_keeps_fixed_lines() {
        // Positions 1, 2 and 4 do not depend on the random minute/second
        let mut rng = StdRng::seed_from_u64(1);
        let hex = cast_for_date_with(&mut rng, 1990, 8, 15, 6, true).unwrap();
        let kinds = hex.kinds();

        assert_eq!(kinds[0], LineKind::from_number(0 + 8));
        assert_eq!(kinds[1], LineKind::from_number(15 + 6));
        assert_eq!(kinds[3], LineKind::from_number(0 + 15));
        assert_eq!(hex.month, Some(8));
        assert_eq!(hex.day, Some(15));
        assert_eq!(hex.hour, Some(6));
        assert!(hex.lunar);
        assert_eq!(
            hex.day_stem,
            Some(day_stem(NaiveDate::from_ymd_opt(1990, 8, 15).unwrap()))
        );
    }

    #[test]
    fn specified_date_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(cast_for_date_with(&mut rng, 2023, 2, 30, 1, false).is_err());
        assert!(cast_for_date_with(&mut rng, 2023, 2, 3, 24, false).is_err());
    }
}
