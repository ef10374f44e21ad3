use crate::pricing::constants::*;

/// Round to `places` decimal places, halves going up.
///
/// Only non-negative amounts flow through here, where `f64::round`
/// (half away from zero) and half-up agree.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round a currency amount to the nearest cent.
#[inline]
pub fn round_cents(value: f64) -> f64 {
    round_half_up(value, 2)
}

/// Round a calorie total to the nearest whole calorie.
#[inline]
pub fn round_calories(value: f64) -> u32 {
    round_half_up(value, 0) as u32
}

/// Currency amount as whole cents, for stable ordering and comparison.
#[inline]
pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Age (in rotations) at which a dish is removed from a belt of `belt_size` slots.
///
/// Vegetarian dishes are checked first, then anything without shellfish;
/// shellfish gets the shortest shelf life.
pub fn spoilage_age(is_vegetarian: bool, has_shellfish: bool, belt_size: usize) -> u64 {
    let laps = if is_vegetarian {
        VEGETARIAN_SHELF_LAPS
    } else if !has_shellfish {
        SEAFOOD_SHELF_LAPS
    } else {
        SHELLFISH_SHELF_LAPS
    };
    laps * belt_size as u64
}

/// Whether a plate of the given age has reached its spoilage threshold.
#[inline]
pub fn is_spoiled(age: u64, is_vegetarian: bool, has_shellfish: bool, belt_size: usize) -> bool {
    age >= spoilage_age(is_vegetarian, has_shellfish, belt_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_round_half_up_cents() {
        assert_float_absolute_eq!(round_cents(1.3275), 1.33, 1e-12);
        assert_float_absolute_eq!(round_cents(0.5625), 0.56, 1e-12);
        assert_float_absolute_eq!(round_cents(0.125), 0.13, 1e-12);
        assert_float_absolute_eq!(round_cents(2.0), 2.0, 1e-12);
    }

    #[test]
    fn test_round_calories() {
        assert_eq!(round_calories(36.0), 36);
        assert_eq!(round_calories(54.5), 55);
        assert_eq!(round_calories(54.49), 54);
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(1.33), 133);
        assert_eq!(to_cents(100.0), 10_000);
        assert_eq!(to_cents(-0.5), -50);
    }

    #[test]
    fn test_spoilage_age_first_match_wins() {
        // Vegetarian wins even when the shellfish flag is set.
        assert_eq!(spoilage_age(true, true, 6), 18);
        assert_eq!(spoilage_age(false, false, 6), 12);
        assert_eq!(spoilage_age(false, true, 6), 6);
    }

    #[test]
    fn test_is_spoiled_boundary() {
        assert!(!is_spoiled(5, false, true, 6));
        assert!(is_spoiled(6, false, true, 6));
        assert!(!is_spoiled(11, false, false, 6));
        assert!(is_spoiled(12, false, false, 6));
        assert!(!is_spoiled(17, true, false, 6));
        assert!(is_spoiled(18, true, false, 6));
    }
}
