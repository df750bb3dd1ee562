//! Standard miniature circuit breaker ratings offered for selection.

/// Nominal ratings in amps.
pub const STANDARD_RATINGS: [u32; 9] = [6, 10, 16, 20, 25, 32, 40, 50, 63];

pub fn is_standard_rating(amps: u32) -> bool {
    STANDARD_RATINGS.contains(&amps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_ratings() {
        assert!(is_standard_rating(16));
        assert!(is_standard_rating(63));
        assert!(!is_standard_rating(0));
        assert!(!is_standard_rating(15));
    }

    #[test]
    fn ratings_are_ascending() {
        assert!(STANDARD_RATINGS.windows(2).all(|w| w[0] < w[1]));
    }
}
