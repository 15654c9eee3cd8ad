use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete fundamentals tier. Only S and A are worth a price lookup
/// and a rendered commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    S,
    A,
    B,
}

impl Rank {
    pub fn qualifies(&self) -> bool {
        matches!(self, Rank::S | Rank::A)
    }
}

/// Classify growth and margin percentages into a rank tier.
/// Lower bounds are inclusive.
pub fn classify_rank(growth: f64, margin: f64) -> Rank {
    if growth >= 20.0 && margin >= 10.0 {
        Rank::S
    } else if growth >= 10.0 {
        Rank::A
    } else {
        Rank::B
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::S => write!(f, "S"),
            Rank::A => write!(f, "A"),
            Rank::B => write!(f, "B"),
        }
    }
}

impl FromStr for Rank {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Rank::S),
            "A" => Ok(Rank::A),
            "B" => Ok(Rank::B),
            _ => Err(format!("Unknown rank: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s_boundary_is_inclusive() {
        assert_eq!(classify_rank(20.0, 10.0), Rank::S);
    }

    #[test]
    fn test_just_below_s_growth_is_a() {
        // High margin cannot rescue a growth figure under the S cutoff.
        assert_eq!(classify_rank(19.999, 50.0), Rank::A);
    }

    #[test]
    fn test_s_needs_both_thresholds() {
        assert_eq!(classify_rank(25.0, 9.999), Rank::A);
    }

    #[test]
    fn test_a_boundary_is_inclusive() {
        assert_eq!(classify_rank(10.0, 0.0), Rank::A);
    }

    #[test]
    fn test_below_a_is_b_regardless_of_margin() {
        assert_eq!(classify_rank(9.999, 99.0), Rank::B);
        assert_eq!(classify_rank(-5.0, 40.0), Rank::B);
    }

    #[test]
    fn test_only_s_and_a_qualify() {
        assert!(Rank::S.qualifies());
        assert!(Rank::A.qualifies());
        assert!(!Rank::B.qualifies());
    }

    #[test]
    fn test_rank_from_str() {
        assert_eq!(Rank::from_str("s").unwrap(), Rank::S);
        assert_eq!(Rank::from_str("A").unwrap(), Rank::A);
        assert!(Rank::from_str("c").is_err());
    }
}
