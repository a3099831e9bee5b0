//! Letter grades on the four-point scale.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the eleven selectable letter grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Letter {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized letter grade: {0:?}")]
pub struct UnknownLetter(pub String);

impl Letter {
    /// Selector order, best grade first.
    pub const ALL: [Letter; 11] = [
        Letter::A,
        Letter::AMinus,
        Letter::BPlus,
        Letter::B,
        Letter::BMinus,
        Letter::CPlus,
        Letter::C,
        Letter::CMinus,
        Letter::DPlus,
        Letter::D,
        Letter::F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::AMinus => "A-",
            Letter::BPlus => "B+",
            Letter::B => "B",
            Letter::BMinus => "B-",
            Letter::CPlus => "C+",
            Letter::C => "C",
            Letter::CMinus => "C-",
            Letter::DPlus => "D+",
            Letter::D => "D",
            Letter::F => "F",
        }
    }

    pub fn points(self) -> f64 {
        match self {
            Letter::A => 4.0,
            Letter::AMinus => 3.7,
            Letter::BPlus => 3.3,
            Letter::B => 3.0,
            Letter::BMinus => 2.7,
            Letter::CPlus => 2.3,
            Letter::C => 2.0,
            Letter::CMinus => 1.7,
            Letter::DPlus => 1.3,
            Letter::D => 1.0,
            Letter::F => 0.0,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }

    /// The next lower grade in selector order. Stops at `F`.
    pub fn next(self) -> Letter {
        let idx = (self.position() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// The next higher grade in selector order. Stops at `A`.
    pub fn prev(self) -> Letter {
        Self::ALL[self.position().saturating_sub(1)]
    }

    /// Selector label, e.g. `B+ (3.3)`.
    pub fn label(self) -> String {
        format!("{} ({:.1})", self.as_str(), self.points())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = UnknownLetter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownLetter(s.to_string()))
    }
}

/// The grade held by a course record.
///
/// Tokens outside the letter table are kept verbatim rather than rejected;
/// they are worth zero points in the average.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Grade {
    Letter(Letter),
    Unrecognized(String),
}

impl Grade {
    /// Interpret a grade token. Matching is exact (`"a"` is not `A`).
    pub fn parse(token: &str) -> Grade {
        match token.parse::<Letter>() {
            Ok(letter) => Grade::Letter(letter),
            Err(UnknownLetter(raw)) => Grade::Unrecognized(raw),
        }
    }

    pub fn points(&self) -> f64 {
        match self {
            Grade::Letter(letter) => letter.points(),
            Grade::Unrecognized(_) => 0.0,
        }
    }

    pub fn letter(&self) -> Option<Letter> {
        match self {
            Grade::Letter(letter) => Some(*letter),
            Grade::Unrecognized(_) => None,
        }
    }
}

impl From<Letter> for Grade {
    fn from(letter: Letter) -> Self {
        Grade::Letter(letter)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Letter(letter) => fmt::Display::fmt(letter, f),
            Grade::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        let expected = [
            ("A", 4.0),
            ("A-", 3.7),
            ("B+", 3.3),
            ("B", 3.0),
            ("B-", 2.7),
            ("C+", 2.3),
            ("C", 2.0),
            ("C-", 1.7),
            ("D+", 1.3),
            ("D", 1.0),
            ("F", 0.0),
        ];
        for (token, points) in expected {
            assert_eq!(Grade::parse(token).points(), points, "grade {}", token);
        }
    }

    #[test]
    fn test_unrecognized_tokens_are_zero() {
        for token in ["Z", "", "a", "A+", "E", " A"] {
            let grade = Grade::parse(token);
            assert_eq!(grade, Grade::Unrecognized(token.to_string()));
            assert_eq!(grade.points(), 0.0);
            assert_eq!(grade.letter(), None);
        }
    }

    #[test]
    fn test_next_prev_clamp_at_ends() {
        assert_eq!(Letter::A.prev(), Letter::A);
        assert_eq!(Letter::A.next(), Letter::AMinus);
        assert_eq!(Letter::D.next(), Letter::F);
        assert_eq!(Letter::F.next(), Letter::F);
        assert_eq!(Letter::BPlus.prev(), Letter::AMinus);
    }

    #[test]
    fn test_label_and_display() {
        assert_eq!(Letter::A.label(), "A (4.0)");
        assert_eq!(Letter::BPlus.label(), "B+ (3.3)");
        assert_eq!(Letter::F.label(), "F (0.0)");
        assert_eq!(Grade::parse("C-").to_string(), "C-");
        assert_eq!(Grade::parse("Z").to_string(), "Z");
    }

    #[test]
    fn test_from_str_error() {
        let err = "Q".parse::<Letter>().unwrap_err();
        assert_eq!(err, UnknownLetter("Q".into()));
        assert_eq!(err.to_string(), "unrecognized letter grade: \"Q\"");
    }
}
