//! Credit-weighted grade point average.

use super::store::Course;
use std::fmt;

/// Result of folding a course list.
///
/// `NoCredits` is distinct from an average of zero: it means no course had a
/// usable credit value, and it renders as a bare `0` rather than `0.00`
/// unless normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gpa {
    Average(f64),
    #[default]
    NoCredits,
}

impl Gpa {
    /// Display text. With `normalize_zero` both variants use two decimals.
    pub fn display(self, normalize_zero: bool) -> String {
        match self {
            Gpa::NoCredits if normalize_zero => "0.00".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gpa::Average(avg) => f.write_str(&to_fixed_2(*avg)),
            Gpa::NoCredits => f.write_str("0"),
        }
    }
}

/// Two-decimal text with ties rounded away from zero.
///
/// `{:.2}` rounds the exact binary value to nearest with ties to even. A tie
/// at the third decimal is only representable when `x` is an odd number of
/// eighths (`.125`, `.375`, `.625`, `.875`), and multiplying by 8 or 100 is
/// exact for such values, so those are detected and rounded up separately.
fn to_fixed_2(x: f64) -> String {
    let magnitude = x.abs();
    let eighths = magnitude * 8.0;
    if !(eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 == 1.0) {
        return format!("{:.2}", x);
    }
    let hundredths = (magnitude * 100.0).ceil() as u64;
    let sign = if x < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

/// Running sums over the courses that carry usable credits.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub total_points: f64,
    pub total_credits: f64,
    /// Number of courses that contributed.
    pub counted: usize,
}

impl Tally {
    pub fn gpa(&self) -> Gpa {
        if self.total_credits > 0.0 {
            Gpa::Average(self.total_points / self.total_credits)
        } else {
            Gpa::NoCredits
        }
    }
}

/// Whether a course's credits take part in the average. NaN, non-positive
/// and infinite values are left out of both sums.
pub fn counts(credits: f64) -> bool {
    credits.is_finite() && credits > 0.0
}

pub fn tally(courses: &[Course]) -> Tally {
    courses
        .iter()
        .filter(|c| counts(c.credits))
        .fold(Tally::default(), |acc, c| Tally {
            total_points: acc.total_points + c.credits * c.grade.points(),
            total_credits: acc.total_credits + c.credits,
            counted: acc.counted + 1,
        })
}

pub fn calculate(courses: &[Course]) -> Gpa {
    tally(courses).gpa()
}
