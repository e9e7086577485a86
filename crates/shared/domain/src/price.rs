use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A price in integer cents.
///
/// `Display` renders dollars the way the storefront shows them: thousands separators,
/// at most two fraction digits and no trailing zeros (`150000` -> `$1,500`,
/// `1950` -> `$19.5`).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    #[must_use]
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Dollar amount without the currency sign.
    #[must_use]
    pub fn dollars(self) -> String {
        let whole = group_thousands(self.0 / 100);
        match self.0 % 100 {
            0 => whole,
            fraction if fraction % 10 == 0 => format!("{whole}.{}", fraction / 10),
            fraction => format!("{whole}.{fraction:02}"),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.dollars())
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
