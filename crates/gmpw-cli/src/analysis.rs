use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use colored::{ColoredString, Colorize};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use term_table::row::Row;
use term_table::table_cell::{Alignment, TableCell};
use term_table::{Table, TableStyle};
use zxcvbn::{zxcvbn, Entropy, ZxcvbnError};

/// zxcvbn strength estimate for a generated password.
pub struct SecurityAnalysis {
    entropy: Entropy,
}

impl SecurityAnalysis {
    pub fn new(password: &str) -> Result<Self, ZxcvbnError> {
        let entropy = zxcvbn(password, &[])?;
        Ok(Self { entropy })
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from(self.entropy.score())
    }

    fn guesses(&self) -> String {
        format!("10^{:.0}", self.entropy.guesses_log10())
    }

    /// (json key, table label, estimate) for each attacker model.
    fn crack_times(&self) -> [(&'static str, &'static str, String); 4] {
        let times = self.entropy.crack_times();
        [
            (
                "100/h",
                "100 attempts/hour",
                times.online_throttling_100_per_hour().to_string(),
            ),
            (
                "10/s",
                "10 attempts/second",
                times.online_no_throttling_10_per_second().to_string(),
            ),
            (
                "10^4/s",
                "10^4 attempts/second",
                times.offline_slow_hashing_1e4_per_second().to_string(),
            ),
            (
                "10^10/s",
                "10^10 attempts/second",
                times.offline_fast_hashing_1e10_per_second().to_string(),
            ),
        ]
    }

    pub fn display_report(&self, table_style: TableStyle, max_width: usize) {
        let summary = vec![
            ("Strength", self.strength().to_colored_string()),
            ("Guesses", self.guesses().normal()),
        ];
        println!("{}", render_table("Security Analysis", summary, table_style, max_width));

        let crack_times = self
            .crack_times()
            .into_iter()
            .map(|(_, label, estimate)| (label, estimate.normal()))
            .collect();
        println!("{}", render_table("Crack Times", crack_times, table_style, max_width));
    }
}

fn render_table(
    title: &str,
    rows: Vec<(&str, ColoredString)>,
    table_style: TableStyle,
    max_width: usize,
) -> String {
    let mut table = Table::new();
    table.max_column_width = max_width;
    table.style = table_style;

    table.add_row(Row::new(vec![TableCell::new_with_alignment(
        title.bold(),
        2,
        Alignment::Left,
    )]));

    for (label, value) in rows {
        table.add_row(Row::new(vec![
            TableCell::new(label.bold()),
            TableCell::new_with_alignment(value, 1, Alignment::Left),
        ]));
    }

    table.render()
}

impl Serialize for SecurityAnalysis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let crack_times: BTreeMap<&str, String> = self
            .crack_times()
            .into_iter()
            .map(|(key, _, estimate)| (key, estimate))
            .collect();

        let mut state = serializer.serialize_struct("SecurityAnalysis", 3)?;
        state.serialize_field("strength", &self.strength().to_string())?;
        state.serialize_field("guesses", &self.guesses())?;
        state.serialize_field("crack_times", &crack_times)?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl From<u8> for PasswordStrength {
    fn from(score: u8) -> Self {
        match score {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Reasonable,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }
}

impl PasswordStrength {
    fn to_colored_string(self) -> ColoredString {
        match self {
            PasswordStrength::VeryWeak => self.to_string().red(),
            PasswordStrength::Weak => self.to_string().bright_red(),
            PasswordStrength::Reasonable => self.to_string().yellow(),
            PasswordStrength::Strong => self.to_string().bright_green(),
            PasswordStrength::VeryStrong => self.to_string().green(),
        }
    }
}

impl Display for PasswordStrength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let strength = match self {
            PasswordStrength::VeryWeak => "very weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Reasonable => "reasonable",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very strong",
        };
        write!(f, "{}", strength)
    }
}
