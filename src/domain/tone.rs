use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Writing register the model rewrites extracted content into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Academic,
    Technical,
    Simple,
    Informative,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Academic,
        Tone::Technical,
        Tone::Simple,
        Tone::Informative,
        Tone::Concise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Academic => "Academic",
            Tone::Technical => "Technical",
            Tone::Simple => "Simple",
            Tone::Informative => "Informative",
            Tone::Concise => "Concise",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let expected = Tone::ALL.map(|t| t.as_str()).join(", ");
                format!("Invalid tone: {}. Expected one of: {}", wanted, expected)
            })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
