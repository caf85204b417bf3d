use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One timesheet row. Values are kept as written in the file; numeric and
/// date interpretation happens later in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Client")]
    pub client: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Hours")]
    pub hours: String,
}

impl Record {
    pub fn new(client: &str, date: &str, hours: &str) -> Self {
        Record {
            client: client.to_string(),
            date: date.to_string(),
            hours: hours.to_string(),
        }
    }
}

/// Hours summed over every record of one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: String,
    pub hours: f64,
}

/// Output language. Only affects the decimal separator of the rendered hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fi,
    #[default]
    En,
}

impl Language {
    pub fn decimal_separator(self) -> char {
        match self {
            Language::Fi => ',',
            Language::En => '.',
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Fi => "fi",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fi" => Ok(Language::Fi),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language '{}', expected 'fi' or 'en'", other)),
        }
    }
}
