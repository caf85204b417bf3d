use shared::models::{DailyTotal, Language};
use shared::utils::{format_decimal, format_number};

pub const DEFAULT_CLASS_PREFIX: &str = "day-";

/// Day of month from a `YYYY-MM-DD` date: the leading digits of the last
/// dash-separated part. `None` when that part does not start with a digit.
pub fn get_day(date: &str) -> Option<u32> {
    day_digits(date)?.parse().ok()
}

fn day_digits(date: &str) -> Option<&str> {
    let last = date.rsplit('-').next()?.trim_start();
    let digits_end = last
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(last.len(), |(i, _)| i);
    (digits_end > 0).then(|| &last[..digits_end])
}

/// The day as it appears in the class name. Digit runs too long for a day of
/// month are still printed as a number rather than dropped.
fn day_label(date: &str) -> Option<String> {
    let digits = day_digits(date)?;
    match digits.parse::<u32>() {
        Ok(day) => Some(day.to_string()),
        Err(_) => digits.parse::<f64>().ok().map(format_number),
    }
}

/// Turns daily totals into statements that set the value of the first element
/// with class `{class_prefix}{day}`.
#[derive(Debug, Clone)]
pub struct ScriptFormatter {
    language: Language,
    class_prefix: String,
}

impl ScriptFormatter {
    pub fn new(language: Language) -> Self {
        Self::with_class_prefix(language, DEFAULT_CLASS_PREFIX)
    }

    pub fn with_class_prefix(language: Language, class_prefix: &str) -> Self {
        ScriptFormatter {
            language,
            class_prefix: class_prefix.to_string(),
        }
    }

    pub fn format_hours(&self, hours: f64) -> String {
        format_decimal(hours, self.language.decimal_separator())
    }

    pub fn statement(&self, total: &DailyTotal) -> String {
        let day = match day_label(&total.date) {
            Some(day) => day,
            None => {
                tracing::warn!(date = %total.date, "Could not extract day of month");
                "NaN".to_string()
            }
        };
        format!(
            "document.getElementsByClassName('{}{}')[0].value = \"{}\"",
            self.class_prefix,
            day,
            self.format_hours(total.hours)
        )
    }

    /// All statements joined with `;`. No trailing separator or newline.
    pub fn render(&self, totals: &[DailyTotal]) -> String {
        totals
            .iter()
            .map(|total| self.statement(total))
            .collect::<Vec<_>>()
            .join(";")
    }
}
