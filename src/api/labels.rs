use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label formatting configuration.
///
/// Stands in for the host's locale-aware date formatter and string
/// resources: a `chrono` format string for the window dates and a template
/// with an `{amount}` placeholder for the scale-ceiling label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelBehavior {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_max_amount_template")]
    pub max_amount_template: String,
}

impl Default for LabelBehavior {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            max_amount_template: default_max_amount_template(),
        }
    }
}

impl LabelBehavior {
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    #[must_use]
    pub fn format_max_amount(&self, max_amount: i64) -> String {
        self.max_amount_template
            .replace("{amount}", &max_amount.to_string())
    }
}

fn default_date_format() -> String {
    // Short date, `%x` = `%m/%d/%y`.
    "%x".to_owned()
}

fn default_max_amount_template() -> String {
    "max: {amount}".to_owned()
}
