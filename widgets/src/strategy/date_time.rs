use chrono::NaiveDateTime;
use form_data::multi_value::MultiValueMap;

use super::ItemStrategy;
use crate::context::SubwidgetKind;
use crate::error::{ParseError, SerializationError};

/// Formats accepted for a recombined "date time" pair. The time half may
/// carry seconds and a fraction, or omit them.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, ParseError> {
    let mut result = NaiveDateTime::parse_from_str(text, DATE_TIME_FORMATS[0]);
    for format in &DATE_TIME_FORMATS[1..] {
        if result.is_ok() {
            break;
        }
        result = NaiveDateTime::parse_from_str(text, format);
    }
    result.map_err(|source| ParseError::InvalidDateTime {
        text: text.to_string(),
        source,
    })
}

/// Items edited as a paired date control and time control.
/// The submission carries two parallel lists, `{name}_0` with the dates and
/// `{name}_1` with the times, which get zipped back together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeStrategy;

impl ItemStrategy for DateTimeStrategy {
    type Item = NaiveDateTime;

    fn kind(&self) -> SubwidgetKind {
        SubwidgetKind::SplitDateTime
    }

    fn submitted_texts(&self, data: &MultiValueMap, name: &str) -> Vec<String> {
        let dates = data.get_all(&format!("{}_0", name)).unwrap_or(&[]);
        let times = data.get_all(&format!("{}_1", name)).unwrap_or(&[]);
        if dates.len() != times.len() {
            log::warn!(
                "field {:?}: {} dates but {} times submitted, ignoring the unpaired tail",
                name,
                dates.len(),
                times.len()
            );
        }
        // A position is kept only when both halves are non-empty.
        dates
            .iter()
            .zip(times.iter())
            .filter(|(date, time)| !date.is_empty() && !time.is_empty())
            .map(|(date, time)| format!("{} {}", date, time))
            .collect()
    }

    fn parse(&self, text: &str) -> Result<NaiveDateTime, ParseError> {
        parse_date_time(text)
    }

    fn format(&self, item: &NaiveDateTime) -> Result<String, SerializationError> {
        Ok(item.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}
