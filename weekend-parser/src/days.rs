use std::fmt;

use chrono::Weekday;
use scraper::Selector;

/// The days the calendar, cinema and restaurant have in common.
///
/// This is the only place that knows how a day is spelled by each site: the
/// calendar and restaurant use the English label, the cinema a two digit code
/// which is the ISO weekday number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::Friday, Day::Saturday, Day::Sunday];

    #[must_use]
    pub fn weekday(self) -> Weekday {
        match self {
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    #[must_use]
    pub fn code(self) -> String {
        format!("{:02}", self.weekday().number_from_monday())
    }

    pub fn from_label(label: &str) -> Option<Day> {
        Self::ALL.into_iter().find(|day| day.label() == label)
    }

    pub fn from_code(code: &str) -> Option<Day> {
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let number = code.parse::<u32>().ok()?;
        Self::ALL
            .into_iter()
            .find(|day| day.weekday().number_from_monday() == number)
    }

    /// Entries of the restaurant page listing this day's tables.
    pub(crate) fn booking_section(self) -> &'static Selector {
        match self {
            Day::Friday => selector!("div.WordSection2 span"),
            Day::Saturday => selector!("div.WordSection4 span"),
            Day::Sunday => selector!("div.WordSection6 span"),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
