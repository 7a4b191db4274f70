use std::collections::HashMap;

use scraper::{ElementRef, Html};

use crate::{
    AvailableMovie, Day, DayAvailability, ExtractError, MovieRecord, RestaurantSlot, Status,
};

/// A parsed HTML page.
///
/// Parsing is lenient, any non-empty body becomes a document. Selectors that
/// match nothing simply produce fewer records.
pub struct Document(Html);

impl Document {
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self, ExtractError> {
        let s = s.as_ref();
        if s.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        Ok(Self(Html::parse_document(s)))
    }
}

fn text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The table an element belongs to, skipping the element itself.
fn enclosing_table(element: ElementRef) -> Option<ElementRef> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "table")
}

/// Text of `element` without the text of any table nested inside it.
fn table_text(element: ElementRef, table: ElementRef) -> String {
    element
        .descendants()
        .filter(|node| {
            node.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|ancestor| ancestor.value().name() == "table")
                == Some(table)
        })
        .filter_map(|node| node.value().as_text())
        .flat_map(|text| text.chars())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Characters `from..to` of `s`, or whatever part of that range exists.
fn char_range(s: &str, from: usize, to: usize) -> String {
    s.chars().skip(from).take(to - from).collect()
}

fn hrefs(document: &Document) -> impl Iterator<Item = &str> {
    document
        .0
        .select(selector!("li a"))
        .map(|anchor| anchor.value().attr("href").unwrap_or_default())
}

/// Navigation links of the start page, in document order. An anchor without
/// href gives an empty link.
pub fn extract_page_links(document: &Document) -> Vec<String> {
    hrefs(document).map(str::to_string).collect()
}

/// Links to every participant's calendar. The hrefs are appended to
/// `base_url` verbatim.
pub fn extract_calendar_links(document: &Document, base_url: &str) -> Vec<String> {
    hrefs(document).map(|href| format!("{base_url}{href}")).collect()
}

/// Days marked "ok" in a participant's calendar.
///
/// A cell's day is the header at the same column of its own table.
pub fn extract_day_availability(document: &Document) -> Vec<DayAvailability> {
    let name = document
        .0
        .select(selector!("h2"))
        .map(text)
        .collect::<String>();

    let mut days = Vec::new();

    for table in document.0.select(selector!("table")) {
        let own = |element: &ElementRef| enclosing_table(*element) == Some(table);

        let headers = table
            .select(selector!("thead tr th"))
            .filter(own)
            .map(|header| table_text(header, table))
            .collect::<Vec<_>>();

        for row in table.select(selector!("tbody tr")).filter(own) {
            let cells = row
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| cell.value().name() == "td");

            for (column, cell) in cells.enumerate() {
                let status = Status::from_cell(&table_text(cell, table));
                if status != Status::Ok {
                    continue;
                }

                days.push(DayAvailability {
                    name: name.clone(),
                    day: headers.get(column).cloned().unwrap_or_default(),
                    status,
                });
            }
        }
    }

    days
}

/// Decodes a response of the cinema's `check` endpoint.
pub fn parse_movie_records<S: AsRef<str>>(s: S) -> Result<Vec<MovieRecord>, ExtractError> {
    Ok(serde_json::from_str(s.as_ref())?)
}

/// Attaches titles from the cinema page's movie picker to `records`.
pub fn extract_available_movies(
    records: &[MovieRecord],
    document: &Document,
) -> Vec<AvailableMovie> {
    let titles = document
        .0
        .select(selector!("#movie option"))
        .filter_map(|option| Some((option.value().attr("value")?, text(option))))
        .collect::<HashMap<_, _>>();

    records
        .iter()
        .map(|record| AvailableMovie {
            title: titles
                .get(record.movie_code.as_str())
                .cloned()
                .unwrap_or_default(),
            start_time: char_range(&record.start_time_raw, 0, 2),
            day: record.day_code.clone(),
        })
        .collect()
}

/// Free tables on the restaurant page.
///
/// Only days on which at least one of `movies` is showing are looked at.
pub fn extract_restaurant_slots(
    movies: &[AvailableMovie],
    document: &Document,
) -> Vec<RestaurantSlot> {
    let mut slots = Vec::new();

    for heading in document.0.select(selector!("p b span")) {
        let Some(day) = Day::from_label(&text(heading)) else {
            continue;
        };

        if !movies
            .iter()
            .any(|movie| Day::from_code(&movie.day) == Some(day))
        {
            continue;
        }

        for entry in document.0.select(day.booking_section()) {
            let entry = text(entry);
            if !entry.contains("Free") {
                continue;
            }

            slots.push(RestaurantSlot {
                day,
                start_time: char_range(&entry, 0, 2),
                end_time: char_range(&entry, 3, 5),
            });
        }
    }

    slots
}
