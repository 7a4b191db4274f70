macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: once_cell::sync::Lazy<scraper::Selector> =
            once_cell::sync::Lazy::new(|| scraper::Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

mod days;
mod error;
mod parser;
mod structs;

pub use days::Day;
pub use error::ExtractError;
pub use parser::{
    extract_available_movies, extract_calendar_links, extract_day_availability,
    extract_page_links, extract_restaurant_slots, parse_movie_records, Document,
};
pub use structs::{AvailableMovie, DayAvailability, MovieRecord, MovieStatus, RestaurantSlot, Status};
