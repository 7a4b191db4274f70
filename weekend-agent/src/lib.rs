pub mod cli;
mod error;
mod fetch;
mod pipeline;
pub mod present;
mod recommend;

pub use error::{Error, FetchError};
pub use fetch::{Credentials, Fetch, HttpFetcher};
pub use pipeline::{consensus, Agent, Config, Plan, SiteLinks, MOVIE_SLOTS};
pub use recommend::{recommend, Recommendation, SLOT_GAP};
