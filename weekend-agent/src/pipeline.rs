use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use log::{info, warn};
use weekend_parser::{
    extract_available_movies, extract_calendar_links, extract_day_availability,
    extract_page_links, extract_restaurant_slots, parse_movie_records, AvailableMovie, Day,
    Document, MovieRecord, MovieStatus, RestaurantSlot,
};

use crate::present::progress;
use crate::{recommend, Credentials, Error, Fetch, Recommendation};

/// Movie codes queried for every free day.
pub const MOVIE_SLOTS: [&str; 3] = ["01", "02", "03"];

pub struct Config {
    pub credentials: Credentials,
    /// Overrides `<restaurant link>/login`.
    pub login_url: Option<String>,
}

/// Entry points found on the start page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    pub calendar: String,
    pub cinema: String,
    pub restaurant: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub free_days: Vec<Day>,
    pub movies: Vec<AvailableMovie>,
    pub slots: Vec<RestaurantSlot>,
    pub recommendations: Vec<Recommendation>,
}

pub struct Agent<F> {
    fetcher: F,
    config: Config,
}

/// Days on which all `participant_count` participants are available.
///
/// Each entry of `participants` holds the day labels one participant marked
/// ok. Returned in [`Day::ALL`] order.
pub fn consensus(participants: &[HashSet<String>], participant_count: usize) -> Vec<Day> {
    let mut tally = HashMap::<&str, usize>::new();
    for days in participants {
        for day in days {
            *tally.entry(day.as_str()).or_default() += 1;
        }
    }

    Day::ALL
        .into_iter()
        .filter(|day| tally.get(day.label()) == Some(&participant_count))
        .collect()
}

impl<F: Fetch> Agent<F> {
    pub fn new(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    pub async fn run(&self, start_url: &str) -> Result<Plan, Error> {
        let links = self.discover_links(start_url).await?;
        progress("Fetching links");

        let free_days = self.find_free_days(&links).await?;
        progress("Finding free days");

        let movies = self.find_movies(&links, &free_days).await?;
        progress("Fetching movie shows");

        let slots = self.find_tables(&links, &movies).await?;
        progress("Fetching restaurant bookings");

        let recommendations = recommend(&movies, &slots);
        progress("Putting together recommendations");

        Ok(Plan {
            free_days,
            movies,
            slots,
            recommendations,
        })
    }

    pub async fn discover_links(&self, start_url: &str) -> Result<SiteLinks, Error> {
        let body = self.fetcher.get(start_url).await?;
        let document = Document::parse(body).map_err(Error::extract("start page"))?;

        let links = extract_page_links(&document);
        let [calendar, cinema, restaurant, ..] = links.as_slice() else {
            return Err(Error::MissingLinks(links.len()));
        };

        Ok(SiteLinks {
            calendar: calendar.clone(),
            cinema: cinema.clone(),
            restaurant: restaurant.clone(),
        })
    }

    pub async fn find_free_days(&self, links: &SiteLinks) -> Result<Vec<Day>, Error> {
        let body = self.fetcher.get(&links.calendar).await?;
        let document = Document::parse(body).map_err(Error::extract("calendar index"))?;
        let calendars = extract_calendar_links(&document, &links.calendar);

        let participants = join_all(calendars.iter().map(|url| self.participant_days(url)))
            .await
            .into_iter()
            .filter_map(|result| {
                result
                    .map_err(|err| warn!("Skipping calendar: {err}"))
                    .ok()
            })
            .collect::<Vec<_>>();

        let free_days = consensus(&participants, calendars.len());
        info!(
            "{} of {} calendars read, free days: {free_days:?}",
            participants.len(),
            calendars.len()
        );

        Ok(free_days)
    }

    async fn participant_days(&self, url: &str) -> Result<HashSet<String>, Error> {
        let body = self.fetcher.get(url).await?;
        let document = Document::parse(body).map_err(Error::extract("calendar"))?;

        Ok(extract_day_availability(&document)
            .into_iter()
            .map(|availability| availability.day)
            .collect())
    }

    pub async fn find_movies(
        &self,
        links: &SiteLinks,
        free_days: &[Day],
    ) -> Result<Vec<AvailableMovie>, Error> {
        let queries = free_days
            .iter()
            .flat_map(|day| {
                MOVIE_SLOTS.into_iter().map(move |movie| {
                    format!("{}/check?day={}&movie={movie}", links.cinema, day.code())
                })
            })
            .collect::<Vec<_>>();

        let records = join_all(queries.iter().map(|url| self.movie_records(url)))
            .await
            .into_iter()
            .filter_map(|result| {
                result
                    .map_err(|err| warn!("Skipping movie listing: {err}"))
                    .ok()
            })
            .flatten()
            .collect::<Vec<_>>();

        let body = self.fetcher.get(&links.cinema).await?;
        let document = Document::parse(body).map_err(Error::extract("cinema page"))?;
        let movies = extract_available_movies(&records, &document);
        info!("{} movie show(s) with free seats", movies.len());

        Ok(movies)
    }

    async fn movie_records(&self, url: &str) -> Result<Vec<MovieRecord>, Error> {
        let body = self.fetcher.get(url).await?;

        Ok(parse_movie_records(body)
            .map_err(Error::extract("movie listing"))?
            .into_iter()
            .filter(|record| record.status == MovieStatus::Available)
            .collect())
    }

    pub async fn find_tables(
        &self,
        links: &SiteLinks,
        movies: &[AvailableMovie],
    ) -> Result<Vec<RestaurantSlot>, Error> {
        let login_url = match &self.config.login_url {
            Some(url) => url.clone(),
            None => format!("{}/login", links.restaurant.trim_end_matches('/')),
        };

        let body = self
            .fetcher
            .fetch_with_session(&login_url, &self.config.credentials)
            .await?;
        let document = Document::parse(body).map_err(Error::extract("restaurant page"))?;
        let slots = extract_restaurant_slots(movies, &document);
        info!("{} free table(s) on movie days", slots.len());

        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn unanimous_days_only() {
        let participants = [
            days(&["Friday", "Sunday"]),
            days(&["Friday", "Saturday"]),
            days(&["Friday", "Sunday"]),
        ];
        assert_eq!(consensus(&participants, 3), [Day::Friday]);
    }

    #[test]
    fn threshold_follows_participant_count() {
        let participants = [days(&["Saturday"]), days(&["Saturday", "Sunday"])];
        assert_eq!(consensus(&participants, 2), [Day::Saturday]);

        let participants = [
            days(&["Saturday"]),
            days(&["Saturday"]),
            days(&["Saturday"]),
            days(&["Saturday", "Sunday"]),
        ];
        assert_eq!(consensus(&participants, 4), [Day::Saturday]);
    }

    #[test]
    fn missing_participant_breaks_consensus() {
        let participants = [days(&["Friday"]), days(&["Friday"])];
        assert!(consensus(&participants, 3).is_empty());
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let participants = [days(&["", "Monday", "Sunday"]), days(&["", "Monday", "Sunday"])];
        assert_eq!(consensus(&participants, 2), [Day::Sunday]);
    }

    #[test]
    fn free_days_in_week_order() {
        let participants = [days(&["Sunday", "Friday", "Saturday"])];
        assert_eq!(
            consensus(&participants, 1),
            [Day::Friday, Day::Saturday, Day::Sunday]
        );
    }
}
