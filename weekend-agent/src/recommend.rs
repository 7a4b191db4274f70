use weekend_parser::{AvailableMovie, Day, RestaurantSlot};

/// Hours between the start of a movie and the start of the dinner booking.
pub const SLOT_GAP: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub day: Day,
    pub movie: AvailableMovie,
    pub slot: RestaurantSlot,
}

fn hour(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|hour| *hour < 24)
}

/// Pairs every movie with every table starting [`SLOT_GAP`] hours after it on
/// the same day. Hours outside 0-23 never match.
pub fn recommend(movies: &[AvailableMovie], slots: &[RestaurantSlot]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for movie in movies {
        let Some(day) = Day::from_code(&movie.day) else {
            continue;
        };
        let Some(movie_start) = hour(&movie.start_time) else {
            continue;
        };

        for slot in slots.iter().filter(|slot| slot.day == day) {
            let gap = hour(&slot.start_time).and_then(|start| start.checked_sub(movie_start));
            if gap != Some(SLOT_GAP) {
                continue;
            }

            recommendations.push(Recommendation {
                day,
                movie: movie.clone(),
                slot: slot.clone(),
            });
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn movie(title: &str, start_time: &str, day: &str) -> AvailableMovie {
        AvailableMovie {
            title: title.to_string(),
            start_time: start_time.to_string(),
            day: day.to_string(),
        }
    }

    fn slot(day: Day, start_time: &str, end_time: &str) -> RestaurantSlot {
        RestaurantSlot {
            day,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    fn pairs(recommendations: &[Recommendation]) -> HashSet<(String, String, Day)> {
        recommendations
            .iter()
            .map(|r| (r.movie.title.clone(), r.slot.start_time.clone(), r.day))
            .collect()
    }

    #[test]
    fn exactly_two_hours_after_on_the_same_day() {
        let movies = [movie("M1", "18", "05")];
        let slots = [
            slot(Day::Friday, "19", "21"),
            slot(Day::Friday, "20", "22"),
            slot(Day::Friday, "21", "23"),
            slot(Day::Saturday, "20", "22"),
            slot(Day::Friday, "16", "18"),
        ];

        let recommendations = recommend(&movies, &slots);
        assert_eq!(
            recommendations,
            [Recommendation {
                day: Day::Friday,
                movie: movies[0].clone(),
                slot: slots[1].clone(),
            }]
        );
    }

    #[test]
    fn out_of_range_hours_never_match() {
        let movies = [movie("Late", "23", "06"), movie("Later", "22", "06")];
        let slots = [slot(Day::Saturday, "25", "26"), slot(Day::Saturday, "24", "25")];
        assert!(recommend(&movies, &slots).is_empty());

        let movies = [movie("Odd", "1x", "06"), movie("Nowhen", "", "06")];
        let slots = [slot(Day::Saturday, "03", "05"), slot(Day::Saturday, "", "")];
        assert!(recommend(&movies, &slots).is_empty());
    }

    #[test]
    fn unknown_day_codes_never_match() {
        let movies = [movie("Weekday", "16", "03")];
        let slots = [slot(Day::Friday, "18", "20")];
        assert!(recommend(&movies, &slots).is_empty());
    }

    #[test]
    fn movies_then_slots_order() {
        let movies = [movie("A", "16", "05"), movie("B", "14", "05")];
        let slots = [slot(Day::Friday, "16", "18"), slot(Day::Friday, "18", "20")];

        let titles = recommend(&movies, &slots)
            .into_iter()
            .map(|r| (r.movie.title, r.slot.start_time))
            .collect::<Vec<_>>();

        assert_eq!(
            titles,
            [
                ("A".to_string(), "18".to_string()),
                ("B".to_string(), "16".to_string()),
            ]
        );
    }

    #[test]
    fn input_order_does_not_change_the_pairs() {
        let mut movies = vec![
            movie("A", "16", "05"),
            movie("B", "18", "06"),
            movie("C", "14", "07"),
            movie("D", "14", "05"),
        ];
        let mut slots = vec![
            slot(Day::Friday, "18", "20"),
            slot(Day::Friday, "16", "18"),
            slot(Day::Saturday, "20", "22"),
            slot(Day::Sunday, "16", "18"),
        ];

        let expected = pairs(&recommend(&movies, &slots));
        assert_eq!(expected.len(), 4);

        movies.reverse();
        slots.rotate_left(1);
        assert_eq!(pairs(&recommend(&movies, &slots)), expected);

        movies.swap(0, 2);
        slots.reverse();
        assert_eq!(pairs(&recommend(&movies, &slots)), expected);
    }
}
