use crate::Recommendation;

/// Start URL whose runs print the movie before the table.
pub const MOVIE_FIRST_START_URL: &str = "http://cscloud304.lnu.se:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrasing {
    MovieFirst,
    TableFirst,
}

impl Phrasing {
    #[must_use]
    pub fn for_start_url(start_url: &str) -> Self {
        if start_url == MOVIE_FIRST_START_URL {
            Self::MovieFirst
        } else {
            Self::TableFirst
        }
    }

    #[must_use]
    pub fn format(self, recommendation: &Recommendation) -> String {
        let Recommendation { day, movie, slot } = recommendation;

        match self {
            Self::MovieFirst => format!(
                "* On {day} the movie {} starts at {}:00 and there is a free table between {}:00 and {}:00.",
                movie.title, movie.start_time, slot.start_time, slot.end_time
            ),
            Self::TableFirst => format!(
                "* On {day} there is a free table between {}:00 and {}:00, after you have seen {} which starts at {}:00.",
                slot.start_time, slot.end_time, movie.title, movie.start_time
            ),
        }
    }
}

pub fn banner() {
    println!("Webagent start running...\n");
}

pub fn progress(stage: &str) {
    println!("{stage}... OK");
}

pub fn print_recommendations(recommendations: &[Recommendation], phrasing: Phrasing) {
    println!();

    if recommendations.is_empty() {
        println!("* No movie and dinner combination fits everyone this weekend.");
        return;
    }

    for recommendation in recommendations {
        println!("{}\n", phrasing.format(recommendation));
    }
}
