//! Offline demo catalog for development mode.
//!
//! Serves a small fixed catalog through the same interface as the OMDb
//! provider, including paging and the service's "not found" answers, so the
//! whole UI workflow can be exercised without network access.

use async_trait::async_trait;
use reelscout_core::session::PAGE_SIZE;
use reelscout_core::{
    DetailRecord, DetailsError, GatewayError, MediaType, MovieCatalog, NOT_AVAILABLE,
    SearchError, SearchPage, SearchResultItem,
};

struct DemoTitle {
    id: &'static str,
    title: &'static str,
    year: &'static str,
    media_type: &'static str,
    rated: &'static str,
    runtime: &'static str,
    genre: &'static str,
    director: &'static str,
    actors: &'static str,
    imdb_rating: &'static str,
    plot: &'static str,
}

const CATALOG: &[DemoTitle] = &[
    DemoTitle {
        id: "tt0096895",
        title: "Batman",
        year: "1989",
        media_type: "movie",
        rated: "PG-13",
        runtime: "126 min",
        genre: "Action, Adventure",
        director: "Tim Burton",
        actors: "Michael Keaton, Jack Nicholson, Kim Basinger",
        imdb_rating: "7.5",
        plot: "The Dark Knight of Gotham City begins his war on crime with his first major enemy being Jack Napier.",
    },
    DemoTitle {
        id: "tt0372784",
        title: "Batman Begins",
        year: "2005",
        media_type: "movie",
        rated: "PG-13",
        runtime: "140 min",
        genre: "Action, Drama",
        director: "Christopher Nolan",
        actors: "Christian Bale, Michael Caine, Ken Watanabe",
        imdb_rating: "8.2",
        plot: "After witnessing his parents' death, Bruce learns the art of fighting to confront injustice.",
    },
    DemoTitle {
        id: "tt0103776",
        title: "Batman Returns",
        year: "1992",
        media_type: "movie",
        rated: "PG-13",
        runtime: "126 min",
        genre: "Action, Crime, Fantasy",
        director: "Tim Burton",
        actors: "Michael Keaton, Danny DeVito, Michelle Pfeiffer",
        imdb_rating: "7.1",
        plot: "While Batman deals with a deformed man calling himself the Penguin, an employee of a corrupt businessman transforms into the Catwoman.",
    },
    DemoTitle {
        id: "tt0059968",
        title: "Batman: The Movie",
        year: "1966",
        media_type: "movie",
        rated: "PG",
        runtime: "105 min",
        genre: "Adventure, Comedy, Crime",
        director: "Leslie H. Martinson",
        actors: "Adam West, Burt Ward, Lee Meriwether",
        imdb_rating: "6.5",
        plot: "The Dynamic Duo faces four supervillains who plan to hold the world for ransom.",
    },
    DemoTitle {
        id: "tt0112462",
        title: "Batman Forever",
        year: "1995",
        media_type: "movie",
        rated: "PG-13",
        runtime: "121 min",
        genre: "Action, Adventure",
        director: "Joel Schumacher",
        actors: "Val Kilmer, Tommy Lee Jones, Jim Carrey",
        imdb_rating: "5.4",
        plot: "Batman must battle former district attorney Harvey Dent and a disgruntled former Wayne Enterprises employee.",
    },
    DemoTitle {
        id: "tt0118688",
        title: "Batman & Robin",
        year: "1997",
        media_type: "movie",
        rated: "PG-13",
        runtime: "125 min",
        genre: "Action, Sci-Fi",
        director: "Joel Schumacher",
        actors: "Arnold Schwarzenegger, George Clooney, Chris O'Donnell",
        imdb_rating: "3.8",
        plot: "Batman and Robin try to keep their relationship together even as they must stop Mr. Freeze and Poison Ivy.",
    },
    DemoTitle {
        id: "tt0468569",
        title: "The Dark Knight",
        year: "2008",
        media_type: "movie",
        rated: "PG-13",
        runtime: "152 min",
        genre: "Action, Crime, Drama",
        director: "Christopher Nolan",
        actors: "Christian Bale, Heath Ledger, Aaron Eckhart",
        imdb_rating: "9.0",
        plot: "When the menace known as the Joker wreaks havoc on Gotham, Batman must accept one of the greatest tests of his ability to fight injustice.",
    },
    DemoTitle {
        id: "tt1345836",
        title: "The Dark Knight Rises",
        year: "2012",
        media_type: "movie",
        rated: "PG-13",
        runtime: "164 min",
        genre: "Action, Drama, Thriller",
        director: "Christopher Nolan",
        actors: "Christian Bale, Tom Hardy, Anne Hathaway",
        imdb_rating: "8.4",
        plot: "Eight years after the Joker's reign of chaos, Batman is forced from his exile to save Gotham City.",
    },
    DemoTitle {
        id: "tt2975590",
        title: "Batman v Superman: Dawn of Justice",
        year: "2016",
        media_type: "movie",
        rated: "PG-13",
        runtime: "151 min",
        genre: "Action, Adventure, Sci-Fi",
        director: "Zack Snyder",
        actors: "Ben Affleck, Henry Cavill, Amy Adams",
        imdb_rating: "6.5",
        plot: "Fearing the actions of Superman, Gotham City's vigilante takes on the Man of Steel.",
    },
    DemoTitle {
        id: "tt1877830",
        title: "The Batman",
        year: "2022",
        media_type: "movie",
        rated: "PG-13",
        runtime: "176 min",
        genre: "Action, Crime, Drama",
        director: "Matt Reeves",
        actors: "Robert Pattinson, Zoë Kravitz, Jeffrey Wright",
        imdb_rating: "7.8",
        plot: "When a sadistic serial killer begins murdering key political figures in Gotham, Batman is forced to investigate.",
    },
    DemoTitle {
        id: "tt4116284",
        title: "The Lego Batman Movie",
        year: "2017",
        media_type: "movie",
        rated: "PG",
        runtime: "104 min",
        genre: "Animation, Action, Adventure",
        director: "Chris McKay",
        actors: "Will Arnett, Michael Cera, Rosario Dawson",
        imdb_rating: "7.3",
        plot: "A cooler-than-ever Bruce Wayne must deal with the usual suspects as they plan to rule Gotham City.",
    },
    DemoTitle {
        id: "tt0106364",
        title: "Batman: Mask of the Phantasm",
        year: "1993",
        media_type: "movie",
        rated: "PG",
        runtime: "76 min",
        genre: "Animation, Action, Crime",
        director: "Kevin Altieri, Boyd Kirkland, Frank Paur",
        actors: "Kevin Conroy, Dana Delany, Hart Bochner",
        imdb_rating: "7.8",
        plot: "Batman is wrongly implicated in a series of murders of mob bosses actually committed by a new vigilante.",
    },
    DemoTitle {
        id: "tt2313197",
        title: "Batman: The Dark Knight Returns, Part 1",
        year: "2012",
        media_type: "movie",
        rated: "PG-13",
        runtime: "76 min",
        genre: "Animation, Action, Crime",
        director: "Jay Oliva",
        actors: "Peter Weller, Ariel Winter, David Selby",
        imdb_rating: "8.0",
        plot: "Batman has not been seen for ten years. A new breed of criminal ravages Gotham City, forcing a 55-year-old Bruce Wayne back into the cape and cowl.",
    },
    DemoTitle {
        id: "tt0133093",
        title: "The Matrix",
        year: "1999",
        media_type: "movie",
        rated: "R",
        runtime: "136 min",
        genre: "Action, Sci-Fi",
        director: "Lana Wachowski, Lilly Wachowski",
        actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
        imdb_rating: "8.7",
        plot: "A computer hacker learns about the true nature of reality and his role in the war against its controllers.",
    },
    DemoTitle {
        id: "tt0078748",
        title: "Alien",
        year: "1979",
        media_type: "movie",
        rated: "R",
        runtime: "117 min",
        genre: "Horror, Sci-Fi",
        director: "Ridley Scott",
        actors: "Sigourney Weaver, Tom Skerritt, John Hurt",
        imdb_rating: "8.5",
        plot: "The crew of a commercial spacecraft encounters a deadly lifeform after investigating an unknown transmission.",
    },
    DemoTitle {
        id: "tt0903747",
        title: "Breaking Bad",
        year: "2008–2013",
        media_type: "series",
        rated: "TV-MA",
        runtime: "49 min",
        genre: "Crime, Drama, Thriller",
        director: NOT_AVAILABLE,
        actors: "Bryan Cranston, Aaron Paul, Anna Gunn",
        imdb_rating: "9.5",
        plot: "A chemistry teacher diagnosed with cancer turns to manufacturing methamphetamine to secure his family's future.",
    },
];

/// Demo provider for development and testing.
///
/// Matches titles by case-insensitive substring and pages results ten at a
/// time like the real service.
#[derive(Debug, Default, Clone)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a demo provider over the built-in catalog.
    pub fn new() -> Self {
        Self
    }
}

impl DemoTitle {
    fn item(&self) -> SearchResultItem {
        SearchResultItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            year: self.year.to_string(),
            media_type: MediaType::from(self.media_type),
            poster_url: None,
        }
    }

    fn record(&self) -> DetailRecord {
        DetailRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            year: self.year.to_string(),
            rated: self.rated.to_string(),
            runtime: self.runtime.to_string(),
            genre: self.genre.to_string(),
            plot: self.plot.to_string(),
            director: self.director.to_string(),
            actors: self.actors.to_string(),
            released: NOT_AVAILABLE.to_string(),
            awards: NOT_AVAILABLE.to_string(),
            imdb_rating: self.imdb_rating.to_string(),
            top_rating: format!("{}/10", self.imdb_rating),
            poster_url: NOT_AVAILABLE.to_string(),
        }
    }
}

#[async_trait]
impl MovieCatalog for DemoProvider {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        let needle = query.trim().to_lowercase();
        let matches: Vec<&DemoTitle> = CATALOG
            .iter()
            .filter(|title| title.media_type == "movie")
            .filter(|title| title.title.to_lowercase().contains(&needle))
            .collect();

        let start = page
            .saturating_sub(1)
            .checked_mul(PAGE_SIZE)
            .map_or(usize::MAX, |start| start as usize);
        if matches.is_empty() || start >= matches.len() {
            return Err(GatewayError::NotFound {
                message: "Movie not found!".to_string(),
            });
        }

        Ok(SearchPage {
            total_results: matches.len() as u32,
            items: matches
                .iter()
                .skip(start)
                .take(PAGE_SIZE as usize)
                .map(|title| title.item())
                .collect(),
        })
    }

    async fn fetch_details(&self, id: &str) -> Result<DetailRecord, DetailsError> {
        CATALOG
            .iter()
            .find(|title| title.id == id.trim())
            .map(DemoTitle::record)
            .ok_or_else(|| GatewayError::NotFound {
                message: "Incorrect IMDb ID.".to_string(),
            })
    }
}
