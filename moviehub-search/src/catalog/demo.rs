//! Offline demo catalog for development.

use std::time::Duration;

use async_trait::async_trait;
use moviehub_core::{CatalogError, Movie, MovieCatalog};

/// Demo catalog serving a fixed list of well-known movies.
///
/// Used for UI development without a TMDB token. The empty query returns
/// the whole list in popularity order; other queries filter titles by
/// case-insensitive substring.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    movies: Vec<Movie>,
    latency: Duration,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoCatalog {
    /// Creates a demo catalog answering immediately.
    pub fn new() -> Self {
        Self {
            movies: demo_movies(),
            latency: Duration::ZERO,
        }
    }

    /// Adds an artificial delay to every answer so spinners are visible.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl MovieCatalog for DemoCatalog {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if query.is_empty() {
            return Ok(self.movies.clone());
        }

        let needle = query.to_lowercase();
        Ok(self
            .movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

fn demo_movies() -> Vec<Movie> {
    [
        (155, "The Dark Knight", "/qJ2tW6WMUDux911r6m7haRef0WH.jpg", 8.5, "2008-07-16"),
        (27205, "Inception", "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg", 8.4, "2010-07-15"),
        (603, "The Matrix", "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg", 8.2, "1999-03-30"),
        (268, "Batman", "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg", 7.2, "1989-06-21"),
        (272, "Batman Begins", "/sPX89Td70IDDjVr85jdSBb4rWGr.jpg", 7.7, "2005-06-10"),
        (348, "Alien", "/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg", 8.2, "1979-05-25"),
        (78, "Blade Runner", "/63N9uy8nd9j7Eog2axPQ8lbr3Wj.jpg", 7.9, "1982-06-25"),
        (129, "Spirited Away", "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg", 8.5, "2001-07-20"),
    ]
    .into_iter()
    .map(|(id, title, poster, rating, release)| Movie {
        id,
        title: title.to_string(),
        poster_path: Some(poster.to_string()),
        vote_average: Some(rating),
        original_language: Some(if id == 129 { "ja" } else { "en" }.to_string()),
        release_date: Some(release.to_string()),
    })
    .collect()
}
