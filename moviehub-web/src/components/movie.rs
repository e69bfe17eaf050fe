//! Movie components - cards, the movie grid and the trending strip

use moviehub_core::{Movie, ViewState};

use super::layout::{escape_html, spinner};

/// Renders one movie card: poster, title, rating, language and year.
pub fn movie_card(movie: &Movie, image_base_url: &str) -> String {
    let title = escape_html(&movie.title);
    let poster = escape_html(&movie.poster_url(image_base_url));
    let rating = movie.format_rating();
    let language = escape_html(movie.original_language.as_deref().unwrap_or("N/A"));
    let year = movie.release_year().unwrap_or("N/A");

    format!(
        r#"<li class="movie-card bg-gray-800 rounded-2xl p-5 shadow-inner">
            <img src="{poster}" alt="{title}" class="rounded-lg h-auto w-full" loading="lazy" />
            <div class="mt-4">
                <h3 class="text-white font-bold text-base line-clamp-1">{title}</h3>
                <div class="content flex items-center gap-2 mt-2 text-gray-400 text-sm">
                    <div class="rating flex items-center gap-1">
                        <span class="text-yellow-400" aria-hidden="true">&#9733;</span>
                        <p class="font-bold text-white">{rating}</p>
                    </div>
                    <span>&bull;</span>
                    <p class="lang capitalize">{language}</p>
                    <span>&bull;</span>
                    <p class="year">{year}</p>
                </div>
            </div>
        </li>"#
    )
}

/// Renders the body of the "All Movies" section.
///
/// Shows the spinner while a search is in flight, then the error text if
/// the last search failed, otherwise the movie grid.
pub fn all_movies_section(state: &ViewState, image_base_url: &str) -> String {
    let body = if state.is_loading {
        spinner()
    } else if let Some(message) = &state.error_message {
        format!(r#"<p class="text-red-500">{}</p>"#, escape_html(message))
    } else {
        let cards: String = state
            .movies
            .iter()
            .map(|movie| movie_card(movie, image_base_url))
            .collect();
        format!(
            r#"<ul class="grid grid-cols-1 gap-5 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">{cards}</ul>"#
        )
    };

    format!(r#"<h2 class="text-2xl font-bold text-white mt-10 mb-6">All Movies</h2>{body}"#)
}

/// Renders the trending strip.
///
/// The whole section is omitted while the trending list is empty.
pub fn trending_section(state: &ViewState) -> String {
    if state.trending_movies.is_empty() {
        return String::new();
    }

    let body = if state.is_trending_loading {
        spinner()
    } else if let Some(message) = &state.trending_error_message {
        format!(r#"<p class="text-red-500">{}</p>"#, escape_html(message))
    } else {
        let items: String = state
            .trending_movies
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                format!(
                    r#"<li id="trending-{}" class="flex flex-row items-center min-w-[230px]">
                    <p class="fancy-text text-7xl font-bold text-gray-600 mt-[22px]">{}</p>
                    <img src="{}" alt="{}" class="w-[127px] h-[163px] rounded-lg object-cover -ml-3.5" />
                </li>"#,
                    escape_html(&entry.id),
                    index + 1,
                    escape_html(&entry.poster_url),
                    escape_html(&entry.title)
                )
            })
            .collect();
        format!(r#"<ul class="flex flex-row overflow-x-auto gap-5 w-full">{items}</ul>"#)
    };

    format!(
        r#"<section class="trending mt-10">
            <h2 class="text-2xl font-bold text-white mb-6">Trending Movies</h2>
            {body}
        </section>"#
    )
}
