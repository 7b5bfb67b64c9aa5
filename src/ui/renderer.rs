//! Plain-text renderer for the bundled terminal shim.
//!
//! Formats the computed view models into printable text. This is deliberately
//! the least interesting consumer of the view models: it owns no state and
//! makes no decisions beyond layout, so a richer rendering layer can replace it
//! by consuming the same [`ScreenView`](crate::ui::viewmodel::ScreenView).

use crate::app::AppState;
use crate::ui::helpers;
use crate::ui::viewmodel::{
    compute_view, AddReviewView, MovieDetailView, MovieListView, ReviewListView, ScreenView,
};

/// Display width for one-line plot summaries in the list.
const PLOT_WIDTH: usize = 70;

/// Renders the current screen to a printable string.
#[must_use]
pub fn render(state: &AppState) -> String {
    match compute_view(state) {
        ScreenView::MovieList(view) => render_movie_list(&view),
        ScreenView::MovieDetail(view) => render_movie_detail(&view),
        ScreenView::ReviewList(view) => render_review_list(&view),
        ScreenView::AddReview(view) => render_add_review(&view),
    }
}

fn render_movie_list(view: &MovieListView) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} — {} ==\n", view.header.title, view.header.subtitle));

    if view.loading {
        out.push_str("Loading movies...\n");
        return out;
    }

    if let Some(error) = &view.error {
        out.push_str(&format!("! {error}\n"));
    }
    if view.refreshing {
        out.push_str("Refreshing...\n");
    }

    if view.search_query.is_empty() {
        out.push_str("Search: (none)\n");
    } else {
        out.push_str(&format!("Search: \"{}\"\n", view.search_query));
    }

    let chips: Vec<String> = view
        .facet_chips
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label)
            } else {
                chip.label.clone()
            }
        })
        .collect();
    out.push_str(&format!("Genres: {}\n", chips.join("  ")));

    let sorts: Vec<String> = view
        .sort_options
        .iter()
        .map(|option| {
            if option.active {
                format!("[{}]", option.label)
            } else {
                option.label.to_string()
            }
        })
        .collect();
    out.push_str(&format!("Sort: {}\n", sorts.join("  ")));

    out.push_str(&format!("{}\n\n", view.results_summary));

    if let Some(empty) = &view.empty_state {
        out.push_str(&format!("{}\n{}\n", empty.message, empty.subtitle));
        out.push_str("(use `reset` to clear filters)\n");
    }

    for row in &view.rows {
        let marker = if row.is_selected { ">" } else { " " };
        let mut tags = row.genre_tags.join(", ");
        if row.extra_genres > 0 {
            tags.push_str(&format!(" +{} more", row.extra_genres));
        }
        out.push_str(&format!("{marker} {} ({})\n", row.title, row.year));
        out.push_str(&format!("    {} | {}\n", row.director, tags));
        out.push_str(&format!("    {}\n", helpers::truncate(&row.plot, PLOT_WIDTH)));
    }

    out.push_str(&format!("\n{}\n", view.footer.commands));
    out
}

fn render_movie_detail(view: &MovieDetailView) -> String {
    let mut out = String::new();

    if view.loading {
        out.push_str(&format!("Loading movie #{}...\n", view.movie_id));
        return out;
    }

    match &view.movie {
        Some(movie) => {
            out.push_str(&format!("== {} ({}) ==\n", movie.title, movie.year));
            out.push_str(&format!("Genre:    {}\n", movie.genre));
            out.push_str(&format!("Director: {}\n", movie.director));
            if !movie.poster_url.is_empty() {
                out.push_str(&format!("Poster:   {}\n", movie.poster_url));
            }
            out.push_str(&format!("\nPlot\n{}\n", movie.plot_or_placeholder()));
        }
        None => {
            out.push_str(&format!("Movie Not Found (id: {})\n", view.movie_id));
            if let Some(error) = &view.error {
                out.push_str(&format!("! {error}\n"));
            }
            out.push_str("Movie might not exist in database.\n");
        }
    }

    out.push_str(&format!("\n{}\n", view.footer.commands));
    out
}

fn render_review_list(view: &ReviewListView) -> String {
    let mut out = String::new();

    if view.loading {
        out.push_str("Loading reviews...\n");
        return out;
    }

    if let Some(error) = &view.error {
        out.push_str(&format!("! {error}\n"));
    }
    if view.refreshing {
        out.push_str("Refreshing...\n");
    }

    if let Some(empty) = &view.empty_state {
        out.push_str(&format!("{}\n{}\n", empty.message, empty.subtitle));
    }

    for row in &view.rows {
        out.push_str(&format!("{}  {}\n", row.author, row.stars));
        out.push_str(&format!("{}\n", row.comment));
        out.push_str(&format!("{}\n\n", row.date));
    }

    out.push_str(&format!("{}\n", view.footer.commands));
    out
}

fn render_add_review(view: &AddReviewView) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} ==\n", view.movie_title));
    out.push_str("Share your thoughts about this movie\n\n");

    if let Some(error) = &view.error {
        out.push_str(&format!("! {error}\n"));
    }

    out.push_str(&format!("Name:    {}\n", view.author));
    out.push_str(&format!(
        "Rating:  {} ({})\n",
        view.rating_stars, view.rating_text
    ));
    out.push_str(&format!("Review:  {}\n", view.comment));
    out.push_str(&format!("         {}\n", view.comment_count));

    if view.submitting {
        out.push_str("\nSubmitting...\n");
    }

    out.push_str(&format!("\n{}\n", view.footer.commands));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::{handle_event, Event};
    use crate::app::AppState;
    use crate::fetch::FetchResponse;

    #[test]
    fn initial_render_shows_loading() {
        let state = AppState::new();
        assert!(render(&state).contains("Loading movies..."));
    }

    #[test]
    fn loaded_render_shows_rows_and_summary() {
        let mut state = AppState::new();
        let (_, actions) = handle_event(&mut state, &Event::Init).unwrap();
        let request_id = match &actions[0] {
            crate::app::Action::Dispatch(request) => request.request_id(),
            crate::app::Action::Quit => unreachable!(),
        };
        let movies = serde_json::from_str(
            r#"[{"id":1,"title":"Heat","year":1995,"genre":"Crime, Drama","director":"Michael Mann","plot":"A crew of thieves."}]"#,
        )
        .unwrap();
        handle_event(
            &mut state,
            &Event::Fetch(FetchResponse::Movies {
                request_id,
                result: Ok(movies),
            }),
        )
        .unwrap();

        let output = render(&state);
        assert!(output.contains("Heat (1995)"));
        assert!(output.contains("1 movie found"));
        assert!(output.contains("[All Movies]"));
    }
}
