//! Integration tests exercising the public catalog and app APIs together:
//! load a catalog, drive the query parameters the way the shim would, and
//! check the derived views at each step.

use marquee::app::{handle_event, Action, Event, Screen};
use marquee::fetch::{FetchRequest, FetchResponse};
use marquee::ui::{compute_view, ScreenView};
use marquee::{genre_facets, visible_movies, AppState, CatalogQuery, Movie, SortMode};

fn sample_catalog() -> Vec<Movie> {
    serde_json::from_str(
        r#"[
            {"id":1,"title":"Heat","year":1995,"genre":"Crime, Drama","director":"Michael Mann","plot":"A crew of thieves."},
            {"id":2,"title":"Alien","year":1979,"genre":"Horror, Sci-Fi","director":"Ridley Scott","plot":"In space."},
            {"id":3,"title":"Apollo 13","year":1995,"genre":"Drama, History","director":"Ron Howard","plot":"Houston, we have a problem."},
            {"id":4,"title":"Arrival","year":2016,"genre":"Drama, Sci-Fi","director":"Denis Villeneuve","plot":"First contact."}
        ]"#,
    )
    .unwrap()
}

fn request_id(actions: &[Action]) -> u64 {
    match actions.first() {
        Some(Action::Dispatch(request)) => request.request_id(),
        other => panic!("expected a dispatch, got {other:?}"),
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    let (_, actions) = handle_event(&mut state, &Event::Init).unwrap();
    let id = request_id(&actions);
    handle_event(
        &mut state,
        &Event::Fetch(FetchResponse::Movies {
            request_id: id,
            result: Ok(sample_catalog()),
        }),
    )
    .unwrap();
    state
}

#[test]
fn engine_results_are_always_subsets_of_the_catalog() {
    let catalog = sample_catalog();
    let catalog_ids: Vec<i64> = catalog.iter().map(|m| m.id).collect();

    let queries = [
        CatalogQuery::default(),
        CatalogQuery {
            search: "sci".to_string(),
            ..CatalogQuery::default()
        },
        CatalogQuery {
            genre: Some("Drama".to_string()),
            sort: SortMode::Title,
            ..CatalogQuery::default()
        },
        CatalogQuery {
            search: "a".to_string(),
            genre: Some("Sci-Fi".to_string()),
            sort: SortMode::Oldest,
        },
    ];

    for query in queries {
        let visible = visible_movies(&catalog, &query);
        assert!(
            visible.iter().all(|m| catalog_ids.contains(&m.id)),
            "query {query:?} produced a movie outside the catalog"
        );
        // And twice in a row gives the same answer, in the same order.
        assert_eq!(visible, visible_movies(&catalog, &query));
    }
}

#[test]
fn search_and_facet_compose_through_the_app_layer() {
    let mut state = loaded_state();

    handle_event(&mut state, &Event::ToggleGenre("Sci-Fi".to_string())).unwrap();
    handle_event(&mut state, &Event::Search("arrival".to_string())).unwrap();

    match state.current() {
        Screen::MovieList(list) => {
            assert_eq!(list.visible.len(), 1);
            assert_eq!(list.visible[0].title, "Arrival");
        }
        other => panic!("unexpected screen: {}", other.name()),
    }

    // Clearing the search widens back to every Sci-Fi movie, oldest first.
    handle_event(&mut state, &Event::Search(String::new())).unwrap();
    handle_event(&mut state, &Event::Sort(SortMode::Oldest)).unwrap();
    match state.current() {
        Screen::MovieList(list) => {
            let titles: Vec<&str> = list.visible.iter().map(|m| m.title.as_str()).collect();
            assert_eq!(titles, vec!["Alien", "Arrival"]);
        }
        other => panic!("unexpected screen: {}", other.name()),
    }
}

#[test]
fn facets_derive_once_per_catalog_not_per_filter() {
    let mut state = loaded_state();
    let facets_before = genre_facets(&sample_catalog());

    handle_event(&mut state, &Event::Search("alien".to_string())).unwrap();
    match state.current() {
        Screen::MovieList(list) => {
            // The facet row is derived from the full catalog, not the
            // filtered view, so it is unchanged by the search.
            assert_eq!(list.facets, facets_before);
        }
        other => panic!("unexpected screen: {}", other.name()),
    }
}

#[test]
fn full_browse_and_review_round_trip() {
    let mut state = loaded_state();

    // Open the detail screen for the newest movie (Arrival, 2016).
    let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
    let movie_id = match actions.first() {
        Some(Action::Dispatch(FetchRequest::Movie { movie_id, .. })) => *movie_id,
        other => panic!("expected a movie fetch, got {other:?}"),
    };
    assert_eq!(movie_id, 4);

    let id = request_id(&actions);
    handle_event(
        &mut state,
        &Event::Fetch(FetchResponse::Movie {
            request_id: id,
            result: Ok(sample_catalog().remove(3)),
        }),
    )
    .unwrap();

    // Write a review through the form.
    handle_event(&mut state, &Event::OpenAddReview).unwrap();
    handle_event(&mut state, &Event::Rating(5)).unwrap();
    handle_event(&mut state, &Event::Comment("Quiet and devastating.".to_string())).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
    let id = request_id(&actions);

    let (_, actions) = handle_event(
        &mut state,
        &Event::Fetch(FetchResponse::ReviewCreated {
            request_id: id,
            movie_id,
            result: Ok(1),
        }),
    )
    .unwrap();

    // The form is gone, replaced by the reloading review list.
    assert_eq!(state.current().name(), "reviews");
    let id = request_id(&actions);
    let reviews = serde_json::from_str(
        r#"[{"id":1,"movie_id":4,"author_name":"","rating":5,"comment":"Quiet and devastating.","created_at":"2024-06-01T12:00:00Z"}]"#,
    )
    .unwrap();
    handle_event(
        &mut state,
        &Event::Fetch(FetchResponse::Reviews {
            request_id: id,
            result: Ok(reviews),
        }),
    )
    .unwrap();

    match compute_view(&state) {
        ScreenView::ReviewList(view) => {
            assert_eq!(view.rows.len(), 1);
            assert_eq!(view.rows[0].author, "Anonymous");
            assert_eq!(view.rows[0].stars, "★★★★★");
            assert_eq!(view.rows[0].date, "2024-06-01");
        }
        other => panic!("unexpected view: {other:?}"),
    }

    // Back out to the list; its state survived the whole trip.
    handle_event(&mut state, &Event::Back).unwrap();
    handle_event(&mut state, &Event::Back).unwrap();
    match state.current() {
        Screen::MovieList(list) => assert_eq!(list.movies.len(), 4),
        other => panic!("unexpected screen: {}", other.name()),
    }
}
