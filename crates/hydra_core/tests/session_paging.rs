use chrono::{Duration, TimeZone, Utc};
use hydra_core::{
    parse_uri_keywords, GallerySession, Item, ItemSet, PageCursor, QueryEngine, QueryOutcome,
    QueryState, RenderTable,
};
use std::num::NonZeroUsize;

fn engine() -> QueryEngine {
    let base = Utc.with_ymd_and_hms(2015, 11, 18, 0, 0, 0).unwrap();
    let items = (0..5)
        .map(|index| {
            let at = base + Duration::days(index);
            let tag = if index % 2 == 0 { "solar" } else { "wind" };
            Item::new(format!("hydra-{index}"), [tag, "ladybug"], at, at)
        })
        .collect::<Vec<_>>();
    QueryEngine::new(ItemSet::new(items), NonZeroUsize::new(2).unwrap())
}

fn shown(outcome: &QueryOutcome<'_>) -> Vec<String> {
    outcome.items().iter().map(|item| item.id.clone()).collect()
}

#[test]
fn load_more_walks_cursor_until_everything_is_shown() {
    let engine = engine();
    let mut session = GallerySession::new(&engine);

    let (state, first) = session.apply(QueryState::from_input("ladybug", "modified_at"));
    assert_eq!(state.cursor(), PageCursor::Idle(0));
    assert_eq!(shown(&first), vec!["hydra-4", "hydra-3"]);
    assert!(first.has_more());

    let (state, second) = session.load_more(state);
    assert_eq!(state.cursor(), PageCursor::Idle(1));
    assert_eq!(shown(&second), vec!["hydra-4", "hydra-3", "hydra-2", "hydra-1"]);

    let (state, third) = session.load_more(state);
    assert_eq!(state.cursor(), PageCursor::Idle(2));
    assert_eq!(third.items().len(), 5);
    assert!(!third.has_more());
}

#[test]
fn session_pages_equal_pure_pipeline() {
    let engine = engine();
    let mut session = GallerySession::new(&engine);

    let (mut state, outcome) = session.apply(QueryState::from_input("solar", "id"));
    assert_eq!(outcome, engine.run(&state));
    for _ in 0..3 {
        let (next, outcome) = session.load_more(state);
        assert_eq!(outcome, engine.run(&next));
        state = next;
    }
}

#[test]
fn empty_result_exhausts_cursor_until_filter_changes() {
    let engine = engine();
    let mut session = GallerySession::new(&engine);

    let (state, outcome) = session.apply(QueryState::from_input("honeybee", "id"));
    assert!(outcome.is_no_results());
    assert_eq!(state.cursor(), PageCursor::Exhausted);

    let (state, outcome) = session.load_more(state);
    assert!(outcome.is_no_results());
    assert_eq!(state.cursor(), PageCursor::Exhausted);

    let (state, outcome) = session.apply(state.with_keywords(["wind"]));
    assert_eq!(state.cursor(), PageCursor::Idle(0));
    assert_eq!(shown(&outcome), vec!["hydra-1", "hydra-3"]);
}

#[test]
fn uri_keywords_seed_initial_state() {
    let engine = engine();
    let mut session = GallerySession::new(&engine);
    let keywords = parse_uri_keywords("?keywords=Wind&keywords=%20solar%20");

    let (state, outcome) = session.apply(QueryState::new(keywords, "id"));
    assert_eq!(state.keywords(), ["wind".to_string(), "solar".to_string()]);
    assert_eq!(outcome.items().len(), 2);
    assert!(outcome.has_more());
}

#[test]
fn render_table_tracks_session_outcomes() {
    let engine = engine();
    let mut session = GallerySession::new(&engine);
    let mut table = RenderTable::new(engine.items());
    table.reorder(engine.items(), "modified_at");

    let (state, outcome) = session.apply(QueryState::from_input("solar", "modified_at"));
    table.apply(&outcome);
    assert_eq!(table.visible_ids(), vec!["hydra-4", "hydra-2"]);
    assert_eq!(table.arrange(&outcome), outcome);

    let (_, outcome) = session.load_more(state);
    table.apply(&outcome);
    assert_eq!(table.visible_ids(), vec!["hydra-4", "hydra-2", "hydra-0"]);

    table.reorder(engine.items(), "id");
    assert_eq!(table.visible_ids(), vec!["hydra-0", "hydra-2", "hydra-4"]);
}
