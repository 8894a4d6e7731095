//! Tests for the listing view.

use super::*;
use crate::bulk::{Mutation, MutationOutcome};
use crate::config::ListingConfig;
use crate::fetch::FetchError;
use crate::filter::Query;
use crate::group::{by_trailing_number, UNGROUPED};
use crate::item::fixtures::{numbered, Entry, NOTE, TITLE};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers,
    }) as Msg
}

fn list(count: usize) -> Model<Entry> {
    Model::new(numbered(count), vec![TITLE, NOTE], ListingConfig::default())
}

fn selectable(count: usize) -> Model<Entry> {
    Model::new(
        numbered(count),
        vec![TITLE],
        ListingConfig::default().with_selection(true),
    )
}

fn ids(items: &[Entry]) -> Vec<&str> {
    items.iter().map(|e| e.id.as_str()).collect()
}

fn day_of(e: &Entry) -> Option<String> {
    e.day.clone()
}

#[test]
fn test_initial_state() {
    let l = list(25);
    assert_eq!(l.current_page(), 1);
    assert_eq!(l.total_pages(), 3);
    assert_eq!(l.page_items().len(), 10);
    assert_eq!(l.filter_state(), FilterState::Unfiltered);
    assert!(l.selection().is_empty());
}

#[test]
fn test_query_narrows_and_resets_page() {
    // "item 1" hits Item 1 and Item 10..19 by title, and e23 by its note
    let mut items = numbered(25);
    items[22].note = Some("see item 1 notes".to_string());
    let mut l = Model::new(items, vec![TITLE, NOTE], ListingConfig::default());

    l.set_page(3);
    assert_eq!(l.page_items().len(), 5);

    l.set_search_text("item 1");
    assert_eq!(l.total_matches(), 12);
    assert_eq!(l.current_page(), 1);
    assert_eq!(l.total_pages(), 2);
    assert_eq!(l.page_items().len(), 10);

    l.next_page();
    assert_eq!(l.page_items().len(), 2);
    assert_eq!(ids(l.page_items()), vec!["e19", "e23"]);
}

#[test]
fn test_paging_does_not_refilter() {
    let mut l = list(25);
    l.set_search_text("item 2");
    let matches = l.total_matches();
    l.next_page();
    l.prev_page();
    assert_eq!(l.total_matches(), matches);
    assert_eq!(l.query().text, "item 2");
}

#[test]
fn test_refresh_clamps_out_of_range_page() {
    let mut l = list(25);
    l.set_page(3);
    l.set_items(numbered(12));
    assert_eq!(l.total_pages(), 2);
    assert_eq!(l.current_page(), 1);
}

#[test]
fn test_refresh_keeps_valid_page() {
    let mut l = list(25);
    l.set_page(2);
    l.set_items(numbered(40));
    assert_eq!(l.current_page(), 2);
    assert_eq!(l.total_pages(), 4);
}

#[test]
fn test_refresh_reapplies_query() {
    let mut l = list(5);
    l.set_search_text("item 3");
    assert_eq!(l.total_matches(), 1);
    l.set_items(numbered(40));
    // Item 3, Item 30..39
    assert_eq!(l.total_matches(), 11);
}

#[test]
fn test_category_filter() {
    let items = vec![
        Entry::new("a", "Hello").with_category("news"),
        Entry::new("b", "Hello again").with_category("blog"),
        Entry::new("c", "Bye").with_category("news"),
    ];
    let mut l = Model::new(items, vec![TITLE], ListingConfig::default());
    l.set_category(Some("news"));
    assert_eq!(ids(l.visible_items()), vec!["a", "c"]);
    l.set_search_text("hello");
    assert_eq!(ids(l.visible_items()), vec!["a"]);
    l.set_category(Some("all"));
    assert_eq!(ids(l.visible_items()), vec!["a", "b"]);
    l.clear_query();
    assert_eq!(l.total_matches(), 3);
}

#[test]
fn test_selection_survives_filter_and_refresh() {
    let mut l = selectable(25);
    l.toggle("e1");
    l.toggle("e25");
    l.set_search_text("item 2");
    assert!(l.selection().is_selected("e1"));
    l.set_items(numbered(30));
    assert!(l.selection().is_selected("e25"));
    assert_eq!(l.selection().len(), 2);
}

#[test]
fn test_select_all_visible_only_touches_matches() {
    let mut l = selectable(25);
    l.toggle("e5");
    l.set_search_text("item 1");
    l.select_all_visible();
    assert_eq!(l.selection().len(), 12); // 11 matches + e5
    l.select_all_visible();
    assert_eq!(l.selection().to_payload(), vec!["e5"]);
}

#[test]
fn test_select_all_on_page() {
    let mut l = selectable(25);
    l.set_page(3);
    l.select_all_on_page();
    assert_eq!(l.selection().len(), 5);
    assert!(l.selection().is_selected("e21"));
}

#[test]
fn test_cursor_moves_across_pages() {
    let mut l = list(12);
    for _ in 0..9 {
        l.cursor_down();
    }
    assert_eq!(l.cursor(), 9);
    l.cursor_down();
    assert_eq!(l.current_page(), 2);
    assert_eq!(l.cursor(), 0);
    assert_eq!(l.cursor_item().map(|e| e.id.as_str()), Some("e11"));
    l.cursor_up();
    assert_eq!(l.current_page(), 1);
    assert_eq!(l.cursor(), 9);
}

#[test]
fn test_grouped_presentation() {
    let items = vec![
        Entry::new("a", "Slam").with_day("Day 2"),
        Entry::new("b", "Opening").with_day("Day 1"),
        Entry::new("c", "Closing").with_day("Day 2"),
        Entry::new("d", "Pop-up reading"),
    ];
    let l = Model::new(items, vec![TITLE], ListingConfig::default())
        .with_grouping(day_of, by_trailing_number);

    assert_eq!(ids(l.visible_items()), vec!["b", "a", "c", "d"]);
    let frame = l.presentation();
    let groups = frame.groups.expect("grouped");
    let labels: Vec<_> = groups.labels().collect();
    assert_eq!(labels, vec!["Day 1", "Day 2", UNGROUPED]);
    assert_eq!(groups.get("Day 2").map(|g| ids(&g.items)), Some(vec!["a", "c"]));
}

#[test]
fn test_grouped_pages_follow_group_order() {
    let items: Vec<Entry> = (1..=6)
        .map(|i| Entry::new(format!("s{i}"), "Talk").with_day(&format!("Day {}", 4 - (i % 3))))
        .collect();
    let l = Model::new(
        items,
        vec![TITLE],
        ListingConfig::default().with_page_size(4),
    )
    .with_grouping(day_of, by_trailing_number);

    let frame = l.presentation();
    assert_eq!(frame.total_pages, 2);
    let groups = frame.groups.as_ref().expect("grouped");
    let labels: Vec<&str> = groups.labels().collect();
    assert_eq!(labels, vec!["Day 2", "Day 3"]);
}

#[test]
fn test_presentation_no_results() {
    let mut l = list(5);
    l.set_search_text("nothing like this");
    let frame = l.presentation();
    assert!(frame.no_results());
    assert_eq!(frame.total_pages, 1);
    assert_eq!(frame.current_page, 1);
    assert!(frame.page_items.is_empty());
}

#[test]
fn test_fetch_applied() {
    let mut l = list(0);
    let request = l.begin_fetch();
    assert!(l.is_loading());
    assert_eq!(l.apply_fetch(request, Ok(numbered(15))), FetchOutcome::Applied);
    assert!(!l.is_loading());
    assert_eq!(l.total_pages(), 2);
}

#[test]
fn test_stale_fetch_ignored() {
    let mut l = list(3);
    let old = l.begin_fetch();
    let new = l.begin_fetch();
    assert_eq!(l.apply_fetch(new, Ok(numbered(7))), FetchOutcome::Applied);
    assert_eq!(l.apply_fetch(old, Ok(numbered(99))), FetchOutcome::Stale);
    assert_eq!(l.items().len(), 7);
}

#[test]
fn test_failed_fetch_keeps_last_good_items() {
    let mut l = list(8);
    let request = l.begin_fetch();
    let outcome = l.apply_fetch(request, Err(FetchError::Network("timeout".into())));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(l.items().len(), 8);
    assert!(l.status().is_some());
}

#[test]
fn test_bulk_delete_requires_confirmation() {
    let mut l = selectable(5);
    assert!(!l.request_delete_selected());

    l.toggle("e2");
    l.toggle("e4");
    assert!(l.request_delete_selected());
    assert!(l.is_confirming());
    assert_eq!(l.status(), Some("Delete 2 items? (y/n)"));

    // any other key is swallowed while confirming
    assert_eq!(l.update(&key(KeyCode::Char('j'))), None);
    assert_eq!(l.cursor(), 0);

    let action = l.update(&key(KeyCode::Char('y')));
    let mutation = match action {
        Some(Action::Mutate(m)) => m,
        other => panic!("expected a mutation, got {other:?}"),
    };
    assert_eq!(mutation, Mutation::Delete(vec!["e2".into(), "e4".into()]));
    assert!(!l.is_confirming());

    assert_eq!(
        l.apply_mutation(&mutation, MutationOutcome::success()),
        Some(Action::Refresh)
    );
    assert!(l.selection().is_empty());
    assert!(l.needs_refetch());
    // the collection is not patched locally
    assert_eq!(l.items().len(), 5);

    let request = l.begin_fetch();
    let remaining: Vec<Entry> = numbered(5)
        .into_iter()
        .filter(|e| e.id != "e2" && e.id != "e4")
        .collect();
    l.apply_fetch(request, Ok(remaining));
    assert!(!l.needs_refetch());
    assert_eq!(l.items().len(), 3);
}

#[test]
fn test_cancelled_delete_keeps_selection() {
    let mut l = selectable(5);
    l.toggle("e1");
    l.request_delete_selected();
    assert_eq!(l.update(&key(KeyCode::Char('n'))), None);
    assert!(!l.is_confirming());
    assert!(l.selection().is_selected("e1"));
    assert_eq!(l.status(), None);
}

#[test]
fn test_failed_mutation_keeps_selection() {
    let mut l = selectable(5);
    l.toggle("e1");
    let mutation = Mutation::Delete(vec!["e1".into()]);
    assert_eq!(
        l.apply_mutation(&mutation, MutationOutcome::failure("Permission denied")),
        None
    );
    assert!(l.selection().is_selected("e1"));
    assert!(!l.needs_refetch());
    assert_eq!(l.status(), Some("Permission denied"));
}

#[test]
fn test_keys_page_and_cursor() {
    let mut l = list(25);
    l.update(&key(KeyCode::Right));
    assert_eq!(l.current_page(), 2);
    l.update(&key(KeyCode::Char('j')));
    assert_eq!(l.cursor(), 1);
    l.update(&key(KeyCode::End));
    assert_eq!(l.current_page(), 3);
    assert_eq!(l.cursor(), 0);
}

#[test]
fn test_keys_search_flow() {
    let mut l = list(25);
    l.update(&key(KeyCode::Right));
    l.update(&key(KeyCode::Char('/')));
    assert_eq!(l.filter_state(), FilterState::Filtering);

    for c in "item 2".chars() {
        l.update(&key(KeyCode::Char(c)));
    }
    assert_eq!(l.query().text, "item 2");
    assert_eq!(l.current_page(), 1);
    // Item 2, Item 20..25
    assert_eq!(l.total_matches(), 7);

    l.update(&key(KeyCode::Backspace));
    assert_eq!(l.query().text, "item ");

    l.update(&key(KeyCode::Enter));
    assert_eq!(l.filter_state(), FilterState::FilterApplied);

    l.update(&key(KeyCode::Esc));
    assert_eq!(l.filter_state(), FilterState::Unfiltered);
    assert!(l.query().is_empty());
}

#[test]
fn test_keys_selection() {
    let mut l = selectable(25);
    l.update(&key(KeyCode::Char(' ')));
    assert!(l.selection().is_selected("e1"));
    l.update(&key(KeyCode::Char('a')));
    assert_eq!(l.selection().len(), 25);
    l.update(&key(KeyCode::Char('c')));
    assert!(l.selection().is_empty());
}

#[test]
fn test_selection_keys_disabled_when_not_selectable() {
    let mut l = list(5);
    l.update(&key(KeyCode::Char(' ')));
    assert!(l.selection().is_empty());
}

#[test]
fn test_refresh_key_requests_fetch() {
    let mut l = list(5);
    assert_eq!(l.update(&key(KeyCode::Char('r'))), Some(Action::Refresh));
}

#[test]
fn test_view_contents() {
    let mut l = selectable(25).with_label(|e: &Entry| e.title.clone());
    l.toggle("e1");
    let out = l.view();
    assert!(out.contains("Item 1"));
    assert!(out.contains("[x]"));
    assert!(out.contains("[ ]"));
    assert!(out.contains("25 items"));
    assert!(out.contains("1 selected"));
    assert!(!out.contains("Item 11"));
}

#[test]
fn test_view_no_matches() {
    let mut l = list(3);
    l.set_search_text("zzz");
    assert!(l.view().contains("No items match."));
}

#[test]
fn test_view_group_headers() {
    let items = vec![
        Entry::new("a", "Slam").with_day("Day 2"),
        Entry::new("b", "Opening").with_day("Day 1"),
    ];
    let l = Model::new(items, vec![TITLE], ListingConfig::default())
        .with_grouping(day_of, by_trailing_number)
        .with_label(|e: &Entry| e.title.clone());
    let out = l.view();
    let day1 = out.find("Day 1").expect("Day 1 header");
    let day2 = out.find("Day 2").expect("Day 2 header");
    assert!(day1 < day2);
}

#[test]
fn test_query_from_struct() {
    let mut l = list(25);
    l.set_query(Query::new("  "));
    assert_eq!(l.total_matches(), 25);
}

#[test]
fn test_programmatic_query_sets_filter_state() {
    let mut l = list(25);
    l.set_search_text("item 2");
    assert_eq!(l.filter_state(), FilterState::FilterApplied);
    assert!(l.view().contains("“item 2”"));

    l.update(&key(KeyCode::Esc));
    assert_eq!(l.filter_state(), FilterState::Unfiltered);
    assert!(l.query().is_empty());
    assert_eq!(l.total_matches(), 25);
}

#[test]
fn test_category_only_query_is_applied() {
    let items = vec![
        Entry::new("a", "Hello").with_category("news"),
        Entry::new("b", "Bye").with_category("blog"),
    ];
    let mut l = Model::new(items, vec![TITLE], ListingConfig::default());
    l.set_category(Some("news"));
    assert_eq!(l.filter_state(), FilterState::FilterApplied);
    l.set_category(Some("all"));
    assert_eq!(l.filter_state(), FilterState::Unfiltered);
}

#[test]
fn test_blank_text_leaves_state_unfiltered() {
    let mut l = list(5);
    l.set_search_text("item");
    l.set_search_text("   ");
    assert_eq!(l.filter_state(), FilterState::Unfiltered);
}

#[test]
fn test_typing_keeps_filtering_state() {
    let mut l = list(25);
    l.update(&key(KeyCode::Char('/')));
    l.update(&key(KeyCode::Char('9')));
    assert_eq!(l.filter_state(), FilterState::Filtering);
    l.update(&key(KeyCode::Backspace));
    assert_eq!(l.filter_state(), FilterState::Filtering);
}

#[test]
fn test_control_chars_are_not_typed_into_search() {
    let mut l = list(25);
    l.update(&key(KeyCode::Char('/')));
    l.update(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
    l.update(&press(KeyCode::Char('x'), KeyModifiers::ALT));
    assert_eq!(l.query().text, "");

    l.update(&press(KeyCode::Char('I'), KeyModifiers::SHIFT));
    assert_eq!(l.query().text, "I");
}
