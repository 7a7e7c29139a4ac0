#![cfg(test)]
//! Integration tests driving the public state API the way the event loop does:
//! decode a server body, apply it, then sort, paginate and switch language.

use charbrowse::i18n::Language;
use charbrowse::sources::decode_characters;
use charbrowse::state::{AppState, FetchResult, SortKey};

const BODY: &str = r#"{
  "data": {
    "characters": {
      "info": { "pages": 42, "next": 2, "prev": null },
      "results": [
        { "id": "1", "name": "Rick Sanchez", "status": "Alive", "species": "Human",
          "gender": "Male", "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
          "origin": { "name": "Earth (C-137)" } },
        { "id": "2", "name": "Morty Smith", "status": "Alive", "species": "Human",
          "gender": "Male", "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
          "origin": { "name": "unknown" } },
        { "id": "8", "name": "Adjudicator Rick", "status": "Dead", "species": "Human",
          "gender": "Male", "image": null, "origin": { "name": null } }
      ]
    }
  }
}"#;

fn loaded_app() -> AppState {
    let page = decode_characters(BODY).expect("body decodes");
    let mut app = AppState::default();
    let id = app.begin_request();
    assert!(app.apply_fetch_result(FetchResult {
        id,
        outcome: Ok(page),
    }));
    app
}

#[test]
/// What: A decoded first page enables "next" only and sorts client-side.
fn decoded_page_drives_state() {
    let mut app = loaded_app();
    assert!(app.can_go_next());
    assert!(!app.can_go_prev());

    let names: Vec<String> = app.sorted_records().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Adjudicator Rick", "Morty Smith", "Rick Sanchez"]);

    app.toggle_sort_key();
    assert_eq!(app.sort_key, SortKey::Origin);
    let ids: Vec<String> = app.sorted_records().into_iter().map(|c| c.id).collect();
    // Null origin sorts as the empty string, ahead of everything else.
    assert_eq!(ids, ["8", "1", "2"]);
}

#[test]
/// What: Moving to the next page produces variables for page 2 with the same filters.
fn next_page_builds_request_variables() {
    let mut app = loaded_app();
    app.set_status_filter("Alive");
    assert!(app.next_page());
    let vars = app.query_variables();
    assert_eq!(vars.page, 2);
    assert_eq!(vars.status, "Alive");
    assert_eq!(vars.species, "");
}

#[test]
/// What: Switching language changes labels but not the records.
fn language_switch_keeps_records() {
    let mut app = loaded_app();
    let before = app.sorted_records();
    app.toggle_language();
    assert_eq!(app.language, Language::De);
    assert_eq!(app.t("card.species"), "Spezies");
    assert_eq!(
        app.translations.status_label(app.language, "dead"),
        "Tot"
    );
    assert_eq!(app.sorted_records(), before);
}
