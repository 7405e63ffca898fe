mod harness;

use crossterm::event::{KeyCode, KeyModifiers};

use harness::TestApp;
use harness::fixtures;
use litetui::app::query_state::QueryFocus;
use litetui::app::view_state::ViewState;

#[test]
fn table_list_lists_tables_alphabetically() {
    let db = fixtures::shop();
    let app = TestApp::open(&db.path);

    assert_eq!(app.state.session.filtered_table_names, vec!["products", "users"]);
    let screen = app.screen();
    assert!(screen.contains("SQLite TUI - Tables"));
    assert!(screen.contains("> products"));
    assert!(screen.contains("  users"));
}

#[test]
fn search_then_open_loads_first_page() {
    let db = fixtures::shop();
    let mut app = TestApp::open(&db.path);

    app.press(KeyCode::Char('/'));
    app.type_text("pr");

    assert_eq!(app.state.session.filtered_table_names, vec!["products"]);
    let ViewState::TableList(view) = &app.state.view else {
        panic!("expected table list, got {:?}", app.state.view.mode());
    };
    assert_eq!(view.selected, 0);

    app.press(KeyCode::Enter);
    assert!(app.screen().contains("Filtered by: pr (1/2 tables)"));

    app.press(KeyCode::Enter);

    assert!(matches!(app.state.view, ViewState::TableData(_)));
    assert_eq!(app.state.session.active_table(), Some("products"));
    assert_eq!(app.state.session.current_page, 0);
    assert_eq!(app.state.session.filtered_rows.len(), 2);
    let screen = app.screen();
    assert!(screen.contains("Table: products"));
    assert!(screen.contains("Page 1/1 (2 total rows)"));
    assert!(screen.contains("Widget"));
}

#[test]
fn back_from_table_data_clears_filter_and_keeps_table_selected() {
    let db = fixtures::shop();
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Char('/'));
    app.type_text("us");
    app.press(KeyCode::Enter);
    app.press(KeyCode::Enter);
    assert_eq!(app.state.session.active_table(), Some("users"));

    app.press(KeyCode::Char('q'));

    assert_eq!(app.state.session.filtered_table_names, vec!["products", "users"]);
    let ViewState::TableList(view) = &app.state.view else {
        panic!("expected table list");
    };
    assert_eq!(view.selected, 1);
}

#[test]
fn cell_edit_writes_through_and_survives_reload() {
    let db = fixtures::shop();
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Char('j'));
    app.press(KeyCode::Enter);
    assert_eq!(app.state.session.active_table(), Some("users"));

    app.press(KeyCode::Enter);
    app.press(KeyCode::Char('j'));
    app.press(KeyCode::Enter);
    let ViewState::CellEdit(edit) = &app.state.view else {
        panic!("expected cell edit");
    };
    assert_eq!(edit.input.text(), "a");
    assert_eq!(edit.input.cursor(), 1);

    app.press(KeyCode::Backspace);
    app.type_text("b");
    app.press(KeyCode::Enter);

    let ViewState::RowDetail(detail) = &app.state.view else {
        panic!("expected row detail");
    };
    assert_eq!(detail.selected_col, 1);
    assert_eq!(app.state.session.filtered_rows[0][1], "b");
    assert!(app.screen().contains("Saved users.name"));

    app.press(KeyCode::Esc);
    app.press(KeyCode::Char('r'));

    assert!(matches!(app.state.view, ViewState::TableData(_)));
    assert_eq!(app.state.session.raw_rows[0], vec!["7", "b", "a@example.com"]);
    let name: String = db
        .connect()
        .query_row("SELECT name FROM users WHERE id = 7", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "b");
}

#[test]
fn cancelled_edit_leaves_database_untouched() {
    let db = fixtures::shop();
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Char('j'));
    app.press(KeyCode::Enter);
    app.press(KeyCode::Enter);
    app.press(KeyCode::Enter);
    app.type_text("zzz");

    app.press(KeyCode::Esc);

    assert!(matches!(app.state.view, ViewState::RowDetail(_)));
    assert_eq!(app.state.session.filtered_rows[0][0], "7");
    let count: i64 = db
        .connect()
        .query_row("SELECT COUNT(*) FROM users WHERE id = 7", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn rows_scroll_across_page_boundaries() {
    let db = fixtures::numbered_items(45);
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Enter);
    for _ in 0..19 {
        app.press(KeyCode::Char('j'));
    }

    app.press(KeyCode::Char('j'));
    assert_eq!(app.state.session.current_page, 1);
    assert_eq!(app.state.session.filtered_rows[0][0], "21");
    let ViewState::TableData(view) = &app.state.view else {
        panic!("expected table data");
    };
    assert_eq!(view.selected_row, 0);

    app.press(KeyCode::Char('k'));
    assert_eq!(app.state.session.current_page, 0);
    let ViewState::TableData(view) = &app.state.view else {
        panic!("expected table data");
    };
    assert_eq!(view.selected_row, 19);
}

#[test]
fn goto_keys_jump_between_first_and_last_page() {
    let db = fixtures::numbered_items(45);
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Enter);

    app.press(KeyCode::Char('G'));
    assert_eq!(app.state.session.current_page, 2);
    let ViewState::TableData(view) = &app.state.view else {
        panic!("expected table data");
    };
    assert_eq!(app.state.session.filtered_rows[view.selected_row][0], "45");
    assert!(app.screen().contains("Page 3/3 (45 total rows)"));

    app.press(KeyCode::Char('g'));
    assert_eq!(app.state.session.current_page, 2);
    app.press(KeyCode::Char('g'));
    assert_eq!(app.state.session.current_page, 0);
    let ViewState::TableData(view) = &app.state.view else {
        panic!("expected table data");
    };
    assert_eq!(view.selected_row, 0);
}

#[test]
fn query_result_edit_is_attributed_and_returns_to_results() {
    let db = fixtures::shop();
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Char('s'));
    app.type_text("SELECT email FROM users");
    app.press(KeyCode::Enter);

    assert_eq!(app.state.session.columns, vec!["id", "email"]);
    assert!(app.screen().contains("2 rows returned"));
    let ViewState::Query(query) = &app.state.view else {
        panic!("expected query view");
    };
    assert_eq!(query.focus, QueryFocus::Results);

    app.press(KeyCode::Enter);
    app.press(KeyCode::Char('j'));
    app.press(KeyCode::Enter);
    app.press_with(KeyCode::Char('u'), KeyModifiers::CONTROL);
    app.type_text("new@example.com");
    app.press(KeyCode::Enter);

    assert!(app.screen().contains("Saved users.email"));
    assert_eq!(app.state.session.query_source_table.as_deref(), Some("users"));

    app.press(KeyCode::Esc);
    let ViewState::Query(query) = &app.state.view else {
        panic!("expected query view");
    };
    assert_eq!(query.focus, QueryFocus::Results);
    assert_eq!(query.input.text(), "SELECT email FROM users");
    assert_eq!(app.state.session.filtered_rows[0][1], "new@example.com");

    let email: String = db
        .connect()
        .query_row("SELECT email FROM users WHERE id = 7", [], |row| row.get(0))
        .unwrap();
    assert_eq!(email, "new@example.com");
}

#[test]
fn failed_query_shows_error_inline_and_keeps_input() {
    let db = fixtures::shop();
    let mut app = TestApp::open(&db.path);
    app.press(KeyCode::Char('s'));
    app.type_text("SELEC 1");

    app.press(KeyCode::Enter);

    let ViewState::Query(query) = &app.state.view else {
        panic!("expected query view");
    };
    assert_eq!(query.focus, QueryFocus::Input);
    assert!(query.error.as_deref().is_some_and(|e| e.starts_with("Query failed")));
    assert!(app.state.fatal_error.is_none());
    assert!(app.screen().contains("Error: Query failed"));
}
