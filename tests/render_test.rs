//! Screen rendering tests against an in-memory terminal.

use std::fs;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;
use trivia::{handle_input, render, App, Backdrop, QuestionSource, Screen};

fn screen_text(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_for(dir: &Path) -> App {
    let path = dir.join("trivia.txt");
    fs::write(&path, "2+2?|4\nCapital of France?|Paris\n").unwrap();
    App::new(QuestionSource::new(path), Backdrop::blank())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_welcome_screen() {
    let dir = TempDir::new().unwrap();
    let app = app_for(dir.path());

    let text = screen_text(&app);
    assert!(text.contains("TRIVIA CHALLENGE"));
    assert!(text.contains("to start playing"));
}

#[test]
fn test_question_and_score_are_shown() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());
    press(&mut app, KeyCode::Enter);

    let text = screen_text(&app);
    assert!(text.contains("Question 1: 2+2?"));
    assert!(text.contains("Score: 0"));
}

#[test]
fn test_notice_popup_is_modal() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "4");
    press(&mut app, KeyCode::Enter);
    assert!(screen_text(&app).contains("Correct!"));

    // Typing is swallowed while the popup is up.
    type_text(&mut app, "x");
    assert_eq!(app.input(), "");

    press(&mut app, KeyCode::Enter);
    assert!(app.notice().is_none());
    let text = screen_text(&app);
    assert!(text.contains("Question 2: Capital of France?"));
    assert!(text.contains("Score: 1"));
}

#[test]
fn test_play_through_and_replay() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "4");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "  PARIS ");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen, Screen::Result);
    let text = screen_text(&app);
    assert!(text.contains("You scored 2 out of 2 points."));
    assert!(text.contains("Perfect round!"));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.screen, Screen::Playing);
    assert_eq!(app.score(), 0);
}

#[test]
fn test_long_answer_keeps_its_end_visible() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "The Nile river in north eastern Africa");
    let text = screen_text(&app);
    assert!(text.contains("eastern Africa_"));

    type_text(&mut app, " flows north into the Mediterranean");
    assert!(screen_text(&app).contains("the Mediterranean_"));
}

#[test]
fn test_long_notice_keeps_hint() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trivia.txt");
    let answer = "word ".repeat(22);
    fs::write(&path, format!("Long one?|{}\n", answer.trim())).unwrap();
    let mut app = App::new(QuestionSource::new(path), Backdrop::blank());
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "nope");
    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app);
    assert!(text.contains("Wrong!"));
    assert!(text.contains("enter ok"));
}

#[test]
fn test_modified_letters_are_not_typed() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "4");
    assert!(!handle_input(
        &mut app,
        KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)
    ));
    assert!(!handle_input(
        &mut app,
        KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT)
    ));
    assert!(!handle_input(
        &mut app,
        KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)
    ));
    assert_eq!(app.input(), "4A");
}

#[test]
fn test_escape_still_quits_after_failed_restart() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "4");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Paris");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Result);

    fs::remove_file(dir.path().join("trivia.txt")).unwrap();
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.screen, Screen::Welcome);
    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn test_escape_quits_only_after_start() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());

    assert!(!press(&mut app, KeyCode::Esc));
    press(&mut app, KeyCode::Enter);
    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn test_ctrl_c_always_quits() {
    let dir = TempDir::new().unwrap();
    let mut app = app_for(dir.path());

    assert!(handle_input(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    ));
}

#[test]
fn test_missing_file_on_start_shows_error() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(
        QuestionSource::new(dir.path().join("trivia.txt")),
        Backdrop::blank(),
    );
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen, Screen::Welcome);
    assert!(screen_text(&app).contains("question file not found"));
}
