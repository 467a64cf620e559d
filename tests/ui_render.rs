//! Full-pipeline render tests on a vt100 virtual terminal.
//!
//! These drive the real controller through transitions and assert on
//! the rendered screen text.

mod vt100_backend;

use std::time::Duration;

use ratatui::Terminal;

use vitrine_engine::{App, Phase, parse_portfolio};
use vitrine_types::{Timings, UiOptions};
use vitrine_tui::draw;

use vt100_backend::VT100Backend;

const WIDTH: u16 = 90;
const HEIGHT: u16 = 30;

fn demo_app() -> App {
    let content = parse_portfolio(include_str!("../cli/assets/portfolio.toml"))
        .expect("embedded portfolio must parse");
    App::new(content, UiOptions::default(), Timings::default())
}

fn terminal() -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("failed to create terminal")
}

fn render(terminal: &mut Terminal<VT100Backend>, app: &mut App) -> String {
    terminal
        .draw(|frame| draw(frame, app))
        .expect("failed to draw");
    terminal.backend().contents()
}

/// Run the splash and initial menu reveal to completion.
fn boot(app: &mut App) {
    app.tick(Duration::from_millis(1000));
    app.tick(Duration::from_millis(900));
    assert_eq!(app.phase(), Phase::Menu);
}

#[test]
fn loading_screen_shows_title_and_spinner() {
    let mut app = demo_app();
    let mut terminal = terminal();
    app.tick(Duration::from_millis(100));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Mara Voss"));
    assert!(screen.contains("loading"));
    assert!(!screen.contains("Introduction"), "menu is not up yet");
}

#[test]
fn settled_menu_shows_every_tile_and_chrome() {
    let mut app = demo_app();
    let mut terminal = terminal();
    boot(&mut app);

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Mara Voss"));
    for label in ["Introduction", "About", "Projects", "Contact"] {
        assert!(screen.contains(label), "missing menu tile {label}");
    }
    assert!(screen.contains("built with vitrine"), "footer missing");
}

#[test]
fn section_view_shows_body_nav_and_highlight() {
    let mut app = demo_app();
    let mut terminal = terminal();
    boot(&mut app);

    app.show_section("about");
    app.tick(Duration::from_millis(550));
    app.tick(Duration::from_millis(600));
    assert_eq!(app.phase(), Phase::Section { index: 1 });

    // First draw reports layout; second draw renders the highlight
    // computed from it.
    render(&mut terminal, &mut app);
    let screen = render(&mut terminal, &mut app);

    assert!(screen.contains("About"));
    assert!(screen.contains("back to menu"));
    for anchor in ["Overview", "Path", "Now"] {
        assert!(screen.contains(anchor), "missing nav anchor {anchor}");
    }
    assert!(screen.contains("● Overview"), "home anchor not highlighted");
    assert!(screen.contains("command line"), "body text missing");
    assert!(!screen.contains("Projects"), "menu must be gone");
}

#[test]
fn landing_section_renders_finished_counters() {
    let mut app = demo_app();
    let mut terminal = terminal();
    boot(&mut app);

    app.show_section("introduction");
    app.tick(Duration::from_millis(550));
    app.tick(Duration::from_millis(500));
    app.tick(Duration::from_millis(3000));
    assert!(!app.counters_running());

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("11"));
    assert!(screen.contains("340"));
    assert!(screen.contains("24"));
    assert!(screen.contains("years shipping production systems"));
}

#[test]
fn gallery_filter_hides_non_matching_cards() {
    let mut app = demo_app();
    let mut terminal = terminal();
    boot(&mut app);

    app.show_section("projects");
    app.tick(Duration::from_millis(550));
    app.tick(Duration::from_millis(600));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("quill"));
    assert!(screen.contains("loomctl"));

    app.filter_gallery("storage");
    app.tick(Duration::from_millis(500));
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("quill"));
    assert!(screen.contains("ferrite-kv"));
    assert!(!screen.contains("loomctl"), "non-matching card still shown");
    assert!(!screen.contains("packet-loom"), "non-matching card still shown");
}

#[test]
fn tab_switch_swaps_pane_content() {
    let mut app = demo_app();
    let mut terminal = terminal();
    boot(&mut app);

    app.show_section("about");
    app.tick(Duration::from_millis(550));
    app.tick(Duration::from_millis(600));

    // First draw reports the scroll range; then scroll past the
    // markdown body so the tab pane is on screen.
    render(&mut terminal, &mut app);
    app.scroll_by(i32::from(u16::MAX));
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("LSM trees"), "skills pane should be active");

    app.switch_tab("about", "experience");
    render(&mut terminal, &mut app);
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Staff engineer"));
    assert!(!screen.contains("LSM trees"));
}

#[test]
fn back_navigation_restores_the_menu() {
    let mut app = demo_app();
    let mut terminal = terminal();
    boot(&mut app);

    app.show_section("contact");
    app.tick(Duration::from_millis(550));
    app.back_to_menu();
    app.tick(Duration::from_millis(550));
    app.tick(Duration::from_millis(150));
    app.tick(Duration::from_millis(600));
    assert_eq!(app.phase(), Phase::Menu);

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Introduction"));
    assert!(screen.contains("Contact"));
    assert!(!screen.contains("Say hello"), "section body must be gone");
}

#[test]
fn reduced_motion_reaches_the_menu_in_two_ticks() {
    let content = parse_portfolio(include_str!("../cli/assets/portfolio.toml"))
        .expect("embedded portfolio must parse");
    let mut app = App::new(
        content,
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        Timings::default(),
    );
    let mut terminal = terminal();

    app.tick(Duration::ZERO);
    app.tick(Duration::ZERO);
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Introduction"));
}
