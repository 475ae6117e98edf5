mod app;
mod catalog;
mod config;
mod engine;
mod event;
mod session;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, AppScreen, FocusArea};
use catalog::ExerciseCatalog;
use config::Config;
use event::{AppEvent, EventHandler};
use session::drill::Feedback;
use ui::components::answer_panel::AnswerPanel;
use ui::components::prompt::PromptPanel;
use ui::components::slot_row::SlotRow;
use ui::components::tile_palette::TilePalette;
use ui::layout::{AppLayout, centered_rect, pack_hint_lines};

#[derive(Parser)]
#[command(name = "vakkiyam", version, about = "Terminal Tamil sentence-building trainer")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Start with this grammar concept filter")]
    concept: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Load exercises from a JSON file instead of the bundled catalog"
    )]
    catalog: Option<PathBuf>,

    #[arg(long, help = "Validate the exercise catalog and exit")]
    check_catalog: bool,

    #[arg(long, help = "List bundled themes and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in ui::theme::Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let catalog = match &cli.catalog {
        Some(path) => ExerciseCatalog::from_path(path)?,
        None => ExerciseCatalog::load()?,
    };

    if cli.check_catalog {
        println!(
            "catalog ok: {} exercises across {} concepts",
            catalog.len(),
            catalog.concepts().len()
        );
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_default();
    config.normalize_start_concept(&catalog.concept_labels());
    if let Some(concept) = cli.concept {
        config.start_concept = concept;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let mut app = App::new(config, catalog);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Persist the runtime toggles (shuffle, grammar notes) for next launch.
    let _ = app.config.save();

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Drill => handle_drill_key(app, key),
        AppScreen::ConceptPicker => handle_picker_key(app, key),
    }
}

fn handle_drill_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Left | KeyCode::Char('h') => app.cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
            FocusArea::Palette => app.select_tile_at_cursor(),
            FocusArea::Slots => app.remove_slot_at_cursor(),
        },
        KeyCode::Backspace => app.remove_last_slot(),
        KeyCode::Char('c') => app.check_answer(),
        KeyCode::Char('x') => app.clear_attempt(),
        KeyCode::Char('n') | KeyCode::Char(']') => app.next_exercise(),
        KeyCode::Char('p') | KeyCode::Char('[') => app.prev_exercise(),
        KeyCode::Char('a') => app.toggle_answer(),
        KeyCode::Char('f') => app.open_concept_picker(),
        KeyCode::Char('s') => app.toggle_shuffle(),
        KeyCode::Char('e') => app.toggle_explanation(),
        KeyCode::Char(ch @ '1'..='9') => {
            app.select_tile_number(ch as usize - '0' as usize);
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_concept_picker(),
        KeyCode::Up | KeyCode::Char('k') => app.picker.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.picker.next(),
        KeyCode::Enter => app.apply_concept_picker(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    render_drill(frame, app);

    if app.screen == AppScreen::ConceptPicker {
        let popup = centered_rect(40, 60, area);
        frame.render_widget(&app.picker, popup);
    }
}

fn render_drill(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::new(area);

    render_header(frame, app, layout.header);

    match app.session.current_exercise() {
        Some(_) => render_exercise(frame, app, layout.main),
        None => render_empty_filter(frame, app, layout.main),
    }

    render_footer(frame, app, layout.footer);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let info = match app.session.current_exercise() {
        Some(exercise) => format!(
            " {} | {}/{} | Level {}",
            app.session.concept_filter().label(),
            app.session.position() + 1,
            app.session.exercise_count(),
            exercise.level,
        ),
        None => format!(" {} | no exercises", app.session.concept_filter().label()),
    };

    let mut spans = vec![
        Span::styled(
            " vakkiyam ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info,
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ];
    if app.config.shuffle_tiles {
        spans.push(Span::styled(
            " | shuffled",
            Style::default().fg(colors.warning()).bg(colors.header_bg()),
        ));
    }

    let header =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_exercise(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let Some(exercise) = app.session.current_exercise() else {
        return;
    };

    let answer_constraint = if app.session.answer_revealed() {
        Constraint::Min(5)
    } else {
        Constraint::Min(0)
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(2),
            answer_constraint,
        ])
        .split(area);

    let prompt = PromptPanel::new(exercise, app.theme);
    frame.render_widget(prompt, main_layout[0]);

    let slot_cursor = match app.focus {
        FocusArea::Slots if !app.session.attempt().is_empty() => Some(app.slot_selected),
        _ => None,
    };
    let slots = SlotRow::new(app.session.attempt(), slot_cursor, app.theme);
    frame.render_widget(slots, main_layout[1]);

    let palette_cursor = match app.focus {
        FocusArea::Palette => Some(app.palette_selected),
        _ => None,
    };
    let palette = TilePalette::new(app.display_tiles(), palette_cursor, app.theme);
    frame.render_widget(palette, main_layout[2]);

    let feedback_line = match app.session.feedback() {
        Feedback::Correct => Line::from(Span::styled(
            " ✔ Correct!",
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        )),
        Feedback::Incorrect => Line::from(Span::styled(
            " ✖ Try again.",
            Style::default()
                .fg(colors.error())
                .add_modifier(Modifier::BOLD),
        )),
        Feedback::None => Line::from(""),
    };
    let sentence_line = if app.session.attempt().is_empty() {
        Line::from("")
    } else {
        Line::from(Span::styled(
            format!(" {}", app.session.attempt_text()),
            Style::default().fg(colors.fg()),
        ))
    };
    let status = Paragraph::new(vec![feedback_line, sentence_line]);
    frame.render_widget(status, main_layout[3]);

    if app.session.answer_revealed() {
        let answer = AnswerPanel::new(exercise, app.config.show_explanation, app.theme);
        frame.render_widget(answer, main_layout[4]);
    }
}

fn render_empty_filter(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let block = Block::bordered()
        .border_style(Style::default().fg(colors.border()))
        .style(Style::default().bg(colors.bg()));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No exercises match this concept.",
            Style::default().fg(colors.fg()),
        )),
        Line::from(Span::styled(
            "[f] choose another concept",
            Style::default().fg(colors.text_dim()),
        )),
    ];
    let panel = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let place_hint = match app.focus {
        FocusArea::Palette => "[Enter] Place tile",
        FocusArea::Slots => "[Enter] Remove slot",
    };
    let hints = [
        place_hint,
        "[Tab] Slots/Tiles",
        "[1-9] Quick pick",
        "[c] Check",
        "[x] Clear",
        "[n/p] Next/Prev",
        "[f] Concept",
        "[a] Answer",
        "[q] Quit",
    ];

    let lines: Vec<Line> = pack_hint_lines(&hints, area.width as usize)
        .into_iter()
        .take(area.height as usize)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_dim()))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
