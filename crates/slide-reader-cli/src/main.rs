use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use slide_reader_config::{Config, HeadingSettings};
use slide_reader_engine::{
    BulletPoint, HeadingHeuristics, SegmenterOptions, Slide, SlideKind, read_document,
    slide_duration,
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};

/// How often the screen refreshes while auto-advance is counting down.
const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Read,
    List,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Present { path: PathBuf, mode: Mode },
    /// Write a default settings file if none exists yet.
    InitConfig,
}

fn parse_args(args: &[String]) -> Option<Command> {
    if args.len() == 2 && args[1] == "--init-config" {
        return Some(Command::InitConfig);
    }
    let mut path = None;
    let mut mode = Mode::Read;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--list" => mode = Mode::List,
            "--json" => mode = Mode::Json,
            flag if flag.starts_with("--") => return None,
            file if path.is_none() => path = Some(PathBuf::from(file)),
            _ => return None,
        }
    }
    path.map(|path| Command::Present { path, mode })
}

/// Saves the default config to `config_path`, leaving an existing file alone.
/// Returns whether a file was written.
fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    Config::default().save_to_path(config_path)?;
    Ok(true)
}

fn segmenter_options(headings: &HeadingSettings) -> SegmenterOptions {
    SegmenterOptions {
        headings: HeadingHeuristics {
            max_len: headings.max_length,
            min_title_case_ratio: headings.min_title_case_ratio,
        },
    }
}

/// Visual weight of a body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weight {
    Normal,
    Dim,
    Strong,
}

/// The lines shown in the body of a slide.
fn body_lines(slide: &Slide) -> Vec<(String, Weight)> {
    match &slide.kind {
        SlideKind::Prose | SlideKind::SubtitleIntro => {
            vec![(slide.sentence.clone(), Weight::Strong)]
        }
        SlideKind::Bullet(bullet) => bullet_lines(&slide.sentence, bullet),
        SlideKind::Code { language } => {
            let mut lines = vec![(format!("[{language}]"), Weight::Dim)];
            lines.extend(
                slide
                    .sentence
                    .lines()
                    .map(|line| (line.to_string(), Weight::Normal)),
            );
            lines
        }
        SlideKind::Blockquote => vec![(format!("│ {}", slide.sentence), Weight::Normal)],
        SlideKind::Image { url, .. } => vec![
            (slide.sentence.clone(), Weight::Strong),
            (format!("({url})"), Weight::Dim),
        ],
        SlideKind::Table { headers, rows } => {
            let mut lines = vec![(headers.join(" │ "), Weight::Strong)];
            lines.extend(rows.iter().map(|row| (row.join(" │ "), Weight::Normal)));
            lines
        }
        SlideKind::Checkbox { checked } => {
            let mark = if *checked { "x" } else { " " };
            vec![(format!("[{mark}] {}", slide.sentence), Weight::Strong)]
        }
        SlideKind::FootnoteDef { footnote_id, text } => {
            vec![(format!("[^{footnote_id}]: {text}"), Weight::Normal)]
        }
        SlideKind::MathBlock { content } => vec![(content.clone(), Weight::Strong)],
    }
}

fn bullet_lines(sentence: &str, bullet: &BulletPoint) -> Vec<(String, Weight)> {
    let mut lines = vec![];
    if let Some(parent) = &bullet.parent {
        lines.push((
            format!("{} {}", marker(parent.numbered, parent.number), parent.text),
            Weight::Dim,
        ));
    }

    let indent = "  ".repeat(bullet.indent_level);
    let shown = bullet.history.len() as u32;
    for (i, earlier) in bullet.history.iter().enumerate() {
        // Siblings are numbered consecutively up to this item.
        let number = bullet
            .number
            .and_then(|n| n.checked_sub(shown - i as u32));
        lines.push((
            format!("{indent}{} {earlier}", marker(bullet.numbered, number)),
            Weight::Dim,
        ));
    }
    lines.push((
        format!("{indent}{} {sentence}", marker(bullet.numbered, bullet.number)),
        Weight::Strong,
    ));
    lines
}

fn marker(numbered: bool, number: Option<u32>) -> String {
    match (numbered, number) {
        (true, Some(n)) => format!("{n}."),
        _ => "•".to_string(),
    }
}

struct App {
    title: String,
    slides: Vec<Slide>,
    index: usize,
    words_per_minute: u32,
    auto_advance: bool,
    shown_at: Instant,
}

impl App {
    fn new(title: String, slides: Vec<Slide>, config: &Config) -> Self {
        Self {
            title,
            slides,
            index: 0,
            words_per_minute: config.reader.words_per_minute,
            auto_advance: config.reader.auto_advance,
            shown_at: Instant::now(),
        }
    }

    fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    fn next_slide(&mut self) {
        if !self.is_last() {
            self.index += 1;
            self.shown_at = Instant::now();
        }
    }

    fn previous_slide(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.shown_at = Instant::now();
        }
    }

    fn toggle_auto_advance(&mut self) {
        self.auto_advance = !self.auto_advance;
        self.shown_at = Instant::now();
    }

    /// Time left on the current slide, when auto-advance is running.
    fn remaining(&self) -> Option<Duration> {
        if !self.auto_advance || self.is_last() {
            return None;
        }
        let duration = slide_duration(self.current(), self.words_per_minute);
        Some(duration.saturating_sub(self.shown_at.elapsed()))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let (path, mode) = match parse_args(&args) {
        Some(Command::Present { path, mode }) => (path, mode),
        Some(Command::InitConfig) => {
            let config_path = Config::config_path();
            if init_config(&config_path)? {
                println!("Wrote default config to {}", config_path.display());
            } else {
                println!("Config file already exists at {}", config_path.display());
            }
            return Ok(());
        }
        None => {
            eprintln!("Usage: {} <file.md> [--list | --json]", args[0]);
            eprintln!("       {} --init-config", args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    log::debug!("config: {config:?}");

    let document = match read_document(&path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: Cannot open '{}': {e}", path.display());
            process::exit(1);
        }
    };
    let slides = document.slides(&segmenter_options(&config.headings));
    log::info!("{} slide(s) from {}", slides.len(), path.display());

    match mode {
        Mode::Json => {
            println!("{}", serde_json::to_string_pretty(&slides)?);
            return Ok(());
        }
        Mode::List => {
            for slide in &slides {
                println!(
                    "{:>4} {:<14} {}",
                    slide.id,
                    slide.kind.name(),
                    slide.sentence.replace('\n', " ⏎ ")
                );
            }
            return Ok(());
        }
        Mode::Read => {}
    }

    if slides.is_empty() {
        eprintln!("Nothing to present in '{}'", path.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(document.title, slides, &config);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Some(remaining) = app.remaining() {
            if remaining.is_zero() {
                app.next_slide();
                continue;
            }
            if !event::poll(remaining.min(TICK))? {
                continue;
            }
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
                    app.next_slide()
                }
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => app.previous_slide(),
                KeyCode::Char('a') => app.toggle_auto_advance(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let slide = app.current();
    let heading = match &slide.subtitle {
        Some(subtitle) => format!("{} · {}", app.title, subtitle),
        None => app.title.clone(),
    };

    let body: Vec<Line> = body_lines(slide)
        .into_iter()
        .map(|(text, weight)| {
            let style = match weight {
                Weight::Normal => Style::default(),
                Weight::Dim => Style::default().fg(Color::DarkGray),
                Weight::Strong => Style::default().add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    // Code keeps its indentation, everything else is centred
    let (alignment, trim) = match slide.kind {
        SlideKind::Code { .. } | SlideKind::Table { .. } => (Alignment::Left, false),
        SlideKind::Bullet(_) => (Alignment::Left, true),
        _ => (Alignment::Center, true),
    };

    let content = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(heading))
        .alignment(alignment)
        .wrap(Wrap { trim });

    f.render_widget(content, chunks[0]);

    let auto = match app.remaining() {
        Some(remaining) => format!("auto {:.0}s", remaining.as_secs_f64().ceil()),
        None if app.auto_advance => "auto on".to_string(),
        None => "auto off".to_string(),
    };
    let status = Line::from(vec![
        Span::raw(format!("{}/{} | {} | ", slide.id + 1, app.slides.len(), auto)),
        Span::raw("q: Quit | ←/h: Previous | →/l/Space: Next | a: Auto-advance"),
    ]);

    f.render_widget(Paragraph::new(vec![status]), chunks[1]);
}
