mod ui;

use chrono::{DateTime, Local};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, stdin, Write},
    time::{Duration, SystemTime},
};

use taplock::{
    app_dirs::AppDirs,
    bind::bind,
    config::{Config, ConfigStore, FileConfigStore},
    control::Control,
    form::{Form, TextField},
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    settings::Settings,
};

const TICK_RATE_MS: u64 = 100;

pub const GENERATOR_FIELD: &str = "generator";
pub const PASSWORD_FIELD: &str = "password";

/// derive passwords from your typing rhythm
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Derives a reproducible password from the millisecond intervals between your keystrokes. Type anything into the generator field; once enough timing samples exist the password appears in the target field and refreshes as you keep typing."
)]
pub struct Cli {
    /// number of characters in the derived password
    #[clap(short = 'l', long)]
    password_length: Option<usize>,

    /// minimum generator input length before a password is produced (raised
    /// to half the password length plus one when smaller)
    #[clap(short = 'm', long)]
    min_input_length: Option<usize>,

    /// explicit character set to draw password symbols from
    #[clap(short = 'c', long)]
    character_set: Option<String>,

    /// named character set preset
    #[clap(short = 'p', long, value_enum, conflicts_with = "character_set")]
    preset: Option<CharsetPreset>,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum, strum_macros::Display)]
pub enum CharsetPreset {
    Full,
    Alnum,
    Letters,
    Digits,
    Hex,
}

impl CharsetPreset {
    fn as_charset(&self) -> &'static str {
        match self {
            CharsetPreset::Full => taplock::settings::DEFAULT_CHARACTER_SET,
            CharsetPreset::Alnum => {
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
            }
            CharsetPreset::Letters => "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharsetPreset::Digits => "0123456789",
            CharsetPreset::Hex => "0123456789abcdef",
        }
    }
}

impl Cli {
    /// Overlay command-line arguments on the persisted configuration
    fn merge_into(&self, mut cfg: Config) -> Config {
        if let Some(pl) = self.password_length {
            cfg.password_length = pl;
        }
        if let Some(mil) = self.min_input_length {
            cfg.min_input_length = mil;
        }
        if let Some(cs) = &self.character_set {
            cfg.character_set = cs.clone();
        } else if let Some(preset) = self.preset {
            cfg.character_set = preset.as_charset().to_string();
        }
        cfg
    }
}

#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    pub form: Form,
    pub controls: Vec<Control>,
    pub last_derived: Option<DateTime<Local>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let mut form = Form::new();
        form.add_field(
            TextField::new(GENERATOR_FIELD).with_attr(settings.marker(), PASSWORD_FIELD),
        );
        form.add_field(TextField::new(PASSWORD_FIELD));
        let controls = bind(&form, &settings);

        Self {
            settings,
            form,
            controls,
            last_derived: None,
        }
    }

    /// Route one key event: presses edit the generator field, then every
    /// controller observes the activity (releases count as activity too).
    pub fn handle_key(&mut self, key: KeyEvent, now: SystemTime) {
        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            match key.code {
                KeyCode::Backspace => self.form.pop_char(GENERATOR_FIELD),
                KeyCode::Char(c) => self.form.push_char(GENERATOR_FIELD, c),
                _ => {}
            }
        }

        let mut derived_samples = None;
        for control in &mut self.controls {
            if control
                .on_key_activity(&mut self.form, &self.settings, now)
                .is_some()
            {
                derived_samples = Some(control.timings().len());
            }
        }

        if let Some(samples) = derived_samples {
            self.last_derived = Some(Local::now());
            let _ = self.log_derivation(samples);
        }
    }

    pub fn generator_value(&self) -> &str {
        self.form.value(GENERATOR_FIELD)
    }

    pub fn password_value(&self) -> &str {
        self.form.value(PASSWORD_FIELD)
    }

    pub fn sample_count(&self) -> usize {
        self.controls
            .first()
            .map(|c| c.timings().len())
            .unwrap_or(0)
    }

    /// Append one derivation record to the state-dir log. The password
    /// itself is never written out.
    fn log_derivation(&self, samples: usize) -> io::Result<()> {
        if let Some(log_path) = AppDirs::log_path() {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // If the log file doesn't exist, we need to emit a header
            let needs_header = !log_path.exists();

            let mut log_file = OpenOptions::new()
                .write(true)
                .append(true)
                .create(true)
                .open(log_path)?;

            if needs_header {
                writeln!(log_file, "date,samples,password_length")?;
            }

            writeln!(
                log_file,
                "{},{},{}",
                Local::now().format("%c"),
                samples,
                self.settings.password_length(),
            )?;
        }

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let cfg = cli.merge_into(FileConfigStore::new().load());
    let settings = cfg.to_settings()?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                // Nothing is time-driven between keystrokes; the timing
                // sequence only advances on key activity.
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                if key.code == KeyCode::Esc {
                    break;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break;
                }

                app.handle_key(key, SystemTime::now());
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
