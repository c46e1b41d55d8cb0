mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use app::AppState;
use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::TaskList;
use persistence::{ensure_data_dir, init_local_data_dir, tasks_file, TaskStore, LOG_FILE_NAME};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A terminal Pomodoro timer with a to-do list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomodoro directory in the current directory
    Init,
    /// Add a task without opening the timer
    Add {
        /// Task text
        text: String,
    },
    /// Print the task list
    List,
    /// Print task statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // Run the normal TUI application
            run_tui()
        }
        Some(command) => {
            if let Err(e) = TermLogger::init(
                LevelFilter::Warn,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            ) {
                eprintln!("Logging disabled: {}", e);
            }
            run_command(command)
        }
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized pomodoro directory: {}", data_dir.display());
            println!();
            println!("Tasks and settings will now be stored in this directory.");
            println!("Run 'pomodoro' to start the timer.");
        }
        Commands::Add { text } => {
            let mut tasks = TaskList::open(TaskStore::new(tasks_file()?));
            match tasks.add_task(&text) {
                Some(_) => println!("Added task: {}", text),
                None => anyhow::bail!("Task text must not be empty"),
            }
        }
        Commands::List => {
            let tasks = TaskList::open(TaskStore::new(tasks_file()?));
            if tasks.is_empty() {
                println!("No tasks yet.");
            }
            for (i, task) in tasks.tasks().iter().enumerate() {
                let check = if task.completed { "x" } else { " " };
                println!("{:>3}. [{}] {}", i + 1, check, task.text);
            }
        }
        Commands::Stats => {
            let tasks = TaskList::open(TaskStore::new(tasks_file()?));
            let stats = tasks.stats();
            println!("Total tasks: {}", stats.total);
            println!("Completed tasks: {}", stats.completed);
        }
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    // A missing data directory only costs persistence, never the timer
    let data_dir = ensure_data_dir();
    init_file_logger(data_dir.as_ref().ok().map(|dir| dir.as_path()));

    let data_dir = match data_dir {
        Ok(dir) => {
            eprintln!("Using pomodoro directory: {}", dir.display());
            log::info!("Starting in {}", dir.display());
            Some(dir)
        }
        Err(e) => {
            eprintln!("Warning: {:#}. Tasks and settings will not be saved.", e);
            log::warn!("Data directory unavailable: {:#}", e);
            None
        }
    };

    let mut app = AppState::load(data_dir.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.needs_save {
        app.save_settings();
    }

    // Print any errors
    if let Err(err) = result {
        log::error!("{:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Send logs to a file, since the TUI owns the terminal. Falls back to the
/// system temp directory, and runs without logging if neither is writable.
fn init_file_logger(data_dir: Option<&Path>) {
    let log_path = data_dir
        .map(|dir| dir.join(LOG_FILE_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));

    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled ({}): {}", log_path.display(), e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(LevelFilter::Info, Config::default(), file) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the countdown by any whole seconds that have passed
        app.tick(Instant::now());

        // Autosave if needed
        if app.needs_save {
            app.save_settings();
        }
    }
}
