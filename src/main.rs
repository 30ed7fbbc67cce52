mod app;
mod domain;
mod energy;
mod input;
mod notifications;
mod persistence;
mod report;
mod settings;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{init_local_flow_dir, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "flowstate")]
#[command(about = "A calm, terminal-based personal kanban with energy budgeting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .flowstate directory in the current directory
    Init,
    /// Generate a board and energy report
    Report {
        /// Date to generate report for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to report-YYYY-MM-DD.md in the flowstate directory.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let flow_dir = init_local_flow_dir()?;
            println!("Initialized flowstate directory: {}", flow_dir.display());
            println!();
            println!("Flowstate will now use this local directory for storage.");
            println!("Run 'flowstate' to open the board.");
            Ok(())
        }
        Some(Commands::Report { date, output }) => {
            let report_date = if let Some(date_str) = date {
                chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
            } else {
                chrono::Local::now().date_naive()
            };

            let output_path = output.map(std::path::PathBuf::from);
            let store = Store::open()?;

            println!("Generating report for {}...", report_date);
            let report_path = report::generate_report(&store, Some(report_date), output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    let store = Store::open()?;
    eprintln!("Using flowstate directory: {}", store.dir().display());

    let mut app = AppState::load(store)?;

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

    // Save on exit
    app.needs_save = true;
    app.todos_need_save = true;
    if let Err(e) = app.save() {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
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

        // Watch for the load crossing into overload
        app.poll_overload();

        // Autosave if needed
        if app.needs_save || app.todos_need_save || app.settings_need_save {
            app.save()?;
        }
    }
}
