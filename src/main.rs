use chrono::{Datelike, Local};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use frolic::build_info;
use frolic::core::constants::{FRAME_POLL_MS, MAX_FRAME_DT_MS};
use frolic::games::Arcade;
use frolic::gate::{HttpNameVerifier, NameGate, VerifyDispatch};
use frolic::input::{handle_gate_input, handle_site_input, InputResult};
use frolic::log;
use frolic::site::Site;
use frolic::ui;
use frolic::utils::config::{CONFIG_FILE_NAME, USAGE};
use frolic::utils::{apply_args, logger, persistence, AppConfig, CliCommand};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

enum Screen {
    Gate(NameGate),
    Site(Site),
}

fn main() -> io::Result<()> {
    let mut config = AppConfig::load();
    match apply_args(&mut config, std::env::args().skip(1)) {
        Ok(CliCommand::Run) => {}
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}\n", message);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }

    // Logging is best-effort; the app runs without it.
    let _ = logger::init_logger();
    log!("{} starting", build_info::version_line());
    log!(
        "config: endpoint {}, skip_gate {}, seed {:?}",
        config.verify_endpoint,
        config.skip_gate,
        config.seed
    );

    // First run: write the defaults out so they can be edited.
    if persistence::save_path(CONFIG_FILE_NAME).is_ok_and(|path| !path.exists()) {
        if let Err(e) = AppConfig::default().save() {
            log!("could not write default config: {}", e);
        }
    }

    let mut screen = if config.skip_gate {
        Screen::Site(build_site(&config, None))
    } else {
        let verifier = Arc::new(HttpNameVerifier::new(config.verify_endpoint.clone()));
        Screen::Gate(NameGate::new(verifier, VerifyDispatch::Background))
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut screen, &config);

    match &mut screen {
        Screen::Gate(gate) => gate.shutdown(),
        Screen::Site(site) => site.shutdown(),
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log!("exiting");
    result
}

fn build_site(config: &AppConfig, visitor: Option<frolic::gate::Visitor>) -> Site {
    let arcade = Arcade::new(config.matchup.clone(), config.snake.clone(), config.seed);
    Site::new(arcade, visitor)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut Screen,
    config: &AppConfig,
) -> io::Result<()> {
    let year = Local::now().year();
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let dt_ms = (now.duration_since(last_frame).as_millis() as u64).min(MAX_FRAME_DT_MS);
        last_frame = now;

        let admitted = match screen {
            Screen::Gate(gate) => {
                gate.tick(dt_ms);
                if gate.is_admitted() {
                    gate.shutdown();
                    Some(gate.visitor.take())
                } else {
                    None
                }
            }
            Screen::Site(site) => {
                site.tick(dt_ms);
                None
            }
        };
        // Gate hand-off once the visitor is admitted.
        if let Some(visitor) = admitted {
            *screen = Screen::Site(build_site(config, visitor));
        }

        terminal.draw(|frame| match &*screen {
            Screen::Gate(gate) => ui::draw_gate(frame, gate),
            Screen::Site(site) => ui::draw_site(frame, site, year),
        })?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                let outcome = match screen {
                    Screen::Gate(gate) => handle_gate_input(key, gate),
                    Screen::Site(site) => handle_site_input(key, site),
                };
                if outcome == InputResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}
