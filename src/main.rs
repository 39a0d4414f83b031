//! main.rs
//! Entry point for navi

use navi_tui::app::Session;
use navi_tui::config::Config;
use navi_tui::core::terminal;
use navi_tui::utils::cli::{CliAction, handle_args};
use navi_tui::utils::logging;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        log::error!("panic: {}", info);
        eprintln!("\n[navi] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    if let CliAction::Exit = handle_args() {
        return Ok(());
    }

    let config = Config::load();
    logging::init(config.general().log_level());

    let mut session = Session::new(&config)?;
    let result = terminal::run_terminal(&mut session);
    log::info!("session ended");
    result
}
