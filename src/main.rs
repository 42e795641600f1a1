// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, then hand an empty roster to the
//   menu loop.
// - Returns `anyhow::Result` so prompt failures end the process with an error.

use student_roster::config::Config;
use student_roster::roster::Roster;
use student_roster::ui::{main_menu, print_banner, Console, TerminalPrompter};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    student_roster::logging::init(&config)?;

    let mut console = Console::stdout(config.color);
    print_banner(&mut console)?;

    // Blocks until the user picks "Exit". The roster is dropped afterwards.
    let roster = main_menu(Roster::new(), &mut TerminalPrompter, &mut console)?;
    log::info!("session ended with {} student(s)", roster.len());
    Ok(())
}
