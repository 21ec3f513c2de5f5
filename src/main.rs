// Entrypoint for the enrollment CLI.
// - Keeps `main` small: set up logging, onboard the student,
//   then hand control to the menu loop.
// - Uses the `dialoguer` console on a terminal and plain line reads when
//   stdin is piped.

use enrollment_cli::console::{Console, LineConsole, TermConsole};
use enrollment_cli::logging::init_logging;
use enrollment_cli::store::{CourseFile, DEFAULT_COURSE_FILE};
use enrollment_cli::ui::{get_student, run_app};
use std::io::{self, IsTerminal};

fn run<C: Console>(mut console: C, store: CourseFile) -> anyhow::Result<()> {
    let mut student = get_student(&mut console)?;
    run_app(&mut student, &mut console, &store)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    tracing::info!(course_file = DEFAULT_COURSE_FILE, "starting session");
    let store = CourseFile::new(DEFAULT_COURSE_FILE);

    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        run(TermConsole::new(), store)
    } else {
        run(LineConsole::stdio(), store)
    }
}
