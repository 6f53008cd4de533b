// main.rs - CLI entry point

use std::io::Write;

use drop2vim::Args;

fn main() {
    drop2vim::logging::init_logging();

    if let Err(e) = run_main() {
        // Nothing more to do if stderr is gone
        let _ = writeln!(std::io::stderr(), "{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_main() -> drop2vim::Result<()> {
    let args = Args::from_env()?;
    let stdout = std::io::stdout();
    drop2vim::run(args, &mut stdout.lock())
}
