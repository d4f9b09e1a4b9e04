use displaymode::{DisplayMode, InMemoryDisplays, ParsedCommand, SimulatedDisplay, execute};

/// Runs the command line against `displays` and returns exit code, stdout and stderr
pub fn run(args: &[&str], displays: &InMemoryDisplays) -> (i32, String, String) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = execute(&ParsedCommand::parse(args), displays, &mut out, &mut err)
        .expect("Writing to a Vec should not fail");
    (
        code,
        String::from_utf8(out).expect("stdout should be UTF-8"),
        String::from_utf8(err).expect("stderr should be UTF-8"),
    )
}

/// A display with two modes, currently at the second one
pub fn laptop() -> SimulatedDisplay {
    SimulatedDisplay::new(
        vec![
            DisplayMode::new(1440, 900, 59.9),
            DisplayMode::new(1920, 1080, 60.0),
        ],
        DisplayMode::new(1920, 1080, 60.0),
    )
}
