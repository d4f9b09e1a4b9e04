use displaymode::{
    ConfigureArgsError, ConfigureRequest, ParsedCommand, REFRESH_RATE_TOLERANCE, RefreshRate,
    Resolution,
};

fn parse(args: &[&str]) -> ParsedCommand {
    ParsedCommand::parse(args)
}

fn configure_error(args: &[&str]) -> ConfigureArgsError {
    match parse(args) {
        ParsedCommand::InvalidConfigureArguments(err) => err,
        other => panic!("Expected invalid configure arguments for {:?}, got {:?}", args, other),
    }
}

#[test]
fn test_missing_command() {
    assert_eq!(parse(&[]), ParsedCommand::Missing);
}

#[test]
fn test_single_letter_commands() {
    assert_eq!(parse(&["d"]), ParsedCommand::ListModes);
    assert_eq!(parse(&["h"]), ParsedCommand::Help);
    assert_eq!(parse(&["v"]), ParsedCommand::Version);
    // trailing arguments are ignored for commands without parameters
    assert_eq!(parse(&["d", "extra"]), ParsedCommand::ListModes);
}

#[test]
fn test_invalid_commands() {
    assert_eq!(parse(&["x"]), ParsedCommand::Invalid("x".to_string()));
    assert_eq!(parse(&["D"]), ParsedCommand::Invalid("D".to_string()));
    assert_eq!(parse(&["dd"]), ParsedCommand::Invalid("dd".to_string()));
    assert_eq!(parse(&["help"]), ParsedCommand::Invalid("help".to_string()));
    assert_eq!(parse(&[""]), ParsedCommand::Invalid(String::new()));
    assert_eq!(parse(&["é"]), ParsedCommand::Invalid("é".to_string()));
}

#[test]
fn test_configure_width_and_height() {
    assert_eq!(
        parse(&["t", "1440", "900"]),
        ParsedCommand::Configure(ConfigureRequest {
            resolution: Resolution::new(1440, 900),
            refresh_rate: None,
            display: 0,
        })
    );
}

#[test]
fn test_configure_refresh_rate_and_display() {
    assert_eq!(
        parse(&["t", "1920", "1080", "@59.94"]),
        ParsedCommand::Configure(ConfigureRequest {
            resolution: Resolution::new(1920, 1080),
            refresh_rate: Some(RefreshRate::new(59.94)),
            display: 0,
        })
    );

    assert_eq!(
        parse(&["t", "1920", "1080", "@60", "2"]),
        ParsedCommand::Configure(ConfigureRequest {
            resolution: Resolution::new(1920, 1080),
            refresh_rate: Some(RefreshRate::new(60.0)),
            display: 2,
        })
    );
}

#[test]
fn test_configure_display_without_refresh_rate() {
    assert_eq!(
        parse(&["t", "800", "600", "1"]),
        ParsedCommand::Configure(ConfigureRequest {
            resolution: Resolution::new(800, 600),
            refresh_rate: None,
            display: 1,
        })
    );
}

#[test]
fn test_configure_missing_arguments() {
    assert_eq!(configure_error(&["t"]), ConfigureArgsError::Missing("width"));
    assert_eq!(
        configure_error(&["t", "1440"]),
        ConfigureArgsError::Missing("height")
    );
}

#[test]
fn test_configure_non_numeric_arguments() {
    let cases: [&[&str]; 9] = [
        &["t", "wide", "900"],
        &["t", "1440", "tall"],
        &["t", "1440x", "900"],
        &["t", "-1440", "900"],
        &["t", "1440", "900", "@fast"],
        &["t", "1440", "900", "@"],
        &["t", "1440", "900", "@60", "main"],
        &["t", "1440", "900", "one"],
        &["t", "1440", "900", "@60", "-1"],
    ];

    for args in cases {
        let err = configure_error(args);
        assert!(
            matches!(
                err,
                ConfigureArgsError::NotANumber { .. } | ConfigureArgsError::RefreshRate { .. }
            ),
            "Unexpected error {:?} for {:?}",
            err,
            args
        );
    }
}

#[test]
fn test_configure_error_names_the_field() {
    let message = configure_error(&["t", "1440", "tall"]).to_string();
    assert!(message.contains("height"), "{}", message);
    assert!(message.contains("tall"), "{}", message);

    let message = configure_error(&["t", "1440", "900", "@60", "main"]).to_string();
    assert!(message.contains("display"), "{}", message);
}

#[test]
fn test_configure_rejects_zero_dimensions() {
    assert_eq!(
        configure_error(&["t", "0", "900"]),
        ConfigureArgsError::Zero("width")
    );
    assert_eq!(
        configure_error(&["t", "1440", "0"]),
        ConfigureArgsError::Zero("height")
    );
}

#[test]
fn test_configure_rejects_unusable_refresh_rates() {
    for rate in ["@-60", "@inf", "@NaN"] {
        let err = configure_error(&["t", "1440", "900", rate]);
        assert!(
            matches!(err, ConfigureArgsError::RefreshRate { .. }),
            "Unexpected error {:?} for {}",
            err,
            rate
        );
    }
}

#[test]
fn test_refresh_rate_tolerance() {
    let actual = RefreshRate::new(60.0);
    assert!(actual.satisfies(None));
    assert!(actual.satisfies(Some(RefreshRate::new(60.0))));
    assert!(actual.satisfies(Some(RefreshRate::new(59.996))));
    assert!(actual.satisfies(Some(RefreshRate::new(60.004))));
    assert!(!actual.satisfies(Some(RefreshRate::new(59.99))));
    assert!(!actual.satisfies(Some(RefreshRate::new(59.94))));

    // a difference of exactly the tolerance does not match
    let unknown = RefreshRate::new(0.0);
    assert!(!unknown.satisfies(Some(RefreshRate::new(REFRESH_RATE_TOLERANCE))));
    assert!(!RefreshRate::new(REFRESH_RATE_TOLERANCE).satisfies(Some(unknown)));
}
