//! Library integration tests.

use browsegate::GateError;

#[test]
fn error_types_are_public() {
    let err = GateError::ReportNotFound {
        path: "modernizr.json".into(),
    };
    assert!(err.to_string().contains("modernizr.json"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> browsegate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use browsegate::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["browsegate", "features", "--json"]);
    if let Some(Commands::Features(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Features command");
    }
}
