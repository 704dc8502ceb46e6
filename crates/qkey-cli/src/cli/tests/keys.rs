use super::parse;
use crate::cli::{strategy_for, Cli, CliCommand};
use clap::Parser;
use qkey_core::config::QkeyConfig;
use qkey_core::MergeStrategy;

#[test]
fn cli_parse_rearrange() {
    match parse(&[
        "qkey",
        "rearrange",
        "/posts?g=T",
        "-d",
        "m=T",
        "--param",
        "v=T",
        "-p",
        "b=T",
    ]) {
        CliCommand::Rearrange {
            url,
            request,
            params_overwrite,
        } => {
            assert_eq!(url, "/posts?g=T");
            assert_eq!(request.defaults, vec!["m=T"]);
            assert_eq!(request.params, vec!["v=T", "b=T"]);
            assert!(!params_overwrite);
        }
        _ => panic!("expected Rearrange"),
    }
}

#[test]
fn cli_parse_key_with_uid() {
    match parse(&["qkey", "key", "/posts", "--uid", "feed", "--params-overwrite"]) {
        CliCommand::Key {
            url,
            unique_identifier,
            params_overwrite,
            ..
        } => {
            assert_eq!(url, "/posts");
            assert_eq!(unique_identifier.as_deref(), Some("feed"));
            assert!(params_overwrite);
        }
        _ => panic!("expected Key"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["qkey", "config", "--config", "/tmp/qkey.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/qkey.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Config));
}

#[test]
fn flag_overrides_config_strategy() {
    let cfg = QkeyConfig::default();
    assert_eq!(strategy_for(&cfg, false), MergeStrategy::UrlWins);
    assert_eq!(strategy_for(&cfg, true), MergeStrategy::ParamsWin);

    let cfg = QkeyConfig {
        params_object_overwrites: true,
    };
    assert_eq!(strategy_for(&cfg, false), MergeStrategy::ParamsWin);
}
