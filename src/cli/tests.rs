use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_consistent() {
    Args::command().debug_assert();
}

#[test]
fn no_subcommand_means_chat() {
    let args = Args::try_parse_from(["papagaio"]).unwrap();
    assert!(args.command.is_none());
    assert!(!args.yes);
    assert!(!args.verbose);
}

#[test]
fn ask_joins_words_and_accepts_global_flags_anywhere() {
    let args = Args::try_parse_from([
        "papagaio",
        "ask",
        "--no-translate",
        "pubchem",
        "cid",
        "2244",
    ])
    .unwrap();
    assert!(args.no_translate);
    assert_eq!(
        args.command,
        Some(Commands::Ask {
            message: vec!["pubchem".into(), "cid".into(), "2244".into()]
        })
    );
}

#[test]
fn ask_allows_leading_minus_in_arithmetic() {
    let args = Args::try_parse_from(["papagaio", "ask", "-3+5"]).unwrap();
    assert_eq!(
        args.command,
        Some(Commands::Ask {
            message: vec!["-3+5".into()]
        })
    );
}

#[test]
fn ask_requires_a_message() {
    assert!(Args::try_parse_from(["papagaio", "ask"]).is_err());
}

#[test]
fn session_options_mirror_flags() {
    let args = Args::try_parse_from([
        "papagaio",
        "-t",
        "ES",
        "--log",
        "chat.log",
        "--yes",
        "--no-learn",
        "--env-only",
    ])
    .unwrap();
    let options = args.session_options();

    assert_eq!(options.target_language.as_deref(), Some("ES"));
    assert_eq!(options.log_file.as_deref(), Some("chat.log"));
    assert!(options.auto_accept);
    assert!(options.no_learn);
    assert!(options.env_only);
    assert!(!options.no_translate);
}

#[test]
fn set_accepts_multi_word_values_and_no_key() {
    let args = Args::try_parse_from(["papagaio", "set", "search-url", "http://localhost:9000"])
        .unwrap();
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: Some("search-url".into()),
            value: Some(vec!["http://localhost:9000".into()]),
        })
    );

    let args = Args::try_parse_from(["papagaio", "set"]).unwrap();
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: None,
            value: None
        })
    );
}

#[tokio::test]
async fn set_and_unset_write_the_chosen_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let path_arg = path.to_string_lossy().into_owned();

    let args = Args::try_parse_from([
        "papagaio",
        "--config",
        &path_arg,
        "set",
        "target-language",
        "FR",
    ])
    .unwrap();
    async_main(args).await.unwrap();
    assert_eq!(
        Config::load_from_path(&path).unwrap().target_language(),
        "fr"
    );

    let args =
        Args::try_parse_from(["papagaio", "--config", &path_arg, "unset", "target-language"])
            .unwrap();
    async_main(args).await.unwrap();
    assert_eq!(
        Config::load_from_path(&path).unwrap().target_language(),
        "en"
    );

    let args = Args::try_parse_from(["papagaio", "--config", &path_arg, "set", "colour", "x"])
        .unwrap();
    let err = async_main(args).await.unwrap_err();
    assert!(err.to_string().contains("colour"));
}

#[test]
fn long_version_includes_package_version() {
    assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
}
