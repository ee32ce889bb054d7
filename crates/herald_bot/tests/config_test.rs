use herald_bot::{BotVariant, HeraldConfig};
use herald_core::ListingSort;
use herald_social::PublishConfirmation;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn environment(vars: &[(&str, &str)]) -> config::Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    HeraldConfig::environment().source(Some(map))
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_bundled_defaults() {
    let config = HeraldConfig::load_with_environment(None, environment(&[])).unwrap();

    assert_eq!(config.bot.variant, BotVariant::Lexical);
    assert_eq!(config.reddit.base_url(), "https://www.reddit.com");
    assert_eq!(config.reddit.login_url(), "https://ssl.reddit.com");
    assert_eq!(config.reddit.section(), "new");
    assert_eq!(*config.reddit.sort(), ListingSort::Rising);
    assert_eq!(
        *config.reddit.confirmation(),
        PublishConfirmation::Structured
    );
    assert_eq!(config.wordnik.base_url(), "https://api.wordnik.com/v4");
    assert_eq!(config.schedule.poll_interval(), Duration::from_secs(30));
    assert_eq!(config.schedule.comment_cooldown(), Duration::from_secs(600));
    assert_eq!(config.schedule.request_interval(), Duration::from_secs(2));
    assert_eq!(config.schedule.first_page_limit, 1);
    assert_eq!(config.schedule.page_limit, 100);
    assert_eq!(config.history.top_posts, 10);
    assert_eq!(config.history.sort, ListingSort::Top);
    assert!(!config.history.publish);
    assert!(!config.alert.enabled);
}

#[test]
fn test_defaults_fail_validation_without_credentials() {
    let config = HeraldConfig::load_with_environment(None, environment(&[])).unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.kind().name(), "config");
    assert!(err.to_string().contains("reddit.username"));
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let file = config_file(
        r#"
[bot]
variant = "history"

[reddit]
username = "wordbot"
password = "hunter2"
section = "r/rust/new"
sort = "new"

[schedule]
poll_interval_seconds = 60

[history]
top_posts = 5
publish = true
"#,
    );

    let config = HeraldConfig::load_with_environment(Some(file.path()), environment(&[])).unwrap();

    assert_eq!(config.bot.variant, BotVariant::History);
    assert_eq!(config.reddit.username(), "wordbot");
    assert_eq!(config.reddit.section(), "r/rust/new");
    assert_eq!(*config.reddit.sort(), ListingSort::New);
    assert_eq!(config.schedule.poll_interval_seconds, 60);
    // Untouched keys keep their bundled values.
    assert_eq!(config.schedule.page_limit, 100);
    assert_eq!(config.history.top_posts, 5);
    assert!(config.history.publish);
    config.validate().unwrap();
}

#[test]
fn test_environment_overrides_file() {
    let file = config_file(
        r#"
[reddit]
username = "wordbot"
password = "from-file"

[wordnik]
api_key = "file-key"
"#,
    );

    let config = HeraldConfig::load_with_environment(
        Some(file.path()),
        environment(&[
            ("HERALD__REDDIT__PASSWORD", "from-env"),
            ("HERALD__SCHEDULE__PAGE_LIMIT", "25"),
        ]),
    )
    .unwrap();

    assert_eq!(config.reddit.password(), "from-env");
    assert_eq!(config.wordnik.api_key(), "file-key");
    assert_eq!(config.schedule.page_limit, 25);
    config.validate().unwrap();
}

#[test]
fn test_from_file_reads_single_file() {
    let file = config_file(
        r#"
[reddit]
username = "wordbot"
password = "hunter2"

[wordnik]
api_key = "key"
"#,
    );

    let config = HeraldConfig::from_file(file.path()).unwrap();
    assert_eq!(config.reddit.username(), "wordbot");
    // Sections missing from the file fall back to type defaults.
    assert_eq!(config.schedule.poll_interval_seconds, 30);
    config.validate().unwrap();
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = HeraldConfig::load_with_environment(
        Some(std::path::Path::new("/nonexistent/herald.toml")),
        environment(&[]),
    )
    .unwrap_err();
    assert_eq!(err.kind().name(), "config");
}

#[test]
fn test_validate_rejects_zero_values() {
    let base = r#"
[reddit]
username = "wordbot"
password = "hunter2"

[wordnik]
api_key = "key"
"#;

    for (extra, needle) in [
        ("[schedule]\npoll_interval_seconds = 0\n", "poll_interval_seconds"),
        ("[schedule]\npage_limit = 0\n", "page limits"),
        ("[schedule]\nfirst_page_limit = 0\n", "page limits"),
    ] {
        let file = config_file(&format!("{}\n{}", base, extra));
        let config =
            HeraldConfig::load_with_environment(Some(file.path()), environment(&[])).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            err.to_string().contains(needle),
            "expected {:?} in {}",
            needle,
            err
        );
    }
}

#[test]
fn test_validate_requires_wordnik_key_for_lexical_only() {
    let file = config_file(
        r#"
[reddit]
username = "wordbot"
password = "hunter2"
"#,
    );
    let mut config =
        HeraldConfig::load_with_environment(Some(file.path()), environment(&[])).unwrap();
    assert!(config.validate().unwrap_err().to_string().contains("wordnik.api_key"));

    config.bot.variant = BotVariant::History;
    config.validate().unwrap();
}

#[test]
fn test_validate_requires_smtp_settings_when_alerting() {
    let file = config_file(
        r#"
[reddit]
username = "wordbot"
password = "hunter2"

[wordnik]
api_key = "key"

[alert]
enabled = true
"#,
    );
    let config =
        HeraldConfig::load_with_environment(Some(file.path()), environment(&[])).unwrap();
    assert!(config.validate().unwrap_err().to_string().contains("alert.smtp_host"));
}
