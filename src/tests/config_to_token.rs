#[cfg(test)]
mod test {
    use std::io::Write;

    use chrono::{TimeZone, Utc};
    use serial_test::serial;
    use tempfile::NamedTempFile;

    use crate::config::proc_loader::file_to_config;
    use crate::parser::parser::parse_token;
    use crate::tests::common::claims_token;
    use crate::utils::config_loader;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp config file");
        file.write_all(yaml.as_bytes()).expect("write config");
        file
    }

    #[tokio::test]
    #[serial]
    async fn configured_grammar_parses_token() {
        std::env::set_var("ST_AUDIENCE_FIELD", "sr");
        let file = write_config(
            r#"
grammar:
  kind: custom
  audience_field: ${ST_AUDIENCE_FIELD}
  expires_on_field: ${ST_EXPIRES_ON_FIELD:se}
  key_value_separator: "="
  pair_separator: "&"
"#,
        );

        let cfg = file_to_config(file.path()).await.unwrap();
        let grammar = cfg.grammar.to_grammar().unwrap();
        assert_eq!(grammar.audience_field_name(), "sr");
        assert_eq!(grammar.expires_on_field_name(), "se");

        let raw = claims_token("sb://ns.example.net/q", "1700000000", &grammar);
        let token = parse_token(Some(&raw), &grammar).unwrap();
        assert_eq!(token.audience(), "sb://ns.example.net/q");
        assert_eq!(
            token.expires_at_utc(),
            Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()
        );

        std::env::remove_var("ST_AUDIENCE_FIELD");
    }

    #[tokio::test]
    async fn no_config_falls_back_to_simple_web_token() {
        let cfg = config_loader::run(None).await.unwrap();
        let grammar = cfg.grammar.to_grammar().unwrap();

        let token = parse_token(Some("Audience=a&ExpiresOn=1"), &grammar).unwrap();
        assert_eq!(token.audience(), "a");
    }

    #[tokio::test]
    async fn invalid_config_file_is_rejected() {
        let file = write_config("grammar:\n  kind: custom\n  audience_field: a\n");
        let err = config_loader::run(file.path().to_str()).await.unwrap_err();
        assert!(err.to_string().contains("Invalid config format"));
    }
}
