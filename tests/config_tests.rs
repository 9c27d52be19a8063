use time_hedge::config::{Config, DEFAULT_DATA_FILE};
use time_hedge::core::IconStyle;
use time_hedge::utils::path::expand_tilde;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.data_file, DEFAULT_DATA_FILE);
    assert_eq!(cfg.icon_style, IconStyle::Emoji);
    assert!(cfg.data_path().ends_with(".time_hedge_data.json"));
    assert!(!cfg.data_path().to_string_lossy().contains('~'));
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let cfg = Config::from_yaml("icon_style: sf_symbol\n").expect("parse");
    assert_eq!(cfg.icon_style, IconStyle::SfSymbol);
    assert_eq!(cfg.data_file, DEFAULT_DATA_FILE);

    let cfg = Config::from_yaml("data_file: /var/tmp/hedge.json\n").expect("parse");
    assert_eq!(cfg.icon_style, IconStyle::Emoji);
    assert_eq!(
        cfg.data_path(),
        std::path::PathBuf::from("/var/tmp/hedge.json")
    );
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("  \n").expect("parse"), Config::default());
}

#[test]
fn test_bad_yaml_is_an_error() {
    assert!(Config::from_yaml("icon_style: neon\n").is_err());
    assert!(Config::from_yaml("data_file: [unclosed\n").is_err());
}

#[test]
fn test_yaml_round_trip() {
    let cfg = Config {
        data_file: "~/hedge/work.json".to_string(),
        icon_style: IconStyle::SfSymbol,
    };
    let yaml = cfg.to_yaml().expect("yaml");
    assert!(yaml.contains("icon_style: sf_symbol"));
    assert_eq!(Config::from_yaml(&yaml).expect("parse"), cfg);
}

#[test]
fn test_expand_tilde() {
    let home = dirs::home_dir().unwrap_or_else(|| ".".into());
    assert_eq!(expand_tilde("~/a/b.json"), home.join("a/b.json"));
    assert_eq!(expand_tilde("~"), home);
    assert_eq!(
        expand_tilde("/abs/path.json"),
        std::path::PathBuf::from("/abs/path.json")
    );
    assert_eq!(
        expand_tilde("rel/~/x"),
        std::path::PathBuf::from("rel/~/x")
    );
}

#[test]
fn test_icon_style_only_accepts_known_names() {
    let cfg = Config::from_yaml("icon_style: sf_symbol\n").unwrap();
    assert_eq!(cfg.icon_style, IconStyle::SfSymbol);
    assert!(Config::from_yaml("icon_style: sfimage\n").is_err());
}
