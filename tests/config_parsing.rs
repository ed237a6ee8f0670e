use toml::Value;
use vmconf::config::Config;

#[test]
fn parse_full_config() {
    let toml_str = r#"
[project]
project_id = "demo"
zone = "us-central1-a"

[defaults.vm]
machine_type = "n2-standard-4"
disk_size_gb = 100

[[vm]]
name = "a"

[[vm]]
name = "b"
machine_type = "c3-standard-4-lssd"
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert_eq!(config.vms().len(), 2);

    let defaults = config.vm_defaults();
    assert_eq!(defaults.get("machine_type").unwrap().as_str().unwrap(), "n2-standard-4");
    assert_eq!(defaults.get("disk_size_gb").unwrap().as_integer().unwrap(), 100);
}

#[test]
fn absent_sections_read_as_empty() {
    let config = Config::from_toml_str(
        r#"
[project]
project_id = "demo"
"#,
    )
    .unwrap();
    assert!(config.vms().is_empty());
    assert!(config.vm_defaults().is_empty());
}

#[test]
fn defaults_without_vm_subtable_read_as_empty() {
    let config = Config::from_toml_str(
        r#"
[defaults.network]
mtu = 1460
"#,
    )
    .unwrap();
    assert!(config.vm_defaults().is_empty());
}

#[test]
fn wrongly_typed_sections_read_as_empty() {
    let config = Config::from_toml_str(
        r#"
vm = "not a list"
defaults = 3
"#,
    )
    .unwrap();
    assert!(config.vms().is_empty());
    assert!(config.vm_defaults().is_empty());
    assert_eq!(config.table().get("vm"), Some(&Value::String("not a list".into())));
}

#[test]
fn unknown_sections_are_kept() {
    let config = Config::from_toml_str(
        r#"
[monitoring]
enabled = true
"#,
    )
    .unwrap();
    let monitoring = config.table().get("monitoring").unwrap().as_table().unwrap();
    assert_eq!(monitoring.get("enabled"), Some(&Value::Boolean(true)));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(Config::from_toml_str("vm = [").is_err());
    assert!(Config::from_toml_str("a = 1\na = 2").is_err());
}
