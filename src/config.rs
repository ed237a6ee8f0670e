use anyhow::{Context, Result};
use toml::{Table, Value};

/// File name looked up next to the program and in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULTS_SECTION: &str = "defaults";
pub const VM_DEFAULTS_KEY: &str = "vm";
pub const VM_SECTION: &str = "vm";
pub const MACHINE_TYPE_KEY: &str = "machine_type";

/// Machine types ending with this suffix carry local SSDs.
pub const LSSD_SUFFIX: &str = "-lssd";

/// Defaults that are never applied to LSSD-backed VMs.
pub const LSSD_EXCLUDED_KEYS: &[&str] = &["storage_type", "disk_size_gb"];

/// A parsed `config.toml`, kept as a generic tree so sections the tool
/// knows nothing about survive untouched and in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    table: Table,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: Table = toml::from_str(content).context("invalid TOML")?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The `[defaults.vm]` table, or an empty table when it is absent.
    pub fn vm_defaults(&self) -> Table {
        self.table
            .get(DEFAULTS_SECTION)
            .and_then(Value::as_table)
            .and_then(|defaults| defaults.get(VM_DEFAULTS_KEY))
            .and_then(Value::as_table)
            .cloned()
            .unwrap_or_default()
    }

    /// The `[[vm]]` entries, or nothing when the section is absent.
    pub fn vms(&self) -> &[Value] {
        self.table
            .get(VM_SECTION)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn vms_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.table.get_mut(VM_SECTION).and_then(Value::as_array_mut)
    }
}
