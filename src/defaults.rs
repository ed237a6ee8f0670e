use crate::config::{Config, LSSD_EXCLUDED_KEYS, LSSD_SUFFIX, MACHINE_TYPE_KEY};
use toml::{Table, Value};
use tracing::debug;

/// Fill every `[[vm]]` entry with the keys from `[defaults.vm]` it lacks.
/// Keys already set on a VM are never touched. VMs whose effective machine
/// type is LSSD-backed skip the persistent-disk defaults.
pub fn merge_vm_defaults(config: &mut Config) {
    let defaults = config.vm_defaults();
    let Some(vms) = config.vms_mut() else {
        return;
    };

    for (index, vm) in vms.iter_mut().enumerate() {
        match vm {
            Value::Table(entry) => apply_defaults(entry, &defaults),
            other => debug!(index, kind = other.type_str(), "skipping non-table vm entry"),
        }
    }
    debug!(vms = vms.len(), defaults = defaults.len(), "merged vm defaults");
}

fn apply_defaults(vm: &mut Table, defaults: &Table) {
    let lssd = is_lssd(effective_machine_type(vm, defaults));

    for (key, value) in defaults {
        if vm.contains_key(key) {
            continue;
        }
        if lssd && LSSD_EXCLUDED_KEYS.contains(&key.as_str()) {
            debug!(key = %key, "not applying default to lssd vm");
            continue;
        }
        vm.insert(key.clone(), value.clone());
    }
}

/// The VM's own machine type, falling back to the default one. A missing or
/// non-string machine type reads as empty.
pub fn effective_machine_type<'a>(vm: &'a Table, defaults: &'a Table) -> &'a str {
    match vm.get(MACHINE_TYPE_KEY) {
        Some(value) => value.as_str().unwrap_or(""),
        None => defaults
            .get(MACHINE_TYPE_KEY)
            .and_then(Value::as_str)
            .unwrap_or(""),
    }
}

pub fn is_lssd(machine_type: &str) -> bool {
    machine_type.ends_with(LSSD_SUFFIX)
}
