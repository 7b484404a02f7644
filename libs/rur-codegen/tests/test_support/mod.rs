#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::OnceLock;

use rur_idl::IdlModule;

pub const MOTOR_JSON: &str = r#"{
    "source_file": "motor.idl",
    "pragmas": ["version 1.0"],
    "interfaces": [{
        "identifier": "Motor",
        "ports": [
            {
                "identifier": "Output",
                "comments": ["// Current speed"],
                "parameters": [
                    { "identifier": "speed", "direction": "out", "type": { "type": "long" } }
                ]
            },
            {
                "identifier": "Sensor",
                "parameters": [
                    {
                        "identifier": "readings",
                        "direction": "in",
                        "type": { "type": "sequence", "element": { "type": "float" } }
                    }
                ]
            }
        ]
    }]
}"#;

/// One interface with a port for every malformed case
pub const FAULTY_JSON: &str = r#"{
    "interfaces": [{
        "identifier": "Faulty",
        "ports": [
            {
                "identifier": "Both",
                "parameters": [
                    { "identifier": "x", "direction": "inout", "type": { "type": "short" } }
                ]
            },
            {
                "identifier": "Pair",
                "parameters": [
                    { "identifier": "first", "direction": 0, "type": { "type": "double" } },
                    { "identifier": "second", "direction": "out", "type": { "type": "double" } }
                ]
            },
            {
                "identifier": "Lost",
                "parameters": [
                    { "identifier": "x", "type": { "type": "boolean" } }
                ]
            }
        ]
    }]
}"#;

/// Malformed ports that only ever produce warnings, even in strict mode
pub const TOLERATED_JSON: &str = r#"{
    "interfaces": [{
        "identifier": "Tolerated",
        "ports": [
            {
                "identifier": "Both",
                "parameters": [
                    { "identifier": "x", "direction": "inout", "type": { "type": "short" } }
                ]
            },
            {
                "identifier": "Pair",
                "parameters": [
                    { "identifier": "first", "direction": "in", "type": { "type": "short" } },
                    { "identifier": "second", "direction": "in", "type": { "type": "short" } }
                ]
            }
        ]
    }]
}"#;

static MOTOR: OnceLock<IdlModule> = OnceLock::new();

pub fn motor_module() -> &'static IdlModule {
    MOTOR.get_or_init(|| IdlModule::from_json_str(MOTOR_JSON).expect("motor fixture parses"))
}

pub fn faulty_module() -> IdlModule {
    IdlModule::from_json_str(FAULTY_JSON).expect("faulty fixture parses")
}

/// Fresh scratch directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rur-gen-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub fn tolerated_module() -> IdlModule {
    IdlModule::from_json_str(TOLERATED_JSON).expect("tolerated fixture parses")
}
