use cool_asserts::assert_matches;
use std::path::PathBuf;

use super::*;

fn declared() -> FunctionConfig {
    FunctionConfig {
        filename: PathBuf::from("build/handler.zip"),
        function_name: "ingest-events".to_string(),
        handler: "index.handler".to_string(),
        role: "arn:aws:iam::123456789012:role/ingest-events".to_string(),
        description: None,
        memory_size: None,
        runtime: None,
        timeout: None,
    }
}

#[test]
fn it_applies_platform_defaults() {
    let config = declared();

    assert_eq!(config.memory_size(), DEFAULT_MEMORY_SIZE_MB);
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT_SECONDS);
    assert_eq!(config.runtime(), DEFAULT_RUNTIME);
}

#[test]
fn it_prefers_declared_values_over_defaults() {
    let config = FunctionConfig {
        memory_size: Some(512),
        runtime: Some("python3.12".to_string()),
        timeout: Some(30),
        ..declared()
    };

    assert_eq!(config.memory_size(), 512);
    assert_eq!(config.timeout(), 30);
    assert_eq!(config.runtime(), "python3.12");
}

#[test]
fn it_rejects_missing_required_fields() {
    let config = FunctionConfig {
        function_name: String::new(),
        ..declared()
    };
    assert_matches!(config.validate(), Err(ConfigErr::MissingField("function_name")));

    let config = FunctionConfig {
        filename: PathBuf::new(),
        ..declared()
    };
    assert_matches!(config.validate(), Err(ConfigErr::MissingField("filename")));

    let config = FunctionConfig {
        handler: String::new(),
        ..declared()
    };
    assert_matches!(config.validate(), Err(ConfigErr::MissingField("handler")));

    let config = FunctionConfig {
        role: String::new(),
        ..declared()
    };
    assert_matches!(config.validate(), Err(ConfigErr::MissingField("role")));

    assert_matches!(declared().validate(), Ok(()));
}

#[test]
fn it_deserializes_host_configuration() {
    let config: FunctionConfig = serde_json::from_str(
        r#"{
            "filename": "build/handler.zip",
            "function_name": "ingest-events",
            "handler": "index.handler",
            "role": "arn:aws:iam::123456789012:role/ingest-events",
            "memory_size": 256
        }"#,
    )
    .unwrap();

    assert_eq!(config.function_name, "ingest-events");
    assert_matches!(
        config,
        FunctionConfig {
            memory_size: Some(256),
            runtime: None,
            timeout: None,
            description: None,
            ..
        }
    );
}
