use std::path::PathBuf;

use models_function::{FunctionConfig, RemoteFunction};

use super::*;

const CODE_SHA256: &str = "LJTIn/3cZ7mryt6hE2GE27foVn7KLzKee8RK9uqaYeA=";

fn desired() -> FunctionConfig {
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

fn observed() -> RemoteFunction {
    RemoteFunction {
        function_name: "ingest-events".to_string(),
        arn: "arn:aws:lambda:us-east-1:123456789012:function:ingest-events".to_string(),
        description: None,
        handler: "index.handler".to_string(),
        memory_size: 128,
        role: "arn:aws:iam::123456789012:role/ingest-events".to_string(),
        runtime: "nodejs".to_string(),
        timeout: 3,
        last_modified: "2026-08-08T10:00:00.000+0000".to_string(),
        code_sha256: CODE_SHA256.to_string(),
    }
}

#[test]
fn it_is_converged_when_defaults_match_the_remote_values() {
    let drift = FunctionDrift::detect(&desired(), &observed(), CODE_SHA256);

    assert!(drift.is_converged());
}

#[test]
fn it_flags_configuration_drift_per_field() {
    let cases = [
        FunctionConfig {
            memory_size: Some(256),
            ..desired()
        },
        FunctionConfig {
            timeout: Some(30),
            ..desired()
        },
        FunctionConfig {
            handler: "index.other".to_string(),
            ..desired()
        },
        FunctionConfig {
            runtime: Some("python3.12".to_string()),
            ..desired()
        },
        FunctionConfig {
            role: "arn:aws:iam::123456789012:role/other".to_string(),
            ..desired()
        },
        FunctionConfig {
            description: Some("ingests platform events".to_string()),
            ..desired()
        },
    ];

    for changed in cases {
        let drift = FunctionDrift::detect(&changed, &observed(), CODE_SHA256);
        assert!(drift.configuration, "expected drift for {changed:?}");
        assert!(!drift.code);
    }
}

#[test]
fn it_treats_an_unset_description_like_an_empty_remote_one() {
    let remote = RemoteFunction {
        description: Some(String::new()),
        ..observed()
    };

    let drift = FunctionDrift::detect(&desired(), &remote, CODE_SHA256);

    assert!(drift.is_converged());
}

#[test]
fn it_flags_code_drift_on_a_changed_digest() {
    let drift = FunctionDrift::detect(
        &desired(),
        &observed(),
        "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=",
    );

    assert!(drift.code);
    assert!(!drift.configuration);
    assert!(!drift.is_converged());
}
