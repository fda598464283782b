use std::io::Write;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose;
use tempfile::NamedTempFile;

use super::*;

const PAYLOAD: &[u8] = b"Deterministic payload for the archive encoding round trip tests\n";
const PAYLOAD_BASE64: &[u8] =
    b"RGV0ZXJtaW5pc3RpYyBwYXlsb2FkIGZvciB0aGUgYXJjaGl2ZSBlbmNvZGluZyByb3VuZCB0cmlwIHRlc3RzCg==";
const PAYLOAD_SHA256: &str = "LJTIn/3cZ7mryt6hE2GE27foVn7KLzKee8RK9uqaYeA=";

fn archive_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn it_encodes_a_fixture_deterministically() {
    let file = archive_file(PAYLOAD);

    let encoded = read_archive_base64(file.path()).unwrap();

    assert_eq!(encoded, PAYLOAD_BASE64);
    assert_eq!(encoded.len(), PAYLOAD_BASE64.len());
}

#[test]
fn it_round_trips_the_original_bytes() {
    let raw: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
    let file = archive_file(&raw);

    let encoded = read_archive_base64(file.path()).unwrap();
    let decoded = general_purpose::STANDARD.decode(encoded).unwrap();

    assert_eq!(decoded, raw);
    assert_eq!(read_archive(file.path()).unwrap(), raw);
}

#[test]
fn it_errors_on_a_missing_path_instead_of_panicking() {
    let missing = Path::new("this-file-should-not-exist");

    let err = read_archive(missing).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

    let err = read_archive_base64(missing).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn it_accepts_an_empty_archive() {
    let file = archive_file(b"");

    assert_eq!(read_archive(file.path()).unwrap(), Vec::<u8>::new());
    assert_eq!(read_archive_base64(file.path()).unwrap(), Vec::<u8>::new());
}

#[test]
fn it_digests_code_the_way_the_platform_reports_it() {
    assert_eq!(code_sha256(PAYLOAD), PAYLOAD_SHA256);

    // SHA-256 of the empty input, base64 encoded
    assert_eq!(
        code_sha256(b""),
        "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
    );
}
