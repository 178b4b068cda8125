//! Full-pipeline tests driven by the committed UnicodeData.txt fixture.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use casetab_core::fetch::UNICODE_DATA_URL;
use casetab_core::high_level::{GenerateOptions, generate};
use casetab_core::mapping::lookup;
use casetab_core::ucd::parse_file;

/// Get absolute path to a test sample file.
fn sample_path(name: &str) -> PathBuf {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("tests").join("samples").join(name)
}

/// Serves exactly one request with a 200 response; returns the URL.
fn serve_once(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 4096];
        let _ = stream.read(&mut request);

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}")
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_options_match_documented_constants() {
    let options = GenerateOptions::default();
    assert_eq!(options.url, UNICODE_DATA_URL);
    assert_eq!(options.data_path, PathBuf::from("UnicodeData.txt"));
    assert_eq!(options.header_path, PathBuf::from("unicode_mappings.h"));
    assert!(!options.skip_download);
}

// ============================================================================
// Pipeline without network
// ============================================================================

#[test]
fn test_generate_from_fixture_without_download() {
    let dir = tempfile::tempdir().unwrap();
    let header_path = dir.path().join("unicode_mappings.h");

    let options = GenerateOptions {
        data_path: sample_path("UnicodeData.txt"),
        header_path: header_path.clone(),
        skip_download: true,
        ..Default::default()
    };

    let summary = generate(&options).unwrap();
    assert_eq!(summary.to_lower, 7);
    assert_eq!(summary.to_upper, 8);

    let header = std::fs::read_to_string(&header_path).unwrap();
    assert!(header.starts_with("#ifndef UNICODE_MAPPINGS_H\n"));
    assert!(header.contains("    {0x00000041, 0x00000061},\n"));
    assert!(header.contains("    {0x00010428, 0x00010400},\n"));
    assert!(header.ends_with("#endif // UNICODE_MAPPINGS_H\n"));
}

#[test]
fn test_generate_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.h");
    let second = dir.path().join("second.h");

    let mut options = GenerateOptions {
        data_path: sample_path("UnicodeData.txt"),
        header_path: first.clone(),
        skip_download: true,
        ..Default::default()
    };
    generate(&options).unwrap();
    options.header_path = second.clone();
    generate(&options).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_generated_arrays_are_sorted_by_source() {
    let dir = tempfile::tempdir().unwrap();
    let header_path = dir.path().join("unicode_mappings.h");

    let options = GenerateOptions {
        data_path: sample_path("UnicodeData.txt"),
        header_path: header_path.clone(),
        skip_download: true,
        ..Default::default()
    };
    generate(&options).unwrap();

    let header = std::fs::read_to_string(&header_path).unwrap();
    let mut in_array = false;
    let mut previous = 0u32;
    let mut seen = 0usize;
    for line in header.lines() {
        if line.starts_with("static const UnicodeMapping") {
            in_array = true;
            previous = 0;
            continue;
        }
        if line == "};" {
            in_array = false;
            continue;
        }
        if in_array {
            let hex = &line.trim()[3..11]; // skip "{0x", take 8 digits
            let source = u32::from_str_radix(hex, 16).unwrap();
            assert!(source >= previous, "array not sorted at 0x{source:08X}");
            previous = source;
            seen += 1;
        }
    }
    assert_eq!(seen, 15);
}

// ============================================================================
// Pipeline with download
// ============================================================================

#[test]
fn test_generate_with_download_stage() {
    let fixture = std::fs::read_to_string(sample_path("UnicodeData.txt")).unwrap();
    let url = serve_once(fixture);

    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("UnicodeData.txt");
    let header_path = dir.path().join("unicode_mappings.h");

    let options = GenerateOptions {
        url,
        data_path: data_path.clone(),
        header_path: header_path.clone(),
        skip_download: false,
    };

    let summary = generate(&options).unwrap();
    assert_eq!(summary.to_lower, 7);
    assert_eq!(summary.to_upper, 8);

    // The raw download is persisted verbatim next to the header
    let raw = std::fs::read_to_string(&data_path).unwrap();
    assert!(raw.contains("0041;LATIN CAPITAL LETTER A"));
    assert!(header_path.exists());
}

// ============================================================================
// Consuming the tables
// ============================================================================

#[test]
fn test_tables_support_case_conversion_lookup() {
    let mut tables = parse_file(&sample_path("UnicodeData.txt")).unwrap();
    tables.sort();

    assert_eq!(lookup(&tables.to_lower, 0x0041), Some(0x0061));
    assert_eq!(lookup(&tables.to_upper, 0x0061), Some(0x0041));
    assert_eq!(lookup(&tables.to_upper, 0x00B5), Some(0x039C));
    assert_eq!(lookup(&tables.to_lower, 0x10400), Some(0x10428));

    // Uncased codepoints have no entry in either table
    assert_eq!(lookup(&tables.to_lower, 0x0030), None);
    assert_eq!(lookup(&tables.to_upper, 0x0030), None);
}
