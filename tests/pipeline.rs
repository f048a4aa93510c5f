//! End-to-end pipeline tests: fonts from local fixtures, PNG out.

use ogcard::fonts::FontSource;
use ogcard::{CardConfig, Error};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Serve stylesheets and dummy .ttf payloads for any requested family.
fn spawn_font_server() -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("failed to bind server");
    let addr = server.server_addr().to_string();
    let base = addr.clone();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            if request.url().starts_with("/css2") {
                let body = format!(
                    "@font-face {{ src: url(http://{}/font.ttf) format('truetype'); }}",
                    base
                );
                let _ = request.respond(tiny_http::Response::from_string(body));
            } else {
                let _ = request.respond(tiny_http::Response::from_data(b"dummy-ttf".to_vec()));
            }
        }
    });
    addr
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ogcard-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Config with all three default families backed by local fixtures.
fn fixture_config(addr: &str, dir: &Path) -> CardConfig {
    let mono_path = dir.join("JetBrainsMono-Regular.ttf");
    std::fs::write(&mono_path, b"dummy-local-ttf").unwrap();

    let endpoint = format!("http://{}/css2", addr);
    CardConfig {
        output_path: dir.join("out").join("ogp.png"),
        fonts: vec![
            FontSource::remote_at(endpoint.clone(), "Crimson Text", 700),
            FontSource::remote_at(endpoint, "Lora", 400),
            FontSource::local("JetBrains Mono", 400, mono_path),
        ],
        fetch_timeout_ms: 5000,
        ..CardConfig::default()
    }
}

fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn full_pipeline_produces_a_card_at_canvas_size() -> anyhow::Result<()> {
    if std::env::var("CI").is_ok() {
        return Ok(());
    }

    let addr = spawn_font_server();
    let dir = scratch_dir("e2e");
    let config = fixture_config(&addr, &dir);

    let artifact = ogcard::generate(&config)?;
    assert_eq!((artifact.width, artifact.height), (1200, 630));
    assert_eq!(artifact.path, config.output_path);

    let bytes = std::fs::read(&config.output_path)?;
    assert_eq!(artifact.bytes_written, bytes.len());
    assert_eq!(png_dimensions(&bytes), (1200, 630));

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    if std::env::var("CI").is_ok() {
        return;
    }

    let addr = spawn_font_server();
    let dir = scratch_dir("idempotent");
    let config = fixture_config(&addr, &dir);

    ogcard::generate(&config).expect("first run failed");
    let first = Sha256::digest(std::fs::read(&config.output_path).unwrap());
    ogcard::generate(&config).expect("second run failed");
    let second = Sha256::digest(std::fs::read(&config.output_path).unwrap());
    assert_eq!(hex::encode(first), hex::encode(second));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_local_font_aborts_before_any_output() {
    if std::env::var("CI").is_ok() {
        return;
    }

    let addr = spawn_font_server();
    let dir = scratch_dir("nolocal");
    let mut config = fixture_config(&addr, &dir);
    config.fonts[2] =
        FontSource::local("JetBrains Mono", 400, dir.join("does-not-exist.ttf"));

    let err = ogcard::generate(&config).unwrap_err();
    match err {
        Error::ResourceNotFound(msg) => assert!(msg.contains("JetBrains Mono")),
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
    // destination untouched: no zero-byte or stale file
    assert!(!config.output_path.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unresolved_family_reference_is_missing_font() {
    if std::env::var("CI").is_ok() {
        return;
    }

    let addr = spawn_font_server();
    let dir = scratch_dir("missingfont");
    let mut config = fixture_config(&addr, &dir);
    // drop the monospaced source; the window panes still reference it
    config.fonts.truncate(2);

    let err = ogcard::generate(&config).unwrap_err();
    match err {
        Error::MissingFont(family) => assert_eq!(family, "JetBrains Mono"),
        other => panic!("expected MissingFont, got {:?}", other),
    }
    assert!(!config.output_path.exists());

    let _ = std::fs::remove_dir_all(&dir);
}
