//! End-to-end animation tests: the driver and the built binary

use std::process::Command;
use std::time::Duration;

use term_shapes::app;
use term_shapes::engine::AnimationConfig;
use term_shapes::term::{FrameWriter, Rasterizer};

fn assert_blocks(text: &str, frames: usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), frames * 25);
    assert!(text.ends_with('\n'));

    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), 80, "line {}", i);
        let row = i % 25;
        if row == 0 || row == 24 {
            assert!(line.chars().all(|c| c == '-'), "line {}", i);
        } else {
            assert!(line.starts_with('|') && line.ends_with('|'), "line {}", i);
        }
    }
}

#[test]
fn test_forty_frames_produce_forty_blocks() {
    let config = AnimationConfig {
        frame_interval: Duration::ZERO,
        ..AnimationConfig::default()
    };
    let mut out = FrameWriter::new(Vec::new());

    let written = app::run(&config, &Rasterizer::default(), &mut out).unwrap();
    assert_eq!(written, 40);

    let bytes = out.into_inner();
    assert_eq!(bytes.len(), 40 * 25 * 81);
    assert_blocks(&String::from_utf8(bytes).unwrap(), 40);
}

#[test]
fn test_frames_show_visible_motion() {
    let config = AnimationConfig::new(2, Duration::ZERO);
    let mut out = FrameWriter::new(Vec::new());
    app::run(&config, &Rasterizer::default(), &mut out).unwrap();

    let text = String::from_utf8(out.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_ne!(lines[..25], lines[25..]);
}

#[test]
fn test_binary_exits_zero_with_full_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_term-shapes"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run term-shapes");

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_blocks(&String::from_utf8(output.stdout).unwrap(), 40);
}
