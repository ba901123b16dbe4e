//! Integration tests for playback time labels
//!
//! These tests check the label format over a wide range of inputs:
//! - Fixed examples at the minute and hour boundaries
//! - Shape of every label in a range
//! - Recovering the second count from a label

use anyhow::Result;
use playerkit::{format_duration, format_duration_secs, parse_duration};
use playerkit_integration_tests::split_label;
use regex::Regex;
use std::time::Duration;

#[test]
fn test_boundary_labels() {
    let cases = [
        (0, "0:00"),
        (59, "0:59"),
        (60, "1:00"),
        (3599, "59:59"),
        (3600, "1:00:00"),
        (3661, "1:01:01"),
        (86_399, "23:59:59"),
        (86_400, "24:00:00"),
    ];

    for (secs, expected) in cases {
        assert_eq!(format_duration_secs(secs), expected);
        assert_eq!(format_duration(Duration::from_secs(secs as u64)), expected);
    }
}

#[test]
fn test_negative_input_shows_zero() {
    assert_eq!(format_duration_secs(-1), "0:00");
    assert_eq!(format_duration_secs(-3600), "0:00");
}

#[test]
fn test_label_shape() -> Result<()> {
    let pattern = Regex::new(r"^(\d+:)?\d{1,2}:\d{2}$")?;
    let with_hours = Regex::new(r"^\d+:\d{2}:\d{2}$")?;

    for secs in 0..=100_000i64 {
        let label = format_duration_secs(secs);
        assert!(pattern.is_match(&label), "{} -> {}", secs, label);
        if secs >= 3600 {
            assert!(with_hours.is_match(&label), "{} -> {}", secs, label);
        }
    }

    Ok(())
}

#[test]
fn test_fields_reconstruct_seconds() -> Result<()> {
    for secs in 0..=100_000u64 {
        let label = format_duration_secs(secs as i64);
        let (hours, minutes, seconds) = split_label(&label)?;

        assert!(minutes < 60 && seconds < 60, "{}", label);
        assert_eq!(hours * 3600 + minutes * 60 + seconds, secs, "{}", label);
        assert_eq!(parse_duration(&label)?, secs);
    }

    Ok(())
}
