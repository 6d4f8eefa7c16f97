//! Tests for log level functionality.

use twinlog::{AnsiColor, Level, LevelDescriptor};

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "Debug");
    assert_eq!(Level::Info.to_string(), "Info");
    assert_eq!(Level::Warn.to_string(), "Warn");
    assert_eq!(Level::Error.to_string(), "Error");
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("trace".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_codes_round_trip() {
    assert_eq!(Level::Error.code(), 0);
    assert_eq!(Level::Warn.code(), 1);
    assert_eq!(Level::Debug.code(), 2);
    assert_eq!(Level::Info.code(), 3);
    for level in Level::all() {
        assert_eq!(Level::from_code(level.code()), Some(level));
    }
    assert_eq!(Level::from_code(4), None);
    assert_eq!(Level::from_code(-1), None);
}

#[test]
fn describe_fixed_table() {
    let table = [
        (Level::Debug, "\x1b[35m", "Debug"),
        (Level::Info, "\x1b[32m", "Info"),
        (Level::Warn, "\x1b[33m", "Warn"),
        (Level::Error, "\x1b[31m", "Error"),
    ];
    for (level, color, name) in table {
        let descriptor = LevelDescriptor::describe(level);
        assert_eq!(descriptor.color_code(), color);
        assert_eq!(descriptor.name, name);
        assert_eq!(LevelDescriptor::describe_code(level.code()), descriptor);
    }
}

#[test]
fn describe_out_of_range_is_unknown() {
    for code in [4, 99, -1, i32::MIN, i32::MAX] {
        let descriptor = LevelDescriptor::describe_code(code);
        assert_eq!(descriptor.name, "Unknown");
        assert_eq!(descriptor.color, AnsiColor::Reset);
        assert_eq!(descriptor.color_code(), "\x1b[0m");
    }
}
