use std::io::Write;

use strandwheel_calendar::Strand;
use strandwheel_strands::{NO_STRAND, StrandDirectory, StrandError};

fn strand(n: u16) -> Strand {
    Strand::from_number(n).unwrap()
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_from_file() {
    let file = write_temp(
        r##"{"12": {"Name": "Loom", "Hidden": "No", "outer_color": "#123", "inner_color": "#456"}}"##,
    );
    let dir = StrandDirectory::load(file.path()).unwrap();
    assert_eq!(dir.display_name(strand(12)), "Loom");
    assert_eq!(dir.colors(strand(12)), Some(("#123", "#456")));
}

#[test]
fn missing_file_is_read_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = StrandDirectory::load(tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StrandError::Read { .. }));
}

#[test]
fn load_or_empty_never_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = StrandDirectory::load_or_empty(tmp.path().join("absent.json"));
    assert!(dir.is_empty());
    assert_eq!(dir.display_name(strand(1)), NO_STRAND);

    let garbage = write_temp("{{{{");
    assert!(StrandDirectory::load_or_empty(garbage.path()).is_empty());
}

#[test]
fn reload_replaces_wholesale_and_keeps_old_on_failure() {
    let first = write_temp(r#"{"1": {"Name": "Old"}, "2": {"Name": "Gone"}}"#);
    let second = write_temp(r#"{"1": {"Name": "New"}}"#);

    let mut dir = StrandDirectory::load(first.path()).unwrap();
    assert_eq!(dir.len(), 2);

    dir.reload(second.path()).unwrap();
    assert_eq!(dir.len(), 1);
    assert_eq!(dir.display_name(strand(1)), "New");
    assert_eq!(dir.display_name(strand(2)), NO_STRAND);

    let tmp = tempfile::tempdir().unwrap();
    assert!(dir.reload(tmp.path().join("absent.json")).is_err());
    assert_eq!(dir.display_name(strand(1)), "New");
}
