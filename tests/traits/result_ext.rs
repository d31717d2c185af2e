use causeway::traits::ResultExt;
use causeway::{Arg, Failure};
use std::cell::Cell;
use std::io;

#[test]
fn wrap_err_on_err() {
    let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
    let err = result.wrap_err(["loading config", "path", "/etc/app.toml"]).unwrap_err();

    assert_eq!(err.to_string(), "loading config: missing");
    assert_eq!(err.lookup_value("path"), Some("/etc/app.toml"));
    assert_eq!(err.depth(), 1);
}

#[test]
fn wrap_err_on_ok_passes_value_through() {
    let result: Result<i32, Failure> = Ok(42);
    assert_eq!(result.wrap_err(["should not appear"]).unwrap(), 42);
}

#[test]
fn wrap_err_with_is_lazy_on_ok() {
    let called = Cell::new(false);
    let result: Result<(), Failure> = Ok(());

    let _ = result.wrap_err_with(|| {
        called.set(true);
        ["should not be called"]
    });
    assert!(!called.get(), "context closure must not run on Ok");
}

#[test]
fn wrap_err_with_runs_on_err() {
    let called = Cell::new(false);
    let result: Result<(), Failure> = Err(Failure::new("boom"));

    let err = result
        .wrap_err_with(|| {
            called.set(true);
            [Arg::from("retrying"), "attempt".into(), 3.into()]
        })
        .unwrap_err();

    assert!(called.get());
    assert_eq!(err.lookup_value("attempt"), Some("3"));
}

#[test]
fn wrapf_err_formats_message() {
    let result: Result<(), Failure> = Err(Failure::new("refused"));
    let err = result.wrapf_err(format_args!("connecting to {}:{}", "db", 5432)).unwrap_err();

    assert_eq!(err.to_string(), "connecting to db:5432: refused");
}

#[test]
fn chained_wraps_build_depth() {
    fn read() -> Result<Vec<u8>, io::Error> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"))
    }

    fn parse() -> Result<u32, Failure> {
        let bytes = read().wrap_err(["reading header"])?;
        Ok(bytes.len() as u32)
    }

    let err = parse().wrap_err(["parsing archive", "name", "a.tar"]).unwrap_err();

    assert_eq!(err.depth(), 2);
    assert_eq!(err.to_string(), "parsing archive: eof");
    assert_eq!(err.trace().len(), 3);
}

#[test]
fn wrap_err_records_call_site() {
    let result: Result<(), Failure> = Err(Failure::new("boom"));
    let line = line!() + 1;
    let err = result.wrap_err(["here"]).unwrap_err();

    let location = err.trace().frames()[0].location.clone().unwrap();
    assert_eq!(location.line, line);
    assert!(location.file.ends_with("result_ext.rs"));
}
