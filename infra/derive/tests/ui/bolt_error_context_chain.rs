use bolt_derive::bolt_error;
use std::borrow::Cow;

#[bolt_error]
pub enum CatalogError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Empty catalog{}: {message}", format_context(.context))]
    Empty { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), CatalogError> {
    Err(std::io::Error::other("missing")).context("Reading catalog")
}

fn check() -> Result<(), CatalogError> {
    Err(CatalogError::Empty { message: "no features".into(), context: None })
}

fn main() {
    let err = read().expect_err("io failure");
    assert_eq!(err.to_string(), "IO error (Reading catalog): missing");

    let err = check().context("Loading page").expect_err("empty");
    assert_eq!(err.to_string(), "Empty catalog (Loading page): no features");
}
