use bolt_derive::bolt_error;
use std::borrow::Cow;

#[bolt_error]
pub enum FetchError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let from_str: FetchError = "boom".into();
    assert_eq!(from_str.to_string(), "Internal error: boom");

    let from_string: FetchError = String::from("bang").into();
    assert!(matches!(from_string, FetchError::Internal { .. }));

    let io: FetchError = std::io::Error::other("disk").into();
    assert_eq!(io.to_string(), "IO error: disk");
}
