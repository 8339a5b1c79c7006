use hdesign_derive::hdesign_error;
use std::borrow::Cow;

#[hdesign_error]
#[derive(Debug)]
pub enum LookupError {
    #[error("Not found{}: {name}", format_context(.context))]
    NotFound { name: String, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = LookupError::NotFound { name: "users".to_owned(), context: None };
    assert_eq!(err.to_string(), "Not found: users");
}
