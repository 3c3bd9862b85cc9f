use crate::error::CurlParseError;

pub fn exit_code_for_error(err: &CurlParseError) -> i32 {
    match err {
        CurlParseError::Config(_) => 2,
        CurlParseError::MalformedCommand(_) | CurlParseError::Tokenization(_) => 3,
        CurlParseError::MissingUrl => 3,
        CurlParseError::UnsupportedMethod(_) => 4,
        CurlParseError::PermissionDenied(_) | CurlParseError::FileNotFound(_) => 37,
        CurlParseError::Io(_) => 23,
        CurlParseError::Json(_) => 26,
    }
}
