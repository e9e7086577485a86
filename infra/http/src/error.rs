use std::borrow::Cow;

/// The gateway could not be constructed from the configuration.
#[bolt_derive::bolt_error]
pub enum HttpGatewayError {
    #[error("Invalid API base URL '{url}'{}", format_context(.context))]
    InvalidBaseUrl { url: String, context: Option<Cow<'static, str>> },

    #[error("HTTP client setup failed: {source}{}", format_context(.context))]
    Client { source: reqwest::Error, context: Option<Cow<'static, str>> },
}
