use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unit '{unit}' is not part of category '{category}'")]
    UnknownUnit { category: String, unit: String },

    #[error("Invalid value: {0}. Enter a number of zero or more")]
    InvalidValue(f64),

    #[error("No API key configured for {provider}. Set {env_var} or save a key in Settings.")]
    MissingApiKey {
        provider: String,
        env_var: &'static str,
    },

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("LLM API request failed for {provider}: {message}")]
    Network { provider: String, message: String },

    #[error("LLM API error: {status} from {provider} - {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<ConverterError> for String {
    fn from(err: ConverterError) -> Self {
        err.to_string()
    }
}
