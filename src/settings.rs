use thiserror::Error;

/// Symbols a derived password is drawn from unless overridden.
pub const DEFAULT_CHARACTER_SET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()";

pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Floor on generator-field length before accumulation counts; must stay
/// above half the password length to gather enough user-generated entropy.
pub const DEFAULT_MIN_INPUT_LENGTH: usize = 5;

/// Attribute that marks a field as a generator and names its target field.
pub const DEFAULT_MARKER: &str = "taplock-target-id";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("character set must contain at least one symbol")]
    EmptyCharacterSet,
    #[error("password length must be at least 1")]
    ZeroPasswordLength,
}

/// Derivation settings. Immutable once constructed; the `min_input_length`
/// invariant is applied here rather than at scan time.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    character_set: Vec<char>,
    password_length: usize,
    min_input_length: usize,
    marker: String,
}

impl Settings {
    pub fn new(
        character_set: &str,
        password_length: usize,
        min_input_length: usize,
        marker: &str,
    ) -> Result<Self, SettingsError> {
        if character_set.is_empty() {
            return Err(SettingsError::EmptyCharacterSet);
        }
        if password_length == 0 {
            return Err(SettingsError::ZeroPasswordLength);
        }

        // Minimum input length must be > half the password length
        let min_input_length = min_input_length.max(password_length / 2 + 1);

        Ok(Self {
            character_set: character_set.chars().collect(),
            password_length,
            min_input_length,
            marker: marker.to_string(),
        })
    }

    pub fn character_set(&self) -> &[char] {
        &self.character_set
    }

    pub fn password_length(&self) -> usize {
        self.password_length
    }

    pub fn min_input_length(&self) -> usize {
        self.min_input_length
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            character_set: DEFAULT_CHARACTER_SET.chars().collect(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            min_input_length: DEFAULT_MIN_INPUT_LENGTH,
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}
