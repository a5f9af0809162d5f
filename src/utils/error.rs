use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookbookError {
    #[error("The request body must be a JSON object")]
    InvalidPayloadError,

    #[error("Invalid type {found:?}: type must be either 'recipe' or 'ingredient'")]
    InvalidTypeError { found: Option<String> },

    #[error("The entry name must be a non-empty string")]
    InvalidNameError,

    #[error("Invalid cookTime: {reason}")]
    InvalidCookTimeError { reason: String },

    #[error("Invalid requiredItems: {reason}")]
    InvalidRequiredItemError { reason: String },

    #[error("The requiredItems list contains '{name}' more than once")]
    DuplicateRequiredItemError { name: String },

    #[error("An entry named '{name}' already exists in the cookbook")]
    DuplicateNameError { name: String },

    #[error("No recipe named '{name}' exists in the cookbook")]
    RecipeNotFoundError { name: String },

    #[error("Recipe '{recipe}' requires '{missing}', which is not in the cookbook")]
    UnresolvedReferenceError { recipe: String, missing: String },

    #[error("Recipe '{recipe}' requires itself: {}", .cycle.join(" -> "))]
    CyclicRecipeError { recipe: String, cycle: Vec<String> },

    #[error("Quantities for recipe '{recipe}' are too large to total")]
    QuantityOverflowError { recipe: String },

    #[error("'{input}' does not contain a usable recipe name")]
    InvalidRecipeNameError { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Lookup,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CookbookError {
    /// Stable identifier reported to HTTP clients alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPayloadError => "InvalidPayloadError",
            Self::InvalidTypeError { .. } => "InvalidTypeError",
            Self::InvalidNameError => "InvalidNameError",
            Self::InvalidCookTimeError { .. } => "InvalidCookTimeError",
            Self::InvalidRequiredItemError { .. } => "InvalidRequiredItemError",
            Self::DuplicateRequiredItemError { .. } => "DuplicateRequiredItemError",
            Self::DuplicateNameError { .. } => "DuplicateNameError",
            Self::RecipeNotFoundError { .. } => "RecipeNotFoundError",
            Self::UnresolvedReferenceError { .. } => "UnresolvedReferenceError",
            Self::CyclicRecipeError { .. } => "CyclicRecipeError",
            Self::QuantityOverflowError { .. } => "QuantityOverflowError",
            Self::InvalidRecipeNameError { .. } => "InvalidRecipeNameError",
            Self::IoError(_) => "IoError",
            Self::SerializationError(_) => "SerializationError",
            Self::ConfigValidationError { .. } => "ConfigValidationError",
            Self::InvalidConfigValueError { .. } => "InvalidConfigValueError",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPayloadError
            | Self::InvalidTypeError { .. }
            | Self::InvalidNameError
            | Self::InvalidCookTimeError { .. }
            | Self::InvalidRequiredItemError { .. }
            | Self::DuplicateRequiredItemError { .. }
            | Self::DuplicateNameError { .. }
            | Self::InvalidRecipeNameError { .. } => ErrorCategory::Request,
            Self::RecipeNotFoundError { .. }
            | Self::UnresolvedReferenceError { .. }
            | Self::CyclicRecipeError { .. }
            | Self::QuantityOverflowError { .. } => ErrorCategory::Lookup,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Request and lookup failures belong to the caller; the registry is
    /// untouched by them.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Request | ErrorCategory::Lookup
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
            _ => format!("{}. Please fix this and try again.", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Check the configuration file and command line flags"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Check that the seed file is a JSON array of entries",
            Self::UnresolvedReferenceError { .. } => {
                "Create the missing entry before requesting the summary"
            }
            Self::CyclicRecipeError { .. } => "Remove the circular requirement from the recipe",
            _ => "Correct the request and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CookbookError>;
