use thiserror::Error;

/// Every failure a costing session can report. All of them are recoverable and a
/// failed operation leaves prior state unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Input broke a record invariant (empty name, non-positive price, ...)
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// No ingredient with this id in the ledger
    #[error("Ingredient not found: {id}")]
    IngredientNotFound {
        /// Requested id
        id: u64,
    },

    /// No product with this id in the catalog
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Requested id
        id: u64,
    },

    /// The credit balance does not cover an action
    #[error("Insufficient credits: balance {balance}, required {cost}")]
    InsufficientCredits {
        /// Credits available
        balance: u32,
        /// Credits the action costs
        cost: u32,
    },

    /// A calculation would divide by zero
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// Which calculation
        context: String,
    },

    /// The free plan already holds as many products as it allows
    #[error("Product limit reached: {current}/{limit} on the free plan")]
    ProductLimitReached {
        /// Products in the catalog
        current: usize,
        /// Free plan cap
        limit: usize,
    },

    /// Field extraction from a photo failed
    #[error("Extraction error: {message}")]
    Extraction {
        /// Failure reason
        message: String,
    },

    /// Settings or seed data could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Failure reason
        message: String,
    },

    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable is set but not valid Unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
