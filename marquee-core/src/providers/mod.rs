pub mod gemini;
pub mod offline;
pub mod prompts;
pub mod traits;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use offline::OfflineProvider;
pub use traits::{ContentProvider, ProviderError};
