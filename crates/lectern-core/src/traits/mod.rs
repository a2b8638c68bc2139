//! Capability traits for the external collaborators the engine depends on.
//!
//! All are object-safe and `Send + Sync`; handles are constructed once by
//! the host and shared read-only across resolutions. Every remote call is
//! blocking from the resolver's point of view.

mod completion;
mod embedder;
mod index;
mod vectorizer;

pub use completion::ICompletionProvider;
pub use embedder::IDenseEmbedder;
pub use index::{IVectorIndex, IndexMatch};
pub use vectorizer::ISparseVectorizer;
