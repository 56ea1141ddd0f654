// Composition root for the attendance context.
//
// Responsibilities:
// - Instantiate the key-value store and the repository over it.
// - Wire the repository into the use case handlers.
// - Expose the HTTP router over the shared application state.

pub mod http;
pub mod state;
