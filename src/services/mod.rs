// Linkmark services
// Services cover the store-independent concerns: markup derivation and the
// bookmark service client seam.

pub mod api_client;
pub mod renderer;
