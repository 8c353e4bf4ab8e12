// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the document store and wire it into the services.
// - Expose the services over REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
