// Composition root for the events API.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the request handlers.
// - Spawn background workers (admission window sweeper).

pub mod config;
pub mod http;
pub mod state;
pub mod workers;
