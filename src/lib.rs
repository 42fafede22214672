//! Papagaio is a terminal chatbot that answers in Portuguese.
//!
//! A message is answered from a small table of canned and learned replies,
//! evaluated as arithmetic, looked up on PubChem, or sent to a web search.
//! Lookups and translations run as background tasks that render their
//! results whenever they land.
//!
//! The crate is organized in layers:
//! - [`core`] owns the reply decision, the answer store, background flows,
//!   configuration and credentials.
//! - [`api`] holds the HTTP clients and payloads for PubChem, the search
//!   service and the translation service.
//! - [`commands`] implements slash commands for the chat loop.
//! - [`ui`] renders entries and runs the line-oriented chat loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
