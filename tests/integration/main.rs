//! Integration tests driving the public API end to end.

mod cli_flow;
mod engine_flow;
mod slip_flow;
