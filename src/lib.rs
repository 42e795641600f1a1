// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together into the interactive tool.
//
// Module responsibilities:
// - `model`: the course catalog, payment methods and student records.
// - `roster`: the in-memory, insertion-ordered student store.
// - `ui`: the menu loop and intake form, driven through a `Prompter`.
// - `config` / `logging`: environment knobs and logger setup.
//
// The menu loop never touches the terminal directly, so it can be tested
// with scripted answers and an in-memory output buffer.
pub mod config;
pub mod logging;
pub mod model;
pub mod roster;
pub mod ui;
