// Library root
// -----------
// This crate exposes the pieces of the enrollment CLI. The binary
// (`main.rs`) wires them together and runs the interactive session.
//
// Module responsibilities:
// - `validate`: field predicates for names, emails, IDs and gender.
// - `student`: the in-memory student record, courses and grades.
// - `store`: appends created courses to the CSV course file.
// - `console`: prompt/answer abstraction over a terminal or plain stdio.
// - `ui`: onboarding, the numbered menu and its handlers.
// - `logging`: diagnostics on stderr.
pub mod console;
pub mod logging;
pub mod store;
pub mod student;
pub mod ui;
pub mod validate;
