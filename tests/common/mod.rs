//! Shared helpers for scripted shell sessions.

use contact_book::{ContactStore, Shell};
use std::io::{self, Cursor};

/// Outcome of running a scripted session.
#[allow(dead_code)]
pub struct Session {
    pub store: ContactStore,
    pub output: String,
}

/// Run a full shell session with `lines` as stdin (one entry per line).
pub fn run_session(store: ContactStore, lines: &[&str]) -> Session {
    let mut input = lines.join("\n");
    input.push('\n');
    try_run_session(store, &input).expect("in-memory I/O cannot fail")
}

/// Run a shell session over raw stdin bytes, surfacing the result of `run`.
pub fn try_run_session(store: ContactStore, input: &str) -> io::Result<Session> {
    let mut shell = Shell::new(store, Cursor::new(input.as_bytes().to_vec()), Vec::new());
    shell.run()?;

    let (store, output) = shell.into_parts();
    Ok(Session {
        store,
        output: String::from_utf8(output).expect("shell writes UTF-8"),
    })
}

/// The menu block printed before every choice prompt.
#[allow(dead_code)]
pub const MENU: &str = "Contact Management System\n\
1. Add Contact\n\
2. Delete Contact\n\
3. Search Contact\n\
4. Display All Contacts\n\
5. Exit\n";
