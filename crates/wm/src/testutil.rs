//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::proc::{CommandRunner, ProcessOutput};

/// A runner that replays a scripted sequence of responses and records every
/// invocation it receives.
pub(crate) struct ScriptedRunner {
    script: RefCell<VecDeque<std::io::Result<ProcessOutput>>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub(crate) fn new(script: Vec<std::io::Result<ProcessOutput>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn not_found() -> std::io::Result<ProcessOutput> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<ProcessOutput> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected invocation: {program} {args:?}"))
    }
}
