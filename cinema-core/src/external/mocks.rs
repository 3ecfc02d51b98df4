// cinema-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{FfmpegSpawner, FfprobeExecutor};
use crate::error::{CoreError, CoreResult};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

enum MockRun {
    Exit(i32),
    SpawnError(io::ErrorKind),
}

/// Mock implementation of FfmpegSpawner that replays scripted outcomes in
/// order and records every command line it receives.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    outcomes: Rc<RefCell<VecDeque<MockRun>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Queues a run that exits with `code`.
    pub fn add_exit_code(&self, code: i32) {
        self.outcomes.borrow_mut().push_back(MockRun::Exit(code));
    }

    /// Queues a run that fails to start.
    pub fn add_spawn_error(&self, kind: io::ErrorKind) {
        self.outcomes.borrow_mut().push_back(MockRun::SpawnError(kind));
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    fn run(&self, command_line: &[String]) -> io::Result<ExitStatus> {
        self.received_calls.borrow_mut().push(command_line.to_vec());

        match self.outcomes.borrow_mut().pop_front() {
            Some(MockRun::Exit(code)) => {
                log::info!("MockFfmpegSpawner: exiting with code {}", code);
                Ok(exit_status(code))
            }
            Some(MockRun::SpawnError(kind)) => {
                log::warn!("MockFfmpegSpawner simulating spawn error: {:?}", kind);
                Err(io::Error::new(kind, "mock spawn error"))
            }
            None => panic!(
                "MockFfmpegSpawner: No expectation found for command line: {:?}",
                command_line
            ),
        }
    }
}

enum MockProbe {
    Output(Vec<u8>),
    Failure(String),
}

/// Mock implementation of FfprobeExecutor.
#[derive(Clone)]
pub struct MockFfprobeExecutor {
    available: Rc<Cell<bool>>,
    results: Rc<RefCell<HashMap<PathBuf, MockProbe>>>,
    probed_paths: Rc<RefCell<Vec<PathBuf>>>,
}

impl Default for MockFfprobeExecutor {
    fn default() -> Self {
        Self {
            available: Rc::new(Cell::new(true)),
            results: Default::default(),
            probed_paths: Default::default(),
        }
    }
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Simulates the probe tool being absent from PATH.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Sets the JSON document returned when probing `input_path`.
    pub fn expect_output(&self, input_path: &Path, json: &str) {
        self.results
            .borrow_mut()
            .insert(input_path.to_path_buf(), MockProbe::Output(json.as_bytes().to_vec()));
    }

    /// Makes probing `input_path` fail as if ffprobe exited non-zero.
    pub fn expect_failure(&self, input_path: &Path, message: &str) {
        self.results
            .borrow_mut()
            .insert(input_path.to_path_buf(), MockProbe::Failure(message.to_string()));
    }

    pub fn get_probed_paths(&self) -> Vec<PathBuf> {
        self.probed_paths.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn ensure_available(&self) -> CoreResult<()> {
        if self.available.get() {
            Ok(())
        } else {
            Err(CoreError::ToolNotFound("ffprobe".to_string()))
        }
    }

    fn probe(&self, input_path: &Path) -> CoreResult<Vec<u8>> {
        log::info!("MockFfprobeExecutor::probe called for: {}", input_path.display());
        self.probed_paths.borrow_mut().push(input_path.to_path_buf());

        match self.results.borrow().get(input_path) {
            Some(MockProbe::Output(bytes)) => Ok(bytes.clone()),
            Some(MockProbe::Failure(message)) => Err(CoreError::ProbeFailed(message.clone())),
            None => Err(CoreError::ProbeFailed(format!(
                "MockFfprobeExecutor: No expectation set for path {}",
                input_path.display()
            ))),
        }
    }
}
