use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use launchspec::errors::Result;
use launchspec::launch::{LaunchedApp, Launcher};
use launchspec::spec::ProcessSpec;

/// A fake launcher that:
/// - records which apps were "launched", in order
/// - fabricates a pid for each without creating any OS process.
pub struct RecordingLauncher {
    launched: Arc<Mutex<Vec<String>>>,
    next_pid: u32,
}

impl RecordingLauncher {
    pub fn new(launched: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            launched,
            next_pid: 1000,
        }
    }
}

impl Launcher for RecordingLauncher {
    fn launch(
        &mut self,
        spec: ProcessSpec,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchedApp>> + Send + '_>> {
        let launched = Arc::clone(&self.launched);
        self.next_pid += 1;
        let pid = self.next_pid;

        Box::pin(async move {
            launched.lock().unwrap().push(spec.name.clone());
            Ok(LaunchedApp {
                name: spec.name,
                pid: Some(pid),
            })
        })
    }
}
