//! `tsauto watch` against a real file system watcher.
#![cfg(unix)]

mod common;

use std::io::{BufRead, BufReader};
use std::process::{Child, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use common::*;

const TIMEOUT: Duration = Duration::from_secs(15);

struct Watching {
    child: Child,
    events: Receiver<serde_json::Value>,
}

impl Watching {
    fn spawn(env: &TestEnv) -> Self {
        let mut child = env
            .command()
            .args([
                "watch",
                "--json",
                "--root",
                env.root().to_str().unwrap(),
                "--compiler",
                "true",
            ])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn tsauto watch");

        let stdout = child.stdout.take().unwrap();
        let (tx, events) = channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if let Ok(value) = serde_json::from_str(&line) {
                    if tx.send(value).is_err() {
                        break;
                    }
                }
            }
        });
        Self { child, events }
    }

    /// Wait for an event matching `pred`, returning it.
    fn wait_for(&self, pred: impl Fn(&serde_json::Value) -> bool) -> serde_json::Value {
        let deadline = Instant::now() + TIMEOUT;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(event) if pred(&event) => return event,
                Ok(_) => continue,
                Err(e) => panic!("timed out waiting for event: {}", e),
            }
        }
    }
}

impl Drop for Watching {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn is_status(event: &serde_json::Value, text: &str) -> bool {
    event["event"] == "status" && event["text"] == text
}

#[test]
fn test_watch_compiles_after_source_change() {
    let env = TestEnv::new();
    env.write_project_file("src/a.ts", SOURCE_A);

    let watching = Watching::spawn(&env);
    watching.wait_for(|e| is_status(e, "TS [...]"));
    watching.wait_for(|e| is_status(e, "TS [ON]"));

    // Give the OS watcher a moment to settle before editing.
    thread::sleep(Duration::from_millis(300));
    env.write_project_file("src/a.ts", SOURCE_B);

    watching.wait_for(|e| e["event"] == "message" && e["text"] == "Auto compiling file 'a.ts'");
    watching.wait_for(|e| {
        e["event"] == "message" && e["text"] == "TypeScript auto compilation succeeded."
    });
}

#[test]
fn test_watch_announces_existing_config() {
    let env = TestEnv::new();
    env.write_project_file("tsconfig.json", TSCONFIG);

    let watching = Watching::spawn(&env);
    let notice = watching.wait_for(|e| e["event"] == "notification");

    assert!(notice["text"]
        .as_str()
        .unwrap()
        .starts_with("Found tsconfig.json file at"));
}
