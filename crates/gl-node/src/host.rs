//! # Host Runtime
//!
//! Owns the world state and the chaincode. Invocations run one at a time;
//! an invoke that fails leaves the store exactly as it was before the call.

use crate::config::HostConfig;
use crate::script::{parse_line, Invocation, Outcome};
use anyhow::{Context, Result};
use gl_chaincode::{Chaincode, Channel, PayloadKind, SystemTimeSource, TimeSource};
use gl_table_store::{InMemoryTableStore, StoreSnapshot};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Totals for one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

pub struct Host<T: TimeSource + Clone = SystemTimeSource> {
    chaincode: Chaincode<T>,
    store: InMemoryTableStore,
    state_file: Option<PathBuf>,
}

impl Host<SystemTimeSource> {
    /// Load the configured snapshot (if any) and provision the tables.
    pub fn open(config: &HostConfig) -> Result<Self> {
        let store = match &config.state_file {
            Some(path) if path.exists() => load_snapshot(path)?,
            _ => InMemoryTableStore::new(),
        };
        let mut host = Self::with_store(Chaincode::new(config.chaincode.clone()), store)?;
        host.state_file = config.state_file.clone();
        Ok(host)
    }
}

impl<T: TimeSource + Clone> Host<T> {
    /// Wrap an existing store. The chaincode is initialized against it.
    pub fn with_store(chaincode: Chaincode<T>, mut store: InMemoryTableStore) -> Result<Self> {
        chaincode
            .init(&mut store)
            .context("chaincode initialization failed")?;
        info!(tables = ?store.table_names(), "chaincode initialized");
        Ok(Self {
            chaincode,
            store,
            state_file: None,
        })
    }

    pub fn store(&self) -> &InMemoryTableStore {
        &self.store
    }

    /// Run one invocation. Failed invokes are rolled back.
    pub fn execute(&mut self, invocation: &Invocation) -> Outcome {
        let Invocation {
            channel,
            function,
            args,
        } = invocation;

        let result = match channel {
            Channel::Query => self.chaincode.query(&self.store, function, args),
            Channel::Invoke => {
                let checkpoint = self.store.clone();
                let result = self.chaincode.invoke(&mut self.store, function, args);
                if result.is_err() {
                    self.store = checkpoint;
                }
                result
            }
        };

        match result {
            Ok(payload) => {
                debug!(%channel, function = %function, "invocation succeeded");
                Outcome::from_payload(payload, PayloadKind::of(function))
            }
            Err(e) => {
                warn!(%channel, function = %function, error = %e, "invocation failed");
                Outcome::Error(e.to_string())
            }
        }
    }

    /// Execute every invocation line from `input`, writing one result line
    /// per invocation to `output`. Malformed lines produce an error line and
    /// do not stop the run.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (number, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("failed reading script line {}", number + 1))?;
            let outcome = match parse_line(&line) {
                None => continue,
                Some(Ok(invocation)) => self.execute(&invocation),
                Some(Err(e)) => {
                    warn!(line = number + 1, error = %e, "malformed invocation");
                    Outcome::Error(format!("invalid invocation at line {}: {e}", number + 1))
                }
            };

            summary.executed += 1;
            if !outcome.is_ok() {
                summary.failed += 1;
            }
            serde_json::to_writer(&mut output, &outcome)?;
            writeln!(output)?;
        }

        output.flush()?;
        info!(
            executed = summary.executed,
            failed = summary.failed,
            "script finished"
        );
        Ok(summary)
    }

    /// Persist world state to the configured state file, if any.
    pub fn save(&self) -> Result<()> {
        match &self.state_file {
            Some(path) => save_snapshot(&self.store, path),
            None => Ok(()),
        }
    }
}

fn load_snapshot(path: &Path) -> Result<InMemoryTableStore> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read state file {}", path.display()))?;
    let snapshot: StoreSnapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("state file {} is not a valid snapshot", path.display()))?;
    let store = InMemoryTableStore::from_snapshot(snapshot)
        .with_context(|| format!("state file {} failed validation", path.display()))?;
    info!(path = %path.display(), tables = store.table_names().len(), "world state loaded");
    Ok(store)
}

fn save_snapshot(store: &InMemoryTableStore, path: &Path) -> Result<()> {
    let encoded = serde_json::to_vec_pretty(&store.snapshot())?;
    let staging = path.with_extension("tmp");
    fs::write(&staging, encoded).with_context(|| format!("failed to write {}", staging.display()))?;
    fs::rename(&staging, path).with_context(|| format!("failed to replace {}", path.display()))?;
    info!(path = %path.display(), "world state saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_chaincode::{ChaincodeConfig, FixedTimeSource};

    fn host() -> Host<FixedTimeSource> {
        let chaincode =
            Chaincode::with_time_source(ChaincodeConfig::default(), FixedTimeSource::at_unix(0));
        Host::with_store(chaincode, InMemoryTableStore::new()).unwrap()
    }

    #[test]
    fn test_failed_invoke_rolls_back_index_append() {
        let mut host = host();
        host.store = {
            // Drop the user table so the record write fails after the index append.
            let mut snapshot = host.store.snapshot();
            snapshot.tables.retain(|table| table.schema.name != "UserTable");
            InMemoryTableStore::from_snapshot(snapshot).unwrap()
        };

        let outcome = host.execute(&Invocation::invoke("add_user", &["alice", "{}"]));
        assert!(!outcome.is_ok());
        assert_eq!(host.store().row_count("IndexTable"), Some(0));
    }

    #[test]
    fn test_run_writes_one_line_per_invocation() {
        let mut host = host();
        let script = concat!(
            "# seed\n",
            r#"{"channel":"invoke","function":"submit_new_request","args":["new","alice","bob","req-1","{\"amount\":100}","new","{}"]}"#,
            "\n\n",
            r#"{"channel":"query","function":"get_request_status","args":["alice","bob","req-1"]}"#,
            "\n",
            "not json\n",
        );
        let mut output = Vec::new();
        let summary = host.run(script.as_bytes(), &mut output).unwrap();

        assert_eq!((summary.executed, summary.failed), (3, 1));
        let lines: Vec<_> = std::str::from_utf8(&output).unwrap().lines().collect();
        assert_eq!(lines[0], r#"{"ok":null}"#);
        assert_eq!(lines[1], r#"{"ok":"new"}"#);
        assert!(lines[2].starts_with(r#"{"error":"invalid invocation at line 5"#));
    }

    #[test]
    fn test_stored_status_is_distinct_from_a_miss() {
        let mut host = host();
        for (uid, status) in [("req-1", "null"), ("req-2", "42")] {
            let submit = Invocation::invoke(
                "submit_new_request",
                &["new", "alice", "bob", uid, "{}", status, "{}"],
            );
            assert!(host.execute(&submit).is_ok());
        }

        let line = |host: &mut Host<FixedTimeSource>, uid: &str| {
            let query = Invocation::query("get_request_status", &["alice", "bob", uid]);
            serde_json::to_string(&host.execute(&query)).unwrap()
        };
        assert_eq!(line(&mut host, "req-1"), r#"{"ok":"null"}"#);
        assert_eq!(line(&mut host, "req-2"), r#"{"ok":"42"}"#);
        assert_eq!(line(&mut host, "ghost"), r#"{"ok":null}"#);
    }

    #[test]
    fn test_user_record_is_emitted_as_text() {
        let mut host = host();
        let record = r#"{"name":"Alice"}"#;
        assert!(host.execute(&Invocation::invoke("add_user", &["alice", record])).is_ok());

        let outcome = host.execute(&Invocation::query("get_user", &["_", "alice"]));
        let line: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(line["ok"], record);
    }
}
