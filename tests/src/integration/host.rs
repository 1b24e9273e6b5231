//! # Host Script Flows
//!
//! The request lifecycle replayed as an invocation script through the host
//! runtime, including rollback of a failing invoke and a restart from the
//! saved world state.

#[cfg(test)]
mod tests {
    use gl_node::{Host, HostConfig, Invocation, RunSummary};
    use serde_json::Value;

    const SCRIPT: &str = r#"
# provisioning is idempotent
{"channel":"invoke","function":"init","args":[]}
{"channel":"invoke","function":"submit_new_request","args":["new","alice","bob","req-1","{\"amount\":100}","new","{}"]}
{"channel":"query","function":"get_request_json","args":["alice","bob","req-1"]}
{"channel":"invoke","function":"approve_new_request","args":["alice","bob","req-1"]}
{"channel":"query","function":"get_request_json","args":["alice","bob","req-1"]}
{"channel":"invoke","function":"submit_new_request","args":["new","alice","bob","req-1","{}","new","{}"]}
{"channel":"query","function":"get_new_requests","args":["alice"]}
{"channel":"query","function":"approve_new_request","args":["alice","bob","req-1"]}
"#;

    fn run(host: &mut Host, script: &str) -> (RunSummary, Vec<Value>) {
        let mut output = Vec::new();
        let summary = host.run(script.as_bytes(), &mut output).expect("run");
        let lines = std::str::from_utf8(&output)
            .expect("utf-8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("JSON result line"))
            .collect();
        (summary, lines)
    }

    #[test]
    fn test_request_script() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let mut host = Host::open(&HostConfig::default()).unwrap();
        let (summary, lines) = run(&mut host, SCRIPT);

        assert_eq!((summary.executed, summary.failed), (8, 2));
        assert_eq!(lines[0], serde_json::json!({"ok": null}));

        let before = &lines[2]["ok"];
        let after = &lines[4]["ok"];
        assert_eq!(before["status"], "new");
        assert_eq!(after["status"], "approved");
        assert_eq!(before["data"], serde_json::json!({"amount": 100}));
        let unchanged = [
            "requestType",
            "requester",
            "approver",
            "uid",
            "data",
            "permissions",
            "createdAt",
        ];
        for field in unchanged {
            assert_eq!(before[field], after[field], "{field} changed on approval");
        }

        assert!(lines[5]["error"].as_str().unwrap().contains("already exists"));
        assert_eq!(lines[6]["ok"]["count"], 1);
        assert!(lines[7]["error"].as_str().unwrap().contains("unknown query function"));
    }

    #[test]
    fn test_restart_from_saved_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig {
            state_file: Some(dir.path().join("world.json")),
            ..HostConfig::default()
        };

        let mut first = Host::open(&config).unwrap();
        run(&mut first, SCRIPT);
        first.save().unwrap();

        let mut second = Host::open(&config).unwrap();
        let status = Invocation::query("get_request_status", &["alice", "bob", "req-1"]);
        let outcome = second.execute(&status);
        assert_eq!(outcome.payload(), Some(r#""approved""#));
    }
}
