//! # Integration Test Flows
//!
//! A guarantee moving through its whole lifecycle, driven only through the
//! dispatcher's named operations:
//!
//! 1. **Onboarding**: applicant and bank are registered and authenticate
//! 2. **Request**: the applicant raises a request, the bank approves it
//! 3. **Issuance**: the bank issues the guarantee referencing the request
//! 4. **Amendment**: a replacement guarantee supersedes the first
//! 5. **Cancellation**: the original guarantee is cancelled

#[cfg(test)]
mod tests {
    use gl_chaincode::{Chaincode, ChaincodeConfig, ChaincodeError, FixedTimeSource};
    use gl_table_store::InMemoryTableStore;
    use serde_json::{json, Value};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const APPLICANT: &str = "acme";
    const BANK: &str = "firstbank";

    fn ledger() -> (InMemoryTableStore, Chaincode<FixedTimeSource>) {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let chaincode = Chaincode::with_time_source(
            ChaincodeConfig::default(),
            FixedTimeSource::at_unix(1_714_557_600),
        );
        let mut store = InMemoryTableStore::new();
        chaincode.init(&mut store).expect("init");
        (store, chaincode)
    }

    fn query(
        store: &InMemoryTableStore,
        chaincode: &Chaincode<FixedTimeSource>,
        function: &str,
        args: &[&str],
    ) -> Option<Value> {
        chaincode
            .query(store, function, args)
            .expect("query")
            .map(|bytes| serde_json::from_slice(&bytes).expect("JSON payload"))
    }

    fn user_record(id: &str, first_name: &str) -> String {
        json!({
            "userId": id,
            "salt": "c2FsdA==",
            "hash": "aGFzaA==",
            "firstName": first_name,
            "lastName": "Ltd",
            "emailAddress": format!("{id}@example.com"),
            "things": []
        })
        .to_string()
    }

    // =============================================================================
    // LIFECYCLE
    // =============================================================================

    #[test]
    fn test_guarantee_lifecycle() {
        let (mut store, chaincode) = ledger();

        // 1. Onboarding
        for (id, name) in [(APPLICANT, "Acme"), (BANK, "First")] {
            chaincode
                .invoke(&mut store, "add_user", &[id, user_record(id, name).as_str()])
                .unwrap();
        }
        let auth = query(&store, &chaincode, "authenticate", &[APPLICANT, "pw"]).unwrap();
        assert_eq!(auth["authenticated"], true);
        assert_eq!(auth["user"]["emailAddress"], "acme@example.com");

        // 2. Request
        let request_data =
            r#"{"beneficiary":"port-authority","amount":{"value":250000,"currency":"EUR"}}"#;
        let permissions = r#"{"read":["firstbank"]}"#;
        chaincode
            .invoke(
                &mut store,
                "submit_new_request",
                &["new", APPLICANT, BANK, "req-1", request_data, "new", permissions],
            )
            .unwrap();
        let pending = query(&store, &chaincode, "get_new_requests", &[APPLICANT]).unwrap();
        assert_eq!(pending["count"], 1);
        assert_eq!(pending["data"][0]["data"]["amount"]["value"], 250000);

        chaincode
            .invoke(&mut store, "approve_new_request", &[APPLICANT, BANK, "req-1"])
            .unwrap();
        let status = chaincode
            .query(&store, "get_request_status", &[APPLICANT, BANK, "req-1"])
            .unwrap();
        assert_eq!(status.as_deref(), Some(&b"approved"[..]));

        // 3. Issuance
        let document_data = json!({"request": "req-1", "amount": 250000}).to_string();
        let issue = [
            APPLICANT,
            BANK,
            "LG",
            "lg-1",
            document_data.as_str(),
            "issued",
            "{}",
            "2025-06-30",
        ];
        chaincode.invoke(&mut store, "issue_document", &issue).unwrap();
        let lg_1 = [APPLICANT, BANK, "lg-1"];
        let issued = query(&store, &chaincode, "get_lg_document_json", &lg_1).unwrap();
        assert_eq!(issued["data"]["request"], "req-1");
        assert_eq!(issued["status"], "issued");

        // 4. Amendment
        let supersede = [
            APPLICANT,
            BANK,
            "LG",
            "lg-1",
            "lg-2",
            r#"{"request":"req-1","amount":300000}"#,
            "issued",
            "{}",
            "2025-12-31",
        ];
        chaincode
            .invoke(&mut store, "supersede_document", &supersede)
            .unwrap();
        let lg_2_typed = [APPLICANT, BANK, "LG", "lg-2"];
        let amended = query(&store, &chaincode, "get_document", &lg_2_typed).unwrap();
        assert_eq!(amended["previousUid"], "lg-1");
        assert_eq!(amended["data"]["amount"], 300000);

        // 5. Cancellation
        chaincode
            .invoke(&mut store, "cancel_lg_document", &[APPLICANT, BANK, "lg-1"])
            .unwrap();
        let original = query(&store, &chaincode, "get_lg_document_json", &lg_1).unwrap();
        assert_eq!(original["status"], "cancelled");
        assert_eq!(original["data"], issued["data"]);
        assert_eq!(original["createdAt"], issued["createdAt"]);

        let lg_2 = [APPLICANT, BANK, "lg-2"];
        let replacement = query(&store, &chaincode, "get_lg_document_json", &lg_2).unwrap();
        assert_eq!(replacement["status"], "issued");
    }

    #[test]
    fn test_pending_listing_per_requester() {
        let (mut store, chaincode) = ledger();
        for (requester, uid) in [("acme", "r1"), ("acme", "r2"), ("globex", "r3")] {
            chaincode
                .invoke(
                    &mut store,
                    "submit_new_request",
                    &["new", requester, BANK, uid, "{}", "new", "{}"],
                )
                .unwrap();
        }

        let acme = query(&store, &chaincode, "get_new_requests", &["acme"]).unwrap();
        let globex = query(&store, &chaincode, "get_new_requests", &["globex"]).unwrap();
        let initech = query(&store, &chaincode, "get_new_requests", &["initech"]).unwrap();
        assert_eq!(acme["count"], 2);
        assert_eq!(globex["count"], 1);
        assert_eq!(initech, json!({"count": 0, "data": []}));

        // Approval does not remove a request from the listing.
        chaincode
            .invoke(&mut store, "approve_new_request", &["acme", BANK, "r1"])
            .unwrap();
        let acme = query(&store, &chaincode, "get_new_requests", &["acme"]).unwrap();
        assert_eq!(acme["count"], 2);
        assert_eq!(acme["data"][0]["status"], "approved");
    }

    #[test]
    fn test_custom_default_document_type() {
        let chaincode = Chaincode::with_time_source(
            ChaincodeConfig::new().with_default_document_type("SBLC"),
            FixedTimeSource::at_unix(0),
        );
        let mut store = InMemoryTableStore::new();
        chaincode.init(&mut store).unwrap();

        chaincode
            .invoke(
                &mut store,
                "issue_document",
                &[APPLICANT, BANK, "SBLC", "s-1", "{}", "issued", "{}", "2025-01-01"],
            )
            .unwrap();
        let document = query(&store, &chaincode, "get_lg_document_json", &[APPLICANT, BANK, "s-1"]);
        assert_eq!(document.unwrap()["documentType"], "SBLC");
    }

    #[test]
    fn test_rejected_operations_report_their_kind() {
        let (mut store, chaincode) = ledger();

        assert!(matches!(
            chaincode.invoke(&mut store, "delete_everything", &["now"]),
            Err(ChaincodeError::UnknownOperation { .. })
        ));
        assert!(matches!(
            chaincode.invoke(&mut store, "issue_document", &[APPLICANT, BANK]),
            Err(ChaincodeError::Argument { expected: 8, actual: 2, .. })
        ));
        assert!(matches!(
            chaincode.invoke(
                &mut store,
                "issue_document",
                &[APPLICANT, BANK, "LG", "lg-1", "{}", "issued", "read-only", "2025-01-01"],
            ),
            Err(ChaincodeError::InvalidPayload { field: "permissions", .. })
        ));
        assert!(matches!(
            chaincode.query(&store, "get_user", &["", "nobody"]),
            Err(ChaincodeError::NotFound { .. })
        ));
    }
}
