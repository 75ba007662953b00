fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Normalizes JSON values so that integer-valued floats compare equal.
    ///
    /// The dashboard backend serializes whole numbers without a fraction,
    /// serde_json may emit `1.0` for an `f64`. Both are semantically
    /// identical; normalize so `1` and `1.0` compare as equal.
    fn normalize_value(v: &serde_json::Value) -> serde_json::Value {
        match v {
            serde_json::Value::Number(n) => {
                if let Some(f) = n.as_f64() {
                    serde_json::json!(f)
                } else {
                    v.clone()
                }
            }
            serde_json::Value::Object(map) => {
                let normalized: serde_json::Map<String, serde_json::Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), normalize_value(v)))
                    .collect();
                serde_json::Value::Object(normalized)
            }
            serde_json::Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(normalize_value).collect())
            }
            _ => v.clone(),
        }
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values (order-independent, float-normalized).
    ///
    /// Catches both renamed keys and `skip_serializing_if` drift: a field
    /// the backend omits must stay omitted here, and vice versa.
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        let norm_fixture = normalize_value(&fixture);
        let norm_reserialized = normalize_value(&reserialized);
        assert_eq!(
            norm_fixture, norm_reserialized,
            "roundtrip mismatch for {name}:\n  backend: {fixture}\n  rust:    {reserialized}"
        );
    }

    #[test]
    fn fixture_transfer_record_plain() {
        roundtrip_test::<sitedeploy_protocol::TransferRecord>("transfer_record_plain.json");
    }

    #[test]
    fn fixture_transfer_record_chunked() {
        roundtrip_test::<sitedeploy_protocol::TransferRecord>("transfer_record_chunked.json");
    }

    #[test]
    fn fixture_store_write_request() {
        roundtrip_test::<sitedeploy_protocol::StoreWriteRequest>("store_write_request.json");
    }

    #[test]
    fn fixture_store_write_response_accepted() {
        roundtrip_test::<sitedeploy_protocol::StoreWriteResponse>(
            "store_write_response_accepted.json",
        );
    }

    #[test]
    fn fixture_store_write_response_rejected() {
        roundtrip_test::<sitedeploy_protocol::StoreWriteResponse>(
            "store_write_response_rejected.json",
        );
    }

    #[test]
    fn chunked_fixture_decodes_expected_bytes() {
        let fixture = load_fixture("transfer_record_chunked.json");
        let record: sitedeploy_protocol::TransferRecord =
            serde_json::from_value(fixture).unwrap();
        assert_eq!(record.content, b"chunk-1-bytes");
        assert!(record.is_chunked);
        assert!(record.is_last_chunk);
        assert_eq!(record.chunk_id, 1);
        assert_eq!(record.chunk_group, 1);
    }

    #[test]
    fn plain_fixture_has_no_chunk_annotations() {
        let fixture = load_fixture("transfer_record_plain.json");
        let obj = fixture.as_object().unwrap();
        assert!(!obj.contains_key("isChunked"));
        assert!(!obj.contains_key("chunkId"));
        assert!(!obj.contains_key("chunkGroup"));
        assert!(!obj.contains_key("isLastChunk"));
    }
}
