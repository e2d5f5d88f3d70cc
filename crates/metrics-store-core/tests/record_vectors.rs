//! Record decoding vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use metrics_store_core::codec::RecordDecoder;

mod vector_loader;
use vector_loader::load;

#[test]
fn record_vectors() {
    let files = [
        "post_minimal.json",
        "post_internal_temp.json",
        "post_internal_temp_null.json",
        "post_client_id.json",
        "post_missing_fields.json",
        "post_unknown_field_strict.json",
        "post_unknown_stats_field_strict.json",
        "post_unknown_field_lenient.json",
        "post_two_objects.json",
        "post_two_objects_first_invalid.json",
        "post_malformed.json",
        "post_type_mismatch.json",
        "post_empty.json",
        "post_array.json",
        "post_trailing_whitespace.json",
        "post_hdd_space_lowercase_strict.json",
        "post_hdd_space_lowercase_lenient.json",
        "post_key_case_variants.json",
        "post_null_fields.json",
        "post_null_after_value.json",
        "post_duplicate_key.json",
        "post_duplicate_stats_merge.json",
        "post_internal_temp_null_after_value.json",
        "post_null_body.json",
        "post_stats_wrong_type.json",
    ];

    for f in files {
        let v = load(f);
        let decoder = RecordDecoder::new(v.allow_unknown_fields);
        let res = decoder.decode(&v.body.bytes());

        if let Some(err) = v.expect_error {
            let e = res.expect_err(&format!("expected error, vector={}", v.description));
            assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            if let Some(needle) = err.contains {
                assert!(
                    e.to_string().contains(&needle),
                    "vector={} message={}",
                    v.description,
                    e
                );
            }
            if let Some(needle) = err.excludes {
                assert!(
                    !e.to_string().contains(&needle),
                    "vector={} message={}",
                    v.description,
                    e
                );
            }
            continue;
        }

        let record = res.unwrap_or_else(|e| panic!("vector={} failed: {e}", v.description));
        let ex = v.expect.expect("missing expect block");

        assert_eq!(record.id, ex["id"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(record.machine_id, ex["machineId"].as_i64().unwrap(), "vector={}", v.description);
        assert_eq!(record.stats.cpu_temp, ex["cpuTemp"].as_i64().unwrap(), "vector={}", v.description);
        assert_eq!(record.stats.fan_speed, ex["fanSpeed"].as_i64().unwrap(), "vector={}", v.description);
        assert_eq!(record.stats.hdd_space, ex["HDDSpace"].as_i64().unwrap(), "vector={}", v.description);
        assert_eq!(record.last_logged_in, ex["lastLoggedIn"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(record.sys_time, ex["sysTime"].as_str().unwrap(), "vector={}", v.description);

        if ex.get("internalTemp").is_some() && !ex["internalTemp"].is_null() {
            assert_eq!(
                record.stats.internal_temp,
                Some(ex["internalTemp"].as_i64().unwrap()),
                "vector={}",
                v.description
            );
        } else {
            assert!(record.stats.internal_temp.is_none(), "vector={}", v.description);
        }
    }
}
