//! End-to-end compilation tests.
//!
//! Each test builds a request, compiles it, and checks the JSON the backend
//! would receive.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use ftq_mapping::{
    AccessContext, CompileError, FilterEntry, FixedIndex, QueryCompiler, SearchRequest,
};
use serde_json::{Value, json};

/// Compiles `request` for viewer `alice` on provider `files`.
fn compile(request: &SearchRequest) -> Result<Value, CompileError> {
    compile_as(request, &AccessContext::new("alice"))
}

/// Compiles `request` for `access` on provider `files`.
fn compile_as(request: &SearchRequest, access: &AccessContext) -> Result<Value, CompileError> {
    QueryCompiler::new(FixedIndex::new("nextcloud"))
        .compile_search_query(request, access, "files")
        .map(|compiled| compiled.to_json())
}

/// Collects every field name mentioned anywhere under `value`, recursively.
fn field_names(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                match key.as_str() {
                    "match_phrase" | "match_phrase_prefix" | "wildcard" => {
                        if let Some(obj) = inner.as_object() {
                            out.extend(obj.keys().cloned());
                        }
                    }
                    "query_string" => {
                        if let Some(fields) = inner["fields"].as_array() {
                            out.extend(fields.iter().filter_map(Value::as_str).map(String::from));
                        }
                    }
                    _ => field_names(inner, out),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                field_names(item, out);
            }
        }
        _ => {}
    }
}

#[test]
fn full_document_shape() {
    let request = SearchRequest::new("hello");
    let json = compile(&request).unwrap();

    assert_eq!(
        json,
        json!({
            "index": "nextcloud",
            "type": "standard",
            "size": 20,
            "from": 0,
            "body": {
                "query": {"bool": {
                    "must": [{"bool": {"should": [{"bool": {"should": [
                        {"match_phrase_prefix": {"content": "hello"}},
                        {"match_phrase_prefix": {"title": "hello"}},
                    ]}}]}}],
                    "filter": [
                        {"bool": {"must": [{"term": {"provider": "files"}}]}},
                        {"bool": {"should": [
                            {"term": {"owner": "alice"}},
                            {"term": {"users": "alice"}},
                            {"term": {"users": "__all"}},
                        ]}},
                        {"bool": {"should": []}},
                        {"bool": {"must": []}},
                    ],
                }},
                "highlight": {
                    "fields": {"content": {"number_of_fragments": 5, "order": "score"}},
                    "pre_tags": [""],
                    "post_tags": [""],
                },
                "_source": {"excludes": ["content"]},
            },
        })
    );
}

#[test]
fn whitespace_only_search_fails() {
    let err = compile(&SearchRequest::new("   ")).unwrap_err();
    assert!(matches!(err, CompileError::NoValidQueryTerms(_)));
}

#[test]
fn marker_only_search_fails() {
    let err = compile(&SearchRequest::new("+ - ?")).unwrap_err();
    assert!(matches!(err, CompileError::NoValidQueryTerms(_)));
}

#[test]
fn sentinel_search_is_filter_only() {
    let json = compile(&SearchRequest::default()).unwrap();
    let query = &json["body"]["query"]["bool"];

    assert!(query.get("must").is_none());
    assert_eq!(
        query["filter"][0],
        json!({"bool": {"must": [{"term": {"provider": "files"}}]}})
    );
}

#[test]
fn provider_filter_is_exact() {
    let json = compile(&SearchRequest::new("+report -draft")).unwrap();
    assert_eq!(
        json["body"]["query"]["bool"]["filter"][0]["bool"]["must"],
        json!([{"term": {"provider": "files"}}])
    );
}

#[test]
fn allow_list_bounds_fanout_fields() {
    let request = SearchRequest {
        fields: vec!["author".into(), "comments".into()],
        wildcard_fields: vec!["path".into()],
        parts: vec!["notes".into(), "attachments".into()],
        limit_fields: vec!["title".into(), "path".into(), "parts.notes".into()],
        ..SearchRequest::new("+quarterly \"sales report\" -draft")
    };
    let json = compile(&request).unwrap();

    let mut fields = Vec::new();
    field_names(&json["body"]["query"]["bool"]["must"], &mut fields);
    assert!(!fields.is_empty());
    for field in &fields {
        assert!(
            request.limit_fields.contains(field),
            "{field} escaped the allow-list"
        );
    }
}

#[test]
fn access_disjunction_size_and_order() {
    let access = AccessContext {
        viewer: "bob".into(),
        groups: vec!["admin".into(), "staff".into(), "ops".into()],
        circles: vec!["chess".into(), "hiking".into()],
    };
    let json = compile_as(&SearchRequest::default(), &access).unwrap();
    let access_terms = json["body"]["query"]["bool"]["filter"][1]["bool"]["should"]
        .as_array()
        .unwrap()
        .clone();

    assert_eq!(access_terms.len(), 3 + 3 + 2);
    assert_eq!(
        access_terms,
        vec![
            json!({"term": {"owner": "bob"}}),
            json!({"term": {"users": "bob"}}),
            json!({"term": {"users": "__all"}}),
            json!({"term": {"groups": "admin"}}),
            json!({"term": {"groups": "staff"}}),
            json!({"term": {"groups": "ops"}}),
            json!({"term": {"circles": "chess"}}),
            json!({"term": {"circles": "hiking"}}),
        ]
    );
}

#[test]
fn legacy_payload_becomes_must_group() {
    let request = SearchRequest {
        regex_filters: vec![vec![FilterEntry::new(
            "info_msg",
            r#"{"author":"alice","start":"0","end":"0"}"#,
        )]],
        ..SearchRequest::default()
    };
    let json = compile(&request).unwrap();
    let filters = json["body"]["query"]["bool"]["filter"].as_array().unwrap();

    assert_eq!(filters.len(), 5);
    assert_eq!(
        filters[4],
        json!({"bool": {"must": [{"wildcard": {"info_msg_author": "*alice*"}}]}})
    );
}

#[test]
fn malformed_legacy_payload_does_not_fail() {
    let request = SearchRequest {
        regex_filters: vec![vec![FilterEntry::new("info_msg", "{broken")]],
        ..SearchRequest::default()
    };
    let json = compile(&request).unwrap();
    assert_eq!(
        json["body"]["query"]["bool"]["filter"][4],
        json!({"bool": {"must": []}})
    );
}

#[test]
fn compilation_is_idempotent() {
    let request = SearchRequest {
        page: 3,
        meta_tags: vec!["work".into()],
        wildcard_filters: vec![vec![FilterEntry::new("name", "*.pdf")]],
        ..SearchRequest::new("alpha +beta -\"gamma delta\"")
    };
    let access = AccessContext {
        viewer: "carol".into(),
        groups: vec!["g1".into()],
        circles: vec![],
    };

    assert_eq!(
        compile_as(&request, &access).unwrap(),
        compile_as(&request, &access).unwrap()
    );
}

#[test]
fn paging_and_term_extraction() {
    let request = SearchRequest {
        page: 2,
        size: 10,
        ..SearchRequest::new("hello \"big world\"")
    };
    let json = compile(&request).unwrap();

    assert_eq!(json["from"], 10);
    assert_eq!(json["size"], 10);

    let should = &json["body"]["query"]["bool"]["must"][0]["bool"]["should"];
    assert_eq!(should.as_array().map(Vec::len), Some(2));
    assert_eq!(
        should[0]["bool"]["should"][0],
        json!({"match_phrase_prefix": {"content": "hello"}})
    );
    assert_eq!(
        should[1]["bool"]["should"][0],
        json!({"match_phrase": {"content": "big world"}})
    );
}

#[test]
fn get_by_id_uses_composite_key() {
    let lookup = QueryCompiler::new(FixedIndex::new("nextcloud"))
        .compile_get_by_id_query("mail", "42")
        .unwrap();
    assert_eq!(
        lookup.to_json(),
        json!({"index": "nextcloud", "type": "standard", "id": "mail:42"})
    );
}

#[test]
fn wildcard_filter_group_adds_one_should_group() {
    let request = SearchRequest {
        wildcard_filters: vec![vec![FilterEntry::new("name", "*.pdf")]],
        ..SearchRequest::default()
    };
    let json = compile(&request).unwrap();
    let filters = json["body"]["query"]["bool"]["filter"].as_array().unwrap();

    assert_eq!(filters.len(), 5);
    assert_eq!(
        filters[4],
        json!({"bool": {"should": [{"wildcard": {"name": "*.pdf"}}]}})
    );
}

#[test]
fn request_loaded_from_json() {
    let request: SearchRequest = serde_json::from_value(json!({
        "search": "-spam",
        "page": 1,
        "size": 5,
        "parts": ["comments"],
        "sub_tags": ["inbox"],
    }))
    .unwrap();
    let json = compile(&request).unwrap();

    let must = &json["body"]["query"]["bool"]["must"][0]["bool"];
    assert!(must.get("must_not").is_some());
    assert_eq!(
        must["must_not"][0]["bool"]["should"][2],
        json!({"query_string": {"fields": ["parts.comments"], "query": "spam"}})
    );
    assert_eq!(
        json["body"]["query"]["bool"]["filter"][3],
        json!({"bool": {"must": [{"term": {"subtags": "inbox"}}]}})
    );
    assert_eq!(json["body"]["highlight"]["fields"]["parts.comments"], json!({}));
}
