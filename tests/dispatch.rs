mod common;

use bytes::Bytes;
use http::StatusCode;

use common::{OneShotServer, fixed_client};
use ds3::{Error, ObjectDescriptor};

const DATE: &str = "Tue, 15 Nov 1994 08:12:31 GMT";

#[test]
fn list_bucket_is_signed_get() {
    let server = OneShotServer::start("200 OK", "<ListBucketResult/>");
    let client = fixed_client(&server.endpoint);

    let body = client.list_bucket("mybucket").unwrap();
    assert_eq!(body, Bytes::from_static(b"<ListBucketResult/>"));

    let req = server.captured();
    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "/mybucket");
    assert_eq!(req.header("date"), Some(DATE));
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:AhT7SWv1Sr1VVnptqu27D4MMgiU=")
    );
    assert_eq!(req.header("content-type"), None);
}

#[test]
fn list_services_targets_root() {
    let server = OneShotServer::start("200 OK", "<ListAllMyBucketsResult/>");
    let client = fixed_client(&server.endpoint);

    client.list_services().unwrap();

    let req = server.captured();
    assert_eq!((req.method.as_str(), req.target.as_str()), ("GET", "/"));
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:MaFSxmV5OjV3ODX3zXmK/l19kgg=")
    );
}

#[test]
fn host_header_keeps_non_default_port() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);
    let authority = server.endpoint.trim_start_matches("http://").to_string();

    client.list_services().unwrap();

    let req = server.captured();
    assert_eq!(req.header("host"), Some(authority.as_str()));
}

#[test]
fn bulk_put_signs_marker_and_sends_object_list() {
    let server = OneShotServer::start("200 OK", "<MasterObjectList/>");
    let client = fixed_client(&server.endpoint);

    let job = client
        .bulk_put(
            "mybucket",
            [
                ObjectDescriptor::new("a.txt", 12),
                ObjectDescriptor::new("b.txt", 0),
            ],
        )
        .unwrap();
    assert_eq!(job, Bytes::from_static(b"<MasterObjectList/>"));

    let req = server.captured();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.target, "/mybucket/?start-bulk-put");
    assert_eq!(req.header("content-type"), Some("application/octet-stream"));
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:OSAbS19vLzsMLiD4POEnIyaSFNo=")
    );

    let xml = req.body_text();
    assert!(xml.starts_with("<objects>"), "{xml}");
    let a = xml.find(r#"name="a.txt" size="12""#).expect("a.txt entry");
    let b = xml.find(r#"name="b.txt" size="0""#).expect("b.txt entry");
    assert!(a < b);
}

#[test]
fn bulk_get_sends_names_without_sizes() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client.bulk_get("mybucket", ["a.txt", "b.txt"]).unwrap();

    let req = server.captured();
    assert_eq!(req.target, "/mybucket/?start-bulk-get");
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:7+Hm6bVAhoTR3MQ3MRKWjg0s5K0=")
    );
    let xml = req.body_text();
    assert!(xml.contains(r#"name="a.txt""#));
    assert!(!xml.contains("size="));
}

#[test]
fn put_object_sends_body_with_octet_stream() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client
        .put_object("mybucket", "hello.txt", &b"hello"[..])
        .unwrap();

    let req = server.captured();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.target, "/mybucket/hello.txt");
    assert_eq!(req.body, b"hello");
    assert_eq!(req.header("content-type"), Some("application/octet-stream"));
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:+0YXusuTLHqyZQ2hXol9dfgxhJ8=")
    );
}

#[test]
fn query_params_are_appended_after_signing() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client
        .buckets()
        .list("mybucket")
        .query_param("prefix", "logs/")
        .query_param("max-keys", "10")
        .send()
        .unwrap();

    let req = server.captured();
    assert_eq!(req.target, "/mybucket?prefix=logs/&max-keys=10");
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:AhT7SWv1Sr1VVnptqu27D4MMgiU=")
    );
}

#[test]
fn error_status_is_returned_raw() {
    let reply = "<Error><Code>NoSuchBucket</Code><Message>missing</Message></Error>";
    let server = OneShotServer::start("404 Not Found", reply);
    let client = fixed_client(&server.endpoint);

    let body = client.list_bucket("missing").unwrap();
    assert_eq!(body, Bytes::from_static(reply.as_bytes()));
    server.captured();
}

#[test]
fn error_for_status_surfaces_service_error() {
    let reply = "<Error><Code>NoSuchBucket</Code><Message>missing</Message></Error>";
    let server = OneShotServer::start("404 Not Found", reply);
    let client = fixed_client(&server.endpoint);

    let resp = client.buckets().list("missing").send().unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err = resp.error_for_status().unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.code(), Some("NoSuchBucket"));
    server.captured();
}

#[test]
fn delete_and_head_use_their_verbs() {
    let server = OneShotServer::start("204 No Content", "");
    let client = fixed_client(&server.endpoint);
    client.delete_object("mybucket", "old.txt").unwrap();
    let req = server.captured();
    assert_eq!((req.method.as_str(), req.target.as_str()), ("DELETE", "/mybucket/old.txt"));

    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);
    let resp = client.objects().head("mybucket", "a.txt").send().unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let req = server.captured();
    assert_eq!((req.method.as_str(), req.target.as_str()), ("HEAD", "/mybucket/a.txt"));
}

#[test]
fn empty_bulk_list_fails_before_connecting() {
    let client = fixed_client("http://127.0.0.1:1");
    let err = client
        .bulk_get("mybucket", Vec::<String>::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = fixed_client(&endpoint).list_services().unwrap_err();
    assert!(err.is_transport(), "{err:?}");
}

#[test]
fn create_bucket_is_signed_put_without_body() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client.create_bucket("mybucket").unwrap();

    let req = server.captured();
    assert_eq!((req.method.as_str(), req.target.as_str()), ("PUT", "/mybucket"));
    assert_eq!(req.header("content-type"), Some("application/octet-stream"));
    assert_eq!(req.header("content-length"), Some("0"));
    assert!(req.body.is_empty());
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:gsioSIC0WH43oJJPyC6mdsnyuk8=")
    );
}

#[test]
fn get_object_is_signed_get() {
    let server = OneShotServer::start("200 OK", "hello");
    let client = fixed_client(&server.endpoint);

    let body = client.get_object("mybucket", "hello.txt").unwrap();
    assert_eq!(body, Bytes::from_static(b"hello"));

    let req = server.captured();
    assert_eq!((req.method.as_str(), req.target.as_str()), ("GET", "/mybucket/hello.txt"));
    assert_eq!(req.header("content-type"), None);
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:ClY/1REb4L1OINN10C7A5BH8O3U=")
    );
}

#[test]
fn names_with_spaces_are_signed_as_sent() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client.get_object("mybucket", "a b.txt").unwrap();

    let req = server.captured();
    assert_eq!(req.target, "/mybucket/a%20b.txt");
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:JZkEVfdVtdznQYdEuEdCi8ceNj4=")
    );
}

#[test]
fn non_ascii_names_are_signed_as_sent() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client.get_object("mybucket", "ünï.txt").unwrap();

    let req = server.captured();
    assert_eq!(req.target, "/mybucket/%C3%BCn%C3%AF.txt");
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:koAI2kpSNh8M4YHff9DExl8qCtk=")
    );
}

#[test]
fn hash_in_object_name_stays_in_the_path() {
    let server = OneShotServer::start("204 No Content", "");
    let client = fixed_client(&server.endpoint);

    client.delete_object("mybucket", "a#b").unwrap();

    let req = server.captured();
    assert_eq!((req.method.as_str(), req.target.as_str()), ("DELETE", "/mybucket/a%23b"));
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:yEL+BcGZhhOY9sauw35ML6KEsOU=")
    );
}

#[test]
fn dot_segments_fail_before_connecting() {
    let client = fixed_client("http://127.0.0.1:1");
    let err = client.get_object("mybucket", "../other/key").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");
}

#[test]
fn hash_in_query_value_fails_before_connecting() {
    let client = fixed_client("http://127.0.0.1:1");
    let err = client
        .buckets()
        .list("mybucket")
        .query_param("prefix", "a#b")
        .send()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");
}

#[test]
fn bulk_query_params_follow_the_marker() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client
        .buckets()
        .bulk_get("mybucket")
        .object("a.txt")
        .query_param("priority", "HIGH")
        .send()
        .unwrap();

    let req = server.captured();
    assert_eq!(req.target, "/mybucket/?start-bulk-get&priority=HIGH");
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:7+Hm6bVAhoTR3MQ3MRKWjg0s5K0=")
    );
}

#[test]
fn object_builders_accept_query_params() {
    let server = OneShotServer::start("200 OK", "");
    let client = fixed_client(&server.endpoint);

    client
        .objects()
        .put("mybucket", "hello.txt")
        .body(&b"hello"[..])
        .query_param("job", "42")
        .send()
        .unwrap();

    let req = server.captured();
    assert_eq!(req.target, "/mybucket/hello.txt?job=42");
    assert_eq!(
        req.header("authorization"),
        Some("AWS client:+0YXusuTLHqyZQ2hXol9dfgxhJ8=")
    );
}
