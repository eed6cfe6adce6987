//! Integration tests for lookups against a mock RRDA server.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use rrda_client::{Answer, Endpoint, RecordType, RrdaClient, Section, TransportError};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXAMPLE_ANSWER: &str = r#"{
    "question": [{"name": "example.com.", "type": "A", "class": "IN"}],
    "answer": [{"name": "example.com.", "type": "A", "class": "IN", "ttl": 300, "rdlength": 4, "rdata": "93.184.216.34"}],
    "authority": [],
    "additional": []
}"#;

fn question_only(name: &str, rtype: &str) -> serde_json::Value {
    json!({
        "question": [{"name": name, "type": rtype, "class": "IN"}],
        "answer": [],
        "authority": [],
        "additional": []
    })
}

fn client_for(server: &MockServer) -> RrdaClient {
    RrdaClient::with_base_url(server.uri()).expect("Failed to build client")
}

#[tokio::test]
async fn test_a_lookup_decodes_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/example.com/a"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EXAMPLE_ANSWER, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server).a_lookup("example.com").await.unwrap();

    assert_eq!(answer.question.len(), 1);
    assert_eq!(answer.question[0].name, "example.com.");
    assert_eq!(answer.question[0].record_type, "A");
    assert_eq!(answer.answer.len(), 1);
    assert_eq!(answer.answer[0].ttl, 300);
    assert_eq!(answer.answer[0].rdlength, 4);
    assert_eq!(answer.answer[0].rdata, "93.184.216.34");
    assert!(answer.authority.is_empty());
    assert!(answer.additional.is_empty());
}

#[tokio::test]
async fn test_every_record_type_hits_its_path() {
    let server = MockServer::start().await;
    for rt in RecordType::ALL {
        Mock::given(method("GET"))
            .and(path(format!("/statdns.net/{}", rt.suffix())))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(question_only("statdns.net.", rt.mnemonic())),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    for rt in RecordType::ALL {
        let answer = client.lookup(rt, "statdns.net").await.unwrap();
        assert_eq!(answer.question[0].record_type, rt.mnemonic());
        assert!(!answer.has_answers());
    }
}

#[tokio::test]
async fn test_named_lookups_match_generic_lookup() {
    let server = MockServer::start().await;
    for (suffix, rtype) in [("mx", "MX"), ("tlsa", "TLSA"), ("nsec3param", "NSEC3PARAM")] {
        Mock::given(method("GET"))
            .and(path(format!("/_443._tcp.www.statdns.net/{suffix}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(question_only("_443._tcp.www.statdns.net.", rtype)),
            )
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let target = "_443._tcp.www.statdns.net";

    let mx = client.mx_lookup(target).await.unwrap();
    assert_eq!(mx, client.lookup(RecordType::MX, target).await.unwrap());

    let tlsa = client.tlsa_lookup(target).await.unwrap();
    assert_eq!(tlsa.question[0].record_type, "TLSA");

    let param = client.nsec3param_lookup(target).await.unwrap();
    assert_eq!(param.question[0].record_type, "NSEC3PARAM");
}

#[tokio::test]
async fn test_reverse_lookup_v4() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/193.0.6.139"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": [{"name": "139.6.0.193.in-addr.arpa.", "type": "PTR", "class": "IN"}],
            "answer": [{
                "name": "139.6.0.193.in-addr.arpa.",
                "type": "PTR",
                "class": "IN",
                "ttl": 14400,
                "rdlength": 16,
                "rdata": "www.ripe.net."
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .reverse_lookup_v4(Ipv4Addr::new(193, 0, 6, 139))
        .await
        .unwrap();

    assert_eq!(answer.answer_rdata().collect::<Vec<_>>(), ["www.ripe.net."]);
    assert!(answer.authority.is_empty());
}

#[tokio::test]
async fn test_reverse_lookup_v6() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/2001:67c:2e8:22::c100:68b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_only(
            "b.8.6.0.0.0.1.c.0.0.0.0.0.0.0.0.2.2.0.0.8.e.2.0.c.7.6.0.1.0.0.2.ip6.arpa.",
            "PTR",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let ip: Ipv6Addr = "2001:67c:2e8:22::c100:68b".parse().unwrap();
    let answer = client_for(&server).reverse_lookup_v6(ip).await.unwrap();

    assert_eq!(answer.question[0].record_type, "PTR");
}

#[tokio::test]
async fn test_non_success_status_still_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/does-not-exist.statdns.net/a"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "question": [{"name": "does-not-exist.statdns.net.", "type": "A", "class": "IN"}],
            "authority": [{
                "name": "statdns.net.",
                "type": "SOA",
                "class": "IN",
                "ttl": 3600,
                "rdlength": 48,
                "rdata": "ns1.statdns.net. hostmaster.statdns.net. 2013081801 14400 3600 604800 3600"
            }]
        })))
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .a_lookup("does-not-exist.statdns.net")
        .await
        .unwrap();

    assert!(!answer.has_answers());
    assert_eq!(answer.section(Section::Authority).len(), 1);
    assert_eq!(answer.authority[0].record_type, "SOA");
}

#[tokio::test]
async fn test_empty_object_is_empty_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let answer = client_for(&server).txt_lookup("statdns.net").await.unwrap();
    assert_eq!(answer, Answer::default());
}

#[tokio::test]
async fn test_truncated_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"question":[{"name":"#))
        .mount(&server)
        .await;

    let err = client_for(&server).a_lookup("example.com").await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_html_error_page_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(502).set_body_string("<html><body>Bad Gateway</body></html>"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).a_lookup("example.com").await.unwrap_err();
    assert!(err.is_decode());
    assert!(err.as_transport().is_none());
}

#[tokio::test]
async fn test_connection_closed_mid_body_is_transport_error() {
    // Promises 100 bytes, sends a few, then hangs up.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 100\r\n\
                  \r\n\
                  {\"question\":[",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = RrdaClient::with_base_url(format!("http://{addr}")).unwrap();
    let err = client.a_lookup("example.com").await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_transport());
    assert!(!err.is_decode());
    assert!(matches!(err.as_transport(), Some(TransportError::Body { .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1.
    let client = RrdaClient::with_base_url("http://127.0.0.1:1/").unwrap();
    let err = client.a_lookup("example.com").await.unwrap_err();

    let transport = err.as_transport().expect("expected transport error");
    assert_eq!(transport.url(), Some("http://127.0.0.1:1/example.com/a"));
}

#[tokio::test]
async fn test_request_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(EXAMPLE_ANSWER, "application/json")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request("example.com", RecordType::A)
        .timeout(Duration::from_millis(100))
        .send()
        .await
        .unwrap_err();

    assert!(err.as_transport().is_some_and(|e| e.is_timeout()));
}

#[tokio::test]
async fn test_client_timeout_applies_to_lookups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(EXAMPLE_ANSWER, "application/json")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = RrdaClient::builder(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .expect("Failed to build client");

    let err = client.a_lookup("example.com").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::header("user-agent", "statdns-check/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RrdaClient::builder(server.uri())
        .user_agent("statdns-check/2.0")
        .build()
        .expect("Failed to build client");

    client.a_lookup("example.com").await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clients_with_different_bases_run_concurrently() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(path("/example.com/a"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EXAMPLE_ANSWER, "application/json"))
        .expect(1)
        .mount(&first)
        .await;
    Mock::given(path("/example.com/aaaa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_only("example.com.", "AAAA")))
        .expect(1)
        .mount(&second)
        .await;

    let a = client_for(&first);
    let b = client_for(&second);

    let (ra, rb) = tokio::join!(a.a_lookup("example.com"), b.aaaa_lookup("example.com"));

    assert_eq!(ra.unwrap().answer.len(), 1);
    assert_eq!(rb.unwrap().question[0].record_type, "AAAA");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cloned_client_shared_across_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EXAMPLE_ANSWER, "application/json"))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.a_lookup("example.com").await })
        })
        .collect();

    for handle in handles {
        let answer = handle.await.unwrap().unwrap();
        assert_eq!(answer.answer_rdata().next(), Some("93.184.216.34"));
    }
}

#[tokio::test]
async fn test_request_url_matches_sent_path() {
    let server = MockServer::start().await;
    Mock::given(path("/x/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = client.request("8.8.8.8", Endpoint::Reverse);
    assert_eq!(request.url(), format!("{}/x/8.8.8.8", server.uri()));

    request.send().await.unwrap();
}
