//! Error taxonomy tests using mocked HTTP responses

mod common;

use common::*;
use dblp_client::{ClientConfig, DblpClient, DblpError, ErrorKind};
use rstest::rstest;
use tracing_test::traced_test;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[rstest]
#[case(404)]
#[case(500)]
#[case(429)]
#[tokio::test]
async fn test_http_status_is_transport_error(#[case] status: u16) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(person_path(LUONGO_URLPT)))
        .respond_with(ResponseTemplate::new(status))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.author(LUONGO_URLPT).name().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        DblpError::ApiError { status: got, .. } => assert_eq!(got, status),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on the discard port
    let client = DblpClient::with_config(ClientConfig::new().with_base_url("http://127.0.0.1:9"));

    let err = client.publication(KNUTH74_KEY).title().await.unwrap_err();
    assert!(matches!(err, DblpError::RequestError(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
#[traced_test]
async fn test_empty_publication_document_is_record_not_found() {
    let mock_server = MockServer::start().await;
    mount_publication(&mock_server, "no/such/Key", EMPTY_PUBLICATION_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let err = client.publication("no/such/Key").year().await.unwrap_err();

    assert!(matches!(err, DblpError::RecordNotFound { ref key } if key == "no/such/Key"));
    assert_eq!(err.kind(), ErrorKind::RecordNotFound);
}

#[tokio::test]
#[traced_test]
async fn test_missing_year_is_parse_error() {
    let mock_server = MockServer::start().await;
    let xml = r#"<dblp><article key="k/x/Y"><title>Undated</title></article></dblp>"#;
    mount_publication(&mock_server, "k/x/Y", xml, 1).await;

    let client = create_mock_client(&mock_server);
    let publication = client.publication("k/x/Y");

    // Any field read surfaces the failure, not only `year`
    let err = publication.title().await.unwrap_err();
    assert!(matches!(
        err,
        DblpError::MissingField {
            record: "publication",
            field: "year"
        }
    ));
    assert!(!publication.is_loaded());
}

#[tokio::test]
#[traced_test]
async fn test_author_without_name_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, "x/Anon", "<dblpperson/>", 1).await;

    let client = create_mock_client(&mock_server);
    let err = client.author("x/Anon").homepages().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
#[traced_test]
async fn test_malformed_search_response_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "broken", "<authors><author urlpt=\"a\">", 1).await;

    let client = create_mock_client(&mock_server);
    let err = client.search_authors("broken").await.unwrap_err();
    assert!(err.is_parse());
}

#[tokio::test]
#[traced_test]
async fn test_search_server_error_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/author"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.search_authors("anyone").await.unwrap_err();
    assert!(err.is_transport());
}
