//! Materialization tests: records load on first access, exactly once,
//! and retry after a failed load

mod common;

use common::*;
use dblp_client::DblpError;
use tracing_test::traced_test;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_no_request_until_field_is_read() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 0).await;
    mount_publication(&mock_server, KNUTH74_KEY, ARTICLE_XML, 0).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);
    let publication = client.publication(KNUTH74_KEY);

    // Identity fields never trigger a load
    assert_eq!(author.urlpt(), LUONGO_URLPT);
    assert_eq!(publication.key(), KNUTH74_KEY);
    assert!(!author.is_loaded());
    assert!(!publication.is_loaded());
    assert_eq!(request_count(&mock_server).await, 0);
}

#[tokio::test]
#[traced_test]
async fn test_author_loads_once() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);

    for _ in 0..5 {
        assert_eq!(author.name().await.unwrap(), "Matt Luongo");
        author.homepages().await.unwrap();
        author.get("homonyms").await.unwrap();
    }
    assert!(author.is_loaded());
}

#[tokio::test]
#[traced_test]
async fn test_publication_loads_once() {
    let mock_server = MockServer::start().await;
    mount_publication(&mock_server, KNUTH74_KEY, ARTICLE_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let publication = client.publication(KNUTH74_KEY);

    for _ in 0..5 {
        assert_eq!(publication.year().await.unwrap(), 1974);
        publication.title().await.unwrap();
        publication.get("citations").await.unwrap();
    }
}

#[tokio::test]
#[traced_test]
async fn test_concurrent_reads_share_one_load() {
    let mock_server = MockServer::start().await;
    mount_publication(&mock_server, KNUTH74_KEY, ARTICLE_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let publication = client.publication(KNUTH74_KEY);

    let (year, title, pages) = tokio::join!(
        publication.year(),
        publication.title(),
        publication.pages()
    );
    assert_eq!(year.unwrap(), 1974);
    assert_eq!(title.unwrap(), Some("Computer Programming as an Art."));
    assert_eq!(pages.unwrap(), Some("667-673"));
}

#[tokio::test]
#[traced_test]
async fn test_unknown_field_rejected_before_and_after_load() {
    let mock_server = MockServer::start().await;
    mount_publication(&mock_server, KNUTH74_KEY, ARTICLE_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let publication = client.publication(KNUTH74_KEY);

    let err = publication.get("abstract").await.unwrap_err();
    assert!(matches!(err, DblpError::UnknownAttribute { .. }));
    assert_eq!(request_count(&mock_server).await, 0);

    publication.load().await.unwrap();

    let err = publication.get("abstract").await.unwrap_err();
    assert!(matches!(err, DblpError::UnknownAttribute { .. }));
    assert_eq!(request_count(&mock_server).await, 1);
}

#[tokio::test]
#[traced_test]
async fn test_retry_after_transport_failure() {
    let mock_server = MockServer::start().await;

    // First request fails, later ones succeed
    Mock::given(method("GET"))
        .and(path(publication_path(KNUTH74_KEY)))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_publication(&mock_server, KNUTH74_KEY, ARTICLE_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let publication = client.publication(KNUTH74_KEY);

    let err = publication.year().await.unwrap_err();
    assert!(matches!(err, DblpError::ApiError { status: 503, .. }));
    assert!(err.is_transport());
    assert!(!publication.is_loaded());
    assert_eq!(publication.xml(), None);

    assert_eq!(publication.year().await.unwrap(), 1974);
    assert!(publication.is_loaded());
    assert_eq!(
        publication.authors().await.unwrap(),
        ["Donald E. Knuth"]
    );
    assert_eq!(publication.xml(), Some(ARTICLE_XML));
}

#[tokio::test]
#[traced_test]
async fn test_author_retry_after_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(person_path(LUONGO_URLPT)))
        .respond_with(xml_response("<dblpperson><dblpkey>"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);

    assert!(author.name().await.unwrap_err().is_parse());
    assert!(!author.is_loaded());

    assert_eq!(author.name().await.unwrap(), "Matt Luongo");
    assert_eq!(author.publications().await.unwrap().len(), 2);
}
