//! Author record tests using mocked HTTP responses

mod common;

use common::*;
use dblp_client::{AuthorField, FieldValue};
use tracing_test::traced_test;
use wiremock::MockServer;

#[tokio::test]
#[traced_test]
async fn test_author_fields() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);

    assert_eq!(author.name().await.unwrap(), "Matt Luongo");
    assert_eq!(author.homepages().await.unwrap(), ["homepages/117/4032"]);
    assert_eq!(author.homonyms().await.unwrap(), ["homepages/117/4032-1"]);

    let keys: Vec<&str> = author
        .publications()
        .await
        .unwrap()
        .iter()
        .map(|p| p.key())
        .collect();
    assert_eq!(keys, vec!["journals/corr/LuongoR13", "conf/www/LuongoR12"]);
}

#[tokio::test]
#[traced_test]
async fn test_author_publications_are_unloaded_stubs() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 1).await;
    mount_publication(&mock_server, LUONGO12_KEY, INPROCEEDINGS_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);
    let publications = author.publications().await.unwrap();

    assert!(publications.iter().all(|p| !p.is_loaded()));
    assert_eq!(request_count(&mock_server).await, 1);

    // Materializing one publication leaves the other untouched
    let www = &publications[1];
    assert_eq!(www.title().await.unwrap(), Some("Scholarly Graphs."));
    assert!(www.is_loaded());
    assert!(!publications[0].is_loaded());
    assert_eq!(request_count(&mock_server).await, 2);
}

#[tokio::test]
#[traced_test]
async fn test_author_get_by_name() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);

    assert_eq!(
        author.get("name").await.unwrap(),
        FieldValue::Text("Matt Luongo")
    );

    match author.field(AuthorField::Publications).await.unwrap() {
        FieldValue::Publications(publications) => assert_eq!(publications.len(), 2),
        other => panic!("unexpected value: {other:?}"),
    }

    let homonyms = author.get("homonyms").await.unwrap();
    assert_eq!(
        homonyms.as_text_list().unwrap(),
        ["homepages/117/4032-1".to_string()]
    );
}

#[tokio::test]
#[traced_test]
async fn test_author_retains_raw_xml() {
    let mock_server = MockServer::start().await;
    mount_person(&mock_server, LUONGO_URLPT, PERSON_XML, 1).await;

    let client = create_mock_client(&mock_server);
    let author = client.author(LUONGO_URLPT);

    assert_eq!(author.xml(), None);
    author.load().await.unwrap();
    assert_eq!(author.xml(), Some(PERSON_XML));
}
