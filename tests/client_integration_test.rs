use bookstore_api::{load_catalog, AppState, BookstoreError, MemoryUserRegistry, QueryClient};
use httpmock::prelude::*;

#[tokio::test]
async fn test_all_books_against_mock_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "1": { "title": "T1", "author": "A1", "reviews": {} },
                "2": { "title": "T2", "author": "A2", "reviews": {} }
            }));
    });

    let client = QueryClient::new(&server.base_url()).unwrap();
    let catalog = client.all_books().await.unwrap();

    mock.assert();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog["1"].title, "T1");
}

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/title/Nothing");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "message": "No books found for this title" }));
    });

    let client = QueryClient::new(&server.base_url()).unwrap();
    let err = client.books_by_title("Nothing").await.unwrap_err();

    assert!(matches!(err, BookstoreError::Api { .. }));
    assert_eq!(err.to_string(), "No books found for this title");
}

/// Full loop: the outbound client against the real server.
#[tokio::test]
async fn test_client_round_trip_against_real_server() {
    let state = AppState::new(load_catalog(None).unwrap(), MemoryUserRegistry::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        bookstore_api::server::serve(listener, state).await.unwrap();
    });

    let client = QueryClient::new(&format!("http://{}", addr)).unwrap();

    let catalog = client.all_books().await.unwrap();
    assert_eq!(catalog.len(), 10);

    let book = client.book_by_isbn("8").await.unwrap();
    assert_eq!(book.title, "Pride and Prejudice");

    // Spaces in the author segment are percent-encoded by the client.
    let matches = client
        .books_by_author("Hans Christian Andersen")
        .await
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].isbn, "2");

    let err = client.book_by_isbn("9999").await.unwrap_err();
    assert_eq!(err.to_string(), "Book not found");

    let err = client.books_by_title("No Such Title").await.unwrap_err();
    assert_eq!(err.to_string(), "No books found for this title");
}
