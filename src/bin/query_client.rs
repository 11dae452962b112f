use bookstore_api::utils::error::Result;
use bookstore_api::QueryClient;

/// Walks the read endpoints of a running bookstore-api server.
/// Usage: query_client [base-url]   (defaults to http://localhost:5000)
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());

    println!("🔎 Querying bookstore API at {}", base_url);
    let client = QueryClient::new(&base_url)?;

    let catalog = client.all_books().await?;
    println!("📚 Catalog holds {} books", catalog.len());

    let book = client.book_by_isbn("1").await?;
    println!("  ISBN 1: {} by {}", book.title, book.author);

    let by_author = client.books_by_author("Unknown").await?;
    println!("  {} books with author \"Unknown\":", by_author.len());
    for hit in &by_author {
        println!("    - {} (ISBN {})", hit.book.title, hit.isbn);
    }

    let by_title = client.books_by_title("Fairy tales").await?;
    for hit in &by_title {
        println!("  \"Fairy tales\" found under ISBN {}", hit.isbn);
    }

    match client.book_by_isbn("does-not-exist").await {
        Ok(book) => println!("  Unexpected hit: {}", book.title),
        Err(e) => println!("  Missing ISBN reports: {}", e),
    }

    println!("✅ Done");
    Ok(())
}
