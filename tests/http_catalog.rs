use std::time::Duration;

use product_browser::{
    AppError, CatalogSource, Favorites, HttpCatalog, MemoryStore, PageView, ProductPage,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `body` with `status` to exactly one request and returns the URL to hit.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}/products?limit=100")
}

fn catalog(url: &str) -> HttpCatalog {
    HttpCatalog::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_products_from_the_envelope() {
    let url = serve_once(
        "200 OK",
        r#"{"products":[{"id":1,"title":"Essence Mascara","price":9.99,"rating":4.94,"category":"beauty","thumbnail":"t1"},{"id":2,"title":"Eyeshadow","price":19.99,"rating":3.28,"category":"beauty","thumbnail":"t2"}],"total":2,"skip":0,"limit":100}"#,
    )
    .await;
    let products = catalog(&url).fetch_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Essence Mascara");
    assert_eq!(products[1].price, 19.99);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let url = serve_once("500 Internal Server Error", "{}").await;
    let err = catalog(&url).fetch_products().await.unwrap_err();
    assert!(matches!(err, AppError::Status(500)));
    assert_eq!(err.to_string(), "Request failed: 500");
}

#[tokio::test]
async fn page_surfaces_the_failure_message() {
    let url = serve_once("404 Not Found", "{}").await;
    let mut page = ProductPage::new(Favorites::load(MemoryStore::new()).unwrap());
    page.load_from(&catalog(&url)).await;
    assert_eq!(page.view(), PageView::Error("Request failed: 404".into()));
    assert!(!page.is_loading());
}

#[tokio::test]
async fn missing_products_field_means_no_matches() {
    let url = serve_once("200 OK", r#"{"total":0}"#).await;
    let mut page = ProductPage::new(Favorites::load(MemoryStore::new()).unwrap());
    page.load_from(&catalog(&url)).await;
    assert_eq!(page.view(), PageView::NoMatches);
    assert_eq!(page.view().showing_label(), "Showing 0 products");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let url = serve_once("200 OK", "<html>").await;
    let err = catalog(&url).fetch_products().await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}
