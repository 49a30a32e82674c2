use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Number of books and authors present when the server starts.
pub const SEEDED_RECORDS: i32 = 10;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub page_count: i32,
    pub excerpt: String,
    pub publish_date: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub id_book: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Book {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && self.page_count >= 0 && looks_like_iso_date(&self.publish_date)
    }
}

impl Author {
    pub fn is_valid(&self) -> bool {
        self.id_book > 0 && !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }
}

/// `YYYY-MM-DD` prefix check; the time part is not inspected.
fn looks_like_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 10 {
        return false;
    }
    bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

#[derive(Debug, Default)]
pub struct Store {
    books: BTreeMap<i32, Book>,
    authors: BTreeMap<i32, Author>,
}

impl Store {
    pub fn seeded() -> Self {
        let mut store = Store::default();
        for id in 1..=SEEDED_RECORDS {
            store.books.insert(
                id,
                Book {
                    id,
                    title: format!("Book {id}"),
                    description: format!("Description of book {id}"),
                    page_count: id * 100,
                    excerpt: format!("Excerpt from book {id}"),
                    publish_date: "2024-01-01T00:00:00Z".to_string(),
                },
            );
            store.authors.insert(
                id,
                Author {
                    id,
                    id_book: id,
                    first_name: format!("First Name {id}"),
                    last_name: format!("Last Name {id}"),
                },
            );
        }
        store
    }
}

/// One past the highest id in use. `None` once `i32::MAX` is taken.
fn next_id<T>(records: &BTreeMap<i32, T>) -> Option<i32> {
    records.keys().next_back().copied().unwrap_or(0).checked_add(1)
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    let api = Router::new()
        .route("/Books", get(list_books).post(create_book))
        .route("/Books/{id}", get(get_book).put(update_book).delete(delete_book))
        .route("/Authors", get(list_authors).post(create_author))
        .route("/Authors/{id}", get(get_author).put(update_author).delete(delete_author))
        .with_state(db);
    Router::new().nest("/api/v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Ids that are not integers address nothing.
fn parse_id(raw: &str) -> Result<i32, StatusCode> {
    raw.parse().map_err(|_| StatusCode::NOT_FOUND)
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    Json(db.read().await.books.values().cloned().collect())
}

async fn get_book(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Book>, StatusCode> {
    let id = parse_id(&id)?;
    db.read().await.books.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_book(State(db): State<Db>, Json(mut book): Json<Book>) -> Result<Json<Book>, StatusCode> {
    if !book.is_valid() {
        tracing::debug!(title = %book.title, "rejecting invalid book");
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    if book.id <= 0 {
        book.id = next_id(&store.books).ok_or(StatusCode::CONFLICT)?;
    }
    store.books.insert(book.id, book.clone());
    Ok(Json(book))
}

async fn update_book(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(mut book): Json<Book>,
) -> Result<Json<Book>, StatusCode> {
    let id = parse_id(&id)?;
    if !book.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }
    book.id = id;
    db.write().await.books.insert(id, book.clone());
    Ok(Json(book))
}

async fn delete_book(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let Ok(id) = parse_id(&id) else {
        return StatusCode::NOT_FOUND;
    };
    match db.write().await.books.remove(&id) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

async fn list_authors(State(db): State<Db>) -> Json<Vec<Author>> {
    Json(db.read().await.authors.values().cloned().collect())
}

async fn get_author(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Author>, StatusCode> {
    let id = parse_id(&id)?;
    db.read().await.authors.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_author(State(db): State<Db>, Json(mut author): Json<Author>) -> Result<Json<Author>, StatusCode> {
    if !author.is_valid() {
        tracing::debug!(id_book = author.id_book, "rejecting invalid author");
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    if author.id <= 0 {
        author.id = next_id(&store.authors).ok_or(StatusCode::CONFLICT)?;
    }
    store.authors.insert(author.id, author.clone());
    Ok(Json(author))
}

async fn update_author(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(mut author): Json<Author>,
) -> Result<Json<Author>, StatusCode> {
    let id = parse_id(&id)?;
    if !author.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }
    author.id = id;
    db.write().await.authors.insert(id, author.clone());
    Ok(Json(author))
}

async fn delete_author(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let Ok(id) = parse_id(&id) else {
        return StatusCode::NOT_FOUND;
    };
    match db.write().await.authors.remove(&id) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}
