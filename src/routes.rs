use axum::{
    routing::{delete, get, post, put},
    Router,
};
use crate::authors::controller::list_authors;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, paginate_books, remove_book, root, update_book};
use crate::core::controller::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/books", get(list_books))
        .route("/books/paginated", get(paginate_books))
        .route("/books/add", post(add_book))
        .route("/books/update/:id", put(update_book))
        .route("/books/delete/:id", delete(remove_book))
        .route("/books/:id", get(find_book_by_id))
        .route("/authors", get(list_authors));
    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .with_state(state)
}
