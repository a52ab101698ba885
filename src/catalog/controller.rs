use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::query::BookQueryParams;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse, INVALID_BOOK_DATA};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::paginate_books_cmd::{PaginateBooksCommand, PaginateBooksCommandRequest, PaginateBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{INVALID_BOOK_UPDATE, UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, bad_request, INVALID_QUERY, json_to_server_error, parse_id, ServerError};

pub(crate) async fn root() -> &'static str {
    "book api!"
}

pub(crate) async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<BookQueryParams>, QueryRejection>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let Query(params) = query.map_err(|_| bad_request(INVALID_QUERY))?;
    let svc = factory::create_catalog_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new(params)).await?;
    Ok(Json(res))
}

pub(crate) async fn paginate_books(
    State(state): State<AppState>,
    query: Result<Query<BookQueryParams>, QueryRejection>) -> Result<Json<PaginateBooksCommandResponse>, ServerError> {
    let Query(params) = query.map_err(|_| bad_request(INVALID_QUERY))?;
    let svc = factory::create_catalog_service(&state);
    let res = PaginateBooksCommand::new(svc).execute(PaginateBooksCommandRequest::new(params)).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(parse_id(id.as_str())?);
    let svc = factory::create_catalog_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let Json(json) = json.map_err(|_| bad_request(INVALID_BOOK_DATA))?;
    let req: AddBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error(INVALID_BOOK_DATA))?;
    let svc = factory::create_catalog_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let id = parse_id(id.as_str())?;
    let Json(json) = json.map_err(|_| bad_request(INVALID_BOOK_UPDATE))?;
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error(INVALID_BOOK_UPDATE))?;
    req.id = id;
    let svc = factory::create_catalog_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(parse_id(id.as_str())?);
    let svc = factory::create_catalog_service(&state);
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
