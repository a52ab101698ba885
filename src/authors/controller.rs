use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use crate::authors::command::list_authors_cmd::{ListAuthorsCommand, ListAuthorsCommandRequest, ListAuthorsCommandResponse};
use crate::authors::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, bad_request, INVALID_QUERY, ServerError};

pub(crate) async fn list_authors(
    State(state): State<AppState>,
    query: Result<Query<ListAuthorsCommandRequest>, QueryRejection>) -> Result<Json<ListAuthorsCommandResponse>, ServerError> {
    let Query(req) = query.map_err(|_| bad_request(INVALID_QUERY))?;
    let svc = factory::create_author_service(&state);
    let res = ListAuthorsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
