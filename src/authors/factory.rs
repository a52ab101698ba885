use crate::authors::domain::AuthorService;
use crate::authors::domain::service::AuthorServiceImpl;
use crate::core::controller::AppState;

pub(crate) fn create_author_service(state: &AppState) -> Box<dyn AuthorService> {
    Box::new(AuthorServiceImpl::new(state.book_repository.clone()))
}
