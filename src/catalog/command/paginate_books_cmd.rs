use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::books::query::{BookQuery, BookQueryParams};
use crate::books::query::paginate::{Page, PageInfo};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct PaginateBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl PaginateBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PaginateBooksCommandRequest {
    #[serde(flatten)]
    pub(crate) params: BookQueryParams,
}

impl PaginateBooksCommandRequest {
    pub fn new(params: BookQueryParams) -> Self {
        Self {
            params,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginateBooksCommandResponse {
    pub success: bool,
    pub data: Vec<BookDto>,
    pub page_info: PageInfo,
}

impl From<Page<BookDto>> for PaginateBooksCommandResponse {
    fn from(page: Page<BookDto>) -> Self {
        Self {
            success: true,
            data: page.records,
            page_info: page.page_info,
        }
    }
}

#[async_trait]
impl Command<PaginateBooksCommandRequest, PaginateBooksCommandResponse> for PaginateBooksCommand {
    async fn execute(&self, req: PaginateBooksCommandRequest) -> Result<PaginateBooksCommandResponse, CommandError> {
        let query = BookQuery::parse(&req.params)?;
        let page = req.params.page_request();
        self.catalog_service.paginate_books(&query, &page).await
            .map_err(CommandError::from).map(PaginateBooksCommandResponse::from)
    }
}
