//! Entity-agnostic request handler shared by every CRUD resource.
//!
//! `BaseController` implements the operation families each entity exposes: the
//! liveness echo, get, delete, delete-many, both search variants and save with
//! duplicate detection. Every operation returns a `ResponseEnvelope`; domain
//! failures and lower-layer errors alike end up as `success = false` plus a
//! message, so nothing here returns `Err`.

use std::marker::PhantomData;

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::api::{Operation, ResponseEnvelope},
    server::{
        data::repository::Repository,
        error::AppError,
        model::{
            context::ActorContext,
            record::{EntityForm, Record},
        },
        service::entity::{duplicate_message, EntityService},
        util::parse::parse_id,
    },
};

pub const RECORD_NOT_FOUND: &str = "Record not found";
pub const RECORDS_DELETED: &str = "Records Deleted Successfully";

/// Result key carrying the size of the page after the one returned.
pub const NEXT_LIST: &str = "nextList";

/// Result key carrying the page number a search resolved to.
pub const PAGE_NO: &str = "pageNo";

/// Generic request handler for one entity type.
///
/// `F` is the request form and `P` the persistence port of the form's record.
pub struct BaseController<F, P>
where
    F: EntityForm,
    P: Repository<Record = F::Record>,
{
    service: EntityService<P>,
    page_size: u64,
    form: PhantomData<fn() -> F>,
}

impl<F, P> BaseController<F, P>
where
    F: EntityForm,
    P: Repository<Record = F::Record>,
{
    pub fn new(repo: P, page_size: u64) -> Self {
        Self {
            service: EntityService::new(repo),
            page_size,
            form: PhantomData,
        }
    }

    /// Liveness echo naming the entity and the server time.
    pub fn get_default(&self) -> ResponseEnvelope {
        let mut res = ResponseEnvelope::new(true);
        res.add_data(format!(
            "I am okay {} --{}",
            <F::Record as Record>::label(),
            Utc::now()
        ));
        res
    }

    pub async fn get(&self, id: i32, ctx: &ActorContext) -> ResponseEnvelope {
        match self.service.find_by_id(id, ctx).await {
            Ok(Some(record)) => {
                let mut res = ResponseEnvelope::new(true);
                res.add_data(record.into_dto());
                res
            }
            Ok(None) => ResponseEnvelope::failure(RECORD_NOT_FOUND),
            Err(e) => failed("get", e),
        }
    }

    /// Deletes one record and returns it as data.
    pub async fn delete(&self, id: i32, ctx: &ActorContext) -> ResponseEnvelope {
        match self.service.delete(id, ctx).await {
            Ok(record) => {
                let mut res = ResponseEnvelope::new(true);
                res.add_data(record.into_dto());
                res
            }
            Err(e) => failed("delete", e),
        }
    }

    /// Deletes every id in order, then returns the refreshed page.
    ///
    /// The batch stops at the first id that fails to parse or delete. Deletions
    /// made before that point are kept; the envelope reports the failure only.
    pub async fn delete_many(
        &self,
        ids: &[String],
        page_no: i64,
        form: &F,
        ctx: &ActorContext,
    ) -> ResponseEnvelope {
        match self.try_delete_many(ids, page_no, form, ctx).await {
            Ok(records) => {
                let mut res = ResponseEnvelope::new(true);
                res.add_data(records);
                res.add_message(RECORDS_DELETED);
                res
            }
            Err(e) => failed("deleteMany", e),
        }
    }

    async fn try_delete_many(
        &self,
        ids: &[String],
        page_no: i64,
        form: &F,
        ctx: &ActorContext,
    ) -> Result<Vec<<F::Record as Record>::Dto>, AppError> {
        for id in ids {
            let id = parse_id(id)?;
            self.service.delete(id, ctx).await?;
        }

        self.page(&form.to_filter(), clamp_page(page_no), ctx).await
    }

    /// Search whose page is driven by the form's operation.
    ///
    /// The resolved page is written back into the form and reported under
    /// `pageNo` so the caller can send the form again as-is.
    pub async fn search(&self, form: &mut F, ctx: &ActorContext) -> ResponseEnvelope {
        let base = form.base_mut();
        base.page_no = resolve_page(base.page_no, base.operation());
        let page_no = base.page_no;

        match self.page(&form.to_filter(), page_no as u64, ctx).await {
            Ok(records) => {
                let mut res = ResponseEnvelope::new(true);
                res.add_data(records);
                res.add_result(PAGE_NO, page_no);
                res
            }
            Err(e) => failed("search", e),
        }
    }

    /// Search for an explicit page, with the size of the following page under `nextList`.
    pub async fn search_page(
        &self,
        form: &F,
        page_no: i64,
        ctx: &ActorContext,
    ) -> ResponseEnvelope {
        let page_no = clamp_page(page_no);
        let filter = form.to_filter();

        let result = async {
            let records = self.page(&filter, page_no, ctx).await?;
            let next = self
                .service
                .search(&filter, page_no + 1, self.page_size, ctx)
                .await?;
            Ok::<_, AppError>((records, next.len()))
        }
        .await;

        match result {
            Ok((records, next_len)) => {
                let mut res = ResponseEnvelope::new(true);
                res.add_data(records);
                res.add_result(NEXT_LIST, next_len);
                res
            }
            Err(e) => failed("search", e),
        }
    }

    /// Validates and persists the form, returning the record id as data.
    ///
    /// Field errors short-circuit before storage is touched. A natural key
    /// owned by another record is reported as `"<label> already exist"`.
    pub async fn save(&self, form: &F, ctx: &ActorContext) -> ResponseEnvelope {
        let errors = form.validate();
        if !errors.is_empty() {
            let mut res = ResponseEnvelope::new(false);
            res.add_input_errors(errors);
            return res;
        }

        let record = form.to_record();

        match self.persist(&record, ctx).await {
            Ok(id) => {
                let mut res = ResponseEnvelope::new(true);
                res.add_data(id);
                res
            }
            Err(AppError::Conflict(msg)) => {
                tracing::debug!(
                    "{} save rejected: {}",
                    <F::Record as Record>::label(),
                    msg
                );

                let mut res = ResponseEnvelope::failure(msg);
                if let Some(id) = record.persisted_id() {
                    res.add_data(id);
                }
                res
            }
            Err(e) => failed("save", e),
        }
    }

    async fn persist(&self, record: &F::Record, ctx: &ActorContext) -> Result<i32, AppError> {
        let key = <F::Record as Record>::unique_key();

        if let Some(id) = record.persisted_id() {
            let existing = self
                .service
                .find_by_unique_key(key, &record.unique_value(), ctx)
                .await?;
            if existing.is_some_and(|other| other.id() != Some(id)) {
                return Err(AppError::Conflict(duplicate_message::<F::Record>()));
            }

            self.service.update(record, ctx).await?;
            return Ok(id);
        }

        if !key.is_empty()
            && self
                .service
                .find_by_unique_key(key, &record.unique_value(), ctx)
                .await?
                .is_some()
        {
            return Err(AppError::Conflict(duplicate_message::<F::Record>()));
        }

        self.service.add(record, ctx).await
    }

    async fn page(
        &self,
        filter: &F::Record,
        page_no: u64,
        ctx: &ActorContext,
    ) -> Result<Vec<<F::Record as Record>::Dto>, AppError> {
        let records = self
            .service
            .search(filter, page_no, self.page_size, ctx)
            .await?;

        Ok(records.into_iter().map(<F::Record as Record>::into_dto).collect())
    }
}

/// Applies `Next`/`Previous` navigation to a page number, never going below 0.
pub fn resolve_page(page_no: i64, operation: Option<Operation>) -> i64 {
    let page_no = match operation {
        Some(Operation::Next) => page_no.saturating_add(1),
        Some(Operation::Previous) => page_no.saturating_sub(1),
        _ => page_no,
    };

    page_no.max(0)
}

fn clamp_page(page_no: i64) -> u64 {
    page_no.max(0) as u64
}

/// Failure envelope carrying the error's message.
fn failed(operation: &str, err: AppError) -> ResponseEnvelope {
    match &err {
        AppError::NotFound(_) | AppError::BadRequest(_) | AppError::Conflict(_) => {
            tracing::debug!("{} failed: {}", operation, err);
        }
        _ => tracing::error!("{} failed: {}", operation, err),
    }

    ResponseEnvelope::failure(err.to_string())
}
