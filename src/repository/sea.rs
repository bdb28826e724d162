use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    entity::{
        ApplicationUsers, Categories, OrderDetails, OrderHeaders, Products,
        application_users::Model as UserModel,
        categories::{self, Column as CategoryCol, Model as CategoryModel},
        order_details::{self, Column as DetailCol, Model as DetailModel},
        order_headers::{self, Column as HeaderCol, Model as HeaderModel},
        products::Model as ProductModel,
    },
    error::{AppError, AppResult},
    models::{
        ApplicationUser, Category, OrderDetail, OrderHeader, OrderStatus, PaymentStatus, Product,
    },
};

use super::{
    CategoryFilter, CategoryRepository, Include, OrderDetailFilter, OrderDetailRepository,
    OrderHeaderFilter, OrderHeaderRepository, Repository, UnitOfWork,
};

/// The transaction shared by all repositories of one unit of work. The slot
/// is `None` after a commit; the next repository call begins a new one.
#[derive(Clone)]
struct Session {
    conn: DatabaseConnection,
    txn: Arc<Mutex<Option<DatabaseTransaction>>>,
}

impl Session {
    async fn lock(&self) -> AppResult<MutexGuard<'_, Option<DatabaseTransaction>>> {
        let mut guard = self.txn.lock().await;
        if guard.is_none() {
            *guard = Some(self.conn.begin().await?);
        }
        Ok(guard)
    }
}

fn open(txn: &Option<DatabaseTransaction>) -> AppResult<&DatabaseTransaction> {
    txn.as_ref().ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("unit of work has no open transaction"))
    })
}

fn not_updated(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => other.into(),
    }
}

/// Database-backed unit of work. Every repository call runs inside one
/// transaction; [`UnitOfWork::save`] commits it and later calls run in a
/// fresh one. Dropping the unit of work without saving rolls back.
pub struct SeaUnitOfWork {
    session: Session,
    category: SeaCategoryRepository,
    order_header: SeaOrderHeaderRepository,
    order_detail: SeaOrderDetailRepository,
}

impl SeaUnitOfWork {
    pub async fn begin(conn: &DatabaseConnection) -> AppResult<Self> {
        let txn = conn.begin().await?;
        let session = Session {
            conn: conn.clone(),
            txn: Arc::new(Mutex::new(Some(txn))),
        };
        Ok(Self {
            category: SeaCategoryRepository {
                session: session.clone(),
            },
            order_header: SeaOrderHeaderRepository {
                session: session.clone(),
            },
            order_detail: SeaOrderDetailRepository {
                session: session.clone(),
            },
            session,
        })
    }
}

#[async_trait]
impl UnitOfWork for SeaUnitOfWork {
    type Category = SeaCategoryRepository;
    type OrderHeader = SeaOrderHeaderRepository;
    type OrderDetail = SeaOrderDetailRepository;

    fn category(&self) -> &Self::Category {
        &self.category
    }

    fn order_header(&self) -> &Self::OrderHeader {
        &self.order_header
    }

    fn order_detail(&self) -> &Self::OrderDetail {
        &self.order_detail
    }

    async fn save(&self) -> AppResult<()> {
        // Nothing ran since the last commit.
        let Some(txn) = self.session.txn.lock().await.take() else {
            return Ok(());
        };
        txn.commit().await?;
        tracing::debug!("unit of work committed");
        Ok(())
    }
}

pub struct SeaCategoryRepository {
    session: Session,
}

#[async_trait]
impl Repository<Category> for SeaCategoryRepository {
    type Filter = CategoryFilter;

    async fn get_all(
        &self,
        filter: Option<CategoryFilter>,
        _include: Include,
    ) -> AppResult<Vec<Category>> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let condition = filter.map(category_condition).unwrap_or_else(Condition::all);
        let rows = Categories::find()
            .filter(condition)
            .order_by_asc(CategoryCol::Id)
            .all(txn)
            .await?;
        Ok(rows.into_iter().map(category_from_entity).collect())
    }

    async fn get_first(
        &self,
        filter: CategoryFilter,
        _include: Include,
    ) -> AppResult<Option<Category>> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let row = Categories::find()
            .filter(category_condition(filter))
            .order_by_asc(CategoryCol::Id)
            .one(txn)
            .await?;
        Ok(row.map(category_from_entity))
    }

    async fn add(&self, entity: Category) -> AppResult<Category> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let active = categories::ActiveModel {
            id: NotSet,
            name: Set(entity.name),
            created_at: Set(entity.created_at.into()),
        };
        let model = active.insert(txn).await?;
        Ok(category_from_entity(model))
    }

    async fn update(&self, entity: Category) -> AppResult<Category> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let active = categories::ActiveModel {
            id: Unchanged(entity.id),
            name: Set(entity.name),
            created_at: Set(entity.created_at.into()),
        };
        let model = active.update(txn).await.map_err(not_updated)?;
        Ok(category_from_entity(model))
    }

    async fn delete(&self, entity: Category) -> AppResult<()> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let result = Categories::delete_by_id(entity.id).exec(txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

impl CategoryRepository for SeaCategoryRepository {}

pub struct SeaOrderHeaderRepository {
    session: Session,
}

#[async_trait]
impl Repository<OrderHeader> for SeaOrderHeaderRepository {
    type Filter = OrderHeaderFilter;

    async fn get_all(
        &self,
        filter: Option<OrderHeaderFilter>,
        include: Include,
    ) -> AppResult<Vec<OrderHeader>> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let condition = filter.map(header_condition).unwrap_or_else(Condition::all);
        let query = OrderHeaders::find()
            .filter(condition)
            .order_by_asc(HeaderCol::Id);

        let headers: Vec<OrderHeader> = match include {
            Include::Nothing => query
                .all(txn)
                .await?
                .into_iter()
                .map(|model| header_from_entity(model, None))
                .collect(),
            Include::Related => query
                .find_also_related(ApplicationUsers)
                .all(txn)
                .await?
                .into_iter()
                .map(|(model, user)| header_from_entity(model, user))
                .collect(),
        };
        Ok(headers)
    }

    async fn get_first(
        &self,
        filter: OrderHeaderFilter,
        include: Include,
    ) -> AppResult<Option<OrderHeader>> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let query = OrderHeaders::find()
            .filter(header_condition(filter))
            .order_by_asc(HeaderCol::Id);

        let header = match include {
            Include::Nothing => query
                .one(txn)
                .await?
                .map(|model| header_from_entity(model, None)),
            Include::Related => query
                .find_also_related(ApplicationUsers)
                .one(txn)
                .await?
                .map(|(model, user)| header_from_entity(model, user)),
        };
        Ok(header)
    }

    async fn add(&self, entity: OrderHeader) -> AppResult<OrderHeader> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let mut active = header_to_active(entity);
        active.id = NotSet;
        let model = active.insert(txn).await?;
        Ok(header_from_entity(model, None))
    }

    async fn update(&self, entity: OrderHeader) -> AppResult<OrderHeader> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let model = header_to_active(entity)
            .update(txn)
            .await
            .map_err(not_updated)?;
        Ok(header_from_entity(model, None))
    }

    async fn delete(&self, entity: OrderHeader) -> AppResult<()> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let result = OrderHeaders::delete_by_id(entity.id).exec(txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl OrderHeaderRepository for SeaOrderHeaderRepository {
    async fn update_status(
        &self,
        id: i32,
        order_status: OrderStatus,
        payment_status: Option<PaymentStatus>,
    ) -> AppResult<()> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let existing = OrderHeaders::find_by_id(id)
            .one(txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: order_headers::ActiveModel = existing.into();
        active.order_status = Set(order_status.as_str().to_string());
        if let Some(payment_status) = payment_status {
            active.payment_status = Set(payment_status.as_str().to_string());
        }
        active.update(txn).await.map_err(not_updated)?;
        Ok(())
    }
}

pub struct SeaOrderDetailRepository {
    session: Session,
}

#[async_trait]
impl Repository<OrderDetail> for SeaOrderDetailRepository {
    type Filter = OrderDetailFilter;

    async fn get_all(
        &self,
        filter: Option<OrderDetailFilter>,
        include: Include,
    ) -> AppResult<Vec<OrderDetail>> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let condition = filter.map(detail_condition).unwrap_or_else(Condition::all);
        let query = OrderDetails::find()
            .filter(condition)
            .order_by_asc(DetailCol::Id);

        let details: Vec<OrderDetail> = match include {
            Include::Nothing => query
                .all(txn)
                .await?
                .into_iter()
                .map(|model| detail_from_entity(model, None))
                .collect(),
            Include::Related => query
                .find_also_related(Products)
                .all(txn)
                .await?
                .into_iter()
                .map(|(model, product)| detail_from_entity(model, product))
                .collect(),
        };
        Ok(details)
    }

    async fn get_first(
        &self,
        filter: OrderDetailFilter,
        include: Include,
    ) -> AppResult<Option<OrderDetail>> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let query = OrderDetails::find()
            .filter(detail_condition(filter))
            .order_by_asc(DetailCol::Id);

        let detail = match include {
            Include::Nothing => query
                .one(txn)
                .await?
                .map(|model| detail_from_entity(model, None)),
            Include::Related => query
                .find_also_related(Products)
                .one(txn)
                .await?
                .map(|(model, product)| detail_from_entity(model, product)),
        };
        Ok(detail)
    }

    async fn add(&self, entity: OrderDetail) -> AppResult<OrderDetail> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let active = order_details::ActiveModel {
            id: NotSet,
            order_header_id: Set(entity.order_header_id),
            product_id: Set(entity.product_id),
            count: Set(entity.count),
            price: Set(entity.price),
        };
        let model = active.insert(txn).await?;
        Ok(detail_from_entity(model, None))
    }

    async fn update(&self, entity: OrderDetail) -> AppResult<OrderDetail> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let active = order_details::ActiveModel {
            id: Unchanged(entity.id),
            order_header_id: Set(entity.order_header_id),
            product_id: Set(entity.product_id),
            count: Set(entity.count),
            price: Set(entity.price),
        };
        let model = active.update(txn).await.map_err(not_updated)?;
        Ok(detail_from_entity(model, None))
    }

    async fn delete(&self, entity: OrderDetail) -> AppResult<()> {
        let guard = self.session.lock().await?;
        let txn = open(&guard)?;
        let result = OrderDetails::delete_by_id(entity.id).exec(txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

impl OrderDetailRepository for SeaOrderDetailRepository {}

fn category_condition(filter: CategoryFilter) -> Condition {
    match filter {
        CategoryFilter::Id(id) => Condition::all().add(CategoryCol::Id.eq(id)),
    }
}

fn header_condition(filter: OrderHeaderFilter) -> Condition {
    match filter {
        OrderHeaderFilter::Id(id) => Condition::all().add(HeaderCol::Id.eq(id)),
        OrderHeaderFilter::Status(status) => {
            Condition::all().add(HeaderCol::OrderStatus.eq(status.as_str()))
        }
        OrderHeaderFilter::AwaitingPayment => Condition::any()
            .add(HeaderCol::OrderStatus.eq(OrderStatus::Pending.as_str()))
            .add(HeaderCol::PaymentStatus.eq(PaymentStatus::ApprovedForDelayedPayment.as_str())),
    }
}

fn detail_condition(filter: OrderDetailFilter) -> Condition {
    match filter {
        OrderDetailFilter::OrderHeaderId(id) => {
            Condition::all().add(DetailCol::OrderHeaderId.eq(id))
        }
    }
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn user_from_entity(model: UserModel) -> ApplicationUser {
    ApplicationUser {
        id: model.id,
        name: model.name,
        email: model.email,
        phone_number: model.phone_number,
        street_address: model.street_address,
        city: model.city,
        state: model.state,
        postal_code: model.postal_code,
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        image_url: model.image_url,
        category_id: model.category_id,
    }
}

fn header_from_entity(model: HeaderModel, user: Option<UserModel>) -> OrderHeader {
    OrderHeader {
        id: model.id,
        application_user_id: model.application_user_id,
        application_user: user.map(user_from_entity),
        order_date: model.order_date.with_timezone(&Utc),
        shipping_date: model.shipping_date.map(|dt| dt.with_timezone(&Utc)),
        order_total: model.order_total,
        order_status: model.order_status,
        payment_status: model.payment_status,
        tracking_number: model.tracking_number,
        carrier: model.carrier,
        payment_date: model.payment_date.map(|dt| dt.with_timezone(&Utc)),
        name: model.name,
        phone_number: model.phone_number,
        street_address: model.street_address,
        city: model.city,
        state: model.state,
        postal_code: model.postal_code,
    }
}

fn header_to_active(header: OrderHeader) -> order_headers::ActiveModel {
    order_headers::ActiveModel {
        id: Unchanged(header.id),
        application_user_id: Set(header.application_user_id),
        order_date: Set(header.order_date.into()),
        shipping_date: Set(header.shipping_date.map(Into::into)),
        order_total: Set(header.order_total),
        order_status: Set(header.order_status),
        payment_status: Set(header.payment_status),
        tracking_number: Set(header.tracking_number),
        carrier: Set(header.carrier),
        payment_date: Set(header.payment_date.map(Into::into)),
        name: Set(header.name),
        phone_number: Set(header.phone_number),
        street_address: Set(header.street_address),
        city: Set(header.city),
        state: Set(header.state),
        postal_code: Set(header.postal_code),
    }
}

fn detail_from_entity(model: DetailModel, product: Option<ProductModel>) -> OrderDetail {
    OrderDetail {
        id: model.id,
        order_header_id: model.order_header_id,
        product_id: model.product_id,
        product: product.map(product_from_entity),
        count: model.count,
        price: model.price,
    }
}
