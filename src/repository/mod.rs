//! Data access behind traits.
//!
//! Services only see [`UnitOfWork`] and the per-entity repositories it hands
//! out; [`sea::SeaUnitOfWork`] is the database-backed implementation.

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Category, OrderDetail, OrderHeader, OrderStatus, PaymentStatus},
};

pub mod sea;

pub use sea::SeaUnitOfWork;

/// Whether related rows (user of a header, product of a detail) are loaded
/// along with the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Include {
    #[default]
    Nothing,
    Related,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFilter {
    Id(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderHeaderFilter {
    Id(i32),
    Status(OrderStatus),
    /// Orders still waiting on money: status Pending, or payment approved
    /// for delayed settlement.
    AwaitingPayment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderDetailFilter {
    OrderHeaderId(i32),
}

/// CRUD over one entity type.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + 'static,
{
    type Filter: Send + Sync + 'static;

    /// All rows, optionally restricted by `filter`, in id order.
    async fn get_all(&self, filter: Option<Self::Filter>, include: Include) -> AppResult<Vec<T>>;

    /// The first row matching `filter`, or `None`.
    async fn get_first(&self, filter: Self::Filter, include: Include) -> AppResult<Option<T>>;

    async fn add(&self, entity: T) -> AppResult<T>;

    /// Persists every column of `entity`. Fails with `NotFound` when no row
    /// has its id.
    async fn update(&self, entity: T) -> AppResult<T>;

    async fn delete(&self, entity: T) -> AppResult<()>;
}

pub trait CategoryRepository: Repository<Category, Filter = CategoryFilter> {}

#[async_trait]
pub trait OrderHeaderRepository: Repository<OrderHeader, Filter = OrderHeaderFilter> {
    /// Sets the order status, and the payment status when given, without
    /// touching any other column.
    async fn update_status(
        &self,
        id: i32,
        order_status: OrderStatus,
        payment_status: Option<PaymentStatus>,
    ) -> AppResult<()>;
}

pub trait OrderDetailRepository: Repository<OrderDetail, Filter = OrderDetailFilter> {}

/// One repository per entity type plus a single commit point.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Category: CategoryRepository;
    type OrderHeader: OrderHeaderRepository;
    type OrderDetail: OrderDetailRepository;

    fn category(&self) -> &Self::Category;
    fn order_header(&self) -> &Self::OrderHeader;
    fn order_detail(&self) -> &Self::OrderDetail;

    /// Commits everything done through the repositories since the last save.
    async fn save(&self) -> AppResult<()>;
}
