//! In-memory implementations of the repository traits.
//!
//! Each fake applies changes immediately and counts the calls made to it, so
//! tests can check both the resulting state and how often a repository or
//! `save` was hit.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shopping_cart_admin::{
    error::{AppError, AppResult},
    models::{
        ApplicationUser, Category, OrderDetail, OrderHeader, OrderStatus, PaymentStatus, Product,
    },
    repository::{
        CategoryFilter, CategoryRepository, Include, OrderDetailFilter, OrderDetailRepository,
        OrderHeaderFilter, OrderHeaderRepository, Repository, UnitOfWork,
    },
};

#[derive(Debug, Default)]
pub struct Counter(AtomicUsize);

impl Counter {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct FakeCategoryRepository {
    rows: Mutex<Vec<Category>>,
    pub adds: Counter,
    pub updates: Counter,
    pub deletes: Counter,
}

impl FakeCategoryRepository {
    pub fn rows(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }
}

fn category_matches(filter: &CategoryFilter, category: &Category) -> bool {
    match filter {
        CategoryFilter::Id(id) => category.id == *id,
    }
}

#[async_trait]
impl Repository<Category> for FakeCategoryRepository {
    type Filter = CategoryFilter;

    async fn get_all(
        &self,
        filter: Option<CategoryFilter>,
        _include: Include,
    ) -> AppResult<Vec<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|c| filter.as_ref().is_none_or(|f| category_matches(f, c)))
            .cloned()
            .collect())
    }

    async fn get_first(
        &self,
        filter: CategoryFilter,
        _include: Include,
    ) -> AppResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| category_matches(&filter, c)).cloned())
    }

    async fn add(&self, mut entity: Category) -> AppResult<Category> {
        self.adds.hit();
        let mut rows = self.rows.lock().unwrap();
        entity.id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Category) -> AppResult<Category> {
        self.updates.hit();
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|c| c.id == entity.id)
            .ok_or(AppError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, entity: Category) -> AppResult<()> {
        self.deletes.hit();
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != entity.id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

impl CategoryRepository for FakeCategoryRepository {}

#[derive(Default)]
pub struct FakeOrderHeaderRepository {
    rows: Mutex<Vec<OrderHeader>>,
    users: Vec<ApplicationUser>,
    pub updates: Counter,
    pub status_updates: Mutex<Vec<(i32, OrderStatus, Option<PaymentStatus>)>>,
}

impl FakeOrderHeaderRepository {
    pub fn rows(&self) -> Vec<OrderHeader> {
        self.rows.lock().unwrap().clone()
    }

    pub fn find(&self, id: i32) -> Option<OrderHeader> {
        self.rows().into_iter().find(|h| h.id == id)
    }

    fn load(&self, mut header: OrderHeader, include: Include) -> OrderHeader {
        header.application_user = match include {
            Include::Nothing => None,
            Include::Related => self
                .users
                .iter()
                .find(|u| u.id == header.application_user_id)
                .cloned(),
        };
        header
    }
}

fn header_matches(filter: &OrderHeaderFilter, header: &OrderHeader) -> bool {
    match filter {
        OrderHeaderFilter::Id(id) => header.id == *id,
        OrderHeaderFilter::Status(status) => header.order_status == status.as_str(),
        OrderHeaderFilter::AwaitingPayment => {
            header.order_status == OrderStatus::Pending.as_str()
                || header.payment_status == PaymentStatus::ApprovedForDelayedPayment.as_str()
        }
    }
}

#[async_trait]
impl Repository<OrderHeader> for FakeOrderHeaderRepository {
    type Filter = OrderHeaderFilter;

    async fn get_all(
        &self,
        filter: Option<OrderHeaderFilter>,
        include: Include,
    ) -> AppResult<Vec<OrderHeader>> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|h| filter.as_ref().is_none_or(|f| header_matches(f, h)))
            .map(|h| self.load(h, include))
            .collect())
    }

    async fn get_first(
        &self,
        filter: OrderHeaderFilter,
        include: Include,
    ) -> AppResult<Option<OrderHeader>> {
        Ok(self
            .rows()
            .into_iter()
            .find(|h| header_matches(&filter, h))
            .map(|h| self.load(h, include)))
    }

    async fn add(&self, mut entity: OrderHeader) -> AppResult<OrderHeader> {
        let mut rows = self.rows.lock().unwrap();
        entity.id = rows.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: OrderHeader) -> AppResult<OrderHeader> {
        self.updates.hit();
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|h| h.id == entity.id)
            .ok_or(AppError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, entity: OrderHeader) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|h| h.id != entity.id);
        Ok(())
    }
}

#[async_trait]
impl OrderHeaderRepository for FakeOrderHeaderRepository {
    async fn update_status(
        &self,
        id: i32,
        order_status: OrderStatus,
        payment_status: Option<PaymentStatus>,
    ) -> AppResult<()> {
        self.status_updates
            .lock()
            .unwrap()
            .push((id, order_status, payment_status));
        let mut rows = self.rows.lock().unwrap();
        let header = rows
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(AppError::NotFound)?;
        header.order_status = order_status.as_str().to_string();
        if let Some(payment_status) = payment_status {
            header.payment_status = payment_status.as_str().to_string();
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeOrderDetailRepository {
    rows: Mutex<Vec<OrderDetail>>,
    products: Vec<Product>,
}

impl FakeOrderDetailRepository {
    fn load(&self, mut detail: OrderDetail, include: Include) -> OrderDetail {
        detail.product = match include {
            Include::Nothing => None,
            Include::Related => self
                .products
                .iter()
                .find(|p| p.id == detail.product_id)
                .cloned(),
        };
        detail
    }
}

fn detail_matches(filter: &OrderDetailFilter, detail: &OrderDetail) -> bool {
    match filter {
        OrderDetailFilter::OrderHeaderId(id) => detail.order_header_id == *id,
    }
}

#[async_trait]
impl Repository<OrderDetail> for FakeOrderDetailRepository {
    type Filter = OrderDetailFilter;

    async fn get_all(
        &self,
        filter: Option<OrderDetailFilter>,
        include: Include,
    ) -> AppResult<Vec<OrderDetail>> {
        let rows = self.rows.lock().unwrap().clone();
        Ok(rows
            .into_iter()
            .filter(|d| filter.as_ref().is_none_or(|f| detail_matches(f, d)))
            .map(|d| self.load(d, include))
            .collect())
    }

    async fn get_first(
        &self,
        filter: OrderDetailFilter,
        include: Include,
    ) -> AppResult<Option<OrderDetail>> {
        let rows = self.rows.lock().unwrap().clone();
        Ok(rows
            .into_iter()
            .find(|d| detail_matches(&filter, d))
            .map(|d| self.load(d, include)))
    }

    async fn add(&self, mut entity: OrderDetail) -> AppResult<OrderDetail> {
        let mut rows = self.rows.lock().unwrap();
        entity.id = rows.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: OrderDetail) -> AppResult<OrderDetail> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|d| d.id == entity.id)
            .ok_or(AppError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, entity: OrderDetail) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|d| d.id != entity.id);
        Ok(())
    }
}

impl OrderDetailRepository for FakeOrderDetailRepository {}

#[derive(Default)]
pub struct FakeUnitOfWork {
    pub category: FakeCategoryRepository,
    pub order_header: FakeOrderHeaderRepository,
    pub order_detail: FakeOrderDetailRepository,
    pub saves: Counter,
}

impl FakeUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.category.rows.lock().unwrap() = categories;
        self
    }

    pub fn with_users(mut self, users: Vec<ApplicationUser>) -> Self {
        self.order_header.users = users;
        self
    }

    pub fn with_order_headers(self, headers: Vec<OrderHeader>) -> Self {
        *self.order_header.rows.lock().unwrap() = headers;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.order_detail.products = products;
        self
    }

    pub fn with_order_details(self, details: Vec<OrderDetail>) -> Self {
        *self.order_detail.rows.lock().unwrap() = details;
        self
    }
}

#[async_trait]
impl UnitOfWork for FakeUnitOfWork {
    type Category = FakeCategoryRepository;
    type OrderHeader = FakeOrderHeaderRepository;
    type OrderDetail = FakeOrderDetailRepository;

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
        self.saves.hit();
        Ok(())
    }
}
