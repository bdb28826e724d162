use chrono::Utc;
use validator::Validate;

use crate::{
    dto::orders::{OrderList, OrderVm, ShipOrderRequest, UpdateOrderDetailsRequest},
    error::{AppError, AppResult},
    models::{OrderHeader, OrderStatus, PaymentStatus},
    repository::{
        Include, OrderDetailFilter, OrderHeaderFilter, OrderHeaderRepository, Repository,
        UnitOfWork,
    },
};

/// Parses the `status` query value of the order list.
pub fn parse_status_filter(status: Option<&str>) -> AppResult<Option<OrderHeaderFilter>> {
    let filter = match status.map(str::to_ascii_lowercase).as_deref() {
        None | Some("") | Some("all") => None,
        Some("pending") => Some(OrderHeaderFilter::AwaitingPayment),
        Some("approved") => Some(OrderHeaderFilter::Status(OrderStatus::Approved)),
        Some("inprocess") => Some(OrderHeaderFilter::Status(OrderStatus::InProcess)),
        Some("shipped") | Some("completed") => Some(OrderHeaderFilter::Status(OrderStatus::Shipped)),
        Some("cancelled") => Some(OrderHeaderFilter::Status(OrderStatus::Cancelled)),
        Some(other) => {
            return Err(AppError::BadRequest(format!("unknown status filter {other}")));
        }
    };
    Ok(filter)
}

pub async fn list_orders<U: UnitOfWork>(
    uow: &U,
    filter: Option<OrderHeaderFilter>,
) -> AppResult<OrderList> {
    let items = uow.order_header().get_all(filter, Include::Related).await?;
    Ok(OrderList { items })
}

/// Header with its user plus the line items with their products. An unknown
/// id yields an empty view rather than an error.
pub async fn order_details<U: UnitOfWork>(uow: &U, order_id: i32) -> AppResult<OrderVm> {
    let order_header = uow
        .order_header()
        .get_first(OrderHeaderFilter::Id(order_id), Include::Related)
        .await?;
    let order_details = uow
        .order_detail()
        .get_all(
            Some(OrderDetailFilter::OrderHeaderId(order_id)),
            Include::Related,
        )
        .await?;

    Ok(OrderVm {
        order_header,
        order_details,
    })
}

pub async fn update_order_details<U: UnitOfWork>(
    uow: &U,
    order_id: i32,
    payload: UpdateOrderDetailsRequest,
) -> AppResult<OrderHeader> {
    payload.validate()?;

    let mut header = find_header(uow, order_id).await?;
    header.name = payload.name;
    header.phone_number = payload.phone_number;
    header.street_address = payload.street_address;
    header.city = payload.city;
    header.state = payload.state;
    header.postal_code = payload.postal_code;
    if let Some(carrier) = payload.carrier.filter(|c| !c.is_empty()) {
        header.carrier = Some(carrier);
    }
    if let Some(tracking_number) = payload.tracking_number.filter(|t| !t.is_empty()) {
        header.tracking_number = Some(tracking_number);
    }

    let header = uow.order_header().update(header).await?;
    uow.save().await?;
    tracing::info!(order_id, "order details updated");
    Ok(header)
}

pub async fn set_to_in_process<U: UnitOfWork>(uow: &U, order_id: i32) -> AppResult<()> {
    uow.order_header()
        .update_status(order_id, OrderStatus::InProcess, None)
        .await?;
    uow.save().await?;
    tracing::info!(order_id, status = %OrderStatus::InProcess, "order status changed");
    Ok(())
}

pub async fn set_to_shipped<U: UnitOfWork>(
    uow: &U,
    order_id: i32,
    payload: ShipOrderRequest,
) -> AppResult<OrderHeader> {
    payload.validate()?;

    let mut header = find_header(uow, order_id).await?;
    header.carrier = Some(payload.carrier);
    header.tracking_number = Some(payload.tracking_number);
    header.order_status = OrderStatus::Shipped.as_str().to_string();
    header.shipping_date = Some(Utc::now());

    let header = uow.order_header().update(header).await?;
    uow.save().await?;
    tracing::info!(order_id, status = %OrderStatus::Shipped, "order status changed");
    Ok(header)
}

/// Cancels the order. A payment that already went through is marked
/// refunded; issuing the refund itself is up to the payment provider.
pub async fn set_to_cancelled<U: UnitOfWork>(uow: &U, order_id: i32) -> AppResult<()> {
    let header = find_header(uow, order_id).await?;

    let payment_status = if header.payment_status == PaymentStatus::Approved.as_str() {
        PaymentStatus::Refunded
    } else {
        PaymentStatus::Cancelled
    };

    uow.order_header()
        .update_status(order_id, OrderStatus::Cancelled, Some(payment_status))
        .await?;
    uow.save().await?;
    tracing::info!(
        order_id,
        status = %OrderStatus::Cancelled,
        payment_status = %payment_status,
        "order status changed"
    );
    Ok(())
}

async fn find_header<U: UnitOfWork>(uow: &U, order_id: i32) -> AppResult<OrderHeader> {
    uow.order_header()
        .get_first(OrderHeaderFilter::Id(order_id), Include::Nothing)
        .await?
        .ok_or(AppError::NotFound)
}
