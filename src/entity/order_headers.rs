use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_headers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_user_id: Uuid,
    pub order_date: DateTimeWithTimeZone,
    pub shipping_date: Option<DateTimeWithTimeZone>,
    pub order_total: i64,
    pub order_status: String,
    pub payment_status: String,
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
    pub payment_date: Option<DateTimeWithTimeZone>,
    pub name: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_users::Entity",
        from = "Column::ApplicationUserId",
        to = "super::application_users::Column::Id"
    )]
    ApplicationUsers,
    #[sea_orm(has_many = "super::order_details::Entity")]
    OrderDetails,
}

impl Related<super::application_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationUsers.def()
    }
}

impl Related<super::order_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
