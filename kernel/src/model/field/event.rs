use rust_decimal::Decimal;

pub struct CreateField {
    pub field_name: String,
    pub owner: String,
    pub hourly_rate: Decimal,
    pub extra_time_rate: Option<Decimal>,
    pub allows_extra_time: bool,
    pub is_active: bool,
}
