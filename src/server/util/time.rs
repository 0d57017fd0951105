use chrono::{DateTime, Utc};

/// Same layout sqlite uses for `CURRENT_TIMESTAMP`, so server-stamped and store-defaulted rows sort together.
pub(crate) const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::get_utc_now;
    #[cfg(test)]
    pub use super::mock_chrono::{get_utc_now, set_mock_now};
}

pub(crate) fn format_order_date(ts: DateTime<Utc>) -> String {
    ts.format(ORDER_DATE_FORMAT).to_string()
}


#[cfg(not(test))]
pub fn get_utc_now() -> DateTime<chrono::Utc> {
    chrono::Utc::now()
}
