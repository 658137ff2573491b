pub mod choose;
pub mod dispatch;
pub mod form;
pub mod respond;
pub mod responses;
pub mod schema;
pub mod shared;
