pub mod category;
pub mod endpoint_spec;
pub mod error;
pub mod session;
pub mod test_case;
