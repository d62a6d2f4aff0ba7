pub mod bar;
pub mod interval;
pub mod request_params;
