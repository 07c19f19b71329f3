pub mod request_meta;
