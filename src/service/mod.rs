pub mod message;
pub mod s3;
