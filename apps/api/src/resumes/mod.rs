// Resume handles: upload, decode once, then address every operation by id.

pub mod handlers;
pub mod store;
pub mod upload;
