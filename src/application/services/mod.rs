mod link_service;

pub use link_service::LinkService;
