mod hub_service;
mod sun_service;

pub use hub_service::HubClient;
pub use sun_service::SunService;
