pub mod app_boot;
pub mod boot;
pub mod gateway_boot;
pub mod plan;
pub mod render;
pub mod scaffold;
