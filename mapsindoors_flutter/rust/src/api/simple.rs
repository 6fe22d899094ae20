use log::debug;

#[flutter_rust_bridge::frb(init)]
pub fn init_app() {
    crate::core::init_logger();
    debug!("MapsIndoors flutter bridge ready");
}
