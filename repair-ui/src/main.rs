mod app;

pub mod components {
    pub mod customers;
    pub mod dashboard;
    pub mod devices;
    pub mod header;
    pub mod list;
    pub mod repair_modal;
    pub mod sidebar;
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount_to_body(app::App);
}
