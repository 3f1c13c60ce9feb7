mod app;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = app::run() {
        gloo::console::error!(format!("folio failed to start: {err:#}"));
    }
}
