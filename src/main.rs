use growbiz_frontend::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting growbiz frontend");
    yew::Renderer::<App>::new().render();
}
