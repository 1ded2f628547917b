#[cfg(target_arch = "wasm32")]
fn main() {
    scholaris::web::start();
}

// The web UI only exists on wasm32.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
