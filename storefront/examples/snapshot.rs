//! Static snapshot of the landing page.
//!
//! Run with: `cargo run --example snapshot`

use organico_core::{ItemId, ViewState};
use organico_storefront::render_page;

fn main() {
    // A visitor who opened the menu and put two almonds in the cart
    let mut state = ViewState::new();
    state.toggle_menu();
    state.add_to_cart(ItemId(1));
    state.add_to_cart(ItemId(1));

    let html = render_page(&state);

    let output_path = "snapshot.html";
    std::fs::write(output_path, &html).expect("Failed to write snapshot");

    println!("Snapshot written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
