mod array_field;
mod utils;

use utils::set_panic_hook;
use wasm_bindgen::prelude::*;

pub use array_field::ArrayFieldBindings;

#[cfg(target_arch = "wasm32")]
use lol_alloc::{FreeListAllocator, LockedAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: LockedAllocator<FreeListAllocator> =
    LockedAllocator::new(FreeListAllocator::new());

#[wasm_bindgen(start)]
fn main() {
    set_panic_hook();
    // Keep library warnings visible in the browser console.
    let _ = console_log::init_with_level(log::Level::Warn);
}
