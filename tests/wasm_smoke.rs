#![cfg(target_arch = "wasm32")]

use sandfall_engine::{kind_sand, kind_water, World};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_steps_and_exposes_render_buffers() {
    let Ok(mut world) = World::new(16, 16) else { panic!("world construction failed") };
    assert!(world.request_placement(0, 4, kind_sand()).is_ok());
    assert!(world.request_placement_brush(2, 10, 3, kind_water()).is_ok());
    world.step();

    assert_eq!(world.render_len(), 16 * 16);
    assert!(!world.kinds_ptr().is_null());
    assert_eq!(world.kind_at(1, 4), kind_sand());
}

#[wasm_bindgen_test]
fn unknown_kind_is_rejected() {
    let Ok(mut world) = World::new(4, 4) else { panic!("world construction failed") };
    assert!(world.request_placement(0, 0, 200).is_err());
}

#[wasm_bindgen_test]
fn config_round_trips_through_json() {
    let Ok(mut world) = World::with_config(8, 8, r#"{"seed": 3, "wake_radius": 1}"#) else {
        panic!("world construction failed")
    };
    assert!(world.config_json().contains("\"wake_radius\":1"));
    assert!(world.load_config_json("{ nope").is_err());
}
