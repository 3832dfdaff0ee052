#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use location_map::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
