// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: msgdigester
// File: main.rs
// Author: msgdigester maintainers

use msgdigester::mdg::app;

fn main() {
	if let Err(e) = app::run() {
		eprintln!("error: {}", e);
		std::process::exit(1);
	}
}
