// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Captures the target platform and the checkout's git metadata.
fn main() -> shadow_rs::SdResult<()> {
	let target = |key: &str| std::env::var(key).unwrap_or_else(|_| "unknown".to_string());
	println!(
		"cargo:rustc-env=PMA_PLATFORM={}-{}",
		target("CARGO_CFG_TARGET_OS"),
		target("CARGO_CFG_TARGET_ARCH")
	);
	shadow_rs::new()
}
